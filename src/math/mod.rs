//! 2D math
//!
//! - `vector` - `Vector2`, the value type every other module builds on
//! - `geometry` - distance, interpolation and intersection helpers

pub mod geometry;
pub mod vector;

pub use vector::Vector2;
