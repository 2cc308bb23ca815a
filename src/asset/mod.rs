//! Loaded resources
//!
//! Textures and other resources live in an [`AssetRegistry`] owned by the
//! scene that loaded them, never in globals.

mod registry;

pub use registry::{AssetError, AssetRegistry};
