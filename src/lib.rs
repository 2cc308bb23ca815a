//! spacegame: a small 2D game engine core
//!
//! Frame-stepped simulation on top of macroquad:
//! - `math`: 2D vectors and geometry helpers
//! - `anim`: parametric paths and per-attribute playback
//! - `shape`: polygons, circles and SAT overlap tests
//! - `game`: actors, behaviors, the view and the room that steps them
//! - `input`: window input as events, chords and held keys
//! - `asset`, `config`: resource registry and RON configuration

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod anim;
pub mod asset;
pub mod config;
pub mod game;
pub mod input;
pub mod math;
pub mod shape;
