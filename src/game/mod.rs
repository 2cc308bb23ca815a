//! Game runtime
//!
//! Actors, their behaviors, the view and the room that steps them all once
//! per frame.
//!
//! Key concepts:
//! - Actor: a shape with motion, path animations and an optional command
//! - Behavior: per-actor callbacks with default no-op bodies
//! - View: the camera rectangle, itself animatable
//! - Room: owns actors and view, runs the frame phases in a fixed order

pub mod actor;
pub mod behavior;
pub mod entity;
pub mod event;
pub mod renderer;
pub mod room;
pub mod view;

pub use actor::{Actor, Attribute, AttributePaths};
pub use behavior::{Behavior, Passive};
pub use entity::ActorId;
pub use event::EventQueue;
pub use room::{GameError, Room};
pub use view::{Anchor, Parallax, View};
