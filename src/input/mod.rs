//! Keyboard and mouse input
//!
//! [`InputState`] polls the window into an ordered batch of [`InputEvent`]s
//! plus a [`KeySnapshot`] of held keys. Key presses are decoded into
//! [`Command`] chords before they reach actors.

pub mod command;
pub mod event;
pub mod state;

pub use command::Command;
pub use event::{InputEvent, Modifiers, PointerButton, PointerPosition};
pub use state::{InputState, KeySnapshot};
