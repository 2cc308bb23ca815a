//! Keyframe-style attribute animation
//!
//! Paths describe *where* a value goes over a normalized ratio; a
//! `PathState` tracks *when*, stepping once per frame with loop, finite
//! repeat and one-shot playback.

pub mod path;
pub mod state;

pub use path::{Path, Path1d, Path2d, PathCircle, PathError, PathTone, PathValue, ValueKind};
pub use state::{AssignMode, PathState, REPEAT_FOREVER};
