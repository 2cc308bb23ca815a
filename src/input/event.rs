//! Discrete input events
//!
//! Window-level input arrives as a per-frame, ordered batch of
//! [`InputEvent`]s. Mouse coordinates are window (view-relative) pixels;
//! the room converts them into room space before dispatch.

use macroquad::input::KeyCode;

use crate::math::Vector2;

/// Modifier keys held when a key event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { ctrl: false, alt: false, shift: false };

    pub fn new(ctrl: bool, alt: bool, shift: bool) -> Self {
        Self { ctrl, alt, shift }
    }

    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::NONE }
    }

    pub fn alt() -> Self {
        Self { alt: true, ..Self::NONE }
    }

    pub fn shift() -> Self {
        Self { shift: true, ..Self::NONE }
    }

    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.alt || self.shift)
    }
}

/// Mouse buttons by their window-system index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left = 1,
    Middle = 2,
    Right = 3,
    WheelUp = 4,
    WheelDown = 5,
}

impl PointerButton {
    /// Maps a 1-based button index, `None` outside 1..=5.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(PointerButton::Left),
            2 => Some(PointerButton::Middle),
            3 => Some(PointerButton::Right),
            4 => Some(PointerButton::WheelUp),
            5 => Some(PointerButton::WheelDown),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// A pointer location in both coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    /// Room (world) coordinates
    pub room: Vector2,
    /// Coordinates relative to the view's top-left corner
    pub view: Vector2,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown { key: KeyCode, modifiers: Modifiers },
    KeyUp { key: KeyCode, modifiers: Modifiers },
    /// Pointer moved to `position` (view pixels) by `delta`
    MouseMove { position: Vector2, delta: Vector2 },
    /// Button `button` (1-5) pressed at `position` (view pixels)
    MouseDown { button: u8, position: Vector2 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_button_index_round_trip() {
        for index in 1..=5 {
            let button = PointerButton::from_index(index).unwrap();
            assert_eq!(button.index(), index);
        }
        assert_eq!(PointerButton::from_index(0), None);
        assert_eq!(PointerButton::from_index(6), None);
    }

    #[test]
    fn test_modifiers() {
        assert!(Modifiers::NONE.is_empty());
        assert!(!Modifiers::shift().is_empty());
        assert_eq!(Modifiers::new(true, false, false), Modifiers::ctrl());
    }
}
