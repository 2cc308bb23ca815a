//! Input polling
//!
//! Polls macroquad once per frame and turns its immediate-mode queries into
//! the ordered event batch plus held-key snapshot a room consumes.

use std::collections::HashSet;

use macroquad::input::{
    get_keys_down, get_keys_pressed, get_keys_released, is_key_down, is_mouse_button_pressed,
    mouse_position, mouse_wheel, KeyCode, MouseButton,
};

use super::event::{InputEvent, Modifiers};
use crate::game::event::EventQueue;
use crate::math::Vector2;

/// Keys held down at the start of a frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    held: HashSet<KeyCode>,
}

impl KeySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// True if any of `keys` is held.
    pub fn any_down(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.held.contains(k))
    }

    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    pub fn keys(&self) -> impl Iterator<Item = &KeyCode> {
        self.held.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn modifiers(&self) -> Modifiers {
        Modifiers {
            ctrl: self.any_down(&[KeyCode::LeftControl, KeyCode::RightControl]),
            alt: self.any_down(&[KeyCode::LeftAlt, KeyCode::RightAlt]),
            shift: self.any_down(&[KeyCode::LeftShift, KeyCode::RightShift]),
        }
    }
}

impl FromIterator<KeyCode> for KeySnapshot {
    fn from_iter<I: IntoIterator<Item = KeyCode>>(iter: I) -> Self {
        Self { held: iter.into_iter().collect() }
    }
}

/// Modifier state straight from the window.
fn current_modifiers() -> Modifiers {
    Modifiers {
        ctrl: is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl),
        alt: is_key_down(KeyCode::LeftAlt) || is_key_down(KeyCode::RightAlt),
        shift: is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
    }
}

/// Frame-to-frame input tracker.
#[derive(Debug, Default)]
pub struct InputState {
    last_mouse: Option<Vector2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues this frame's events and returns the held-key snapshot.
    /// Call once per frame, before the room update.
    pub fn poll(&mut self, events: &mut EventQueue<InputEvent>) -> KeySnapshot {
        let modifiers = current_modifiers();

        // HashSet order is arbitrary; sort for a stable dispatch order
        let mut pressed: Vec<KeyCode> = get_keys_pressed().into_iter().collect();
        pressed.sort_by_key(|k| *k as u16);
        for key in pressed {
            events.send(InputEvent::KeyDown { key, modifiers });
        }

        let mut released: Vec<KeyCode> = get_keys_released().into_iter().collect();
        released.sort_by_key(|k| *k as u16);
        for key in released {
            events.send(InputEvent::KeyUp { key, modifiers });
        }

        let position = Vector2::from(mouse_position());
        let delta = self.last_mouse.map_or(Vector2::ZERO, |last| position - last);
        if delta != Vector2::ZERO {
            events.send(InputEvent::MouseMove { position, delta });
        }
        self.last_mouse = Some(position);

        let buttons = [
            (MouseButton::Left, 1),
            (MouseButton::Middle, 2),
            (MouseButton::Right, 3),
        ];
        for (button, index) in buttons {
            if is_mouse_button_pressed(button) {
                events.send(InputEvent::MouseDown { button: index, position });
            }
        }

        let (_, wheel_y) = mouse_wheel();
        if wheel_y > 0.0 {
            events.send(InputEvent::MouseDown { button: 4, position });
        } else if wheel_y < 0.0 {
            events.send(InputEvent::MouseDown { button: 5, position });
        }

        get_keys_down().into_iter().collect()
    }
}
