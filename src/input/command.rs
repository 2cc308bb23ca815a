//! Command chords
//!
//! A key-down event is decoded into an ordered chord: the held modifiers in
//! the fixed order ctrl, alt, shift, followed by the key itself. Only one
//! modifier pair fits in a chord, so ctrl+alt+shift collapses to ctrl+alt.

use std::fmt;

use macroquad::input::KeyCode;

use super::event::Modifiers;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Command(Vec<KeyCode>);

impl Command {
    /// Chord from an explicit key list, e.g. for matching against decoded
    /// commands.
    pub fn new(keys: &[KeyCode]) -> Self {
        Self(keys.to_vec())
    }

    /// Chord with no modifiers.
    pub fn key(key: KeyCode) -> Self {
        Self(vec![key])
    }

    /// Decodes a key press with its modifier state.
    pub fn decode(key: KeyCode, modifiers: Modifiers) -> Self {
        let mut keys = Vec::with_capacity(3);
        if modifiers.ctrl {
            keys.push(KeyCode::LeftControl);
            if modifiers.alt {
                keys.push(KeyCode::LeftAlt);
            } else if modifiers.shift {
                keys.push(KeyCode::LeftShift);
            }
        } else if modifiers.alt {
            keys.push(KeyCode::LeftAlt);
            if modifiers.shift {
                keys.push(KeyCode::LeftShift);
            }
        } else if modifiers.shift {
            keys.push(KeyCode::LeftShift);
        }
        keys.push(key);
        Self(keys)
    }

    pub fn keys(&self) -> &[KeyCode] {
        &self.0
    }

    /// The non-modifier key ending the chord.
    pub fn last_key(&self) -> Option<KeyCode> {
        self.0.last().copied()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{:?}", key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use KeyCode::*;

    #[test]
    fn test_chord_order() {
        assert_eq!(Command::decode(K, Modifiers::new(true, true, false)).keys(), &[LeftControl, LeftAlt, K]);
        assert_eq!(Command::decode(K, Modifiers::new(true, false, true)).keys(), &[LeftControl, LeftShift, K]);
        assert_eq!(Command::decode(K, Modifiers::new(false, true, true)).keys(), &[LeftAlt, LeftShift, K]);
        assert_eq!(Command::decode(K, Modifiers::shift()).keys(), &[LeftShift, K]);
        assert_eq!(Command::decode(K, Modifiers::alt()).keys(), &[LeftAlt, K]);
        assert_eq!(Command::decode(K, Modifiers::NONE).keys(), &[K]);
    }

    #[test]
    fn test_all_modifiers_collapse_to_ctrl_alt() {
        let chord = Command::decode(K, Modifiers::new(true, true, true));
        assert_eq!(chord, Command::new(&[LeftControl, LeftAlt, K]));
    }

    #[test]
    fn test_display() {
        let chord = Command::decode(S, Modifiers::ctrl());
        assert_eq!(chord.to_string(), "LeftControl+S");
        assert_eq!(chord.last_key(), Some(S));
    }
}
