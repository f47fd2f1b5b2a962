//! On-screen keyboard hints
//!
//! Each letter remembers the best feedback it has earned this round. A hint
//! only ever moves up in rank, so a green key never turns yellow or grey.

use crate::core::KeyStatus;

/// Keyboard rows as drawn on screen
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best status per letter a-z
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyHints {
    statuses: [KeyStatus; 26],
}

impl KeyHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current hint for `letter`; non-letters are always `Untried`
    #[must_use]
    pub fn get(&self, letter: char) -> KeyStatus {
        Self::index(letter).map_or(KeyStatus::Untried, |i| self.statuses[i])
    }

    /// Raise `letter` to `status` if that outranks its current hint
    ///
    /// Returns true if the hint changed.
    pub fn raise(&mut self, letter: char, status: KeyStatus) -> bool {
        match Self::index(letter) {
            Some(i) if status > self.statuses[i] => {
                self.statuses[i] = status;
                true
            }
            _ => false,
        }
    }

    /// All letters with their hints, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (char, KeyStatus)> + '_ {
        ('a'..='z').zip(self.statuses.iter().copied())
    }

    fn index(letter: char) -> Option<usize> {
        let lower = letter.to_ascii_lowercase();
        lower
            .is_ascii_lowercase()
            .then(|| usize::from(lower as u8 - b'a'))
    }
}
