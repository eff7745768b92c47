//! Search bounds for Vigenère key-length estimation

use crate::analysis::coincidence::DEFAULT_MAX_KEY_LENGTH;
use crate::analysis::cosets::letter_count;

/// Upper bound on the key lengths tried by the estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLengthCap {
    /// Always search `1..=n`
    Fixed(usize),
    /// Search `1..=letters / divisor`, at least 1
    Scaled { divisor: usize },
}

impl Default for KeyLengthCap {
    fn default() -> Self {
        KeyLengthCap::Fixed(DEFAULT_MAX_KEY_LENGTH)
    }
}

impl KeyLengthCap {
    /// Concrete cap for a text with `letters` ASCII letters.
    pub fn resolve(&self, letters: usize) -> usize {
        match *self {
            KeyLengthCap::Fixed(max) => max.max(1),
            KeyLengthCap::Scaled { divisor } => (letters / divisor.max(1)).max(1),
        }
    }

    /// Concrete cap for `text`.
    pub fn resolve_for(&self, text: &str) -> usize {
        self.resolve(letter_count(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fixed_twenty() {
        assert_eq!(KeyLengthCap::default(), KeyLengthCap::Fixed(20));
        assert_eq!(KeyLengthCap::default().resolve(5), 20);
    }

    #[test]
    fn test_scaled_cap() {
        let cap = KeyLengthCap::Scaled { divisor: 20 };
        assert_eq!(cap.resolve(319), 15);
        assert_eq!(cap.resolve(19), 1);
        assert_eq!(cap.resolve(0), 1);
    }

    #[test]
    fn test_degenerate_values() {
        assert_eq!(KeyLengthCap::Fixed(0).resolve(100), 1);
        assert_eq!(KeyLengthCap::Scaled { divisor: 0 }.resolve(7), 7);
    }

    #[test]
    fn test_resolve_for_text() {
        let cap = KeyLengthCap::Scaled { divisor: 2 };
        assert_eq!(cap.resolve_for("ab, cd; ef 12"), 3);
    }
}
