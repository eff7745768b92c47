//! Contiguous ASCII character ranges that the shift ciphers operate over

use std::fmt;

use crate::error::{CipherError, Result};

/// An inclusive range of ASCII characters forming a substitution alphabet.
///
/// Characters inside the range are shifted modulo [`AlphabetRange::size`];
/// everything else passes through the ciphers unchanged.
///
/// # Example
///
/// ```rust
/// use classic_ciphers::AlphabetRange;
///
/// let digits = AlphabetRange::new('0', '9')?;
/// assert_eq!(digits.size(), 10);
/// assert!(digits.contains('7'));
/// assert!(!digits.contains('a'));
/// # Ok::<(), classic_ciphers::CipherError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlphabetRange {
    low: u8,
    high: u8,
}

impl AlphabetRange {
    /// `'A'..='Z'`
    pub const UPPERCASE: AlphabetRange = AlphabetRange { low: b'A', high: b'Z' };

    /// `'a'..='z'`
    pub const LOWERCASE: AlphabetRange = AlphabetRange { low: b'a', high: b'z' };

    /// Every printable, non-space ASCII character (`'!'..='~'`)
    pub const PRINTABLE: AlphabetRange = AlphabetRange { low: b'!', high: b'~' };

    /// Create a range from its inclusive bounds.
    ///
    /// Fails when `low > high` or when either bound is not ASCII.
    pub fn new(low: char, high: char) -> Result<Self> {
        if !low.is_ascii() || !high.is_ascii() || low > high {
            return Err(CipherError::InvalidRange { low, high });
        }

        Ok(Self {
            low: low as u8,
            high: high as u8,
        })
    }

    pub fn low(&self) -> char {
        self.low as char
    }

    pub fn high(&self) -> char {
        self.high as char
    }

    /// Number of characters in the range (`high - low + 1`)
    pub fn size(&self) -> u8 {
        self.high - self.low + 1
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && (self.low..=self.high).contains(&(c as u8))
    }

    /// Offset of an in-range character from the low bound.
    pub fn offset(&self, c: char) -> Option<u8> {
        self.contains(c).then(|| c as u8 - self.low)
    }

    /// Map any integer key onto its equivalent shift in `[0, size)`.
    pub fn normalize_shift(&self, key: i64) -> u8 {
        key.rem_euclid(i64::from(self.size())) as u8
    }

    /// The shift that undoes `shift`.
    pub fn inverse_shift(&self, shift: u8) -> u8 {
        let size = u16::from(self.size());
        ((size - u16::from(shift) % size) % size) as u8
    }

    /// Shift an in-range character forward by `shift` positions, wrapping
    /// around the range. `c` must be inside the range.
    pub(crate) fn shift(&self, c: char, shift: u8) -> char {
        let size = u16::from(self.size());
        let offset = u16::from(c as u8 - self.low);
        let shifted = (offset + u16::from(shift)) % size;
        (self.low + shifted as u8) as char
    }
}

impl fmt::Display for AlphabetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}..={:?}", self.low(), self.high())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_range() {
        let result = AlphabetRange::new('Z', 'A');
        assert_eq!(result, Err(CipherError::InvalidRange { low: 'Z', high: 'A' }));
    }

    #[test]
    fn test_rejects_non_ascii_bounds() {
        assert!(AlphabetRange::new('A', 'ä').is_err());
    }

    #[test]
    fn test_single_character_range() {
        let range = AlphabetRange::new('x', 'x').unwrap();
        assert_eq!(range.size(), 1);
        assert_eq!(range.normalize_shift(12345), 0);
        assert_eq!(range.shift('x', 0), 'x');
    }

    #[test]
    fn test_normalize_shift() {
        let range = AlphabetRange::UPPERCASE;
        assert_eq!(range.normalize_shift(0), 0);
        assert_eq!(range.normalize_shift(26), 0);
        assert_eq!(range.normalize_shift(-1), 25);
        assert_eq!(range.normalize_shift(-56), 22);
        assert_eq!(range.normalize_shift(i64::MIN), range.normalize_shift(i64::MIN + 26));
    }

    #[test]
    fn test_inverse_shift() {
        let range = AlphabetRange::UPPERCASE;
        assert_eq!(range.inverse_shift(0), 0);
        assert_eq!(range.inverse_shift(3), 23);
        assert_eq!(range.shift(range.shift('Q', 3), range.inverse_shift(3)), 'Q');
    }

    #[test]
    fn test_widest_ascii_range() {
        let range = AlphabetRange::new('\0', '\u{7f}').unwrap();
        assert_eq!(range.size(), 128);
        assert_eq!(range.shift('\u{7f}', 1), '\0');
    }

    #[test]
    fn test_display() {
        assert_eq!(AlphabetRange::UPPERCASE.to_string(), "'A'..='Z'");
    }
}
