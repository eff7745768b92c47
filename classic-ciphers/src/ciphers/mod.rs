//! Shift cipher primitives

pub mod caesar;
pub mod vigenere;

use crate::alphabet::AlphabetRange;

/// Main struct for the cipher primitives
///
/// The Caesar and Vigenère operations live in separate impl blocks, one per
/// submodule.
pub struct Ciphers;

/// Range an ASCII letter belongs to, keeping its case.
pub(crate) fn letter_range(c: char) -> Option<AlphabetRange> {
    if c.is_ascii_uppercase() {
        Some(AlphabetRange::UPPERCASE)
    } else if c.is_ascii_lowercase() {
        Some(AlphabetRange::LOWERCASE)
    } else {
        None
    }
}

/// Shift every character that `range_of` places in a range.
///
/// `next_shift` receives the index of the character among the shifted ones
/// (not its position in `text`), so characters left untouched never consume
/// a key position.
pub(crate) fn shift_text<R, S>(text: &str, range_of: R, mut next_shift: S) -> String
where
    R: Fn(char) -> Option<AlphabetRange>,
    S: FnMut(usize) -> u8,
{
    let mut result = String::with_capacity(text.len());
    let mut index = 0;

    for c in text.chars() {
        match range_of(c) {
            Some(range) => {
                result.push(range.shift(c, next_shift(index)));
                index += 1;
            }
            None => result.push(c),
        }
    }

    result
}
