//! Caesar (fixed shift) cipher

use crate::alphabet::AlphabetRange;

use super::{letter_range, shift_text, Ciphers};

impl Ciphers {
    /// Caesar encryption over `range`
    ///
    /// Every character `c` inside the range becomes
    /// `low + ((c - low + key) mod size)`; any integer key is accepted and
    /// normalized first. Characters outside the range are copied through.
    ///
    /// # Example
    ///
    /// ```rust
    /// use classic_ciphers::{AlphabetRange, Ciphers};
    ///
    /// let cipher = Ciphers::caesar_encrypt(AlphabetRange::UPPERCASE, 3, "HELLO, WORLD!");
    /// assert_eq!(cipher, "KHOOR, ZRUOG!");
    /// ```
    pub fn caesar_encrypt(range: AlphabetRange, key: i64, plaintext: &str) -> String {
        caesar_shift(range, range.normalize_shift(key), plaintext)
    }

    /// Caesar decryption over `range`, i.e. encryption with the negated key
    pub fn caesar_decrypt(range: AlphabetRange, key: i64, ciphertext: &str) -> String {
        let shift = range.inverse_shift(range.normalize_shift(key));
        caesar_shift(range, shift, ciphertext)
    }

    /// Case-preserving Caesar encryption of ASCII letters.
    ///
    /// Upper- and lowercase letters each wrap within their own alphabet.
    pub fn caesar_encrypt_letters(key: i64, plaintext: &str) -> String {
        let shift = AlphabetRange::UPPERCASE.normalize_shift(key);
        shift_text(plaintext, letter_range, |_| shift)
    }

    /// Case-preserving Caesar decryption of ASCII letters.
    pub fn caesar_decrypt_letters(key: i64, ciphertext: &str) -> String {
        let range = AlphabetRange::UPPERCASE;
        let shift = range.inverse_shift(range.normalize_shift(key));
        shift_text(ciphertext, letter_range, |_| shift)
    }
}

fn caesar_shift(range: AlphabetRange, shift: u8, text: &str) -> String {
    shift_text(text, |c| range.contains(c).then_some(range), |_| shift)
}
