//! Vigenère (repeating key) cipher

use crate::alphabet::AlphabetRange;
use crate::error::{CipherError, Result};

use super::{letter_range, shift_text, Ciphers};

impl Ciphers {
    /// Vigenère encryption over `range`
    ///
    /// The i-th in-range character is shifted by `key[i mod len] - low`.
    /// Out-of-range characters are copied through and do not advance the key.
    ///
    /// # Errors
    ///
    /// * [`CipherError::EmptyKey`] if `key` is empty
    /// * [`CipherError::KeyOutOfRange`] if a key character lies outside `range`
    ///
    /// # Example
    ///
    /// ```rust
    /// use classic_ciphers::{AlphabetRange, Ciphers};
    ///
    /// let cipher = Ciphers::vigenere_encrypt(AlphabetRange::UPPERCASE, "KEY", "HELLO, WORLD!")?;
    /// assert_eq!(cipher, "RIJVS, UYVJN!");
    /// # Ok::<(), classic_ciphers::CipherError>(())
    /// ```
    pub fn vigenere_encrypt(range: AlphabetRange, key: &str, plaintext: &str) -> Result<String> {
        let shifts = range_key_shifts(range, key)?;
        Ok(shift_in_range(range, &shifts, plaintext))
    }

    /// Vigenère decryption over `range`
    pub fn vigenere_decrypt(range: AlphabetRange, key: &str, ciphertext: &str) -> Result<String> {
        let shifts: Vec<u8> = range_key_shifts(range, key)?
            .into_iter()
            .map(|shift| range.inverse_shift(shift))
            .collect();
        Ok(shift_in_range(range, &shifts, ciphertext))
    }

    /// Case-preserving Vigenère encryption of ASCII letters.
    ///
    /// Key letters are case-insensitive (`a` and `A` both mean a shift of 0)
    /// and every ASCII letter of the text consumes one key position.
    pub fn vigenere_encrypt_letters(key: &str, plaintext: &str) -> Result<String> {
        let shifts = letter_key_shifts(key)?;
        Ok(vigenere_shift(plaintext, letter_range, &shifts))
    }

    /// Case-preserving Vigenère decryption of ASCII letters.
    pub fn vigenere_decrypt_letters(key: &str, ciphertext: &str) -> Result<String> {
        let shifts = letter_key_shifts(key)?;
        Ok(Self::vigenere_decrypt_letter_shifts(&shifts, ciphertext))
    }

    /// Case-preserving Vigenère decryption with the key given as shifts.
    ///
    /// Shift `s` stands for the key letter `'A' + s`; values are taken
    /// modulo 26. An empty slice leaves the text unchanged.
    pub fn vigenere_decrypt_letter_shifts(shifts: &[u8], ciphertext: &str) -> String {
        let range = AlphabetRange::UPPERCASE;
        let inverse: Vec<u8> = shifts.iter().map(|&shift| range.inverse_shift(shift)).collect();
        vigenere_shift(ciphertext, letter_range, &inverse)
    }
}

/// Vigenère over `range` with already validated shifts.
pub(crate) fn shift_in_range(range: AlphabetRange, shifts: &[u8], text: &str) -> String {
    vigenere_shift(text, |c| range.contains(c).then_some(range), shifts)
}

fn vigenere_shift<R>(text: &str, range_of: R, shifts: &[u8]) -> String
where
    R: Fn(char) -> Option<AlphabetRange>,
{
    if shifts.is_empty() {
        return text.to_owned();
    }

    shift_text(text, range_of, |index| shifts[index % shifts.len()])
}

pub(crate) fn range_key_shifts(range: AlphabetRange, key: &str) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    key.chars()
        .map(|key_char| {
            range
                .offset(key_char)
                .ok_or(CipherError::KeyOutOfRange { key_char, range })
        })
        .collect()
}

fn letter_key_shifts(key: &str) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    key.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                Ok(c.to_ascii_uppercase() as u8 - b'A')
            } else {
                Err(CipherError::InvalidKeyCharacter(c))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('A', 'Z', "KEY", "HELLO", "RIJVS")]
    #[case('A', 'Z', "ABC", "XYZ", "XZB")]
    #[case('a', 'z', "key", "hello", "rijvs")]
    #[case('A', 'Z', "KEY", "HELLO, WORLD!", "RIJVS, UYVJN!")]
    #[case('!', '~', "KEY", "TUX", "~y2")]
    #[case('!', '~', "k3\\/", "H3L\\o Wo4rl@", "4E)j[ iLB^~{")]
    fn test_vigenere_vectors(
        #[case] low: char,
        #[case] high: char,
        #[case] key: &str,
        #[case] plaintext: &str,
        #[case] ciphertext: &str,
    ) {
        let range = AlphabetRange::new(low, high).unwrap();
        assert_eq!(Ciphers::vigenere_encrypt(range, key, plaintext).unwrap(), ciphertext);
        assert_eq!(Ciphers::vigenere_decrypt(range, key, ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn test_empty_key() {
        let result = Ciphers::vigenere_encrypt(AlphabetRange::UPPERCASE, "", "HELLO");
        assert_eq!(result, Err(CipherError::EmptyKey));
        assert_eq!(Ciphers::vigenere_decrypt_letters("", "HELLO"), Err(CipherError::EmptyKey));
    }

    #[test]
    fn test_key_out_of_range() {
        let result = Ciphers::vigenere_encrypt(AlphabetRange::UPPERCASE, "K3Y", "HELLO");
        assert_eq!(
            result,
            Err(CipherError::KeyOutOfRange {
                key_char: '3',
                range: AlphabetRange::UPPERCASE,
            })
        );
    }

    #[test]
    fn test_letters_key_must_be_alphabetic() {
        let result = Ciphers::vigenere_encrypt_letters("K Y", "HELLO");
        assert_eq!(result, Err(CipherError::InvalidKeyCharacter(' ')));
    }

    #[test]
    fn test_separators_do_not_consume_key() {
        let joined = Ciphers::vigenere_encrypt(AlphabetRange::UPPERCASE, "KEY", "HELLOWORLD").unwrap();
        let spaced = Ciphers::vigenere_encrypt(AlphabetRange::UPPERCASE, "KEY", "HELLO WORLD").unwrap();
        assert_eq!(spaced.replace(' ', ""), joined);
    }

    #[test]
    fn test_letters_preserve_case() {
        let encrypted = Ciphers::vigenere_encrypt_letters("key", "Hello, World!").unwrap();
        assert_eq!(encrypted, "Rijvs, Uyvjn!");
        assert_eq!(Ciphers::vigenere_decrypt_letters("KEY", &encrypted).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_decrypt_with_shifts() {
        let plaintext = "Hello, World!";
        let encrypted = Ciphers::vigenere_encrypt_letters("KEY", plaintext).unwrap();
        assert_eq!(Ciphers::vigenere_decrypt_letter_shifts(&[10, 4, 24], &encrypted), plaintext);
        assert_eq!(Ciphers::vigenere_decrypt_letter_shifts(&[36, 30, 50], &encrypted), plaintext);
    }

    #[test]
    fn test_empty_shifts_leave_text_unchanged() {
        assert_eq!(Ciphers::vigenere_decrypt_letter_shifts(&[], "Hello"), "Hello");
        assert_eq!(shift_in_range(AlphabetRange::UPPERCASE, &[], "HELLO"), "HELLO");
    }

    #[test]
    fn test_single_letter_key_matches_caesar() {
        let text = "Attack at dawn, hold the line.";
        let vigenere = Ciphers::vigenere_encrypt_letters("D", text).unwrap();
        assert_eq!(vigenere, Ciphers::caesar_encrypt_letters(3, text));
    }
}
