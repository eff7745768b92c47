//! Keyed substitution cipher trait

use crate::alphabet::AlphabetRange;
use crate::ciphers::vigenere::{range_key_shifts, shift_in_range};
use crate::ciphers::Ciphers;
use crate::error::Result;

/// Trait for a keyed substitution cipher
pub trait SubstitutionCipher {
    /// Encrypts a whole text
    fn encrypt(&self, plaintext: &str) -> String;

    /// Decrypts a whole text
    fn decrypt(&self, ciphertext: &str) -> String;

    /// Returns the cipher's display name
    fn name(&self) -> &'static str;
}

/// Caesar cipher with a fixed key over a range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caesar {
    range: AlphabetRange,
    key: i64,
}

impl Caesar {
    pub fn new(range: AlphabetRange, key: i64) -> Self {
        Self { range, key }
    }

    /// The key reduced to `[0, range size)`
    pub fn shift(&self) -> u8 {
        self.range.normalize_shift(self.key)
    }
}

impl SubstitutionCipher for Caesar {
    fn encrypt(&self, plaintext: &str) -> String {
        Ciphers::caesar_encrypt(self.range, self.key, plaintext)
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        Ciphers::caesar_decrypt(self.range, self.key, ciphertext)
    }

    fn name(&self) -> &'static str {
        "Caesar"
    }
}

/// Vigenère cipher with a validated key over a range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    range: AlphabetRange,
    key: String,
    shifts: Vec<u8>,
}

impl Vigenere {
    /// Create the cipher, rejecting keys that are empty or leave the range.
    pub fn new(range: AlphabetRange, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let shifts = range_key_shifts(range, &key)?;
        Ok(Self { range, key, shifts })
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl SubstitutionCipher for Vigenere {
    fn encrypt(&self, plaintext: &str) -> String {
        shift_in_range(self.range, &self.shifts, plaintext)
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        let inverse: Vec<u8> = self
            .shifts
            .iter()
            .map(|&shift| self.range.inverse_shift(shift))
            .collect();
        shift_in_range(self.range, &inverse, ciphertext)
    }

    fn name(&self) -> &'static str {
        "Vigenère"
    }
}
