//! Error types for cipher operations

use thiserror::Error;

use crate::alphabet::AlphabetRange;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Invalid alphabet range {low:?}..={high:?} (low must not exceed high, both must be ASCII)")]
    InvalidRange { low: char, high: char },

    #[error("Key cannot be empty")]
    EmptyKey,

    #[error("Key character {key_char:?} is outside the range {range}")]
    KeyOutOfRange { key_char: char, range: AlphabetRange },

    #[error("Key character {0:?} is not an ASCII letter")]
    InvalidKeyCharacter(char),
}

pub type Result<T> = std::result::Result<T, CipherError>;
