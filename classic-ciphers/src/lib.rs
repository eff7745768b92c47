//! # Classic Ciphers Library
//!
//! Caesar and Vigenère shift ciphers over configurable ASCII ranges, and
//! ciphertext-only attacks on both.
//!
//! ## Ciphers
//!
//! - **Caesar** - one fixed shift for every character in the range
//! - **Vigenère** - a repeating key, one shift per key character; the key
//!   only advances on characters inside the range
//!
//! ## Cryptanalysis
//!
//! - [`crack_caesar`] tries all 26 shifts and keeps the decryption whose
//!   letter distribution is closest to English
//! - [`crack_vigenere`] estimates the key length with the Index of
//!   Coincidence, then cracks every key column as a Caesar cipher
//!
//! ## Usage
//!
//! ```rust
//! use classic_ciphers::{AlphabetRange, Ciphers};
//!
//! let range = AlphabetRange::UPPERCASE;
//! let encrypted = Ciphers::vigenere_encrypt(range, "KEY", "HELLO")?;
//! assert_eq!(encrypted, "RIJVS");
//!
//! let decrypted = Ciphers::vigenere_decrypt(range, "KEY", &encrypted)?;
//! assert_eq!(decrypted, "HELLO");
//! # Ok::<(), classic_ciphers::CipherError>(())
//! ```
//!
//! These are teaching ciphers. They offer no security.

// Public modules
pub mod alphabet;
pub mod analysis;
pub mod cipher;
pub mod ciphers;
pub mod config;
pub mod error;

// Re-exports for easy access
pub use alphabet::AlphabetRange;
pub use analysis::{
    crack_caesar, crack_vigenere, estimate_key_length, index_of_coincidence, score,
    CaesarCrack, VigenereCrack, DEFAULT_MAX_KEY_LENGTH,
};
pub use cipher::{Caesar, SubstitutionCipher, Vigenere};
pub use ciphers::Ciphers;
pub use config::KeyLengthCap;
pub use error::{CipherError, Result};
