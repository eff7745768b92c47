//! Vigenère key recovery: key-length estimation followed by a Caesar attack
//! on every column

use crate::ciphers::Ciphers;

use super::caesar::crack_caesar;
use super::coincidence::{best_key_length, key_length_scores, reduce_key_length};
use super::cosets::cosets;

/// Outcome of [`crack_vigenere`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereCrack {
    /// Recovered key in uppercase
    pub key: String,
    /// Length of `key`
    pub key_length: usize,
    /// Length with the highest average IC, a multiple of `key_length`
    pub estimated_length: usize,
    pub plaintext: String,
}

/// Best Caesar shift of every column.
fn column_shifts(ciphertext: &str, key_length: usize) -> Vec<u8> {
    cosets(ciphertext, key_length.max(1))
        .iter()
        .map(|column| crack_caesar(column).shift)
        .collect()
}

/// Recovers one key letter per column for a known key length.
///
/// Column `i` is cracked as a Caesar cipher and contributes `'A' + shift`.
/// A `key_length` of 0 is treated as 1.
pub fn recover_key(ciphertext: &str, key_length: usize) -> String {
    column_shifts(ciphertext, key_length)
        .into_iter()
        .map(|shift| (b'A' + shift) as char)
        .collect()
}

/// Shortest prefix of `key` that repeats exactly to form the whole key.
///
/// `"KEYKEYKEY"` reduces to `"KEY"`; a key that is not an exact repetition
/// is returned unchanged.
pub fn shortest_period(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let period = (1..=chars.len())
        .find(|&p| chars.len() % p == 0 && chars.chunks(p).all(|chunk| chunk == &chars[..p]))
        .unwrap_or(chars.len());

    chars[..period].iter().collect()
}

/// Breaks a Vigenère ciphertext without knowing the key.
///
/// 1. Estimate the key length with the average Index of Coincidence over
///    `1..=max_key_length`, first strictly greater wins
///    ([`estimate_key_length`](super::coincidence::estimate_key_length)).
/// 2. The estimate is often a multiple of the real period, whose columns are
///    too short to crack reliably. [`reduce_key_length`] picks the smallest
///    divisor of the estimate whose average IC is within
///    [`DIVISOR_IC_RATIO`](super::coincidence::DIVISOR_IC_RATIO) of it.
/// 3. Split the letters into that many columns and crack each one as a
///    Caesar cipher; a key that still repeats exactly is reduced with
///    [`shortest_period`].
/// 4. Decrypt the full text, keeping case and every non-letter in place.
///
/// # Example
///
/// ```rust
/// use classic_ciphers::{crack_vigenere, Ciphers, DEFAULT_MAX_KEY_LENGTH};
///
/// let plaintext = "Call me Ishmael. Some years ago, never mind how long precisely, \
///     having little or no money in my purse, and nothing particular to interest me \
///     on shore, I thought I would sail about a little and see the watery part of the world.";
/// let ciphertext = Ciphers::vigenere_encrypt_letters("LEMON", plaintext)?;
///
/// let cracked = crack_vigenere(&ciphertext, DEFAULT_MAX_KEY_LENGTH);
/// assert_eq!(cracked.key, "LEMON");
/// assert_eq!(cracked.plaintext, plaintext);
/// # Ok::<(), classic_ciphers::CipherError>(())
/// ```
pub fn crack_vigenere(ciphertext: &str, max_key_length: usize) -> VigenereCrack {
    let scores = key_length_scores(ciphertext, max_key_length);
    let estimated_length = best_key_length(&scores);
    let period = reduce_key_length(&scores, estimated_length);

    let key = shortest_period(&recover_key(ciphertext, period));
    let shifts: Vec<u8> = key.bytes().map(|letter| letter - b'A').collect();

    VigenereCrack {
        key_length: key.len(),
        estimated_length,
        plaintext: Ciphers::vigenere_decrypt_letter_shifts(&shifts, ciphertext),
        key,
    }
}
