//! Ciphertext-only cryptanalysis of the shift ciphers

pub mod caesar;
pub mod coincidence;
pub mod cosets;
pub mod frequency;
pub mod vigenere;

pub use caesar::{crack_caesar, rank_shifts, CaesarCandidate, CaesarCrack};
pub use coincidence::{
    best_key_length, estimate_key_length, index_of_coincidence, key_length_scores,
    reduce_key_length, KeyLengthScore, DEFAULT_MAX_KEY_LENGTH, DIVISOR_IC_RATIO,
};
pub use cosets::{cosets, letter_count};
pub use frequency::{letter_counts, score, ENGLISH_FREQUENCIES};
pub use vigenere::{crack_vigenere, recover_key, shortest_period, VigenereCrack};
