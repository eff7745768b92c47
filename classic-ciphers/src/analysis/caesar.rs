//! Caesar shift recovery by frequency scoring

use crate::ciphers::Ciphers;

use super::frequency::score;

const ALPHABET_SIZE: u8 = 26;

/// Outcome of [`crack_caesar`]
#[derive(Debug, Clone, PartialEq)]
pub struct CaesarCrack {
    /// Shift in `0..26` that was used to encrypt
    pub shift: u8,
    /// Frequency score of the decryption
    pub score: f64,
    pub plaintext: String,
}

/// One decryption attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaesarCandidate {
    pub shift: u8,
    pub score: f64,
}

fn candidates(ciphertext: &str) -> impl Iterator<Item = CaesarCandidate> + '_ {
    (0..ALPHABET_SIZE).map(move |shift| {
        let decrypted = Ciphers::caesar_decrypt_letters(i64::from(shift), ciphertext);
        CaesarCandidate {
            shift,
            score: score(&decrypted),
        }
    })
}

/// Recovers the shift of a Caesar-encrypted text.
///
/// Every shift in `0..26` is tried by decrypting the whole text (case is
/// preserved, non-letters pass through) and scoring the result against
/// English letter frequencies. The search starts from shift 0 with a score
/// of 0 and only a strictly higher score replaces the incumbent, so ties go
/// to the lowest shift and text without letters reports shift 0.
///
/// Short texts often do not carry enough statistics for the right shift to
/// win; the result is still deterministic.
///
/// # Example
///
/// ```rust
/// use classic_ciphers::{crack_caesar, Ciphers};
///
/// let plaintext = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG".repeat(3);
/// let ciphertext = Ciphers::caesar_encrypt_letters(7, &plaintext);
///
/// let cracked = crack_caesar(&ciphertext);
/// assert_eq!(cracked.shift, 7);
/// assert_eq!(cracked.plaintext, plaintext);
/// ```
pub fn crack_caesar(ciphertext: &str) -> CaesarCrack {
    let mut best = CaesarCandidate {
        shift: 0,
        score: 0.0,
    };

    for candidate in candidates(ciphertext) {
        if candidate.score > best.score {
            best = candidate;
        }
    }

    CaesarCrack {
        shift: best.shift,
        score: best.score,
        plaintext: Ciphers::caesar_decrypt_letters(i64::from(best.shift), ciphertext),
    }
}

/// All 26 shifts ordered from best to worst score.
///
/// Equal scores keep ascending shift order, so the first entry always
/// agrees with [`crack_caesar`] when any letter is present.
pub fn rank_shifts(ciphertext: &str) -> Vec<CaesarCandidate> {
    let mut ranked: Vec<CaesarCandidate> = candidates(ciphertext).collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
