//! English letter-frequency scoring

/// Relative frequency (in percent) of each letter `a..=z` in English text
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094,
    6.966, 0.153, 0.772, 4.025, 2.406, 6.749, 7.507, 1.929,
    0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150,
    1.974, 0.074,
];

/// Counts the occurrences of each ASCII letter, ignoring case.
///
/// # Returns
///
/// An array of 26 counts for letters A-Z.
pub fn letter_counts(text: &str) -> [u32; 26] {
    let mut counts: [u32; 26] = [0; 26];

    for c in text.chars().filter(char::is_ascii_alphabetic) {
        let index = (c.to_ascii_lowercase() as u8 - b'a') as usize;
        counts[index] += 1;
    }

    counts
}

/// Scores how closely `text` resembles English.
///
/// The score is the dot product of the observed letter percentages with
/// [`ENGLISH_FREQUENCIES`]; higher is more English-like. Non-letters are
/// ignored, and text without any letters scores 0.
pub fn score(text: &str) -> f64 {
    let counts = letter_counts(text);
    let total: u32 = counts.iter().sum();

    if total == 0 {
        return 0.0;
    }

    counts
        .iter()
        .zip(ENGLISH_FREQUENCIES.iter())
        .map(|(&count, &expected)| f64::from(count) / f64::from(total) * 100.0 * expected)
        .sum()
}
