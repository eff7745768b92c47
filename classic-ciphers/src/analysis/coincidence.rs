//! Index of Coincidence and Vigenère key-length estimation

use super::cosets::cosets;
use super::frequency::letter_counts;

/// Longest key length examined when the caller has no better bound
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// Average Index of Coincidence across the columns of one candidate key length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyLengthScore {
    pub length: usize,
    pub average_ic: f64,
}

/// Calculates the Index of Coincidence (IC) for the given text.
///
/// This is the probability that two letters drawn without replacement are
/// equal: `sum(count * (count - 1)) / (n * (n - 1))`, case-insensitive over
/// ASCII letters.
///
/// # Returns
///
/// The IC value (0.0 if text has < 2 letters).
pub fn index_of_coincidence(text: &str) -> f64 {
    let counts = letter_counts(text);
    let total: u64 = counts.iter().map(|&count| u64::from(count)).sum();

    if total < 2 {
        return 0.0;
    }

    let numerator: u64 = counts
        .iter()
        .map(|&count| u64::from(count) * u64::from(count.saturating_sub(1)))
        .sum();

    numerator as f64 / (total * (total - 1)) as f64
}

/// Average IC for every candidate key length in `1..=max_length`.
///
/// For each length the letters are split into columns with
/// [`cosets`]; empty columns are left out of the average. A length whose
/// columns are all empty scores 0. A `max_length` of 0 is treated as 1.
pub fn key_length_scores(text: &str, max_length: usize) -> Vec<KeyLengthScore> {
    (1..=max_length.max(1))
        .map(|length| {
            let ics: Vec<f64> = cosets(text, length)
                .iter()
                .filter(|column| !column.is_empty())
                .map(|column| index_of_coincidence(column))
                .collect();

            let average_ic = if ics.is_empty() {
                0.0
            } else {
                ics.iter().sum::<f64>() / ics.len() as f64
            };

            KeyLengthScore { length, average_ic }
        })
        .collect()
}

/// Estimates the Vigenère key length of `text`.
///
/// Returns the candidate in `1..=max_length` with the highest average IC.
/// Only a strictly greater average replaces the incumbent, so ties resolve
/// to the shortest length. Text without letters yields 1.
///
/// Keys longer than `max_length` cannot be found; the best length inside
/// the cap is returned instead. Exact multiples of the true length score
/// about as well as the length itself and often win; see
/// [`reduce_key_length`].
pub fn estimate_key_length(text: &str, max_length: usize) -> usize {
    best_key_length(&key_length_scores(text, max_length))
}

/// Length with the highest average IC in `scores`, first strictly greater wins.
pub fn best_key_length(scores: &[KeyLengthScore]) -> usize {
    let mut best = KeyLengthScore {
        length: 1,
        average_ic: 0.0,
    };

    for &candidate in scores {
        if candidate.average_ic > best.average_ic {
            best = candidate;
        }
    }

    best.length
}

/// A divisor of the estimated length is accepted when its average IC
/// reaches this fraction of the estimate's average IC.
pub const DIVISOR_IC_RATIO: f64 = 0.85;

/// Shrinks an estimated key length to the smallest divisor that explains
/// the columns equally well.
///
/// Every divisor `d` of `estimated` is tried in ascending order; the first
/// whose average IC is at least [`DIVISOR_IC_RATIO`] times that of
/// `estimated` is returned. `estimated` always qualifies, so the result
/// divides it. A divisor that is not the key period splits letters enciphered
/// under different key letters into one column, which pulls its IC towards
/// that of random text and keeps it below the threshold. Keys whose letters
/// repeat at positions congruent modulo a divisor (e.g. the two `E`s of
/// `SECRET` modulo 3) can still pass at that divisor on short texts.
///
/// `scores` must come from [`key_length_scores`] and cover `1..=estimated`.
pub fn reduce_key_length(scores: &[KeyLengthScore], estimated: usize) -> usize {
    let ic_at = |length: usize| {
        scores
            .iter()
            .find(|score| score.length == length)
            .map_or(0.0, |score| score.average_ic)
    };
    let threshold = DIVISOR_IC_RATIO * ic_at(estimated);

    (1..=estimated.max(1))
        .filter(|divisor| estimated % divisor == 0)
        .find(|&divisor| ic_at(divisor) >= threshold)
        .unwrap_or(estimated.max(1))
}
