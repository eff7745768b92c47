//! Column partitioning of ciphertext letters

/// Number of ASCII letters in `text`.
pub fn letter_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii_alphabetic).count()
}

/// Splits the letters of `text` into `key_length` columns.
///
/// Column `i` holds the letters whose index among the letters of `text`
/// (not their raw position) is congruent to `i` modulo `key_length`, in
/// their original order and case. Non-letters are skipped so separators
/// cannot shift later letters into another column. Columns may be empty
/// when the text has fewer letters than `key_length`.
pub fn cosets(text: &str, key_length: usize) -> Vec<String> {
    let mut columns = vec![String::new(); key_length];

    if key_length == 0 {
        return columns;
    }

    for (i, c) in text.chars().filter(char::is_ascii_alphabetic).enumerate() {
        columns[i % key_length].push(c);
    }

    columns
}
