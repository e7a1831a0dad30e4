//! Label helpers - lookup keys and the masked text shown for teased nodes.

/// Character drawn in place of each letter or digit of a hidden label.
pub const MASK_CHAR: char = '●';

/// Normalize a label into its lookup key.
///
/// Only case is folded. Whitespace is kept exactly as the caller supplied it.
pub fn normalize(label: &str) -> String {
    label.to_lowercase()
}

/// Build the placeholder shown while a node is teased.
///
/// ASCII letters and digits are masked; spaces and punctuation stay so the
/// player can see the shape of the answer.
pub fn placeholder(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { MASK_CHAR } else { c })
        .collect()
}

/// Build the hover hint for a label: the length of each space-separated word.
pub fn title_hint(label: &str) -> String {
    label
        .split(' ')
        .map(|word| word.chars().count().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
