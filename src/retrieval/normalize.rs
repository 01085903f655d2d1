/// Words shorter than this (in characters) are ignored for per-word scoring.
pub const MIN_WORD_CHARS: usize = 3;

/// Lower-cases and splits on whitespace, trimming punctuation from both ends
/// of every word. Empty leftovers are dropped.
pub fn normalize_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Words of a query that take part in per-word scoring.
pub fn qualifying_words(text: &str) -> Vec<String> {
    normalize_words(text)
        .into_iter()
        .filter(|w| w.chars().count() >= MIN_WORD_CHARS)
        .collect()
}
