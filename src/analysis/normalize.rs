//! Sentence and token splitting for raw transcripts.
//!
//! Both splitters are pure functions of the input string. Tokens are the
//! filtered, lowercased vocabulary used by the extraction strategies; raw
//! words keep every whitespace-separated word for pace metrics.

/// Split a transcript into sentences on terminal punctuation.
///
/// Fragments of 3 characters or fewer after trimming are discarded.
pub fn sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|fragment| fragment.len() > 3)
        .map(str::to_string)
        .collect()
}

/// Split a transcript into lowercased alphanumeric tokens.
///
/// Non-alphanumeric characters become separators; tokens of 2 characters
/// or fewer are discarded.
pub fn tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() > 2)
        .map(str::to_string)
        .collect()
}

/// Split a transcript into raw whitespace-separated words, keeping stop
/// words and short words. Used for word counts and pace metrics.
pub fn raw_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
