//! Input tokenization.
//!
//! Converts raw player input into lowercase words.

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into words.
    ///
    /// - Converts words to lowercase
    /// - Splits on any run of whitespace
    /// - Keeps punctuation, so `?` survives as a word of its own
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        input
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }
}
