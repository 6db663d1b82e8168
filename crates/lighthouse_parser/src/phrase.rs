//! Object phrase representation and matching.
//!
//! Handles phrases like "the crystal lens" or "oil on lantern". Articles are
//! removed word by word, so "banana" keeps its letters and "a" alone vanishes.

use std::fmt;

/// Words dropped from an object phrase.
pub const ARTICLES: [&str; 3] = ["the", "a", "an"];

/// The words after the verb, minus articles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectPhrase {
    words: Vec<String>,
    text: String,
}

impl ObjectPhrase {
    /// Builds a phrase from lowercase words, dropping articles.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !ARTICLES.contains(&w.as_str()))
            .collect();
        let text = words.join(" ");
        Self { words, text }
    }

    /// Returns the phrase joined by single spaces.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if nothing but articles (or nothing at all) followed the verb.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the individual words.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the first word, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Returns the phrase as a content key: spaces become underscores.
    #[must_use]
    pub fn key(&self) -> String {
        self.words.join("_")
    }

    /// Returns true if the whole phrase equals one of `candidates`.
    #[must_use]
    pub fn is_any(&self, candidates: &[&str]) -> bool {
        candidates.contains(&self.text.as_str())
    }

    /// Returns true if any keyword appears as a whole word (or run of words).
    ///
    /// Keywords may contain spaces or underscores; both match a run of
    /// consecutive words, so `small_key` matches "use small key".
    #[must_use]
    pub fn mentions(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.mentions_one(keyword))
    }

    fn mentions_one(&self, keyword: &str) -> bool {
        let parts: Vec<&str> = keyword
            .split(|c: char| c == ' ' || c == '_')
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            return false;
        }
        self.words
            .windows(parts.len())
            .any(|window| window.iter().zip(&parts).all(|(w, p)| w == p))
            || self.words.iter().any(|w| w == keyword)
    }

    /// Returns a copy with a leading `word` removed, if present.
    #[must_use]
    pub fn without_leading(&self, word: &str) -> Self {
        match self.first() {
            Some(first) if first == word => Self::from_words(self.words[1..].iter().cloned()),
            _ => self.clone(),
        }
    }
}

impl fmt::Display for ObjectPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
