//! sentence-level filtering
use super::Filter;

/// Number of whitespace-separated words in `sentence`.
pub fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

/// Word count filter.
/// Returns `false` if provided sentence has [WordCount::min_words] words or less.
///
/// [WordCount::min_words] is 5 by default.
#[derive(Debug, Clone)]
pub struct WordCount {
    min_words: usize,
}

impl WordCount {
    /// specify a minimum word count
    pub fn with_min_words(min_words: usize) -> Self {
        Self { min_words }
    }

    /// Get a reference to the filter's min words.
    pub fn min_words(&self) -> &usize {
        &self.min_words
    }
}

impl Filter<&str> for WordCount {
    fn detect(&self, sentence: &str) -> bool {
        word_count(sentence) > self.min_words
    }
}

impl Default for WordCount {
    /// Sentences have to be longer than 5 words by default
    fn default() -> Self {
        WordCount {
            min_words: crate::config::MIN_WORDS,
        }
    }
}
