//! Stop filter implementation.
//!
//! This module provides a filter that handles common functional words (stop
//! words) which carry no topical weight for keyword ranking. The default
//! English list is fixed; custom lists are supported for callers that need them.
//!
//! # Examples
//!
//! ```
//! use seoscribe::analysis::token_filter::Filter;
//! use seoscribe::analysis::token_filter::stop::StopFilter;
//! use seoscribe::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // Uses default English stop words
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2)
//! ];
//!
//! let result = filter.filter(tokens);
//!
//! // "the" is removed as a stop word
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "brown");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as",
    "at", "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
    "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most", "my",
    "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours",
    "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        DEFAULT_ENGLISH_STOP_WORDS
            .iter()
            .map(|&s| s.to_string())
            .collect(),
    )
});

/// A filter that removes or marks stop words.
///
/// Keyword extraction needs to know where stop words sit inside a sentence
/// (a phrase may not start or end on one), so the filter can keep stopped
/// tokens in place with [`remove_stopped(false)`](Self::remove_stopped).
///
/// Lookups are exact: run a [`LowercaseFilter`](super::LowercaseFilter) first.
///
/// # Examples
///
/// ```
/// use seoscribe::analysis::token_filter::Filter;
/// use seoscribe::analysis::token_filter::stop::StopFilter;
/// use seoscribe::analysis::token::Token;
///
/// // Mark as stopped but don't remove
/// let filter = StopFilter::from_words(vec!["the"]).remove_stopped(false);
/// let tokens = vec![Token::new("the", 0), Token::new("quick", 1)];
///
/// let result = filter.filter(tokens);
///
/// assert_eq!(result.len(), 2);
/// assert!(result[0].is_stopped());
/// assert!(!result[1].is_stopped());
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    ///
    /// The set is shared process-wide and never mutated after initialization.
    pub fn new() -> Self {
        StopFilter {
            stop_words: Arc::clone(&DEFAULT_ENGLISH_STOP_WORDS_SET),
            remove_stopped: true,
        }
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use seoscribe::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
            Token::new("and", 3),
            Token::new("test", 4),
        ];

        let result = filter.filter(tokens);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "test");
    }

    #[test]
    fn test_stop_filter_preserve_stopped() {
        let filter = StopFilter::from_words(vec!["the", "and"]).remove_stopped(false);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
        ];

        let result = filter.filter(tokens);

        assert_eq!(result.len(), 3);
        assert!(!result[0].is_stopped());
        assert!(result[1].is_stopped());
        assert!(!result[2].is_stopped());
    }

    #[test]
    fn test_default_list() {
        let filter = StopFilter::new();
        for word in ["the", "a", "an", "is", "and", "with"] {
            assert!(filter.is_stop_word(word), "{word} should be a stop word");
        }
        for word in ["seo", "content", "great", "rank"] {
            assert!(!filter.is_stop_word(word), "{word} should not be a stop word");
        }
        assert_eq!(filter.len(), DEFAULT_ENGLISH_STOP_WORDS.len());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
