//! Analysis pipeline combining a tokenizer with token filters.
//!
//! ```text
//! Raw Content → Tokenizer → Filter 1 → ... → Filter N → TokenStream
//! ```
//!
//! Filters run in the order they were added. Sentence spans are rebuilt after
//! the last filter, so filters are free to drop tokens.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use seoscribe::analysis::analyzer::ContentAnalyzer;
//! use seoscribe::analysis::token_filter::stop::StopFilter;
//!
//! let analyzer = ContentAnalyzer::standard()
//!     .add_filter(Arc::new(StopFilter::new()))
//!     .with_name("content_no_stop");
//!
//! let stream = analyzer.analyze("The Quick fox. And the dog!");
//! let words: Vec<&str> = stream.words().collect();
//! assert_eq!(words, vec!["quick", "fox", "dog"]);
//! assert_eq!(stream.sentence_count(), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::sentence::SentenceTokenizer;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct ContentAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl ContentAnalyzer {
    /// Create a new analyzer with the given tokenizer and no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        ContentAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// The default analyzer: sentence tokenizer followed by lowercasing.
    pub fn standard() -> Self {
        Self::new(Arc::new(SentenceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("standard")
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the analyzer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the full pipeline over the content.
    pub fn analyze(&self, text: &str) -> TokenStream {
        let stream = self.tokenizer.tokenize(text);
        if self.filters.is_empty() {
            return stream;
        }

        let mut tokens = stream.into_tokens();
        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        TokenStream::from_tokens(tokens)
    }
}

impl Default for ContentAnalyzer {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for ContentAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::stop::StopFilter;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = ContentAnalyzer::standard();
        let stream = analyzer.analyze("Hello World. SEO Wins!");

        let words: Vec<&str> = stream.words().collect();
        assert_eq!(words, vec!["hello", "world", "seo", "wins"]);
        assert_eq!(stream.sentence_word_counts(), vec![2, 2]);
        assert_eq!(analyzer.name(), "standard");
    }

    #[test]
    fn test_removing_filter_rebuilds_spans() {
        let analyzer = ContentAnalyzer::standard().add_filter(Arc::new(StopFilter::new()));
        let stream = analyzer.analyze("The cat. The. A dog ran");

        // The middle sentence loses its only word and disappears.
        assert_eq!(stream.sentence_word_counts(), vec![1, 2]);
        let covered: usize = stream.sentence_word_counts().iter().sum();
        assert_eq!(covered, stream.word_count());
    }

    #[test]
    fn test_marking_filter_keeps_tokens() {
        let analyzer = ContentAnalyzer::standard()
            .add_filter(Arc::new(StopFilter::new().remove_stopped(false)));
        let stream = analyzer.analyze("The cat and the hat");

        assert_eq!(stream.word_count(), 5);
        let stopped: Vec<bool> = stream.tokens().iter().map(|t| t.is_stopped()).collect();
        assert_eq!(stopped, vec![true, false, true, true, false]);
    }

    #[test]
    fn test_debug_lists_filters() {
        let analyzer = ContentAnalyzer::standard();
        let debug = format!("{analyzer:?}");
        assert!(debug.contains("sentence"));
        assert!(debug.contains("lowercase"));
    }
}
