//! Keyword extraction.
//!
//! Candidates are single words and 2-3 word phrases built from adjacent
//! words of the same sentence. Single-word candidates may not be stop words;
//! phrases may contain stop words in the middle but may not start or end on
//! one ("search engine optimization", "return on investment").
//!
//! Ranking is fully deterministic:
//!
//! 1. occurrence count, descending
//! 2. candidate length in characters, descending (more specific phrases first)
//! 3. first occurrence position, ascending
//!
//! # Examples
//!
//! ```
//! use seoscribe::seo::keywords::KeywordExtractor;
//!
//! let extractor = KeywordExtractor::new();
//! let keywords = extractor.extract(
//!     "Rust makes systems programming safe. Rust is fast.",
//!     2,
//! );
//! // "rust" occurs twice; among single occurrences the longest phrase wins.
//! assert_eq!(keywords, vec!["rust", "makes systems programming"]);
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::ContentAnalyzer;
use crate::analysis::token::Token;
use crate::analysis::token_filter::stop::StopFilter;

/// Longest phrase considered, in words.
pub const MAX_PHRASE_WORDS: usize = 3;

/// A ranked keyword or phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordCandidate {
    /// Normalized text: lowercase words joined by single spaces.
    pub text: String,
    /// Raw number of occurrences.
    pub count: usize,
    /// `count / total words`, as a fraction in `[0, 1]`.
    pub density: f64,
    /// Token position of the first occurrence.
    pub first_position: usize,
}

impl KeywordCandidate {
    /// Number of words in the candidate.
    pub fn word_count(&self) -> usize {
        self.text.split(' ').count()
    }

    fn rank(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| other.text.chars().count().cmp(&self.text.chars().count()))
            .then_with(|| self.first_position.cmp(&other.first_position))
    }
}

/// Ranks keyword candidates over lowercased, stop-word-marked tokens.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    analyzer: ContentAnalyzer,
    max_phrase_words: usize,
}

impl KeywordExtractor {
    /// Create an extractor using the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_filter(StopFilter::new())
    }

    /// Create an extractor with a custom stop filter.
    pub fn with_stop_filter(stop_filter: StopFilter) -> Self {
        let analyzer = ContentAnalyzer::standard()
            .add_filter(Arc::new(stop_filter.remove_stopped(false)))
            .with_name("keyword");

        KeywordExtractor {
            analyzer,
            max_phrase_words: MAX_PHRASE_WORDS,
        }
    }

    /// Limit phrases to at most `words` words (minimum 1).
    pub fn max_phrase_words(mut self, words: usize) -> Self {
        self.max_phrase_words = words.max(1);
        self
    }

    /// All distinct candidates in rank order.
    pub fn rank_candidates(&self, content: &str) -> Vec<KeywordCandidate> {
        let stream = self.analyzer.analyze(content);
        let total_words = stream.word_count();
        if total_words == 0 {
            return Vec::new();
        }

        let mut candidates: Vec<KeywordCandidate> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for span in stream.sentences() {
            let tokens = stream.sentence_tokens(span);
            for start in 0..tokens.len() {
                for words in 1..=self.max_phrase_words {
                    let Some(window) = tokens.get(start..start + words) else {
                        break;
                    };
                    if !is_candidate(window) {
                        continue;
                    }

                    let text = join_words(window);
                    match index.get(&text) {
                        Some(&i) => candidates[i].count += 1,
                        None => {
                            index.insert(text.clone(), candidates.len());
                            candidates.push(KeywordCandidate {
                                text,
                                count: 1,
                                density: 0.0,
                                first_position: window[0].position,
                            });
                        }
                    }
                }
            }
        }

        for candidate in &mut candidates {
            candidate.density = candidate.count as f64 / total_words as f64;
        }
        candidates.sort_by(KeywordCandidate::rank);

        log::trace!(
            "ranked {} keyword candidates over {} words",
            candidates.len(),
            total_words
        );
        candidates
    }

    /// The top `count` candidate texts. Never pads; `count = 0` is empty.
    pub fn extract(&self, content: &str, count: usize) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }
        self.rank_candidates(content)
            .into_iter()
            .take(count)
            .map(|candidate| candidate.text)
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn is_candidate(window: &[Token]) -> bool {
    match (window.first(), window.last()) {
        (Some(first), Some(last)) => !first.is_stopped() && !last.is_stopped(),
        _ => false,
    }
}

fn join_words(window: &[Token]) -> String {
    window
        .iter()
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_only() {
        let extractor = KeywordExtractor::new();
        assert!(extractor.extract("the the the a an", 5).is_empty());
        assert!(extractor.rank_candidates("the the the a an").is_empty());
    }

    #[test]
    fn test_count_zero_and_empty_content() {
        let extractor = KeywordExtractor::new();
        assert!(extractor.extract("Rust is fast", 0).is_empty());
        assert!(extractor.extract("", 5).is_empty());
        assert!(extractor.extract("   ", 5).is_empty());
    }

    #[test]
    fn test_ranking_rules() {
        let extractor = KeywordExtractor::new();
        let candidates =
            extractor.rank_candidates("SEO is great. SEO helps websites rank better. Great content wins.");

        // Count first: "great" and "seo" both occur twice, longer text wins the tie.
        assert_eq!(candidates[0].text, "great");
        assert_eq!(candidates[0].count, 2);
        assert_eq!(candidates[1].text, "seo");
        assert_eq!(candidates[1].count, 2);
        assert!((candidates[1].density - 2.0 / 11.0).abs() < 1e-12);

        // Then single occurrences, longest first.
        assert_eq!(candidates[2].text, "websites rank better");
        assert_eq!(candidates[3].text, "helps websites rank");
        assert!(candidates[2..].iter().all(|c| c.count == 1));
    }

    #[test]
    fn test_position_breaks_remaining_ties() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract("alpha. gamma. delta", 3);
        assert_eq!(keywords, vec!["alpha", "gamma", "delta"]);
    }

    #[test]
    fn test_phrases_stay_inside_sentences() {
        let extractor = KeywordExtractor::new();
        let candidates = extractor.rank_candidates("Digital. Marketing");
        assert!(candidates.iter().all(|c| c.text != "digital marketing"));
    }

    #[test]
    fn test_phrases_cannot_start_or_end_with_stop_words() {
        let extractor = KeywordExtractor::new();
        let texts: Vec<String> = extractor
            .rank_candidates("return on investment matters")
            .into_iter()
            .map(|c| c.text)
            .collect();

        assert!(texts.contains(&"return on investment".to_string()));
        assert!(!texts.contains(&"return on".to_string()));
        assert!(!texts.contains(&"on investment".to_string()));
        assert!(!texts.contains(&"on".to_string()));
    }

    #[test]
    fn test_case_and_punctuation_dedup() {
        let extractor = KeywordExtractor::new();
        let candidates = extractor.rank_candidates("Rust, rust; RUST! (rust)");
        let rust: Vec<_> = candidates.iter().filter(|c| c.text == "rust").collect();
        assert_eq!(rust.len(), 1);
        assert_eq!(rust[0].count, 4);
    }

    #[test]
    fn test_never_pads() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract("Lonely word", 10);
        // "lonely", "word", "lonely word"
        assert_eq!(keywords.len(), 3);
        assert_eq!(keywords[0], "lonely word");
    }

    #[test]
    fn test_max_phrase_words() {
        let extractor = KeywordExtractor::new().max_phrase_words(1);
        let candidates = extractor.rank_candidates("search engine optimization tips");
        assert!(candidates.iter().all(|c| c.word_count() == 1));
        assert_eq!(candidates.len(), 4);
    }
}
