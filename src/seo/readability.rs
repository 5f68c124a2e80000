//! Readability scoring with the Flesch reading-ease formula.
//!
//! Formula: `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`
//!
//! Degenerate input never produces NaN or infinity:
//!
//! - zero words: every field is zero
//! - words but no sentence: counted as one implicit sentence
//!
//! The reported score is clamped to `[0, 100]` so it can feed the composite
//! SEO score directly; the raw formula can go below 0 for dense prose and
//! above 100 for one-syllable fragments.

use serde::{Deserialize, Serialize};

use crate::analysis::syllable::count_syllables;
use crate::analysis::token::TokenStream;
use crate::seo::scoring::{clamp_score, round2};

const BASE: f64 = 206.835;
const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;
const SYLLABLE_WEIGHT: f64 = 84.6;

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityResult {
    /// Reading ease, clamped to `[0, 100]` and rounded to two decimals.
    pub flesch_kincaid: f64,
    /// Number of sentences containing at least one word.
    pub total_sentences: usize,
    /// Number of words.
    pub total_words: usize,
    /// Mean syllables per word, rounded to two decimals.
    pub average_syllables_per_word: f64,
}

impl ReadabilityResult {
    /// The all-zero result for content without words.
    pub fn empty() -> Self {
        ReadabilityResult {
            flesch_kincaid: 0.0,
            total_sentences: 0,
            total_words: 0,
            average_syllables_per_word: 0.0,
        }
    }
}

/// Unclamped reading ease. Returns 0 when there are no words.
pub fn raw_flesch_score(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 {
        return 0.0;
    }
    let sentences = sentences.max(1) as f64;
    let words = words as f64;

    BASE - SENTENCE_LENGTH_WEIGHT * (words / sentences) - SYLLABLE_WEIGHT * (syllables as f64 / words)
}

/// Compute readability for an already tokenized stream.
pub fn readability_of(stream: &TokenStream) -> ReadabilityResult {
    let total_words = stream.word_count();
    if total_words == 0 {
        return ReadabilityResult::empty();
    }

    let total_sentences = stream.sentence_count().max(1);
    let syllables: usize = stream.words().map(count_syllables).sum();
    let raw = raw_flesch_score(total_words, total_sentences, syllables);

    ReadabilityResult {
        flesch_kincaid: round2(clamp_score(raw)),
        total_sentences,
        total_words,
        average_syllables_per_word: round2(syllables as f64 / total_words as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::ContentAnalyzer;

    fn readability(text: &str) -> ReadabilityResult {
        readability_of(&ContentAnalyzer::standard().analyze(text))
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(readability(""), ReadabilityResult::empty());
        assert_eq!(readability("  \n "), ReadabilityResult::empty());
        assert_eq!(readability("?!."), ReadabilityResult::empty());
    }

    #[test]
    fn test_simple_sentences() {
        // 9 words, 2 sentences, 9 syllables:
        // 206.835 - 1.015 * 4.5 - 84.6 * 1 = 117.67 -> clamped to 100
        let result = readability("The cat sat on the mat. The dog ran.");
        assert_eq!(result.total_words, 9);
        assert_eq!(result.total_sentences, 2);
        assert_eq!(result.average_syllables_per_word, 1.0);
        assert_eq!(result.flesch_kincaid, 100.0);
    }

    #[test]
    fn test_known_value() {
        // "SEO is great. SEO helps websites rank better. Great content wins."
        // 11 words, 3 sentences, 14 syllables:
        // 206.835 - 1.015 * 11/3 - 84.6 * 14/11 = 95.4...
        let result = readability("SEO is great. SEO helps websites rank better. Great content wins.");
        assert_eq!(result.total_words, 11);
        assert_eq!(result.total_sentences, 3);
        assert_eq!(result.average_syllables_per_word, 1.27);
        let expected = 206.835 - 1.015 * (11.0 / 3.0) - 84.6 * (14.0 / 11.0);
        assert_eq!(result.flesch_kincaid, round2(expected));
    }

    #[test]
    fn test_dense_prose_clamps_to_zero() {
        let result = readability(
            "Institutionalization internationalization comprehensibility \
             telecommunications incomprehensibility",
        );
        assert_eq!(result.total_sentences, 1);
        assert_eq!(result.flesch_kincaid, 0.0);
    }

    #[test]
    fn test_raw_score_is_finite_for_degenerate_counts() {
        assert_eq!(raw_flesch_score(0, 0, 0), 0.0);
        assert!(raw_flesch_score(1, 0, 1).is_finite());
        assert_eq!(raw_flesch_score(1, 0, 1), raw_flesch_score(1, 1, 1));
    }

    #[test]
    fn test_single_word() {
        let result = readability("Hello");
        assert_eq!(result.total_words, 1);
        assert_eq!(result.total_sentences, 1);
        assert!((0.0..=100.0).contains(&result.flesch_kincaid));
    }
}
