//! The SEO composer.
//!
//! [`SeoEngine`] ties the pipeline together: it tokenizes content once,
//! derives keywords when the caller gives none, measures keyword density,
//! readability and sentence-length variety, and folds the clamped sub-scores
//! into a weighted composite score with recommendations.
//!
//! The engine holds only immutable state and is `Send + Sync`; one instance
//! can serve any number of concurrent callers.
//!
//! # Example
//!
//! ```
//! use seoscribe::seo::engine::SeoEngine;
//!
//! let engine = SeoEngine::new();
//! let keywords = vec!["SEO".to_string()];
//! let analysis = engine.analyze(
//!     "SEO is great. SEO helps websites rank better. Great content wins.",
//!     Some(&keywords),
//! );
//!
//! assert_eq!(analysis.word_count, 11);
//! assert_eq!(analysis.keyword_density["SEO"], 18.18);
//! assert_eq!(analysis.breakdown.density, 0.0);
//! ```

use crate::analysis::analyzer::ContentAnalyzer;
use crate::analysis::token::TokenStream;
use crate::error::Result;
use crate::seo::config::ScoringConfig;
use crate::seo::density::{average_density, keyword_densities};
use crate::seo::keywords::{KeywordCandidate, KeywordExtractor};
use crate::seo::readability::{ReadabilityResult, readability_of};
use crate::seo::report::{ScoreBreakdown, SeoAnalysis, SeoComparison};
use crate::seo::scoring::{
    composite_score, density_score, length_score, readability_score, structure_score,
};

/// Deterministic SEO analysis engine.
#[derive(Debug, Clone)]
pub struct SeoEngine {
    analyzer: ContentAnalyzer,
    extractor: KeywordExtractor,
    config: ScoringConfig,
}

impl SeoEngine {
    /// Create an engine with the default scoring configuration.
    pub fn new() -> Self {
        SeoEngine {
            analyzer: ContentAnalyzer::standard(),
            extractor: KeywordExtractor::new(),
            config: ScoringConfig::default(),
        }
    }

    /// Create an engine with a custom, validated scoring configuration.
    pub fn with_config(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(SeoEngine {
            config,
            ..Self::new()
        })
    }

    /// Replace the keyword extractor (custom stop words, phrase length).
    pub fn with_extractor(mut self, extractor: KeywordExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// The scoring configuration in use.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Lowercased words and sentence spans of the content.
    pub fn tokenize(&self, content: &str) -> TokenStream {
        self.analyzer.analyze(content)
    }

    /// The top `count` keywords of the content.
    pub fn extract_keywords(&self, content: &str, count: usize) -> Vec<String> {
        self.extractor.extract(content, count)
    }

    /// Every keyword candidate with its statistics, in rank order.
    pub fn rank_keywords(&self, content: &str) -> Vec<KeywordCandidate> {
        self.extractor.rank_candidates(content)
    }

    /// Flesch reading ease and the counts behind it.
    pub fn calculate_readability(&self, content: &str) -> ReadabilityResult {
        readability_of(&self.tokenize(content))
    }

    /// Keywords to measure: the caller's, or derived ones when none are usable.
    fn target_keywords(&self, content: &str, keywords: Option<&[String]>) -> Vec<String> {
        match keywords {
            Some(list) if list.iter().any(|k| !k.trim().is_empty()) => list.to_vec(),
            _ => self
                .extractor
                .extract(content, self.config.auto_keyword_count),
        }
    }

    /// Full SEO analysis. Never fails; empty content scores 0.
    pub fn analyze(&self, content: &str, keywords: Option<&[String]>) -> SeoAnalysis {
        let stream = self.tokenize(content);
        let word_count = stream.word_count();
        let keywords = self.target_keywords(content, keywords);

        let keyword_density = keyword_densities(&self.analyzer, &stream, &keywords);
        let average = average_density(&keyword_density);
        let readability = readability_of(&stream);

        let breakdown = ScoreBreakdown {
            length: length_score(word_count, &self.config.length),
            density: density_score(average, &self.config.density),
            readability: readability_score(readability.flesch_kincaid),
            structure: structure_score(&stream.sentence_word_counts(), &self.config.structure),
        };
        let score = composite_score(
            &self.config.weights,
            breakdown.length,
            breakdown.density,
            breakdown.readability,
            breakdown.structure,
        );
        let recommendations = self.recommendations(&breakdown, word_count, average);

        log::debug!(
            "seo analysis: {} words, {} keywords, score {}",
            word_count,
            keyword_density.len(),
            score
        );

        SeoAnalysis {
            score,
            keyword_density,
            readability,
            word_count,
            recommendations,
            breakdown,
        }
    }

    /// Analyze two versions of the same content against one keyword list.
    ///
    /// Without explicit keywords, the list is derived from the original.
    pub fn compare(
        &self,
        original: &str,
        optimized: &str,
        keywords: Option<&[String]>,
    ) -> SeoComparison {
        let keywords = self.target_keywords(original, keywords);
        SeoComparison::new(
            self.analyze(original, Some(&keywords)),
            self.analyze(optimized, Some(&keywords)),
        )
    }

    fn recommendations(
        &self,
        breakdown: &ScoreBreakdown,
        word_count: usize,
        average_density: Option<f64>,
    ) -> Vec<String> {
        let threshold = self.config.recommendation_threshold;
        let mut recommendations = Vec::new();

        if breakdown.length < threshold {
            let band = &self.config.length;
            recommendations.push(if word_count < band.min_words {
                format!("Increase content length to at least {} words", band.min_words)
            } else {
                format!("Reduce content length to under {} words", band.max_words)
            });
        }

        if breakdown.density < threshold {
            let band = &self.config.density;
            recommendations.push(match average_density {
                Some(d) if d > band.max_percent => {
                    "Reduce keyword repetition to avoid over-optimization".to_string()
                }
                Some(d) if d > 0.0 => format!(
                    "Use your target keywords more often (aim for {}-{}% density)",
                    band.min_percent, band.max_percent
                ),
                _ => "Include your target keywords in the content".to_string(),
            });
        }

        if breakdown.readability < threshold {
            recommendations
                .push("Improve readability with shorter sentences and simpler words".to_string());
        }

        if breakdown.structure < threshold {
            recommendations.push("Vary sentence length to improve content structure".to_string());
        }

        recommendations
    }
}

impl Default for SeoEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeoError;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_empty_content() {
        let engine = SeoEngine::new();
        let analysis = engine.analyze("", None);

        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.word_count, 0);
        assert!(analysis.keyword_density.is_empty());
        assert_eq!(analysis.breakdown, ScoreBreakdown::zero());
        assert_eq!(analysis.readability, ReadabilityResult::empty());
        assert_eq!(analysis.recommendations.len(), 4);
    }

    #[test]
    fn test_derives_keywords_when_none_given() {
        let engine = SeoEngine::new();
        let content = "Rust tooling. Rust crates. Rust compiler.";
        let derived = engine.analyze(content, None);
        let empty = engine.analyze(content, Some(&[]));
        let blank = engine.analyze(content, Some(&keywords(&["  "])));

        assert_eq!(derived.keyword_density.len(), 5);
        assert_eq!(derived.keyword_density["rust"], 50.0);
        assert_eq!(derived, empty);
        assert_eq!(derived, blank);
    }

    #[test]
    fn test_over_optimized_density() {
        let engine = SeoEngine::new();
        let analysis = engine.analyze(
            "SEO is great. SEO helps websites rank better. Great content wins.",
            Some(&keywords(&["SEO"])),
        );

        assert_eq!(analysis.keyword_density["SEO"], 18.18);
        assert_eq!(analysis.breakdown.density, 0.0);
        assert!(
            analysis
                .recommendations
                .contains(&"Reduce keyword repetition to avoid over-optimization".to_string())
        );
    }

    #[test]
    fn test_missing_keyword_recommendation() {
        let engine = SeoEngine::new();
        let analysis = engine.analyze("Plain text here.", Some(&keywords(&["absent"])));
        assert_eq!(
            analysis.recommendations[1],
            "Include your target keywords in the content"
        );
    }

    #[test]
    fn test_custom_config() {
        let mut config = ScoringConfig::default();
        config.recommendation_threshold = 0.0;
        let engine = SeoEngine::with_config(config).unwrap();
        assert!(engine.analyze("", None).recommendations.is_empty());

        let mut config = ScoringConfig::default();
        config.weights.length = 0.9;
        let err = SeoEngine::with_config(config).unwrap_err();
        assert!(matches!(err, SeoError::Config(_)));
    }

    #[test]
    fn test_compare_uses_original_keywords() {
        let engine = SeoEngine::new();
        let comparison = engine.compare(
            "Coffee beans. Coffee roast.",
            "Fresh coffee beans, carefully roasted. Coffee tastes better.",
            None,
        );

        let original_keys: Vec<&String> = comparison.original.keyword_density.keys().collect();
        let optimized_keys: Vec<&String> = comparison.optimized.keyword_density.keys().collect();
        assert_eq!(original_keys, optimized_keys);
        assert!(original_keys.iter().any(|k| k.as_str() == "coffee"));
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeoEngine>();
    }
}
