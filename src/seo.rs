//! SEO analysis engine.
//!
//! The three public operations are available as free functions backed by a
//! process-wide default [`SeoEngine`](engine::SeoEngine), or as methods on an
//! engine built with a custom [`ScoringConfig`](config::ScoringConfig).
//!
//! ```
//! use seoscribe::seo::{analyze_seo, calculate_readability, extract_keywords};
//!
//! let content = "Fresh coffee beans make great coffee. Roast coffee beans carefully!";
//!
//! let keywords = extract_keywords(content, 2);
//! assert_eq!(keywords, vec!["coffee", "coffee beans"]);
//!
//! let readability = calculate_readability(content);
//! assert_eq!(readability.total_sentences, 2);
//!
//! let analysis = analyze_seo(content, None);
//! assert!(analysis.score <= 100);
//! ```

use std::sync::LazyLock;

pub mod config;
pub mod density;
pub mod engine;
pub mod keywords;
pub mod readability;
pub mod report;
pub mod scoring;

use crate::analysis::token::TokenStream;

use self::engine::SeoEngine;
use self::readability::ReadabilityResult;
use self::report::SeoAnalysis;

static DEFAULT_ENGINE: LazyLock<SeoEngine> = LazyLock::new(SeoEngine::new);

/// Analyze content against the given keywords, or derived ones when omitted.
pub fn analyze_seo(content: &str, keywords: Option<&[String]>) -> SeoAnalysis {
    DEFAULT_ENGINE.analyze(content, keywords)
}

/// The top `count` keywords and phrases of the content.
pub fn extract_keywords(content: &str, count: usize) -> Vec<String> {
    DEFAULT_ENGINE.extract_keywords(content, count)
}

/// Flesch reading ease of the content, clamped to `[0, 100]`.
pub fn calculate_readability(content: &str) -> ReadabilityResult {
    DEFAULT_ENGINE.calculate_readability(content)
}

/// Lowercased words and sentence spans of the content.
pub fn tokenize(content: &str) -> TokenStream {
    DEFAULT_ENGINE.tokenize(content)
}
