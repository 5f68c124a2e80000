//! # seoscribe
//!
//! Deterministic SEO analysis for written content, plus the application layer
//! of a content-writing assistant built around it.
//!
//! ## Features
//!
//! - Sentence-aware tokenization with a pluggable filter pipeline
//! - Keyword and phrase extraction (1-3 word n-grams)
//! - Flesch reading ease with a heuristic syllable counter
//! - Composite SEO score with per-factor breakdown and recommendations
//! - Request validation and orchestration around an AI collaborator
//! - Per-user drafts and optimization sessions

pub mod analysis;
pub mod cli;
pub mod content;
pub mod drafts;
pub mod error;
pub mod seo;

pub mod prelude {
    pub use crate::error::{Result, SeoError};
    pub use crate::seo::config::ScoringConfig;
    pub use crate::seo::engine::SeoEngine;
    pub use crate::seo::readability::ReadabilityResult;
    pub use crate::seo::report::{Improvement, SeoAnalysis, SeoComparison};
    pub use crate::seo::{analyze_seo, calculate_readability, extract_keywords, tokenize};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
