//! Response bodies produced by the content service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::seo::readability::ReadabilityResult;
use crate::seo::report::{Improvement, SeoAnalysis, SeoComparison};

/// Combined AI and SEO analysis of one piece of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    pub ai: Value,
    pub seo: SeoAnalysis,
    pub timestamp: DateTime<Utc>,
}

/// A rewrite with the analyses of both versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteOutcome {
    pub original: String,
    pub optimized: String,
    pub analysis: SeoComparison,
    pub improvement: Improvement,
}

impl RewriteOutcome {
    pub fn new(original: String, optimized: String, analysis: SeoComparison) -> Self {
        let improvement = analysis.improvement();
        RewriteOutcome {
            original,
            optimized,
            analysis,
            improvement,
        }
    }
}

/// A proofreading pass with the readability of the corrected text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofreadOutcome {
    pub original: String,
    pub corrected: String,
    pub errors: Vec<Value>,
    pub readability: ReadabilityResult,
    pub error_count: usize,
}
