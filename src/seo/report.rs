//! Result types produced by the SEO composer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::seo::readability::ReadabilityResult;
use crate::seo::scoring::round2;

/// The four clamped sub-scores behind the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub length: f64,
    pub density: f64,
    pub readability: f64,
    pub structure: f64,
}

impl ScoreBreakdown {
    /// All sub-scores at their floor.
    pub fn zero() -> Self {
        ScoreBreakdown {
            length: 0.0,
            density: 0.0,
            readability: 0.0,
            structure: 0.0,
        }
    }
}

/// Full SEO analysis of one piece of content.
///
/// Built fresh for every call and never mutated afterwards. Serializes to the
/// camelCase JSON shape the HTTP layer embeds under `data.seo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAnalysis {
    /// Composite score in `[0, 100]`.
    pub score: u32,
    /// Keyword to density percentage (two decimals).
    pub keyword_density: BTreeMap<String, f64>,
    pub readability: ReadabilityResult,
    pub word_count: usize,
    /// One entry per failing sub-score, in the order length, density,
    /// readability, structure.
    pub recommendations: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

impl SeoAnalysis {
    /// Value stored as `seoScore` alongside an optimization session.
    pub fn seo_score(&self) -> u32 {
        self.score
    }

    /// Value stored as `readabilityScore` alongside an optimization session.
    pub fn readability_score(&self) -> f64 {
        self.readability.flesch_kincaid
    }
}

/// Score deltas from an original to an optimized version.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvement {
    pub seo_score: i64,
    pub readability: f64,
}

/// Analyses of the original and optimized version of the same content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoComparison {
    pub original: SeoAnalysis,
    pub optimized: SeoAnalysis,
}

impl SeoComparison {
    pub fn new(original: SeoAnalysis, optimized: SeoAnalysis) -> Self {
        SeoComparison {
            original,
            optimized,
        }
    }

    /// Optimized minus original, for both the score and reading ease.
    pub fn improvement(&self) -> Improvement {
        Improvement {
            seo_score: i64::from(self.optimized.score) - i64::from(self.original.score),
            readability: round2(
                self.optimized.readability.flesch_kincaid - self.original.readability.flesch_kincaid,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(score: u32, flesch_kincaid: f64) -> SeoAnalysis {
        SeoAnalysis {
            score,
            keyword_density: BTreeMap::new(),
            readability: ReadabilityResult {
                flesch_kincaid,
                ..ReadabilityResult::empty()
            },
            word_count: 0,
            recommendations: Vec::new(),
            breakdown: ScoreBreakdown::zero(),
        }
    }

    #[test]
    fn test_improvement_can_be_negative() {
        let comparison = SeoComparison::new(analysis(70, 62.5), analysis(55, 70.25));
        let improvement = comparison.improvement();
        assert_eq!(improvement.seo_score, -15);
        assert_eq!(improvement.readability, 7.75);
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(analysis(42, 50.0)).unwrap();
        assert_eq!(value["score"], 42);
        assert!(value["keywordDensity"].is_object());
        assert_eq!(value["readability"]["fleschKincaid"], 50.0);
        assert_eq!(value["readability"]["averageSyllablesPerWord"], 0.0);
        assert_eq!(value["wordCount"], 0);
        assert!(value["recommendations"].is_array());
        assert_eq!(value["breakdown"]["structure"], 0.0);

        let improvement = serde_json::to_value(Improvement {
            seo_score: 3,
            readability: 1.5,
        })
        .unwrap();
        assert_eq!(improvement["seoScore"], 3);
    }
}
