//! Scoring configuration for the SEO composer.
//!
//! Every constant that shapes the composite score lives here: sub-score
//! weights, the word-count band, the keyword-density band, the structure
//! threshold and the recommendation threshold. [`ScoringConfig::default`]
//! holds the values the engine ships with; callers may load an alternative
//! from JSON. Missing fields fall back to the defaults.
//!
//! # Example
//!
//! ```
//! use seoscribe::seo::config::ScoringConfig;
//!
//! let config = ScoringConfig::from_json(r#"{ "weights": { "length": 0.25, "density": 0.3,
//!     "readability": 0.3, "structure": 0.15 } }"#).unwrap();
//! assert_eq!(config.weights.length, 0.25);
//! assert_eq!(config.length.min_words, 300);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeoError};

/// Tolerance when checking that weights sum to one.
const WEIGHT_EPSILON: f64 = 1e-6;

/// Relative weight of each sub-score in the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub length: f64,
    pub density: f64,
    pub readability: f64,
    pub structure: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            length: 0.2,
            density: 0.35,
            readability: 0.3,
            structure: 0.15,
        }
    }
}

impl ScoreWeights {
    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.length + self.density + self.readability + self.structure
    }
}

/// Word-count band rewarded by the length sub-score.
///
/// The score is 100 inside `[min_words, max_words]`, rises linearly from 0 at
/// zero words, and falls linearly to 0 at `zero_at_words`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthBand {
    pub min_words: usize,
    pub max_words: usize,
    pub zero_at_words: usize,
}

impl Default for LengthBand {
    fn default() -> Self {
        LengthBand {
            min_words: 300,
            max_words: 1500,
            zero_at_words: 3000,
        }
    }
}

/// Keyword-density band (percentages) rewarded by the density sub-score.
///
/// The score is 100 inside `[min_percent, max_percent]`, rises linearly from 0
/// at 0%, and falls linearly to 0 at `zero_at_percent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityBand {
    pub min_percent: f64,
    pub max_percent: f64,
    pub zero_at_percent: f64,
}

impl Default for DensityBand {
    fn default() -> Self {
        DensityBand {
            min_percent: 1.0,
            max_percent: 3.0,
            zero_at_percent: 5.0,
        }
    }
}

/// Sentence-length variety rule for the structure sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureRule {
    /// Minimum population standard deviation of sentence word counts.
    pub min_std_dev: f64,
    /// Score awarded when the threshold is not met.
    pub default_score: f64,
}

impl Default for StructureRule {
    fn default() -> Self {
        StructureRule {
            min_std_dev: 3.0,
            default_score: 50.0,
        }
    }
}

/// Complete scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    pub length: LengthBand,
    pub density: DensityBand,
    pub structure: StructureRule,
    /// Sub-scores strictly below this value produce a recommendation.
    pub recommendation_threshold: f64,
    /// Number of keywords derived when the caller supplies none.
    pub auto_keyword_count: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            weights: ScoreWeights::default(),
            length: LengthBand::default(),
            density: DensityBand::default(),
            structure: StructureRule::default(),
            recommendation_threshold: 60.0,
            auto_keyword_count: 5,
        }
    }
}

impl ScoringConfig {
    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScoringConfig = serde_json::from_str(json)
            .map_err(|e| SeoError::config(format!("Invalid scoring config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Check that the configuration is internally consistent.
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        for (name, value) in [
            ("length", w.length),
            ("density", w.density),
            ("readability", w.readability),
            ("structure", w.structure),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SeoError::config(format!(
                    "weight '{name}' must be a non-negative number, got {value}"
                )));
            }
        }
        if (w.total() - 1.0).abs() > WEIGHT_EPSILON {
            return Err(SeoError::config(format!(
                "weights must sum to 1.0, got {}",
                w.total()
            )));
        }

        let l = &self.length;
        if l.min_words == 0 || l.min_words > l.max_words || l.max_words >= l.zero_at_words {
            return Err(SeoError::config(
                "length band must satisfy 0 < min_words <= max_words < zero_at_words",
            ));
        }

        let d = &self.density;
        let ordered = d.min_percent > 0.0
            && d.min_percent <= d.max_percent
            && d.max_percent < d.zero_at_percent;
        if !ordered || !d.zero_at_percent.is_finite() {
            return Err(SeoError::config(
                "density band must satisfy 0 < min_percent <= max_percent < zero_at_percent",
            ));
        }

        let s = &self.structure;
        if !(s.min_std_dev.is_finite() && s.min_std_dev >= 0.0) {
            return Err(SeoError::config("structure.min_std_dev must be non-negative"));
        }
        if !(0.0..=100.0).contains(&s.default_score) {
            return Err(SeoError::config("structure.default_score must be within [0, 100]"));
        }
        if !(0.0..=100.0).contains(&self.recommendation_threshold) {
            return Err(SeoError::config(
                "recommendation_threshold must be within [0, 100]",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScoringConfig::default();
        config.validate().unwrap();
        assert!((config.weights.total() - 1.0).abs() < WEIGHT_EPSILON);
        assert_eq!(config.auto_keyword_count, 5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ScoringConfig::from_json(r#"{ "recommendation_threshold": 70 }"#).unwrap();
        assert_eq!(config.recommendation_threshold, 70.0);
        assert_eq!(config.weights, ScoreWeights::default());
        assert_eq!(config.density, DensityBand::default());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let err = ScoringConfig::from_json(r#"{ "weights": { "length": 0.5 } }"#).unwrap_err();
        assert!(matches!(err, SeoError::Config(_)));
        assert!(err.to_string().contains("sum to 1.0"));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut config = ScoringConfig::default();
        config.weights.length = -0.2;
        config.weights.density = 0.75;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_band_ordering() {
        let mut config = ScoringConfig::default();
        config.length.max_words = 100;
        assert!(config.validate().is_err());

        let mut config = ScoringConfig::default();
        config.density.zero_at_percent = 2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = ScoringConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SeoError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "structure": {{ "min_std_dev": 4.5 }} }}"#).unwrap();

        let config = ScoringConfig::from_file(file.path()).unwrap();
        assert_eq!(config.structure.min_std_dev, 4.5);
        assert_eq!(config.structure.default_score, 50.0);
    }
}
