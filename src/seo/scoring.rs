//! Sub-score curves and numeric boundaries for the composite SEO score.
//!
//! Every sub-score and the final score pass through [`clamp_score`]; the
//! underlying curves are allowed to overshoot, the reported values never are.

use crate::seo::config::{DensityBand, LengthBand, ScoreWeights, StructureRule};

/// Lower bound of every reported score.
pub const MIN_SCORE: f64 = 0.0;
/// Upper bound of every reported score.
pub const MAX_SCORE: f64 = 100.0;

/// Clamp a score into `[0, 100]`. Non-finite input maps to 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_SCORE;
    }
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// Round to two decimal places, the precision of every reported percentage.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Length sub-score for a word count.
pub fn length_score(word_count: usize, band: &LengthBand) -> f64 {
    let words = word_count as f64;
    let min = band.min_words as f64;
    let max = band.max_words as f64;
    let zero_at = band.zero_at_words as f64;

    let raw = if words < min {
        MAX_SCORE * words / min
    } else if words <= max {
        MAX_SCORE
    } else {
        MAX_SCORE * (zero_at - words) / (zero_at - max)
    };

    clamp_score(raw)
}

/// Density sub-score for the average keyword density (percent).
///
/// No keywords at all, or keywords that never occur, score 0.
pub fn density_score(average_percent: Option<f64>, band: &DensityBand) -> f64 {
    let d = match average_percent {
        Some(d) if d > 0.0 => d,
        _ => return MIN_SCORE,
    };

    let raw = if d < band.min_percent {
        MAX_SCORE * d / band.min_percent
    } else if d <= band.max_percent {
        MAX_SCORE
    } else {
        MAX_SCORE * (band.zero_at_percent - d) / (band.zero_at_percent - band.max_percent)
    };

    clamp_score(raw)
}

/// Readability sub-score: higher reading ease maps to a higher score.
pub fn readability_score(flesch_kincaid: f64) -> f64 {
    clamp_score(flesch_kincaid)
}

/// Population standard deviation of sentence word counts.
pub fn sentence_length_std_dev(sentence_lengths: &[usize]) -> f64 {
    if sentence_lengths.is_empty() {
        return 0.0;
    }
    let n = sentence_lengths.len() as f64;
    let mean = sentence_lengths.iter().sum::<usize>() as f64 / n;
    let variance = sentence_lengths
        .iter()
        .map(|&len| {
            let diff = len as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;
    variance.sqrt()
}

/// Structure sub-score from sentence-length variety.
pub fn structure_score(sentence_lengths: &[usize], rule: &StructureRule) -> f64 {
    if sentence_lengths.iter().all(|&len| len == 0) {
        return MIN_SCORE;
    }
    if sentence_lengths.len() >= 2 && sentence_length_std_dev(sentence_lengths) >= rule.min_std_dev
    {
        return MAX_SCORE;
    }
    clamp_score(rule.default_score)
}

/// Weighted sum of the four sub-scores, rounded to a whole number.
pub fn composite_score(
    weights: &ScoreWeights,
    length: f64,
    density: f64,
    readability: f64,
    structure: f64,
) -> u32 {
    let sum = weights.length * length
        + weights.density * density
        + weights.readability * readability
        + weights.structure * structure;
    clamp_score(sum.round()) as u32
}
