//! Keyword density over a token stream.
//!
//! A keyword is analyzed with the same pipeline as the content, so matching is
//! case-insensitive and ignores surrounding punctuation. Multi-word keywords
//! are matched with an overlapping sliding window inside each sentence.
//! Density is `occurrences / total words * 100`, rounded to two decimals.

use std::collections::{BTreeMap, HashSet};

use crate::analysis::analyzer::ContentAnalyzer;
use crate::analysis::token::{Token, TokenStream};
use crate::seo::scoring::round2;

/// Count occurrences of a phrase (already normalized to words).
pub fn count_occurrences(stream: &TokenStream, phrase: &[String]) -> usize {
    if phrase.is_empty() {
        return 0;
    }

    stream
        .tokens()
        .windows(phrase.len())
        .filter(|window| matches_phrase(window, phrase))
        .count()
}

fn matches_phrase(window: &[Token], phrase: &[String]) -> bool {
    window
        .iter()
        .zip(phrase)
        .all(|(token, word)| token.text == *word)
}

/// Density percentage for every distinct keyword.
///
/// Keys keep the caller's spelling (trimmed) of the first occurrence of each
/// case-insensitively distinct keyword. Blank keywords are ignored.
pub fn keyword_densities(
    analyzer: &ContentAnalyzer,
    stream: &TokenStream,
    keywords: &[String],
) -> BTreeMap<String, f64> {
    let total_words = stream.word_count();
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut densities = BTreeMap::new();

    for keyword in keywords {
        let label = keyword.trim();
        if label.is_empty() {
            continue;
        }

        let phrase: Vec<String> = analyzer.analyze(label).words().map(str::to_string).collect();
        if !seen.insert(phrase.clone()) && !phrase.is_empty() {
            continue;
        }

        let density = if total_words == 0 {
            0.0
        } else {
            let occurrences = count_occurrences(stream, &phrase);
            round2(occurrences as f64 / total_words as f64 * 100.0)
        };
        densities.entry(label.to_string()).or_insert(density);
    }

    densities
}

/// Mean of the reported densities, or `None` when there are no keywords.
pub fn average_density(densities: &BTreeMap<String, f64>) -> Option<f64> {
    if densities.is_empty() {
        return None;
    }
    Some(densities.values().sum::<f64>() / densities.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn densities(content: &str, keywords: &[&str]) -> BTreeMap<String, f64> {
        let analyzer = ContentAnalyzer::standard();
        let stream = analyzer.analyze(content);
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
        keyword_densities(&analyzer, &stream, &keywords)
    }

    #[test]
    fn test_single_keyword_density() {
        let result = densities(
            "SEO is great. SEO helps websites rank better. Great content wins.",
            &["SEO"],
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result["SEO"], 18.18);
    }

    #[test]
    fn test_case_insensitive_and_deduplicated() {
        let result = densities("Rust rust RUST tooling", &["rust", "RUST", " Rust "]);
        assert_eq!(result.len(), 1);
        assert_eq!(result["rust"], 75.0);
    }

    #[test]
    fn test_phrase_sliding_window() {
        let result = densities(
            "content marketing content marketing content. Marketing content",
            &["content marketing", "marketing content"],
        );
        assert_eq!(result["content marketing"], round2(3.0 / 7.0 * 100.0));
        assert_eq!(result["marketing content"], round2(3.0 / 7.0 * 100.0));
    }

    #[test]
    fn test_keyword_spanning_sentence_break() {
        // "Node.js" splits into "node" | "js" in both the keyword and the content.
        let result = densities("We build services with Node.js today", &["Node.js"]);
        assert_eq!(result["Node.js"], round2(1.0 / 7.0 * 100.0));

        let result = densities("Rust is fast. Go is simple.", &["fast go"]);
        assert_eq!(result["fast go"], round2(1.0 / 6.0 * 100.0));
    }

    #[test]
    fn test_overlapping_matches() {
        let analyzer = ContentAnalyzer::standard();
        let stream = analyzer.analyze("go go go");
        let phrase = vec!["go".to_string(), "go".to_string()];
        assert_eq!(count_occurrences(&stream, &phrase), 2);
    }

    #[test]
    fn test_missing_and_blank_keywords() {
        let result = densities("plain words only", &["absent", "   ", "!!!"]);
        assert_eq!(result.len(), 2);
        assert_eq!(result["absent"], 0.0);
        assert_eq!(result["!!!"], 0.0);
    }

    #[test]
    fn test_empty_content() {
        let result = densities("", &["seo"]);
        assert_eq!(result["seo"], 0.0);
        assert_eq!(average_density(&BTreeMap::new()), None);
    }

    #[test]
    fn test_average_density() {
        let mut map = BTreeMap::new();
        map.insert("a".to_string(), 1.0);
        map.insert("b".to_string(), 3.0);
        assert_eq!(average_density(&map), Some(2.0));
    }
}
