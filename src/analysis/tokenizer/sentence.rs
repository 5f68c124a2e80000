//! Sentence-aware word tokenizer.
//!
//! Content is first cut into sentences on runs of `.`, `!` and `?`, then each
//! sentence is split on whitespace. Leading and trailing punctuation is
//! stripped from every word; inner punctuation (`don't`, `e-mail`) is kept.
//!
//! This is a simple splitter: abbreviations ("e.g.", "Dr.") and
//! decimals ("3.5") are treated as sentence ends.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, SeoError};

static DEFAULT_TERMINATORS: LazyLock<Arc<Regex>> = LazyLock::new(|| {
    Arc::new(Regex::new(r"[.!?]+").expect("Default terminator pattern should be valid"))
});

static WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("Word pattern should be valid"));

/// A tokenizer that records sentence boundaries while splitting words.
///
/// # Examples
///
/// ```
/// use seoscribe::analysis::tokenizer::Tokenizer;
/// use seoscribe::analysis::tokenizer::sentence::SentenceTokenizer;
///
/// let tokenizer = SentenceTokenizer::new();
/// let stream = tokenizer.tokenize("\"Quoted,\" she said... Done");
///
/// let words: Vec<&str> = stream.words().collect();
/// assert_eq!(words, vec!["Quoted", "she", "said", "Done"]);
/// assert_eq!(stream.sentence_word_counts(), vec![3, 1]);
/// ```
#[derive(Clone, Debug)]
pub struct SentenceTokenizer {
    /// Pattern matching sentence terminators
    terminators: Arc<Regex>,
}

impl SentenceTokenizer {
    /// Create a tokenizer splitting sentences on `.`, `!` and `?`.
    pub fn new() -> Self {
        SentenceTokenizer {
            terminators: Arc::clone(&DEFAULT_TERMINATORS),
        }
    }

    /// Create a tokenizer with a custom sentence terminator pattern.
    pub fn with_terminators(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SeoError::config(format!("Invalid terminator pattern: {e}")))?;

        Ok(SentenceTokenizer {
            terminators: Arc::new(regex),
        })
    }

    /// Get the terminator pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.terminators.as_str()
    }

    /// Split a text into `(byte offset, sentence text)` segments.
    fn segments<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)> {
        let mut segments = Vec::new();
        let mut start = 0;

        for mat in self.terminators.find_iter(text) {
            segments.push((start, &text[start..mat.start()]));
            start = mat.end();
        }
        segments.push((start, &text[start..]));

        segments
    }
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut sentence = 0;

        for (base, segment) in self.segments(text) {
            let before = tokens.len();

            for mat in WORDS.find_iter(segment) {
                let raw = mat.as_str();
                let leading = raw.len() - raw.trim_start_matches(|c: char| !c.is_alphanumeric()).len();
                let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
                if word.is_empty() {
                    continue;
                }

                let start = base + mat.start() + leading;
                tokens.push(
                    Token::with_offsets(word, tokens.len(), start, start + word.len())
                        .in_sentence(sentence),
                );
            }

            // Segments without words ("...", trailing whitespace) are not sentences.
            if tokens.len() > before {
                sentence += 1;
            }
        }

        TokenStream::from_tokens(tokens)
    }

    fn name(&self) -> &'static str {
        "sentence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(stream: &TokenStream) -> Vec<&str> {
        stream.words().collect()
    }

    #[test]
    fn test_sentence_tokenizer() {
        let tokenizer = SentenceTokenizer::new();
        let stream =
            tokenizer.tokenize("SEO is great. SEO helps websites rank better. Great content wins.");

        assert_eq!(stream.word_count(), 11);
        assert_eq!(stream.sentence_count(), 3);
        assert_eq!(stream.sentence_word_counts(), vec![3, 5, 3]);
        assert_eq!(stream.tokens()[3].text, "SEO");
        assert_eq!(stream.tokens()[3].sentence, 1);
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "  (Hello), world!";
        let stream = SentenceTokenizer::new().tokenize(text);

        let first = &stream.tokens()[0];
        assert_eq!(first.text, "Hello");
        assert_eq!(&text[first.start_offset..first.end_offset], "Hello");
        let second = &stream.tokens()[1];
        assert_eq!(&text[second.start_offset..second.end_offset], "world");
    }

    #[test]
    fn test_inner_punctuation_is_kept() {
        let stream = SentenceTokenizer::new().tokenize("Don't over-think e-mail.");
        assert_eq!(words(&stream), vec!["Don't", "over-think", "e-mail"]);
    }

    #[test]
    fn test_missing_terminator_is_one_sentence() {
        let stream = SentenceTokenizer::new().tokenize("no terminal punctuation here");
        assert_eq!(stream.sentence_count(), 1);
        assert_eq!(stream.word_count(), 4);
    }

    #[test]
    fn test_empty_and_whitespace() {
        let tokenizer = SentenceTokenizer::new();
        for text in ["", "   \n\t ", "...!?", " - . ; "] {
            let stream = tokenizer.tokenize(text);
            assert_eq!(stream.word_count(), 0, "input {text:?}");
            assert_eq!(stream.sentence_count(), 0, "input {text:?}");
        }
    }

    #[test]
    fn test_decimals_split_sentences() {
        // Known simplification: no guard for decimals or abbreviations.
        let stream = SentenceTokenizer::new().tokenize("Version 3.5 is out");
        assert_eq!(stream.sentence_word_counts(), vec![2, 3]);
    }

    #[test]
    fn test_custom_terminators() {
        let tokenizer = SentenceTokenizer::with_terminators(r"[;\n]+").unwrap();
        let stream = tokenizer.tokenize("one two; three\nfour. five");
        assert_eq!(stream.sentence_word_counts(), vec![2, 1, 2]);
        assert_eq!(tokenizer.pattern(), r"[;\n]+");

        assert!(SentenceTokenizer::with_terminators("(").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(SentenceTokenizer::new().name(), "sentence");
    }
}
