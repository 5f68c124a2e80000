//! Token types for content analysis.
//!
//! A [`TokenStream`] is the shared substrate of every engine operation: an
//! ordered list of word [`Token`]s plus the [`SentenceSpan`]s that partition
//! them. Spans are half-open token index ranges; concatenating them covers
//! every token exactly once.
//!
//! ```text
//! Input:  "SEO is great. Great content wins."
//!
//! Tokens:    seo  is  great  great  content  wins
//! Index:      0    1    2      3       4       5
//! Sentences: [0..3)            [3..6)
//! ```
//!
//! # Examples
//!
//! ```
//! use seoscribe::analysis::token::{Token, TokenStream};
//!
//! let stream = TokenStream::from_tokens(vec![
//!     Token::with_offsets("hello", 0, 0, 5).in_sentence(0),
//!     Token::with_offsets("world", 1, 6, 11).in_sentence(1),
//! ]);
//!
//! assert_eq!(stream.word_count(), 2);
//! assert_eq!(stream.sentence_count(), 2);
//! assert_eq!(stream.sentence_word_counts(), vec![1, 1]);
//! ```

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A single word produced by a tokenizer.
///
/// # Fields
///
/// - `text` - The word with leading and trailing punctuation removed
/// - `position` - Index in the token stream (0-based)
/// - `start_offset` / `end_offset` - Byte offsets in the original text
/// - `sentence` - Index of the sentence the word belongs to
/// - `stopped` - Whether a filter marked this token as a stop word
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// The sentence index this token was found in
    pub sentence: usize,

    /// Whether this token has been marked as stopped by a filter
    pub stopped: bool,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            sentence: 0,
            stopped: false,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            sentence: 0,
            stopped: false,
        }
    }

    /// Assign the token to a sentence.
    pub fn in_sentence(mut self, sentence: usize) -> Self {
        self.sentence = sentence;
        self
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A half-open range of token indices making up one sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    /// Index of the first token in the sentence
    pub start: usize,
    /// One past the index of the last token in the sentence
    pub end: usize,
}

impl SentenceSpan {
    /// Number of words in the sentence.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the sentence holds no words.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a range usable for slicing tokens.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Ordered word tokens with their sentence boundaries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenStream {
    tokens: Vec<Token>,
    sentences: Vec<SentenceSpan>,
}

impl TokenStream {
    /// An empty stream: zero words, zero sentences.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a stream from tokens carrying sentence indices.
    ///
    /// Positions are renumbered to match the final order and spans are
    /// rebuilt from the `sentence` field, so filters that drop tokens never
    /// leave a span pointing at a missing word. Tokens must arrive grouped by
    /// sentence, which every tokenizer in this crate guarantees.
    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        let mut sentences: Vec<SentenceSpan> = Vec::new();
        let mut current: Option<usize> = None;

        for (index, token) in tokens.iter_mut().enumerate() {
            token.position = index;
            if current != Some(token.sentence) {
                if let Some(last) = sentences.last_mut() {
                    last.end = index;
                }
                sentences.push(SentenceSpan {
                    start: index,
                    end: index,
                });
                current = Some(token.sentence);
            }
        }
        if let Some(last) = sentences.last_mut() {
            last.end = tokens.len();
        }

        TokenStream { tokens, sentences }
    }

    /// All tokens in order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Sentence spans in order.
    pub fn sentences(&self) -> &[SentenceSpan] {
        &self.sentences
    }

    /// Tokens belonging to one sentence.
    pub fn sentence_tokens(&self, span: &SentenceSpan) -> &[Token] {
        &self.tokens[span.range()]
    }

    /// Iterate over the word texts.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.text.as_str())
    }

    /// Total number of words.
    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    /// Total number of sentences holding at least one word.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Word count of each sentence, in order.
    pub fn sentence_word_counts(&self) -> Vec<usize> {
        self.sentences.iter().map(SentenceSpan::len).collect()
    }

    /// Check if the stream holds no words.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Consume the stream, returning its tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
