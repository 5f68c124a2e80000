//! Tokenizer implementations for content analysis.
//!
//! Tokenizers are the first step of the analysis pipeline: they break raw
//! content into word tokens and record which sentence each word belongs to.
//!
//! # Available Tokenizers
//!
//! - [`sentence::SentenceTokenizer`] - Splits on sentence terminators, then whitespace
//!
//! # Examples
//!
//! ```
//! use seoscribe::analysis::tokenizer::Tokenizer;
//! use seoscribe::analysis::tokenizer::sentence::SentenceTokenizer;
//!
//! let tokenizer = SentenceTokenizer::new();
//! let stream = tokenizer.tokenize("Hello world. Bye!");
//! assert_eq!(stream.word_count(), 3);
//! assert_eq!(stream.sentence_count(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert content into a [`TokenStream`].
///
/// Tokenization is total: every string, including the empty one, produces a
/// stream. The trait requires `Send + Sync` so a single tokenizer can be
/// shared by concurrent analyses.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod sentence;

pub use sentence::SentenceTokenizer;
