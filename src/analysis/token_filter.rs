//! Token filters applied after tokenization.
//!
//! Filters transform tokens one stream at a time. They may rewrite token text
//! or mark tokens as stopped; sentence membership is carried on each token, so
//! [`TokenStream::from_tokens`](crate::analysis::token::TokenStream::from_tokens)
//! can rebuild the sentence spans afterwards.

use crate::analysis::token::Token;

/// Trait for filters that transform token lists.
pub trait Filter: Send + Sync {
    /// Apply this filter to the tokens.
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stop;

pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
