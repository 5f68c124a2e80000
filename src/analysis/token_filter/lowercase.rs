//! Lowercase filter implementation.
//!
//! Converts token text to lowercase so that keyword matching and candidate
//! deduplication are case-insensitive.
//!
//! # Examples
//!
//! ```
//! use seoscribe::analysis::token_filter::Filter;
//! use seoscribe::analysis::token_filter::lowercase::LowercaseFilter;
//! use seoscribe::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered = filter.filter(tokens);
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;

#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .map(|mut token| {
                if !token.is_stopped() && token.text.chars().any(char::is_uppercase) {
                    token.text = token.text.to_lowercase();
                }
                token
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::new("Hello", 0),
            Token::new("WORLD", 1),
            Token::new("Ünïcode", 2),
            Token::new("Test", 3).stop(),
        ];

        let result = filter.filter(tokens);

        assert_eq!(result.len(), 4);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "ünïcode");
        assert_eq!(result[3].text, "Test"); // Stopped tokens are not processed
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
