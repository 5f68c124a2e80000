//! Text analysis for the SEO engine.
//!
//! This module provides the tokenization and statistics substrate shared by
//! keyword extraction, readability scoring and the SEO composer: sentence-aware
//! tokenization, token filters (lowercasing, stop words), the analysis pipeline
//! and syllable counting.

pub mod analyzer;
pub mod syllable;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
