//! Validated request bodies.
//!
//! Every request arrives as a JSON object with camelCase keys. Decoding
//! failures (wrong types, non-object bodies) and blank content are reported
//! as [`SeoError::InvalidInput`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SeoError};

/// Message returned when the content field is missing or blank.
pub const CONTENT_REQUIRED: &str = "Content is required";

/// Common behavior of requests that carry a `content` field.
pub trait ContentRequest: DeserializeOwned {
    /// The submitted content, empty when absent.
    fn content(&self) -> &str;

    /// Reject requests without usable content.
    fn validate(&self) -> Result<()> {
        if self.content().trim().is_empty() {
            return Err(SeoError::invalid_input(CONTENT_REQUIRED));
        }
        Ok(())
    }

    /// Decode and validate a request from a JSON body.
    fn from_value(value: Value) -> Result<Self> {
        let request: Self =
            serde_json::from_value(value).map_err(|e| SeoError::invalid_input(e.to_string()))?;
        request.validate()?;
        Ok(request)
    }
}

/// Treats `""` the same as an absent field.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Body of a plain SEO analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSeoRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

impl ContentRequest for AnalyzeSeoRequest {
    fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

/// Body of a keyword suggestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestKeywordsRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
}

impl SuggestKeywordsRequest {
    /// Requested count, or `default` when absent or zero.
    pub fn count_or(&self, default: usize) -> usize {
        self.count.filter(|&n| n > 0).unwrap_or(default)
    }
}

impl ContentRequest for SuggestKeywordsRequest {
    fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

/// Body of an AI rewrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub target_tone: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub draft_id: Option<String>,
}

impl RewriteRequest {
    /// Requested tone, or `default` when absent or empty.
    pub fn tone_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_empty(&self.target_tone).unwrap_or(default)
    }

    /// Draft the rewrite belongs to; empty when none was given.
    pub fn draft_id(&self) -> &str {
        self.draft_id.as_deref().unwrap_or_default()
    }

    /// Caller-supplied keywords, if any were given.
    pub fn keywords(&self) -> Option<&[String]> {
        self.keywords.as_deref().filter(|list| !list.is_empty())
    }
}

impl ContentRequest for RewriteRequest {
    fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

/// Body of a proofreading pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofreadRequest {
    #[serde(default)]
    pub content: Option<String>,
    /// Accepted for compatibility; the collaborator decides how to use it.
    #[serde(default)]
    pub target_audience: Option<String>,
}

impl ContentRequest for ProofreadRequest {
    fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

/// Body of a meta tag generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub primary_keyword: Option<String>,
}

impl MetaRequest {
    /// The primary keyword, when a non-empty one was given.
    pub fn primary_keyword(&self) -> Option<&str> {
        non_empty(&self.primary_keyword)
    }
}

impl ContentRequest for MetaRequest {
    fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}
