//! The AI collaborator seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Result of a proofreading pass.
///
/// The individual issues are whatever the collaborator reports; they are
/// passed through to the caller untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proofread {
    pub corrected_content: String,
    #[serde(default)]
    pub errors: Vec<Value>,
}

impl Proofread {
    pub fn new(corrected_content: impl Into<String>, errors: Vec<Value>) -> Self {
        Proofread {
            corrected_content: corrected_content.into(),
            errors,
        }
    }

    /// Number of reported issues.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// A generative text collaborator (typically an LLM behind an HTTP API).
///
/// Implementations may fail or hang; the service wraps every call in a
/// timeout and never exposes the error text to its own callers.
#[async_trait]
pub trait ContentAssistant: Send + Sync {
    /// Free-form qualitative analysis of the content.
    async fn analyze(&self, content: &str) -> Result<Value>;

    /// Rewrite the content for the given keywords and tone.
    async fn rewrite(&self, content: &str, keywords: &[String], tone: &str) -> Result<String>;

    /// Correct spelling and grammar.
    async fn proofread(&self, content: &str) -> Result<Proofread>;

    /// Generate meta tags (title, description, ...) around a primary keyword.
    async fn generate_meta(&self, content: &str, keyword: &str) -> Result<Value>;

    /// Get the name of this assistant (for logging).
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_proofread_from_json() {
        let proofread: Proofread = serde_json::from_value(json!({
            "correctedContent": "Their house is big.",
            "errors": [{"original": "There", "suggestion": "Their"}]
        }))
        .unwrap();

        assert_eq!(proofread.corrected_content, "Their house is big.");
        assert_eq!(proofread.error_count(), 1);
    }

    #[test]
    fn test_proofread_without_errors_field() {
        let proofread: Proofread =
            serde_json::from_value(json!({"correctedContent": "Fine."})).unwrap();
        assert_eq!(proofread.error_count(), 0);
    }
}
