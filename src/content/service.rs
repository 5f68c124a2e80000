//! Orchestration of the content endpoints.
//!
//! Each operation validates its request, calls the collaborator under a
//! timeout, scores the text with the shared [`SeoEngine`] and, for rewrites by
//! a known user, records an [`OptimizationSession`]. Collaborator and storage
//! failures are logged with their cause and surfaced with a fixed
//! per-operation message.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::content::assistant::ContentAssistant;
use crate::content::request::{
    AnalyzeSeoRequest, ContentRequest, MetaRequest, ProofreadRequest, RewriteRequest,
    SuggestKeywordsRequest,
};
use crate::content::response::{ContentAnalysis, ProofreadOutcome, RewriteOutcome};
use crate::drafts::{
    DEFAULT_LIST_LIMIT, Draft, DraftStore, DraftUpdate, NewDraft, OptimizationSession,
};
use crate::error::{Result, SeoError};
use crate::seo::engine::SeoEngine;
use crate::seo::report::SeoAnalysis;

const ANALYSIS_FAILED: &str = "Content analysis failed";
const REWRITE_FAILED: &str = "Content rewriting failed";
const PROOFREAD_FAILED: &str = "Proofreading failed";
const META_FAILED: &str = "Meta content generation failed";
const FETCH_DRAFTS_FAILED: &str = "Failed to fetch drafts";
const FETCH_SESSIONS_FAILED: &str = "Failed to fetch optimization sessions";
const SAVE_DRAFT_FAILED: &str = "Failed to save draft";
const UPDATE_DRAFT_FAILED: &str = "Failed to update draft";
const DELETE_DRAFT_FAILED: &str = "Failed to delete draft";

/// Tunables of the content service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Upper bound on every collaborator call.
    pub upstream_timeout: Duration,
    /// Tone used when a rewrite request names none.
    pub default_tone: String,
    /// Keywords derived for a rewrite that names none.
    pub rewrite_keyword_count: usize,
    /// Keywords returned by a suggestion that names no count.
    pub suggest_keyword_count: usize,
    /// Maximum number of drafts in a listing.
    pub draft_list_limit: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            upstream_timeout: Duration::from_secs(30),
            default_tone: "professional".to_string(),
            rewrite_keyword_count: 5,
            suggest_keyword_count: 10,
            draft_list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ServiceConfig {
    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }
}

/// The content-writing service.
///
/// Cheap to clone; all collaborators are shared.
#[derive(Clone)]
pub struct ContentService {
    engine: Arc<SeoEngine>,
    assistant: Arc<dyn ContentAssistant>,
    drafts: Arc<dyn DraftStore>,
    config: ServiceConfig,
}

impl ContentService {
    pub fn new(
        engine: Arc<SeoEngine>,
        assistant: Arc<dyn ContentAssistant>,
        drafts: Arc<dyn DraftStore>,
    ) -> Self {
        ContentService {
            engine,
            assistant,
            drafts,
            config: ServiceConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn engine(&self) -> &SeoEngine {
        &self.engine
    }

    /// Run a collaborator call under the configured timeout.
    ///
    /// The returned error carries only `operation`; the cause goes to the log.
    async fn upstream<T, F>(&self, operation: &'static str, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout(self.config.upstream_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                log::error!("{operation} ({}): {e}", self.assistant.name());
                Err(SeoError::upstream(operation))
            }
            Err(_) => {
                log::error!(
                    "{operation} ({}): no answer within {:?}",
                    self.assistant.name(),
                    self.config.upstream_timeout
                );
                Err(SeoError::timeout(operation))
            }
        }
    }

    /// Map a store error to the operation message, keeping lookups as 404.
    fn storage_error(&self, operation: &'static str, error: SeoError) -> SeoError {
        if matches!(error, SeoError::NotFound(_)) {
            return error;
        }
        log::error!("{operation} ({}): {error}", self.drafts.name());
        SeoError::storage(operation)
    }

    /// AI and SEO analysis of the same content, computed concurrently.
    pub async fn analyze_content(&self, body: Value) -> Result<ContentAnalysis> {
        let request = AnalyzeSeoRequest::from_value(body)?;
        let content = request.content();

        let (ai, seo) = futures::join!(
            self.upstream(ANALYSIS_FAILED, self.assistant.analyze(content)),
            async { self.engine.analyze(content, None) }
        );

        Ok(ContentAnalysis {
            ai: ai?,
            seo,
            timestamp: Utc::now(),
        })
    }

    /// Rewrite content and compare both versions.
    ///
    /// When `user_id` is present the rewrite is recorded as an optimization
    /// session.
    pub async fn rewrite_content(
        &self,
        user_id: Option<&str>,
        body: Value,
    ) -> Result<RewriteOutcome> {
        let request = RewriteRequest::from_value(body)?;
        let content = request.content();
        let tone = request.tone_or(&self.config.default_tone);
        let keywords = match request.keywords() {
            Some(list) => list.to_vec(),
            None => self
                .engine
                .extract_keywords(content, self.config.rewrite_keyword_count),
        };

        let optimized = self
            .upstream(REWRITE_FAILED, self.assistant.rewrite(content, &keywords, tone))
            .await?;
        let comparison = self.engine.compare(content, &optimized, Some(&keywords));

        if let Some(user_id) = user_id {
            let session = OptimizationSession::new(
                user_id,
                request.draft_id(),
                content,
                optimized.as_str(),
                comparison.clone(),
                tone,
            );
            self.drafts
                .record_session(session)
                .await
                .map_err(|e| self.storage_error(REWRITE_FAILED, e))?;
        }

        Ok(RewriteOutcome::new(
            content.to_string(),
            optimized,
            comparison,
        ))
    }

    /// Proofread content and score the readability of the correction.
    pub async fn proofread_content(&self, body: Value) -> Result<ProofreadOutcome> {
        let request = ProofreadRequest::from_value(body)?;
        let content = request.content();

        let proofread = self
            .upstream(PROOFREAD_FAILED, self.assistant.proofread(content))
            .await?;
        let readability = self
            .engine
            .calculate_readability(&proofread.corrected_content);
        let error_count = proofread.error_count();

        Ok(ProofreadOutcome {
            original: content.to_string(),
            corrected: proofread.corrected_content,
            errors: proofread.errors,
            readability,
            error_count,
        })
    }

    /// Generate meta tags around the primary keyword, falling back to the
    /// top extracted keyword and then to `"content"`.
    pub async fn generate_meta(&self, body: Value) -> Result<Value> {
        let request = MetaRequest::from_value(body)?;
        let content = request.content();
        let keyword = match request.primary_keyword() {
            Some(keyword) => keyword.to_string(),
            None => self
                .engine
                .extract_keywords(content, 1)
                .into_iter()
                .next()
                .unwrap_or_else(|| "content".to_string()),
        };

        self.upstream(META_FAILED, self.assistant.generate_meta(content, &keyword))
            .await
    }

    /// Keyword suggestions for the content.
    pub fn suggest_keywords(&self, body: Value) -> Result<Vec<String>> {
        let request = SuggestKeywordsRequest::from_value(body)?;
        let count = request.count_or(self.config.suggest_keyword_count);
        Ok(self.engine.extract_keywords(request.content(), count))
    }

    /// Plain SEO analysis with optional keywords.
    pub fn analyze_seo(&self, body: Value) -> Result<SeoAnalysis> {
        let request = AnalyzeSeoRequest::from_value(body)?;
        Ok(self
            .engine
            .analyze(request.content(), request.keywords.as_deref()))
    }

    /// The user's drafts, most recently updated first.
    pub async fn list_drafts(&self, user_id: &str) -> Result<Vec<Draft>> {
        self.drafts
            .list_drafts(user_id, self.config.draft_list_limit)
            .await
            .map_err(|e| self.storage_error(FETCH_DRAFTS_FAILED, e))
    }

    /// Save a new draft for the user.
    pub async fn save_draft(&self, user_id: &str, body: Value) -> Result<Draft> {
        let draft: NewDraft =
            serde_json::from_value(body).map_err(|e| SeoError::invalid_input(e.to_string()))?;
        self.drafts
            .create_draft(user_id, draft)
            .await
            .map_err(|e| self.storage_error(SAVE_DRAFT_FAILED, e))
    }

    /// Update the supplied fields of one of the user's drafts.
    pub async fn update_draft(&self, user_id: &str, id: Uuid, body: Value) -> Result<Draft> {
        let update: DraftUpdate =
            serde_json::from_value(body).map_err(|e| SeoError::invalid_input(e.to_string()))?;
        self.drafts
            .update_draft(user_id, id, update)
            .await
            .map_err(|e| self.storage_error(UPDATE_DRAFT_FAILED, e))
    }

    /// Delete one of the user's drafts.
    pub async fn delete_draft(&self, user_id: &str, id: Uuid) -> Result<()> {
        self.drafts
            .delete_draft(user_id, id)
            .await
            .map_err(|e| self.storage_error(DELETE_DRAFT_FAILED, e))
    }

    /// Optimization sessions recorded for the user.
    pub async fn list_sessions(&self, user_id: &str) -> Result<Vec<OptimizationSession>> {
        self.drafts
            .list_sessions(user_id)
            .await
            .map_err(|e| self.storage_error(FETCH_SESSIONS_FAILED, e))
    }
}

impl std::fmt::Debug for ContentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentService")
            .field("assistant", &self.assistant.name())
            .field("drafts", &self.drafts.name())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::assistant::Proofread;
    use crate::drafts::MemoryDraftStore;
    use async_trait::async_trait;
    use serde_json::json;

    struct Uppercase;

    #[async_trait]
    impl ContentAssistant for Uppercase {
        async fn analyze(&self, content: &str) -> Result<Value> {
            Ok(json!({"summary": content.len()}))
        }

        async fn rewrite(&self, content: &str, _keywords: &[String], _tone: &str) -> Result<String> {
            Ok(content.to_uppercase())
        }

        async fn proofread(&self, content: &str) -> Result<Proofread> {
            Ok(Proofread::new(content, Vec::new()))
        }

        async fn generate_meta(&self, _content: &str, keyword: &str) -> Result<Value> {
            Ok(json!({"keyword": keyword}))
        }

        fn name(&self) -> &'static str {
            "uppercase"
        }
    }

    fn service() -> ContentService {
        ContentService::new(
            Arc::new(SeoEngine::new()),
            Arc::new(Uppercase),
            Arc::new(MemoryDraftStore::new()),
        )
    }

    #[tokio::test]
    async fn test_meta_keyword_fallbacks() {
        let service = service();

        let meta = service
            .generate_meta(json!({"content": "Rust tooling. Rust crates."}))
            .await
            .unwrap();
        assert_eq!(meta["keyword"], "rust");

        let meta = service
            .generate_meta(json!({"content": "The and of.", "primaryKeyword": ""}))
            .await
            .unwrap();
        assert_eq!(meta["keyword"], "content");

        let meta = service
            .generate_meta(json!({"content": "Rust.", "primaryKeyword": "systems"}))
            .await
            .unwrap();
        assert_eq!(meta["keyword"], "systems");
    }

    #[tokio::test]
    async fn test_rewrite_without_user_records_nothing() {
        let store = Arc::new(MemoryDraftStore::new());
        let service = ContentService::new(
            Arc::new(SeoEngine::new()),
            Arc::new(Uppercase),
            store.clone(),
        );

        let outcome = service
            .rewrite_content(None, json!({"content": "Coffee beans. Coffee roast."}))
            .await
            .unwrap();
        assert_eq!(outcome.optimized, "COFFEE BEANS. COFFEE ROAST.");
        assert_eq!(store.session_count(), 0);
    }

    #[test]
    fn test_suggest_keywords_default_count() {
        let service = service();
        let keywords = service
            .suggest_keywords(json!({"content": "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu"}))
            .unwrap();
        assert_eq!(keywords.len(), 10);
    }
}
