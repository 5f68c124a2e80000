//! Per-user draft and optimization-session storage.
//!
//! Storage is an external collaborator: the [`DraftStore`] trait is the only
//! thing the service layer sees. Every operation is scoped to a user id; a
//! draft owned by someone else behaves exactly like a missing one.
//! [`memory::MemoryDraftStore`] is the in-process implementation.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::seo::report::SeoComparison;

pub mod memory;

pub use memory::MemoryDraftStore;

/// Maximum number of drafts returned by a listing.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Lifecycle state of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// A saved piece of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub optimized_content: Option<String>,
    pub status: DraftStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when saving a new draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub optimized_content: Option<String>,
}

/// Partial update of a draft; only `Some` fields change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub optimized_content: Option<String>,
    #[serde(default)]
    pub status: Option<DraftStatus>,
}

impl DraftUpdate {
    /// Apply the supplied fields to a draft.
    pub fn apply_to(self, draft: &mut Draft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(content) = self.content {
            draft.content = content;
        }
        if let Some(optimized) = self.optimized_content {
            draft.optimized_content = Some(optimized);
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
    }
}

/// A recorded rewrite: both versions, their analyses and the headline scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSession {
    pub id: Uuid,
    pub user_id: String,
    /// Draft this rewrite belongs to; empty when the caller gave none.
    pub draft_id: String,
    pub original_content: String,
    pub optimized_content: String,
    pub changes: SeoComparison,
    pub seo_score: u32,
    pub readability_score: f64,
    pub keyword_density: BTreeMap<String, f64>,
    pub target_tone: String,
    pub created_at: DateTime<Utc>,
}

impl OptimizationSession {
    /// Build a session from a comparison, pulling the stored scalars from
    /// the optimized analysis.
    pub fn new(
        user_id: impl Into<String>,
        draft_id: impl Into<String>,
        original_content: impl Into<String>,
        optimized_content: impl Into<String>,
        changes: SeoComparison,
        target_tone: impl Into<String>,
    ) -> Self {
        let optimized = &changes.optimized;
        OptimizationSession {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            draft_id: draft_id.into(),
            original_content: original_content.into(),
            optimized_content: optimized_content.into(),
            seo_score: optimized.seo_score(),
            readability_score: optimized.readability_score(),
            keyword_density: optimized.keyword_density.clone(),
            target_tone: target_tone.into(),
            created_at: Utc::now(),
            changes,
        }
    }
}

/// Persistence of drafts and optimization sessions.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Drafts of a user, most recently updated first, at most `limit`.
    async fn list_drafts(&self, user_id: &str, limit: usize) -> Result<Vec<Draft>>;

    /// Create a draft owned by the user.
    async fn create_draft(&self, user_id: &str, draft: NewDraft) -> Result<Draft>;

    /// Update a draft owned by the user.
    async fn update_draft(&self, user_id: &str, id: Uuid, update: DraftUpdate) -> Result<Draft>;

    /// Delete a draft owned by the user.
    async fn delete_draft(&self, user_id: &str, id: Uuid) -> Result<()>;

    /// Record an optimization session.
    async fn record_session(&self, session: OptimizationSession) -> Result<OptimizationSession>;

    /// Sessions recorded for a user, oldest first.
    async fn list_sessions(&self, user_id: &str) -> Result<Vec<OptimizationSession>>;

    /// Get the name of this store (for logging).
    fn name(&self) -> &'static str;
}
