//! In-memory draft store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::drafts::{Draft, DraftStatus, DraftStore, DraftUpdate, NewDraft, OptimizationSession};
use crate::error::{Result, SeoError};

#[derive(Debug)]
struct StoredDraft {
    draft: Draft,
    /// Monotonic write counter; orders drafts updated within the same instant.
    revision: u64,
}

#[derive(Debug, Default)]
struct Inner {
    drafts: HashMap<Uuid, StoredDraft>,
    sessions: Vec<OptimizationSession>,
    revision: u64,
}

impl Inner {
    fn next_revision(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }
}

/// A draft store kept in process memory.
///
/// Useful for tests, the CLI and single-node deployments. All state sits
/// behind one `RwLock`; no lock is held across an await point.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    inner: RwLock<Inner>,
}

impl MemoryDraftStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of drafts across all users.
    pub fn draft_count(&self) -> usize {
        self.inner.read().drafts.len()
    }

    /// Total number of recorded sessions across all users.
    pub fn session_count(&self) -> usize {
        self.inner.read().sessions.len()
    }
}

fn draft_not_found(id: Uuid) -> SeoError {
    SeoError::not_found(format!("Draft {id} not found"))
}

#[async_trait]
impl DraftStore for MemoryDraftStore {
    async fn list_drafts(&self, user_id: &str, limit: usize) -> Result<Vec<Draft>> {
        let inner = self.inner.read();
        let mut owned: Vec<&StoredDraft> = inner
            .drafts
            .values()
            .filter(|stored| stored.draft.user_id == user_id)
            .collect();

        owned.sort_by(|a, b| {
            b.draft
                .updated_at
                .cmp(&a.draft.updated_at)
                .then_with(|| b.revision.cmp(&a.revision))
        });

        Ok(owned
            .into_iter()
            .take(limit)
            .map(|stored| stored.draft.clone())
            .collect())
    }

    async fn create_draft(&self, user_id: &str, draft: NewDraft) -> Result<Draft> {
        let now = Utc::now();
        let created = Draft {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            title: draft.title,
            content: draft.content,
            optimized_content: draft.optimized_content,
            status: DraftStatus::Draft,
            created_at: now,
            updated_at: now,
        };

        let mut inner = self.inner.write();
        let revision = inner.next_revision();
        inner.drafts.insert(
            created.id,
            StoredDraft {
                draft: created.clone(),
                revision,
            },
        );

        log::debug!("created draft {} for user {}", created.id, user_id);
        Ok(created)
    }

    async fn update_draft(&self, user_id: &str, id: Uuid, update: DraftUpdate) -> Result<Draft> {
        let mut inner = self.inner.write();
        let revision = inner.next_revision();

        let stored = inner
            .drafts
            .get_mut(&id)
            .filter(|stored| stored.draft.user_id == user_id)
            .ok_or_else(|| draft_not_found(id))?;

        update.apply_to(&mut stored.draft);
        stored.draft.updated_at = Utc::now();
        stored.revision = revision;

        Ok(stored.draft.clone())
    }

    async fn delete_draft(&self, user_id: &str, id: Uuid) -> Result<()> {
        let mut inner = self.inner.write();
        let owned = inner
            .drafts
            .get(&id)
            .is_some_and(|stored| stored.draft.user_id == user_id);
        if !owned {
            return Err(draft_not_found(id));
        }

        inner.drafts.remove(&id);
        log::debug!("deleted draft {id} for user {user_id}");
        Ok(())
    }

    async fn record_session(&self, session: OptimizationSession) -> Result<OptimizationSession> {
        self.inner.write().sessions.push(session.clone());
        Ok(session)
    }

    async fn list_sessions(&self, user_id: &str) -> Result<Vec<OptimizationSession>> {
        Ok(self
            .inner
            .read()
            .sessions
            .iter()
            .filter(|session| session.user_id == user_id)
            .cloned()
            .collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
