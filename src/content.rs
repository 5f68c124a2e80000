//! Content-writing assistance on top of the SEO engine.
//!
//! [`service::ContentService`] validates incoming JSON requests, delegates the
//! generative work (analysis, rewriting, proofreading, meta tags) to a
//! [`assistant::ContentAssistant`], scores the results with the SEO engine and
//! keeps drafts and optimization sessions in a [`crate::drafts::DraftStore`].

pub mod assistant;
pub mod request;
pub mod response;
pub mod service;

pub use assistant::{ContentAssistant, Proofread};
pub use request::{
    AnalyzeSeoRequest, ContentRequest, MetaRequest, ProofreadRequest, RewriteRequest,
    SuggestKeywordsRequest,
};
pub use response::{ContentAnalysis, ProofreadOutcome, RewriteOutcome};
pub use service::{ContentService, ServiceConfig};
