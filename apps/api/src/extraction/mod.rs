//! Resume extraction — turns an uploaded document or pasted text into a
//! `CandidateProfile` before analysis runs.
//!
//! `AppState` holds an `Arc<dyn ResumeExtractor>`; `KeywordExtractor` is the
//! default backend.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::analysis::models::CandidateProfile;

pub mod keyword;

pub use keyword::KeywordExtractor;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("Document contains no readable text")]
    EmptyDocument,

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone)]
pub enum ResumeSource {
    /// Raw PDF bytes from an upload.
    Document(Bytes),
    /// Pasted resume text.
    Text(String),
}

#[derive(Debug, Clone)]
pub struct ExtractionInput {
    pub source: ResumeSource,
    /// Language/locale hint from the client, e.g. "Hindi".
    pub locale: Option<String>,
}

#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract(&self, input: ExtractionInput) -> Result<CandidateProfile, ExtractionError>;
}
