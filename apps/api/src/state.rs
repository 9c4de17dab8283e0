use std::sync::Arc;

use crate::analysis::orchestrator::Analyzer;
use crate::config::Config;
use crate::extraction::ResumeExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Role registry, plan templates and matcher. Read-only after startup.
    pub analyzer: Arc<Analyzer>,
    /// Pluggable resume extractor. Default: KeywordExtractor.
    pub extractor: Arc<dyn ResumeExtractor>,
    pub config: Config,
}
