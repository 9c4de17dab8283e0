mod analysis;
mod config;
mod errors;
mod extraction;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::orchestrator::Analyzer;
use crate::analysis::plan::PlanTemplates;
use crate::analysis::registry::RoleRegistry;
use crate::config::Config;
use crate::extraction::KeywordExtractor;
use crate::routes::{build_router, with_http_layers};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Kaushal API v{}", env!("CARGO_PKG_VERSION"));

    // Lookup tables are built once here and never mutated afterwards
    let registry = RoleRegistry::builtin();
    let templates = PlanTemplates::builtin();
    let analyzer = Analyzer::new(registry, templates, config.skill_matcher.build());
    info!(
        "Analyzer ready: {} roles, default '{}', matcher '{}'",
        analyzer.registry().roles().count(),
        analyzer.registry().default_role(),
        analyzer.matcher_name()
    );

    if !config.analysis_delay.is_zero() {
        info!(
            "Simulated processing delay: {}ms",
            config.analysis_delay.as_millis()
        );
    }

    let state = AppState {
        analyzer: Arc::new(analyzer),
        extractor: Arc::new(KeywordExtractor),
        config: config.clone(),
    };

    let app = with_http_layers(build_router(state));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
