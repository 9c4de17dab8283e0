use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::analysis::normalizer::MatcherKind;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Simulated processing delay applied inside each analysis request.
    pub analysis_delay: Duration,
    pub max_upload_bytes: usize,
    pub skill_matcher: MatcherKind,
    /// Summary seed used when a request does not carry one.
    pub summary_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            analysis_delay: Duration::ZERO,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            skill_matcher: MatcherKind::default(),
            summary_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: parse_env("PORT")?.unwrap_or(defaults.port),
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            analysis_delay: parse_env::<u64>("ANALYSIS_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.analysis_delay),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES")?.unwrap_or(defaults.max_upload_bytes),
            skill_matcher: match std::env::var("SKILL_MATCHER") {
                Ok(raw) => raw
                    .parse::<MatcherKind>()
                    .map_err(|e| anyhow!(e))
                    .context("SKILL_MATCHER must be 'containment' or 'exact'")?,
                Err(_) => defaults.skill_matcher,
            },
            summary_seed: parse_env("SUMMARY_SEED")?,
        })
    }
}

fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(None),
    }
}
