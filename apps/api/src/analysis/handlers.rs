//! Axum route handlers for the Analysis API.

use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::models::{AnalysisResult, CandidateProfile, ExperienceLevel};
use crate::analysis::registry::DEFAULT_ROLE;
use crate::errors::AppError;
use crate::extraction::{ExtractionInput, ResumeSource};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default, alias = "target_role")]
    pub role: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<String>,
    pub default_role: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
///
/// Supported target roles, in registry order.
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    let registry = state.analyzer.registry();
    Json(RolesResponse {
        roles: registry.roles().map(String::from).collect(),
        default_role: registry.default_role().to_string(),
    })
}

/// POST /api/v1/analyze
///
/// Analyzes an already-extracted skill set against a target role.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = payload?;
    let request_id = Uuid::new_v4();
    let role = role_or_default(request.role);
    info!(
        %request_id,
        role = %role,
        skills = request.skills.len(),
        "Analysis requested"
    );

    let profile = CandidateProfile::new(&request.skills, request.experience_level);
    Ok(Json(
        run_analysis(&state, request_id, &profile, &role, request.seed).await,
    ))
}

/// POST /api/v1/analyze/resume
///
/// Multipart upload: `file` (PDF) or `text`, plus optional `role`, `language`
/// and `seed`. Extraction failures short-circuit before analysis.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let request_id = Uuid::new_v4();

    let mut file: Option<Bytes> = None;
    let mut text: Option<String> = None;
    let mut role: Option<String> = None;
    let mut language: Option<String> = None;
    let mut seed: Option<u64> = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => file = Some(field.bytes().await.map_err(malformed)?),
            "text" => text = Some(field.text().await.map_err(malformed)?),
            "role" | "target_role" => role = Some(field.text().await.map_err(malformed)?),
            "language" => language = Some(field.text().await.map_err(malformed)?),
            "seed" => {
                let raw = field.text().await.map_err(malformed)?;
                let parsed = raw.trim().parse::<u64>().map_err(|_| {
                    AppError::Validation(format!("seed must be an unsigned integer, got '{raw}'"))
                })?;
                seed = Some(parsed);
            }
            other => debug!(%request_id, field = other, "Ignoring unknown multipart field"),
        }
    }

    let source = match (file, text) {
        (Some(bytes), _) if !bytes.is_empty() => ResumeSource::Document(bytes),
        (_, Some(text)) if !text.trim().is_empty() => ResumeSource::Text(text),
        _ => return Err(AppError::Validation("No file or text provided".to_string())),
    };

    let role = role_or_default(role);
    info!(
        %request_id,
        role = %role,
        document = matches!(source, ResumeSource::Document(_)),
        "Resume analysis requested"
    );

    let profile = state
        .extractor
        .extract(ExtractionInput {
            source,
            locale: language,
        })
        .await?;

    Ok(Json(
        run_analysis(&state, request_id, &profile, &role, seed).await,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn run_analysis(
    state: &AppState,
    request_id: Uuid,
    profile: &CandidateProfile,
    role: &str,
    seed: Option<u64>,
) -> AnalysisResult {
    simulate_processing(state.config.analysis_delay).await;

    let result = state
        .analyzer
        .analyze_seeded(profile, role, seed.or(state.config.summary_seed));

    info!(
        %request_id,
        gaps = result.gaps.len(),
        plan_items = result.plan.len(),
        "Analysis complete"
    );
    result
}

/// Request-scoped wait; dropped with the request future if the client goes away.
async fn simulate_processing(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

fn role_or_default(role: Option<String>) -> String {
    role.map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_ROLE.to_string())
}

fn malformed(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Malformed multipart body: {e}"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::orchestrator::Analyzer;
    use crate::config::Config;
    use crate::extraction::KeywordExtractor;
    use crate::routes::build_router;

    const BOUNDARY: &str = "kaushal-test-boundary";

    fn app_with(config: Config) -> Router {
        build_router(AppState {
            analyzer: Arc::new(Analyzer::builtin()),
            extractor: Arc::new(KeywordExtractor),
            config,
        })
    }

    fn app() -> Router {
        app_with(Config::default())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(fields: &[(&str, &str)]) -> Request<Body> {
        multipart_request_with_file(None, fields)
    }

    fn multipart_request_with_file(file: Option<&[u8]>, fields: &[(&str, &str)]) -> Request<Body> {
        let mut body: Vec<u8> = Vec::new();
        if let Some(file) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"resume.pdf\"\r\nContent-Type: application/pdf\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(file);
            body.extend_from_slice(b"\r\n");
        }
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/analyze/resume")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn test_role_or_default() {
        assert_eq!(role_or_default(None), DEFAULT_ROLE);
        assert_eq!(role_or_default(Some("   ".to_string())), DEFAULT_ROLE);
        assert_eq!(
            role_or_default(Some(" Data Scientist ".to_string())),
            "Data Scientist"
        );
    }

    #[tokio::test]
    async fn test_analyze_frontend_scenario() {
        let (status, body) = send(
            app(),
            json_request(
                "/api/v1/analyze",
                json!({
                    "skills": ["HTML", "CSS", "JavaScript"],
                    "experience_level": "fresher",
                    "role": "Frontend Developer",
                    "seed": 1
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["skill_gaps"],
            json!([
                "React",
                "TypeScript",
                "Redux/State Management",
                "Webpack/Vite",
                "Testing (Jest)",
                "Responsive Design",
                "Git"
            ])
        );
        let plan = body["study_plan"].as_array().unwrap();
        assert_eq!(plan.len(), 6);
        assert_eq!(plan[0]["topic"], "React.js Fundamentals");
        assert!(plan[0]["youtube_search_term"].is_string());
        assert!(plan[0]["reason"].is_string());
        assert!(body["summary"].as_str().unwrap().contains("Frontend Developer"));
    }

    #[tokio::test]
    async fn test_analyze_is_deterministic_with_seed() {
        let request = || {
            json_request(
                "/api/v1/analyze",
                json!({"skills": ["Python"], "target_role": "Data Scientist", "seed": 99}),
            )
        };
        let (_, first) = send(app(), request()).await;
        let (_, second) = send(app(), request()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_analyze_unknown_role_uses_default_list() {
        let (status, body) = send(
            app(),
            json_request(
                "/api/v1/analyze",
                json!({"skills": [], "role": "Quantum Alchemist"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skill_gaps"].as_array().unwrap().len(), 10);
        assert_eq!(body["skill_gaps"][0], "React");
    }

    #[tokio::test]
    async fn test_analyze_missing_skills_is_rejected() {
        let (status, body) = send(
            app(),
            json_request("/api/v1/analyze", json!({"role": "Data Scientist"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INVALID_BODY");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("skills"));
    }

    #[tokio::test]
    async fn test_analyze_malformed_json_uses_error_envelope() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analyze")
            .header("content-type", "application/json")
            .body(Body::from("{\"skills\": [\"Git\""))
            .unwrap();
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_resume_pdf_upload() {
        let pdf: &[u8] = include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/resume.pdf"
        ));
        let (status, body) = send(
            app(),
            multipart_request_with_file(
                Some(pdf),
                &[("role", "Frontend Developer"), ("seed", "3")],
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let gaps = body["skill_gaps"].as_array().unwrap();
        assert!(!gaps.contains(&json!("React")));
        assert!(!gaps.contains(&json!("TypeScript")));
        assert!(!gaps.contains(&json!("Git")));
        assert_eq!(gaps[0], "CSS/Tailwind");
        let summary = body["summary"].as_str().unwrap();
        assert!(summary.contains("Frontend Developer"));
        assert!(summary.contains("senior"));
    }

    #[tokio::test]
    async fn test_list_roles() {
        let request = Request::builder()
            .uri("/api/v1/roles")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roles"].as_array().unwrap().len(), 6);
        assert_eq!(body["default_role"], DEFAULT_ROLE);
    }

    #[tokio::test]
    async fn test_resume_text_upload() {
        let (status, body) = send(
            app(),
            multipart_request(&[
                ("text", "2 years with React, TypeScript, Tailwind and Git"),
                ("role", "Frontend Developer"),
                ("language", "Hindi"),
                ("seed", "5"),
            ]),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let gaps = body["skill_gaps"].as_array().unwrap();
        assert!(!gaps.contains(&json!("React")));
        assert!(!gaps.contains(&json!("Git")));
        assert!(gaps.contains(&json!("Webpack/Vite")));
    }

    #[tokio::test]
    async fn test_resume_without_file_or_text_is_bad_request() {
        let (status, body) = send(app(), multipart_request(&[("role", "Data Scientist")])).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "No file or text provided");
    }

    #[tokio::test]
    async fn test_resume_bad_seed_is_bad_request() {
        let (status, _) = send(
            app(),
            multipart_request(&[("text", "Python"), ("seed", "abc")]),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_delay_is_awaited_not_blocking() {
        let config = Config {
            analysis_delay: Duration::from_secs(2),
            ..Config::default()
        };
        let started = tokio::time::Instant::now();

        let (status, _) = send(
            app_with(config),
            json_request("/api/v1/analyze", json!({"skills": ["Docker"]})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}
