use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, info};

use crate::analysis::models::{CandidateProfile, ExperienceLevel};
use crate::extraction::{ExtractionError, ExtractionInput, ResumeExtractor, ResumeSource};

/// Skill terms recognized in resume text, reported in this order.
const SKILL_LEXICON: &[&str] = &[
    // Frontend
    "HTML", "CSS", "JavaScript", "TypeScript", "React", "React Native", "Redux", "Next.js",
    "Angular", "Vue.js", "Tailwind", "Bootstrap", "Webpack", "Vite", "Jest", "Mocha",
    // Backend
    "Node.js", "Express", "Python", "Django", "Flask", "Java", "Spring Boot", "PHP", "GraphQL",
    "REST", "Microservices", "JWT",
    // Data stores
    "SQL", "MongoDB", "PostgreSQL", "MySQL", "Prisma", "Redis", "NoSQL",
    // Data science
    "Pandas", "NumPy", "Scikit-learn", "TensorFlow", "PyTorch", "Keras", "Machine Learning",
    "Statistics", "Jupyter", "Tableau", "Power BI", "Matplotlib", "Seaborn",
    // DevOps
    "Git", "GitHub Actions", "Jenkins", "Docker", "Kubernetes", "AWS", "Azure", "GCP",
    "Terraform", "Ansible", "Linux", "Bash", "Prometheus", "CI/CD",
    // Mobile
    "Flutter", "Swift", "Kotlin", "Android", "iOS", "Firebase",
];

/// Default extractor: PDF text via `pdf-extract`, then a lexicon scan.
pub struct KeywordExtractor;

#[async_trait]
impl ResumeExtractor for KeywordExtractor {
    async fn extract(&self, input: ExtractionInput) -> Result<CandidateProfile, ExtractionError> {
        let text = match input.source {
            ResumeSource::Document(bytes) => pdf_to_text(bytes).await?,
            ResumeSource::Text(text) => text,
        };

        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }

        let skills = scan_skills(&text);
        let level = detect_experience_level(&text);

        info!(
            skills = skills.len(),
            level = %level,
            locale = input.locale.as_deref().unwrap_or("unspecified"),
            "Resume extracted"
        );

        Ok(CandidateProfile::new(skills, level))
    }
}

/// PDF parsing is CPU bound; keep it off the async workers.
async fn pdf_to_text(bytes: Bytes) -> Result<String, ExtractionError> {
    debug!(bytes = bytes.len(), "Extracting PDF text");
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await?
        .map_err(|e| ExtractionError::Pdf(e.to_string()))
}

/// Lexicon terms present in `text`, case-insensitive, on word boundaries.
pub fn scan_skills(text: &str) -> Vec<&'static str> {
    let haystack = text.to_lowercase();
    SKILL_LEXICON
        .iter()
        .copied()
        .filter(|term| contains_term(&haystack, &term.to_lowercase()))
        .collect()
}

fn contains_term(haystack: &str, term: &str) -> bool {
    haystack.match_indices(term).any(|(start, _)| {
        let end = start + term.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Largest "<n> years" mention: 3+ is senior, 1-2 junior, otherwise fresher.
pub fn detect_experience_level(text: &str) -> ExperienceLevel {
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();

    let max_years = tokens
        .iter()
        .enumerate()
        .filter_map(|(i, token)| years_mentioned(token, tokens.get(i + 1).map(String::as_str)))
        .max()
        .unwrap_or(0);

    match max_years {
        0 => ExperienceLevel::Fresher,
        1 | 2 => ExperienceLevel::Junior,
        _ => ExperienceLevel::Senior,
    }
}

fn years_mentioned(token: &str, next: Option<&str>) -> Option<u32> {
    let token = token.trim_start_matches(|c: char| !c.is_ascii_digit());
    let (mut years, mut rest) = leading_number(token)?;

    // "1-2 years" / "3–5 yrs": the upper bound counts.
    if let Some(upper) = rest.strip_prefix('-').or_else(|| rest.strip_prefix('–')) {
        if let Some((bound, after)) = leading_number(upper) {
            years = years.max(bound);
            rest = after;
        }
    }

    let rest = rest.trim_start_matches('+');
    let unit = if rest.is_empty() { next? } else { rest };

    if (unit.starts_with("year") || unit.starts_with("yr")) && years <= 50 {
        Some(years)
    } else {
        None
    }
}

fn leading_number(s: &str) -> Option<(u32, &str)> {
    let digits_len = s.chars().take_while(char::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    Some((s[..digits_len].parse().ok()?, &s[digits_len..]))
}
