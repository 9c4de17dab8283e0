use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{normalize, CanonicalSkill};

/// Seniority bucket reported by the extractor. Drives summary wording only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Fresher,
    Junior,
    Senior,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExperienceLevel::Fresher => "fresher",
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Senior => "senior",
        };
        f.write_str(label)
    }
}

/// A candidate's skills as received from extraction, deduplicated by canonical form.
///
/// Raw spellings are kept in first-seen order for display; `canonical` is
/// parallel to `skills`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateProfile {
    skills: Vec<String>,
    canonical: Vec<CanonicalSkill>,
    experience_level: ExperienceLevel,
}

impl CandidateProfile {
    pub fn new<I, S>(raw_skills: I, experience_level: ExperienceLevel) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skills = Vec::new();
        let mut canonical: Vec<CanonicalSkill> = Vec::new();

        for raw in raw_skills {
            let raw = raw.as_ref();
            let Some(skill) = normalize(raw) else {
                continue;
            };
            if canonical.contains(&skill) {
                continue;
            }
            skills.push(raw.trim().to_string());
            canonical.push(skill);
        }

        Self {
            skills,
            canonical,
            experience_level,
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn canonical_skills(&self) -> &[CanonicalSkill] {
        &self.canonical
    }

    pub fn experience_level(&self) -> ExperienceLevel {
        self.experience_level
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Required skills absent from a candidate, in registry (priority) order.
pub type GapList = Vec<String>;

/// One actionable learning unit tied to a single gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPlanItem {
    pub topic: String,
    #[serde(alias = "day")]
    pub duration: String,
    #[serde(rename = "youtube_search_term", alias = "youtube_query")]
    pub resource_query: String,
    #[serde(rename = "reason", alias = "description")]
    pub rationale: String,
}

/// Full output of one analysis. Serializes to the canonical wire schema;
/// legacy field names are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(alias = "candidate_summary")]
    pub summary: String,
    #[serde(rename = "skill_gaps", alias = "missing_skills")]
    pub gaps: GapList,
    #[serde(rename = "study_plan")]
    pub plan: Vec<StudyPlanItem>,
}
