//! Skill normalization and the pluggable matching strategy used by gap detection.
//!
//! Default: `ContainmentMatcher` (either canonical string contains the other).
//! `ExactMatcher` is the strict alternative, swapped in via `SKILL_MATCHER`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whole-token aliases resolved after case folding.
const ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("reactjs", "react"),
    ("react.js", "react"),
    ("nodejs", "node.js"),
    ("node", "node.js"),
    ("k8s", "kubernetes"),
    ("postgres", "postgresql"),
    ("py", "python"),
];

/// Normalized skill identifier. Only constructed through [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalSkill(String);

impl CanonicalSkill {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalizes a raw skill token. Returns `None` for blank input.
pub fn normalize(raw: &str) -> Option<CanonicalSkill> {
    let folded = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if folded.is_empty() {
        return None;
    }

    let resolved = ALIASES
        .iter()
        .find(|(alias, _)| *alias == folded)
        .map(|(_, target)| (*target).to_string())
        .unwrap_or(folded);

    Some(CanonicalSkill(resolved))
}

/// Decides whether a candidate skill covers a required skill.
///
/// Carried by the `Analyzer` as `Box<dyn SkillMatcher>`.
pub trait SkillMatcher: Send + Sync {
    fn matches(&self, candidate: &CanonicalSkill, required: &CanonicalSkill) -> bool;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

/// Bidirectional substring containment: "react" covers "react native",
/// "css" covers "css/tailwind". False positives are accepted.
pub struct ContainmentMatcher;

impl SkillMatcher for ContainmentMatcher {
    fn matches(&self, candidate: &CanonicalSkill, required: &CanonicalSkill) -> bool {
        required.as_str().contains(candidate.as_str())
            || candidate.as_str().contains(required.as_str())
    }

    fn name(&self) -> &'static str {
        "containment"
    }
}

/// Canonical equality only.
pub struct ExactMatcher;

impl SkillMatcher for ExactMatcher {
    fn matches(&self, candidate: &CanonicalSkill, required: &CanonicalSkill) -> bool {
        candidate == required
    }

    fn name(&self) -> &'static str {
        "exact"
    }
}

/// Matcher selection as read from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatcherKind {
    #[default]
    Containment,
    Exact,
}

impl MatcherKind {
    pub fn build(self) -> Box<dyn SkillMatcher> {
        match self {
            MatcherKind::Containment => Box::new(ContainmentMatcher),
            MatcherKind::Exact => Box::new(ExactMatcher),
        }
    }
}

impl FromStr for MatcherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "containment" => Ok(MatcherKind::Containment),
            "exact" => Ok(MatcherKind::Exact),
            other => Err(format!("unknown skill matcher '{other}'")),
        }
    }
}
