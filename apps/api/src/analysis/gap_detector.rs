//! Gap detection: required skills no candidate skill covers, in registry order.

use crate::analysis::models::{CandidateProfile, GapList};
use crate::analysis::normalizer::{normalize, SkillMatcher};
use crate::analysis::registry::RoleRequirement;

/// Walks `requirement.required_skills` in order and keeps every skill that no
/// candidate skill matches. Order is preserved and no skill is repeated.
pub fn detect_gaps(
    candidate: &CandidateProfile,
    requirement: &RoleRequirement,
    matcher: &dyn SkillMatcher,
) -> GapList {
    requirement
        .required_skills
        .iter()
        .filter(|required| {
            let Some(required_canonical) = normalize(required) else {
                return false;
            };
            !candidate
                .canonical_skills()
                .iter()
                .any(|have| matcher.matches(have, &required_canonical))
        })
        .cloned()
        .collect()
}
