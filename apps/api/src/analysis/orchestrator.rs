//! Analyzer — runs one analysis from a candidate profile to an `AnalysisResult`.
//!
//! Received → Normalized → GapsComputed → PlanSynthesized → SummaryComposed → Done.
//! Strictly sequential; no partial result is ever exposed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::analysis::gap_detector::detect_gaps;
use crate::analysis::models::{AnalysisResult, CandidateProfile};
use crate::analysis::normalizer::SkillMatcher;
use crate::analysis::plan::{synthesize_plan, PlanTemplates, PLAN_CAP};
use crate::analysis::registry::RoleRegistry;
use crate::analysis::summary::compose_summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStage {
    Received,
    Normalized,
    GapsComputed,
    PlanSynthesized,
    SummaryComposed,
    Done,
}

/// Immutable lookup tables plus the matching strategy. Built once at startup
/// and shared by every request as `Arc<Analyzer>`.
pub struct Analyzer {
    registry: RoleRegistry,
    templates: PlanTemplates,
    matcher: Box<dyn SkillMatcher>,
}

impl Analyzer {
    pub fn new(
        registry: RoleRegistry,
        templates: PlanTemplates,
        matcher: Box<dyn SkillMatcher>,
    ) -> Self {
        Self {
            registry,
            templates,
            matcher,
        }
    }

    /// Built-in tables with the containment matcher.
    #[cfg(test)]
    pub fn builtin() -> Self {
        Self::new(
            RoleRegistry::builtin(),
            PlanTemplates::builtin(),
            Box::new(crate::analysis::normalizer::ContainmentMatcher),
        )
    }

    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    pub fn matcher_name(&self) -> &'static str {
        self.matcher.name()
    }

    /// Runs the full pipeline with a caller-supplied randomness source.
    pub fn analyze<R: Rng + ?Sized>(
        &self,
        profile: &CandidateProfile,
        target_role: &str,
        rng: &mut R,
    ) -> AnalysisResult {
        debug!(stage = ?AnalysisStage::Received, role = target_role);

        debug!(
            stage = ?AnalysisStage::Normalized,
            skills = profile.canonical_skills().len()
        );

        let requirement = self.registry.requirements_for(target_role);
        let gaps = detect_gaps(profile, requirement, self.matcher.as_ref());
        debug!(
            stage = ?AnalysisStage::GapsComputed,
            resolved_role = %requirement.role,
            gaps = gaps.len()
        );

        let plan = synthesize_plan(&gaps, target_role, PLAN_CAP, &self.templates);
        debug!(stage = ?AnalysisStage::PlanSynthesized, items = plan.len());

        let summary = compose_summary(profile, target_role, gaps.len(), rng);
        debug!(stage = ?AnalysisStage::SummaryComposed);

        debug!(stage = ?AnalysisStage::Done);
        AnalysisResult {
            summary,
            gaps,
            plan,
        }
    }

    /// Seeded entry point. `None` draws the seed from OS entropy.
    pub fn analyze_seeded(
        &self,
        profile: &CandidateProfile,
        target_role: &str,
        seed: Option<u64>,
    ) -> AnalysisResult {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.analyze(profile, target_role, &mut rng)
    }
}
