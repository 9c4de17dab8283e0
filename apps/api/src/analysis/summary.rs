//! Narrative summary for an analysis, picked from a fixed template pool.

use rand::Rng;

use crate::analysis::models::CandidateProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryTemplate {
    ProfileOverview,
    FoundationRoadmap,
    QuickVerdict,
}

impl SummaryTemplate {
    pub const ALL: [SummaryTemplate; 3] = [
        SummaryTemplate::ProfileOverview,
        SummaryTemplate::FoundationRoadmap,
        SummaryTemplate::QuickVerdict,
    ];

    fn render(self, profile: &CandidateProfile, role: &str, gap_count: usize) -> String {
        let level = profile.experience_level();
        let skill_count = profile.skills().len();

        match self {
            SummaryTemplate::ProfileOverview => format!(
                "Based on your resume analysis for {role}, you have a {level} profile with \
                 {skill_count} core skills. {gap_count} critical gaps identified. Focus on the \
                 recommended study plan to bridge these gaps and become job-ready."
            ),
            SummaryTemplate::FoundationRoadmap => format!(
                "Your resume shows {level} level expertise with strong foundation in {}. To \
                 compete for {role} positions, you need to master {gap_count} additional skills. \
                 Follow the personalized roadmap below.",
                leading_skills(profile)
            ),
            SummaryTemplate::QuickVerdict => format!(
                "Analysis complete! You're at {level} level with {skill_count} skills mapped. \
                 {gap_count} high-priority gaps found. Companies hiring for {role} expect these \
                 skills. Start learning today!"
            ),
        }
    }
}

fn leading_skills(profile: &CandidateProfile) -> String {
    if profile.is_empty() {
        return "the basics".to_string();
    }
    profile
        .skills()
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Picks a template with `rng` and fills it in. Same inputs and same rng state
/// give the same text.
pub fn compose_summary<R: Rng + ?Sized>(
    profile: &CandidateProfile,
    role: &str,
    gap_count: usize,
    rng: &mut R,
) -> String {
    let template = SummaryTemplate::ALL[rng.gen_range(0..SummaryTemplate::ALL.len())];
    template.render(profile, role, gap_count)
}
