//! Study-plan synthesis — turns the leading gaps into concrete learning items.
//!
//! Curated templates are keyed by canonical skill name. Skills without a
//! template get a generic item so synthesis never fails.

use std::collections::HashMap;

use crate::analysis::models::StudyPlanItem;
use crate::analysis::normalizer::{normalize, CanonicalSkill};

/// Maximum number of gaps turned into plan items.
pub const PLAN_CAP: usize = 6;

/// Duration used by the generic fallback item.
pub const FALLBACK_DURATION: &str = "3 Days";

struct Template {
    skill: &'static str,
    topic: &'static str,
    duration: &'static str,
    resource_query: &'static str,
    rationale: &'static str,
}

const TEMPLATES: &[Template] = &[
    Template {
        skill: "React",
        topic: "React.js Fundamentals",
        duration: "3-4 Days",
        resource_query: "React JS full course for beginners 2024",
        rationale: "React is the most in-demand frontend library. Essential for building modern user interfaces.",
    },
    Template {
        skill: "Node.js",
        topic: "Node.js & Express",
        duration: "3-4 Days",
        resource_query: "Node.js Express MongoDB full tutorial",
        rationale: "Backend development with Node.js is crucial for full-stack roles. High industry demand.",
    },
    Template {
        skill: "TypeScript",
        topic: "TypeScript Essentials",
        duration: "2-3 Days",
        resource_query: "TypeScript crash course for JavaScript developers",
        rationale: "TypeScript adds type safety and is now industry standard. Most companies require it.",
    },
    Template {
        skill: "SQL/NoSQL Databases",
        topic: "Database Management",
        duration: "4-5 Days",
        resource_query: "MongoDB MySQL PostgreSQL complete tutorial",
        rationale: "Database knowledge is fundamental. Every application needs data persistence.",
    },
    Template {
        skill: "REST APIs",
        topic: "RESTful API Design",
        duration: "2 Days",
        resource_query: "REST API tutorial for beginners complete guide",
        rationale: "API development is core to backend and full-stack roles. Critical for system integration.",
    },
    Template {
        skill: "Git",
        topic: "Git & GitHub",
        duration: "1-2 Days",
        resource_query: "Git and GitHub complete tutorial for beginners",
        rationale: "Version control is mandatory in all development jobs. Collaboration essential.",
    },
    Template {
        skill: "Docker",
        topic: "Docker Containerization",
        duration: "3 Days",
        resource_query: "Docker tutorial for beginners full course",
        rationale: "Docker is industry standard for deployment. Makes applications portable and scalable.",
    },
    Template {
        skill: "AWS/Cloud",
        topic: "AWS Cloud Basics",
        duration: "5-6 Days",
        resource_query: "AWS cloud practitioner full course free",
        rationale: "Cloud platforms like AWS are essential. 80% of companies use cloud infrastructure.",
    },
    Template {
        skill: "Redux/State Management",
        topic: "Redux & State Management",
        duration: "2-3 Days",
        resource_query: "Redux toolkit tutorial complete guide 2024",
        rationale: "State management is crucial for complex React apps. Required for scalable applications.",
    },
    Template {
        skill: "Testing (Jest/Mocha)",
        topic: "Testing & Test-Driven Development",
        duration: "3 Days",
        resource_query: "Jest testing tutorial React complete course",
        rationale: "Testing ensures code quality. Professional teams require unit and integration tests.",
    },
    Template {
        skill: "Python",
        topic: "Python Programming",
        duration: "4-5 Days",
        resource_query: "Python full course for beginners complete tutorial",
        rationale: "Python is versatile and used in web dev, data science, and automation.",
    },
    Template {
        skill: "Pandas/NumPy",
        topic: "Data Analysis with Pandas",
        duration: "3-4 Days",
        resource_query: "Pandas NumPy complete tutorial data analysis",
        rationale: "Essential libraries for data manipulation and analysis in Python.",
    },
    Template {
        skill: "Machine Learning",
        topic: "Machine Learning Fundamentals",
        duration: "7-10 Days",
        resource_query: "Machine learning full course Python scikit-learn",
        rationale: "ML is the foundation of AI/Data Science roles. High-paying skill.",
    },
    Template {
        skill: "TensorFlow/PyTorch",
        topic: "Deep Learning Frameworks",
        duration: "6-8 Days",
        resource_query: "TensorFlow PyTorch deep learning tutorial complete",
        rationale: "Deep learning frameworks are required for advanced AI projects.",
    },
    Template {
        skill: "Kubernetes",
        topic: "Kubernetes Orchestration",
        duration: "5-6 Days",
        resource_query: "Kubernetes tutorial for beginners full course",
        rationale: "K8s is the industry standard for container orchestration at scale.",
    },
    Template {
        skill: "CI/CD (Jenkins/GitHub Actions)",
        topic: "CI/CD Pipelines",
        duration: "3-4 Days",
        resource_query: "GitHub Actions CI CD tutorial complete guide",
        rationale: "Automated deployments are essential in modern DevOps practices.",
    },
    Template {
        skill: "Terraform",
        topic: "Infrastructure as Code",
        duration: "4 Days",
        resource_query: "Terraform tutorial for beginners complete course",
        rationale: "IaC is critical for managing cloud infrastructure efficiently.",
    },
    Template {
        skill: "React Native",
        topic: "React Native Mobile Development",
        duration: "5-6 Days",
        resource_query: "React Native full course build mobile apps",
        rationale: "Build cross-platform mobile apps. One codebase for iOS and Android.",
    },
    Template {
        skill: "Flutter",
        topic: "Flutter Mobile Development",
        duration: "5-6 Days",
        resource_query: "Flutter complete course for beginners mobile apps",
        rationale: "Flutter is Google's framework for beautiful native mobile apps.",
    },
    Template {
        skill: "GraphQL",
        topic: "GraphQL API Development",
        duration: "2-3 Days",
        resource_query: "GraphQL tutorial complete guide Node.js",
        rationale: "Modern alternative to REST. Efficient data fetching for complex apps.",
    },
];

/// Curated plan items keyed by canonical skill.
#[derive(Debug, Clone)]
pub struct PlanTemplates {
    by_skill: HashMap<CanonicalSkill, StudyPlanItem>,
}

impl PlanTemplates {
    pub fn builtin() -> Self {
        let by_skill = TEMPLATES
            .iter()
            .filter_map(|t| {
                let key = normalize(t.skill)?;
                let item = StudyPlanItem {
                    topic: t.topic.to_string(),
                    duration: t.duration.to_string(),
                    resource_query: t.resource_query.to_string(),
                    rationale: t.rationale.to_string(),
                };
                Some((key, item))
            })
            .collect();

        Self { by_skill }
    }

    pub fn get(&self, skill: &CanonicalSkill) -> Option<&StudyPlanItem> {
        self.by_skill.get(skill)
    }
}

/// Generic item for a skill with no curated template.
pub fn fallback_item(skill: &str, role: &str) -> StudyPlanItem {
    StudyPlanItem {
        topic: skill.to_string(),
        duration: FALLBACK_DURATION.to_string(),
        resource_query: format!("{skill} complete tutorial for beginners"),
        rationale: format!("{skill} is an important skill for {role} positions."),
    }
}

/// Builds one plan item per gap for the first `cap` gaps, in gap order.
pub fn synthesize_plan(
    gaps: &[String],
    role: &str,
    cap: usize,
    templates: &PlanTemplates,
) -> Vec<StudyPlanItem> {
    gaps.iter()
        .take(cap)
        .map(|skill| {
            normalize(skill)
                .and_then(|key| templates.get(&key).cloned())
                .unwrap_or_else(|| fallback_item(skill, role))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gaps(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builtin_templates_have_distinct_keys() {
        assert_eq!(TEMPLATES.len(), 20);
        assert_eq!(PlanTemplates::builtin().by_skill.len(), TEMPLATES.len());
    }

    #[test]
    fn test_curated_template_used_for_known_skill() {
        let templates = PlanTemplates::builtin();
        let plan = synthesize_plan(&gaps(&["React"]), "Frontend Developer", PLAN_CAP, &templates);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].topic, "React.js Fundamentals");
        assert_eq!(plan[0].duration, "3-4 Days");
    }

    #[test]
    fn test_template_lookup_is_case_insensitive() {
        let templates = PlanTemplates::builtin();
        let plan = synthesize_plan(&gaps(&["kubernetes"]), "DevOps Engineer", PLAN_CAP, &templates);
        assert_eq!(plan[0].topic, "Kubernetes Orchestration");
    }

    #[test]
    fn test_missing_template_uses_fallback_shape() {
        let templates = PlanTemplates::builtin();
        let plan = synthesize_plan(
            &gaps(&["Testing (Jest)"]),
            "Frontend Developer",
            PLAN_CAP,
            &templates,
        );
        assert_eq!(
            plan[0],
            StudyPlanItem {
                topic: "Testing (Jest)".to_string(),
                duration: "3 Days".to_string(),
                resource_query: "Testing (Jest) complete tutorial for beginners".to_string(),
                rationale: "Testing (Jest) is an important skill for Frontend Developer positions."
                    .to_string(),
            }
        );
    }

    #[test]
    fn test_plan_is_capped_and_parallel_to_gaps() {
        let templates = PlanTemplates::builtin();
        let all = gaps(&[
            "React", "Node.js", "TypeScript", "Quantum Widgets", "Git", "Docker", "AWS/Cloud",
            "GraphQL",
        ]);
        let plan = synthesize_plan(&all, "Full Stack Developer", PLAN_CAP, &templates);

        assert_eq!(plan.len(), PLAN_CAP);
        assert_eq!(plan[0].topic, "React.js Fundamentals");
        assert_eq!(plan[1].topic, "Node.js & Express");
        assert_eq!(plan[2].topic, "TypeScript Essentials");
        assert_eq!(plan[3].topic, "Quantum Widgets");
        assert_eq!(plan[4].topic, "Git & GitHub");
        assert_eq!(plan[5].topic, "Docker Containerization");
    }

    #[test]
    fn test_short_gap_list_is_not_padded() {
        let templates = PlanTemplates::builtin();
        let plan = synthesize_plan(&gaps(&["Git", "Linux"]), "DevOps Engineer", PLAN_CAP, &templates);
        assert_eq!(plan.len(), 2);
        assert!(synthesize_plan(&[], "DevOps Engineer", PLAN_CAP, &templates).is_empty());
    }

    #[test]
    fn test_zero_cap_yields_empty_plan() {
        let templates = PlanTemplates::builtin();
        assert!(synthesize_plan(&gaps(&["Git"]), "Any", 0, &templates).is_empty());
    }
}
