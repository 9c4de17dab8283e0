//! Role requirement registry: per-role required skills, most critical first.
//!
//! Built once in `main` and shared read-only through `Analyzer`.

use tracing::debug;

/// Role used whenever the requested role is not in the table.
pub const DEFAULT_ROLE: &str = "Full Stack Developer";

const ROLE_TABLE: &[(&str, &[&str])] = &[
    (
        "Full Stack Developer",
        &[
            "React",
            "Node.js",
            "TypeScript",
            "SQL/NoSQL Databases",
            "REST APIs",
            "Git",
            "Docker",
            "AWS/Cloud",
            "Redux/State Management",
            "Testing (Jest/Mocha)",
        ],
    ),
    (
        "Frontend Developer",
        &[
            "React",
            "TypeScript",
            "CSS/Tailwind",
            "Redux/State Management",
            "Webpack/Vite",
            "Testing (Jest)",
            "Responsive Design",
            "Git",
        ],
    ),
    (
        "Backend Developer",
        &[
            "Node.js",
            "Python/Java",
            "SQL/NoSQL",
            "REST APIs",
            "GraphQL",
            "Microservices",
            "Docker",
            "AWS/Cloud",
            "Redis",
            "Authentication/JWT",
        ],
    ),
    (
        "Data Scientist",
        &[
            "Python",
            "Pandas/NumPy",
            "Machine Learning",
            "TensorFlow/PyTorch",
            "SQL",
            "Data Visualization",
            "Statistics",
            "Jupyter Notebooks",
        ],
    ),
    (
        "DevOps Engineer",
        &[
            "Docker",
            "Kubernetes",
            "CI/CD (Jenkins/GitHub Actions)",
            "AWS/Azure/GCP",
            "Terraform",
            "Linux",
            "Monitoring (Prometheus)",
            "Scripting (Bash/Python)",
        ],
    ),
    (
        "Mobile Developer",
        &[
            "React Native",
            "Flutter",
            "iOS/Swift",
            "Android/Kotlin",
            "REST APIs",
            "Mobile UI/UX",
            "App Store Deployment",
            "Git",
        ],
    ),
];

/// Required skills for one role, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRequirement {
    pub role: String,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RoleRegistry {
    entries: Vec<RoleRequirement>,
    default_index: usize,
}

impl RoleRegistry {
    /// The built-in role table.
    pub fn builtin() -> Self {
        let entries: Vec<RoleRequirement> = ROLE_TABLE
            .iter()
            .map(|(role, skills)| RoleRequirement {
                role: (*role).to_string(),
                required_skills: skills.iter().map(|s| (*s).to_string()).collect(),
            })
            .collect();

        // DEFAULT_ROLE is the first table row.
        let default_index = entries
            .iter()
            .position(|e| e.role == DEFAULT_ROLE)
            .unwrap_or(0);

        Self {
            entries,
            default_index,
        }
    }

    /// Exact, case-sensitive lookup. Unknown roles get the default role's list.
    pub fn requirements_for(&self, role: &str) -> &RoleRequirement {
        match self.entries.iter().find(|e| e.role == role) {
            Some(entry) => entry,
            None => {
                let fallback = &self.entries[self.default_index];
                debug!(
                    requested = role,
                    fallback = %fallback.role,
                    "Unrecognized role, using default requirements"
                );
                fallback
            }
        }
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.role.as_str())
    }

    pub fn default_role(&self) -> &str {
        &self.entries[self.default_index].role
    }

    #[cfg(test)]
    pub fn all(&self) -> &[RoleRequirement] {
        &self.entries
    }
}
