//! Seed catalog used when no `CATALOG_PATH` is configured.

use crate::models::profile::{ExperienceLevel, ProficiencyLevel};
use crate::models::role::{Role, RoleRequirement};

use ExperienceLevel::{Mid, Senior};
use ProficiencyLevel::{Beginner, Expert, Intermediate};

struct SeedRole {
    title: &'static str,
    domain: &'static str,
    experience_level: ExperienceLevel,
    salary_range: &'static str,
    market_demand: f64,
    /// (skill, required level, mandatory)
    requirements: &'static [(&'static str, ProficiencyLevel, bool)],
    related: &'static [&'static str],
}

const SEED_ROLES: &[SeedRole] = &[
    SeedRole {
        title: "Machine Learning Engineer",
        domain: "AI",
        experience_level: Mid,
        salary_range: "$120,000 - $180,000",
        market_demand: 9.5,
        requirements: &[
            ("python", Expert, true),
            ("machine learning", Expert, true),
            ("sql", Intermediate, true),
            ("data analysis", Expert, true),
            ("statistics", Intermediate, true),
            ("deep learning", Intermediate, false),
            ("tensorflow", Intermediate, false),
            ("pytorch", Intermediate, false),
            ("aws", Intermediate, false),
            ("docker", Intermediate, false),
        ],
        related: &["mlops", "kubernetes", "spark"],
    },
    SeedRole {
        title: "Data Scientist",
        domain: "Data Science",
        experience_level: Mid,
        salary_range: "$100,000 - $160,000",
        market_demand: 9.0,
        requirements: &[
            ("python", Expert, true),
            ("data analysis", Expert, true),
            ("statistics", Expert, true),
            ("machine learning", Intermediate, true),
            ("sql", Expert, true),
            ("pandas", Intermediate, false),
            ("matplotlib", Intermediate, false),
            ("r", Beginner, false),
        ],
        related: &["data visualization", "a/b testing", "tableau"],
    },
    SeedRole {
        title: "Full Stack Developer",
        domain: "Web",
        experience_level: Mid,
        salary_range: "$90,000 - $150,000",
        market_demand: 9.2,
        requirements: &[
            ("javascript", Expert, true),
            ("react", Intermediate, true),
            ("node.js", Intermediate, true),
            ("html", Expert, true),
            ("css", Intermediate, true),
            ("sql", Intermediate, true),
            ("rest api", Intermediate, true),
            ("git", Intermediate, true),
            ("mongodb", Intermediate, false),
        ],
        related: &["typescript", "docker", "graphql"],
    },
    SeedRole {
        title: "Frontend Developer",
        domain: "Web",
        experience_level: Mid,
        salary_range: "$80,000 - $140,000",
        market_demand: 8.8,
        requirements: &[
            ("javascript", Expert, true),
            ("react", Expert, true),
            ("html", Expert, true),
            ("css", Expert, true),
            ("rest api", Intermediate, true),
            ("git", Intermediate, true),
            ("typescript", Intermediate, false),
            ("vue.js", Beginner, false),
        ],
        related: &["tailwind css", "accessibility", "webpack"],
    },
    SeedRole {
        title: "Backend Developer",
        domain: "Web",
        experience_level: Mid,
        salary_range: "$100,000 - $160,000",
        market_demand: 8.9,
        requirements: &[
            ("python", Expert, true),
            ("node.js", Intermediate, true),
            ("sql", Expert, true),
            ("rest api", Expert, true),
            ("git", Intermediate, true),
            ("mongodb", Intermediate, false),
            ("docker", Intermediate, false),
            ("aws", Intermediate, false),
        ],
        related: &["redis", "microservices", "graphql"],
    },
    SeedRole {
        title: "DevOps Engineer",
        domain: "Cloud",
        experience_level: Mid,
        salary_range: "$110,000 - $170,000",
        market_demand: 8.7,
        requirements: &[
            ("docker", Expert, true),
            ("kubernetes", Intermediate, true),
            ("aws", Expert, true),
            ("linux", Expert, true),
            ("bash", Intermediate, true),
            ("git", Intermediate, true),
            ("ci/cd", Intermediate, true),
            ("python", Intermediate, false),
        ],
        related: &["terraform", "ansible", "prometheus"],
    },
    SeedRole {
        title: "Solutions Architect",
        domain: "Enterprise",
        experience_level: Senior,
        salary_range: "$130,000 - $200,000",
        market_demand: 7.9,
        requirements: &[
            ("aws", Expert, true),
            ("system design", Expert, true),
            ("microservices", Expert, true),
            ("docker", Intermediate, true),
            ("python", Intermediate, false),
            ("azure", Intermediate, false),
            ("kubernetes", Intermediate, false),
        ],
        related: &["communication", "cost optimization", "security"],
    },
    SeedRole {
        title: "Cloud Engineer",
        domain: "Cloud",
        experience_level: Mid,
        salary_range: "$105,000 - $165,000",
        market_demand: 8.5,
        requirements: &[
            ("aws", Expert, true),
            ("linux", Intermediate, true),
            ("bash", Intermediate, true),
            ("python", Intermediate, false),
            ("docker", Intermediate, false),
            ("terraform", Intermediate, false),
        ],
        related: &["kubernetes", "google cloud", "azure"],
    },
    SeedRole {
        title: "AI Research Engineer",
        domain: "AI",
        experience_level: Senior,
        salary_range: "$130,000 - $200,000",
        market_demand: 8.2,
        requirements: &[
            ("python", Expert, true),
            ("machine learning", Expert, true),
            ("deep learning", Expert, true),
            ("pytorch", Expert, true),
            ("statistics", Expert, true),
            ("tensorflow", Intermediate, false),
            ("nlp", Intermediate, false),
            ("computer vision", Intermediate, false),
        ],
        related: &["research papers", "reinforcement learning", "cuda"],
    },
];

pub fn seeded_roles() -> Vec<Role> {
    SEED_ROLES
        .iter()
        .map(|seed| Role {
            title: seed.title.to_string(),
            domain: seed.domain.to_string(),
            experience_level: seed.experience_level,
            salary_range: seed.salary_range.to_string(),
            market_demand: seed.market_demand,
            requirements: seed
                .requirements
                .iter()
                .map(|(skill, required_level, mandatory)| RoleRequirement {
                    skill: skill.to_string(),
                    required_level: *required_level,
                    mandatory: *mandatory,
                })
                .collect(),
            related_skills_to_learn: seed.related.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}
