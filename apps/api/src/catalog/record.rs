//! At-rest catalog format.
//!
//! Two shapes are accepted and may be mixed per requirement:
//! - simple: `{role, experience_level, required_skills: [string], related_skills_to_learn}`
//! - rich: `{title, domain, salary_range, market_demand, required_skills: [{name, required_level, is_mandatory}]}`
//!
//! Missing requirement metadata defaults to mandatory at intermediate level.

use serde::Deserialize;
use tracing::warn;

use crate::models::profile::{ExperienceLevel, ProficiencyLevel};
use crate::models::role::{Role, RoleRequirement};
use crate::profile::normalizer::canonical_name;

const DEFAULT_DOMAIN: &str = "General";
const DEFAULT_SALARY_RANGE: &str = "Not disclosed";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CatalogFile {
    List(Vec<RoleRecord>),
    Wrapped { roles: Vec<RoleRecord> },
}

impl CatalogFile {
    pub fn into_records(self) -> Vec<RoleRecord> {
        match self {
            CatalogFile::List(records) => records,
            CatalogFile::Wrapped { roles } => roles,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RoleRecord {
    #[serde(alias = "role", alias = "job_title")]
    pub title: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default, alias = "average_salary")]
    pub salary_range: Option<String>,
    #[serde(default, alias = "job_market_demand")]
    pub market_demand: Option<f64>,
    #[serde(default, alias = "skills", alias = "requirements")]
    pub required_skills: Vec<RequirementRecord>,
    #[serde(default)]
    pub related_skills_to_learn: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RequirementRecord {
    Name(String),
    Detailed {
        #[serde(alias = "skill", alias = "skill_name")]
        name: String,
        #[serde(default)]
        required_level: Option<String>,
        #[serde(default, alias = "mandatory")]
        is_mandatory: Option<bool>,
    },
}

impl RequirementRecord {
    fn into_requirement(self) -> RoleRequirement {
        let (name, level, mandatory) = match self {
            RequirementRecord::Name(name) => (name, None, None),
            RequirementRecord::Detailed {
                name,
                required_level,
                is_mandatory,
            } => (name, required_level, is_mandatory),
        };

        RoleRequirement {
            skill: canonical_name(&name),
            required_level: level
                .as_deref()
                .map(ProficiencyLevel::parse_lenient)
                .unwrap_or(ProficiencyLevel::Intermediate),
            mandatory: mandatory.unwrap_or(true),
        }
    }
}

impl RoleRecord {
    pub fn into_role(self) -> Role {
        let experience_level = match self.experience_level.as_deref() {
            Some(label) => ExperienceLevel::parse_lenient(label),
            None => {
                warn!(
                    "Role '{}' has no experience_level; assuming mid",
                    self.title
                );
                ExperienceLevel::Mid
            }
        };

        let requirements = self
            .required_skills
            .into_iter()
            .map(RequirementRecord::into_requirement)
            .filter(|r| !r.skill.is_empty())
            .collect();

        Role {
            title: self.title.trim().to_string(),
            domain: self
                .domain
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
            experience_level,
            salary_range: self
                .salary_range
                .unwrap_or_else(|| DEFAULT_SALARY_RANGE.to_string()),
            market_demand: self
                .market_demand
                .filter(|d| d.is_finite())
                .map(|d| d.clamp(0.0, 10.0))
                .unwrap_or(0.0),
            requirements,
            related_skills_to_learn: self
                .related_skills_to_learn
                .iter()
                .map(|s| canonical_name(s))
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}
