use serde::{Deserialize, Serialize};

use crate::models::profile::{ExperienceLevel, ProficiencyLevel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRequirement {
    /// Canonical lowercase skill name, unique within its role.
    pub skill: String,
    pub required_level: ProficiencyLevel,
    pub mandatory: bool,
}

/// A catalog entry. Read-only once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub domain: String,
    pub experience_level: ExperienceLevel,
    pub salary_range: String,
    /// 0–10 scale.
    pub market_demand: f64,
    pub requirements: Vec<RoleRequirement>,
    pub related_skills_to_learn: Vec<String>,
}

impl Role {
    pub fn mandatory_requirements(&self) -> impl Iterator<Item = &RoleRequirement> {
        self.requirements.iter().filter(|r| r.mandatory)
    }
}
