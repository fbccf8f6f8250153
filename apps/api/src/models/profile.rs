use serde::{Deserialize, Serialize};

/// Ordered proficiency tier for a held or required skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl ProficiencyLevel {
    pub fn ordinal(self) -> u8 {
        match self {
            ProficiencyLevel::Beginner => 1,
            ProficiencyLevel::Intermediate => 2,
            ProficiencyLevel::Expert => 3,
        }
    }

    /// Parses free-form level input. Anything unrecognized is `Beginner`.
    pub fn parse_lenient(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "intermediate" | "mid" | "medium" | "proficient" | "working" => {
                ProficiencyLevel::Intermediate
            }
            "expert" | "advanced" | "senior" | "master" => ProficiencyLevel::Expert,
            _ => ProficiencyLevel::Beginner,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "beginner",
            ProficiencyLevel::Intermediate => "intermediate",
            ProficiencyLevel::Expert => "expert",
        }
    }
}

/// Career stage, inferred for profiles and declared for roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub fn ordinal(self) -> u8 {
        match self {
            ExperienceLevel::Entry => 1,
            ExperienceLevel::Mid => 2,
            ExperienceLevel::Senior => 3,
        }
    }

    /// `<2` years → entry, `2–<5` → mid, `>=5` → senior.
    pub fn from_years(years: f64) -> Self {
        if years < 2.0 {
            ExperienceLevel::Entry
        } else if years < 5.0 {
            ExperienceLevel::Mid
        } else {
            ExperienceLevel::Senior
        }
    }

    /// Parses catalog tier labels. Unknown labels fall back to `Mid`.
    pub fn parse_lenient(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "entry" | "entry-level" | "entry level" | "junior" | "beginner" | "graduate" => {
                ExperienceLevel::Entry
            }
            "senior" | "senior-level" | "senior level" | "expert" | "lead" | "principal"
            | "staff" => ExperienceLevel::Senior,
            _ => ExperienceLevel::Mid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Canonical lowercase name, the join key against role requirements.
    pub name: String,
    pub level: Option<ProficiencyLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree_count: usize,
    pub field: Option<String>,
}

/// Canonical profile produced by the normalizer. Skills are sorted by name and unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub skills: Vec<Skill>,
    pub years_experience: f64,
    pub experience_level: ExperienceLevel,
    pub interests: Vec<String>,
    pub education: Education,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            skills: Vec::new(),
            years_experience: 0.0,
            experience_level: ExperienceLevel::Entry,
            interests: Vec::new(),
            education: Education::default(),
        }
    }
}

impl Profile {
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills
            .binary_search_by(|s| s.name.as_str().cmp(name))
            .ok()
            .map(|idx| &self.skills[idx])
    }

    pub fn has_skill(&self, name: &str) -> bool {
        self.skill(name).is_some()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}
