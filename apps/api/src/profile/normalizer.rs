//! Profile Normalizer: turns loosely-shaped profile input into a canonical `Profile`.
//!
//! Nothing in here fails. Malformed fields default to empty/zero so a sparse profile
//! still produces recommendations.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::profile::{Education, ExperienceLevel, ProficiencyLevel, Profile, Skill};
use crate::profile::aliases::expand_aliases;

// ────────────────────────────────────────────────────────────────────────────
// Raw input records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSkill {
    pub name: String,
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawExperience {
    #[serde(default)]
    pub years: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEducation {
    #[serde(default)]
    pub degrees: Vec<String>,
    #[serde(default)]
    pub degree_count: Option<usize>,
    #[serde(default)]
    pub field: Option<String>,
}

/// Profile as supplied by a form, an upload, or another service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub skills: Vec<RawSkill>,
    #[serde(default)]
    pub experience: Vec<RawExperience>,
    #[serde(default)]
    pub education: Option<RawEducation>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl RawProfile {
    /// Reads a raw profile out of arbitrary JSON, ignoring anything it cannot use.
    ///
    /// Accepted shapes:
    /// - `skills`: `["Python", {"name": "SQL", "level": "expert"}]` or `"python, sql"`
    /// - `experience`: `[{"years": 2}, {"total_years": 1.5}, 3]` or a bare number
    /// - `education`: `{"degrees": [..]}`, `{"degree": ".."}`, `{"degree_count": 2}`,
    ///   with `field` or `branch`
    /// - `interests`: list of strings or a comma-separated string
    pub fn from_value(value: &Value) -> Self {
        Self {
            skills: value.get("skills").map(read_skills).unwrap_or_default(),
            experience: value
                .get("experience")
                .map(read_experience)
                .unwrap_or_default(),
            education: value.get("education").and_then(read_education),
            interests: value
                .get("interests")
                .map(read_string_list)
                .unwrap_or_default(),
        }
    }
}

fn read_skills(value: &Value) -> Vec<RawSkill> {
    match value {
        Value::Array(items) => items.iter().filter_map(read_skill).collect(),
        Value::String(_) => read_string_list(value)
            .into_iter()
            .map(|name| RawSkill { name, level: None })
            .collect(),
        _ => Vec::new(),
    }
}

fn read_skill(item: &Value) -> Option<RawSkill> {
    match item {
        Value::String(name) => Some(RawSkill {
            name: name.clone(),
            level: None,
        }),
        Value::Object(_) => {
            let name = ["name", "skill", "skill_name"]
                .iter()
                .find_map(|key| item.get(*key).and_then(|v| v.as_str()))?;
            let level = ["level", "proficiency", "skill_level"]
                .iter()
                .find_map(|key| item.get(*key).and_then(|v| v.as_str()))
                .map(String::from);
            Some(RawSkill {
                name: name.to_string(),
                level,
            })
        }
        _ => None,
    }
}

fn read_experience(value: &Value) -> Vec<RawExperience> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| RawExperience {
                years: read_number(item).or_else(|| {
                    ["years", "total_years"]
                        .iter()
                        .find_map(|key| item.get(*key).and_then(read_number))
                }),
            })
            .collect(),
        Value::Object(_) => vec![RawExperience {
            years: ["years", "total_years"]
                .iter()
                .find_map(|key| value.get(*key).and_then(read_number)),
        }],
        other => read_number(other)
            .map(|years| vec![RawExperience { years: Some(years) }])
            .unwrap_or_default(),
    }
}

fn read_education(value: &Value) -> Option<RawEducation> {
    if !value.is_object() {
        return None;
    }

    let mut degrees: Vec<String> = value
        .get("degrees")
        .map(read_string_list)
        .unwrap_or_default();
    if let Some(degree) = value.get("degree").and_then(|v| v.as_str()) {
        degrees.push(degree.to_string());
    }

    Some(RawEducation {
        degrees,
        degree_count: value
            .get("degree_count")
            .and_then(read_number)
            .filter(|n| *n >= 0.0)
            .map(|n| n as usize),
        field: ["field", "branch"]
            .iter()
            .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
            .map(String::from),
    })
}

fn read_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(String::from)
            .collect(),
        Value::String(s) => s.split(',').map(String::from).collect(),
        _ => Vec::new(),
    }
}

fn read_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Normalization
// ────────────────────────────────────────────────────────────────────────────

/// Upper bound on summed experience so the total stays finite.
pub const MAX_TOTAL_YEARS: f64 = 100.0;

/// Trims, lowercases, and collapses internal whitespace.
pub fn canonical_name(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Produces the canonical profile.
///
/// 1. Skills: canonicalize names, drop empties, last write wins on duplicates
/// 2. Alias expansion to a fixpoint (see `aliases`)
/// 3. Years: sum of entries, each missing/negative/non-finite value counted as 0,
///    capped at `MAX_TOTAL_YEARS`
/// 4. Interests: canonicalize, dedupe, sort
pub fn normalize(raw: &RawProfile) -> Profile {
    let mut skills: BTreeMap<String, Option<ProficiencyLevel>> = BTreeMap::new();
    for raw_skill in &raw.skills {
        let name = canonical_name(&raw_skill.name);
        if name.is_empty() {
            continue;
        }
        let level = raw_skill
            .level
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .map(ProficiencyLevel::parse_lenient);
        skills.insert(name, level);
    }
    expand_aliases(&mut skills);

    let years_experience = raw
        .experience
        .iter()
        .map(|e| e.years.filter(|y| y.is_finite()).unwrap_or(0.0).max(0.0))
        .sum::<f64>()
        .min(MAX_TOTAL_YEARS);

    let interests: BTreeSet<String> = raw
        .interests
        .iter()
        .map(|i| canonical_name(i))
        .filter(|i| !i.is_empty())
        .collect();

    let education = raw
        .education
        .as_ref()
        .map(|e| Education {
            degree_count: e.degree_count.unwrap_or(0).max(
                e.degrees
                    .iter()
                    .filter(|d| !d.trim().is_empty())
                    .count(),
            ),
            field: e
                .field
                .as_deref()
                .map(canonical_name)
                .filter(|f| !f.is_empty()),
        })
        .unwrap_or_default();

    Profile {
        skills: skills
            .into_iter()
            .map(|(name, level)| Skill { name, level })
            .collect(),
        years_experience,
        experience_level: ExperienceLevel::from_years(years_experience),
        interests: interests.into_iter().collect(),
        education,
    }
}

/// Lenient entry point for JSON bodies.
pub fn normalize_value(value: &Value) -> Profile {
    normalize(&RawProfile::from_value(value))
}

#[cfg(test)]
impl Profile {
    /// Raw form of a canonical profile. Normalizing it yields the same profile.
    pub fn to_raw(&self) -> RawProfile {
        RawProfile {
            skills: self
                .skills
                .iter()
                .map(|s| RawSkill {
                    name: s.name.clone(),
                    level: s.level.map(|l| l.as_str().to_string()),
                })
                .collect(),
            experience: vec![RawExperience {
                years: Some(self.years_experience),
            }],
            education: Some(RawEducation {
                degrees: Vec::new(),
                degree_count: Some(self.education.degree_count),
                field: self.education.field.clone(),
            }),
            interests: self.interests.clone(),
        }
    }
}
