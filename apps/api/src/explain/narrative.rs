//! Templated prose for a match: verdict band, headline sentence, reasoning sentences.

use serde::Serialize;

use crate::matching::MatchResult;
use crate::models::profile::{ExperienceLevel, ProficiencyLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchVerdict {
    HighlyRecommended,
    PotentialMatch,
    GapIdentified,
}

impl MatchVerdict {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            MatchVerdict::HighlyRecommended
        } else if score >= 50.0 {
            MatchVerdict::PotentialMatch
        } else {
            MatchVerdict::GapIdentified
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchVerdict::HighlyRecommended => "Highly recommended",
            MatchVerdict::PotentialMatch => "Potential match",
            MatchVerdict::GapIdentified => "Gap identified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceLevel {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            ConfidenceLevel::VeryHigh
        } else if score >= 70.0 {
            ConfidenceLevel::High
        } else if score >= 50.0 {
            ConfidenceLevel::Moderate
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// Overall depth of the skills a profile brings to one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Novice,
    Beginner,
    Intermediate,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillLevelAssessment {
    pub level: SkillLevel,
    pub description: &'static str,
}

/// Expert share ≥ 0.7 → expert; expert share ≥ 0.4 or intermediate share ≥ 0.7 →
/// intermediate; otherwise beginner. No matched skills → novice. A skill listed
/// without a level counts as intermediate.
pub fn assess_skill_level(result: &MatchResult<'_>) -> SkillLevelAssessment {
    let total = result.matched.len();
    if total == 0 {
        return SkillLevelAssessment {
            level: SkillLevel::Novice,
            description: "You are new to this field",
        };
    }

    let count_at = |wanted: ProficiencyLevel| {
        result
            .matched
            .iter()
            .filter(|m| m.profile_level.unwrap_or(ProficiencyLevel::Intermediate) == wanted)
            .count() as f64
    };
    let total = total as f64;
    let expert_share = count_at(ProficiencyLevel::Expert) / total;
    let intermediate_share = count_at(ProficiencyLevel::Intermediate) / total;

    if expert_share >= 0.7 {
        SkillLevelAssessment {
            level: SkillLevel::Expert,
            description: "You have deep expertise in this area",
        }
    } else if expert_share >= 0.4 || intermediate_share >= 0.7 {
        SkillLevelAssessment {
            level: SkillLevel::Intermediate,
            description: "You have solid foundational knowledge",
        }
    } else {
        SkillLevelAssessment {
            level: SkillLevel::Beginner,
            description: "You have basic knowledge in this area",
        }
    }
}

/// "a", "a and b", "a, b and c"
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => format!(
            "{} and {}",
            init.iter().map(|n| n.as_ref()).collect::<Vec<&str>>().join(", "),
            last.as_ref()
        ),
    }
}

/// Up to three matched skill names, mandatory ones first, strongest credit first.
pub fn top_matched<'a>(result: &MatchResult<'a>) -> Vec<&'a str> {
    let mut matched: Vec<_> = result.matched.iter().collect();
    matched.sort_by(|a, b| {
        b.mandatory
            .cmp(&a.mandatory)
            .then(b.credit.total_cmp(&a.credit))
    });
    matched.into_iter().take(3).map(|m| m.name).collect()
}

/// Headline keyed by score band and by whether mandatory skills are missing.
pub fn headline(result: &MatchResult<'_>) -> String {
    let title = &result.role.title;
    let score = result.score.round();
    let strengths = join_names(&top_matched(result));
    let gaps: Vec<&str> = result
        .missing_mandatory
        .iter()
        .map(|r| r.skill.as_str())
        .collect();
    let gap_list = join_names(&gaps);

    let verdict = MatchVerdict::from_score(result.score);
    let label = verdict.label();

    match verdict {
        MatchVerdict::HighlyRecommended if !result.has_critical_gaps() => format!(
            "{label}: {title} is a strong fit ({score}/100). You already cover {strengths}."
        ),
        MatchVerdict::HighlyRecommended => format!(
            "{label}: {title} is a strong fit ({score}/100) built on {strengths}. \
             Learning the mandatory {gap_list} would make you fully qualified."
        ),
        MatchVerdict::PotentialMatch if !result.has_critical_gaps() => format!(
            "{label}: {title} scores {score}/100. Your strengths include {strengths}, \
             and every mandatory skill is covered."
        ),
        MatchVerdict::PotentialMatch => format!(
            "{label}: {title} scores {score}/100. Your strengths include {strengths}; \
             focus first on the mandatory {gap_list}."
        ),
        MatchVerdict::GapIdentified if result.has_critical_gaps() => format!(
            "{label}: {title} scores {score}/100. Mandatory skills missing from your \
             profile: {gap_list}."
        ),
        MatchVerdict::GapIdentified if strengths.is_empty() => format!(
            "{label}: {title} scores {score}/100. None of its requirements appear in \
             your profile."
        ),
        MatchVerdict::GapIdentified => format!(
            "{label}: {title} scores {score}/100. You cover {strengths}, but the \
             overall fit is still low."
        ),
    }
}

pub fn demand_description(demand: f64) -> &'static str {
    if demand >= 9.0 {
        "Extremely High (9+/10)"
    } else if demand >= 8.0 {
        "Very High (8-9/10)"
    } else if demand >= 7.0 {
        "High (7-8/10)"
    } else {
        "Moderate (Below 7/10)"
    }
}

fn experience_sentence(profile: ExperienceLevel, role: ExperienceLevel) -> String {
    let (p, r) = (profile.as_str(), role.as_str());
    match role.ordinal().saturating_sub(profile.ordinal()) {
        0 => format!("Your {p}-level experience meets the {r}-level expectations of this role."),
        1 => format!("This {r}-level role is one step above your current {p}-level experience."),
        _ => format!("This role expects {r}-level experience, well beyond your current {p} level."),
    }
}

/// Supporting sentences: experience alignment, mandatory coverage, interests, demand.
pub fn reasoning(result: &MatchResult<'_>) -> Vec<String> {
    let role = result.role;
    let mut sentences = vec![experience_sentence(
        result.profile_experience_level,
        role.experience_level,
    )];

    let mandatory_total = role.mandatory_requirements().count();
    if mandatory_total > 0 {
        let covered = mandatory_total - result.missing_mandatory.len();
        sentences.push(format!(
            "You cover {covered} of {mandatory_total} mandatory skills."
        ));
    }

    if let Some(interest) = &result.interest_match {
        sentences.push(format!(
            "It aligns with your interest in {interest} ({} domain).",
            role.domain
        ));
    }

    sentences.push(format!(
        "Market demand for this role is {}.",
        demand_description(role.market_demand)
    ));
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_names() {
        assert_eq!(join_names::<&str>(&[]), "");
        assert_eq!(join_names(&["python"]), "python");
        assert_eq!(join_names(&["python", "sql"]), "python and sql");
        assert_eq!(join_names(&["a", "b", "c"]), "a, b and c");
    }

    #[test]
    fn test_verdict_bands() {
        assert_eq!(MatchVerdict::from_score(80.0), MatchVerdict::HighlyRecommended);
        assert_eq!(MatchVerdict::from_score(79.99), MatchVerdict::PotentialMatch);
        assert_eq!(MatchVerdict::from_score(50.0), MatchVerdict::PotentialMatch);
        assert_eq!(MatchVerdict::from_score(49.9), MatchVerdict::GapIdentified);
    }

    #[test]
    fn test_confidence_levels() {
        assert_eq!(ConfidenceLevel::from_score(85.0), ConfidenceLevel::VeryHigh);
        assert_eq!(ConfidenceLevel::from_score(70.0), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(65.67), ConfidenceLevel::Moderate);
        assert_eq!(ConfidenceLevel::from_score(0.0), ConfidenceLevel::Low);
        assert_eq!(
            serde_json::to_string(&ConfidenceLevel::VeryHigh).unwrap(),
            r#""Very High""#
        );
    }

    #[test]
    fn test_demand_description_bands() {
        assert_eq!(demand_description(9.5), "Extremely High (9+/10)");
        assert_eq!(demand_description(8.2), "Very High (8-9/10)");
        assert_eq!(demand_description(7.0), "High (7-8/10)");
        assert_eq!(demand_description(3.0), "Moderate (Below 7/10)");
    }

    #[test]
    fn test_experience_sentence_directions() {
        assert!(experience_sentence(ExperienceLevel::Senior, ExperienceLevel::Mid)
            .starts_with("Your senior-level experience meets"));
        assert!(experience_sentence(ExperienceLevel::Mid, ExperienceLevel::Senior)
            .contains("one step above"));
        assert!(experience_sentence(ExperienceLevel::Entry, ExperienceLevel::Senior)
            .contains("well beyond"));
    }
}
