//! Scoring algorithm:
//! 1. No requirements → 0
//! 2. Skill overlap: Σ credit / requirement count × 40, where a matched skill earns full
//!    credit unless the profile states a lower level than required, in which case it
//!    earns `profile_level / required_level`
//! 3. Experience alignment: 30 / 20 / 10 for at-or-above / one tier below / further
//! 4. Breadth: `min(20, skill_count / 10 × 20)`
//! 5. Depth bonus on the overlap ratio: ≥0.8 → 10, ≥0.5 → 5
//! 6. Sum, clamp to [0, 100], floor at 25 when anything matched; 0 when nothing did
//!
//! Missing mandatory requirements lower the overlap ratio like any other gap. They are
//! also listed separately as critical gaps for the explanation layer.

use serde::{Serialize, Serializer};

use crate::matching::weights::ScoringWeights;
use crate::models::profile::{ExperienceLevel, ProficiencyLevel, Profile};
use crate::models::role::{Role, RoleRequirement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillConfidence {
    /// Profile level at or above the requirement.
    Meets,
    BelowRequired,
    /// Profile lists the skill without a level.
    Unrated,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedSkill<'a> {
    pub name: &'a str,
    pub required_level: ProficiencyLevel,
    pub profile_level: Option<ProficiencyLevel>,
    pub mandatory: bool,
    /// Fraction of one requirement's worth of overlap credit, 0–1.
    pub credit: f64,
    pub confidence: SkillConfidence,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub skill_overlap: f64,
    pub experience: f64,
    pub breadth: f64,
    pub depth_bonus: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    #[serde(serialize_with = "serialize_role")]
    pub role: &'a Role,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    /// Credit-weighted share of requirements covered, 0–1.
    pub overlap_ratio: f64,
    pub matched: Vec<MatchedSkill<'a>>,
    pub missing_mandatory: Vec<&'a RoleRequirement>,
    pub missing_optional: Vec<&'a RoleRequirement>,
    pub profile_experience_level: ExperienceLevel,
    /// First profile interest that names the role's domain or title.
    pub interest_match: Option<String>,
    /// Related skills the profile lacks that are not already requirements.
    pub unexplored_related: Vec<&'a str>,
}

impl<'a> MatchResult<'a> {
    pub fn has_critical_gaps(&self) -> bool {
        !self.missing_mandatory.is_empty()
    }

    /// Missing requirements, mandatory first, each group in catalog order.
    pub fn missing(&self) -> impl Iterator<Item = &'a RoleRequirement> + '_ {
        self.missing_mandatory
            .iter()
            .chain(self.missing_optional.iter())
            .copied()
    }
}

#[derive(Serialize)]
struct RoleSummary<'a> {
    title: &'a str,
    domain: &'a str,
    experience_level: ExperienceLevel,
    salary_range: &'a str,
    market_demand: f64,
}

fn serialize_role<S: Serializer>(role: &&Role, serializer: S) -> Result<S::Ok, S::Error> {
    RoleSummary {
        title: &role.title,
        domain: &role.domain,
        experience_level: role.experience_level,
        salary_range: &role.salary_range,
        market_demand: role.market_demand,
    }
    .serialize(serializer)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn skill_credit(
    profile_level: Option<ProficiencyLevel>,
    required: ProficiencyLevel,
) -> (f64, SkillConfidence) {
    match profile_level {
        None => (1.0, SkillConfidence::Unrated),
        Some(level) if level >= required => (1.0, SkillConfidence::Meets),
        Some(level) => (
            f64::from(level.ordinal()) / f64::from(required.ordinal()),
            SkillConfidence::BelowRequired,
        ),
    }
}

fn experience_points(
    profile: ExperienceLevel,
    role: ExperienceLevel,
    weights: &ScoringWeights,
) -> f64 {
    match role.ordinal().saturating_sub(profile.ordinal()) {
        0 => weights.experience_match,
        1 => weights.experience_one_below,
        _ => weights.experience_far_below,
    }
}

fn words(text: &str) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whole-word phrase containment.
fn mentions(haystack: &str, needle: &str) -> bool {
    let needle = words(needle);
    !needle.is_empty() && format!(" {} ", words(haystack)).contains(&format!(" {needle} "))
}

fn find_interest_match(profile: &Profile, role: &Role) -> Option<String> {
    profile
        .interests
        .iter()
        .find(|interest| {
            mentions(&role.domain, interest)
                || mentions(&role.title, interest)
                || mentions(interest, &role.domain)
        })
        .cloned()
}

pub fn score_role<'a>(
    profile: &Profile,
    role: &'a Role,
    weights: &ScoringWeights,
) -> MatchResult<'a> {
    let mut matched = Vec::new();
    let mut missing_mandatory = Vec::new();
    let mut missing_optional = Vec::new();

    for requirement in &role.requirements {
        match profile.skill(&requirement.skill) {
            Some(skill) => {
                let (credit, confidence) = skill_credit(skill.level, requirement.required_level);
                matched.push(MatchedSkill {
                    name: requirement.skill.as_str(),
                    required_level: requirement.required_level,
                    profile_level: skill.level,
                    mandatory: requirement.mandatory,
                    credit,
                    confidence,
                });
            }
            None if requirement.mandatory => missing_mandatory.push(requirement),
            None => missing_optional.push(requirement),
        }
    }

    let unexplored_related = role
        .related_skills_to_learn
        .iter()
        .map(String::as_str)
        .filter(|skill| {
            !profile.has_skill(skill) && !role.requirements.iter().any(|r| r.skill == *skill)
        })
        .collect();

    let mut result = MatchResult {
        role,
        score: 0.0,
        breakdown: ScoreBreakdown::default(),
        overlap_ratio: 0.0,
        matched,
        missing_mandatory,
        missing_optional,
        profile_experience_level: profile.experience_level,
        interest_match: find_interest_match(profile, role),
        unexplored_related,
    };

    // Nothing earns credit without at least one matched requirement.
    if role.requirements.is_empty() || result.matched.is_empty() {
        return result;
    }

    let total_credit: f64 = result.matched.iter().map(|m| m.credit).sum();
    let overlap_ratio = total_credit / role.requirements.len() as f64;

    let skill_overlap = overlap_ratio * weights.skill_overlap;
    let experience = experience_points(profile.experience_level, role.experience_level, weights);
    let breadth = if weights.breadth_saturation == 0 {
        weights.breadth
    } else {
        (profile.skill_count() as f64 / weights.breadth_saturation as f64 * weights.breadth)
            .min(weights.breadth)
    };
    let depth_bonus = if overlap_ratio >= weights.depth_high_ratio {
        weights.depth_high
    } else if overlap_ratio >= weights.depth_mid_ratio {
        weights.depth_mid
    } else {
        0.0
    };

    let total = (skill_overlap + experience + breadth + depth_bonus).clamp(0.0, 100.0);

    result.overlap_ratio = round2(overlap_ratio);
    result.breakdown = ScoreBreakdown {
        skill_overlap: round2(skill_overlap),
        experience: round2(experience),
        breadth: round2(breadth),
        depth_bonus: round2(depth_bonus),
    };
    result.score = round2(total.max(weights.floor).min(100.0));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Skill;

    fn requirement(skill: &str, level: ProficiencyLevel, mandatory: bool) -> RoleRequirement {
        RoleRequirement {
            skill: skill.to_string(),
            required_level: level,
            mandatory,
        }
    }

    fn data_scientist() -> Role {
        Role {
            title: "Data Scientist".to_string(),
            domain: "Data Science".to_string(),
            experience_level: ExperienceLevel::Mid,
            salary_range: "$100,000 - $160,000".to_string(),
            market_demand: 9.0,
            requirements: vec![
                requirement("python", ProficiencyLevel::Expert, true),
                requirement("statistics", ProficiencyLevel::Expert, true),
                requirement("sql", ProficiencyLevel::Intermediate, false),
            ],
            related_skills_to_learn: vec!["sql".to_string(), "tableau".to_string()],
        }
    }

    fn profile(skills: &[(&str, Option<ProficiencyLevel>)], level: ExperienceLevel) -> Profile {
        let mut skills: Vec<Skill> = skills
            .iter()
            .map(|(name, level)| Skill {
                name: name.to_string(),
                level: *level,
            })
            .collect();
        skills.sort_by(|a, b| a.name.cmp(&b.name));
        Profile {
            skills,
            experience_level: level,
            ..Profile::default()
        }
    }

    #[test]
    fn test_data_scientist_partial_match() {
        let role = data_scientist();
        let p = profile(&[("python", None), ("sql", None)], ExperienceLevel::Mid);
        let result = score_role(&p, &role, &ScoringWeights::default());

        assert_eq!(result.overlap_ratio, 0.67);
        assert_eq!(result.breakdown.skill_overlap, 26.67);
        assert_eq!(result.breakdown.experience, 30.0);
        assert_eq!(result.breakdown.breadth, 4.0);
        assert_eq!(result.breakdown.depth_bonus, 5.0);
        assert_eq!(result.score, 65.67);
        assert!(result.score > 25.0 && result.score < 75.0);

        let missing: Vec<&str> = result.missing_mandatory.iter().map(|r| r.skill.as_str()).collect();
        assert_eq!(missing, vec!["statistics"]);
        assert!(result.missing_optional.is_empty());
        assert!(result.has_critical_gaps());
    }

    #[test]
    fn test_zero_requirements_scores_zero() {
        let mut role = data_scientist();
        role.requirements.clear();
        let p = profile(&[("python", None)], ExperienceLevel::Senior);
        assert_eq!(score_role(&p, &role, &ScoringWeights::default()).score, 0.0);
    }

    #[test]
    fn test_zero_skills_scores_zero() {
        let role = data_scientist();
        let result = score_role(&Profile::default(), &role, &ScoringWeights::default());
        assert_eq!(result.score, 0.0);
        assert_eq!(result.breakdown, ScoreBreakdown::default());
        assert_eq!(result.missing_mandatory.len(), 2);
        assert_eq!(result.missing_optional.len(), 1);
    }

    #[test]
    fn test_breadth_saturates_above_ten_skills() {
        let role = data_scientist();
        let names = [
            "python", "a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8", "a9", "a10", "a11",
        ];
        let skills: Vec<(&str, Option<ProficiencyLevel>)> = names.iter().map(|n| (*n, None)).collect();
        let p = profile(&skills, ExperienceLevel::Mid);
        let result = score_role(&p, &role, &ScoringWeights::default());
        assert_eq!(result.breakdown.breadth, 20.0);
    }

    #[test]
    fn test_single_weak_match_hits_floor() {
        let mut role = data_scientist();
        role.experience_level = ExperienceLevel::Senior;
        for extra in ["r", "spark", "tableau", "excel", "pandas", "numpy", "keras"] {
            role.requirements
                .push(requirement(extra, ProficiencyLevel::Expert, true));
        }
        let p = profile(
            &[("python", Some(ProficiencyLevel::Beginner))],
            ExperienceLevel::Entry,
        );
        let result = score_role(&p, &role, &ScoringWeights::default());
        // 1/3 credit over 10 requirements + 10 experience + 2 breadth < 25
        assert_eq!(result.score, 25.0);
    }

    #[test]
    fn test_lower_proficiency_scales_credit() {
        let role = data_scientist();
        let p = profile(
            &[
                ("python", Some(ProficiencyLevel::Intermediate)),
                ("statistics", Some(ProficiencyLevel::Expert)),
                ("sql", Some(ProficiencyLevel::Expert)),
            ],
            ExperienceLevel::Mid,
        );
        let result = score_role(&p, &role, &ScoringWeights::default());

        let python = result.matched.iter().find(|m| m.name == "python").unwrap();
        assert_eq!(python.confidence, SkillConfidence::BelowRequired);
        assert!((python.credit - 2.0 / 3.0).abs() < 1e-9);

        let sql = result.matched.iter().find(|m| m.name == "sql").unwrap();
        assert_eq!(sql.confidence, SkillConfidence::Meets);
        assert_eq!(result.overlap_ratio, 0.89);
        assert_eq!(result.breakdown.depth_bonus, 10.0);
    }

    #[test]
    fn test_experience_alignment_tiers() {
        let weights = ScoringWeights::default();
        let senior = ExperienceLevel::Senior;
        assert_eq!(experience_points(ExperienceLevel::Senior, senior, &weights), 30.0);
        assert_eq!(experience_points(ExperienceLevel::Mid, senior, &weights), 20.0);
        assert_eq!(experience_points(ExperienceLevel::Entry, senior, &weights), 10.0);
        assert_eq!(
            experience_points(ExperienceLevel::Senior, ExperienceLevel::Entry, &weights),
            30.0
        );
    }

    #[test]
    fn test_adding_mandatory_skill_never_lowers_score() {
        let role = data_scientist();
        let weights = ScoringWeights::default();
        let before = profile(&[("python", None)], ExperienceLevel::Entry);
        let after = profile(&[("python", None), ("statistics", None)], ExperienceLevel::Entry);
        assert!(
            score_role(&after, &role, &weights).score >= score_role(&before, &role, &weights).score
        );

        let nothing = score_role(&Profile::default(), &role, &weights).score;
        assert!(score_role(&before, &role, &weights).score >= nothing);
    }

    #[test]
    fn test_score_always_within_bounds() {
        let role = data_scientist();
        let weights = ScoringWeights::default();
        let cases = [
            profile(&[], ExperienceLevel::Entry),
            profile(&[("python", None)], ExperienceLevel::Entry),
            profile(
                &[("python", None), ("statistics", None), ("sql", None)],
                ExperienceLevel::Senior,
            ),
        ];
        for p in &cases {
            let score = score_role(p, &role, &weights).score;
            assert!((0.0..=100.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn test_interest_matches_domain_words() {
        let role = data_scientist();
        let mut p = profile(&[("python", None)], ExperienceLevel::Mid);
        p.interests = vec!["cooking".to_string(), "data".to_string()];
        assert_eq!(
            score_role(&p, &role, &ScoringWeights::default()).interest_match.as_deref(),
            Some("data")
        );

        p.interests = vec!["dat".to_string()];
        assert!(score_role(&p, &role, &ScoringWeights::default())
            .interest_match
            .is_none());
    }

    #[test]
    fn test_unexplored_related_excludes_requirements_and_held_skills() {
        let role = data_scientist();
        let p = profile(&[("python", None)], ExperienceLevel::Mid);
        let result = score_role(&p, &role, &ScoringWeights::default());
        assert_eq!(result.unexplored_related, vec!["tableau"]);
    }

    #[test]
    fn test_role_serializes_as_summary() {
        let role = data_scientist();
        let p = profile(&[("python", None)], ExperienceLevel::Mid);
        let json = serde_json::to_value(score_role(&p, &role, &ScoringWeights::default())).unwrap();
        assert_eq!(json["role"]["title"], "Data Scientist");
        assert!(json["role"].get("requirements").is_none());
        assert_eq!(json["missing_mandatory"][0]["skill"], "statistics");
    }
}
