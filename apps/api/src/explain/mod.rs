//! Explainability Layer: derives a human-readable justification and a remediation
//! roadmap from a `MatchResult`.
//!
//! Everything here is a pure function of the match result, so the same input always
//! produces byte-identical explanations.

pub mod narrative;
pub mod roadmap;

use serde::Serialize;

use crate::explain::narrative::{
    assess_skill_level, demand_description, headline, reasoning, ConfidenceLevel, MatchVerdict,
    SkillLevelAssessment,
};
use crate::explain::roadmap::{build_roadmap, RoadmapStep};
use crate::matching::MatchResult;

const GROWTH_BY_DOMAIN: &[(&str, &str)] = &[
    ("ai", "Exceptional - Fastest growing tech domain"),
    ("data science", "Exceptional - Data is the new oil"),
    ("cloud", "Very Strong - Cloud adoption accelerating"),
    ("web", "Strong - Core to digital transformation"),
    ("enterprise", "Stable - Reliable long-term opportunities"),
];
const DEFAULT_GROWTH: &str = "Strong - Growing field";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketInsights {
    pub demand_level: &'static str,
    pub salary_range: String,
    pub growth_potential: &'static str,
}

pub fn growth_potential(domain: &str) -> &'static str {
    let domain = domain.trim().to_lowercase();
    GROWTH_BY_DOMAIN
        .iter()
        .find(|(name, _)| *name == domain)
        .map(|(_, growth)| *growth)
        .unwrap_or(DEFAULT_GROWTH)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub verdict: MatchVerdict,
    pub confidence_level: ConfidenceLevel,
    pub skill_level: SkillLevelAssessment,
    /// Headline followed by the reasoning sentences.
    pub narrative: String,
    pub reasoning: Vec<String>,
    /// Missing mandatory skills in catalog order.
    pub critical_gaps: Vec<String>,
    pub roadmap: Vec<RoadmapStep>,
    pub market_insights: MarketInsights,
    /// Related skills worth exploring that the role does not strictly require.
    pub further_exploration: Vec<String>,
}

pub fn explain(result: &MatchResult<'_>, roadmap_cap: usize) -> Explanation {
    let role = result.role;
    let reasoning = reasoning(result);

    let mut narrative = headline(result);
    for sentence in &reasoning {
        narrative.push(' ');
        narrative.push_str(sentence);
    }

    Explanation {
        verdict: MatchVerdict::from_score(result.score),
        confidence_level: ConfidenceLevel::from_score(result.score),
        skill_level: assess_skill_level(result),
        narrative,
        reasoning,
        critical_gaps: result
            .missing_mandatory
            .iter()
            .map(|r| r.skill.clone())
            .collect(),
        roadmap: build_roadmap(result, roadmap_cap),
        market_insights: MarketInsights {
            demand_level: demand_description(role.market_demand),
            salary_range: role.salary_range.clone(),
            growth_potential: growth_potential(&role.domain),
        },
        further_exploration: result
            .unexplored_related
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::narrative::SkillLevel;
    use crate::matching::{score_role, ScoringWeights};
    use crate::models::profile::{ExperienceLevel, ProficiencyLevel, Profile, Skill};
    use crate::models::role::{Role, RoleRequirement};

    fn data_scientist() -> Role {
        let req = |skill: &str, mandatory| RoleRequirement {
            skill: skill.to_string(),
            required_level: ProficiencyLevel::Intermediate,
            mandatory,
        };
        Role {
            title: "Data Scientist".to_string(),
            domain: "Data Science".to_string(),
            experience_level: ExperienceLevel::Mid,
            salary_range: "$100,000 - $160,000".to_string(),
            market_demand: 9.0,
            requirements: vec![req("python", true), req("statistics", true), req("sql", false)],
            related_skills_to_learn: vec!["tableau".to_string()],
        }
    }

    fn python_sql_mid() -> Profile {
        Profile {
            skills: vec![
                Skill {
                    name: "python".to_string(),
                    level: None,
                },
                Skill {
                    name: "sql".to_string(),
                    level: None,
                },
            ],
            years_experience: 3.0,
            experience_level: ExperienceLevel::Mid,
            interests: vec!["data".to_string()],
            ..Profile::default()
        }
    }

    #[test]
    fn test_partial_match_names_missing_mandatory() {
        let role = data_scientist();
        let result = score_role(&python_sql_mid(), &role, &ScoringWeights::default());
        let explanation = explain(&result, 6);

        assert_eq!(explanation.verdict, MatchVerdict::PotentialMatch);
        assert!(explanation.narrative.starts_with("Potential match: Data Scientist"));
        assert!(explanation.narrative.contains("statistics"));
        assert!(explanation.narrative.contains("python and sql"));
        assert_eq!(explanation.roadmap[0].skill, "statistics");
        assert_eq!(explanation.critical_gaps, vec!["statistics".to_string()]);
        assert_eq!(explanation.further_exploration, vec!["tableau".to_string()]);
    }

    #[test]
    fn test_zero_skills_uses_gap_template_with_mandatory_callout() {
        let role = data_scientist();
        let result = score_role(&Profile::default(), &role, &ScoringWeights::default());
        let explanation = explain(&result, 6);

        assert_eq!(explanation.verdict, MatchVerdict::GapIdentified);
        assert_eq!(explanation.confidence_level, ConfidenceLevel::Low);
        assert!(explanation.narrative.starts_with("Gap identified"));
        assert!(explanation
            .narrative
            .contains("Mandatory skills missing from your profile: python and statistics."));
    }

    #[test]
    fn test_full_match_is_highly_recommended() {
        let role = data_scientist();
        let mut profile = python_sql_mid();
        profile.skills.push(Skill {
            name: "statistics".to_string(),
            level: None,
        });
        let result = score_role(&profile, &role, &ScoringWeights::default());
        let explanation = explain(&result, 6);

        assert_eq!(explanation.verdict, MatchVerdict::HighlyRecommended);
        assert!(explanation.roadmap.is_empty());
        assert!(explanation.critical_gaps.is_empty());
        assert!(explanation.narrative.contains("You cover 2 of 2 mandatory skills."));
    }

    #[test]
    fn test_reasoning_mentions_interest_and_market() {
        let role = data_scientist();
        let result = score_role(&python_sql_mid(), &role, &ScoringWeights::default());
        let explanation = explain(&result, 6);

        assert!(explanation
            .reasoning
            .iter()
            .any(|s| s.contains("interest in data")));
        assert_eq!(
            explanation.market_insights.demand_level,
            "Extremely High (9+/10)"
        );
        assert_eq!(
            explanation.market_insights.growth_potential,
            "Exceptional - Data is the new oil"
        );
    }

    fn rated(name: &str, level: ProficiencyLevel) -> Skill {
        Skill {
            name: name.to_string(),
            level: Some(level),
        }
    }

    #[test]
    fn test_skill_level_assessment_bands() {
        let role = data_scientist();
        let weights = ScoringWeights::default();
        let level_for = |skills: Vec<Skill>| {
            let profile = Profile {
                skills,
                ..python_sql_mid()
            };
            explain(&score_role(&profile, &role, &weights), 6).skill_level.level
        };

        assert_eq!(level_for(vec![]), SkillLevel::Novice);
        assert_eq!(
            level_for(vec![
                rated("python", ProficiencyLevel::Expert),
                rated("sql", ProficiencyLevel::Expert),
                rated("statistics", ProficiencyLevel::Expert),
            ]),
            SkillLevel::Expert
        );
        assert_eq!(
            level_for(vec![
                rated("python", ProficiencyLevel::Expert),
                rated("sql", ProficiencyLevel::Beginner),
            ]),
            SkillLevel::Intermediate
        );
        assert_eq!(
            level_for(vec![
                rated("python", ProficiencyLevel::Beginner),
                rated("sql", ProficiencyLevel::Intermediate),
            ]),
            SkillLevel::Beginner
        );
    }

    #[test]
    fn test_unrated_skills_assess_as_intermediate() {
        let role = data_scientist();
        let result = score_role(&python_sql_mid(), &role, &ScoringWeights::default());
        let assessment = explain(&result, 6).skill_level;
        assert_eq!(assessment.level, SkillLevel::Intermediate);
        assert_eq!(assessment.description, "You have solid foundational knowledge");
    }

    #[test]
    fn test_unknown_domain_growth_default() {
        assert_eq!(growth_potential("Biotech"), DEFAULT_GROWTH);
        assert_eq!(
            growth_potential(" cloud "),
            "Very Strong - Cloud adoption accelerating"
        );
    }

    #[test]
    fn test_explanation_is_deterministic() {
        let role = data_scientist();
        let profile = python_sql_mid();
        let weights = ScoringWeights::default();
        let a = explain(&score_role(&profile, &role, &weights), 6);
        let b = explain(&score_role(&profile, &role, &weights), 6);
        assert_eq!(a, b);
    }
}
