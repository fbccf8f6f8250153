//! Recommendation Assembler: scores a profile against the whole catalog, ranks, filters,
//! and attaches explanations.

pub mod handlers;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::RoleCatalog;
use crate::explain::{explain, Explanation};
use crate::matching::{score_role, MatchResult, ScoringWeights};
use crate::models::profile::Profile;

/// Results returned when nothing clears the threshold.
const FALLBACK_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecommendOptions {
    pub suitability_threshold: f64,
    pub max_results: usize,
    pub roadmap_cap: usize,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            suitability_threshold: 40.0,
            max_results: 10,
            roadmap_cap: 6,
        }
    }
}

/// Per-request overrides. Absent fields keep the configured defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionOverrides {
    pub suitability_threshold: Option<f64>,
    pub max_results: Option<usize>,
    pub roadmap_cap: Option<usize>,
}

impl RecommendOptions {
    /// Threshold clamped to 0–100 (non-finite → default), at least one result.
    pub fn sanitized(self) -> Self {
        let threshold = if self.suitability_threshold.is_finite() {
            self.suitability_threshold.clamp(0.0, 100.0)
        } else {
            RecommendOptions::default().suitability_threshold
        };
        Self {
            suitability_threshold: threshold,
            max_results: self.max_results.max(1),
            roadmap_cap: self.roadmap_cap,
        }
    }

    pub fn with_overrides(self, overrides: &OptionOverrides) -> Self {
        Self {
            suitability_threshold: overrides
                .suitability_threshold
                .unwrap_or(self.suitability_threshold),
            max_results: overrides.max_results.unwrap_or(self.max_results),
            roadmap_cap: overrides.roadmap_cap.unwrap_or(self.roadmap_cap),
        }
        .sanitized()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    /// 1-based.
    pub rank: usize,
    #[serde(flatten)]
    pub result: MatchResult<'a>,
    pub explanation: Explanation,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecommendationOutcome<'a> {
    /// The catalog has no roles at all.
    NoRolesConfigured,
    Matched {
        recommendations: Vec<Recommendation<'a>>,
    },
    /// Nothing reached the threshold. Holds the best few unfiltered results.
    BelowThreshold {
        threshold: f64,
        recommendations: Vec<Recommendation<'a>>,
    },
}

impl<'a> RecommendationOutcome<'a> {
    pub fn recommendations(&self) -> &[Recommendation<'a>] {
        match self {
            RecommendationOutcome::NoRolesConfigured => &[],
            RecommendationOutcome::Matched { recommendations }
            | RecommendationOutcome::BelowThreshold {
                recommendations, ..
            } => recommendations,
        }
    }
}

/// Score desc, market demand desc, title asc.
fn rank_order(a: &MatchResult<'_>, b: &MatchResult<'_>) -> std::cmp::Ordering {
    b.score
        .total_cmp(&a.score)
        .then(b.role.market_demand.total_cmp(&a.role.market_demand))
        .then_with(|| a.role.title.cmp(&b.role.title))
}

pub fn recommend<'a>(
    profile: &Profile,
    catalog: &'a RoleCatalog,
    options: &RecommendOptions,
) -> RecommendationOutcome<'a> {
    if catalog.is_empty() {
        return RecommendationOutcome::NoRolesConfigured;
    }

    let options = options.sanitized();
    let weights = ScoringWeights::default();

    let mut results: Vec<MatchResult<'a>> = catalog
        .roles()
        .par_iter()
        .map(|role| score_role(profile, role, &weights))
        .collect();
    results.sort_by(rank_order);

    let qualifying = results
        .iter()
        .take_while(|r| r.score >= options.suitability_threshold)
        .count();
    debug!(
        "Scored {} roles, {} at or above threshold {}",
        results.len(),
        qualifying,
        options.suitability_threshold
    );

    let below_threshold = qualifying == 0;
    let keep = if below_threshold {
        FALLBACK_COUNT.min(options.max_results)
    } else {
        qualifying.min(options.max_results)
    };
    results.truncate(keep);

    let recommendations = results
        .into_iter()
        .enumerate()
        .map(|(idx, result)| {
            let explanation = explain(&result, options.roadmap_cap);
            Recommendation {
                rank: idx + 1,
                result,
                explanation,
            }
        })
        .collect();

    if below_threshold {
        RecommendationOutcome::BelowThreshold {
            threshold: options.suitability_threshold,
            recommendations,
        }
    } else {
        RecommendationOutcome::Matched { recommendations }
    }
}
