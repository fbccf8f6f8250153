use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::profile::normalizer::normalize_value;
use crate::recommend::{recommend, OptionOverrides, RecommendOptions, RecommendationOutcome};
use crate::state::AppState;

/// Per-response metadata. Kept out of the core so recommendations stay deterministic.
#[derive(Debug, Serialize)]
pub struct RequestMeta {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
}

impl RequestMeta {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            generated_at: Utc::now(),
        }
    }
}

#[derive(Serialize)]
struct RecommendationResponse<'a> {
    #[serde(flatten)]
    meta: RequestMeta,
    profile: &'a Profile,
    options: RecommendOptions,
    outcome: RecommendationOutcome<'a>,
}

/// Reads `options` from a request body. Absent or null means no overrides.
pub fn parse_overrides(value: Option<&Value>) -> Result<OptionOverrides, AppError> {
    match value {
        None | Some(Value::Null) => Ok(OptionOverrides::default()),
        Some(v) => serde_json::from_value(v.clone())
            .map_err(|e| AppError::Validation(format!("Invalid options: {e}"))),
    }
}

/// POST /api/v1/recommendations
///
/// Body is `{"profile": {...}, "options": {...}}`. A body without a `profile` key is
/// treated as the profile itself.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let options = state
        .config
        .recommend_defaults
        .with_overrides(&parse_overrides(body.get("options"))?);
    let profile = normalize_value(body.get("profile").unwrap_or(&body));

    let outcome = recommend(&profile, &state.catalog, &options);
    let meta = RequestMeta::new();
    info!(
        request_id = %meta.request_id,
        skills = profile.skill_count(),
        results = outcome.recommendations().len(),
        "Recommendations generated"
    );

    Ok(Json(RecommendationResponse {
        meta,
        profile: &profile,
        options,
        outcome,
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_or_null_options_are_empty_overrides() {
        assert!(parse_overrides(None).unwrap().max_results.is_none());
        assert!(parse_overrides(Some(&Value::Null)).unwrap().max_results.is_none());
    }

    #[test]
    fn test_malformed_options_rejected() {
        let result = parse_overrides(Some(&json!({"max_results": "ten"})));
        assert!(matches!(result, Err(AppError::Validation(_))));

        let unknown = parse_overrides(Some(&json!({"limit": 3})));
        assert!(matches!(unknown, Err(AppError::Validation(_))));
    }
}
