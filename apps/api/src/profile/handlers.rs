//! Axum route handlers for the Profile API.

use axum::Json;
use serde_json::Value;
use tracing::debug;

use crate::models::profile::Profile;
use crate::profile::normalizer::normalize_value;

/// POST /api/v1/profile/normalize
///
/// Returns the canonical form of any JSON profile. Never rejects a well-formed JSON body;
/// unusable fields are dropped.
pub async fn handle_normalize(Json(body): Json<Value>) -> Json<Profile> {
    let profile = normalize_value(&body);
    debug!(
        skills = profile.skill_count(),
        tier = profile.experience_level.as_str(),
        "Profile normalized"
    );
    Json(profile)
}
