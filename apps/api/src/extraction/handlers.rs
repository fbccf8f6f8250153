use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::resume::{extract_text, ResumeAnalysis, ResumeFormat};
use crate::extraction::vocabulary::SkillCategory;
use crate::models::profile::Profile;
use crate::profile::normalizer::normalize;
use crate::recommend::handlers::{parse_overrides, RequestMeta};
use crate::recommend::{recommend, RecommendOptions, RecommendationOutcome};
use crate::state::AppState;

#[derive(Serialize)]
struct ResumeAnalysisResponse<'a> {
    #[serde(flatten)]
    meta: RequestMeta,
    format: ResumeFormat,
    extracted: &'a ResumeAnalysis,
    profile: &'a Profile,
    options: RecommendOptions,
    outcome: RecommendationOutcome<'a>,
}

#[derive(Serialize)]
struct SkillTaxonomyResponse<'a> {
    count: usize,
    categories: &'a [SkillCategory],
}

/// GET /api/v1/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Response {
    let vocabulary = state.analyzer.vocabulary();
    Json(SkillTaxonomyResponse {
        count: vocabulary.len(),
        categories: vocabulary.categories(),
    })
    .into_response()
}

struct Upload {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// POST /api/v1/resume/analyze
///
/// Multipart fields: `resume` (required file), `interests` (optional, comma-separated),
/// `options` (optional JSON, same shape as the recommendations endpoint).
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut upload: Option<Upload> = None;
    let mut interests: Vec<String> = Vec::new();
    let mut options_json: Option<serde_json::Value> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(String::from);
        match name.as_deref() {
            Some("resume") => {
                let file_name = field.file_name().map(String::from);
                let content_type = field.content_type().map(String::from);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read résumé upload: {e}")))?;
                upload = Some(Upload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("interests") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read interests: {e}")))?;
                interests.extend(text.split(',').map(String::from));
            }
            Some("options") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read options: {e}")))?;
                options_json = Some(
                    serde_json::from_str(&text)
                        .map_err(|e| AppError::Validation(format!("Invalid options: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let upload =
        upload.ok_or_else(|| AppError::Validation("No résumé file provided".to_string()))?;
    let format = ResumeFormat::detect(upload.file_name.as_deref(), upload.content_type.as_deref())?;
    let options = state
        .config
        .recommend_defaults
        .with_overrides(&parse_overrides(options_json.as_ref())?);

    // PDF parsing and regex scanning are CPU-bound.
    let analyzer = state.analyzer.clone();
    let analysis = tokio::task::spawn_blocking(move || {
        extract_text(format, &upload.bytes).map(|text| analyzer.analyze(&text))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("résumé analysis task failed: {e}")))??;

    let profile = normalize(&analysis.clone().into_raw_profile(interests));
    let outcome = recommend(&profile, &state.catalog, &options);
    let meta = RequestMeta::new();
    info!(
        request_id = %meta.request_id,
        ?format,
        skills = analysis.skills.len(),
        results = outcome.recommendations().len(),
        "Résumé analyzed"
    );

    Ok(Json(ResumeAnalysisResponse {
        meta,
        format,
        extracted: &analysis,
        profile: &profile,
        options,
        outcome,
    })
    .into_response())
}
