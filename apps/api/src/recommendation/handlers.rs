//! Axum route handlers for the Templates API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::profile::ProfileRecord;
use crate::recommendation::catalog::{
    default_templates, seed_catalog, CatalogEntry, TemplateDescriptor,
};
use crate::recommendation::engine::{recommend_or_default, Recommendation};
use crate::state::AppState;

/// POST /api/v1/templates/recommend
///
/// Ranks templates for the submitted profile. A recommender error or a
/// profile with wrongly-typed fields is answered with the static default
/// list. Only a body that is not JSON at all is rejected.
pub async fn handle_recommend(
    State(state): State<AppState>,
    body: Result<Json<ProfileRecord>, JsonRejection>,
) -> Result<Json<Recommendation>, AppError> {
    let profile = match body {
        Ok(Json(profile)) => profile,
        Err(JsonRejection::JsonDataError(e)) => {
            warn!("Malformed profile, serving default templates: {}", e.body_text());
            return Ok(Json(Recommendation::fallback()));
        }
        Err(rejection) => return Err(AppError::Validation(rejection.body_text())),
    };

    debug!("Recommending templates for '{}'", profile.full_name());
    let recommendation = recommend_or_default(state.recommender.as_ref(), &profile);
    info!(
        "Recommended {} templates (fallback: {})",
        recommendation.templates.len(),
        recommendation.fallback_used
    );
    Ok(Json(recommendation))
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<CatalogEntry>> {
    Json(seed_catalog())
}

/// GET /api/v1/templates/defaults
pub async fn handle_default_templates() -> Json<Vec<TemplateDescriptor>> {
    Json(default_templates())
}
