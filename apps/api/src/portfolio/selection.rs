use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::portfolio::UserPortfolioRow;
use crate::portfolio::store::{NewSelection, PortfolioStore};
use crate::recommendation::catalog::seed_catalog;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSelectionRequest {
    pub username: String,
    pub template_id: i32,
    #[serde(default)]
    pub use_ai: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSelectionResponse {
    pub success: bool,
    pub message: String,
    pub portfolio_url: String,
}

/// Public page path for a user, e.g. `/ai-portfolio/jdoe`.
pub fn portfolio_url(prefix: &str, username: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), username)
}

/// Records the user's template choice and returns where the portfolio is published.
pub async fn save_selection(
    store: &dyn PortfolioStore,
    url_prefix: &str,
    request: &SaveSelectionRequest,
) -> Result<SaveSelectionResponse, AppError> {
    let username = request.username.trim();
    if username.is_empty() {
        return Err(AppError::Validation("username cannot be empty".to_string()));
    }
    // portfolio_templates is seeded from the catalog; anything else breaks the FK.
    let known_template = u32::try_from(request.template_id)
        .map(|id| seed_catalog().iter().any(|entry| entry.template.id == id))
        .unwrap_or(false);
    if !known_template {
        return Err(AppError::Validation(format!(
            "templateId {} is not a catalog template",
            request.template_id
        )));
    }

    info!("Saving template {} for user {username}", request.template_id);
    if request.use_ai {
        info!("Using enhanced AI generation for user {username}");
    }

    let published_url = portfolio_url(url_prefix, username);
    store
        .append_selection(NewSelection {
            username,
            template_id: request.template_id,
            is_ai_generated: request.use_ai,
            published_url: &published_url,
        })
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {username} not found")))?;

    Ok(SaveSelectionResponse {
        success: true,
        message: "Portfolio template saved successfully".to_string(),
        portfolio_url: published_url,
    })
}

pub async fn current_selection(
    store: &dyn PortfolioStore,
    username: &str,
) -> Result<UserPortfolioRow, AppError> {
    store
        .latest_selection(username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No portfolio saved for {username}")))
}
