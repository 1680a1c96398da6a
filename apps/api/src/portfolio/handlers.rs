//! Axum route handlers for the Portfolios API.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::portfolio::UserPortfolioRow;
use crate::portfolio::selection::{
    current_selection, save_selection, SaveSelectionRequest, SaveSelectionResponse,
};
use crate::state::AppState;

/// POST /api/v1/portfolios
pub async fn handle_save_selection(
    State(state): State<AppState>,
    Json(request): Json<SaveSelectionRequest>,
) -> Result<Json<SaveSelectionResponse>, AppError> {
    let response = save_selection(
        state.portfolios.as_ref(),
        &state.config.portfolio_url_prefix,
        &request,
    )
    .await?;
    Ok(Json(response))
}

/// GET /api/v1/portfolios/:username
pub async fn handle_get_selection(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserPortfolioRow>, AppError> {
    let row = current_selection(state.portfolios.as_ref(), &username).await?;
    Ok(Json(row))
}
