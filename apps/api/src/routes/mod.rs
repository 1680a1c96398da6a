pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::portfolio::handlers as portfolio;
use crate::recommendation::handlers as templates;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Templates API
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route(
            "/api/v1/templates/defaults",
            get(templates::handle_default_templates),
        )
        .route(
            "/api/v1/templates/recommend",
            post(templates::handle_recommend),
        )
        // Portfolios API
        .route("/api/v1/portfolios", post(portfolio::handle_save_selection))
        .route(
            "/api/v1/portfolios/:username",
            get(portfolio::handle_get_selection),
        )
        .with_state(state)
}
