use std::sync::Arc;

use crate::config::Config;
use crate::portfolio::store::PortfolioStore;
use crate::recommendation::engine::TemplateRecommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable recommender. Default: RuleBasedRecommender.
    pub recommender: Arc<dyn TemplateRecommender>,
    /// Template selections. PostgreSQL in production, in-memory in tests.
    pub portfolios: Arc<dyn PortfolioStore>,
}
