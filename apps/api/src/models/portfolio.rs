use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One saved template selection from `user_portfolios`, joined with the
/// owner's username. Rows are append-only; the newest row for a user is the
/// current selection.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserPortfolioRow {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub template_id: Option<i32>,
    pub is_ai_generated: Option<bool>,
    pub published_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
