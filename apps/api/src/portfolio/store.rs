//! Portfolio selection storage — async trait with a PostgreSQL backend.
//!
//! Tables (managed outside this service):
//! - `users (id serial, username text unique, ...)`
//! - `portfolio_templates (id serial, ...)`
//! - `user_portfolios (id serial, user_id int -> users.id,
//!    template_id int -> portfolio_templates.id, is_ai_generated bool,
//!    published_url text, created_at timestamp, updated_at timestamp, ...)`
//!
//! CRITICAL: selections are append-only. Saving never UPDATEs a row; the
//! newest row per user is the current selection.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::portfolio::UserPortfolioRow;

/// Parameters for appending a template selection.
pub struct NewSelection<'a> {
    pub username: &'a str,
    pub template_id: i32,
    pub is_ai_generated: bool,
    pub published_url: &'a str,
}

/// Carried in `AppState` as `Arc<dyn PortfolioStore>`.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Appends a selection for the user. `None` when no user has that username.
    async fn append_selection(
        &self,
        selection: NewSelection<'_>,
    ) -> Result<Option<UserPortfolioRow>, AppError>;

    async fn latest_selection(&self, username: &str)
        -> Result<Option<UserPortfolioRow>, AppError>;
}

pub struct PgPortfolioStore {
    pool: PgPool,
}

impl PgPortfolioStore {
    pub fn new(pool: PgPool) -> Self {
        PgPortfolioStore { pool }
    }
}

#[async_trait]
impl PortfolioStore for PgPortfolioStore {
    async fn append_selection(
        &self,
        selection: NewSelection<'_>,
    ) -> Result<Option<UserPortfolioRow>, AppError> {
        // INSERT ... SELECT inserts nothing for an unknown username.
        let row = sqlx::query_as::<_, UserPortfolioRow>(
            r#"
            WITH inserted AS (
                INSERT INTO user_portfolios
                    (user_id, template_id, is_ai_generated, published_url)
                SELECT u.id, $2, $3, $4
                FROM users u
                WHERE u.username = $1
                RETURNING id, user_id, template_id, is_ai_generated, published_url,
                          created_at, updated_at
            )
            SELECT i.id, i.user_id, u.username, i.template_id, i.is_ai_generated,
                   i.published_url, i.created_at, i.updated_at
            FROM inserted i
            JOIN users u ON u.id = i.user_id
            "#,
        )
        .bind(selection.username)
        .bind(selection.template_id)
        .bind(selection.is_ai_generated)
        .bind(selection.published_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn latest_selection(
        &self,
        username: &str,
    ) -> Result<Option<UserPortfolioRow>, AppError> {
        Ok(sqlx::query_as::<_, UserPortfolioRow>(
            r#"
            SELECT p.id, p.user_id, u.username, p.template_id, p.is_ai_generated,
                   p.published_url, p.created_at, p.updated_at
            FROM user_portfolios p
            JOIN users u ON u.id = p.user_id
            WHERE u.username = $1
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?)
    }
}
