//! Map-backed `PortfolioStore` for handler and selection tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::portfolio::UserPortfolioRow;
use crate::portfolio::store::{NewSelection, PortfolioStore};

/// Seeded with a fixed set of users (ids assigned in order from 1).
#[derive(Default)]
pub struct InMemoryPortfolioStore {
    users: HashMap<String, i32>,
    rows: RwLock<Vec<UserPortfolioRow>>,
}

impl InMemoryPortfolioStore {
    pub fn with_users(usernames: &[&str]) -> Self {
        InMemoryPortfolioStore {
            users: usernames
                .iter()
                .zip(1..)
                .map(|(u, id)| (u.to_string(), id))
                .collect(),
            rows: RwLock::default(),
        }
    }
}

#[async_trait]
impl PortfolioStore for InMemoryPortfolioStore {
    async fn append_selection(
        &self,
        selection: NewSelection<'_>,
    ) -> Result<Option<UserPortfolioRow>, AppError> {
        let Some(&user_id) = self.users.get(selection.username) else {
            return Ok(None);
        };

        let mut rows = self.rows.write().await;
        let now = Utc::now().naive_utc();
        let row = UserPortfolioRow {
            id: rows.len() as i32 + 1,
            user_id,
            username: selection.username.to_string(),
            template_id: Some(selection.template_id),
            is_ai_generated: Some(selection.is_ai_generated),
            published_url: Some(selection.published_url.to_string()),
            created_at: now,
            updated_at: now,
        };
        rows.push(row.clone());
        Ok(Some(row))
    }

    async fn latest_selection(
        &self,
        username: &str,
    ) -> Result<Option<UserPortfolioRow>, AppError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .rev()
            .find(|row| row.username == username)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(username: &str, template_id: i32) -> NewSelection<'_> {
        NewSelection {
            username,
            template_id,
            is_ai_generated: false,
            published_url: "/ai-portfolio/jdoe",
        }
    }

    #[tokio::test]
    async fn test_in_memory_unknown_user_inserts_nothing() {
        let store = InMemoryPortfolioStore::with_users(&["jdoe"]);
        assert!(store
            .append_selection(selection("nobody", 1))
            .await
            .unwrap()
            .is_none());
        assert!(store.latest_selection("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_latest_is_newest_append() {
        let store = InMemoryPortfolioStore::with_users(&["alice", "jdoe"]);
        store.append_selection(selection("jdoe", 1)).await.unwrap();
        store.append_selection(selection("alice", 2)).await.unwrap();
        store.append_selection(selection("jdoe", 3)).await.unwrap();

        let latest = store.latest_selection("jdoe").await.unwrap().unwrap();
        assert_eq!(latest.template_id, Some(3));
        assert_eq!(latest.user_id, 2);
        assert_eq!(latest.id, 3);
    }

    #[tokio::test]
    async fn test_in_memory_latest_missing_is_none() {
        let store = InMemoryPortfolioStore::default();
        assert!(store.latest_selection("jdoe").await.unwrap().is_none());
    }
}
