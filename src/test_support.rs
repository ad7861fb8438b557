//! Test utilities shared by unit tests (in `src/`) and integration tests (in `tests/`).
//!
//! In-memory adapters for the repository traits, plus a helper that wires them
//! into the real router so tests exercise the same middleware stack as
//! production.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::app::build_router;
use crate::config::Config;
use crate::repos::error::{RepoError, RepoResult};
use crate::repos::list_repo::{ListChanges, ListRepo, ListRow, NewList};
use crate::repos::user_repo::{UserRepo, UserRow};
use crate::services::auth::{AuthService, hash_token};
use crate::services::id_codec::IdCodec;
use crate::state::AppState;

#[derive(Default)]
struct ListTable {
    next_id: i64,
    rows: BTreeMap<i64, ListRow>,
}

/// `ListRepo` over a map; ids count up from 1 like a `BIGSERIAL`.
#[derive(Clone, Default)]
pub struct MemoryListRepo {
    table: Arc<RwLock<ListTable>>,
}

impl MemoryListRepo {
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

// Mirrors the CHECK constraints in sql/schema.sql.
fn check_not_blank(field: &str, value: &str) -> RepoResult<()> {
    if value.trim().is_empty() {
        return Err(RepoError::Invalid(format!("{field} must not be blank")));
    }
    Ok(())
}

#[async_trait]
impl ListRepo for MemoryListRepo {
    async fn create(&self, new: NewList) -> RepoResult<ListRow> {
        check_not_blank("title", &new.title)?;
        check_not_blank("text", &new.text)?;

        let mut table = self.table.write().await;
        table.next_id += 1;
        let now = Utc::now();
        let row = ListRow {
            list_id: table.next_id,
            title: new.title,
            text: new.text,
            owner_id: new.owner_id,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(row.list_id, row.clone());
        Ok(row)
    }

    async fn find_all_by_owner(&self, owner_id: Uuid) -> RepoResult<Vec<ListRow>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .rev()
            .filter(|row| row.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, list_id: i64) -> RepoResult<Option<ListRow>> {
        Ok(self.table.read().await.rows.get(&list_id).cloned())
    }

    async fn update_by_id(&self, list_id: i64, changes: ListChanges) -> RepoResult<bool> {
        if changes.is_empty() {
            return Ok(true);
        }
        if let Some(title) = &changes.title {
            check_not_blank("title", title)?;
        }
        if let Some(text) = &changes.text {
            check_not_blank("text", text)?;
        }

        let mut table = self.table.write().await;
        let Some(row) = table.rows.get_mut(&list_id) else {
            return Ok(false);
        };
        if let Some(title) = changes.title {
            row.title = title;
        }
        if let Some(text) = changes.text {
            row.text = text;
        }
        row.updated_at = Utc::now();
        Ok(true)
    }

    async fn delete_by_id(&self, list_id: i64) -> RepoResult<bool> {
        Ok(self.table.write().await.rows.remove(&list_id).is_some())
    }
}

/// `UserRepo` keyed by token digest.
#[derive(Clone, Default)]
pub struct MemoryUserRepo {
    users: Arc<RwLock<BTreeMap<Vec<u8>, UserRow>>>,
}

impl MemoryUserRepo {
    /// Register a user reachable with `token`; returns the new user id.
    pub async fn insert(&self, email: &str, token: &str) -> Uuid {
        let row = UserRow {
            id: Uuid::new_v4(),
            email: email.to_string(),
        };
        let id = row.id;
        self.users.write().await.insert(hash_token(token), row);
        id
    }
}

#[async_trait]
impl UserRepo for MemoryUserRepo {
    async fn find_by_token_hash(&self, token_hash: &[u8]) -> RepoResult<Option<UserRow>> {
        Ok(self.users.read().await.get(token_hash).cloned())
    }
}

pub fn test_config() -> Config {
    let mut config = Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://localhost/list_api_test".to_string()),
        _ => None,
    })
    .unwrap_or_else(|e| panic!("test config: {e}"));
    config.request_timeout_seconds = 5;
    config
}

/// The production router over in-memory repositories.
pub struct TestApp {
    pub router: Router,
    pub lists: MemoryListRepo,
    pub users: MemoryUserRepo,
    pub id_codec: IdCodec,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Same wiring as [`TestApp::new`], with caller-tuned limits or CORS settings.
    pub fn with_config(config: Config) -> Self {
        let lists = MemoryListRepo::default();
        let users = MemoryUserRepo::default();
        let id_codec = IdCodec::new(config.sqids_min_length, &config.sqids_alphabet)
            .unwrap_or_else(|e| panic!("test id codec: {e}"));

        let state = AppState::new(
            Arc::new(lists.clone()),
            Arc::new(AuthService::new(Arc::new(users.clone()))),
            id_codec.clone(),
        );

        Self {
            router: build_router(state, &config),
            lists,
            users,
            id_codec,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
