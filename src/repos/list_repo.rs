/*
 * Responsibility
 * - lists CRUD behind the ListRepo trait
 * - "ownerId" is an FK to users (CASCADE); owner is written once, at insert
 * - ids / timestamps are generated by the store
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ListRow {
    #[sqlx(rename = "listId")]
    pub list_id: i64,

    pub title: String,
    pub text: String,

    #[sqlx(rename = "ownerId")]
    pub owner_id: Uuid,

    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Insert payload. `owner_id` always comes from the authenticated caller.
#[derive(Debug, Clone)]
pub struct NewList {
    pub title: String,
    pub text: String,
    pub owner_id: Uuid,
}

/// Partial update: `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListChanges {
    pub title: Option<String>,
    pub text: Option<String>,
}

impl ListChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none()
    }
}

#[async_trait]
pub trait ListRepo: Send + Sync + 'static {
    async fn create(&self, new: NewList) -> RepoResult<ListRow>;

    async fn find_all_by_owner(&self, owner_id: Uuid) -> RepoResult<Vec<ListRow>>;

    async fn find_by_id(&self, list_id: i64) -> RepoResult<Option<ListRow>>;

    // Returns:
    // - `Ok(true)`  row exists (an empty change set is a no-op and also returns true)
    // - `Ok(false)` row is gone
    async fn update_by_id(&self, list_id: i64, changes: ListChanges) -> RepoResult<bool>;

    async fn delete_by_id(&self, list_id: i64) -> RepoResult<bool>;
}

#[derive(Clone, Debug)]
pub struct PgListRepo {
    pool: PgPool,
}

impl PgListRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListRepo for PgListRepo {
    async fn create(&self, new: NewList) -> RepoResult<ListRow> {
        let row = sqlx::query_as::<_, ListRow>(
            r#"
            INSERT INTO lists (title, text, "ownerId")
            VALUES ($1, $2, $3)
            RETURNING
                "listId", title, text, "ownerId", "createdAt", "updatedAt"
            "#,
        )
        .bind(&new.title)
        .bind(&new.text)
        .bind(new.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(row)
    }

    async fn find_all_by_owner(&self, owner_id: Uuid) -> RepoResult<Vec<ListRow>> {
        let rows = sqlx::query_as::<_, ListRow>(
            r#"
            SELECT
                "listId", title, text, "ownerId", "createdAt", "updatedAt"
            FROM lists
            WHERE "ownerId" = $1
            ORDER BY "listId" DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, list_id: i64) -> RepoResult<Option<ListRow>> {
        let row = sqlx::query_as::<_, ListRow>(
            r#"
            SELECT
                "listId", title, text, "ownerId", "createdAt", "updatedAt"
            FROM lists
            WHERE "listId" = $1
            "#,
        )
        .bind(list_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update_by_id(&self, list_id: i64, changes: ListChanges) -> RepoResult<bool> {
        if changes.is_empty() {
            return Ok(true);
        }

        let result = sqlx::query(
            r#"
            UPDATE lists
            SET
                title = COALESCE($2, title),
                text = COALESCE($3, text),
                "updatedAt" = now()
            WHERE "listId" = $1
            "#,
        )
        .bind(list_id)
        .bind(changes.title.as_deref())
        .bind(changes.text.as_deref())
        .execute(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, list_id: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM lists
            WHERE "listId" = $1
            "#,
        )
        .bind(list_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
