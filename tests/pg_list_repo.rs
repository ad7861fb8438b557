//! Postgres adapter tests.
//!
//! Each test gets a fresh database from `#[sqlx::test]` (DATABASE_URL must point
//! at a server the test user may create databases on) with `sql/schema.sql`
//! applied. Run with `cargo test -- --ignored`.

use list_api::repos::error::RepoError;
use list_api::repos::list_repo::{ListChanges, ListRepo, NewList, PgListRepo};
use list_api::repos::user_repo::{PgUserRepo, UserRepo};
use list_api::services::auth::hash_token;
use sqlx::PgPool;
use uuid::Uuid;

const SCHEMA: &str = include_str!("../sql/schema.sql");

async fn setup(pool: &PgPool) {
    sqlx::raw_sql(SCHEMA).execute(pool).await.unwrap();
}

async fn insert_user(pool: &PgPool, email: &str, token: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO users (email, "hashedPassword", "tokenHash")
        VALUES ($1, 'x', $2)
        RETURNING "userId"
        "#,
    )
    .bind(email)
    .bind(hash_token(token))
    .fetch_one(pool)
    .await
    .unwrap()
}

fn new_list(owner_id: Uuid, title: &str, text: &str) -> NewList {
    NewList {
        title: title.to_string(),
        text: text.to_string(),
        owner_id,
    }
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn blank_title_hits_the_check_constraint(pool: PgPool) {
    setup(&pool).await;
    let owner = insert_user(&pool, "x@example.com", "tx").await;
    let repo = PgListRepo::new(pool);

    let err = repo.create(new_list(owner, "  ", "B")).await.unwrap_err();
    assert!(matches!(err, RepoError::Invalid(_)), "{err:?}");

    let row = repo.create(new_list(owner, "A", "B")).await.unwrap();
    let err = repo
        .update_by_id(
            row.list_id,
            ListChanges {
                title: Some(" ".into()),
                text: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Invalid(_)), "{err:?}");
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn partial_update_keeps_the_other_field(pool: PgPool) {
    setup(&pool).await;
    let owner = insert_user(&pool, "x@example.com", "tx").await;
    let repo = PgListRepo::new(pool);
    let row = repo.create(new_list(owner, "A", "B")).await.unwrap();

    let updated = repo
        .update_by_id(
            row.list_id,
            ListChanges {
                title: Some("New".into()),
                text: None,
            },
        )
        .await
        .unwrap();
    assert!(updated);

    let after = repo.find_by_id(row.list_id).await.unwrap().unwrap();
    assert_eq!(after.title, "New");
    assert_eq!(after.text, "B");
    assert_eq!(after.owner_id, owner);
    assert!(after.updated_at >= row.updated_at);
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn empty_changes_leave_the_row_untouched(pool: PgPool) {
    setup(&pool).await;
    let owner = insert_user(&pool, "x@example.com", "tx").await;
    let repo = PgListRepo::new(pool);
    let row = repo.create(new_list(owner, "A", "B")).await.unwrap();

    assert!(repo.update_by_id(row.list_id, ListChanges::default()).await.unwrap());

    let after = repo.find_by_id(row.list_id).await.unwrap().unwrap();
    assert_eq!(after, row);
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn missing_id_reports_no_row_affected(pool: PgPool) {
    setup(&pool).await;
    let owner = insert_user(&pool, "x@example.com", "tx").await;
    let repo = PgListRepo::new(pool);
    let row = repo.create(new_list(owner, "A", "B")).await.unwrap();

    assert!(repo.delete_by_id(row.list_id).await.unwrap());
    assert!(!repo.delete_by_id(row.list_id).await.unwrap());
    assert!(repo.find_by_id(row.list_id).await.unwrap().is_none());

    let changes = ListChanges {
        title: Some("New".into()),
        text: None,
    };
    assert!(!repo.update_by_id(row.list_id, changes).await.unwrap());
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn find_all_by_owner_is_newest_first_and_owner_scoped(pool: PgPool) {
    setup(&pool).await;
    let x = insert_user(&pool, "x@example.com", "tx").await;
    let y = insert_user(&pool, "y@example.com", "ty").await;
    let repo = PgListRepo::new(pool);

    let first = repo.create(new_list(x, "A", "1")).await.unwrap();
    repo.create(new_list(y, "B", "2")).await.unwrap();
    let third = repo.create(new_list(x, "C", "3")).await.unwrap();

    let mine = repo.find_all_by_owner(x).await.unwrap();
    let ids: Vec<i64> = mine.iter().map(|row| row.list_id).collect();
    assert_eq!(ids, vec![third.list_id, first.list_id]);

    assert!(repo.find_all_by_owner(Uuid::new_v4()).await.unwrap().is_empty());
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn user_is_found_by_token_digest(pool: PgPool) {
    setup(&pool).await;
    let x = insert_user(&pool, "x@example.com", "tx").await;
    let repo = PgUserRepo::new(pool);

    let user = repo.find_by_token_hash(&hash_token("tx")).await.unwrap().unwrap();
    assert_eq!(user.id, x);
    assert_eq!(user.email, "x@example.com");

    assert!(repo.find_by_token_hash(&hash_token("other")).await.unwrap().is_none());
}
