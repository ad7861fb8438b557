/**
 * Responsibility
 * - the meaning a repo passes upward
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[from] sqlx::Error),
    /// The store refused the values (NOT NULL / CHECK / length).
    #[error("invalid record: {0}")]
    Invalid(String),
}

pub type RepoResult<T> = Result<T, RepoError>;

// Postgres SQLSTATE codes that mean "the values are wrong", not "the store is broken".
const NOT_NULL_VIOLATION: &str = "23502";
const CHECK_VIOLATION: &str = "23514";
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

impl RepoError {
    pub fn from_sqlx(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(dbe) = &e
            && matches!(
                dbe.code().as_deref(),
                Some(NOT_NULL_VIOLATION | CHECK_VIOLATION | STRING_DATA_RIGHT_TRUNCATION)
            )
        {
            return RepoError::Invalid(dbe.message().to_string());
        }
        RepoError::Db(e)
    }
}
