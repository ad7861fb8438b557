/*
 * Responsibility
 * - persistence adapters (traits + Postgres implementations)
 */
pub mod error;
pub mod list_repo;
pub mod user_repo;
