use sha2::{Digest, Sha256};
use std::sync::Arc;
use thiserror::Error;

use crate::api::v1::extractors::AuthCtx;
use crate::repos::error::RepoError;
use crate::repos::user_repo::UserRepo;
use crate::services::auth::credential::parse_authorization;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing authorization header")]
    MissingCredential,
    #[error("unsupported or malformed authorization header")]
    MalformedCredential,
    #[error("token does not match any user")]
    UnknownToken,
    #[error(transparent)]
    Lookup(#[from] RepoError),
}

/// Resolves an opaque bearer token to the user it was issued to.
///
/// Only sha256(token) ever reaches the store.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepo>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepo>) -> Self {
        Self { users }
    }

    /// Authenticate from the raw `Authorization` header value (if any).
    pub async fn authenticate(&self, authorization: Option<&str>) -> Result<AuthCtx, AuthError> {
        let header = authorization.ok_or(AuthError::MissingCredential)?;
        let token = parse_authorization(header).ok_or(AuthError::MalformedCredential)?;

        let user = self
            .users
            .find_by_token_hash(&hash_token(token))
            .await?
            .ok_or(AuthError::UnknownToken)?;

        tracing::debug!(user_id = %user.id, "bearer token resolved");

        Ok(AuthCtx::new(user.id))
    }
}

pub fn hash_token(token: &str) -> Vec<u8> {
    // sha256(token) -> raw 32 bytes (stored as BYTEA)
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().to_vec()
}
