/*
 * Responsibility
 * - owner-only guard for mutations (BOLA check)
 * - caller must have confirmed the resource exists; this only compares owners
 */
use uuid::Uuid;

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::repos::list_repo::ListRow;

/// A resource with exactly one owning user.
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}

impl Owned for ListRow {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

pub fn require_ownership<R: Owned>(auth: &AuthCtx, resource: &R) -> Result<(), AppError> {
    if resource.owner_id() == auth.user_id {
        return Ok(());
    }

    tracing::warn!(
        user_id = %auth.user_id,
        owner_id = %resource.owner_id(),
        "ownership check failed"
    );
    Err(AppError::Unauthorized)
}
