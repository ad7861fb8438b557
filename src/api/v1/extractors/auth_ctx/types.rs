/*
 * Responsibility
 * - the "authenticated context" type handlers see
 * - middleware resolves the credential and stores this in request extensions;
 *   handlers only ever receive this type
 */

use uuid::Uuid;

/// Context attached to an authenticated request.
///
/// `user_id` is the internal user id (UUID); ownership checks compare against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCtx {
    pub user_id: Uuid,
}

impl AuthCtx {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}
