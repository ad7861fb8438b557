/*
 * Responsibility
 * - the shared context bound to the Router (AppState)
 *   - list store, auth gate, public id codec
 * - built once at startup and Cloned per request (everything inside is Arc / cheap Clone)
 */
use std::sync::Arc;

use crate::repos::list_repo::ListRepo;
use crate::services::{auth::AuthService, id_codec::IdCodec};

#[derive(Clone)]
pub struct AppState {
    pub lists: Arc<dyn ListRepo>,
    pub auth: Arc<AuthService>,
    pub id_codec: IdCodec,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("auth", &self.auth)
            .field("id_codec", &self.id_codec)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(lists: Arc<dyn ListRepo>, auth: Arc<AuthService>, id_codec: IdCodec) -> Self {
        Self {
            lists,
            auth,
            id_codec,
        }
    }
}
