pub mod credential;
pub mod token_auth;

pub use credential::parse_authorization;
pub use token_auth::{AuthError, AuthService, hash_token};
