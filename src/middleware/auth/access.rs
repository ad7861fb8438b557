//! Bearer token check → AuthCtx into request extensions.
//!
//! Runs as a `route_layer`, so it only fires for matched routes and always
//! before path/body extractors: an unauthenticated caller gets 401 even when
//! the id or body is malformed.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Put every route of `router` behind the access middleware.
///
/// ```ignore
/// let lists = Router::new().route("/lists", get(list_lists));
/// let lists = middleware::auth::access::apply(lists, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let auth_ctx = match state.auth.authenticate(authorization).await {
        Ok(ctx) => ctx,
        Err(err) => {
            tracing::warn!(
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "request authentication failed"
            );
            return Err(err.into());
        }
    };

    // middleware → extractor
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}
