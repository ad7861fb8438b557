/*
 * Responsibility
 * - v1 URL layout
 * - /health is public; the /lists routes go behind the access middleware (route_layer)
 */
use axum::{Router, routing::get};

use crate::middleware::auth::access;
use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    lists::{create_list, delete_list, get_list, list_lists, update_list},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let lists = Router::new()
        .route("/lists", get(list_lists).post(create_list))
        .route(
            "/lists/{list_id}",
            get(get_list).patch(update_list).delete(delete_list),
        );

    Router::new()
        .route("/health", get(health))
        .merge(access::apply(lists, state))
}
