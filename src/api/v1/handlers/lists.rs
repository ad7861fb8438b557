/*
 * Responsibility
 * - /lists CRUD handlers
 * - {list_id} is a public id; the extractor decodes it to the store id
 * - every route runs behind the access middleware, so AuthCtx is always present
 * - each handler is a straight pipeline: first failure wins
 */
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    api::v1::{
        dto::lists::{
            CreateListRequest, ListBody, ListCollectionResponse, ListResponse,
            SingleListResponse, UpdateListRequest, validate_changes,
        },
        extractors::{AuthCtxExtractor, public_id::PublicListId},
    },
    error::AppError,
    repos::list_repo::ListRow,
    services::{blank_fields::RemoveBlanks, ownership::require_ownership},
    state::AppState,
};

fn row_to_response(state: &AppState, row: ListRow) -> Result<ListResponse, AppError> {
    let public_id = state.id_codec.encode(row.list_id)?;

    Ok(ListResponse {
        id: public_id,
        title: row.title,
        text: row.text,
        owner: row.owner_id,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

async fn fetch_list(state: &AppState, list_id: i64) -> Result<ListRow, AppError> {
    state
        .lists
        .find_by_id(list_id)
        .await?
        .ok_or(AppError::not_found("list"))
}

pub async fn list_lists(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
) -> Result<Json<ListCollectionResponse>, AppError> {
    let rows = state.lists.find_all_by_owner(auth.user_id).await?;

    let mut lists = Vec::with_capacity(rows.len());
    for row in rows {
        lists.push(row_to_response(&state, row)?);
    }

    Ok(Json(ListCollectionResponse { lists }))
}

// Reads are not owner-restricted: any authenticated user may fetch by id.
pub async fn get_list(
    State(state): State<AppState>,
    list_id: PublicListId,
) -> Result<Json<SingleListResponse>, AppError> {
    let row = fetch_list(&state, list_id.id).await?;

    Ok(Json(SingleListResponse {
        list: row_to_response(&state, row)?,
    }))
}

pub async fn create_list(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    payload: Result<Json<ListBody<CreateListRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<SingleListResponse>), AppError> {
    let Json(body) = payload?;
    let req = body.into_inner();
    req.validate().map_err(AppError::validation)?;

    let row = state.lists.create(req.into_new_list(auth.user_id)).await?;

    tracing::info!(list_id = row.list_id, user_id = %auth.user_id, "list created");

    Ok((
        StatusCode::CREATED,
        Json(SingleListResponse {
            list: row_to_response(&state, row)?,
        }),
    ))
}

pub async fn update_list(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    list_id: PublicListId,
    payload: Result<Json<ListBody<UpdateListRequest>>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(body) = payload?;

    let row = fetch_list(&state, list_id.id).await?;
    let changes = body.into_inner().into_changes().remove_blanks();
    require_ownership(&auth, &row)?;
    validate_changes(&changes).map_err(AppError::validation)?;

    if changes.is_empty() {
        tracing::debug!(list_id = row.list_id, "empty update, nothing to apply");
    }

    let updated = state.lists.update_by_id(row.list_id, changes).await?;
    if !updated {
        // deleted between the fetch and the update
        return Err(AppError::not_found("list"));
    }

    tracing::info!(list_id = row.list_id, user_id = %auth.user_id, "list updated");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_list(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    list_id: PublicListId,
) -> Result<StatusCode, AppError> {
    let row = fetch_list(&state, list_id.id).await?;
    require_ownership(&auth, &row)?;

    if !state.lists.delete_by_id(row.list_id).await? {
        return Err(AppError::not_found("list"));
    }

    tracing::info!(list_id = row.list_id, user_id = %auth.user_id, "list deleted");

    Ok(StatusCode::NO_CONTENT)
}
