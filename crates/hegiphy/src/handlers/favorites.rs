//! Favorite CRUD and tagging handlers.
//!
//! Every handler is scoped to the verified owner from [`CurrentOwner`].

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use hegiphy_auth::CurrentOwner;
use hegiphy_core::favorite::{CreateFavorite, Favorite};
use hegiphy_core::storage::{not_found, TagOutcome};

use crate::{
    handlers::{error::bad_request, AppError},
    state::AppState,
};

/// Query parameters for listing favorites.
#[derive(Debug, Deserialize)]
pub struct ListFavoritesQuery {
    /// Only favorites carrying this tag (filter is lower-cased)
    pub tag: Option<String>,
}

/// List the caller's favorites (GET /favorites).
pub async fn list_favorites(
    CurrentOwner(owner): CurrentOwner,
    State(state): State<AppState>,
    Query(query): Query<ListFavoritesQuery>,
) -> Result<Json<Vec<Favorite>>, AppError> {
    let favorites = match query.tag.as_deref().filter(|tag| !tag.is_empty()) {
        Some(tag) => state.favorites.list_by_tag(owner.as_str(), tag).await?,
        None => state.favorites.list(owner.as_str()).await?,
    };

    Ok(Json(favorites))
}

/// Create or replace a favorite (POST /favorites).
pub async fn create_favorite(
    CurrentOwner(owner): CurrentOwner,
    State(state): State<AppState>,
    payload: Result<Json<CreateFavorite>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return Ok(bad_request(rejection.body_text())),
    };

    let favorite = state.favorites.create(owner.as_str(), request).await?;
    tracing::info!(owner = %owner, favorite_id = %favorite.id, "Favorite saved");

    Ok((StatusCode::CREATED, Json(favorite)).into_response())
}

/// Get one favorite (GET /favorites/{id}).
pub async fn get_favorite(
    CurrentOwner(owner): CurrentOwner,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Favorite>, AppError> {
    state
        .favorites
        .get(owner.as_str(), &id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(&id).into())
}

/// Delete a favorite (DELETE /favorites/{id}). Missing favorites succeed.
pub async fn delete_favorite(
    CurrentOwner(owner): CurrentOwner,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.favorites.delete(owner.as_str(), &id).await?;
    tracing::info!(owner = %owner, favorite_id = %id, "Favorite deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Add a tag (POST /favorites/{id}/tags/{tag}).
pub async fn add_tag(
    CurrentOwner(owner): CurrentOwner,
    State(state): State<AppState>,
    Path((id, tag)): Path<(String, String)>,
) -> Result<Json<Favorite>, AppError> {
    let outcome = state.favorites.add_tag(owner.as_str(), &id, &tag).await?;
    if matches!(outcome, TagOutcome::Updated(_)) {
        tracing::info!(owner = %owner, favorite_id = %id, %tag, "Tag added");
    }

    outcome_response(outcome, &id)
}

/// Remove a tag (DELETE /favorites/{id}/tags/{tag}).
pub async fn remove_tag(
    CurrentOwner(owner): CurrentOwner,
    State(state): State<AppState>,
    Path((id, tag)): Path<(String, String)>,
) -> Result<Json<Favorite>, AppError> {
    let outcome = state.favorites.remove_tag(owner.as_str(), &id, &tag).await?;
    if matches!(outcome, TagOutcome::Updated(_)) {
        tracing::info!(owner = %owner, favorite_id = %id, %tag, "Tag removed");
    }

    outcome_response(outcome, &id)
}

fn outcome_response(outcome: TagOutcome, id: &str) -> Result<Json<Favorite>, AppError> {
    outcome
        .into_favorite()
        .map(Json)
        .ok_or_else(|| not_found(id).into())
}
