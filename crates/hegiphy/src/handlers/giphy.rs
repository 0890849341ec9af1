//! GIF provider proxy handlers. The upstream body is returned verbatim.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::{
    giphy::{ByIdsQuery, GiphyError, SearchQuery, TrendingQuery},
    state::AppState,
};

fn json_passthrough(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Search GIFs (GET /giphy/query).
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, GiphyError> {
    state.giphy.search(&query).await.map(json_passthrough)
}

/// Trending GIFs (GET /giphy/trending).
pub async fn trending(
    State(state): State<AppState>,
    Query(query): Query<TrendingQuery>,
) -> Result<Response, GiphyError> {
    state.giphy.trending(&query).await.map(json_passthrough)
}

/// GIFs by comma-separated ids (GET /giphy/gifs).
pub async fn by_ids(
    State(state): State<AppState>,
    Query(query): Query<ByIdsQuery>,
) -> Result<Response, GiphyError> {
    state.giphy.by_ids(&query).await.map(json_passthrough)
}
