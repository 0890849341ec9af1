use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        favorites::{
            add_tag, create_favorite, delete_favorite, get_favorite, list_favorites, remove_tag,
        },
        giphy::{by_ids, search, trending},
        health::{healthz, livez},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    // Browser clients call the API cross-origin with a bearer token
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let favorite_routes = Router::new()
        .route("/favorites", get(list_favorites).post(create_favorite))
        .route(
            "/favorites/{id}",
            get(get_favorite).delete(delete_favorite),
        )
        .route(
            "/favorites/{id}/tags/{tag}",
            post(add_tag).delete(remove_tag),
        );

    let giphy_routes = Router::new()
        .route("/giphy/query", get(search))
        .route("/giphy/trending", get(trending))
        .route("/giphy/gifs", get(by_ids));

    Router::new()
        .merge(favorite_routes)
        .merge(giphy_routes)
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
