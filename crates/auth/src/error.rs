use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hegiphy_core::auth::IdentityError;
use serde_json::json;
use thiserror::Error;

/// Auth errors for the hegiphy_auth crate.
///
/// Wraps the core `IdentityError` and adds the header and configuration
/// failures that only exist at the HTTP edge.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Unauthorized")]
    MissingCredentials,

    #[error("Authorization header is malformed")]
    MalformedHeader,

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::MissingCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AuthError::MalformedHeader => (StatusCode::BAD_REQUEST, self.to_string()),
            AuthError::Identity(IdentityError::Rejected(reason)) => {
                tracing::warn!(%reason, "Token rejected");
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            AuthError::Identity(IdentityError::Unavailable(_)) => {
                tracing::error!("Identity provider error: {}", self);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Identity provider unavailable".to_string(),
                )
            }
            AuthError::Config(_) => {
                tracing::error!("Config error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
