use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hegiphy_core::storage::{repository_error_to_status_code, RepositoryError};
use serde_json::json;

/// Application error type that wraps `anyhow::Error`.
///
/// Repository errors keep their mapped status code; anything else is a 500.
/// The body is always `{"error": "<message>"}`.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_error) => {
                let code = repository_error_to_status_code(repo_error);
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            None => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else if status_code == StatusCode::BAD_REQUEST {
            tracing::warn!(error = %self.0, "Rejected request");
        }

        (status_code, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// A bad request with a plain message.
pub fn bad_request(message: impl Into<String>) -> Response {
    let message = message.into();
    tracing::warn!(%message, "Rejected request");
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hegiphy_core::favorite::ValidationError;
    use http_body_util::BodyExt;

    async fn render(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_repository_error_status_and_body() {
        let (status, body) = render(hegiphy_core::storage::not_found("g1").into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "favorite with id g1 not found");
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request() {
        let error = RepositoryError::from(ValidationError::IdTooLong { max: 1024 });
        let (status, body) = render(error.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "maximum id length is 1024");
    }

    #[tokio::test]
    async fn test_unknown_error_is_internal() {
        let (status, _) = render(anyhow::anyhow!("boom").into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
