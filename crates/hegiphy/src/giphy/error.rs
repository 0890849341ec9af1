use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors from the GIF provider passthrough.
#[derive(Debug, Error)]
pub enum GiphyError {
    #[error("the \"{0}\" parameter is required")]
    MissingParameter(&'static str),

    #[error("invalid GIF provider base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("GIF provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GIF provider returned {0}")]
    Upstream(reqwest::StatusCode),
}

impl IntoResponse for GiphyError {
    fn into_response(self) -> Response {
        let status = match &self {
            GiphyError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            GiphyError::InvalidBaseUrl { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            GiphyError::Request(_) | GiphyError::Upstream(_) => {
                tracing::error!(error = %self, "GIF provider error");
                StatusCode::BAD_GATEWAY
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_is_bad_request() {
        let error = GiphyError::MissingParameter("q");
        assert_eq!(error.to_string(), r#"the "q" parameter is required"#);
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_failure_is_bad_gateway() {
        let error = GiphyError::Upstream(reqwest::StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(error.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
