//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use hegiphy_core::auth::{parse_bearer_token, Owner};

use crate::{AuthError, AuthState};

/// Extractor for the verified owner. Rejects the request when the bearer
/// token is missing, malformed, or refused by the verifier.
#[derive(Debug, Clone)]
pub struct CurrentOwner(pub Owner);

impl<S> FromRequestParts<S> for CurrentOwner
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingCredentials)?;
        let header = header.to_str().map_err(|_| AuthError::MalformedHeader)?;
        if header.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        let token = parse_bearer_token(header).ok_or(AuthError::MalformedHeader)?;

        let owner = auth_state.verifier.verify(token).await?;
        tracing::debug!(owner = %owner, "Authenticated request");

        Ok(CurrentOwner(owner))
    }
}

#[cfg(all(test, feature = "mock"))]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::MockVerifier;

    async fn whoami(CurrentOwner(owner): CurrentOwner) -> String {
        owner.into_inner()
    }

    fn app() -> Router {
        let verifier = MockVerifier::new().with_user("good-token", "foo@bar.com");
        #[derive(Clone)]
        struct TestState(AuthState);
        impl AsRef<AuthState> for TestState {
            fn as_ref(&self) -> &AuthState {
                &self.0
            }
        }

        Router::new()
            .route("/whoami", get(whoami))
            .with_state(TestState(AuthState::new(Arc::new(verifier))))
    }

    async fn call(authorization: Option<&str>) -> (StatusCode, String) {
        let mut request = Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }
        let response = app()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_token_resolves_owner() {
        let (status, body) = call(Some("Bearer good-token")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "foo@bar.com");
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let (status, body) = call(None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"error":"Unauthorized"}"#);
    }

    #[tokio::test]
    async fn test_malformed_header_is_bad_request() {
        for value in ["Basic good-token", "Bearer", "Bearer good token"] {
            let (status, body) = call(Some(value)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{value}");
            assert_eq!(body, r#"{"error":"Authorization header is malformed"}"#);
        }
    }

    #[tokio::test]
    async fn test_unknown_token_is_unauthorized() {
        let (status, _) = call(Some("Bearer other-token")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
