use std::time::Duration;

use url::Url;

use super::params::{by_ids_params, search_params, trending_params};
use super::{ByIdsQuery, GiphyError, SearchQuery, TrendingQuery};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Forwards GIF lookups to the provider and returns the body verbatim.
pub struct GiphyClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GiphyClient {
    /// Creates a client. A trailing `/` on the base URL is ignored.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, GiphyError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| GiphyError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let http_client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/gifs/search`
    pub async fn search(&self, query: &SearchQuery) -> Result<String, GiphyError> {
        let params = search_params(&self.api_key, query)?;
        self.get("/gifs/search", &params).await
    }

    /// `GET {base}/gifs/trending`
    pub async fn trending(&self, query: &TrendingQuery) -> Result<String, GiphyError> {
        let params = trending_params(&self.api_key, query);
        self.get("/gifs/trending", &params).await
    }

    /// `GET {base}/gifs`
    pub async fn by_ids(&self, query: &ByIdsQuery) -> Result<String, GiphyError> {
        let params = by_ids_params(&self.api_key, query)?;
        self.get("/gifs", &params).await
    }

    async fn get(&self, path: &str, params: &[(&'static str, String)]) -> Result<String, GiphyError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "Forwarding GIF provider request");

        let response = self.http_client.get(&url).query(params).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GiphyError::Upstream(status));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::{json, Value};

    use super::*;

    async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        Json(json!({ "echo": params }))
    }

    async fn spawn_upstream() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new()
            .route("/v1/gifs/search", get(search))
            .route("/v1/gifs/trending", get(|| async { StatusCode::TOO_MANY_REQUESTS }));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/v1/")
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = GiphyClient::new("https://api.giphy.com/v1/", "key").unwrap();
        assert_eq!(client.base_url(), "https://api.giphy.com/v1");
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        assert!(matches!(
            GiphyClient::new("not a url", "key"),
            Err(GiphyError::InvalidBaseUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_search_forwards_params_and_body() {
        let client = GiphyClient::new(&spawn_upstream().await, "secret").unwrap();
        let query = SearchQuery {
            q: Some("cats".to_string()),
            ..SearchQuery::default()
        };

        let body = client.search(&query).await.unwrap();
        let json: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(json["echo"]["api_key"], "secret");
        assert_eq!(json["echo"]["q"], "cats");
        assert_eq!(json["echo"]["limit"], "25");
    }

    #[tokio::test]
    async fn test_upstream_error_status() {
        let client = GiphyClient::new(&spawn_upstream().await, "secret").unwrap();

        let result = client.trending(&TrendingQuery::default()).await;

        assert!(matches!(result, Err(GiphyError::Upstream(status)) if status == 429));
    }
}
