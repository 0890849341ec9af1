//! Query parameters accepted by the proxy routes, and the upstream
//! parameters built from them.

use serde::Deserialize;

use super::GiphyError;

/// `GET /giphy/query` parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub rating: Option<String>,
    pub lang: Option<String>,
}

/// `GET /giphy/trending` parameters.
#[derive(Debug, Default, Deserialize)]
pub struct TrendingQuery {
    pub limit: Option<String>,
    pub rating: Option<String>,
}

/// `GET /giphy/gifs` parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ByIdsQuery {
    pub ids: Option<String>,
}

type Params = Vec<(&'static str, String)>;

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn push_or_default(params: &mut Params, name: &'static str, value: &Option<String>, default: &str) {
    params.push((name, present(value).unwrap_or(default).to_string()));
}

/// Upstream parameters for a search. Fails when the term is missing.
pub fn search_params(api_key: &str, query: &SearchQuery) -> Result<Params, GiphyError> {
    let term = present(&query.q).ok_or(GiphyError::MissingParameter("q"))?;

    let mut params = vec![("api_key", api_key.to_string()), ("q", term.to_string())];
    push_or_default(&mut params, "offset", &query.offset, "0");
    push_or_default(&mut params, "limit", &query.limit, "25");
    push_or_default(&mut params, "rating", &query.rating, "G");
    push_or_default(&mut params, "lang", &query.lang, "en");
    Ok(params)
}

/// Upstream parameters for trending. `limit` is only sent when given.
pub fn trending_params(api_key: &str, query: &TrendingQuery) -> Params {
    let mut params = vec![("api_key", api_key.to_string())];
    if let Some(limit) = present(&query.limit) {
        params.push(("limit", limit.to_string()));
    }
    push_or_default(&mut params, "rating", &query.rating, "G");
    params
}

/// Upstream parameters for a lookup by ids. Fails when ids are missing.
pub fn by_ids_params(api_key: &str, query: &ByIdsQuery) -> Result<Params, GiphyError> {
    let ids = present(&query.ids).ok_or(GiphyError::MissingParameter("ids"))?;
    Ok(vec![("api_key", api_key.to_string()), ("ids", ids.to_string())])
}
