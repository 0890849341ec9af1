//! Passthrough client for the third-party GIF search API.

mod client;
mod error;
mod params;

pub use client::GiphyClient;
pub use error::GiphyError;
pub use params::{ByIdsQuery, SearchQuery, TrendingQuery};
