//! Catalog Endpoints
//!
//! List endpoints keyed by `QueryKey`.

use std::fmt;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{get_json, ApiError};
use crate::config::CatalogConfig;
use crate::models::MovieList;

/// Identifies one list fetch; also the cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    NowPlaying,
    PopularTv,
    Search(String),
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::NowPlaying => write!(f, "movies/now_playing"),
            QueryKey::PopularTv => write!(f, "tv/popular"),
            QueryKey::Search(keyword) => write!(f, "search/{}", keyword),
        }
    }
}

/// Full GET URL for `key`, including the API key query parameter
pub fn endpoint_url(config: &CatalogConfig, key: &QueryKey) -> Result<String, ApiError> {
    let api_key = config.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;

    let path = match key {
        QueryKey::NowPlaying => "movie/now_playing",
        QueryKey::PopularTv => "tv/popular",
        QueryKey::Search(_) => "search/movie",
    };
    let mut url = format!(
        "{}/{}?api_key={}",
        config.api_base,
        path,
        utf8_percent_encode(api_key, NON_ALPHANUMERIC)
    );
    if let Some(language) = &config.language {
        url.push_str("&language=");
        url.push_str(&utf8_percent_encode(language, NON_ALPHANUMERIC).to_string());
    }
    if let QueryKey::Search(keyword) = key {
        url.push_str("&query=");
        url.push_str(&utf8_percent_encode(keyword, NON_ALPHANUMERIC).to_string());
    }
    Ok(url)
}

/// Fetch the list for `key`
pub async fn fetch_list(config: &CatalogConfig, key: &QueryKey) -> Result<MovieList, ApiError> {
    let url = endpoint_url(config, key)?;
    log::debug!("GET {}", key);
    get_json(&url).await
}
