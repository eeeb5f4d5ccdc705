use async_trait::async_trait;
use popcorn_models::{MovieDetail, MovieSummary};
use reqwest::Client;

use crate::api;
use crate::error::SourceError;
use crate::traits::MovieSource;
use crate::DEFAULT_BASE_URL;

/// HTTP client for the OMDb API.
#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            // OMDb lives at the bare host; strip a trailing slash so the
            // api layer can append one uniformly.
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MovieSource for OmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, SourceError> {
        api::search(&self.client, &self.base_url, &self.api_key, query).await
    }

    async fn detail(&self, imdb_id: &str) -> Result<MovieDetail, SourceError> {
        api::detail(&self.client, &self.base_url, &self.api_key, imdb_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = OmdbClient::with_base_url(
            "key".to_string(),
            "http://localhost:8080/".to_string(),
        );
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_default_base_url() {
        let client = OmdbClient::new("key".to_string());
        assert_eq!(client.base_url(), "https://www.omdbapi.com");
    }
}
