use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::types::{CatalogMovie, DiscoverQuery, DiscoverResponse};

/// Narrow interface to the movie catalog. Only three operations, no retry
/// and no paging beyond page one; any transport or HTTP failure collapses
/// into the single `Unavailable` kind.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Filtered discover search, one provider page of results.
    async fn discover(&self, query: &DiscoverQuery) -> Result<Vec<CatalogMovie>, CatalogError>;
    /// The provider's full genre vocabulary, proxied verbatim.
    async fn genre_list(&self) -> Result<serde_json::Value, CatalogError>;
    /// One detailed movie record, proxied verbatim.
    async fn movie_details(&self, movie_id: i64) -> Result<serde_json::Value, CatalogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("External API error: {0}")]
    Unavailable(String),
}

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, ?params, "TMDB request");

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Unavailable(format!(
                "TMDB returned status {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl Catalog for TmdbClient {
    async fn discover(&self, query: &DiscoverQuery) -> Result<Vec<CatalogMovie>, CatalogError> {
        let response: DiscoverResponse = self.get_json("/discover/movie", &query.params()).await?;
        Ok(response.results)
    }

    async fn genre_list(&self) -> Result<serde_json::Value, CatalogError> {
        self.get_json("/genre/movie/list", &[]).await
    }

    async fn movie_details(&self, movie_id: i64) -> Result<serde_json::Value, CatalogError> {
        self.get_json(&format!("/movie/{}", movie_id), &[]).await
    }
}
