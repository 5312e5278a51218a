//! Catalog API client.
//!
//! Thin wrapper around a configured `reqwest::Client` for the catalog
//! collaborator. The full category and subcategory lists are fetched in
//! one joint operation; either request failing fails the whole load, so
//! the UI never sees a half-populated taxonomy.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{StoreError, StoreResult};
use crate::taxonomy::Taxonomy;
use crate::types::{Category, Subcategory};

/// Client-wide request timeout. Defensive; the collaborator contract
/// specifies none.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the catalog collaborator.
///
/// Cheap to clone; the underlying `reqwest::Client` is an `Arc` over a
/// connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: Client,
}

impl CatalogClient {
    /// Construct a client against a validated base URL.
    ///
    /// The URL must parse and use an http(s) scheme. A trailing slash is
    /// stripped so request paths can always start with `/`.
    pub fn new(base_url: &str) -> StoreResult<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| StoreError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(StoreError::InvalidBaseUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The validated base URL this client was built with
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full category list
    pub async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        self.get_json("/categories").await
    }

    /// Fetch the full subcategory list
    pub async fn list_subcategories(&self) -> StoreResult<Vec<Subcategory>> {
        self.get_json("/subcategories").await
    }

    /// Fetch categories and subcategories together.
    ///
    /// Both requests are issued concurrently and awaited jointly; if
    /// either fails the whole load fails and no partial result is
    /// returned.
    pub async fn load_taxonomy(&self) -> StoreResult<Taxonomy> {
        let (categories, subcategories) =
            tokio::try_join!(self.list_categories(), self.list_subcategories())?;
        Ok(Taxonomy::new(categories, subcategories))
    }

    /// GET an API-relative path and decode the JSON body.
    ///
    /// Non-2xx responses are turned into errors before decoding.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> StoreResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "catalog request");

        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_bases() {
        assert!(CatalogClient::new("http://localhost:8080/api").is_ok());
        assert!(CatalogClient::new("https://api.example.com").is_ok());
    }

    #[test]
    fn rejects_non_http_schemes() {
        let err = CatalogClient::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, StoreError::InvalidBaseUrl(_)));
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(CatalogClient::new("not a url").is_err());
    }

    #[test]
    fn strips_trailing_slash() {
        let client = CatalogClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }

    #[tokio::test]
    async fn joint_load_fails_as_a_whole() {
        // Port 9 (discard) refuses the connection, so either request in
        // the joint fetch fails, and the load returns no partial result.
        let client = CatalogClient::new("http://127.0.0.1:9").unwrap();
        assert!(client.load_taxonomy().await.is_err());
    }
}
