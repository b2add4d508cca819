//! HTTP client for the static catalogue file.

use async_trait::async_trait;
use tracing::info;

use catchdex_domain::{Catalogue, Pokemon};

use crate::infrastructure::ports::{CatalogueSource, FetchError};

/// Fetches the published catalogue JSON. Used once per fresh session;
/// failures are fatal to the session and retried only by the user.
pub struct HttpCatalogueSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogueSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CatalogueSource for HttpCatalogueSource {
    async fn fetch(&self) -> Result<Catalogue, FetchError> {
        info!(url = %self.url, "fetching catalogue");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::request)?
            .error_for_status()
            .map_err(FetchError::request)?;
        let entries: Vec<Pokemon> = response.json().await.map_err(FetchError::invalid)?;
        let catalogue = Catalogue::new(entries).map_err(FetchError::invalid)?;
        info!(entries = catalogue.len(), "catalogue fetched");
        Ok(catalogue)
    }
}
