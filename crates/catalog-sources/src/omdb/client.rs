use async_trait::async_trait;
use catalog_models::{Details, Hit, MediaKind};
use reqwest::Client;

use crate::error::SourceError;
use crate::omdb::api;
use crate::traits::CatalogSource;

/// Movie catalog adapter. Holds the credential as an `Option` so the
/// client can exist unconfigured; calls decide how absence surfaces.
pub struct OmdbClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl OmdbClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

}

#[async_trait]
impl CatalogSource for OmdbClient {
    fn kind(&self) -> MediaKind {
        MediaKind::Movie
    }

    async fn search(&self, query: &str, page: u32) -> Result<Vec<Hit>, SourceError> {
        let api_key = self.api_key.as_deref().ok_or(SourceError::Config)?;
        api::search(&self.client, &self.endpoint, api_key, query, page).await
    }

    async fn details(&self, id: &str) -> Result<Option<Details>, SourceError> {
        // No credential means no details, not an error; the card simply
        // renders its empty state.
        let Some(api_key) = self.api_key.as_deref() else {
            return Ok(None);
        };
        api::details(&self.client, &self.endpoint, api_key, id).await
    }
}
