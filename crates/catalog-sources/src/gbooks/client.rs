use async_trait::async_trait;
use catalog_models::{Details, Hit, MediaKind};
use reqwest::Client;

use crate::error::SourceError;
use crate::gbooks::api;
use crate::traits::CatalogSource;

/// Book catalog adapter. No credential required.
pub struct GbooksClient {
    client: Client,
    endpoint: String,
    page_size: u32,
}

impl GbooksClient {
    pub fn new(endpoint: String, page_size: u32) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            page_size,
        }
    }
}

#[async_trait]
impl CatalogSource for GbooksClient {
    fn kind(&self) -> MediaKind {
        MediaKind::Book
    }

    async fn search(&self, query: &str, page: u32) -> Result<Vec<Hit>, SourceError> {
        api::search(&self.client, &self.endpoint, query, page, self.page_size).await
    }

    async fn details(&self, id: &str) -> Result<Option<Details>, SourceError> {
        api::details(&self.client, &self.endpoint, id).await
    }
}
