use async_trait::async_trait;
use catalog_models::{Details, Hit, MediaKind};

use crate::error::SourceError;

/// One external catalog provider, normalized to the shared `Hit` and
/// `Details` shapes.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn kind(&self) -> MediaKind;

    /// Run a single-page search. A successful response with no matches
    /// is an empty vec, never an error.
    async fn search(&self, query: &str, page: u32) -> Result<Vec<Hit>, SourceError>;

    /// Fetch the expanded record for one provider id. `Ok(None)` when
    /// the provider reports failure or the record does not exist.
    async fn details(&self, id: &str) -> Result<Option<Details>, SourceError>;
}
