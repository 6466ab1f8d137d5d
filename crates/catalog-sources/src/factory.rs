use catalog_config::{Capabilities, Config, CredentialStore};
use catalog_models::MediaKind;
use tracing::debug;

use crate::gbooks::GbooksClient;
use crate::omdb::OmdbClient;
use crate::traits::CatalogSource;

/// The catalog sources enabled for this run, plus the capabilities the
/// presentation layer gates on.
pub struct SourceSet {
    movies: Option<Box<dyn CatalogSource>>,
    books: Option<Box<dyn CatalogSource>>,
    capabilities: Capabilities,
}

impl SourceSet {
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn for_kind(&self, kind: MediaKind) -> Option<&dyn CatalogSource> {
        match kind {
            MediaKind::Movie => self.movies.as_deref(),
            MediaKind::Book => self.books.as_deref(),
        }
    }
}

/// Build the enabled sources from configuration and stored credentials.
///
/// The movie client is constructed even without an API key (it refuses to
/// search with a `Config` error); the capability flag is what keeps the
/// UI from submitting in the first place.
pub fn build_sources(config: &Config, credentials: &CredentialStore) -> SourceSet {
    let capabilities = Capabilities::resolve(config, credentials);
    debug!(
        "Resolved capabilities: movie_search={}, book_search={}",
        capabilities.movie_search, capabilities.book_search
    );

    let movies: Option<Box<dyn CatalogSource>> = config.movies.enabled.then(|| {
        Box::new(OmdbClient::new(
            config.movies.endpoint.clone(),
            credentials.get_movie_api_key().cloned(),
        )) as Box<dyn CatalogSource>
    });

    let books: Option<Box<dyn CatalogSource>> = config.books.enabled.then(|| {
        Box::new(GbooksClient::new(
            config.books.endpoint.clone(),
            config.books.page_size,
        )) as Box<dyn CatalogSource>
    });

    SourceSet {
        movies,
        books,
        capabilities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_sources_built_for_both_kinds_by_default() {
        let config = Config::default();
        let credentials = CredentialStore::new(PathBuf::from("/tmp/unused"));

        let set = build_sources(&config, &credentials);
        assert!(set.for_kind(MediaKind::Movie).is_some());
        assert!(set.for_kind(MediaKind::Book).is_some());
        // No key: client exists but the capability is off
        assert!(!set.capabilities().movie_search);
        assert!(set.capabilities().book_search);
    }

    #[test]
    fn test_disabled_provider_has_no_source() {
        let mut config = Config::default();
        config.books.enabled = false;
        let credentials = CredentialStore::new(PathBuf::from("/tmp/unused"));

        let set = build_sources(&config, &credentials);
        assert!(set.for_kind(MediaKind::Book).is_none());
        assert!(!set.capabilities().book_search);
    }
}
