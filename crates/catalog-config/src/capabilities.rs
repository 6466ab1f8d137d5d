use catalog_models::MediaKind;

use crate::config::Config;
use crate::credentials::CredentialStore;

/// Search capabilities resolved once at startup. The render path checks
/// these flags instead of probing credentials inline.
///
/// A missing movie API key disables movie search only; book search needs
/// no credential and stays available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub movie_search: bool,
    pub book_search: bool,
}

impl Capabilities {
    pub fn resolve(config: &Config, credentials: &CredentialStore) -> Self {
        Self {
            movie_search: config.movies.enabled && credentials.get_movie_api_key().is_some(),
            book_search: config.books.enabled,
        }
    }

    pub fn allows(&self, kind: MediaKind) -> bool {
        match kind {
            MediaKind::Movie => self.movie_search,
            MediaKind::Book => self.book_search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_movie_key_disables_only_movie_search() {
        let config = Config::default();
        let credentials = CredentialStore::new(PathBuf::from("/tmp/unused"));

        let caps = Capabilities::resolve(&config, &credentials);
        assert!(!caps.movie_search);
        assert!(caps.book_search);
        assert!(!caps.allows(MediaKind::Movie));
        assert!(caps.allows(MediaKind::Book));
    }

    #[test]
    fn test_configured_key_enables_movie_search() {
        let config = Config::default();
        let mut credentials = CredentialStore::new(PathBuf::from("/tmp/unused"));
        credentials.set_movie_api_key("abc123".to_string());

        let caps = Capabilities::resolve(&config, &credentials);
        assert!(caps.movie_search);
    }

    #[test]
    fn test_disabled_provider_overrides_credential() {
        let mut config = Config::default();
        config.movies.enabled = false;
        let mut credentials = CredentialStore::new(PathBuf::from("/tmp/unused"));
        credentials.set_movie_api_key("abc123".to_string());

        let caps = Capabilities::resolve(&config, &credentials);
        assert!(!caps.movie_search);
    }
}
