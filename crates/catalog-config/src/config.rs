use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub movies: MovieProviderConfig,
    #[serde(default)]
    pub books: BookProviderConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MovieProviderConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_movie_endpoint")]
    pub endpoint: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookProviderConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_book_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_book_page_size")]
    pub page_size: u32,
}

fn default_enabled() -> bool {
    true
}

fn default_movie_endpoint() -> String {
    "https://www.omdbapi.com/".to_string()
}

fn default_book_endpoint() -> String {
    "https://www.googleapis.com/books/v1".to_string()
}

fn default_book_page_size() -> u32 {
    20
}

impl Default for MovieProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_movie_endpoint(),
        }
    }
}

impl Default for BookProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_book_endpoint(),
            page_size: default_book_page_size(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. A missing file is not an
    /// error; it yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let config = Config::load(&PathBuf::from("/nonexistent/config.toml")).unwrap();
        assert!(config.movies.enabled);
        assert!(config.books.enabled);
        assert_eq!(config.books.page_size, 20);
        assert_eq!(config.movies.endpoint, "https://www.omdbapi.com/");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[books]\npage_size = 10\n").unwrap();
        assert_eq!(config.books.page_size, 10);
        assert!(config.books.enabled);
        assert!(config.movies.enabled);
    }

    #[test]
    fn test_config_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.movies.enabled = false;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert!(!loaded.movies.enabled);
        assert!(loaded.books.enabled);
    }
}
