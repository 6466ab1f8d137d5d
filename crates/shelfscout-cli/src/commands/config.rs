use anyhow::Result;
use catalog_config::{Capabilities, Config, CredentialStore, PathManager};
use clap::Subcommand;
use dialoguer::Password;
use serde_json::json;

use crate::output::{Output, OutputFormat};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show,

    /// Store the movie provider API key (prompts with masked input)
    SetKey {
        /// Pass the key directly instead of prompting
        #[arg(long)]
        key: Option<String>,
    },

    /// Print the configuration and data file locations
    Path,
}

fn mask(value: &str) -> String {
    // The key is stored unvalidated, so slice by chars, not bytes
    if value.chars().count() <= 4 {
        "****".to_string()
    } else {
        let prefix: String = value.chars().take(4).collect();
        format!("{}****", prefix)
    }
}

pub fn run(out: &Output, cmd: ConfigCommands) -> Result<()> {
    let paths = PathManager::default();

    match cmd {
        ConfigCommands::Show => {
            let config = Config::load(&paths.config_file())?;
            let mut credentials = CredentialStore::new(paths.credentials_file());
            credentials.load()?;
            let caps = Capabilities::resolve(&config, &credentials);

            let masked_key = credentials.get_movie_api_key().map(|k| mask(k));
            match out.format() {
                OutputFormat::Human => {
                    out.println(format!(
                        "Movie search:  {} (endpoint {})",
                        if caps.movie_search {
                            "enabled"
                        } else {
                            "disabled - no API key"
                        },
                        config.movies.endpoint
                    ));
                    out.println(format!(
                        "Book search:   {} (endpoint {}, page size {})",
                        if caps.book_search { "enabled" } else { "disabled" },
                        config.books.endpoint,
                        config.books.page_size
                    ));
                    out.println(format!(
                        "Movie API key: {}",
                        masked_key.as_deref().unwrap_or("(not set)")
                    ));
                }
                OutputFormat::Json | OutputFormat::JsonPretty => {
                    out.json(&json!({
                        "movie_search": caps.movie_search,
                        "book_search": caps.book_search,
                        "movie_endpoint": config.movies.endpoint,
                        "book_endpoint": config.books.endpoint,
                        "book_page_size": config.books.page_size,
                        "movie_api_key": masked_key,
                    }));
                }
            }
        }
        ConfigCommands::SetKey { key } => {
            paths.ensure_directories()?;
            let key = match key {
                Some(key) => key,
                None => Password::new()
                    .with_prompt("Movie provider API key")
                    .interact()?,
            };
            if key.trim().is_empty() {
                out.error("API key cannot be empty");
                return Ok(());
            }
            let mut credentials = CredentialStore::new(paths.credentials_file());
            credentials.load()?;
            credentials.set_movie_api_key(key.trim().to_string());
            credentials.save()?;
            out.success("Movie API key saved; movie search is now enabled");
        }
        ConfigCommands::Path => {
            out.println(format!("Config:      {}", paths.config_file().display()));
            out.println(format!(
                "Credentials: {}",
                paths.credentials_file().display()
            ));
            out.println(format!("Favorites:   {}", paths.favorites_file().display()));
            out.println(format!("Logs:        {}", paths.log_dir().display()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_hides_all_but_prefix() {
        assert_eq!(mask("abcd1234"), "abcd****");
        assert_eq!(mask("abc"), "****");
    }

    #[test]
    fn test_mask_handles_multibyte_keys() {
        assert_eq!(mask("kéékey"), "kéék****");
        assert_eq!(mask("ééé"), "****");
        assert_eq!(mask("é234567"), "é234****");
    }
}
