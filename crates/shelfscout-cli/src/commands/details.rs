use anyhow::Result;
use catalog_config::{Config, CredentialStore, PathManager};
use catalog_models::MediaKind;
use catalog_sources::build_sources;
use tracing::debug;

use crate::commands::render;
use crate::output::{Output, OutputFormat};

/// One-shot details fetch for a provider id.
pub async fn run(out: &Output, kind: MediaKind, id: &str) -> Result<()> {
    let paths = PathManager::default();
    let config = Config::load(&paths.config_file())?;
    let mut credentials = CredentialStore::new(paths.credentials_file());
    credentials.load()?;

    let sources = build_sources(&config, &credentials);
    let Some(source) = sources.for_kind(kind) else {
        out.warn(format!("{} lookups are disabled in config.toml", kind));
        return Ok(());
    };

    let pb = render::spinner(format!("Fetching {} details for {}...", kind, id));
    let result = source.details(id).await;
    pb.finish_and_clear();

    // A failed fetch renders as missing details, not as an error
    let details = match result {
        Ok(details) => details,
        Err(e) => {
            debug!("Details fetch for {} failed: {}", id, e);
            None
        }
    };

    match details {
        None => out.info("No details available."),
        Some(details) => match out.format() {
            OutputFormat::Human => {
                for line in render::details_lines(&details) {
                    out.println(line);
                }
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                out.json(&serde_json::to_value(&details)?);
            }
        },
    }
    Ok(())
}
