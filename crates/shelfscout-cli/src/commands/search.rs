use anyhow::Result;
use catalog_config::{Config, CredentialStore, PathManager};
use catalog_core::{FavoritesStore, FileBackend, MIN_QUERY_LEN};
use catalog_models::MediaKind;
use catalog_sources::build_sources;

use crate::commands::render;
use crate::output::{Output, OutputFormat};

/// One-shot search against a single catalog.
pub async fn run(out: &Output, kind: MediaKind, query: &str, page: u32) -> Result<()> {
    if query.trim().chars().count() < MIN_QUERY_LEN {
        out.warn(format!(
            "Queries need at least {} characters; nothing was searched",
            MIN_QUERY_LEN
        ));
        return Ok(());
    }

    let paths = PathManager::default();
    let config = Config::load(&paths.config_file())?;
    let mut credentials = CredentialStore::new(paths.credentials_file());
    credentials.load()?;

    let sources = build_sources(&config, &credentials);
    if kind == MediaKind::Movie && !sources.capabilities().movie_search {
        out.warn(
            "Movie search is disabled: no API key configured. Run 'shelfscout config set-key'. \
             Book search ('--books') works without a key.",
        );
        return Ok(());
    }
    let Some(source) = sources.for_kind(kind) else {
        out.warn(format!("{} search is disabled in config.toml", kind));
        return Ok(());
    };

    let pb = render::spinner(format!("Searching {}s for \"{}\"...", kind, query.trim()));
    let result = source.search(query.trim(), page).await;
    pb.finish_and_clear();

    let hits = result?;
    if hits.is_empty() {
        out.info(format!("No {} results for \"{}\"", kind, query.trim()));
        return Ok(());
    }

    match out.format() {
        OutputFormat::Human => {
            let favorites = FavoritesStore::load(FileBackend::new(paths.favorites_file()));
            let table =
                render::hits_table(&hits, |h| favorites.is_favorite(h.kind(), h.id()));
            out.println(table.to_string());
            out.info(format!("{} result(s)", hits.len()));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            out.json(&serde_json::to_value(&hits)?);
        }
    }
    Ok(())
}
