use anyhow::Result;
use catalog_config::PathManager;
use catalog_core::{FavoritesStore, FileBackend, Toggled};
use catalog_models::Hit;
use clap::{ArgAction, Subcommand};
use dialoguer::Confirm;

use crate::commands::render;
use crate::output::{Output, OutputFormat};
use crate::KindArg;

#[derive(Subcommand)]
pub enum FavCommands {
    /// List favorites, most recently added first
    List,

    /// Add the item if absent, remove it if present
    Toggle {
        /// Which catalog the id belongs to
        #[arg(value_enum)]
        kind: KindArg,

        /// Provider-assigned id
        id: String,

        /// Display title to store with the entry
        title: String,

        /// 4-digit year
        #[arg(long)]
        year: Option<String>,

        /// Poster / cover URL
        #[arg(long)]
        poster: Option<String>,

        /// Comma-joined author line (books only)
        #[arg(long)]
        authors: Option<String>,
    },

    /// Remove every favorite
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, action = ArgAction::SetTrue)]
        yes: bool,
    },
}

pub fn run(out: &Output, cmd: FavCommands) -> Result<()> {
    let paths = PathManager::default();
    let mut store = FavoritesStore::load(FileBackend::new(paths.favorites_file()));

    match cmd {
        FavCommands::List => {
            if store.is_empty() {
                out.info("No favorites yet.");
                return Ok(());
            }
            match out.format() {
                OutputFormat::Human => {
                    let hits: Vec<Hit> =
                        store.entries().iter().map(|e| e.hit.clone()).collect();
                    let table = render::hits_table(&hits, |_| true);
                    out.println(table.to_string());
                }
                OutputFormat::Json | OutputFormat::JsonPretty => {
                    out.json(&serde_json::to_value(store.entries())?);
                }
            }
        }
        FavCommands::Toggle {
            kind,
            id,
            title,
            year,
            poster,
            authors,
        } => {
            let hit = match kind {
                KindArg::Movie => Hit::Movie {
                    id,
                    title,
                    year,
                    poster,
                },
                KindArg::Book => Hit::Book {
                    id,
                    title,
                    year,
                    poster,
                    authors,
                },
            };
            let label = format!("{} ({})", hit.title(), hit.kind());
            match store.toggle(hit)? {
                Toggled::Added => out.success(format!("Added {} to favorites", label)),
                Toggled::Removed => out.success(format!("Removed {} from favorites", label)),
            }
        }
        FavCommands::Clear { yes } => {
            if store.is_empty() {
                out.info("No favorites to clear.");
                return Ok(());
            }
            let confirmed = yes
                || Confirm::new()
                    .with_prompt(format!("Remove all {} favorite(s)?", store.len()))
                    .default(false)
                    .interact()?;
            if !confirmed {
                out.info("Aborted.");
                return Ok(());
            }
            let hits: Vec<Hit> = store.entries().iter().map(|e| e.hit.clone()).collect();
            for hit in hits {
                store.toggle(hit)?;
            }
            out.success("Favorites cleared");
        }
    }
    Ok(())
}
