use anyhow::Result;
use catalog_config::{Capabilities, Config, CredentialStore, PathManager};
use catalog_core::{DetailsPane, FavoritesStore, FileBackend, SearchOutcome, SearchSession};
use catalog_models::{Hit, MediaKind};
use catalog_sources::{build_sources, SourceSet};
use dialoguer::Input;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::commands::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Results,
    Favorites,
}

/// The interactive single-screen session: search box, Results/Favorites
/// tabs, media-kind toggle, card grid, details view.
pub async fn run() -> Result<()> {
    let paths = PathManager::default();
    paths.ensure_directories()?;
    let config = Config::load(&paths.config_file())?;
    let mut credentials = CredentialStore::new(paths.credentials_file());
    credentials.load()?;

    let sources = build_sources(&config, &credentials);
    let caps = sources.capabilities();
    let mut favorites = FavoritesStore::load(FileBackend::new(paths.favorites_file()));
    let mut session = SearchSession::new(MediaKind::Movie);
    let mut pane = DetailsPane::new();
    let mut tab = Tab::Results;

    loop {
        render_screen(&session, &favorites, tab, caps);

        let placeholder = match session.kind() {
            MediaKind::Movie => "Search movies",
            MediaKind::Book => "Search books",
        };
        let line: String = Input::new()
            .with_prompt(placeholder)
            .allow_empty(true)
            .interact_text()?;
        let input = line.trim().to_string();

        match input.as_str() {
            ":q" | ":quit" | ":exit" => break,
            ":movies" => session.set_kind(MediaKind::Movie),
            ":books" => session.set_kind(MediaKind::Book),
            ":results" => tab = Tab::Results,
            ":favorites" => tab = Tab::Favorites,
            "" => {}
            _ => {
                if let Some(rest) = input.strip_prefix("f ") {
                    let visible = visible_hits(&session, &favorites, tab);
                    toggle_favorite(rest, &visible, &mut favorites);
                } else if let Ok(row) = input.parse::<usize>() {
                    let visible = visible_hits(&session, &favorites, tab);
                    open_details(row, &visible, &sources, &mut pane).await?;
                } else {
                    run_search(&input, &mut session, &sources, caps).await;
                    tab = Tab::Results;
                }
            }
        }
    }

    Ok(())
}

fn visible_hits(
    session: &SearchSession,
    favorites: &FavoritesStore<FileBackend>,
    tab: Tab,
) -> Vec<Hit> {
    match tab {
        Tab::Results => session.hits().to_vec(),
        Tab::Favorites => favorites.entries().iter().map(|e| e.hit.clone()).collect(),
    }
}

fn render_screen(
    session: &SearchSession,
    favorites: &FavoritesStore<FileBackend>,
    tab: Tab,
    caps: Capabilities,
) {
    println!();
    let results_tab = if tab == Tab::Results {
        format!("[ {} ]", "Results".bold())
    } else {
        "  Results  ".to_string()
    };
    let favorites_tab = if tab == Tab::Favorites {
        format!("[ {} ]", "Favorites".bold())
    } else {
        "  Favorites  ".to_string()
    };
    let kind_toggle = match session.kind() {
        MediaKind::Movie => format!("{} / books", "movies".bold()),
        MediaKind::Book => format!("movies / {}", "books".bold()),
    };
    println!("{}{}    searching: {}", results_tab, favorites_tab, kind_toggle);

    // Persistent warning, independent of any transient search error
    if !caps.movie_search {
        println!(
            "{} Movie search is disabled: no API key configured (run 'shelfscout config set-key')",
            "⚠".yellow()
        );
    }

    if let Some(error) = session.error() {
        println!("{} {}", "✗".red(), error);
    }

    let hits = visible_hits(session, favorites, tab);
    if hits.is_empty() {
        match tab {
            Tab::Results => {
                if session.can_search() && session.error().is_none() {
                    println!(
                        "No {} results for \"{}\"",
                        session.kind(),
                        session.query().trim()
                    );
                } else {
                    println!("Type at least 2 characters and press Enter to search.");
                }
            }
            Tab::Favorites => println!("No favorites yet. Toggle one with 'f <row>'."),
        }
    } else {
        let table = render::hits_table(&hits, |h| favorites.is_favorite(h.kind(), h.id()));
        println!("{}", table);
    }

    println!(
        "{}",
        ":movies/:books kind · :results/:favorites tabs · <row> details · f <row> favorite · :q quit"
            .dimmed()
    );
}

async fn run_search(
    query: &str,
    session: &mut SearchSession,
    sources: &SourceSet,
    caps: Capabilities,
) {
    session.set_query(query);

    // Capability gating happens before the session even starts: a
    // disabled catalog keeps the search box inert, warning on screen.
    if !caps.allows(session.kind()) {
        return;
    }
    let Some(source) = sources.for_kind(session.kind()) else {
        return;
    };
    let Some(ticket) = session.begin_search() else {
        // Below the minimum query length: inert, no error
        return;
    };

    let pb = render::spinner(format!(
        "Searching {}s for \"{}\"...",
        session.kind(),
        query.trim()
    ));
    let outcome = match source.search(query.trim(), 1).await {
        Ok(hits) => SearchOutcome::Results(hits),
        Err(e) => SearchOutcome::Failed(e.to_string()),
    };
    pb.finish_and_clear();
    session.finish_search(ticket, outcome);
}

async fn open_details(
    row: usize,
    visible: &[Hit],
    sources: &SourceSet,
    pane: &mut DetailsPane,
) -> Result<()> {
    let Some(hit) = row.checked_sub(1).and_then(|i| visible.get(i)) else {
        println!("No card at row {}", row);
        return Ok(());
    };

    let ticket = pane.open(hit.kind(), hit.id());
    let pb = render::spinner(format!("Loading details for \"{}\"...", hit.title()));
    let details = match sources.for_kind(hit.kind()) {
        Some(source) => match source.details(hit.id()).await {
            Ok(details) => details,
            Err(e) => {
                // Failed fetches render the empty detail state
                debug!("Details fetch for {} failed: {}", hit.id(), e);
                None
            }
        },
        None => None,
    };
    pb.finish_and_clear();
    pane.resolve(ticket, details);

    println!();
    match pane.details() {
        None => println!("No details available."),
        Some(details) => {
            for line in render::details_lines(details) {
                println!("{}", line);
            }
        }
    }

    let _: String = Input::new()
        .with_prompt("Press Enter to close")
        .allow_empty(true)
        .interact_text()?;
    pane.close();
    Ok(())
}

fn toggle_favorite(arg: &str, visible: &[Hit], favorites: &mut FavoritesStore<FileBackend>) {
    let Ok(row) = arg.trim().parse::<usize>() else {
        println!("Usage: f <row>");
        return;
    };
    let Some(hit) = row.checked_sub(1).and_then(|i| visible.get(i)) else {
        println!("No card at row {}", row);
        return;
    };
    match favorites.toggle(hit.clone()) {
        Ok(catalog_core::Toggled::Added) => {
            println!("{} Added \"{}\" to favorites", "★".yellow(), hit.title());
        }
        Ok(catalog_core::Toggled::Removed) => {
            println!("Removed \"{}\" from favorites", hit.title());
        }
        Err(e) => println!("Could not save favorites: {}", e),
    }
}
