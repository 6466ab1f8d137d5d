use catalog_models::MediaKind;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

mod commands;
mod logging;
mod output;

use commands::{browse, config, details, fav, search};

#[derive(Parser)]
#[command(name = "shelfscout")]
#[command(about = "ShelfScout - search movies and books, keep the ones you like")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive browsing screen (the default)
    #[command(long_about = "Open the interactive screen: search the active catalog, flip between the Results and Favorites tabs, open details for a row, and toggle favorites. Movie search needs an API key (see 'config set-key'); book search works without one.")]
    Browse,

    /// One-shot catalog search
    #[command(long_about = "Search one catalog and print the results. Searches movies unless --books is given. Queries shorter than 2 characters (after trimming) are not submitted.")]
    Search {
        /// Query text
        query: String,

        /// Search the book catalog instead of movies
        #[arg(long, action = ArgAction::SetTrue)]
        books: bool,

        /// Result page to request (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Fetch the full record for one catalog id
    Details {
        /// Which catalog the id belongs to
        #[arg(value_enum)]
        kind: KindArg,

        /// Provider-assigned id (e.g. tt0816692)
        id: String,
    },

    /// Manage the locally persisted favorites list
    Fav {
        #[command(subcommand)]
        cmd: fav::FavCommands,
    },

    /// Show or change configuration and the movie API key
    Config {
        #[command(subcommand)]
        cmd: config::ConfigCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Movie,
    Book,
}

impl From<KindArg> for MediaKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Movie => MediaKind::Movie,
            KindArg::Book => MediaKind::Book,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Browse);

    // The browse screen logs to a file so log lines don't tear the display
    match &command {
        Commands::Browse => {
            let paths = catalog_config::PathManager::default();
            logging::init_logging_with_file(cli.verbose, cli.quiet, Some(paths.log_file()))
                .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
        }
        _ => {
            logging::init_logging(cli.verbose, cli.quiet)
                .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
        }
    }

    let out = output::Output::new(cli.output, cli.quiet);

    let result = match command {
        Commands::Browse => browse::run().await,
        Commands::Search { query, books, page } => {
            let kind = if books {
                MediaKind::Book
            } else {
                MediaKind::Movie
            };
            search::run(&out, kind, &query, page).await
        }
        Commands::Details { kind, id } => details::run(&out, kind.into(), &id).await,
        Commands::Fav { cmd } => fav::run(&out, cmd),
        Commands::Config { cmd } => config::run(&out, cmd),
    };

    if let Err(e) = result {
        out.error(format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}
