use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use netflop_config::{Config, ConfigLoad, ConfigLoader};
use netflop_model::{CatalogId, MediaKind, Theme};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

mod commands;

/// Browse the TMDB catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "netflop", version)]
#[command(about = "Search and browse movies and series from the terminal")]
struct Cli {
    /// Path to a netflop.toml file
    #[arg(long, env = "NETFLOP_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Path to a .env file seeding the environment
    #[arg(long, global = true, default_value = ".env")]
    env_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive search; each input line replaces the query
    Search {
        /// Page address whose `q` parameter seeds the query
        #[arg(long)]
        url: Option<Url>,
    },
    /// Popular series and trending movies
    Home,
    /// Title details with cast and seasons
    Details {
        /// `movie` or `tv`
        #[arg(long, default_value = "movie")]
        kind: MediaKind,

        #[arg(long, required_unless_present = "url")]
        id: Option<CatalogId>,

        /// Details page address carrying `type` and `id`
        #[arg(long, conflicts_with = "id")]
        url: Option<Url>,

        /// Season to list instead of the latest one
        #[arg(long)]
        season: Option<u32>,
    },
    /// Print the saved theme, or save a new one
    Theme {
        value: Option<Theme>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,netflop=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        Command::Search { url } => commands::search::run(&config, url).await,
        Command::Home => commands::home::run(&config).await,
        Command::Details {
            kind,
            id,
            url,
            season,
        } => {
            let target = match url {
                Some(url) => commands::details::Target::Url(url),
                None => commands::details::Target::Id { kind, id },
            };
            commands::details::run(&config, target, season).await
        }
        Command::Theme { value } => commands::theme::run(&config, value),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new().with_env_file(&cli.env_file);
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let ConfigLoad { config, warnings } =
        loader.load().context("failed to load configuration")?;

    if config.metadata.env_file_loaded {
        info!(path = %cli.env_file.display(), "loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    Ok(config)
}
