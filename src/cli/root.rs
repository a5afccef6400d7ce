use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Config;
use crate::version;

use super::browse::BrowseCommand;
use super::favorites::FavoritesCommand;
use super::movie::MovieCommand;
use super::person::PersonCommand;
use super::search::SearchCommand;

/// cineterm - movie discovery for your terminal
#[derive(Parser)]
#[command(
    name = "cineterm",
    version,
    about = "Movie discovery for your terminal",
    long_about = r#"cineterm browses a TMDB-compatible movie catalog from the command line:
popular, now-playing and upcoming listings, search, per-movie details, and a
locally persisted favorites list.

Examples:
  cineterm browse popular --page 2       # Second page of popular movies
  cineterm search "cidade de deus"       # Search by title
  cineterm movie 598 --cast --trailers   # Details for one movie
  cineterm favorites toggle 598          # Mark or unmark a favorite"#
)]
pub struct Cli {
    /// Content language override (e.g. "en-US")
    #[arg(short = 'l', long = "language", global = true)]
    pub language: Option<String>,

    /// Country for watch-provider lookups (e.g. "BR")
    #[arg(short = 'r', long = "region", global = true)]
    pub region: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse a catalog listing (popular, now playing, upcoming)
    Browse(BrowseCommand),

    /// Search movies by title
    Search(SearchCommand),

    /// Show details for one movie
    Movie(MovieCommand),

    /// Show a person and their filmography
    Person(PersonCommand),

    /// Manage the locally persisted favorites list
    Favorites(FavoritesCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        debug!("Running {}", version::full_version());

        // Initialize configuration, then apply command-line overrides
        let mut config = Config::init().await?;
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if let Some(region) = &self.region {
            config.region = Some(region.clone());
        }
        debug!("Configuration initialized");

        match self.command {
            Commands::Browse(cmd) => cmd.execute(&config).await,
            Commands::Search(cmd) => cmd.execute(&config).await,
            Commands::Movie(cmd) => cmd.execute(&config).await,
            Commands::Person(cmd) => cmd.execute(&config).await,
            Commands::Favorites(cmd) => cmd.execute(&config).await,
        }
    }
}
