use anyhow::Result;
use clap::{Args, Subcommand};
use tracing::{debug, warn};

use crate::catalog::CatalogProvider;
use crate::config::Config;
use crate::utils::format;

/// Manage the locally persisted favorites list
#[derive(Debug, Args)]
pub struct FavoritesCommand {
    #[command(subcommand)]
    pub command: FavoritesSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesSubcommand {
    /// List favorites in the order they were added
    List {
        /// Fetch each movie's record from the catalog
        #[arg(long)]
        resolve: bool,
    },

    /// Add a movie to the favorites, or remove it if already present
    Toggle {
        /// Movie id
        id: String,
    },
}

impl FavoritesCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        match &self.command {
            FavoritesSubcommand::List { resolve } => self.list(config, *resolve).await,
            FavoritesSubcommand::Toggle { id } => self.toggle(config, id),
        }
    }

    async fn list(&self, config: &Config, resolve: bool) -> Result<()> {
        let store = super::favorites_store(config);
        let favorites = store.get_all();

        if favorites.is_empty() {
            println!("No favorites yet.");
            return Ok(());
        }

        if !resolve {
            for id in &favorites {
                println!("{}", id);
            }
            return Ok(());
        }

        // Resolving hits the catalog once per favorite.
        let client = super::catalog_client(config)?;
        for id in &favorites {
            let movie_id: u64 = match id.parse() {
                Ok(movie_id) => movie_id,
                Err(_) => {
                    warn!("Skipping favorite with non-numeric id: {}", id);
                    continue;
                }
            };
            match client.movie_details(movie_id).await {
                Ok(details) => println!("{}", format::movie_row(&details.movie, true)),
                Err(e) => {
                    warn!("Failed to resolve favorite {}: {}", id, e);
                    println!("♥ {:>8}  (unavailable)", id);
                }
            }
        }

        Ok(())
    }

    fn toggle(&self, config: &Config, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(anyhow::anyhow!("No movie id provided."));
        }

        let store = super::favorites_store(config);
        debug!("Toggling favorite {}", id);

        let result = store.toggle(id);
        if result.favorite {
            println!("Added {} to favorites.", id);
        } else {
            println!("Removed {} from favorites.", id);
        }
        if !result.persisted {
            eprintln!("Warning: favorites could not be saved; the change will not survive a restart.");
        }

        Ok(())
    }
}
