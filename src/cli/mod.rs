//! Command-line interface

mod browse;
mod favorites;
mod movie;
mod person;
mod root;
mod search;

pub use root::Cli;

use anyhow::Result;
use std::sync::Arc;

use crate::catalog::TmdbClient;
use crate::config::Config;
use crate::favorites::{FavoritesStore, FileStorage};

/// Build the catalog client, validating the configuration first.
fn catalog_client(config: &Config) -> Result<TmdbClient> {
    config.validate()?;
    Ok(TmdbClient::new(config)?)
}

/// Favorites store backed by the configured data directory.
fn favorites_store(config: &Config) -> FavoritesStore {
    FavoritesStore::new(Arc::new(FileStorage::new(&config.data_dir)))
}
