use anyhow::{anyhow, Result};
use clap::{Args, ValueEnum};
use tracing::debug;

use crate::catalog::{CatalogProvider, MovieCategory};
use crate::config::Config;
use crate::utils::format;

/// Browse a catalog listing
#[derive(Debug, Args)]
pub struct BrowseCommand {
    /// Which listing to browse
    #[arg(value_enum, default_value = "popular")]
    pub category: Category,

    /// Page to fetch
    #[arg(short, long, default_value = "1")]
    pub page: u32,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Category {
    Popular,
    NowPlaying,
    Upcoming,
}

impl Category {
    fn as_catalog(self) -> MovieCategory {
        match self {
            Category::Popular => MovieCategory::Popular,
            Category::NowPlaying => MovieCategory::NowPlaying,
            Category::Upcoming => MovieCategory::Upcoming,
        }
    }
}

impl BrowseCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        if self.page == 0 {
            return Err(anyhow!("Page numbers start at 1"));
        }

        let client = super::catalog_client(config)?;
        let store = super::favorites_store(config);
        let category = self.category.as_catalog();
        debug!("Browsing {} page {}", category.path(), self.page);

        let page = client.list(category, self.page).await?;
        if page.total_pages > 0 && self.page > page.total_pages {
            return Err(anyhow!(
                "Page {} is out of range (1-{})",
                self.page,
                page.total_pages
            ));
        }

        println!("{}", category.label());
        println!();
        if page.results.is_empty() {
            println!("No movies found.");
        } else {
            println!("{}", format::movie_table(&page.results, &store.get_all()));
        }

        let footer = format::pagination_footer(self.page, page.total_pages);
        if !footer.is_empty() {
            println!();
            println!("{}", footer);
        }

        Ok(())
    }
}
