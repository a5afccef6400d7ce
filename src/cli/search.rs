use anyhow::{anyhow, Result};
use clap::Args;
use tracing::debug;

use crate::catalog::CatalogProvider;
use crate::config::Config;
use crate::utils::format;

/// Search movies by title
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// The search query
    pub query: Vec<String>,

    /// Page to fetch
    #[arg(short, long, default_value = "1")]
    pub page: u32,
}

impl SearchCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        let query = self.query.join(" ");
        if query.trim().is_empty() {
            return Err(anyhow!("No search query provided."));
        }
        if self.page == 0 {
            return Err(anyhow!("Page numbers start at 1"));
        }

        let client = super::catalog_client(config)?;
        let store = super::favorites_store(config);
        debug!("Searching for \"{}\" page {}", query, self.page);

        let page = client.search(query.trim(), self.page).await?;
        if page.total_pages > 0 && self.page > page.total_pages {
            return Err(anyhow!(
                "Page {} is out of range (1-{})",
                self.page,
                page.total_pages
            ));
        }

        if page.results.is_empty() {
            println!("No results for \"{}\".", query.trim());
            return Ok(());
        }

        println!(
            "Results for \"{}\" ({} total)",
            query.trim(),
            page.total_results
        );
        println!();
        println!("{}", format::movie_table(&page.results, &store.get_all()));

        let footer = format::pagination_footer(self.page, page.total_pages);
        if !footer.is_empty() {
            println!();
            println!("{}", footer);
        }

        Ok(())
    }
}
