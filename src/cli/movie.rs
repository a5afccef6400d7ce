use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::catalog::{CatalogProvider, CountryProviders};
use crate::config::Config;
use crate::utils::format;

/// Show details for one movie
#[derive(Debug, Args)]
pub struct MovieCommand {
    /// Movie id
    pub id: u64,

    /// Show the cast list
    #[arg(long)]
    pub cast: bool,

    /// Show user reviews
    #[arg(long)]
    pub reviews: bool,

    /// Show trailers
    #[arg(long)]
    pub trailers: bool,

    /// Show watch providers
    #[arg(long)]
    pub providers: bool,
}

impl MovieCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        let client = super::catalog_client(config)?;
        let store = super::favorites_store(config);
        debug!("Fetching movie {}", self.id);

        let details = client.movie_details(self.id).await?;
        let movie = &details.movie;

        let marker = if store.is_favorite(&movie.id.to_string()) {
            "♥ "
        } else {
            ""
        };
        match movie.release_year() {
            Some(year) => println!("{}{} ({})", marker, movie.title, year),
            None => println!("{}{}", marker, movie.title),
        }
        if let Some(tagline) = details.tagline.as_deref().filter(|t| !t.is_empty()) {
            println!("\"{}\"", tagline);
        }
        println!();

        if let Some(avg) = movie.vote_average {
            println!("Rating:   {} {:.1}", format::star_bar(avg), avg);
        }
        if !details.genres.is_empty() {
            let names: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
            println!("Genres:   {}", names.join(", "));
        }
        if let Some(runtime) = details.runtime {
            println!("Runtime:  {}h{:02}min", runtime / 60, runtime % 60);
        }
        if let Some(homepage) = details.homepage.as_deref().filter(|h| !h.is_empty()) {
            println!("Homepage: {}", homepage);
        }

        if let Some(overview) = movie.overview.as_deref().filter(|o| !o.is_empty()) {
            println!();
            println!("{}", format::wrap_prose(overview));
        }

        if self.cast {
            self.print_cast(&client).await?;
        }
        if self.trailers {
            self.print_trailers(&client).await?;
        }
        if self.providers {
            self.print_providers(&client, config).await?;
        }
        if self.reviews {
            self.print_reviews(&client).await?;
        }

        Ok(())
    }

    async fn print_cast(&self, client: &impl CatalogProvider) -> Result<()> {
        let credits = client.credits(self.id).await?;

        println!();
        println!("Cast");
        if credits.cast.is_empty() {
            println!("  (none listed)");
        }
        for member in credits.cast.iter().take(10) {
            match member.character.as_deref().filter(|c| !c.is_empty()) {
                Some(character) => {
                    println!("  {:>8}  {} as {}", member.id, member.name, character)
                }
                None => println!("  {:>8}  {}", member.id, member.name),
            }
        }

        let directors: Vec<&str> = credits
            .crew
            .iter()
            .filter(|c| c.job.as_deref() == Some("Director"))
            .map(|c| c.name.as_str())
            .collect();
        if !directors.is_empty() {
            println!();
            println!("Directed by {}", directors.join(", "));
        }

        Ok(())
    }

    async fn print_trailers(&self, client: &impl CatalogProvider) -> Result<()> {
        let videos = client.videos(self.id).await?;

        println!();
        println!("Trailers");
        match videos.best_trailer() {
            Some(trailer) => {
                let url = trailer.youtube_url().unwrap_or_default();
                println!("  {} - {}", trailer.name, url);
                for video in videos.results.iter().filter(|v| v.is_trailer()) {
                    if video.key != trailer.key {
                        if let Some(url) = video.youtube_url() {
                            println!("  {} - {}", video.name, url);
                        }
                    }
                }
            }
            None => println!("  (no trailer available)"),
        }

        Ok(())
    }

    async fn print_providers(
        &self,
        client: &impl CatalogProvider,
        config: &Config,
    ) -> Result<()> {
        let providers = client.watch_providers(self.id).await?;

        println!();
        println!("Where to watch");

        // With a configured region show just that country, otherwise all.
        if let Some(region) = &config.region {
            match providers.results.get(region) {
                Some(country) => print_country(region, country),
                None => println!("  Not available in {}", region),
            }
            return Ok(());
        }

        if providers.results.is_empty() {
            println!("  (no providers listed)");
            return Ok(());
        }
        let mut countries: Vec<_> = providers.results.iter().collect();
        countries.sort_by(|a, b| a.0.cmp(b.0));
        for (code, country) in countries {
            print_country(code, country);
        }

        Ok(())
    }

    async fn print_reviews(&self, client: &impl CatalogProvider) -> Result<()> {
        let reviews = client.reviews(self.id, 1).await?;

        println!();
        println!("Reviews");
        if reviews.results.is_empty() {
            println!("  (no reviews yet)");
            return Ok(());
        }

        for review in &reviews.results {
            println!();
            let rating = review
                .author_details
                .as_ref()
                .and_then(|d| d.rating)
                .map(|r| format!(" - {} {:.0}/10", format::star_bar(r), r))
                .unwrap_or_default();
            match review.created_at {
                Some(date) => println!(
                    "  {} on {}{}",
                    review.author,
                    date.format("%Y-%m-%d"),
                    rating
                ),
                None => println!("  {}{}", review.author, rating),
            }
            println!("{}", indent(&format::wrap_prose(&review.content)));
        }

        Ok(())
    }
}

fn print_country(code: &str, country: &CountryProviders) {
    println!("  {}", code);
    for (label, entries) in [
        ("stream", &country.flatrate),
        ("rent", &country.rent),
        ("buy", &country.buy),
    ] {
        if !entries.is_empty() {
            let names: Vec<&str> = entries.iter().map(|p| p.provider_name.as_str()).collect();
            println!("    {:>6}: {}", label, names.join(", "));
        }
    }
    if let Some(link) = country.link.as_deref() {
        println!("    {:>6}: {}", "link", link);
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
