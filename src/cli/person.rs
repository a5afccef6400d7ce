use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::catalog::CatalogProvider;
use crate::config::Config;
use crate::utils::format;

/// Show a person and their filmography
#[derive(Debug, Args)]
pub struct PersonCommand {
    /// Person id
    pub id: u64,
}

impl PersonCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        let client = super::catalog_client(config)?;
        debug!("Fetching person {}", self.id);

        let person = client.person(self.id).await?;

        println!("{}", person.name);
        if let Some(department) = &person.known_for_department {
            println!("Known for: {}", department);
        }
        match (&person.birthday, &person.place_of_birth) {
            (Some(birthday), Some(place)) => println!("Born:      {} in {}", birthday, place),
            (Some(birthday), None) => println!("Born:      {}", birthday),
            _ => {}
        }

        if let Some(biography) = person.biography.as_deref().filter(|b| !b.is_empty()) {
            println!();
            println!("{}", format::wrap_prose(biography));
        }

        let credits = client.person_movie_credits(self.id).await?;
        if credits.cast.is_empty() {
            return Ok(());
        }

        println!();
        println!("Filmography");

        // Newest first; undated titles go last.
        let mut roles = credits.cast;
        roles.sort_by(|a, b| b.movie.release_date.cmp(&a.movie.release_date));
        for role in &roles {
            let year = role
                .movie
                .release_year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "----".to_string());
            match role.character.as_deref().filter(|c| !c.is_empty()) {
                Some(character) => println!(
                    "  {}  {:>8}  {} as {}",
                    year, role.movie.id, role.movie.title, character
                ),
                None => println!("  {}  {:>8}  {}", year, role.movie.id, role.movie.title),
            }
        }

        Ok(())
    }
}
