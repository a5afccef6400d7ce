//! Wire types for the movie catalog API
//!
//! Serde models for the subset of the TMDB v3 surface this client consumes:
//! paged movie listings, per-movie detail endpoints, and person lookups.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// Listing categories exposed by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieCategory {
    Popular,
    NowPlaying,
    Upcoming,
}

impl MovieCategory {
    /// URL path segment for the category listing endpoint.
    pub fn path(&self) -> &'static str {
        match self {
            MovieCategory::Popular => "popular",
            MovieCategory::NowPlaying => "now_playing",
            MovieCategory::Upcoming => "upcoming",
        }
    }

    /// Human-readable heading for rendered listings.
    pub fn label(&self) -> &'static str {
        match self {
            MovieCategory::Popular => "Popular movies",
            MovieCategory::NowPlaying => "Now playing",
            MovieCategory::Upcoming => "Upcoming",
        }
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

/// A movie as returned by listing and search endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl Movie {
    /// Release year, when the release date is present and well-formed.
    /// The API reports dates as `YYYY-MM-DD` but omits or blanks them for
    /// unreleased titles.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Full movie record from the detail endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Cast and crew for a movie.
#[derive(Debug, Clone, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    pub profile_path: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// A user review of a movie.
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author_details: Option<AuthorDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorDetails {
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Video list attached to a movie (trailers, teasers, clips).
#[derive(Debug, Clone, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub official: bool,
}

impl Video {
    /// Whether this entry is a YouTube-hosted trailer, the kind the app
    /// prefers to surface.
    pub fn is_trailer(&self) -> bool {
        self.site.eq_ignore_ascii_case("youtube") && self.kind.eq_ignore_ascii_case("trailer")
    }

    /// Watch URL for YouTube-hosted videos.
    pub fn youtube_url(&self) -> Option<String> {
        if self.site.eq_ignore_ascii_case("youtube") {
            Some(format!("https://www.youtube.com/watch?v={}", self.key))
        } else {
            None
        }
    }
}

impl VideoList {
    /// The first official trailer, falling back to any trailer.
    pub fn best_trailer(&self) -> Option<&Video> {
        self.results
            .iter()
            .find(|v| v.is_trailer() && v.official)
            .or_else(|| self.results.iter().find(|v| v.is_trailer()))
    }
}

/// Watch-provider availability, keyed by ISO 3166-1 country code.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchProviderResults {
    #[serde(default)]
    pub results: HashMap<String, CountryProviders>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryProviders {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub flatrate: Vec<ProviderEntry>,
    #[serde(default)]
    pub rent: Vec<ProviderEntry>,
    #[serde(default)]
    pub buy: Vec<ProviderEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderEntry {
    pub provider_id: u64,
    pub provider_name: String,
}

/// A person (actor, director) from the person endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub known_for_department: Option<String>,
    pub profile_path: Option<String>,
}

/// A person's movie credits; only the acting side is rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonCredits {
    #[serde(default)]
    pub cast: Vec<PersonCastCredit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonCastCredit {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub character: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_movie_page() {
        let body = json!({
            "page": 1,
            "results": [
                {
                    "id": 550,
                    "title": "Fight Club",
                    "poster_path": "/poster.jpg",
                    "overview": "An insomniac office worker...",
                    "release_date": "1999-10-15",
                    "vote_average": 8.4
                },
                {
                    "id": 551,
                    "title": "Untitled",
                    "poster_path": null,
                    "release_date": ""
                }
            ],
            "total_pages": 42,
            "total_results": 833
        });

        let page: Page<Movie> = serde_json::from_value(body).unwrap();
        assert_eq!(page.total_pages, 42);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].release_year(), Some(1999));
        // Blank release dates are tolerated, they just have no year.
        assert_eq!(page.results[1].release_year(), None);
        assert!(page.results[1].vote_average.is_none());
    }

    #[test]
    fn test_deserialize_movie_details() {
        let body = json!({
            "id": 550,
            "title": "Fight Club",
            "poster_path": "/poster.jpg",
            "backdrop_path": "/backdrop.jpg",
            "overview": "...",
            "release_date": "1999-10-15",
            "vote_average": 8.4,
            "genres": [{"id": 18, "name": "Drama"}],
            "runtime": 139,
            "tagline": "Mischief. Mayhem. Soap.",
            "homepage": "",
            "status": "Released"
        });

        let details: MovieDetails = serde_json::from_value(body).unwrap();
        assert_eq!(details.movie.id, 550);
        assert_eq!(details.genres[0].name, "Drama");
        assert_eq!(details.runtime, Some(139));
    }

    #[test]
    fn test_best_trailer_prefers_official_youtube() {
        let list: VideoList = serde_json::from_value(json!({
            "results": [
                {"key": "aaa", "name": "Teaser", "site": "YouTube", "type": "Teaser", "official": true},
                {"key": "bbb", "name": "Fan cut", "site": "YouTube", "type": "Trailer", "official": false},
                {"key": "ccc", "name": "Official Trailer", "site": "YouTube", "type": "Trailer", "official": true}
            ]
        }))
        .unwrap();

        let trailer = list.best_trailer().unwrap();
        assert_eq!(trailer.key, "ccc");
        assert_eq!(
            trailer.youtube_url().as_deref(),
            Some("https://www.youtube.com/watch?v=ccc")
        );
    }

    #[test]
    fn test_best_trailer_falls_back_to_unofficial() {
        let list: VideoList = serde_json::from_value(json!({
            "results": [
                {"key": "bbb", "name": "Fan cut", "site": "YouTube", "type": "Trailer"}
            ]
        }))
        .unwrap();
        assert_eq!(list.best_trailer().unwrap().key, "bbb");
    }

    #[test]
    fn test_deserialize_watch_providers() {
        let providers: WatchProviderResults = serde_json::from_value(json!({
            "results": {
                "BR": {
                    "link": "https://example.test/550",
                    "flatrate": [{"provider_id": 8, "provider_name": "Netflix"}],
                    "rent": []
                }
            }
        }))
        .unwrap();

        let br = providers.results.get("BR").unwrap();
        assert_eq!(br.flatrate[0].provider_name, "Netflix");
        assert!(br.rent.is_empty());
        assert!(br.buy.is_empty());
    }

    #[test]
    fn test_category_paths() {
        assert_eq!(MovieCategory::Popular.path(), "popular");
        assert_eq!(MovieCategory::NowPlaying.path(), "now_playing");
        assert_eq!(MovieCategory::Upcoming.path(), "upcoming");
    }
}
