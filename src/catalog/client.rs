//! Catalog provider trait and the TMDB HTTP implementation

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::catalog::{
    errors::{CatalogError, CatalogResult},
    types::{
        Credits, Movie, MovieCategory, MovieDetails, Page, Person, PersonCredits, Review,
        VideoList, WatchProviderResults,
    },
};
use crate::config::Config;

/// Read-only operations against the movie catalog.
///
/// The CLI commands talk to this trait so tests can substitute a canned
/// provider for the real HTTP client.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// List a category (popular, now playing, upcoming) at the given page.
    async fn list(&self, category: MovieCategory, page: u32) -> CatalogResult<Page<Movie>>;

    /// Search movies by title.
    async fn search(&self, query: &str, page: u32) -> CatalogResult<Page<Movie>>;

    /// Full record for one movie.
    async fn movie_details(&self, id: u64) -> CatalogResult<MovieDetails>;

    /// Cast and crew for one movie.
    async fn credits(&self, id: u64) -> CatalogResult<Credits>;

    /// User reviews for one movie.
    async fn reviews(&self, id: u64, page: u32) -> CatalogResult<Page<Review>>;

    /// Trailers and other videos for one movie.
    async fn videos(&self, id: u64) -> CatalogResult<VideoList>;

    /// Streaming/rental/purchase availability per country.
    async fn watch_providers(&self, id: u64) -> CatalogResult<WatchProviderResults>;

    /// One person's record.
    async fn person(&self, id: u64) -> CatalogResult<Person>;

    /// A person's movie credits (filmography).
    async fn person_movie_credits(&self, id: u64) -> CatalogResult<PersonCredits>;
}

/// Client options for flexible configuration
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub max_retries: u32,
    pub retry_delay_ms: u64,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay_ms: 500,
            user_agent: format!("cineterm/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Error body the catalog API returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    status_message: Option<String>,
}

/// HTTP client for a TMDB v3 compatible catalog.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
    region: Option<String>,
    options: ClientOptions,
}

impl TmdbClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> CatalogResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| CatalogError::ConfigError("API key is required".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let options = ClientOptions::default();
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&options.user_agent)
            .build()
            .map_err(|e| {
                CatalogError::ConfigError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            language: config.language.clone(),
            region: config.region.clone(),
            options,
        })
    }

    /// Perform a GET with the default query params, retrying transient
    /// failures with jittered exponential backoff.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> CatalogResult<T> {
        let mut attempt = 0;
        loop {
            match self.try_get_json(path, params).await {
                Ok(value) => return Ok(value),
                Err(e) if utils::is_retryable_error(&e) && attempt < self.options.max_retries => {
                    warn!(
                        "Request to {} failed (attempt {}): {}",
                        path,
                        attempt + 1,
                        e
                    );
                    utils::exponential_backoff_with_jitter(attempt, self.options.retry_delay_ms)
                        .await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> CatalogResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let mut request = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(&[("language", self.language.as_str())])
            .query(params);
        if let Some(region) = &self.region {
            request = request.query(&[("region", region.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            return Ok(serde_json::from_str(&body)?);
        }

        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status_message)
            .unwrap_or_else(|| format!("HTTP {}", status));

        match status {
            StatusCode::UNAUTHORIZED => Err(CatalogError::AuthError(message)),
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound(message)),
            StatusCode::TOO_MANY_REQUESTS => Err(CatalogError::RateLimitError(message)),
            s if s.is_server_error() => Err(CatalogError::ServerError(message)),
            _ => Err(CatalogError::ApiError(message)),
        }
    }
}

#[async_trait]
impl CatalogProvider for TmdbClient {
    async fn list(&self, category: MovieCategory, page: u32) -> CatalogResult<Page<Movie>> {
        self.get_json(
            &format!("/movie/{}", category.path()),
            &[("page", page.to_string())],
        )
        .await
    }

    async fn search(&self, query: &str, page: u32) -> CatalogResult<Page<Movie>> {
        self.get_json(
            "/search/movie",
            &[("query", query.to_string()), ("page", page.to_string())],
        )
        .await
    }

    async fn movie_details(&self, id: u64) -> CatalogResult<MovieDetails> {
        self.get_json(&format!("/movie/{}", id), &[]).await
    }

    async fn credits(&self, id: u64) -> CatalogResult<Credits> {
        self.get_json(&format!("/movie/{}/credits", id), &[]).await
    }

    async fn reviews(&self, id: u64, page: u32) -> CatalogResult<Page<Review>> {
        self.get_json(
            &format!("/movie/{}/reviews", id),
            &[("page", page.to_string())],
        )
        .await
    }

    async fn videos(&self, id: u64) -> CatalogResult<VideoList> {
        self.get_json(&format!("/movie/{}/videos", id), &[]).await
    }

    async fn watch_providers(&self, id: u64) -> CatalogResult<WatchProviderResults> {
        self.get_json(&format!("/movie/{}/watch/providers", id), &[])
            .await
    }

    async fn person(&self, id: u64) -> CatalogResult<Person> {
        self.get_json(&format!("/person/{}", id), &[]).await
    }

    async fn person_movie_credits(&self, id: u64) -> CatalogResult<PersonCredits> {
        self.get_json(&format!("/person/{}/movie_credits", id), &[])
            .await
    }
}

/// Utility functions shared by catalog client implementations
pub mod utils {
    use super::*;
    use rand::Rng;
    use tokio::time::sleep;

    /// Exponential backoff with jitter
    pub async fn exponential_backoff_with_jitter(attempt: u32, base_delay_ms: u64) {
        let jitter: f64 = {
            let mut rng = rand::thread_rng();
            rng.gen_range(0.0..=1.0)
        };
        let delay_ms = (base_delay_ms as f64 * 2.0_f64.powi(attempt as i32) * (1.0 + jitter)) as u64;
        let delay = Duration::from_millis(delay_ms.min(30000)); // Cap at 30 seconds
        sleep(delay).await;
    }

    /// Check if an error is retryable
    pub fn is_retryable_error(error: &CatalogError) -> bool {
        match error {
            CatalogError::RateLimitError(_) => true,
            CatalogError::ServerError(_) => true,
            CatalogError::HttpError(e) => {
                e.is_timeout()
                    || e.status().map_or(false, |status| {
                        status.is_server_error() || status == 429 || status == 408
                    })
            }
            _ => false,
        }
    }
}
