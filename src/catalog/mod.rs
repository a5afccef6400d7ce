//! Movie catalog client
//!
//! A thin typed client for a TMDB v3 compatible metadata service: paged
//! listings, search, per-movie detail endpoints (credits, reviews, videos,
//! watch providers) and person lookups, behind the [`CatalogProvider`]
//! trait.

pub mod client;
pub mod errors;
pub mod types;

pub use client::*;
pub use errors::*;
pub use types::*;
