//! Locally persisted favorites
//!
//! A small layered module: [`storage`] provides the key-value persistence
//! seam, [`store`] implements the favorites list on top of it.

pub mod storage;
pub mod store;

pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{FavoritesStore, Toggle, FAVORITES_KEY};
