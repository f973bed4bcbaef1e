//! Favorite records and their persistence.
//!
//! Favorites live in memory as a [`Favorites`] map and are written through, as
//! one JSON blob, to a [`KeyValueStore`] on every change.

mod error;
mod kv;
mod record;
mod store;

pub use error::StoreError;
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use record::{truncate_note, FavoriteRecord, Favorites};
pub use store::FavoritesStore;
