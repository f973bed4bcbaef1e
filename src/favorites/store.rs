use std::sync::Arc;

use super::{Favorites, KeyValueStore, StoreError};

/// Reads and writes the whole favorites map under one key.
#[derive(Clone)]
pub struct FavoritesStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl FavoritesStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    /// Loads the stored map. An absent key yields an empty map.
    pub async fn load(&self) -> Result<Favorites, StoreError> {
        match self.kv.get(&self.key).await? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Favorites::new()),
        }
    }

    /// Overwrites the stored map with `favorites`.
    pub async fn save(&self, favorites: &Favorites) -> Result<(), StoreError> {
        let blob = serde_json::to_string(favorites)?;
        self.kv.set(&self.key, blob).await
    }
}
