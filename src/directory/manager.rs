//! Async orchestration around the directory reducer.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::Config;
use crate::country::{Country, Region};
use crate::favorites::{
    truncate_note, FavoriteRecord, Favorites, FavoritesStore, FileKeyValueStore,
};
use crate::mvi::Reducer;
use crate::source::{CountrySource, HttpCountrySource, SourceError};

use super::intent::DirectoryIntent;
use super::reducer::DirectoryReducer;
use super::state::DirectoryState;
use super::view::{self, DirectoryView};

/// Shared handle to the session's directory state.
///
/// Clones share one state. Construct one per session and pass it to every
/// consumer. The state lock is never held across an `.await`, so fetches and
/// storage writes only suspend the calling task.
#[derive(Clone)]
pub struct DirectoryManager {
    inner: Arc<Inner>,
}

struct Inner {
    state: RwLock<DirectoryState>,
    source: Arc<dyn CountrySource>,
    favorites: FavoritesStore,
    note_max_chars: usize,
}

impl DirectoryManager {
    pub fn new(
        source: Arc<dyn CountrySource>,
        favorites: FavoritesStore,
        page_size: usize,
        note_max_chars: usize,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(DirectoryState::with_page_size(page_size)),
                source,
                favorites,
                note_max_chars: note_max_chars.max(1),
            }),
        }
    }

    /// HTTP source and file-backed favorites, as configured.
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        let source = HttpCountrySource::new(&config.source)?;
        let kv = FileKeyValueStore::new(config.favorites.resolved_storage_path());
        let favorites = FavoritesStore::new(Arc::new(kv), config.favorites.storage_key.clone());

        Ok(Self::new(
            Arc::new(source),
            favorites,
            config.directory.page_size,
            config.favorites.note_max_chars,
        ))
    }

    fn dispatch(&self, intent: DirectoryIntent) {
        let mut guard = self.inner.state.write();
        let current = std::mem::take(&mut *guard);
        *guard = DirectoryReducer::reduce(current, intent);
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> DirectoryState {
        self.inner.state.read().clone()
    }

    pub fn view(&self) -> DirectoryView {
        DirectoryView::from_state(&self.inner.state.read())
    }

    /// Fetches the whole directory, replacing the record set on success.
    ///
    /// Failures are stored as the state's error message; records from an
    /// earlier success are kept. The first successful fetch also seeds the
    /// favorites from storage.
    pub async fn fetch(&self) {
        self.dispatch(DirectoryIntent::FetchStarted);

        match self.inner.source.fetch_all().await {
            Ok(countries) => {
                self.dispatch(DirectoryIntent::FetchSucceeded { countries });

                let (count, favorites_loaded) = {
                    let state = self.inner.state.read();
                    (state.countries.len(), state.favorites_loaded)
                };
                tracing::info!(count, "Directory loaded");

                if !favorites_loaded {
                    self.load_favorites().await;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch countries");
                self.dispatch(DirectoryIntent::FetchFailed {
                    message: e.to_string(),
                });
            }
        }
    }

    /// Same as [`fetch`](Self::fetch). Safe to call any number of times.
    pub async fn retry(&self) {
        self.fetch().await;
    }

    /// Seeds favorites from storage. Does nothing before countries are loaded.
    pub async fn load_favorites(&self) {
        if self.inner.state.read().countries.is_empty() {
            tracing::debug!("Skipping favorites load, no countries yet");
            return;
        }

        match self.inner.favorites.load().await {
            Ok(favorites) => {
                tracing::debug!(count = favorites.len(), "Favorites loaded");
                self.dispatch(DirectoryIntent::FavoritesLoaded { favorites });
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load favorites");
                self.dispatch(DirectoryIntent::FavoritesUnavailable);
            }
        }
    }

    /// Adds or removes `country` from favorites and writes the map through.
    ///
    /// Returns whether the country is a favorite afterwards.
    pub async fn toggle_favorite(&self, country: &Country) -> bool {
        self.dispatch(DirectoryIntent::ToggleFavorite {
            country_id: country.cca3.clone(),
        });

        let (now_favorite, favorites) = {
            let state = self.inner.state.read();
            (state.is_favorite(&country.cca3), state.favorites.clone())
        };
        tracing::debug!(country = %country.cca3, favorite = now_favorite, "Favorite toggled");

        self.persist(&favorites).await;
        now_favorite
    }

    /// Replaces the note of an existing favorite and writes the map through.
    ///
    /// Returns `false` without touching anything when `country_id` is not a
    /// favorite. Notes are cut to the configured length.
    pub async fn update_note(&self, country_id: &str, note: &str) -> bool {
        if !self.is_favorite(country_id) {
            tracing::debug!(country = %country_id, "Ignoring note for non-favorite");
            return false;
        }

        self.dispatch(DirectoryIntent::UpdateNote {
            country_id: country_id.to_string(),
            note: truncate_note(note, self.inner.note_max_chars),
        });

        let favorites = self.inner.state.read().favorites.clone();
        self.persist(&favorites).await;
        true
    }

    async fn persist(&self, favorites: &Favorites) {
        if let Err(e) = self.inner.favorites.save(favorites).await {
            tracing::warn!(error = %e, "Failed to save favorites");
        }
    }

    pub fn set_search(&self, query: impl Into<String>) {
        self.dispatch(DirectoryIntent::SetSearch {
            query: query.into(),
        });
    }

    pub fn set_region(&self, region: Region) {
        self.dispatch(DirectoryIntent::SetRegion { region });
    }

    /// Grows the window by one page. Returns whether it grew.
    pub fn load_more(&self) -> bool {
        let before = self.inner.state.read().page;
        self.dispatch(DirectoryIntent::LoadMore);
        self.inner.state.read().page > before
    }

    pub fn has_more(&self) -> bool {
        let state = self.inner.state.read();
        view::has_more(view::filtered_len(&state), state.page, state.page_size)
    }

    pub fn is_favorite(&self, country_id: &str) -> bool {
        self.inner.state.read().is_favorite(country_id)
    }

    pub fn favorite(&self, country_id: &str) -> Option<FavoriteRecord> {
        self.inner.state.read().favorites.get(country_id).cloned()
    }

    pub fn favorites(&self) -> Favorites {
        self.inner.state.read().favorites.clone()
    }

    pub fn favorite_countries(&self) -> Vec<Country> {
        view::favorite_countries(&self.inner.state.read())
    }

    /// All ingested records in canonical order.
    pub fn all_countries(&self) -> Vec<Country> {
        self.inner.state.read().countries.clone()
    }

    /// Case-insensitive lookup by id.
    pub fn find(&self, country_id: &str) -> Option<Country> {
        self.inner
            .state
            .read()
            .countries
            .iter()
            .find(|c| c.cca3.eq_ignore_ascii_case(country_id))
            .cloned()
    }
}
