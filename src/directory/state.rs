use crate::config::DEFAULT_PAGE_SIZE;
use crate::country::{Country, Region};
use crate::favorites::Favorites;
use crate::mvi::Snapshot;

/// Everything the directory knows during a session.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryState {
    /// Ingested records in canonical (name) order.
    pub countries: Vec<Country>,
    pub favorites: Favorites,
    pub search: String,
    pub region: Region,
    /// 1-based; the visible window is `page * page_size` records long.
    pub page: usize,
    pub page_size: usize,
    /// True until the pending fetch settles.
    pub loading: bool,
    pub error: Option<String>,
    /// Set once the stored favorites have been read (or failed to read).
    pub favorites_loaded: bool,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl Snapshot for DirectoryState {}

impl DirectoryState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            countries: Vec::new(),
            favorites: Favorites::new(),
            search: String::new(),
            region: Region::All,
            page: 1,
            page_size: page_size.max(1),
            loading: true,
            error: None,
            favorites_loaded: false,
        }
    }

    pub fn is_favorite(&self, country_id: &str) -> bool {
        self.favorites.contains_key(country_id)
    }
}
