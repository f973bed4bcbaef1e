use crate::country::{Country, Region};
use crate::favorites::Favorites;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DirectoryIntent {
    /// A fetch is about to be issued.
    FetchStarted,
    FetchSucceeded { countries: Vec<Country> },
    FetchFailed { message: String },
    /// Stored favorites replace the in-memory map.
    FavoritesLoaded { favorites: Favorites },
    /// Stored favorites could not be read; keep the in-memory map.
    FavoritesUnavailable,
    ToggleFavorite { country_id: String },
    /// Ignored when `country_id` is not a favorite.
    UpdateNote { country_id: String, note: String },
    SetSearch { query: String },
    SetRegion { region: Region },
    LoadMore,
}

impl Intent for DirectoryIntent {}
