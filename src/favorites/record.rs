use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A user annotation attached to a country. Its presence marks the country as
/// a favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    pub country_id: String,
    #[serde(default)]
    pub note: String,
}

impl FavoriteRecord {
    pub fn new(country_id: impl Into<String>) -> Self {
        Self {
            country_id: country_id.into(),
            note: String::new(),
        }
    }
}

/// Favorites keyed by country id.
pub type Favorites = BTreeMap<String, FavoriteRecord>;

/// Cuts `note` to at most `max_chars` characters.
pub fn truncate_note(note: &str, max_chars: usize) -> String {
    match note.char_indices().nth(max_chars) {
        Some((idx, _)) => note[..idx].to_string(),
        None => note.to_string(),
    }
}
