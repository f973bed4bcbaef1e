//! Pure derivations over a [`DirectoryState`] snapshot.

use crate::country::{Country, Region};

use super::DirectoryState;

/// Records matching `region` and `search`, in input order.
///
/// Region is an exact match (skipped for `All`); search is a case-insensitive
/// substring of the common name, skipped when blank.
pub fn filter_countries<'a>(
    countries: &'a [Country],
    search: &str,
    region: Region,
) -> Vec<&'a Country> {
    let query = if search.trim().is_empty() {
        None
    } else {
        Some(search.to_lowercase())
    };

    countries
        .iter()
        .filter(|c| region.matches(&c.region))
        .filter(|c| match &query {
            Some(q) => c.display_name().to_lowercase().contains(q.as_str()),
            None => true,
        })
        .collect()
}

/// Length of the visible window: `min(page * page_size, filtered_len)`.
pub fn window_len(filtered_len: usize, page: usize, page_size: usize) -> usize {
    page.saturating_mul(page_size).min(filtered_len)
}

pub fn has_more(filtered_len: usize, page: usize, page_size: usize) -> bool {
    window_len(filtered_len, page, page_size) < filtered_len
}

/// Number of records currently matching the state's filters.
pub fn filtered_len(state: &DirectoryState) -> usize {
    filter_countries(&state.countries, &state.search, state.region).len()
}

/// Favorited records in canonical order.
pub fn favorite_countries(state: &DirectoryState) -> Vec<Country> {
    state
        .countries
        .iter()
        .filter(|c| state.is_favorite(&c.cca3))
        .cloned()
        .collect()
}

/// What a list screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryView {
    /// The paginated window.
    pub countries: Vec<Country>,
    pub total_count: usize,
    pub filtered_count: usize,
    pub has_more: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub search: String,
    pub region: Region,
    pub page: usize,
}

impl DirectoryView {
    pub fn from_state(state: &DirectoryState) -> Self {
        let filtered = filter_countries(&state.countries, &state.search, state.region);
        let len = window_len(filtered.len(), state.page, state.page_size);

        Self {
            countries: filtered[..len].iter().map(|c| (*c).clone()).collect(),
            total_count: state.countries.len(),
            filtered_count: filtered.len(),
            has_more: len < filtered.len(),
            loading: state.loading,
            error: state.error.clone(),
            search: state.search.clone(),
            region: state.region,
            page: state.page,
        }
    }
}
