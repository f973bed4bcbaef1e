use std::collections::HashSet;

use crate::country::{compare_names, Country};
use crate::favorites::FavoriteRecord;
use crate::mvi::Reducer;

use super::intent::DirectoryIntent;
use super::state::DirectoryState;
use super::view;

pub struct DirectoryReducer;

impl Reducer for DirectoryReducer {
    type State = DirectoryState;
    type Intent = DirectoryIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DirectoryIntent::FetchStarted => {
                state.loading = true;
                state.error = None;
            }
            DirectoryIntent::FetchSucceeded { countries } => {
                state.countries = ingest(countries);
                state.loading = false;
                state.error = None;
                state.page = 1;
            }
            DirectoryIntent::FetchFailed { message } => {
                // Previously ingested records stay visible.
                state.loading = false;
                state.error = Some(message);
            }
            DirectoryIntent::FavoritesLoaded { favorites } => {
                state.favorites = favorites;
                state.favorites_loaded = true;
            }
            DirectoryIntent::FavoritesUnavailable => {
                state.favorites_loaded = true;
            }
            DirectoryIntent::ToggleFavorite { country_id } => {
                if state.favorites.remove(&country_id).is_none() {
                    state
                        .favorites
                        .insert(country_id.clone(), FavoriteRecord::new(country_id));
                }
            }
            DirectoryIntent::UpdateNote { country_id, note } => {
                if let Some(record) = state.favorites.get_mut(&country_id) {
                    record.note = note;
                }
            }
            DirectoryIntent::SetSearch { query } => {
                state.search = query;
                state.page = 1;
            }
            DirectoryIntent::SetRegion { region } => {
                state.region = region;
                state.page = 1;
            }
            DirectoryIntent::LoadMore => {
                if view::has_more(view::filtered_len(&state), state.page, state.page_size) {
                    state.page += 1;
                }
            }
        }
        state
    }
}

/// Sorts by display name and drops repeated ids (first in sorted order wins).
fn ingest(mut countries: Vec<Country>) -> Vec<Country> {
    countries.sort_by(|a, b| compare_names(&a.name.common, &b.name.common));

    let mut seen = HashSet::with_capacity(countries.len());
    countries.retain(|c| {
        let fresh = seen.insert(c.cca3.clone());
        if !fresh {
            tracing::warn!(id = %c.cca3, "Dropping duplicate country id");
        }
        fresh
    });
    countries
}
