//! Plain-text rendering of directory views.

use std::fmt::Write as _;

use crate::country::Country;
use crate::directory::DirectoryView;
use crate::favorites::{FavoriteRecord, Favorites};

const FAVORITE_MARK: &str = "★";
const PLAIN_MARK: &str = "☆";

pub fn country_row(country: &Country, is_favorite: bool) -> String {
    let mark = if is_favorite { FAVORITE_MARK } else { PLAIN_MARK };
    format!(
        "{} {:<3}  {}  ({})",
        mark,
        country.cca3,
        country.display_name(),
        country.region
    )
}

pub fn error_banner(message: &str) -> String {
    format!("! {}\n  Retry with --retry <N> or run the command again.", message)
}

/// List screen: error banner, rows of the current window, and a footer.
pub fn list(view: &DirectoryView, favorites: &Favorites) -> String {
    let mut out = String::new();

    if let Some(error) = &view.error {
        let _ = writeln!(out, "{}", error_banner(error));
        if view.countries.is_empty() {
            return out;
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "Countries: region {}{} ({} of {} matching, {} total)",
        view.region,
        if view.search.trim().is_empty() {
            String::new()
        } else {
            format!(", search \"{}\"", view.search)
        },
        view.countries.len(),
        view.filtered_count,
        view.total_count
    );

    if view.countries.is_empty() {
        let empty = if view.loading {
            "Loading countries..."
        } else {
            "No countries found matching your criteria."
        };
        let _ = writeln!(out, "{}", empty);
        return out;
    }

    for country in &view.countries {
        let _ = writeln!(out, "{}", country_row(country, favorites.contains_key(&country.cca3)));
    }

    if view.has_more {
        let _ = writeln!(
            out,
            "... {} more (use --pages {})",
            view.filtered_count - view.countries.len(),
            view.page + 1
        );
    }

    out
}

/// Detail panel for one country.
pub fn detail(country: &Country, favorite: Option<&FavoriteRecord>, fact: Option<&str>) -> String {
    let mut out = String::new();
    let mark = if favorite.is_some() { FAVORITE_MARK } else { PLAIN_MARK };

    let _ = writeln!(out, "{} {} ({})", mark, country.display_name(), country.cca3);
    if let Some(official) = country.name.official.as_deref().filter(|o| !o.is_empty()) {
        let _ = writeln!(out, "{}", official);
    }
    let _ = writeln!(out, "Flag: {}", country.flag_image());
    if let Some(alt) = country.flags.alt.as_deref().filter(|a| !a.is_empty()) {
        let _ = writeln!(out, "      {}", alt);
    }

    let rows = [
        ("Capital", country.capital_label()),
        ("Region", country.region_label()),
        ("Population", country.population_label()),
        ("Area", country.area_label()),
        ("Languages", country.languages_label()),
        ("Currencies", country.currencies_label()),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{:<11} {}", format!("{}:", label), value);
    }

    if let Some(fact) = fact {
        let _ = writeln!(out, "\nFun Fact\n  {}", fact);
    }

    if let Some(record) = favorite {
        let note = if record.note.is_empty() {
            "(no note)"
        } else {
            record.note.as_str()
        };
        let _ = writeln!(out, "\nNotes\n  {}", note);
    }

    out
}

/// Favorites screen.
pub fn favorites(countries: &[Country], favorites: &Favorites) -> String {
    if countries.is_empty() {
        return "You haven't added any favorites yet.\n\
                Browse countries and run `countrydex favorite <ID>` to add them here.\n"
            .to_string();
    }

    let mut out = String::new();
    for country in countries {
        let _ = writeln!(out, "{}", country_row(country, true));
        if let Some(note) = favorites
            .get(&country.cca3)
            .map(|r| r.note.as_str())
            .filter(|n| !n.is_empty())
        {
            let _ = writeln!(out, "      {}", note);
        }
    }
    out
}
