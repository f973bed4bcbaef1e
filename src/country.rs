//! Country records as served by the directory endpoint.
//!
//! Optional collections (capitals, languages, currencies) are modelled as
//! `Option`s. Every display helper here renders an absent or empty collection
//! as [`NONE_LABEL`], so consumers never re-derive that rule.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Rendering used for any optional field that carries no data.
pub const NONE_LABEL: &str = "None";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    /// Three-letter code, unique across the directory.
    pub cca3: String,
    pub flags: Flags,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub languages: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub currencies: Option<BTreeMap<String, Currency>>,
    /// Land area in square kilometres.
    #[serde(default)]
    pub area: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    pub png: String,
    #[serde(default)]
    pub svg: Option<String>,
    /// Textual description of the flag.
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

impl Country {
    pub fn id(&self) -> &str {
        &self.cca3
    }

    pub fn display_name(&self) -> &str {
        &self.name.common
    }

    /// Preferred flag image: vector when available, raster otherwise.
    pub fn flag_image(&self) -> &str {
        self.flags
            .svg
            .as_deref()
            .filter(|svg| !svg.is_empty())
            .unwrap_or(&self.flags.png)
    }

    pub fn capital_label(&self) -> String {
        match self.capital.as_deref() {
            Some(capitals) if !capitals.is_empty() => capitals.join(", "),
            _ => NONE_LABEL.to_string(),
        }
    }

    /// `Region (Subregion)`, or just the region when no subregion is known.
    pub fn region_label(&self) -> String {
        match self.subregion.as_deref() {
            Some(sub) if !sub.is_empty() => format!("{} ({})", self.region, sub),
            _ => self.region.clone(),
        }
    }

    pub fn population_label(&self) -> String {
        format_grouped(self.population)
    }

    pub fn languages_label(&self) -> String {
        match &self.languages {
            Some(languages) if !languages.is_empty() => languages
                .values()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            _ => NONE_LABEL.to_string(),
        }
    }

    pub fn currencies_label(&self) -> String {
        match &self.currencies {
            Some(currencies) if !currencies.is_empty() => currencies
                .values()
                .map(|c| format!("{} ({})", c.name, c.symbol))
                .collect::<Vec<_>>()
                .join(", "),
            _ => NONE_LABEL.to_string(),
        }
    }

    pub fn area_label(&self) -> String {
        match self.area {
            Some(area) if area.is_finite() && area >= 0.0 => {
                format!("{} km²", format_grouped(area.round() as u64))
            }
            _ => NONE_LABEL.to_string(),
        }
    }
}

/// Formats an integer with `,` thousands separators.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Locale-aware ordering of display names.
///
/// Primary key ignores accents and case ("Åland Islands" sorts with the A's),
/// then case-insensitive. Names differing only in case put lowercase first
/// ("ab" before "Ab").
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| case_key(a).cmp(case_key(b)))
}

fn case_key(name: &str) -> impl Iterator<Item = (bool, char)> + '_ {
    name.chars().map(|c| (c.is_uppercase(), c))
}

fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Region filter choices. `All` disables region filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    All,
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    pub fn all() -> &'static [Region] {
        &[
            Self::All,
            Self::Africa,
            Self::Americas,
            Self::Asia,
            Self::Europe,
            Self::Oceania,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Africa => "Africa",
            Self::Americas => "Americas",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Oceania => "Oceania",
        }
    }

    /// Exact match against a record's region, always true for `All`.
    pub fn matches(&self, region: &str) -> bool {
        match self {
            Self::All => true,
            other => other.as_str() == region,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown region '{0}' (expected one of: All, Africa, Americas, Asia, Europe, Oceania)")]
pub struct ParseRegionError(String);

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Region::all()
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseRegionError(s.to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::country;
    use super::*;

    #[test]
    fn decodes_endpoint_record() {
        let json = r#"{
            "name": {"common": "Japan", "official": "Japan", "nativeName": {}},
            "cca3": "JPN",
            "flags": {"png": "https://flagcdn.com/w320/jp.png", "svg": "https://flagcdn.com/jp.svg", "alt": "A red disc"},
            "capital": ["Tokyo"],
            "region": "Asia",
            "subregion": "Eastern Asia",
            "population": 125836021,
            "languages": {"jpn": "Japanese"},
            "currencies": {"JPY": {"name": "Japanese yen", "symbol": "¥"}},
            "area": 377930.0
        }"#;

        let c: Country = serde_json::from_str(json).unwrap();
        assert_eq!(c.id(), "JPN");
        assert_eq!(c.capital_label(), "Tokyo");
        assert_eq!(c.region_label(), "Asia (Eastern Asia)");
        assert_eq!(c.population_label(), "125,836,021");
        assert_eq!(c.languages_label(), "Japanese");
        assert_eq!(c.currencies_label(), "Japanese yen (¥)");
        assert_eq!(c.area_label(), "377,930 km²");
        assert_eq!(c.flag_image(), "https://flagcdn.com/jp.svg");
    }

    #[test]
    fn absent_fields_render_as_none() {
        let json = r#"{
            "name": {"common": "Antarctica"},
            "cca3": "ATA",
            "flags": {"png": "https://flagcdn.com/w320/aq.png"},
            "region": "Antarctic",
            "population": 1000
        }"#;

        let c: Country = serde_json::from_str(json).unwrap();
        assert_eq!(c.capital_label(), NONE_LABEL);
        assert_eq!(c.languages_label(), NONE_LABEL);
        assert_eq!(c.currencies_label(), NONE_LABEL);
        assert_eq!(c.area_label(), NONE_LABEL);
        assert_eq!(c.region_label(), "Antarctic");
        assert_eq!(c.flag_image(), "https://flagcdn.com/w320/aq.png");
    }

    #[test]
    fn currency_without_symbol_decodes() {
        let json = r#"{"CHF": {"name": "Swiss franc"}}"#;
        let currencies: BTreeMap<String, Currency> = serde_json::from_str(json).unwrap();
        assert_eq!(currencies["CHF"].symbol, "");
    }

    #[test]
    fn grouped_formatting() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(331002651), "331,002,651");
    }

    #[test]
    fn compare_names_folds_accents_and_case() {
        let mut names = vec!["Zambia", "Åland Islands", "albania", "Algeria", "Curaçao", "Cuba"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(
            names,
            vec!["Åland Islands", "albania", "Algeria", "Cuba", "Curaçao", "Zambia"]
        );
    }

    #[test]
    fn compare_names_puts_lowercase_first_on_case_ties() {
        assert_eq!(compare_names("a", "A"), Ordering::Less);
        assert_eq!(compare_names("Ab", "ab"), Ordering::Greater);
        assert_eq!(compare_names("ab", "ab"), Ordering::Equal);

        let mut names = vec!["Ab", "ab", "AB"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["ab", "Ab", "AB"]);
    }

    #[test]
    fn region_parse_and_match() {
        assert_eq!("americas".parse::<Region>().unwrap(), Region::Americas);
        assert_eq!(" ALL ".parse::<Region>().unwrap(), Region::All);
        assert!("Antarctic".parse::<Region>().is_err());

        let canada = country("CAN", "Canada", "Americas");
        assert!(Region::All.matches(&canada.region));
        assert!(Region::Americas.matches(&canada.region));
        assert!(!Region::Asia.matches(&canada.region));
    }
}
