//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use countrydex::config::{SourceConfig, DEFAULT_FAVORITES_KEY};
use countrydex::directory::DirectoryManager;
use countrydex::favorites::{FavoritesStore, MemoryKeyValueStore};
use countrydex::source::HttpCountrySource;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Endpoint payload, deliberately not in name order.
pub const MOCK_COUNTRIES: &str = r#"[
  {
    "name": {"common": "United States", "official": "United States of America"},
    "cca3": "USA",
    "flags": {"png": "https://flagcdn.com/w320/us.png", "svg": "https://flagcdn.com/us.svg"},
    "capital": ["Washington, D.C."],
    "region": "Americas",
    "subregion": "North America",
    "population": 331002651,
    "languages": {"eng": "English"},
    "currencies": {"USD": {"name": "United States dollar", "symbol": "$"}}
  },
  {
    "name": {"common": "Canada", "official": "Canada"},
    "cca3": "CAN",
    "flags": {"png": "https://flagcdn.com/w320/ca.png", "svg": "https://flagcdn.com/ca.svg"},
    "capital": ["Ottawa"],
    "region": "Americas",
    "subregion": "North America",
    "population": 37742154,
    "languages": {"eng": "English", "fra": "French"},
    "currencies": {"CAD": {"name": "Canadian dollar", "symbol": "$"}}
  },
  {
    "name": {"common": "Japan", "official": "Japan"},
    "cca3": "JPN",
    "flags": {"png": "https://flagcdn.com/w320/jp.png", "svg": "https://flagcdn.com/jp.svg"},
    "capital": ["Tokyo"],
    "region": "Asia",
    "subregion": "Eastern Asia",
    "population": 125836021,
    "languages": {"jpn": "Japanese"},
    "currencies": {"JPY": {"name": "Japanese yen", "symbol": "¥"}}
  }
]"#;

pub const MOCK_FAVORITES: &str = r#"{
  "USA": {"countryId": "USA", "note": "Great country!"},
  "JPN": {"countryId": "JPN", "note": "Love the culture!"}
}"#;

/// `count` minimal records named `Country 000`.. in reverse order.
pub fn many_countries_json(count: usize, region: &str) -> String {
    let records: Vec<String> = (0..count)
        .rev()
        .map(|i| {
            format!(
                r#"{{"name": {{"common": "Country {:03}"}}, "cca3": "C{:03}", "flags": {{"png": "p"}}, "region": "{}", "population": {}}}"#,
                i, i, region, i * 1000
            )
        })
        .collect();
    format!("[{}]", records.join(","))
}

pub fn source_config(url: &str) -> SourceConfig {
    SourceConfig {
        url: url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..SourceConfig::default()
    }
}

/// Manager wired to an HTTP endpoint and an in-memory favorites store.
pub fn manager_for(url: &str, kv: MemoryKeyValueStore) -> DirectoryManager {
    let source = HttpCountrySource::new(&source_config(url)).expect("valid source config");
    DirectoryManager::new(
        Arc::new(source),
        FavoritesStore::new(Arc::new(kv), DEFAULT_FAVORITES_KEY),
        20,
        500,
    )
}

/// Write a config file pointing at `countries_url` with storage inside the
/// returned temp dir.
pub fn temp_config(countries_url: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    let storage_path = temp_dir.path().join("storage.json");

    let content = format!(
        r#"[source]
url = "{}"
timeout_seconds = 5
connect_timeout_seconds = 2

[favorites]
storage_path = "{}"

[facts]
delay_ms = 0
"#,
        countries_url,
        toml_path(&storage_path)
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

fn toml_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "\\\\")
}
