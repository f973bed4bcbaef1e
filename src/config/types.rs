use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE_URL: &str = "https://restcountries.com/v3.1/all";
pub const DEFAULT_FAVORITES_KEY: &str = "country-favorites";
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_NOTE_MAX_CHARS: usize = 500;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub favorites: FavoritesConfig,
    #[serde(default)]
    pub facts: FactsConfig,
}

/// Remote country endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Endpoint returning the JSON array of countries.
    #[serde(default = "default_source_url")]
    pub url: String,
    /// Field subset requested through the `fields` query parameter.
    #[serde(default = "default_source_fields")]
    pub fields: Vec<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Records added to the visible window per page (default: 20).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// Favorites persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritesConfig {
    /// Key-value storage file. Defaults to `<data_dir>/countrydex/storage.json`.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
    /// Key holding the serialized favorites map.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Notes longer than this are truncated (default: 500).
    #[serde(default = "default_note_max_chars")]
    pub note_max_chars: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactMode {
    #[default]
    Simulated,
    Llm,
}

/// Fun fact generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactsConfig {
    #[serde(default)]
    pub mode: FactMode,
    /// Artificial latency of the simulated generator (default: 1000).
    #[serde(default = "default_fact_delay_ms")]
    pub delay_ms: u64,
    /// Anthropic-compatible API base URL, used in `llm` mode.
    #[serde(default = "default_facts_base_url")]
    pub base_url: String,
    #[serde(default = "default_facts_model")]
    pub model: String,
    #[serde(default = "default_facts_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_source_fields() -> Vec<String> {
    [
        "name",
        "cca3",
        "flags",
        "capital",
        "region",
        "subregion",
        "population",
        "languages",
        "currencies",
        "area",
    ]
    .iter()
    .map(|f| f.to_string())
    .collect()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_storage_key() -> String {
    DEFAULT_FAVORITES_KEY.to_string()
}

fn default_note_max_chars() -> usize {
    DEFAULT_NOTE_MAX_CHARS
}

fn default_fact_delay_ms() -> u64 {
    1000
}

fn default_facts_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_facts_model() -> String {
    "claude-3-5-haiku-latest".to_string()
}

fn default_facts_max_tokens() -> u32 {
    100
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            fields: default_source_fields(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            storage_key: default_storage_key(),
            note_max_chars: default_note_max_chars(),
        }
    }
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            mode: FactMode::default(),
            delay_ms: default_fact_delay_ms(),
            base_url: default_facts_base_url(),
            model: default_facts_model(),
            max_tokens: default_facts_max_tokens(),
            api_key: None,
        }
    }
}

impl FavoritesConfig {
    /// Storage file, falling back to the platform data directory.
    pub fn resolved_storage_path(&self) -> PathBuf {
        match &self.storage_path {
            Some(path) => path.clone(),
            None => {
                let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
                data_dir.join("countrydex").join("storage.json")
            }
        }
    }
}
