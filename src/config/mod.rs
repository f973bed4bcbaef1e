//! Configuration loading.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, DirectoryConfig, FactMode, FactsConfig, FavoritesConfig, SourceConfig,
    DEFAULT_FAVORITES_KEY, DEFAULT_NOTE_MAX_CHARS, DEFAULT_PAGE_SIZE, DEFAULT_SOURCE_URL,
};
