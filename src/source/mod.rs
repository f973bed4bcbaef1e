//! Remote country directory source.

mod error;
mod http;

pub use error::SourceError;
pub use http::HttpCountrySource;

use async_trait::async_trait;

use crate::country::Country;

/// Where country records come from.
///
/// One call returns the whole directory. Implementations do not sort or
/// deduplicate; ingestion does that.
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError>;
}
