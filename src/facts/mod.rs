//! Fun fact generation for the detail view.
//!
//! Facts are produced on demand and never cached or persisted. Consumers go
//! through [`fun_fact`], which turns any failure into "no fact".

mod error;
mod llm;
mod simulated;

pub use error::FactError;
pub use llm::LlmFactGenerator;
pub use simulated::SimulatedFactGenerator;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{FactMode, FactsConfig};
use crate::country::Country;

#[async_trait]
pub trait FactGenerator: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    async fn generate(&self, country: &Country) -> Result<String, FactError>;
}

/// Builds the generator selected by `config.mode`.
pub fn from_config(config: &FactsConfig) -> Result<Arc<dyn FactGenerator>, FactError> {
    match config.mode {
        FactMode::Simulated => Ok(Arc::new(SimulatedFactGenerator::new(
            Duration::from_millis(config.delay_ms),
        ))),
        FactMode::Llm => Ok(Arc::new(LlmFactGenerator::new(config.clone())?)),
    }
}

/// Generates a fact, logging and swallowing failures.
pub async fn fun_fact(generator: &dyn FactGenerator, country: &Country) -> Option<String> {
    match generator.generate(country).await {
        Ok(fact) => Some(fact),
        Err(e) => {
            tracing::warn!(
                generator = generator.name(),
                country = %country.cca3,
                error = %e,
                "Failed to fetch fun fact"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::fixtures::country;

    struct Broken;

    #[async_trait]
    impl FactGenerator for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn generate(&self, _country: &Country) -> Result<String, FactError> {
            Err(FactError::Empty)
        }
    }

    #[tokio::test]
    async fn failure_becomes_no_fact() {
        let japan = country("JPN", "Japan", "Asia");
        assert_eq!(fun_fact(&Broken, &japan).await, None);
    }

    #[tokio::test]
    async fn simulated_mode_from_config() {
        let config = FactsConfig {
            delay_ms: 0,
            ..FactsConfig::default()
        };
        let generator = from_config(&config).unwrap();
        assert_eq!(generator.name(), "simulated");

        let japan = country("JPN", "Japan", "Asia");
        let fact = fun_fact(generator.as_ref(), &japan).await.unwrap();
        assert!(fact.starts_with("Japan "));
    }

    #[test]
    fn llm_mode_requires_key() {
        let config = FactsConfig {
            mode: FactMode::Llm,
            ..FactsConfig::default()
        };
        assert!(matches!(from_config(&config), Err(FactError::NotConfigured)));
    }
}
