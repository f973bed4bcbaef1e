use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::country::Country;

use super::{FactError, FactGenerator};

/// Canned, region-keyed facts behind an artificial delay.
pub struct SimulatedFactGenerator {
    delay: Duration,
}

impl SimulatedFactGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedFactGenerator {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

/// Templates for a region; `{}` is replaced by the country name. Unknown
/// regions use the Europe set.
fn templates(region: &str) -> &'static [&'static str] {
    match region {
        "Africa" => &[
            "{} is home to some of the world's most diverse wildlife and ecosystems.",
            "{} has one of the youngest populations in the world, with a median age under 20.",
        ],
        "Americas" => &[
            "{} contains some of the world's largest freshwater reserves.",
            "{} has one of the most biodiverse ecosystems on the planet.",
        ],
        "Asia" => &[
            "{} has some of the world's oldest continuous civilizations.",
            "{} is known for its rich culinary traditions that date back thousands of years.",
        ],
        "Oceania" => &[
            "{} has some of the world's most unique endemic species due to its geographical isolation.",
            "{} has some of the world's most pristine marine ecosystems and coral reefs.",
        ],
        _ => &[
            "{} has some of the world's oldest universities and academic institutions.",
            "{} has a rich history of art, music, and literature that has influenced global culture.",
        ],
    }
}

#[async_trait]
impl FactGenerator for SimulatedFactGenerator {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn generate(&self, country: &Country) -> Result<String, FactError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let template = templates(&country.region)
            .choose(&mut rand::thread_rng())
            .ok_or(FactError::Empty)?;

        Ok(template.replace("{}", country.display_name()))
    }
}
