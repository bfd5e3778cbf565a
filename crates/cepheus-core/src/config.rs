//! Generator settings, loadable from a JSON file.
//!
//! ```json
//! { "seed": 1977, "world_name": "Unnamed", "allegiance": "Im" }
//! ```
//!
//! Every field is optional; missing ones take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dice::Dice;
use crate::error::ConfigError;

pub const DEFAULT_WORLD_NAME: &str = "Erehwemos";
pub const DEFAULT_ALLEGIANCE: &str = "Na";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible output; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Name given to every generated world.
    pub world_name: String,
    /// Allegiance code given to every generated world.
    pub allegiance: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            world_name: DEFAULT_WORLD_NAME.to_string(),
            allegiance: DEFAULT_ALLEGIANCE.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Dice for this configuration: seeded when a seed is set.
    pub fn dice(&self) -> Dice {
        match self.seed {
            Some(seed) => Dice::seeded(seed),
            None => Dice::from_entropy(),
        }
    }
}
