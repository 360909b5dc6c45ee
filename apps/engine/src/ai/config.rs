//! AI configuration handling.
//!
//! Provides a typed interface for strategy configuration, extracting
//! standard fields from a JSON config while preserving strategy-specific
//! custom fields.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for AI players.
///
/// `seed` drives deterministic decision-making where a strategy uses
/// randomness; anything else the caller supplies is preserved in `custom`
/// for strategy-specific needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Optional RNG seed for deterministic AI behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Strategy-specific configuration, preserved verbatim.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    /// Create an `AiConfig` from an optional JSON value.
    ///
    /// Extracts standard fields (like `seed`) while preserving all other
    /// fields in `custom`. `None` yields an empty config.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_else(|_| Self::empty()),
            None => Self::empty(),
        }
    }

    /// Get the RNG seed, if configured.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Get a custom configuration field by key.
    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    /// Create an empty configuration (no seed, no custom fields).
    pub fn empty() -> Self {
        Self {
            seed: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    /// Create a configuration with just a seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}
