use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;

/// How the filler flowers of a completed recipe are taken from the stock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillerPolicy {
    /// The first type, in arrival order, holding the whole filler amount pays
    /// for all of it. When no single type can, nothing is deducted and the
    /// bouquet is still emitted.
    #[default]
    SingleType,
    /// Types are drained in arrival order until the filler is paid. When the
    /// whole stock cannot pay, nothing is deducted and the bouquet is still
    /// emitted.
    Spread,
}

/// Runtime options for a `Facility`, usually loaded from a JSON file.
///
/// ```json
/// { "filler_policy": "single_type", "skip_malformed_designs": false }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacilityConfig {
    pub filler_policy: FillerPolicy,
    pub skip_malformed_designs: bool,
}

impl FacilityConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }
}
