/// Errors from the registry layer.
use thiserror::Error;

use crate::hass::HassError;

/// Errors that can occur while loading registries.
///
/// Once the registries are in memory nothing downstream can fail.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// `hass-cli` could not produce JSON.
    #[error(transparent)]
    Hass(#[from] HassError),

    /// Valid JSON that is not a list of the expected records.
    #[error("Could not read the {registry} registry from hass-cli output: {source}")]
    Malformed {
        /// Which registry (`area`, `entity`, `device`).
        registry: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
