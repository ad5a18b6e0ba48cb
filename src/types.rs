/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout — either as JSON or rendered
/// as text/table. They are decoupled from the registry record types.
use serde::{Deserialize, Serialize};

use crate::hass::HassError;
use crate::registry::{AreaSource, RegistryError};

/// An area in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaOutput {
    pub area_id: String,
    pub name: String,
}

/// An entity resolved into an area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityOutput {
    /// Full entity id (e.g., "light.kitchen_main").
    pub entity_id: String,
    /// Display name (`name`, else `original_name`, else the entity id).
    pub name: String,
    /// Entity domain (text before the first `.`).
    pub domain: String,
    /// Area the entity resolved to.
    pub area_id: String,
    /// Whether the area came from the entity itself or its device.
    pub source: AreaSource,
}

/// Entities of one domain within an area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainGroupOutput {
    pub domain: String,
    pub count: usize,
    pub entities: Vec<EntityOutput>,
}

/// Search results for one matched area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaReportOutput {
    pub area_id: String,
    pub name: String,
    /// Domain filter in effect, or null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_filter: Option<String>,
    /// Domain groups in ascending domain order.
    pub domains: Vec<DomainGroupOutput>,
    pub total_entities: usize,
    pub total_domains: usize,
}

/// Full result of `area-search search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutput {
    /// The query as given.
    pub query: String,
    /// Whether any area matched.
    pub matched: bool,
    /// One report per matched area, ascending by `area_id`.
    pub areas: Vec<AreaReportOutput>,
    /// Every known area, only populated when nothing matched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_areas: Vec<AreaOutput>,
}

/// Result of `area-search check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutput {
    /// Always `true`; failures go through [`ErrorOutput`].
    pub ok: bool,
    /// Binary that was invoked.
    pub binary: String,
    /// First line of `hass-cli --version`.
    pub version: String,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `RegistryError`.
    #[must_use]
    pub fn from_registry_error(err: &RegistryError) -> Self {
        let code = match err {
            RegistryError::Hass(hass) => match hass {
                HassError::NotInstalled => "hass_cli_not_found",
                HassError::Timeout { .. } => "hass_cli_timeout",
                HassError::NotConfigured => "hass_cli_not_configured",
                HassError::Failed { .. } => "hass_cli_failed",
                HassError::InvalidJson(_) => "invalid_json",
                HassError::Io(_) => "io_error",
            },
            RegistryError::Malformed { .. } => "malformed_registry",
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
            },
        }
    }
}
