/// Errors from the `hass-cli` process boundary.
use thiserror::Error;

/// Environment variable `hass-cli` reads its server URL from.
pub const SERVER_ENV: &str = "HASS_SERVER";

/// Environment variable `hass-cli` reads its access token from.
pub const TOKEN_ENV: &str = "HASS_TOKEN";

/// Typed failures from invoking `hass-cli`.
#[derive(Debug, Error)]
pub enum HassError {
    /// The binary could not be found on PATH (or at the configured path).
    #[error("hass-cli not found. Install: pip install homeassistant-cli")]
    NotInstalled,

    /// The process did not finish within the configured wait.
    #[error("Timed out. Server: {server}")]
    Timeout {
        /// Value of `HASS_SERVER`, or `(not set)`.
        server: String,
    },

    /// Non-zero exit whose stderr points at missing server/token configuration.
    #[error("HASS_SERVER or HASS_TOKEN not set. Configure hass-cli before searching.")]
    NotConfigured,

    /// Any other non-zero exit.
    #[error("hass-cli failed: {}", if stderr.is_empty() { "unknown error" } else { stderr.as_str() })]
    Failed {
        /// Trimmed stderr of the failed process (may be empty).
        stderr: String,
    },

    /// stdout was not valid JSON.
    #[error("Could not parse hass-cli output as JSON.")]
    InvalidJson(#[source] serde_json::Error),

    /// Spawning or waiting on the process failed for another reason.
    #[error("hass-cli I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HassError {
    /// Classify a non-zero exit by its stderr text.
    #[must_use]
    pub fn from_stderr(stderr: &str) -> Self {
        let stderr = stderr.trim();
        if stderr.contains(SERVER_ENV) || stderr.contains(TOKEN_ENV) {
            Self::NotConfigured
        } else {
            Self::Failed {
                stderr: stderr.to_owned(),
            }
        }
    }

    /// Build a timeout error naming the server `hass-cli` was pointed at.
    #[must_use]
    pub fn timeout() -> Self {
        Self::Timeout {
            server: std::env::var(SERVER_ENV).unwrap_or_else(|_| "(not set)".to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_hint_on_server_var() {
        let err = HassError::from_stderr("Error: HASS_SERVER is required\n");
        assert!(matches!(err, HassError::NotConfigured));
    }

    #[test]
    fn test_config_hint_on_token_var() {
        let err = HassError::from_stderr("missing HASS_TOKEN");
        assert!(matches!(err, HassError::NotConfigured));
    }

    #[test]
    fn test_generic_failure_keeps_stderr() {
        let err = HassError::from_stderr("  connection refused \n");
        assert_eq!(err.to_string(), "hass-cli failed: connection refused");
    }

    #[test]
    fn test_empty_stderr_message() {
        let err = HassError::from_stderr("");
        assert_eq!(err.to_string(), "hass-cli failed: unknown error");
    }
}
