/// Boundary to the external `hass-cli` tool.
pub mod client;
pub mod errors;

pub use client::{DEFAULT_BINARY, DEFAULT_TIMEOUT_SECS, HassCli};
pub use errors::HassError;
