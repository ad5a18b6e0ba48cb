/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod check;
pub mod list_areas;
pub mod search;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::hass::HassCli;
use crate::registry::RegistryError;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `RegistryError` on any `hass-cli` failure.
pub fn dispatch(command: &Command, hass: &HassCli, ctx: &OutputCtx) -> Result<(), RegistryError> {
    match command {
        Command::ListAreas => list_areas::run(hass, ctx),
        Command::Search(args) => search::run(args, hass, ctx),
        Command::Check => check::run(hass, ctx),
    }
}
