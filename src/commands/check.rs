/// `check` command: verify that hass-cli can be run.
use crate::cli::OutputCtx;
use crate::cli::output::write_check;
use crate::hass::HassCli;
use crate::registry::RegistryError;
use crate::types::CheckOutput;

/// Run `area-search check`.
///
/// # Errors
///
/// Returns `RegistryError::Hass` when `hass-cli --version` cannot be run.
pub fn run(hass: &HassCli, ctx: &OutputCtx) -> Result<(), RegistryError> {
    let _t_version = ctx.timer("hass_cli_version");
    let version = hass.version()?;
    drop(_t_version);

    write_check(
        &CheckOutput {
            ok: true,
            binary: hass.binary().display().to_string(),
            version,
        },
        ctx,
    );
    Ok(())
}
