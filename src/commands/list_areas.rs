/// `list-areas` command: list every area, sorted by name.
use crate::cli::OutputCtx;
use crate::cli::output::write_areas;
use crate::hass::HassCli;
use crate::registry::{RegistryError, fetch_areas};
use crate::types::AreaOutput;

/// Run `area-search list-areas`.
///
/// # Errors
///
/// Returns `RegistryError` when the area registry cannot be fetched.
pub fn run(hass: &HassCli, ctx: &OutputCtx) -> Result<(), RegistryError> {
    let _t_fetch = ctx.timer("fetch_areas");
    let areas = fetch_areas(hass)?;
    drop(_t_fetch);

    let mut output: Vec<AreaOutput> = areas
        .into_iter()
        .map(|a| AreaOutput {
            area_id: a.area_id,
            name: a.name,
        })
        .collect();
    output.sort_by(|a, b| a.name.cmp(&b.name));

    write_areas(&output, ctx);
    Ok(())
}
