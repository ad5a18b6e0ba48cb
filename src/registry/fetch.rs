/// Fetch registries through `hass-cli` and decode them.
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::hass::HassCli;

use super::errors::RegistryError;
use super::model::{Area, Device, Entity};
use super::report::Registries;

/// Fetch `<registry> list` and decode it as a list of records.
///
/// # Errors
///
/// Any `hass-cli` failure, or [`RegistryError::Malformed`] when the JSON is
/// not a list of records.
pub fn fetch_list<T: DeserializeOwned>(
    cli: &HassCli,
    registry: &'static str,
) -> Result<Vec<T>, RegistryError> {
    let value = cli.json(&[registry, "list"])?;
    let records: Vec<T> = serde_json::from_value(value)
        .map_err(|source| RegistryError::Malformed { registry, source })?;
    debug!(registry, count = records.len(), "registry loaded");
    Ok(records)
}

/// # Errors
///
/// See [`fetch_list`].
pub fn fetch_areas(cli: &HassCli) -> Result<Vec<Area>, RegistryError> {
    fetch_list(cli, "area")
}

/// Fetch areas, entities and devices, in that order.
///
/// # Errors
///
/// The first failure aborts; nothing partial is returned.
pub fn fetch_all(cli: &HassCli) -> Result<Registries, RegistryError> {
    let areas = fetch_areas(cli)?;
    let entities = fetch_list::<Entity>(cli, "entity")?;
    let devices = fetch_list::<Device>(cli, "device")?;
    Ok(Registries {
        areas,
        entities,
        devices,
    })
}
