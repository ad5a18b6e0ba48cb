/// Entity → area resolution: direct assignment first, then the owning device.
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::model::{Area, Device, Entity};

/// How an entity's area was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaSource {
    /// The entity carries its own `area_id`.
    Direct,
    /// The entity inherits the area of its device.
    ViaDevice,
}

impl fmt::Display for AreaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Direct => "direct",
            Self::ViaDevice => "via device",
        })
    }
}

/// Lookup tables built once per invocation.
#[derive(Debug, Clone, Default)]
pub struct RegistryIndex {
    /// `area_id → name`. Later duplicates of an id overwrite earlier ones.
    pub area_names: BTreeMap<String, String>,
    /// `device_id → area_id`, only for devices with both set.
    pub device_areas: HashMap<String, String>,
}

impl RegistryIndex {
    #[must_use]
    pub fn build(areas: &[Area], devices: &[Device]) -> Self {
        let area_names = areas
            .iter()
            .map(|a| (a.area_id.clone(), a.name.clone()))
            .collect();
        let device_areas = devices
            .iter()
            .filter(|d| !d.id.is_empty())
            .filter_map(|d| d.area().map(|area| (d.id.clone(), area.to_owned())))
            .collect();
        Self {
            area_names,
            device_areas,
        }
    }

    /// Resolve an entity's effective area, or `None` when it has none.
    #[must_use]
    pub fn resolve<'a>(&'a self, entity: &'a Entity) -> Option<(&'a str, AreaSource)> {
        if let Some(area) = entity.area() {
            return Some((area, AreaSource::Direct));
        }
        entity
            .device()
            .and_then(|dev| self.device_areas.get(dev))
            .map(|area| (area.as_str(), AreaSource::ViaDevice))
    }
}
