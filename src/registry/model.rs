/// Registry records as returned by `hass-cli -o json <kind> list`.
///
/// Only the fields the join needs are decoded; everything else is ignored.
/// Missing identifiers decode as empty strings and empty strings count as
/// absent wherever an id or name is consulted.
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// An area (room, zone) from `area list`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Area {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub area_id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
}

/// A device from `device list`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Device {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub id: String,
    #[serde(default)]
    pub area_id: Option<String>,
}

impl Device {
    /// The assigned area, if any.
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        non_empty(self.area_id.as_deref())
    }
}

/// An entity from `entity list`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entity {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub entity_id: String,
    #[serde(default)]
    pub area_id: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub disabled_by: Option<Value>,
}

impl Entity {
    /// Area assigned directly on the entity.
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        non_empty(self.area_id.as_deref())
    }

    /// Owning device, if any.
    #[must_use]
    pub fn device(&self) -> Option<&str> {
        non_empty(self.device_id.as_deref())
    }

    /// Text before the first `.` of the entity id, or `""` when there is none.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.entity_id
            .split_once('.')
            .map_or("", |(domain, _)| domain)
    }

    /// `name`, else `original_name`, else the entity id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref())
            .or_else(|| non_empty(self.original_name.as_deref()))
            .unwrap_or(self.entity_id.as_str())
    }

    /// Whether `disabled_by` carries a truthy value.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled_by.as_ref().is_some_and(is_truthy)
    }
}

fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// JSON truthiness: null, false, zero, and empty strings/arrays/objects are falsy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entity(value: Value) -> Entity {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_domain() {
        assert_eq!(entity(json!({"entity_id": "light.kitchen"})).domain(), "light");
        assert_eq!(entity(json!({"entity_id": "sensor.a.b"})).domain(), "sensor");
        assert_eq!(entity(json!({"entity_id": "nodot"})).domain(), "");
        assert_eq!(entity(json!({})).domain(), "");
    }

    #[test]
    fn test_display_name_precedence() {
        let e = entity(json!({"entity_id": "light.a", "name": "Custom", "original_name": "Orig"}));
        assert_eq!(e.display_name(), "Custom");

        let e = entity(json!({"entity_id": "light.a", "name": null, "original_name": "Orig"}));
        assert_eq!(e.display_name(), "Orig");

        let e = entity(json!({"entity_id": "light.a", "name": "", "original_name": ""}));
        assert_eq!(e.display_name(), "light.a");
    }

    #[test]
    fn test_disabled_truthiness() {
        assert!(entity(json!({"disabled_by": "user"})).is_disabled());
        assert!(entity(json!({"disabled_by": "integration"})).is_disabled());
        assert!(!entity(json!({"disabled_by": null})).is_disabled());
        assert!(!entity(json!({"disabled_by": ""})).is_disabled());
        assert!(!entity(json!({"disabled_by": false})).is_disabled());
        assert!(!entity(json!({})).is_disabled());
    }

    #[test]
    fn test_empty_area_is_absent() {
        let e = entity(json!({"entity_id": "light.a", "area_id": "", "device_id": ""}));
        assert_eq!(e.area(), None);
        assert_eq!(e.device(), None);
    }

    #[test]
    fn test_null_ids_decode_empty() {
        let area: Area = serde_json::from_value(json!({"area_id": "x", "name": null})).unwrap();
        assert_eq!(area.name, "");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let area: Area =
            serde_json::from_value(json!({"area_id": "kitchen", "name": "Kitchen", "picture": null}))
                .unwrap();
        assert_eq!(area.area_id, "kitchen");
    }
}
