/// Area search: match areas, resolve entities, group by domain.
use std::collections::BTreeMap;

use super::matcher::{MatchOptions, match_areas};
use super::model::{Area, Device, Entity};
use super::resolve::{AreaSource, RegistryIndex};

/// The three registry snapshots a search joins.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    pub areas: Vec<Area>,
    pub entities: Vec<Entity>,
    pub devices: Vec<Device>,
}

/// One entity listed under an area.
///
/// Field order is the sort order within a domain group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntityHit {
    pub entity_id: String,
    pub name: String,
    pub source: AreaSource,
}

/// Entities resolved to one matched area, grouped by domain.
#[derive(Debug, Clone)]
pub struct AreaReport {
    pub area_id: String,
    pub name: String,
    /// Domain filter in effect, if any.
    pub domain_filter: Option<String>,
    /// `domain → entities`, each list sorted.
    pub domains: BTreeMap<String, Vec<EntityHit>>,
}

impl AreaReport {
    #[must_use]
    pub fn total_entities(&self) -> usize {
        self.domains.values().map(Vec::len).sum()
    }
}

/// Result of a search.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// No area matched; carries every known `(area_id, name)` sorted by id.
    NoMatch { available: Vec<(String, String)> },
    /// One report per matched area, ascending by `area_id`.
    Matched(Vec<AreaReport>),
}

/// Search options.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Keep only entities of this exact domain. Empty means no filter.
    pub domain: Option<String>,
    pub matching: MatchOptions,
}

/// Run an area search over fetched registries.
///
/// Entities are walked once; each is resolved against the precomputed index
/// and routed to its area's report if that area matched.
#[must_use]
pub fn search(registries: &Registries, query: &str, opts: &SearchOptions) -> SearchOutcome {
    let index = RegistryIndex::build(&registries.areas, &registries.devices);
    let matched = match_areas(&index.area_names, query, opts.matching);

    if matched.is_empty() {
        return SearchOutcome::NoMatch {
            available: index
                .area_names
                .iter()
                .map(|(id, name)| (id.clone(), name.clone()))
                .collect(),
        };
    }

    let domain_filter = opts.domain.as_deref().filter(|d| !d.is_empty());

    let mut reports: BTreeMap<&str, AreaReport> = matched
        .iter()
        .map(|(id, name)| {
            (
                *id,
                AreaReport {
                    area_id: (*id).to_owned(),
                    name: (*name).to_owned(),
                    domain_filter: domain_filter.map(str::to_owned),
                    domains: BTreeMap::new(),
                },
            )
        })
        .collect();

    for entity in &registries.entities {
        if entity.is_disabled() {
            continue;
        }
        let Some((area, source)) = index.resolve(entity) else {
            continue;
        };
        let Some(report) = reports.get_mut(area) else {
            continue;
        };
        let domain = entity.domain();
        if domain_filter.is_some_and(|f| f != domain) {
            continue;
        }
        report
            .domains
            .entry(domain.to_owned())
            .or_default()
            .push(EntityHit {
                entity_id: entity.entity_id.clone(),
                name: entity.display_name().to_owned(),
                source,
            });
    }

    let mut reports: Vec<AreaReport> = reports.into_values().collect();
    for report in &mut reports {
        for hits in report.domains.values_mut() {
            hits.sort();
        }
    }
    SearchOutcome::Matched(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registries() -> Registries {
        Registries {
            areas: serde_json::from_value(json!([
                {"area_id": "kitchen", "name": "Kitchen"},
                {"area_id": "garage", "name": "Garage"},
            ]))
            .unwrap(),
            entities: serde_json::from_value(json!([
                {"entity_id": "light.kit_main", "area_id": "kitchen"},
                {"entity_id": "sensor.kit_temp", "device_id": "d1"},
                {"entity_id": "switch.kit_old", "area_id": "kitchen", "disabled_by": "user"},
                {"entity_id": "light.garage", "device_id": "d2"},
                {"entity_id": "sensor.orphan"},
            ]))
            .unwrap(),
            devices: serde_json::from_value(json!([
                {"id": "d1", "area_id": "kitchen"},
                {"id": "d2", "area_id": "garage"},
            ]))
            .unwrap(),
        }
    }

    fn matched(outcome: SearchOutcome) -> Vec<AreaReport> {
        match outcome {
            SearchOutcome::Matched(reports) => reports,
            SearchOutcome::NoMatch { .. } => panic!("expected a match"),
        }
    }

    #[test]
    fn test_kitchen_groups_by_domain() {
        let reports = matched(search(&registries(), "kitchen", &SearchOptions::default()));
        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.area_id, "kitchen");
        assert_eq!(report.total_entities(), 2);
        assert_eq!(report.domains.len(), 2);
        assert_eq!(report.domains["light"][0].source, AreaSource::Direct);
        assert_eq!(report.domains["sensor"][0].entity_id, "sensor.kit_temp");
        assert_eq!(report.domains["sensor"][0].source, AreaSource::ViaDevice);
    }

    #[test]
    fn test_domain_filter() {
        let opts = SearchOptions {
            domain: Some("sensor".to_owned()),
            ..SearchOptions::default()
        };
        let reports = matched(search(&registries(), "kitchen", &opts));
        let report = &reports[0];
        assert_eq!(report.total_entities(), 1);
        assert_eq!(report.domains.keys().collect::<Vec<_>>(), ["sensor"]);
        assert_eq!(report.domain_filter.as_deref(), Some("sensor"));

        let opts = SearchOptions {
            domain: Some("Light".to_owned()),
            ..SearchOptions::default()
        };
        let reports = matched(search(&registries(), "kitchen", &opts));
        assert!(reports[0].domains.is_empty());
    }

    #[test]
    fn test_empty_domain_filter_ignored() {
        let opts = SearchOptions {
            domain: Some(String::new()),
            ..SearchOptions::default()
        };
        let reports = matched(search(&registries(), "kitchen", &opts));
        assert_eq!(reports[0].total_entities(), 2);
        assert_eq!(reports[0].domain_filter, None);
    }

    #[test]
    fn test_disabled_never_listed() {
        let reports = matched(search(&registries(), "kitchen", &SearchOptions::default()));
        assert!(!reports[0].domains.contains_key("switch"));
    }

    #[test]
    fn test_unresolved_excluded_everywhere() {
        // Empty query matches every area.
        let reports = matched(search(&registries(), "", &SearchOptions::default()));
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| {
            r.domains
                .values()
                .flatten()
                .all(|h| h.entity_id != "sensor.orphan")
        }));
    }

    #[test]
    fn test_no_entities_after_filter() {
        let opts = SearchOptions {
            domain: Some("climate".to_owned()),
            ..SearchOptions::default()
        };
        let reports = matched(search(&registries(), "garage", &opts));
        assert!(reports[0].domains.is_empty());
        assert_eq!(reports[0].total_entities(), 0);
    }

    #[test]
    fn test_no_match_lists_areas_by_id() {
        match search(&registries(), "attic", &SearchOptions::default()) {
            SearchOutcome::NoMatch { available } => {
                let ids: Vec<&str> = available.iter().map(|(id, _)| id.as_str()).collect();
                assert_eq!(ids, ["garage", "kitchen"]);
            }
            SearchOutcome::Matched(_) => panic!("expected no match"),
        }
    }

    #[test]
    fn test_hits_sorted_within_domain() {
        let mut regs = registries();
        regs.entities = serde_json::from_value(json!([
            {"entity_id": "light.b", "area_id": "kitchen"},
            {"entity_id": "light.a", "device_id": "d1"},
        ]))
        .unwrap();
        let reports = matched(search(&regs, "kitchen", &SearchOptions::default()));
        let ids: Vec<&str> = reports[0].domains["light"]
            .iter()
            .map(|h| h.entity_id.as_str())
            .collect();
        assert_eq!(ids, ["light.a", "light.b"]);
    }
}
