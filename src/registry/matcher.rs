/// Area matching: bidirectional substring (default) or fuzzy.
use std::collections::BTreeMap;

use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

/// Matching options.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchOptions {
    /// Score the query with the fuzzy matcher instead of the substring test.
    pub fuzzy: bool,
}

/// Case-insensitive substring test in both directions.
///
/// True when the query is contained in the id or name, or when the id or name
/// is contained in the query. Abbreviations therefore hit longer names
/// (`kit` → `Kitchen`) and verbose queries hit short ids
/// (`kitchen lights` → `kitchen`).
#[must_use]
pub fn area_matches(area_id: &str, name: &str, query: &str) -> bool {
    let q = query.to_lowercase();
    let id = area_id.to_lowercase();
    let name = name.to_lowercase();
    q.contains(&id) || q.contains(&name) || id.contains(&q) || name.contains(&q)
}

/// Every `(area_id, name)` pair accepted by the query, in ascending id order.
///
/// All matches are returned; there is no ambiguity resolution.
#[must_use]
pub fn match_areas<'a>(
    area_names: &'a BTreeMap<String, String>,
    query: &str,
    opts: MatchOptions,
) -> Vec<(&'a str, &'a str)> {
    let pairs = area_names.iter().map(|(id, name)| (id.as_str(), name.as_str()));
    if opts.fuzzy {
        return fuzzy_matches(pairs, query);
    }
    pairs.filter(|(id, name)| area_matches(id, name, query)).collect()
}

fn fuzzy_matches<'a>(
    pairs: impl Iterator<Item = (&'a str, &'a str)>,
    query: &str,
) -> Vec<(&'a str, &'a str)> {
    let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);
    let mut buf = Vec::new();

    pairs
        .filter(|(id, name)| {
            [*id, *name].iter().any(|field| {
                let haystack = Utf32Str::new(field, &mut buf);
                pattern.score(haystack, &mut matcher).is_some()
            })
        })
        .collect()
}
