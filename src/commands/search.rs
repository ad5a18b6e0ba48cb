/// `search` command: list the entities living in matching areas.
use crate::cli::OutputCtx;
use crate::cli::args::SearchArgs;
use crate::cli::output::write_search;
use crate::hass::HassCli;
use crate::registry::{
    AreaReport, MatchOptions, RegistryError, SearchOptions, SearchOutcome, fetch_all, search,
};
use crate::types::{AreaOutput, AreaReportOutput, DomainGroupOutput, EntityOutput, SearchOutput};

/// Run `area-search search`.
///
/// A query that matches no area is not an error: the known areas are listed
/// instead.
///
/// # Errors
///
/// Returns `RegistryError` when any of the three registries cannot be fetched.
pub fn run(args: &SearchArgs, hass: &HassCli, ctx: &OutputCtx) -> Result<(), RegistryError> {
    let _t_fetch = ctx.timer("fetch_registries");
    let registries = fetch_all(hass)?;
    drop(_t_fetch);

    let opts = SearchOptions {
        domain: args.domain.clone(),
        matching: MatchOptions { fuzzy: args.fuzzy },
    };

    let _t_search = ctx.timer("search");
    let outcome = search(&registries, &args.query, &opts);
    drop(_t_search);

    write_search(&outcome_to_output(&args.query, outcome), ctx);
    Ok(())
}

fn outcome_to_output(query: &str, outcome: SearchOutcome) -> SearchOutput {
    match outcome {
        SearchOutcome::NoMatch { available } => SearchOutput {
            query: query.to_owned(),
            matched: false,
            areas: Vec::new(),
            available_areas: available
                .into_iter()
                .map(|(area_id, name)| AreaOutput { area_id, name })
                .collect(),
        },
        SearchOutcome::Matched(reports) => SearchOutput {
            query: query.to_owned(),
            matched: true,
            areas: reports.into_iter().map(report_to_output).collect(),
            available_areas: Vec::new(),
        },
    }
}

fn report_to_output(report: AreaReport) -> AreaReportOutput {
    let total_entities = report.total_entities();
    let total_domains = report.domains.len();
    let area_id = report.area_id;

    let domains = report
        .domains
        .into_iter()
        .map(|(domain, hits)| DomainGroupOutput {
            count: hits.len(),
            entities: hits
                .into_iter()
                .map(|h| EntityOutput {
                    entity_id: h.entity_id,
                    name: h.name,
                    domain: domain.clone(),
                    area_id: area_id.clone(),
                    source: h.source,
                })
                .collect(),
            domain,
        })
        .collect();

    AreaReportOutput {
        area_id,
        name: report.name,
        domain_filter: report.domain_filter,
        domains,
        total_entities,
        total_domains,
    }
}
