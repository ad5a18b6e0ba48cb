/// Output formatting: text report, table, JSON modes, identifiers.
use std::fmt::Write as _;
use std::io::Write;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;
use tracing::debug;

use super::args::OutputFormat;
use crate::types::{AreaOutput, CheckOutput, ErrorOutput, SearchOutput};

/// Resolve the effective output format, honoring the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, report phase timings.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Reports elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Areas ---

/// Write an area listing to stdout.
pub fn write_areas(areas: &[AreaOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(areas),
        OutputFormat::Compact => print_compact_json(areas),
        OutputFormat::Ndjson => print_ndjson(areas),
        OutputFormat::Id => {
            for a in areas {
                println!("{}", a.area_id);
            }
        }
        OutputFormat::Table => write_areas_table(areas, ctx),
        OutputFormat::Text => print!("{}", render_areas_text(areas)),
    }
}

/// Render the `list-areas` text report.
#[must_use]
pub fn render_areas_text(areas: &[AreaOutput]) -> String {
    if areas.is_empty() {
        return "No areas found.\n".to_owned();
    }
    let mut out = format!("Areas ({}):\n", areas.len());
    for a in areas {
        let _ = writeln!(
            out,
            "  {} — {}",
            or_placeholder(&a.area_id),
            or_placeholder(&a.name)
        );
    }
    out
}

fn or_placeholder(s: &str) -> &str {
    if s.is_empty() { "?" } else { s }
}

fn push_area_lines(out: &mut String, areas: &[AreaOutput]) {
    for a in areas {
        let _ = writeln!(out, "  {} — {}", a.area_id, a.name);
    }
}

fn write_areas_table(areas: &[AreaOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["AREA ID", "NAME"]);
    }
    for a in areas {
        table.add_row([a.area_id.as_str(), a.name.as_str()]);
    }
    println!("{table}");
}

// --- Search results ---

/// Write search results to stdout.
pub fn write_search(result: &SearchOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Compact => print_compact_json(result),
        OutputFormat::Ndjson => {
            let entities: Vec<_> = result
                .areas
                .iter()
                .flat_map(|a| &a.domains)
                .flat_map(|d| &d.entities)
                .collect();
            print_ndjson(&entities);
        }
        OutputFormat::Id => {
            for area in &result.areas {
                for group in &area.domains {
                    for e in &group.entities {
                        println!("{}", e.entity_id);
                    }
                }
            }
        }
        OutputFormat::Table => write_search_table(result, ctx),
        OutputFormat::Text => print!("{}", render_search_text(result)),
    }
}

/// Render the `search` text report.
#[must_use]
pub fn render_search_text(result: &SearchOutput) -> String {
    let mut out = String::new();

    if !result.matched {
        let _ = writeln!(out, "No area matching \"{}\" found.\n", result.query);
        out.push_str("Available areas:\n");
        push_area_lines(&mut out, &result.available_areas);
        return out;
    }

    for area in &result.areas {
        let _ = writeln!(
            out,
            "## Entities in {} (area_id: {})\n",
            area.name, area.area_id
        );

        if area.domains.is_empty() {
            let filter_note = area
                .domain_filter
                .as_deref()
                .map(|d| format!(" (domain: {d})"))
                .unwrap_or_default();
            let _ = writeln!(out, "No entities found in \"{}\"{filter_note}.", area.name);
            continue;
        }

        for group in &area.domains {
            let _ = writeln!(out, "{} ({}):", group.domain, group.count);
            for e in &group.entities {
                let _ = writeln!(out, "  {} — {} [{}]", e.entity_id, e.name, e.source);
            }
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "Total: {} entities in {} domains",
            area.total_entities, area.total_domains
        );
    }
    out
}

fn write_search_table(result: &SearchOutput, ctx: &OutputCtx) {
    if !result.matched {
        println!("No area matching \"{}\" found.", result.query);
        write_areas_table(&result.available_areas, ctx);
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["AREA", "DOMAIN", "ENTITY", "NAME", "SOURCE"]);
    }
    for area in &result.areas {
        for group in &area.domains {
            for e in &group.entities {
                table.add_row([
                    area.area_id.as_str(),
                    group.domain.as_str(),
                    e.entity_id.as_str(),
                    e.name.as_str(),
                    &e.source.to_string(),
                ]);
            }
        }
    }
    println!("{table}");
}

// --- Check ---

/// Write the `check` result to stdout.
pub fn write_check(result: &CheckOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Compact => print_compact_json(result),
        OutputFormat::Ndjson => print_ndjson(&[result]),
        OutputFormat::Id => println!("{}", result.version),
        OutputFormat::Text | OutputFormat::Table => println!("hass-cli ready: {}", result.version),
    }
}

// --- Error output ---

/// Write a structured error to stdout.
///
/// Text formats get a single `Error: <message>` line.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if fmt.is_json() {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            debug!(phase = self.label, "{ms:.2}ms");
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_ndjson<T: Serialize>(values: &[T]) {
    for v in values {
        match serde_json::to_string(v) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        }
    }
}
