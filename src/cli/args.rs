/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::hass::{DEFAULT_BINARY, DEFAULT_TIMEOUT_SECS};

/// area-search — find Home Assistant entities by area.
#[derive(Debug, Parser)]
#[command(
    name = "area-search",
    about = "Find Home Assistant entities by area, resolving device-inherited areas",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Log hass-cli calls and phase timing to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// hass-cli binary to invoke.
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "AREA_SEARCH_HASS_CLI",
        default_value = DEFAULT_BINARY
    )]
    pub hass_cli: PathBuf,

    /// Seconds to wait for each hass-cli call before giving up.
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        env = "AREA_SEARCH_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain report lines (human-readable).
    #[default]
    Text,
    /// Aligned table with headers.
    Table,
    /// JSON array or object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Identifiers only, one per line (for piping to other commands).
    Id,
}

impl OutputFormat {
    /// Whether this format emits JSON.
    #[must_use]
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json | Self::Compact | Self::Ndjson)
    }
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all areas, sorted by name.
    ListAreas,
    /// List the entities that live in the areas matching a query.
    Search(SearchArgs),
    /// Verify that hass-cli can be run.
    Check,
}

/// Arguments for `area-search search`.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Area id or name, or any part of one. Case-insensitive.
    pub query: String,

    /// Only list entities of this domain (e.g. light, sensor).
    #[arg(long, value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Fuzzy-match the query against area ids and names.
    #[arg(long)]
    pub fuzzy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_with_domain() {
        let cli = Cli::try_parse_from(["area-search", "search", "kitchen", "--domain", "light"])
            .unwrap();
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.query, "kitchen");
                assert_eq!(args.domain.as_deref(), Some("light"));
                assert!(!args.fuzzy);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_domain_requires_value() {
        assert!(Cli::try_parse_from(["area-search", "search", "kitchen", "--domain"]).is_err());
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["area-search", "search"]).is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(Cli::try_parse_from(["area-search", "frobnicate"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["area-search", "list-areas", "--json", "--timeout", "5"])
            .unwrap();
        assert!(matches!(cli.command, Command::ListAreas));
        assert!(cli.json);
        assert_eq!(cli.timeout, 5);
    }
}
