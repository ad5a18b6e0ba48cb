#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! area-search — find Home Assistant entities by area.

mod cli;
mod commands;
mod hass;
mod registry;
mod types;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, OutputCtx, write_error};
use hass::HassCli;
use types::ErrorOutput;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version are not failures; usage mistakes exit 1.
            // Everything goes to stdout, like the rest of the report output.
            if !err.use_stderr() {
                let _ = err.print();
                std::process::exit(0);
            }
            print!("{}", err.render());
            std::process::exit(1);
        }
    };

    init_tracing(cli.debug);

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header, cli.debug);
    let hass = HassCli::new(&cli.hass_cli, Duration::from_secs(cli.timeout));

    if let Err(err) = commands::dispatch(&cli.command, &hass, &ctx) {
        tracing::debug!(error = ?err, "command failed");
        let error_output = ErrorOutput::from_registry_error(&err);
        write_error(&error_output, cli.output, cli.json);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise `--debug` selects debug for this crate.
fn init_tracing(debug: bool) {
    let default = if debug { "area_search=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
