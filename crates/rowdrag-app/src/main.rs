mod cli;
mod replay;
mod scenario;

use std::path::Path;

use rowdrag_config::{toml_loader, RowReorderInit};
use tracing_subscriber::EnvFilter;

use scenario::Scenario;

/// Host-wide defaults from `--defaults`, or the platform default file.
fn load_host_defaults(path: Option<&Path>) -> Option<RowReorderInit> {
    let result = match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    };
    match result {
        Ok(layer) if layer.is_empty() => None,
        Ok(layer) => Some(RowReorderInit::Options(layer)),
        Err(e) => {
            tracing::warn!("Host defaults not loaded, using built-in defaults: {e}");
            None
        }
    }
}

fn main() {
    let args = cli::parse();

    // Logs go to stderr so the report on stdout stays valid JSON
    let log_directive = args.log_level.as_deref().unwrap_or("rowdrag=info");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "rowdrag=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("rowdrag v{} starting...", env!("CARGO_PKG_VERSION"));

    let host_defaults = load_host_defaults(args.defaults.as_deref());

    let scenario = match Scenario::load(&args.scenario) {
        Ok(scenario) => scenario,
        Err(e) => {
            tracing::error!("Failed to load scenario {}: {e}", args.scenario.display());
            std::process::exit(1);
        }
    };

    match replay::run(&scenario, host_defaults.as_ref()) {
        Ok(report) => println!("{}", report.to_json()),
        Err(e) => {
            tracing::error!("Scenario failed: {e}");
            std::process::exit(1);
        }
    }
}
