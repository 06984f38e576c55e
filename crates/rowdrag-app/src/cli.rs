use std::path::PathBuf;

use clap::Parser;

/// rowdrag: replay a scripted row drag against an in-memory table.
#[derive(Parser, Debug)]
#[command(name = "rowdrag", version, about)]
pub struct Args {
    /// Scenario file (JSON) with the rows and the input steps.
    #[arg(short = 's', long)]
    pub scenario: PathBuf,

    /// Host-wide defaults (TOML). Falls back to the platform config dir.
    #[arg(long)]
    pub defaults: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "rowdrag",
            "--scenario",
            "drag.json",
            "--defaults",
            "defaults.toml",
            "--log-level",
            "rowdrag=debug",
        ])
        .unwrap();
        assert_eq!(args.scenario, PathBuf::from("drag.json"));
        assert_eq!(args.defaults, Some(PathBuf::from("defaults.toml")));
        assert_eq!(args.log_level.as_deref(), Some("rowdrag=debug"));
    }

    #[test]
    fn scenario_is_required() {
        assert!(Args::try_parse_from(["rowdrag"]).is_err());
    }
}
