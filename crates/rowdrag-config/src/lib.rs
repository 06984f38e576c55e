//! Row reorder configuration.
//!
//! Options are resolved once per table: built-in defaults, then host-wide
//! defaults (optionally read from a TOML file), then per-instance options.
//! Every field has a default so partial documents work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rowdrag_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod selector;
pub mod toml_loader;
pub mod validation;

pub use schema::{PartialRowReorderConfig, RowReorderConfig, RowReorderInit, SnapX};
pub use selector::Selector;

use rowdrag_common::ConfigError;

/// Load the host-wide defaults from the platform default path, layer them
/// over the built-in defaults and validate the result.
pub fn load_config() -> Result<RowReorderConfig, ConfigError> {
    let host_defaults = toml_loader::load_default()?;
    let config = RowReorderConfig::default().merged(&host_defaults);
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &RowReorderConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_options() {
        let json = config_to_json(&RowReorderConfig::default());
        for key in [
            "\"data_src\"",
            "\"enable\"",
            "\"selector\"",
            "\"excluded_children\"",
            "\"snap_x\"",
            "\"update\"",
            "\"cancelable\"",
            "\"form_options\"",
        ] {
            assert!(json.contains(key), "missing {key}");
        }
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&RowReorderConfig::default());
        let parsed: RowReorderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, RowReorderConfig::default());
    }
}
