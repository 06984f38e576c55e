//! Core TOML loading: read a defaults layer from a path or the platform default.

use crate::schema::{PartialRowReorderConfig, RowReorderConfig};
use crate::validation;
use rowdrag_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse a defaults layer from TOML text.
pub fn load_from_str(content: &str) -> Result<PartialRowReorderConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load a defaults layer from a specific TOML file path.
///
/// The layer is validated as if applied over the built-in defaults; a
/// validation failure is logged and the parsed layer is returned as-is so
/// the per-instance layer still has a chance to fix it.
pub fn load_from_path(path: &Path) -> Result<PartialRowReorderConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let layer = load_from_str(&content)?;

    if let Err(e) = validation::validate(&RowReorderConfig::default().merged(&layer)) {
        warn!("host defaults in {} do not validate: {e}", path.display());
    }

    info!("loaded row reorder defaults from {}", path.display());
    Ok(layer)
}

/// Load the defaults layer from the platform-specific default path.
///
/// On Linux: `~/.config/rowdrag/defaults.toml`
/// On macOS: `~/Library/Application Support/rowdrag/defaults.toml`
///
/// If the file does not exist, a commented template is written and an
/// empty layer is returned.
pub fn load_default() -> Result<PartialRowReorderConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(layer) => Ok(layer),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no defaults found at {}, creating template", path.display());
            create_default_config(&path)?;
            Ok(PartialRowReorderConfig::default())
        }
        Err(e) => Err(e),
    }
}
