//! Full configuration validation.
//!
//! Each check pushes onto a shared error list; all problems are reported
//! together in a single `ConfigError`.

mod helpers;


use crate::schema::{RowReorderConfig, SnapX};
use rowdrag_common::{ConfigError, DataSrc};
use serde_json::Value;

use helpers::validate_selector;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &RowReorderConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_selector(&mut errors, "selector", &config.selector, false);
    validate_selector(
        &mut errors,
        "excluded_children",
        &config.excluded_children,
        true,
    );

    if let DataSrc::Path(path) = &config.data_src {
        if path.split('.').any(str::is_empty) {
            errors.push(format!("data_src = '{path}' has an empty path segment"));
        }
    }

    if let SnapX::Offset(offset) = config.snap_x {
        if !offset.is_finite() {
            errors.push(format!("snap_x = {offset} is not a finite offset"));
        }
    }

    if !matches!(config.form_options, Value::Object(_) | Value::Null) {
        errors.push("form_options must be a table".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
