//! Configuration schema types for row reordering.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod init;
mod partial;
mod snap;

pub use init::*;
pub use partial::*;
pub use snap::*;

use rowdrag_common::DataSrc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Resolved options for one table instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowReorderConfig {
    /// Data path read and written on each row's data record.
    pub data_src: DataSrc,
    /// Master switch for starting new drags.
    pub enable: bool,
    /// Descendant of a row that starts a drag.
    pub selector: String,
    /// Elements inside `selector` that must not start a drag.
    pub excluded_children: String,
    /// Horizontal behaviour of the floating clone.
    pub snap_x: SnapX,
    /// Write the swapped values back into the row data on drop.
    pub update: bool,
    /// Enables ESC and drop-outside-body cancellation.
    pub cancelable: bool,
    /// Passed verbatim to the submission collaborator.
    pub form_options: Value,
}

impl Default for RowReorderConfig {
    fn default() -> Self {
        Self {
            data_src: DataSrc::Index(0),
            enable: true,
            selector: "td:first-child".into(),
            excluded_children: "a".into(),
            snap_x: SnapX::Free,
            update: true,
            cancelable: false,
            form_options: Value::Object(Map::new()),
        }
    }
}

impl RowReorderConfig {
    /// Overlay every option present in `layer`.
    pub fn apply(&mut self, layer: &PartialRowReorderConfig) {
        if let Some(data_src) = &layer.data_src {
            self.data_src = data_src.clone();
        }
        if let Some(enable) = layer.enable {
            self.enable = enable;
        }
        if let Some(selector) = &layer.selector {
            self.selector = selector.clone();
        }
        if let Some(excluded) = &layer.excluded_children {
            self.excluded_children = excluded.clone();
        }
        if let Some(snap_x) = layer.snap_x {
            self.snap_x = snap_x;
        }
        if let Some(update) = layer.update {
            self.update = update;
        }
        if let Some(cancelable) = layer.cancelable {
            self.cancelable = cancelable;
        }
        if let Some(form_options) = &layer.form_options {
            self.form_options = form_options.clone();
        }
    }

    pub fn merged(mut self, layer: &PartialRowReorderConfig) -> Self {
        self.apply(layer);
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_documented_values() {
        let config = RowReorderConfig::default();
        assert_eq!(config.data_src, DataSrc::Index(0));
        assert!(config.enable);
        assert_eq!(config.selector, "td:first-child");
        assert_eq!(config.excluded_children, "a");
        assert_eq!(config.snap_x, SnapX::Free);
        assert!(config.update);
        assert!(!config.cancelable);
        assert_eq!(config.form_options, json!({}));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let toml_str = r#"
data_src = "meta.position"
cancelable = true
snap_x = true
"#;
        let config: RowReorderConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data_src, DataSrc::Path("meta.position".into()));
        assert!(config.cancelable);
        assert_eq!(config.snap_x, SnapX::Locked);
        // Defaults preserved
        assert_eq!(config.selector, "td:first-child");
        assert!(config.update);
    }

    #[test]
    fn apply_overrides_only_present_fields() {
        let mut config = RowReorderConfig::default();
        config.apply(&PartialRowReorderConfig {
            selector: Some(".handle".into()),
            update: Some(false),
            ..Default::default()
        });
        assert_eq!(config.selector, ".handle");
        assert!(!config.update);
        assert_eq!(config.excluded_children, "a");
        assert!(config.enable);
    }

    #[test]
    fn later_layers_win() {
        let host = PartialRowReorderConfig {
            cancelable: Some(true),
            snap_x: Some(SnapX::Offset(4.0)),
            ..Default::default()
        };
        let instance = PartialRowReorderConfig {
            snap_x: Some(SnapX::Locked),
            ..Default::default()
        };
        let config = RowReorderConfig::default()
            .merged(&host)
            .merged(&instance);
        assert!(config.cancelable);
        assert_eq!(config.snap_x, SnapX::Locked);
    }

    #[test]
    fn form_options_accept_tables() {
        let toml_str = r#"
[form_options]
submit = "all"
"#;
        let config: RowReorderConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.form_options, json!({"submit": "all"}));
    }
}
