//! Optional-field layer used for host-wide defaults and per-instance options.

use rowdrag_common::DataSrc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SnapX;

/// One configuration layer. Absent fields leave the layer below untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialRowReorderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_src: Option<DataSrc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_children: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snap_x: Option<SnapX>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_options: Option<Value>,
}

impl PartialRowReorderConfig {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
