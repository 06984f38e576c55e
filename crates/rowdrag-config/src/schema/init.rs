//! Table init option: `row_reorder = true | false | { ... }`.

use serde::{Deserialize, Serialize};

use super::{PartialRowReorderConfig, RowReorderConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowReorderInit {
    Flag(bool),
    Options(PartialRowReorderConfig),
}

impl RowReorderInit {
    fn is_on(&self) -> bool {
        !matches!(self, RowReorderInit::Flag(false))
    }

    fn layer(&self) -> Option<&PartialRowReorderConfig> {
        match self {
            RowReorderInit::Options(layer) => Some(layer),
            RowReorderInit::Flag(_) => None,
        }
    }

    /// Decide whether a table gets row reordering and with which options.
    ///
    /// Either the table's own init option or the host-wide default must
    /// ask for it, and an explicit `false` on the table always wins.
    pub fn resolve(
        init: Option<&RowReorderInit>,
        host_defaults: Option<&RowReorderInit>,
    ) -> Option<RowReorderConfig> {
        let wanted = init.is_some_and(Self::is_on) || host_defaults.is_some_and(Self::is_on);
        if !wanted || matches!(init, Some(RowReorderInit::Flag(false))) {
            return None;
        }

        let mut config = RowReorderConfig::default();
        if let Some(layer) = host_defaults.and_then(Self::layer) {
            config.apply(layer);
        }
        if let Some(layer) = init.and_then(Self::layer) {
            config.apply(layer);
        }
        Some(config)
    }
}
