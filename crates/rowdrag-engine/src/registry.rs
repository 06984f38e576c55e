//! One controller per table, keyed by table identity.

use std::collections::HashMap;

use rowdrag_common::{ConfigError, TableId};
use rowdrag_config::{RowReorderConfig, RowReorderInit};
use tracing::{debug, info};

use crate::controller::RowReorder;
use crate::host::CommitPath;
use crate::surface::Surface;

#[derive(Debug, Default)]
pub struct Registry {
    controllers: HashMap<TableId, RowReorder>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a controller. A table that already has one is left alone and
    /// `Ok(false)` is returned.
    pub fn attach(
        &mut self,
        table: TableId,
        config: RowReorderConfig,
        commit: CommitPath,
    ) -> Result<bool, ConfigError> {
        if self.controllers.contains_key(&table) {
            debug!(%table, "row reorder already attached");
            return Ok(false);
        }
        let controller = RowReorder::new(table.clone(), config, commit)?;
        info!(%table, delegated = controller.commits_through_editor(), "row reorder attached");
        self.controllers.insert(table, controller);
        Ok(true)
    }

    /// Attach from the table's init option, falling back to host-wide
    /// defaults. Returns `Ok(false)` when neither asks for reordering.
    pub fn attach_from_init(
        &mut self,
        table: TableId,
        init: Option<&RowReorderInit>,
        host_defaults: Option<&RowReorderInit>,
        commit: CommitPath,
    ) -> Result<bool, ConfigError> {
        match RowReorderInit::resolve(init, host_defaults) {
            Some(config) => self.attach(table, config, commit),
            None => Ok(false),
        }
    }

    pub fn get(&self, table: &TableId) -> Option<&RowReorder> {
        self.controllers.get(table)
    }

    pub fn get_mut(&mut self, table: &TableId) -> Option<&mut RowReorder> {
        self.controllers.get_mut(table)
    }

    /// Returns `false` if the table has no controller.
    pub fn enable(&mut self, table: &TableId, enable: bool) -> bool {
        match self.controllers.get_mut(table) {
            Some(controller) => {
                controller.set_enabled(enable);
                true
            }
            None => false,
        }
    }

    pub fn disable(&mut self, table: &TableId) -> bool {
        self.enable(table, false)
    }

    /// Tear down and forget a table's controller.
    pub fn destroy<S: Surface + ?Sized>(&mut self, table: &TableId, surface: &mut S) -> bool {
        match self.controllers.remove(table) {
            Some(mut controller) => {
                controller.destroy(surface);
                info!(%table, "row reorder destroyed");
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}
