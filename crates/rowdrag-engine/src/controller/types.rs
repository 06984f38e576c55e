//! Core types and constructors for RowReorder.

use rowdrag_common::{ConfigError, PointerSample, PressTarget, ReorderPayload, RowId, TableId};
use rowdrag_config::{validation, RowReorderConfig};
use serde::{Deserialize, Serialize};

use crate::handle::HandleResolver;
use crate::host::{CommitPath, SubmitOutcome};
use crate::session::DragSession;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Escape,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragInput {
    PointerDown {
        sample: PointerSample,
        target: PressTarget,
    },
    PointerMove(PointerSample),
    PointerUp(PointerSample),
    KeyUp(Key),
    AutoscrollTick,
}

/// What a single input did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Ignored,
    Started {
        row: RowId,
        start_index: usize,
    },
    Moved {
        /// Set when the rendered order changed.
        insert_point: Option<usize>,
        drop_allowed: bool,
    },
    Scrolled,
    /// The drop was written back, or there was nothing to write.
    Committed {
        changed: usize,
    },
    /// The drop was handed to the editor; waiting for its result.
    Submitting {
        changed: usize,
    },
    /// The editor did not apply the change; the table was redrawn.
    Reverted {
        outcome: SubmitOutcome,
    },
    Canceled {
        start_index: usize,
    },
}

#[derive(Debug)]
pub(super) enum DragState {
    Idle,
    Dragging(Box<DragSession>),
    AwaitingSubmission(ReorderPayload),
}

/// Drag-and-drop row reordering for one table.
#[derive(Debug)]
pub struct RowReorder {
    pub(super) table: TableId,
    pub(super) config: RowReorderConfig,
    pub(super) resolver: HandleResolver,
    pub(super) commit: CommitPath,
    pub(super) state: DragState,
}

impl RowReorder {
    pub fn new(
        table: TableId,
        config: RowReorderConfig,
        commit: CommitPath,
    ) -> Result<Self, ConfigError> {
        validation::validate(&config)?;
        let resolver = HandleResolver::from_config(&config)?;
        Ok(Self {
            table,
            config,
            resolver,
            commit,
            state: DragState::Idle,
        })
    }

    // -- Accessors --

    pub fn table_id(&self) -> &TableId {
        &self.table
    }

    pub fn config(&self) -> &RowReorderConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enable
    }

    /// Gate new drags. A drag already in progress is not affected.
    pub fn set_enabled(&mut self, enable: bool) {
        self.config.enable = enable;
    }

    pub fn commits_through_editor(&self) -> bool {
        self.commit.is_delegated()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn is_awaiting_submission(&self) -> bool {
        matches!(self.state, DragState::AwaitingSubmission(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(&**session),
            _ => None,
        }
    }

    pub(super) fn take_session(&mut self) -> Option<Box<DragSession>> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging(session) => Some(session),
            other => {
                self.state = other;
                None
            }
        }
    }

    pub(super) fn take_pending(&mut self) -> Option<ReorderPayload> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::AwaitingSubmission(payload) => Some(payload),
            other => {
                self.state = other;
                None
            }
        }
    }
}
