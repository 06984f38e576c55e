use serde::{Deserialize, Serialize};

use super::RowId;

/// The parts of an element a handle selector can look at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementInfo {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Position among the parent's element children.
    pub index: usize,
    /// Number of element children of the parent.
    pub siblings: usize,
}

impl ElementInfo {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            siblings: 1,
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn at(mut self, index: usize, siblings: usize) -> Self {
        self.index = index;
        self.siblings = siblings;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// What a pointer-down landed on: the enclosing row (if it belongs to the
/// table) and the element chain from the event target up to, but not
/// including, the row element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressTarget {
    pub row: Option<RowId>,
    pub path: Vec<ElementInfo>,
}

impl PressTarget {
    pub fn new(row: RowId, path: Vec<ElementInfo>) -> Self {
        Self {
            row: Some(row),
            path,
        }
    }

    /// The element the event was dispatched to.
    pub fn element(&self) -> Option<&ElementInfo> {
        self.path.first()
    }
}
