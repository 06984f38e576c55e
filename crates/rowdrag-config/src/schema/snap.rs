//! Horizontal snapping of the floating clone.

use serde::{Deserialize, Serialize};

/// `false` lets the clone follow the pointer horizontally, `true` locks it
/// to the row's original left edge and a number locks it to that edge plus
/// a fixed offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SnapXRepr", into = "SnapXRepr")]
pub enum SnapX {
    #[default]
    Free,
    Locked,
    Offset(f64),
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum SnapXRepr {
    Flag(bool),
    Offset(f64),
}

impl From<SnapXRepr> for SnapX {
    fn from(repr: SnapXRepr) -> Self {
        match repr {
            SnapXRepr::Flag(false) => SnapX::Free,
            SnapXRepr::Flag(true) => SnapX::Locked,
            SnapXRepr::Offset(offset) => SnapX::Offset(offset),
        }
    }
}

impl From<SnapX> for SnapXRepr {
    fn from(snap: SnapX) -> Self {
        match snap {
            SnapX::Free => SnapXRepr::Flag(false),
            SnapX::Locked => SnapXRepr::Flag(true),
            SnapX::Offset(offset) => SnapXRepr::Offset(offset),
        }
    }
}

impl SnapX {
    /// Left edge for the clone given the row's original left edge, or
    /// `None` when the pointer decides.
    pub fn fixed_left(&self, origin_left: f64) -> Option<f64> {
        match self {
            SnapX::Free => None,
            SnapX::Locked => Some(origin_left),
            SnapX::Offset(offset) => Some(origin_left + offset),
        }
    }
}
