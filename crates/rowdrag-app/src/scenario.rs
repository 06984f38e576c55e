//! Scenario files: a table layout, its rows and a script of inputs.

use std::path::Path;

use rowdrag_common::{Area, DataSrc, ElementInfo, Point, ReorderError};
use rowdrag_config::RowReorderInit;
use rowdrag_engine::{Key, SubmitOutcome};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub table: TableLayout,
    pub rows: Vec<RowEntry>,
    /// The table's init option. Absent means `true`.
    #[serde(default = "default_init")]
    pub row_reorder: RowReorderInit,
    /// Commit through a recording editor instead of directly.
    #[serde(default)]
    pub editor: bool,
    /// Veto every `row-reorder` notification.
    #[serde(default)]
    pub veto: bool,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    pub origin: Point,
    pub header_height: f64,
    pub width: f64,
    pub columns: Vec<DataSrc>,
    /// Field the table sorts by on every redraw.
    pub sort: Option<DataSrc>,
    pub window_height: f64,
    pub window_width: f64,
    pub document_height: f64,
    pub horizontal_overflow: bool,
    pub container: Option<Area>,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            origin: Point::new(0.0, 100.0),
            header_height: 40.0,
            width: 300.0,
            columns: vec![DataSrc::Index(0), DataSrc::Index(1)],
            sort: Some(DataSrc::Index(0)),
            window_height: 800.0,
            window_width: 1200.0,
            document_height: 2000.0,
            horizontal_overflow: false,
            container: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RowEntry {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default = "default_row_height")]
    pub height: f64,
    pub data: Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Down {
        /// Index into `rows`.
        row: usize,
        x: f64,
        y: f64,
        #[serde(default)]
        touch: bool,
        /// Element path from the pressed element up to the row. Defaults
        /// to the row's first cell.
        #[serde(default)]
        path: Option<Vec<ElementInfo>>,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        touch: bool,
    },
    Up {
        x: f64,
        y: f64,
        #[serde(default)]
        touch: bool,
    },
    Key {
        key: Key,
    },
    Tick {
        #[serde(default = "default_ticks")]
        count: usize,
    },
    Submission {
        outcome: SubmitOutcome,
    },
}

fn default_init() -> RowReorderInit {
    RowReorderInit::Flag(true)
}

fn default_row_height() -> f64 {
    30.0
}

fn default_ticks() -> usize {
    1
}

impl Scenario {
    pub fn parse(content: &str) -> Result<Self, ReorderError> {
        serde_json::from_str(content)
            .map_err(|e| ReorderError::Scenario(format!("invalid scenario: {e}")))
    }

    pub fn load(path: &Path) -> Result<Self, ReorderError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}
