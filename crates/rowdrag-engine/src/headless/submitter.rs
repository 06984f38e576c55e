use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use rowdrag_common::{DataSrc, RowId};
use serde::Serialize;
use serde_json::Value;

use crate::host::Submitter;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum SubmitCall {
    Edit {
        rows: Vec<RowId>,
        form_options: Value,
    },
    MultiSet {
        field: DataSrc,
        values: BTreeMap<String, Value>,
    },
    Submit,
}

pub type SubmitLog = Rc<RefCell<Vec<SubmitCall>>>;

/// Editor that only records what it was asked to do. The outcome is
/// reported separately, so tests decide when and how it completes.
#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    log: SubmitLog,
}

impl RecordingSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the call log, readable after the submitter has been
    /// moved into a controller.
    pub fn log(&self) -> SubmitLog {
        Rc::clone(&self.log)
    }
}

impl Submitter for RecordingSubmitter {
    fn edit(&mut self, rows: &[RowId], form_options: &Value) {
        self.log.borrow_mut().push(SubmitCall::Edit {
            rows: rows.to_vec(),
            form_options: form_options.clone(),
        });
    }

    fn multi_set(&mut self, field: &DataSrc, values: &BTreeMap<String, Value>) {
        self.log.borrow_mut().push(SubmitCall::MultiSet {
            field: field.clone(),
            values: values.clone(),
        });
    }

    fn submit(&mut self) {
        self.log.borrow_mut().push(SubmitCall::Submit);
    }
}
