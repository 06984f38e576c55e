//! Data-path access into a row's data record.
//!
//! A data source is either an integer (array index, or the stringified key
//! of an object) or a dotted path such as `"meta.position"` or `"cells.2"`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::errors::ReorderError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataSrc {
    Index(usize),
    Path(String),
}

impl Default for DataSrc {
    fn default() -> Self {
        DataSrc::Index(0)
    }
}

impl fmt::Display for DataSrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSrc::Index(i) => write!(f, "{i}"),
            DataSrc::Path(p) => f.write_str(p),
        }
    }
}

impl DataSrc {
    pub fn segments(&self) -> Vec<String> {
        match self {
            DataSrc::Index(i) => vec![i.to_string()],
            DataSrc::Path(p) => p.split('.').map(str::to_string).collect(),
        }
    }

    /// Read the field this path points at.
    pub fn read<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        self.segments()
            .iter()
            .try_fold(record, |current, segment| step(current, segment))
    }

    /// Write `value` at this path, creating intermediate objects for
    /// missing object keys.
    pub fn write(&self, record: &mut Value, value: Value) -> Result<(), ReorderError> {
        let segments = self.segments();
        let Some((last, parents)) = segments.split_last() else {
            return Err(ReorderError::DataPath("empty data path".into()));
        };

        let mut current = record;
        for segment in parents {
            current = step_mut(current, segment)?;
        }
        if current.is_null() {
            *current = Value::Object(Map::new());
        }

        match current {
            Value::Array(items) => {
                let index = parse_index(last)?;
                match items.get_mut(index) {
                    Some(slot) => {
                        *slot = value;
                        Ok(())
                    }
                    None => Err(ReorderError::DataPath(format!(
                        "index {index} out of bounds for array of {}",
                        items.len()
                    ))),
                }
            }
            Value::Object(map) => {
                map.insert(last.clone(), value);
                Ok(())
            }
            other => Err(ReorderError::DataPath(format!(
                "cannot set '{last}' on a {}",
                kind(other)
            ))),
        }
    }
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        Value::Object(map) => map.get(segment),
        _ => None,
    }
}

fn step_mut<'a>(current: &'a mut Value, segment: &str) -> Result<&'a mut Value, ReorderError> {
    if current.is_null() {
        *current = Value::Object(Map::new());
    }
    match current {
        Value::Array(items) => {
            let index = parse_index(segment)?;
            let len = items.len();
            items.get_mut(index).ok_or_else(|| {
                ReorderError::DataPath(format!("index {index} out of bounds for array of {len}"))
            })
        }
        Value::Object(map) => Ok(map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()))),
        other => Err(ReorderError::DataPath(format!(
            "cannot descend into '{segment}' of a {}",
            kind(other)
        ))),
    }
}

fn parse_index(segment: &str) -> Result<usize, ReorderError> {
    segment
        .parse::<usize>()
        .map_err(|_| ReorderError::DataPath(format!("'{segment}' is not an array index")))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn index_reads_array_cell() {
        let row = json!([10, "Alice"]);
        assert_eq!(DataSrc::Index(0).read(&row), Some(&json!(10)));
        assert_eq!(DataSrc::Index(1).read(&row), Some(&json!("Alice")));
        assert_eq!(DataSrc::Index(5).read(&row), None);
    }

    #[test]
    fn index_reads_object_key() {
        let row = json!({"0": "zero"});
        assert_eq!(DataSrc::Index(0).read(&row), Some(&json!("zero")));
    }

    #[test]
    fn dotted_path_reads_nested() {
        let row = json!({"meta": {"order": 3}, "cells": [1, 2, 7]});
        assert_eq!(
            DataSrc::Path("meta.order".into()).read(&row),
            Some(&json!(3))
        );
        assert_eq!(DataSrc::Path("cells.2".into()).read(&row), Some(&json!(7)));
        assert_eq!(DataSrc::Path("meta.missing".into()).read(&row), None);
    }

    #[test]
    fn write_replaces_array_cell() {
        let mut row = json!([10, "Alice"]);
        DataSrc::Index(0).write(&mut row, json!(30)).unwrap();
        assert_eq!(row, json!([30, "Alice"]));
    }

    #[test]
    fn write_creates_intermediate_objects() {
        let mut row = json!({"name": "x"});
        DataSrc::Path("meta.order".into())
            .write(&mut row, json!(2))
            .unwrap();
        assert_eq!(row, json!({"name": "x", "meta": {"order": 2}}));
    }

    #[test]
    fn write_out_of_bounds_fails() {
        let mut row = json!([1]);
        let err = DataSrc::Index(3).write(&mut row, json!(0)).unwrap_err();
        assert!(matches!(err, ReorderError::DataPath(_)));
    }

    #[test]
    fn write_into_scalar_fails() {
        let mut row = json!({"order": 5});
        let err = DataSrc::Path("order.inner".into())
            .write(&mut row, json!(1))
            .unwrap_err();
        assert!(err.to_string().contains("number"));
    }

    #[test]
    fn deserializes_from_number_or_string() {
        let idx: DataSrc = serde_json::from_str("2").unwrap();
        assert_eq!(idx, DataSrc::Index(2));
        let path: DataSrc = serde_json::from_str("\"meta.order\"").unwrap();
        assert_eq!(path, DataSrc::Path("meta.order".into()));
    }

    #[test]
    fn display_matches_source() {
        assert_eq!(DataSrc::Index(0).to_string(), "0");
        assert_eq!(DataSrc::Path("a.b".into()).to_string(), "a.b");
    }
}
