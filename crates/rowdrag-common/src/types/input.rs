use serde::{Deserialize, Serialize};

use super::Point;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
}

/// One pointer reading in page coordinates. For touch input this is the
/// first touch point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    #[serde(default)]
    pub source: PointerSource,
    pub page: Point,
}

impl PointerSample {
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            source: PointerSource::Mouse,
            page: Point::new(x, y),
        }
    }

    pub fn touch(x: f64, y: f64) -> Self {
        Self {
            source: PointerSource::Touch,
            page: Point::new(x, y),
        }
    }
}
