//! Geometry dimensions of sets and boundary conditions.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryType {
    Point,
    Line,
    Surface,
    Volume,
}

impl GeometryType {
    pub const ALL: [GeometryType; 4] = [
        GeometryType::Point,
        GeometryType::Line,
        GeometryType::Surface,
        GeometryType::Volume,
    ];
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeometryType::Point => "point",
            GeometryType::Line => "line",
            GeometryType::Surface => "surface",
            GeometryType::Volume => "volume",
        };
        f.write_str(name)
    }
}
