//! Boundary conditions and couplings attached to geometry sets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EntityKind, ModelError, Result};
use crate::geometry::GeometryType;
use crate::ids::{FunctionId, GeometrySetId};
use crate::numbering::GlobalNumbering;

/// Placeholder in condition templates, replaced in order.
pub const PLACEHOLDER: &str = "{}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    Dirichlet,
    Neumann,
    MomentEulerBernoulli,
    BeamToSolidVolumeMeshtying,
    BeamToSolidSurfaceMeshtying,
    BeamToSolidSurfaceContact,
    PointCoupling,
}

impl BoundaryKind {
    pub const ALL: [BoundaryKind; 7] = [
        BoundaryKind::Dirichlet,
        BoundaryKind::Neumann,
        BoundaryKind::MomentEulerBernoulli,
        BoundaryKind::BeamToSolidVolumeMeshtying,
        BoundaryKind::BeamToSolidSurfaceMeshtying,
        BoundaryKind::BeamToSolidSurfaceContact,
        BoundaryKind::PointCoupling,
    ];
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoundaryKind::Dirichlet => "dirichlet",
            BoundaryKind::Neumann => "neumann",
            BoundaryKind::MomentEulerBernoulli => "moment_euler_bernoulli",
            BoundaryKind::BeamToSolidVolumeMeshtying => "beam_to_solid_volume_meshtying",
            BoundaryKind::BeamToSolidSurfaceMeshtying => "beam_to_solid_surface_meshtying",
            BoundaryKind::BeamToSolidSurfaceContact => "beam_to_solid_surface_contact",
            BoundaryKind::PointCoupling => "point_coupling",
        };
        f.write_str(name)
    }
}

/// Value substituted for one `{}` in a condition template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Written as the global number of the function
    Function(FunctionId),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouplingType {
    /// Positions coupled, rotations free
    Joint,
    /// Positions and rotations coupled
    Fix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Condition text written unchanged
    Text(String),
    /// Condition text with `{}` placeholders
    Template {
        text: String,
        replacements: Vec<Replacement>,
    },
    /// DOF string derived from the beams attached to the coupled nodes
    Coupling(CouplingType),
}

/// A boundary condition, keyed by `(kind, geometry)` in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCondition {
    pub kind: BoundaryKind,
    pub geometry: GeometryType,
    pub geometry_set: GeometrySetId,
    pub condition: Condition,
    /// Couplings only: require all nodes of the set at one position
    pub check_overlapping_nodes: bool,
    /// Read from an existing deck; skips the position check
    pub from_dat: bool,
    pub comments: Vec<String>,
}

impl BoundaryCondition {
    pub fn new(
        kind: BoundaryKind,
        geometry: GeometryType,
        geometry_set: GeometrySetId,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            geometry,
            geometry_set,
            condition: Condition::Text(text.into()),
            check_overlapping_nodes: true,
            from_dat: false,
            comments: Vec::new(),
        }
    }

    /// Condition with `{}` placeholders filled from `replacements` at write time.
    pub fn template(
        kind: BoundaryKind,
        geometry: GeometryType,
        geometry_set: GeometrySetId,
        text: impl Into<String>,
        replacements: Vec<Replacement>,
    ) -> Self {
        Self {
            condition: Condition::Template {
                text: text.into(),
                replacements,
            },
            ..Self::new(kind, geometry, geometry_set, "")
        }
    }

    /// Point coupling whose DOFs follow from the attached beam elements.
    pub fn coupling(geometry_set: GeometrySetId, coupling_type: CouplingType) -> Self {
        Self {
            condition: Condition::Coupling(coupling_type),
            ..Self::new(
                BoundaryKind::PointCoupling,
                GeometryType::Point,
                geometry_set,
                "",
            )
        }
    }

    /// Point coupling with an explicit condition string.
    pub fn coupling_text(geometry_set: GeometrySetId, text: impl Into<String>) -> Self {
        Self::new(
            BoundaryKind::PointCoupling,
            GeometryType::Point,
            geometry_set,
            text,
        )
    }

    pub fn without_overlap_check(mut self) -> Self {
        self.check_overlapping_nodes = false;
        self
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    pub fn is_coupling(&self) -> bool {
        self.kind == BoundaryKind::PointCoupling
    }

    /// Whether adding this condition runs the coincident-node check.
    pub fn needs_position_check(&self) -> bool {
        self.is_coupling() && self.check_overlapping_nodes && !self.from_dat
    }

    pub fn dat_line(set_number: usize, data: &str) -> String {
        format!("E {set_number} - {data}")
    }
}

/// Substitute every `{}` of `text` in order.
pub fn fill_template(
    text: &str,
    replacements: &[Replacement],
    numbering: &GlobalNumbering,
) -> Result<String> {
    let expected = text.matches(PLACEHOLDER).count();
    if expected != replacements.len() {
        return Err(ModelError::Placeholder {
            data: text.to_string(),
            expected,
            found: replacements.len(),
        });
    }

    let mut pieces = text.split(PLACEHOLDER);
    let mut out = pieces.next().unwrap_or_default().to_string();
    for (replacement, piece) in replacements.iter().zip(pieces) {
        match replacement {
            Replacement::Function(function) => {
                out.push_str(&numbering.function(*function)?.to_string())
            }
            Replacement::Text(value) => out.push_str(value),
        }
        out.push_str(piece);
    }
    Ok(out)
}

/// A condition line decoded from a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedCondition {
    pub set_number: usize,
    pub data: String,
}

impl IndexedCondition {
    /// Decode `E <set> - <data>`.
    pub fn from_dat(line: &str) -> Result<Self> {
        let invalid = || {
            ModelError::invalid_line(
                EntityKind::BoundaryCondition,
                line,
                "expected `E <set> - <data>`",
            )
        };
        let rest = line.trim().strip_prefix('E').ok_or_else(invalid)?;
        let (number, rest) = rest.trim_start().split_once(char::is_whitespace).ok_or_else(invalid)?;
        let set_number = number.parse::<usize>().map_err(|_| invalid())?;
        let data = rest.trim_start().strip_prefix('-').ok_or_else(invalid)?;
        Ok(Self {
            set_number,
            data: data.trim().to_string(),
        })
    }
}
