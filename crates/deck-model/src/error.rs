//! Error types for deck-model

use std::fmt;

use thiserror::Error;

use crate::geometry::GeometryType;

pub type Result<T> = std::result::Result<T, ModelError>;

/// Entity collections of a store, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Node,
    Element,
    Material,
    Function,
    GeometrySet,
    BoundaryCondition,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Node => "node",
            EntityKind::Element => "element",
            EntityKind::Material => "material",
            EntityKind::Function => "function",
            EntityKind::GeometrySet => "geometry set",
            EntityKind::BoundaryCondition => "boundary condition",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("{kind} at position {position} appears more than once in its collection")]
    DuplicateEntity { kind: EntityKind, position: usize },

    #[error(
        "the nodes of a coupling do not have the same position: distance {distance:.3e} exceeds {tolerance:.1e}"
    )]
    Geometry { distance: f64, tolerance: f64 },

    #[error("coupling type mismatch: {message}")]
    TypeMismatch { message: String },

    /// A 1-based index from a deck that points past the end of its collection.
    #[error("{kind} index {index} does not exist, {available} available")]
    DanglingReference {
        kind: EntityKind,
        index: usize,
        available: usize,
    },

    #[error("{kind} #{index} is referenced but not part of a written collection")]
    Unnumbered { kind: EntityKind, index: usize },

    #[error("unknown {kind} id #{index}")]
    UnknownId { kind: EntityKind, index: usize },

    #[error("{kind} #{index} is verbatim text and has no typed data")]
    NotTyped { kind: EntityKind, index: usize },

    #[error("condition for {expected} sets references a {found} set")]
    DimensionMismatch {
        expected: GeometryType,
        found: GeometryType,
    },

    #[error("condition {data:?} has {expected} placeholder(s) but {found} replacement(s)")]
    Placeholder {
        data: String,
        expected: usize,
        found: usize,
    },

    #[error("{line:?} is not a valid {kind} line: {message}")]
    InvalidLine {
        kind: EntityKind,
        line: String,
        message: String,
    },

    #[error("deck format has no entry for {what}")]
    MissingFormatEntry { what: String },
}

impl ModelError {
    pub(crate) fn invalid_line(kind: EntityKind, line: &str, message: impl Into<String>) -> Self {
        Self::InvalidLine {
            kind,
            line: line.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            message: message.into(),
        }
    }
}
