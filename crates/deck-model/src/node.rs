//! Mesh nodes.

use nalgebra::Vector3;

use crate::error::{EntityKind, ModelError, Result};

/// A node in the finite element mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Position in space
    pub coordinates: Vector3<f64>,
    /// Comment lines written in front of the node
    pub comments: Vec<String>,
}

impl Node {
    /// Create a new node
    pub fn new(coordinates: [f64; 3]) -> Self {
        Self {
            coordinates: Vector3::from(coordinates),
            comments: Vec::new(),
        }
    }

    /// Decode a `NODE <n> COORD <x> <y> <z>` line. The node number in the line
    /// is not kept, nodes are numbered by their position.
    pub fn from_dat(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [keyword, number, coord, x, y, z] = tokens.as_slice() else {
            return Err(ModelError::invalid_line(
                EntityKind::Node,
                line,
                "expected `NODE <n> COORD <x> <y> <z>`",
            ));
        };
        if *keyword != "NODE" || *coord != "COORD" || number.parse::<usize>().is_err() {
            return Err(ModelError::invalid_line(
                EntityKind::Node,
                line,
                "expected `NODE <n> COORD <x> <y> <z>`",
            ));
        }

        let mut coordinates = [0.0; 3];
        for (slot, token) in coordinates.iter_mut().zip([x, y, z]) {
            *slot = token.parse::<f64>().map_err(|_| {
                ModelError::invalid_line(EntityKind::Node, line, format!("invalid coordinate {token}"))
            })?;
        }
        Ok(Self::new(coordinates))
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Euclidean distance to another node
    pub fn distance(&self, other: &Node) -> f64 {
        (self.coordinates - other.coordinates).norm()
    }

    pub fn dat_line(&self, number: usize) -> String {
        format!(
            "NODE {} COORD {:.12e} {:.12e} {:.12e}",
            number, self.coordinates.x, self.coordinates.y, self.coordinates.z
        )
    }
}
