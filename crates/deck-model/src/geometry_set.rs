//! Geometry sets: ordered node groups tagged by dimension.

use std::collections::BTreeMap;

use crate::error::{EntityKind, ModelError, Result};
use crate::geometry::GeometryType;
use crate::ids::NodeId;
use crate::numbering::GlobalNumbering;

/// Token position of the 1-based set index in a topology line.
pub const SET_INDEX_TOKEN: usize = 3;

/// A set of nodes that boundary conditions act on
#[derive(Debug, Clone, PartialEq)]
pub struct GeometrySet {
    pub geometry: GeometryType,
    /// Nodes in the set, in output order
    pub nodes: Vec<NodeId>,
    pub comments: Vec<String>,
    /// Comment lines in front of the node at a position other than the first
    pub node_comments: BTreeMap<usize, Vec<String>>,
}

impl GeometrySet {
    pub fn new(geometry: GeometryType, nodes: Vec<NodeId>) -> Self {
        Self {
            geometry,
            nodes,
            comments: Vec::new(),
            node_comments: BTreeMap::new(),
        }
    }

    /// An empty set standing in for an index a deck skipped.
    pub fn placeholder(geometry: GeometryType) -> Self {
        Self::new(geometry, Vec::new())
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Attach comment lines in front of the node at `position`.
    pub fn with_node_comments(mut self, position: usize, comments: Vec<String>) -> Self {
        if position == 0 {
            self.comments.extend(comments);
        } else if !comments.is_empty() {
            self.node_comments.entry(position).or_default().extend(comments);
        }
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Topology lines of this set. An empty set is written as a single
    /// `// Empty set <n>` comment so the numbering of later sets is kept.
    pub fn dat_lines(
        &self,
        number: usize,
        numbering: &GlobalNumbering,
        tag: &str,
    ) -> Result<Vec<String>> {
        let mut lines = self.comments.clone();
        if self.nodes.is_empty() {
            lines.push(placeholder_comment(number));
            return Ok(lines);
        }
        for (position, node) in self.nodes.iter().enumerate() {
            if let Some(comments) = self.node_comments.get(&position) {
                lines.extend(comments.iter().cloned());
            }
            lines.push(format!("NODE {} {} {}", numbering.node(*node)?, tag, number));
        }
        Ok(lines)
    }
}

/// Comment line that marks a skipped set index.
pub fn placeholder_comment(number: usize) -> String {
    format!("// Empty set {number}")
}

/// Set number of a comment written by [`placeholder_comment`].
pub fn placeholder_number(line: &str) -> Option<usize> {
    line.trim()
        .strip_prefix("// Empty set ")
        .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|n| n.parse().ok())
}

/// Whether `line` is a comment written by [`placeholder_comment`].
pub fn is_placeholder_comment(line: &str) -> bool {
    placeholder_number(line).is_some()
}

/// Read the 1-based set index of a topology line, `None` if it is missing or
/// not a number.
pub fn set_index(line: &str) -> Option<usize> {
    line.split_whitespace()
        .nth(SET_INDEX_TOKEN)
        .and_then(|token| token.parse().ok())
}

/// One topology line, references still as 1-based numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedSetLine {
    pub node_number: usize,
    pub set_number: usize,
}

impl IndexedSetLine {
    /// Decode `NODE <node> <TAG> <set>`.
    pub fn from_dat(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [keyword, node, _tag, set] = tokens.as_slice() else {
            return Err(ModelError::invalid_line(
                EntityKind::GeometrySet,
                line,
                "expected `NODE <node> <TAG> <set>`",
            ));
        };
        let (Ok(node_number), Ok(set_number)) = (node.parse::<usize>(), set.parse::<usize>()) else {
            return Err(ModelError::invalid_line(
                EntityKind::GeometrySet,
                line,
                "node and set must be numbers",
            ));
        };
        if *keyword != "NODE" {
            return Err(ModelError::invalid_line(
                EntityKind::GeometrySet,
                line,
                "expected `NODE <node> <TAG> <set>`",
            ));
        }
        Ok(Self {
            node_number,
            set_number,
        })
    }
}
