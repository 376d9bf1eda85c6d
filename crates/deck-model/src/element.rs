//! Mesh elements and their physics families.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EntityKind, ModelError, Result};
use crate::ids::{MaterialId, NodeId};
use crate::numbering::GlobalNumbering;

/// Physics family of an element, selects the element section it is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Physics {
    Structure,
    Fluid,
}

impl Physics {
    /// Order in which elements receive their global numbers.
    pub const NUMBERING_ORDER: [Physics; 2] = [Physics::Fluid, Physics::Structure];
}

impl fmt::Display for Physics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Physics::Structure => f.write_str("structure"),
            Physics::Fluid => f.write_str("fluid"),
        }
    }
}

/// Beam theory of a beam element; decides which DOFs a coupling ties together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeamFormulation {
    /// Simo-Reissner beam (BEAM3R), 9 DOFs per coupled node
    Reissner,
    /// Kirchhoff-Love beam (BEAM3K); `rotvec` marks rotation vector DOFs
    Kirchhoff { rotvec: bool },
    /// Torsion free Euler-Bernoulli beam (BEAM3EB)
    EulerBernoulli,
}

impl BeamFormulation {
    /// Derive the formulation from an element type token. `rest` is the text
    /// after the node list, it carries the `ROTVEC` flag of Kirchhoff beams.
    pub fn from_type_name(type_name: &str, rest: &str) -> Option<Self> {
        match type_name.to_ascii_uppercase().as_str() {
            "BEAM3R" => Some(Self::Reissner),
            "BEAM3K" => {
                let tokens: Vec<&str> = rest.split_whitespace().collect();
                let rotvec = tokens
                    .windows(2)
                    .any(|w| w[0] == "ROTVEC" && matches!(w[1], "1" | "true" | "TRUE" | "yes"));
                Some(Self::Kirchhoff { rotvec })
            }
            "BEAM3EB" => Some(Self::EulerBernoulli),
            _ => None,
        }
    }

    /// Same beam theory, ignoring the rotation vector flag.
    pub fn same_theory(self, other: BeamFormulation) -> bool {
        std::mem::discriminant(&self) == std::mem::discriminant(&other)
    }
}

impl fmt::Display for BeamFormulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeamFormulation::Reissner => f.write_str("Reissner"),
            BeamFormulation::Kirchhoff { rotvec: true } => f.write_str("Kirchhoff (rotvec)"),
            BeamFormulation::Kirchhoff { rotvec: false } => f.write_str("Kirchhoff"),
            BeamFormulation::EulerBernoulli => f.write_str("Euler-Bernoulli"),
        }
    }
}

/// An element in the finite element mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Physics family (output section)
    pub physics: Physics,
    /// Element type token, e.g. `BEAM3R` or `SOLIDH8`
    pub type_name: String,
    /// Cell shape token, e.g. `HERM2LIN3` or `HEX8`
    pub shape: String,
    /// Node connectivity
    pub nodes: Vec<NodeId>,
    pub material: Option<MaterialId>,
    pub beam: Option<BeamFormulation>,
    /// Text written after the material, e.g. `TRIADS ...` or `KINEM nonlinear`
    pub rest: String,
    pub comments: Vec<String>,
}

impl Element {
    /// Create a new element; the beam formulation is derived from the type token.
    pub fn new(
        physics: Physics,
        type_name: impl Into<String>,
        shape: impl Into<String>,
        nodes: Vec<NodeId>,
    ) -> Self {
        let type_name = type_name.into();
        Self {
            physics,
            beam: BeamFormulation::from_type_name(&type_name, ""),
            type_name,
            shape: shape.into(),
            nodes,
            material: None,
            rest: String::new(),
            comments: Vec::new(),
        }
    }

    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = Some(material);
        self
    }

    /// Set the trailing text; a Kirchhoff beam picks up its `ROTVEC` flag from it.
    pub fn with_rest(mut self, rest: impl Into<String>) -> Self {
        self.rest = rest.into();
        if let Some(BeamFormulation::Kirchhoff { .. }) = self.beam {
            self.beam = BeamFormulation::from_type_name(&self.type_name, &self.rest);
        }
        self
    }

    pub fn with_beam(mut self, beam: BeamFormulation) -> Self {
        self.beam = Some(beam);
        self
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    pub fn dat_line(&self, number: usize, numbering: &GlobalNumbering) -> Result<String> {
        let mut parts = vec![number.to_string(), self.type_name.clone(), self.shape.clone()];
        for node in &self.nodes {
            parts.push(numbering.node(*node)?.to_string());
        }
        if let Some(material) = self.material {
            parts.push("MAT".to_string());
            parts.push(numbering.material(material)?.to_string());
        }
        if !self.rest.is_empty() {
            parts.push(self.rest.clone());
        }
        Ok(parts.join(" "))
    }
}

/// An element line decoded from a deck, references still as 1-based numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedElement {
    pub type_name: String,
    pub shape: String,
    pub node_numbers: Vec<usize>,
    pub material_number: Option<usize>,
    pub rest: String,
}

impl IndexedElement {
    /// Decode `<n> <TYPE> <SHAPE> <node>... [MAT <m>] [rest]`.
    pub fn from_dat(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [number, type_name, shape, tail @ ..] = tokens.as_slice() else {
            return Err(ModelError::invalid_line(
                EntityKind::Element,
                line,
                "expected `<n> <TYPE> <SHAPE> <nodes...>`",
            ));
        };
        if number.parse::<usize>().is_err() {
            return Err(ModelError::invalid_line(
                EntityKind::Element,
                line,
                format!("invalid element number {number}"),
            ));
        }

        let node_count = tail
            .iter()
            .take_while(|token| token.parse::<usize>().is_ok())
            .count();
        let node_numbers = tail[..node_count]
            .iter()
            .filter_map(|token| token.parse::<usize>().ok())
            .collect();

        let mut rest = &tail[node_count..];
        let mut material_number = None;
        if let ["MAT", material, remaining @ ..] = rest
            && let Ok(material) = material.parse::<usize>()
        {
            material_number = Some(material);
            rest = remaining;
        }

        Ok(Self {
            type_name: type_name.to_string(),
            shape: shape.to_string(),
            node_numbers,
            material_number,
            rest: rest.join(" "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_beam_element_line() {
        let element = IndexedElement::from_dat(
            "1 BEAM3R HERM2LIN3 1 3 2 MAT 1 TRIADS 0.0 0.0 0.0 0.0 0.0 0.0 0.0 0.0 0.0 FAD",
        )
        .expect("valid line");
        assert_eq!(element.type_name, "BEAM3R");
        assert_eq!(element.shape, "HERM2LIN3");
        assert_eq!(element.node_numbers, vec![1, 3, 2]);
        assert_eq!(element.material_number, Some(1));
        assert!(element.rest.starts_with("TRIADS 0.0"));
        assert!(element.rest.ends_with("FAD"));
    }

    #[test]
    fn decodes_solid_element_line() {
        let element =
            IndexedElement::from_dat("4 SOLIDH8 HEX8 1 2 3 4 5 6 7 8 MAT 2 KINEM nonlinear")
                .expect("valid line");
        assert_eq!(element.node_numbers.len(), 8);
        assert_eq!(element.material_number, Some(2));
        assert_eq!(element.rest, "KINEM nonlinear");
    }

    #[test]
    fn rejects_short_line() {
        assert!(IndexedElement::from_dat("1 BEAM3R").is_err());
        assert!(IndexedElement::from_dat("x BEAM3R LINE2 1 2").is_err());
    }

    #[test]
    fn kirchhoff_rotvec_flag() {
        assert_eq!(
            BeamFormulation::from_type_name("BEAM3K", "WK 1 ROTVEC 1 TRIADS"),
            Some(BeamFormulation::Kirchhoff { rotvec: true })
        );
        assert_eq!(
            BeamFormulation::from_type_name("BEAM3K", "WK 1 ROTVEC 0"),
            Some(BeamFormulation::Kirchhoff { rotvec: false })
        );
        assert_eq!(BeamFormulation::from_type_name("SOLIDH8", ""), None);
        assert!(
            BeamFormulation::Kirchhoff { rotvec: true }
                .same_theory(BeamFormulation::Kirchhoff { rotvec: false })
        );
    }
}
