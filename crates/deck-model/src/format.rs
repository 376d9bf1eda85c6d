//! Section names and fixed tokens of the deck format.
//!
//! The tables default to the Baci input format. They are plain data so a
//! format variant can be loaded from a file instead.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::boundary_condition::BoundaryKind;
use crate::element::Physics;
use crate::error::{ModelError, Result};
use crate::geometry::GeometryType;
use crate::store::ConditionKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSection {
    pub kind: BoundaryKind,
    pub geometry: GeometryType,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSection {
    pub physics: Physics,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckFormat {
    /// Total width of a section header line
    pub section_width: usize,
    /// Width the option keys are padded to
    pub key_width: usize,
    pub materials: String,
    pub node_coords: String,
    /// Element sections in output order
    pub element_sections: Vec<ElementSection>,
    /// Function blocks are named `<prefix><n>`
    pub function_prefix: String,
    pub design_description: String,
    pub end: String,
    /// Sections whose keys may repeat, e.g. knot vectors
    pub multi_key_sections: Vec<String>,
    pub condition_sections: Vec<ConditionSection>,
    pub topology_sections: BTreeMap<GeometryType, String>,
    /// Dimension tag in topology lines
    pub set_tags: BTreeMap<GeometryType, String>,
    /// Count header of condition blocks
    pub condition_counters: BTreeMap<GeometryType, String>,
    /// Set count keys of the design description
    pub design_counts: BTreeMap<GeometryType, String>,
    /// Sections that are read but never written
    pub skip_sections: Vec<String>,
}

fn geometry_table(names: [&str; 4]) -> BTreeMap<GeometryType, String> {
    GeometryType::ALL
        .into_iter()
        .zip(names)
        .map(|(geometry, name)| (geometry, name.to_string()))
        .collect()
}

impl Default for DeckFormat {
    fn default() -> Self {
        use BoundaryKind::*;
        use GeometryType::*;

        let conditions = [
            (Dirichlet, Point, "DESIGN POINT DIRICH CONDITIONS"),
            (Dirichlet, Line, "DESIGN LINE DIRICH CONDITIONS"),
            (Dirichlet, Surface, "DESIGN SURF DIRICH CONDITIONS"),
            (Dirichlet, Volume, "DESIGN VOL DIRICH CONDITIONS"),
            (Neumann, Point, "DESIGN POINT NEUMANN CONDITIONS"),
            (Neumann, Line, "DESIGN LINE NEUMANN CONDITIONS"),
            (Neumann, Surface, "DESIGN SURF NEUMANN CONDITIONS"),
            (Neumann, Volume, "DESIGN VOL NEUMANN CONDITIONS"),
            (MomentEulerBernoulli, Point, "DESIGN POINT MOMENT EB CONDITIONS"),
            (
                BeamToSolidVolumeMeshtying,
                Line,
                "BEAM INTERACTION/BEAM TO SOLID VOLUME MESHTYING LINE",
            ),
            (
                BeamToSolidVolumeMeshtying,
                Volume,
                "BEAM INTERACTION/BEAM TO SOLID VOLUME MESHTYING VOLUME",
            ),
            (
                BeamToSolidSurfaceMeshtying,
                Line,
                "BEAM INTERACTION/BEAM TO SOLID SURFACE MESHTYING LINE",
            ),
            (
                BeamToSolidSurfaceMeshtying,
                Surface,
                "BEAM INTERACTION/BEAM TO SOLID SURFACE MESHTYING SURFACE",
            ),
            (
                BeamToSolidSurfaceContact,
                Line,
                "BEAM INTERACTION/BEAM TO SOLID CONTACT LINE",
            ),
            (
                BeamToSolidSurfaceContact,
                Surface,
                "BEAM INTERACTION/BEAM TO SOLID CONTACT SURFACE",
            ),
            (PointCoupling, Point, "DESIGN POINT COUPLING CONDITIONS"),
        ];

        Self {
            section_width: deck_inp::SECTION_WIDTH,
            key_width: deck_inp::KEY_WIDTH,
            materials: "MATERIALS".to_string(),
            node_coords: "NODE COORDS".to_string(),
            element_sections: vec![
                ElementSection {
                    physics: Physics::Structure,
                    name: "STRUCTURE ELEMENTS".to_string(),
                },
                ElementSection {
                    physics: Physics::Fluid,
                    name: "FLUID ELEMENTS".to_string(),
                },
            ],
            function_prefix: "FUNCT".to_string(),
            design_description: "DESIGN DESCRIPTION".to_string(),
            end: "END".to_string(),
            multi_key_sections: vec!["STRUCTURE KNOTVECTORS".to_string()],
            condition_sections: conditions
                .into_iter()
                .map(|(kind, geometry, name)| ConditionSection {
                    kind,
                    geometry,
                    name: name.to_string(),
                })
                .collect(),
            topology_sections: geometry_table([
                "DNODE-NODE TOPOLOGY",
                "DLINE-NODE TOPOLOGY",
                "DSURF-NODE TOPOLOGY",
                "DVOL-NODE TOPOLOGY",
            ]),
            set_tags: geometry_table(["DNODE", "DLINE", "DSURFACE", "DVOL"]),
            condition_counters: geometry_table(["DPOINT", "DLINE", "DSURF", "DVOL"]),
            design_counts: geometry_table(["NDPOINT", "NDLINE", "NDSURF", "NDVOL"]),
            skip_sections: [
                "ALE ELEMENTS",
                "LUBRICATION ELEMENTS",
                "TRANSPORT ELEMENTS",
                "TRANSPORT2 ELEMENTS",
                "THERMO ELEMENTS",
                "ACOUSTIC ELEMENTS",
                "CELL ELEMENTS",
                "CELLSCATRA ELEMENTS",
                "ARTERY ELEMENTS",
                "ELECTROMAGNETIC ELEMENTS",
                "END",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

fn geometry_entry<'a>(
    table: &'a BTreeMap<GeometryType, String>,
    geometry: GeometryType,
    what: &str,
) -> Result<&'a str> {
    table
        .get(&geometry)
        .map(String::as_str)
        .ok_or_else(|| ModelError::MissingFormatEntry {
            what: format!("{what} of {geometry} sets"),
        })
}

impl DeckFormat {
    pub fn condition_name(&self, kind: BoundaryKind, geometry: GeometryType) -> Result<&str> {
        self.condition_sections
            .iter()
            .find(|section| section.kind == kind && section.geometry == geometry)
            .map(|section| section.name.as_str())
            .ok_or_else(|| ModelError::MissingFormatEntry {
                what: format!("{kind} conditions on {geometry} sets"),
            })
    }

    pub fn condition_key(&self, name: &str) -> Option<ConditionKey> {
        self.condition_sections
            .iter()
            .find(|section| section.name == name)
            .map(|section| (section.kind, section.geometry))
    }

    pub fn topology_name(&self, geometry: GeometryType) -> Result<&str> {
        geometry_entry(&self.topology_sections, geometry, "topology section")
    }

    pub fn topology_geometry(&self, name: &str) -> Option<GeometryType> {
        self.topology_sections
            .iter()
            .find(|(_, section)| *section == name)
            .map(|(geometry, _)| *geometry)
    }

    pub fn set_tag(&self, geometry: GeometryType) -> Result<&str> {
        geometry_entry(&self.set_tags, geometry, "set tag")
    }

    pub fn condition_counter(&self, geometry: GeometryType) -> Result<&str> {
        geometry_entry(&self.condition_counters, geometry, "condition counter")
    }

    pub fn design_count(&self, geometry: GeometryType) -> Result<&str> {
        geometry_entry(&self.design_counts, geometry, "design count")
    }

    pub fn element_physics(&self, name: &str) -> Option<Physics> {
        self.element_sections
            .iter()
            .find(|section| section.name == name)
            .map(|section| section.physics)
    }

    /// `FUNCT` followed by digits only.
    pub fn is_function_block(&self, name: &str) -> bool {
        name.strip_prefix(self.function_prefix.as_str())
            .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
    }

    pub fn function_block(&self, number: usize) -> String {
        format!("{}{}", self.function_prefix, number)
    }

    pub fn is_multi_key(&self, name: &str) -> bool {
        self.multi_key_sections.iter().any(|section| section == name)
    }

    pub fn is_skipped(&self, name: &str) -> bool {
        self.skip_sections.iter().any(|section| section == name)
    }
}
