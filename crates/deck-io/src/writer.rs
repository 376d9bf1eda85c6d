//! Canonical emission of sections and entity tables.

use deck_inp::{Section, section_header};
use deck_model::{
    BoundaryCondition, BoundaryKind, DeckFormat, ElementLinks, EntityStore, GeometryType,
    GlobalNumbering, Item,
};
use log::debug;

use crate::error::Result;

/// Renders the parts of a deck from one numbering of a store.
///
/// The numbering is computed when the writer is created, so every part
/// cites the same numbers.
pub struct DeckWriter<'a> {
    format: &'a DeckFormat,
    store: &'a EntityStore,
    numbering: GlobalNumbering,
    links: ElementLinks,
}

impl<'a> DeckWriter<'a> {
    pub fn new(format: &'a DeckFormat, store: &'a EntityStore) -> Result<Self> {
        let numbering = GlobalNumbering::assign(store)?;
        let has_couplings = !store
            .boundary_condition_list(BoundaryKind::PointCoupling, GeometryType::Point)
            .is_empty();
        let links = if has_couplings {
            store.element_links()
        } else {
            ElementLinks::new()
        };
        Ok(Self {
            format,
            store,
            numbering,
            links,
        })
    }

    pub fn numbering(&self) -> &GlobalNumbering {
        &self.numbering
    }

    fn header(&self, name: &str) -> String {
        section_header(name, self.format.section_width)
    }

    /// Free-form sections without the ones on the skip list.
    pub fn section_lines<'s>(&self, sections: impl IntoIterator<Item = &'s Section>) -> Vec<String> {
        let mut lines = Vec::new();
        for section in sections {
            if self.format.is_skipped(section.name()) {
                debug!("Not writing skipped section \"{}\".", section.name());
                continue;
            }
            lines.extend(section.dat_lines(self.format.section_width, self.format.key_width));
        }
        lines
    }

    pub fn material_lines(&self) -> Result<Vec<String>> {
        let mut lines = vec![self.header(&self.format.materials)];
        for id in self.store.material_list() {
            match self.store.material(*id)? {
                Item::Verbatim(raw) => lines.extend(raw.dat_lines()),
                Item::Typed(material) => {
                    lines.extend(material.comments.iter().cloned());
                    lines.push(material.dat_line(self.numbering.material(*id)?));
                }
            }
        }
        Ok(lines)
    }

    /// One `FUNCT<n>` block per function.
    pub fn function_lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for id in self.store.function_list() {
            let number = self.numbering.function(*id)?;
            lines.push(self.header(&self.format.function_block(number)));
            match self.store.function(*id)? {
                Item::Verbatim(raw) => lines.extend(raw.dat_lines()),
                Item::Typed(function) => lines.extend(function.dat_lines()),
            }
        }
        Ok(lines)
    }

    /// Number of written sets per dimension.
    pub fn design_description_lines(&self) -> Result<Vec<String>> {
        let mut lines = vec![self.header(&self.format.design_description)];
        for geometry in GeometryType::ALL {
            lines.push(format!(
                "{} {}",
                self.format.design_count(geometry)?,
                self.numbering.unique_sets(geometry).len()
            ));
        }
        Ok(lines)
    }

    /// Non-empty condition groups, each with its count header.
    pub fn condition_lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for ((kind, geometry), ids) in self.store.condition_groups() {
            lines.push(self.header(self.format.condition_name(kind, geometry)?));
            lines.push(format!(
                "{} {}",
                self.format.condition_counter(geometry)?,
                ids.len()
            ));
            for id in ids {
                match self.store.boundary_condition(*id)? {
                    Item::Verbatim(raw) => lines.extend(raw.dat_lines()),
                    Item::Typed(condition) => {
                        lines.extend(condition.comments.iter().cloned());
                        let set = self.numbering.geometry_set(condition.geometry_set)?;
                        let data = self
                            .store
                            .condition_data(condition, &self.numbering, &self.links)?;
                        lines.push(BoundaryCondition::dat_line(set, &data));
                    }
                }
            }
        }
        Ok(lines)
    }

    /// Topology blocks of all dimensions that have sets.
    pub fn topology_lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for geometry in GeometryType::ALL {
            let sets = self.numbering.unique_sets(geometry);
            if sets.is_empty() {
                continue;
            }
            lines.push(self.header(self.format.topology_name(geometry)?));
            let tag = self.format.set_tag(geometry)?;
            for id in sets {
                match self.store.geometry_set(*id)? {
                    Item::Verbatim(raw) => lines.extend(raw.dat_lines()),
                    Item::Typed(set) => {
                        let number = self.numbering.geometry_set(*id)?;
                        lines.extend(set.dat_lines(number, &self.numbering, tag)?);
                    }
                }
            }
        }
        Ok(lines)
    }

    pub fn node_lines(&self) -> Result<Vec<String>> {
        let mut lines = vec![self.header(&self.format.node_coords)];
        for id in self.store.node_list() {
            match self.store.node(*id)? {
                Item::Verbatim(raw) => lines.extend(raw.dat_lines()),
                Item::Typed(node) => {
                    lines.extend(node.comments.iter().cloned());
                    lines.push(node.dat_line(self.numbering.node(*id)?));
                }
            }
        }
        Ok(lines)
    }

    /// Element sections in the configured order, written even when empty.
    pub fn element_lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for section in &self.format.element_sections {
            lines.push(self.header(&section.name));
            for id in self.store.element_list(section.physics) {
                match self.store.element(*id)? {
                    Item::Verbatim(raw) => lines.extend(raw.dat_lines()),
                    Item::Typed(element) => {
                        lines.extend(element.comments.iter().cloned());
                        let number = self.numbering.element(*id)?;
                        lines.push(element.dat_line(number, &self.numbering)?);
                    }
                }
            }
        }
        Ok(lines)
    }

    pub fn end_lines(&self) -> Vec<String> {
        vec![self.header(&self.format.end)]
    }
}
