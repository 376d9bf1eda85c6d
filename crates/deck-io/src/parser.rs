//! Routing of deck blocks into sections and entity tables.
//!
//! The parser never interprets entity lines beyond the set index of topology
//! lines. Everything ends up in a [`ParsedDeck`] as the text it was read from;
//! [`crate::link`] turns that into store entries.

use std::collections::BTreeMap;

use deck_inp::{Block, ContentLine, RawDeck, Section, is_comment_line};
use deck_model::geometry_set::{
    SET_INDEX_TOKEN, is_placeholder_comment, placeholder_number, set_index,
};
use deck_model::{ConditionKey, DeckFormat, GeometryType, Physics};
use indexmap::IndexMap;
use log::debug;

use crate::error::{DeckError, Result};

/// One geometry set of a topology block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedSet {
    /// Contiguous lines sharing one set index
    Lines(Vec<ContentLine>),
    /// An index the deck skipped
    Placeholder,
}

/// Entity tables of a deck, still as source lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEntities {
    pub materials: Vec<ContentLine>,
    pub nodes: Vec<ContentLine>,
    pub elements: BTreeMap<Physics, Vec<ContentLine>>,
    /// Body lines of each function block
    pub functions: Vec<Vec<String>>,
    /// Condition lines without the count header
    pub conditions: BTreeMap<ConditionKey, Vec<ContentLine>>,
    pub geometry_sets: BTreeMap<GeometryType, Vec<ParsedSet>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDeck {
    /// Lines in front of the first section
    pub preamble: Vec<String>,
    pub sections: IndexMap<String, Section>,
    pub multi_key_sections: Vec<Section>,
    pub entities: ParsedEntities,
}

pub struct DeckParser<'a> {
    format: &'a DeckFormat,
}

impl<'a> DeckParser<'a> {
    pub fn new(format: &'a DeckFormat) -> Self {
        Self { format }
    }

    pub fn parse_str(&self, text: &str) -> Result<ParsedDeck> {
        self.parse_raw(&RawDeck::parse_str(text))
    }

    pub fn parse_raw(&self, raw: &RawDeck) -> Result<ParsedDeck> {
        let mut deck = ParsedDeck {
            preamble: raw.preamble.clone(),
            ..ParsedDeck::default()
        };
        for block in &raw.blocks {
            self.route(block, &mut deck)?;
        }
        Ok(deck)
    }

    fn route(&self, block: &Block, deck: &mut ParsedDeck) -> Result<()> {
        let name = block.name.as_str();
        let format = self.format;
        let entities = &mut deck.entities;

        if name == format.materials {
            entities.materials.extend(block.grouped());
        } else if name == format.node_coords {
            entities.nodes.extend(block.grouped());
        } else if let Some(physics) = format.element_physics(name) {
            entities
                .elements
                .entry(physics)
                .or_default()
                .extend(block.grouped());
        } else if format.is_function_block(name) {
            entities.functions.push(block.body.clone());
        } else if let Some(key) = format.condition_key(name) {
            // The first line is the count header.
            entities
                .conditions
                .entry(key)
                .or_default()
                .extend(block.grouped().into_iter().skip(1));
        } else if let Some(geometry) = format.topology_geometry(name) {
            let sets = group_sets(block)?;
            entities
                .geometry_sets
                .entry(geometry)
                .or_default()
                .extend(sets);
        } else if format.is_multi_key(name) {
            let mut section = Section::multi_key(name);
            section.add_lines(&block.body)?;
            deck.multi_key_sections.push(section);
        } else if name == format.design_description || name == format.end {
            debug!("Skipping section \"{name}\", it is regenerated on write.");
        } else {
            let mut section = Section::new(name);
            section.add_lines(&block.body)?;
            match deck.sections.get_mut(name) {
                Some(existing) => existing.merge_section(section)?,
                None => {
                    deck.sections.insert(name.to_string(), section);
                }
            }
        }
        Ok(())
    }
}

/// Group topology lines by their set index. Skipped indices become
/// placeholders so later sets keep their number. Empty sets after the last
/// topology line are only known from their `// Empty set <n>` comments.
fn group_sets(block: &Block) -> Result<Vec<ParsedSet>> {
    let mut sets = Vec::new();
    let mut current: Vec<ContentLine> = Vec::new();
    let mut last_index = 1;

    for mut line in block.grouped() {
        let index = set_index(&line.text).ok_or_else(|| DeckError::Parse {
            section: block.name.clone(),
            line: line.line,
            message: format!(
                "expected a set index at token {} of {:?}",
                SET_INDEX_TOKEN + 1,
                line.text
            ),
        })?;
        if index < last_index {
            return Err(DeckError::Sequence {
                section: block.name.clone(),
                line: line.line,
                previous: last_index,
                found: index,
            });
        }
        if index > last_index {
            if current.is_empty() {
                sets.push(ParsedSet::Placeholder);
            } else {
                sets.push(ParsedSet::Lines(std::mem::take(&mut current)));
            }
            let skipped = index - last_index - 1;
            if skipped > 0 {
                debug!(
                    "Inserting {skipped} empty set(s) before set {index} of \"{}\".",
                    block.name
                );
            }
            sets.extend((0..skipped).map(|_| ParsedSet::Placeholder));
            last_index = index;
        }
        line.comments.retain(|comment| !is_placeholder_comment(comment));
        current.push(line);
    }
    if !current.is_empty() {
        sets.push(ParsedSet::Lines(current));
    }

    let trailing = block
        .body
        .iter()
        .rev()
        .take_while(|line| is_comment_line(line))
        .filter_map(|line| placeholder_number(line))
        .max();
    if let Some(last) = trailing
        && last > sets.len()
    {
        debug!(
            "Appending {} empty set(s) at the end of \"{}\".",
            last - sets.len(),
            block.name
        );
        sets.resize(last, ParsedSet::Placeholder);
    }
    Ok(sets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_model::BoundaryKind;

    fn parse(text: &str) -> Result<ParsedDeck> {
        DeckParser::new(&DeckFormat::default()).parse_str(text)
    }

    fn set_lengths(sets: &[ParsedSet]) -> Vec<usize> {
        sets.iter()
            .map(|set| match set {
                ParsedSet::Lines(lines) => lines.len(),
                ParsedSet::Placeholder => 0,
            })
            .collect()
    }

    #[test]
    fn routes_blocks_by_name() {
        let deck = parse(
            r#"// preamble
--------------------------------------------------------------------PROBLEM TYPE
PROBLEMTYPE                           Structure
----------------------------------------------------------------------MATERIALS
MAT 1 MAT_Struct_StVenantKirchhoff YOUNG 1.0 NUE 0.3 DENS 0.0
--------------------------------------------------------------------------FUNCT1
SYMBOLIC_FUNCTION_OF_SPACE_TIME t
-------------------------------------------------------------DESIGN DESCRIPTION
NDPOINT                               1
-----------------------------------------------------------------NODE COORDS
NODE 1 COORD 0.0 0.0 0.0
NODE 2 COORD 1.0 0.0 0.0
----------------------------------------------------------STRUCTURE ELEMENTS
1 BEAM3R LINE2 1 2 MAT 1
-------------------------------------------------------------STRUCTURE KNOTVECTORS
NURBS_DIMENSION                       1
NURBS_DIMENSION                       1
-----------------------------------------------------------------------------END
"#,
        )
        .expect("valid deck");

        assert_eq!(deck.preamble, vec!["// preamble".to_string()]);
        assert_eq!(deck.sections.len(), 1);
        assert_eq!(
            deck.sections["PROBLEM TYPE"].value("PROBLEMTYPE"),
            Some("Structure")
        );
        assert_eq!(deck.entities.materials.len(), 1);
        assert_eq!(deck.entities.functions.len(), 1);
        assert_eq!(deck.entities.nodes.len(), 2);
        assert_eq!(deck.entities.elements[&Physics::Structure].len(), 1);
        assert_eq!(deck.multi_key_sections.len(), 1);
        assert_eq!(deck.multi_key_sections[0].len(), 2);
    }

    #[test]
    fn condition_count_line_is_skipped() {
        let deck = parse(
            r#"-------------------------------------------------DESIGN POINT DIRICH CONDITIONS
DPOINT 2
E 1 - NUMDOF 3 ONOFF 1 1 1 VAL 0 0 0 FUNCT 0 0 0
// second
E 2 - NUMDOF 3 ONOFF 1 1 1 VAL 0 0 0 FUNCT 0 0 0
"#,
        )
        .expect("valid deck");
        let lines = &deck.entities.conditions[&(BoundaryKind::Dirichlet, GeometryType::Point)];
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].comments, vec!["// second".to_string()]);
    }

    #[test]
    fn skipped_set_indices_become_placeholders() {
        let deck = parse(
            r#"----------------------------------------------------------DNODE-NODE TOPOLOGY
NODE 1 DNODE 1
NODE 2 DNODE 1
NODE 5 DNODE 3
"#,
        )
        .expect("valid deck");
        let sets = &deck.entities.geometry_sets[&GeometryType::Point];
        assert_eq!(set_lengths(sets), vec![2, 0, 1]);
        assert_eq!(sets[1], ParsedSet::Placeholder);
    }

    #[test]
    fn first_index_above_one_fills_from_one() {
        let deck = parse(
            r#"----------------------------------------------------------DLINE-NODE TOPOLOGY
NODE 1 DLINE 3
"#,
        )
        .expect("valid deck");
        let sets = &deck.entities.geometry_sets[&GeometryType::Line];
        assert_eq!(set_lengths(sets), vec![0, 0, 1]);
    }

    #[test]
    fn trailing_empty_sets_are_kept() {
        let deck = parse(
            r#"----------------------------------------------------------DNODE-NODE TOPOLOGY
NODE 1 DNODE 1
// Empty set 2
// Empty set 3
----------------------------------------------------------DLINE-NODE TOPOLOGY
// Empty set 1
"#,
        )
        .expect("valid deck");
        let points = &deck.entities.geometry_sets[&GeometryType::Point];
        assert_eq!(set_lengths(points), vec![1, 0, 0]);
        assert_eq!(points[2], ParsedSet::Placeholder);
        let lines = &deck.entities.geometry_sets[&GeometryType::Line];
        assert_eq!(lines, &vec![ParsedSet::Placeholder]);
    }

    #[test]
    fn decreasing_set_index_is_rejected() {
        let err = parse(
            r#"----------------------------------------------------------DNODE-NODE TOPOLOGY
NODE 1 DNODE 2
NODE 2 DNODE 1
"#,
        )
        .expect_err("indices go down");
        assert!(matches!(
            err,
            DeckError::Sequence {
                previous: 2,
                found: 1,
                line: 3,
                ..
            }
        ));

        let err = parse(
            r#"----------------------------------------------------------DNODE-NODE TOPOLOGY
NODE 1 DNODE 0
"#,
        )
        .expect_err("index below one");
        assert!(matches!(err, DeckError::Sequence { found: 0, .. }));
    }

    #[test]
    fn missing_set_index_is_a_parse_error() {
        let err = parse(
            r#"----------------------------------------------------------DNODE-NODE TOPOLOGY
NODE 1 DNODE
"#,
        )
        .expect_err("no index");
        assert!(matches!(err, DeckError::Parse { line: 2, .. }));
    }

    #[test]
    fn repeated_generic_sections_are_merged() {
        let deck = parse(
            r#"--------------------------------------------------------------------IO
OUTPUT_BIN                            Yes
--------------------------------------------------------------------IO
STRUCT_DISP                           No
"#,
        )
        .expect("valid deck");
        assert_eq!(deck.sections["IO"].len(), 2);

        let err = parse(
            r#"--------------------------------------------------------------------IO
OUTPUT_BIN                            Yes
--------------------------------------------------------------------IO
OUTPUT_BIN                            No
"#,
        )
        .expect_err("same key twice");
        assert!(matches!(err, DeckError::Inp(_)));
    }
}
