//! Moving parsed entity tables into an [`EntityStore`].
//!
//! In verbatim mode every entity keeps its source text. In full mode the lines
//! are decoded first, then every 1-based node, material and set number is
//! replaced by the id of the entity at that position.

use std::collections::BTreeMap;

use deck_inp::ContentLine;
use deck_model::{
    BoundaryCondition, Element, EntityKind, EntityStore, Function, GeometrySet, GeometrySetId,
    GeometryType, IndexedCondition, IndexedElement, IndexedSetLine, Material, MaterialId,
    ModelError, Node, NodeId, RawItem,
};
use log::debug;

use crate::error::Result;
use crate::parser::{ParsedEntities, ParsedSet};

/// How parsed entities enter the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkMode {
    /// Keep every entity as its source text
    #[default]
    Verbatim,
    /// Decode every entity and resolve its references
    Full,
}

/// Add `entities` to `store`. A failing full link leaves the store unchanged.
pub fn link_entities(entities: ParsedEntities, store: &mut EntityStore, mode: LinkMode) -> Result<()> {
    match mode {
        LinkMode::Verbatim => {
            link_verbatim(entities, store);
            Ok(())
        }
        LinkMode::Full => {
            let mut linked = store.clone();
            link_full(entities, &mut linked)?;
            *store = linked;
            Ok(())
        }
    }
}

fn link_verbatim(entities: ParsedEntities, store: &mut EntityStore) {
    for line in &entities.materials {
        store.add_verbatim_material(RawItem::from(line));
    }
    for body in entities.functions {
        store.add_verbatim_function(RawItem {
            comments: Vec::new(),
            lines: body,
        });
    }
    for line in &entities.nodes {
        store.add_verbatim_node(RawItem::from(line));
    }
    for (physics, lines) in &entities.elements {
        for line in lines {
            store.add_verbatim_element(*physics, RawItem::from(line));
        }
    }
    for (geometry, sets) in entities.geometry_sets {
        for set in sets {
            match set {
                ParsedSet::Lines(lines) => {
                    store.add_verbatim_geometry_set(geometry, verbatim_set(lines));
                }
                ParsedSet::Placeholder => {
                    store.add_geometry_set(GeometrySet::placeholder(geometry));
                }
            }
        }
    }
    for (key, lines) in &entities.conditions {
        for line in lines {
            store.add_verbatim_boundary_condition(*key, RawItem::from(line));
        }
    }
}

/// The comments of the first line lead the set, later comments stay in place.
fn verbatim_set(lines: Vec<ContentLine>) -> RawItem {
    let mut raw = RawItem::default();
    for (i, line) in lines.into_iter().enumerate() {
        if i == 0 {
            raw.comments = line.comments;
        } else {
            raw.lines.extend(line.comments);
        }
        raw.lines.push(line.text);
    }
    raw
}

/// 1-based number to the id at that position.
fn resolve<I: Copy>(ids: &[I], number: usize, kind: EntityKind) -> Result<I> {
    number
        .checked_sub(1)
        .and_then(|index| ids.get(index))
        .copied()
        .ok_or_else(|| {
            ModelError::DanglingReference {
                kind,
                index: number,
                available: ids.len(),
            }
            .into()
        })
}

/// Decoded topology lines of one set, each with its leading comments.
type DecodedSet = Vec<(IndexedSetLine, Vec<String>)>;

fn link_full(entities: ParsedEntities, store: &mut EntityStore) -> Result<()> {
    // Decode every line first, so malformed text fails before linking starts.
    let materials = entities
        .materials
        .iter()
        .map(|line| Ok(Material::from_dat(&line.text)?.with_comments(line.comments.clone())))
        .collect::<Result<Vec<_>>>()?;
    let nodes = entities
        .nodes
        .iter()
        .map(|line| Ok(Node::from_dat(&line.text)?.with_comments(line.comments.clone())))
        .collect::<Result<Vec<_>>>()?;
    let mut elements = Vec::new();
    for (physics, lines) in &entities.elements {
        for line in lines {
            elements.push((*physics, IndexedElement::from_dat(&line.text)?, line.comments.clone()));
        }
    }
    let mut sets: BTreeMap<GeometryType, Vec<Option<DecodedSet>>> = BTreeMap::new();
    for (geometry, parsed) in &entities.geometry_sets {
        let decoded = sets.entry(*geometry).or_default();
        for set in parsed {
            decoded.push(match set {
                ParsedSet::Lines(lines) => Some(
                    lines
                        .iter()
                        .map(|line| Ok((IndexedSetLine::from_dat(&line.text)?, line.comments.clone())))
                        .collect::<Result<DecodedSet>>()?,
                ),
                ParsedSet::Placeholder => None,
            });
        }
    }
    let mut conditions = Vec::new();
    for (key, lines) in &entities.conditions {
        for line in lines {
            conditions.push((*key, IndexedCondition::from_dat(&line.text)?, line.comments.clone()));
        }
    }

    // Resolve numbers to ids.
    let material_ids: Vec<MaterialId> = materials
        .into_iter()
        .map(|material| store.add_material(material))
        .collect();
    for body in entities.functions {
        store.add_function(Function::new(body));
    }
    let node_ids: Vec<NodeId> = nodes.into_iter().map(|node| store.add_node(node)).collect();

    for (physics, element, comments) in elements {
        let nodes = element
            .node_numbers
            .iter()
            .map(|number| resolve(&node_ids, *number, EntityKind::Node))
            .collect::<Result<Vec<_>>>()?;
        let mut linked = Element::new(physics, element.type_name, element.shape, nodes)
            .with_rest(element.rest)
            .with_comments(comments);
        if let Some(number) = element.material_number {
            linked.material = Some(resolve(&material_ids, number, EntityKind::Material)?);
        }
        store.add_element(linked);
    }

    let mut set_ids: BTreeMap<GeometryType, Vec<GeometrySetId>> = BTreeMap::new();
    for (geometry, decoded) in sets {
        let ids = set_ids.entry(geometry).or_default();
        for set in decoded {
            let set = match set {
                Some(lines) => {
                    let mut linked = GeometrySet::new(geometry, Vec::with_capacity(lines.len()));
                    for (position, (line, comments)) in lines.into_iter().enumerate() {
                        linked
                            .nodes
                            .push(resolve(&node_ids, line.node_number, EntityKind::Node)?);
                        linked = linked.with_node_comments(position, comments);
                    }
                    linked
                }
                None => GeometrySet::placeholder(geometry),
            };
            ids.push(store.add_geometry_set(set));
        }
    }

    // Adding a condition runs its consistency check.
    for ((kind, geometry), condition, comments) in conditions {
        let available = set_ids.get(&geometry).map(Vec::as_slice).unwrap_or_default();
        let set = resolve(available, condition.set_number, EntityKind::GeometrySet)?;
        let mut linked = BoundaryCondition::new(kind, geometry, set, condition.data)
            .with_comments(comments);
        linked.from_dat = true;
        store.add_boundary_condition(linked)?;
    }

    debug!(
        "Linked {} node(s) and {} element(s).",
        store.node_count(),
        store.element_count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DeckParser;
    use deck_model::{DeckFormat, GlobalNumbering, Item, Physics};

    const DECK: &str = r#"----------------------------------------------------------------------MATERIALS
MAT 1 MAT_BeamReissnerElastHyper YOUNG 1.0 POISSONRATIO 0.3 DENS 0.0 CROSSAREA 1.0
-------------------------------------------------DESIGN POINT DIRICH CONDITIONS
DPOINT 1
E 2 - NUMDOF 9 ONOFF 1 1 1 1 1 1 0 0 0 VAL 0 0 0 0 0 0 0 0 0 FUNCT 0 0 0 0 0 0 0 0 0
----------------------------------------------------------DNODE-NODE TOPOLOGY
NODE 1 DNODE 1
// end point
NODE 3 DNODE 2
-----------------------------------------------------------------NODE COORDS
NODE 1 COORD 0.0 0.0 0.0
NODE 2 COORD 0.5 0.0 0.0
NODE 3 COORD 1.0 0.0 0.0
----------------------------------------------------------STRUCTURE ELEMENTS
1 BEAM3R LINE3 1 3 2 MAT 1 TRIADS 0 0 0 0 0 0 0 0 0
"#;

    fn parsed(text: &str) -> ParsedEntities {
        DeckParser::new(&DeckFormat::default())
            .parse_str(text)
            .expect("valid deck")
            .entities
    }

    #[test]
    fn verbatim_link_keeps_text() {
        let mut store = EntityStore::new();
        link_entities(parsed(DECK), &mut store, LinkMode::Verbatim).expect("verbatim link");
        assert_eq!(store.node_list().len(), 3);
        let Item::Verbatim(raw) = store.node(store.node_list()[1]).expect("known node") else {
            panic!("verbatim node");
        };
        assert_eq!(raw.lines, vec!["NODE 2 COORD 0.5 0.0 0.0".to_string()]);

        let set = store.geometry_set_list(GeometryType::Point)[1];
        let Item::Verbatim(raw) = store.geometry_set(set).expect("known set") else {
            panic!("verbatim set");
        };
        assert_eq!(raw.comments, vec!["// end point".to_string()]);
    }

    #[test]
    fn full_link_resolves_references() {
        let mut store = EntityStore::new();
        link_entities(parsed(DECK), &mut store, LinkMode::Full).expect("full link");

        let element = store.element_list(Physics::Structure)[0];
        let element = store.typed_element(element).expect("typed element");
        assert_eq!(element.nodes, vec![store.node_list()[0], store.node_list()[2], store.node_list()[1]]);
        assert_eq!(element.material, Some(store.material_list()[0]));

        let numbering = GlobalNumbering::assign(&store).expect("numbering");
        assert_eq!(
            element.dat_line(1, &numbering).expect("numbered"),
            "1 BEAM3R LINE3 1 3 2 MAT 1 TRIADS 0 0 0 0 0 0 0 0 0"
        );

        let condition = store.boundary_condition_list(
            deck_model::BoundaryKind::Dirichlet,
            GeometryType::Point,
        )[0];
        let Item::Typed(condition) = store.boundary_condition(condition).expect("known") else {
            panic!("typed condition");
        };
        assert_eq!(
            condition.geometry_set,
            store.geometry_set_list(GeometryType::Point)[1]
        );
        assert!(condition.from_dat);
    }

    #[test]
    fn full_link_keeps_comments_inside_a_set() {
        let text = DECK.replace(
            "NODE 3 DNODE 2\n",
            "NODE 3 DNODE 2\n// same set\nNODE 2 DNODE 2\n",
        );
        let mut store = EntityStore::new();
        link_entities(parsed(&text), &mut store, LinkMode::Full).expect("full link");

        let set = store.geometry_set_list(GeometryType::Point)[1];
        let set = store.typed_geometry_set(set).expect("typed set");
        let numbering = GlobalNumbering::assign(&store).expect("numbering");
        assert_eq!(
            set.dat_lines(2, &numbering, "DNODE").expect("numbered"),
            vec!["// end point", "NODE 3 DNODE 2", "// same set", "NODE 2 DNODE 2"]
        );
    }

    #[test]
    fn failed_full_link_leaves_store_unchanged() {
        let text = DECK.replace("1 BEAM3R LINE3 1 3 2", "1 BEAM3R LINE3 1 9 2");
        let mut store = EntityStore::new();
        let kept = store.add_geometry_set(GeometrySet::placeholder(GeometryType::Line));
        link_entities(parsed(&text), &mut store, LinkMode::Full).expect_err("node 9 does not exist");

        assert!(store.is_empty_mesh());
        assert!(store.node_list().is_empty());
        assert!(store.material_list().is_empty());
        assert!(store.geometry_set_list(GeometryType::Point).is_empty());
        assert_eq!(store.geometry_set_list(GeometryType::Line), &[kept]);
    }

    #[test]
    fn dangling_node_number_fails() {
        let text = DECK.replace("NODE 3 DNODE 2", "NODE 7 DNODE 2");
        let err = link_entities(parsed(&text), &mut EntityStore::new(), LinkMode::Full)
            .expect_err("node 7 does not exist");
        assert!(matches!(
            err,
            crate::DeckError::Model(ModelError::DanglingReference {
                kind: EntityKind::Node,
                index: 7,
                available: 3
            })
        ));
    }

    #[test]
    fn dangling_set_number_fails() {
        let text = DECK.replace("E 2 - NUMDOF", "E 4 - NUMDOF");
        let err = link_entities(parsed(&text), &mut EntityStore::new(), LinkMode::Full)
            .expect_err("set 4 does not exist");
        assert!(matches!(
            err,
            crate::DeckError::Model(ModelError::DanglingReference {
                kind: EntityKind::GeometrySet,
                ..
            })
        ));
    }
}
