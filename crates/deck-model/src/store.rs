//! Arena storage for all entities of one deck.
//!
//! Every entity lives in an append-only arena and is addressed by a typed id.
//! Separate membership lists decide which entities are numbered and written,
//! and in which order. An entity may be created without being registered,
//! e.g. the point set of a coupling, which is written because a condition
//! refers to it.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::debug;

use crate::boundary_condition::{BoundaryCondition, BoundaryKind, Condition, fill_template};
use crate::coupling;
use crate::element::{Element, Physics};
use crate::error::{EntityKind, ModelError, Result};
use crate::function::Function;
use crate::geometry::GeometryType;
use crate::geometry_set::GeometrySet;
use crate::ids::{
    BoundaryConditionId, ElementId, FunctionId, GeometrySetId, MaterialId, NodeId,
};
use crate::item::{Item, RawItem};
use crate::material::Material;
use crate::node::Node;
use crate::numbering::GlobalNumbering;

/// Key of a boundary condition list.
pub type ConditionKey = (BoundaryKind, GeometryType);

/// Elements attached to each node, built on demand.
pub type ElementLinks = HashMap<NodeId, Vec<ElementId>>;

#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    nodes: Vec<Item<Node>>,
    elements: Vec<Item<Element>>,
    materials: Vec<Item<Material>>,
    functions: Vec<Item<Function>>,
    geometry_sets: Vec<Item<GeometrySet>>,
    boundary_conditions: Vec<Item<BoundaryCondition>>,

    node_list: Vec<NodeId>,
    element_lists: BTreeMap<Physics, Vec<ElementId>>,
    material_list: Vec<MaterialId>,
    function_list: Vec<FunctionId>,
    set_lists: BTreeMap<GeometryType, Vec<GeometrySetId>>,
    condition_lists: BTreeMap<ConditionKey, Vec<BoundaryConditionId>>,
}

fn item<T>(items: &[Item<T>], kind: EntityKind, index: usize) -> Result<&Item<T>> {
    items.get(index).ok_or(ModelError::UnknownId { kind, index })
}

fn typed<T>(items: &[Item<T>], kind: EntityKind, index: usize) -> Result<&T> {
    item(items, kind, index)?
        .typed()
        .ok_or(ModelError::NotTyped { kind, index })
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while no node, element, material or function has been created.
    pub fn is_empty_mesh(&self) -> bool {
        self.nodes.is_empty()
            && self.elements.is_empty()
            && self.materials.is_empty()
            && self.functions.is_empty()
    }

    // Nodes

    /// Create a node without registering it for output.
    pub fn create_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(Item::Typed(node));
        NodeId(self.nodes.len() - 1)
    }

    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = self.create_node(node);
        self.node_list.push(id);
        id
    }

    pub fn add_verbatim_node(&mut self, raw: RawItem) -> NodeId {
        self.nodes.push(Item::Verbatim(raw));
        let id = NodeId(self.nodes.len() - 1);
        self.node_list.push(id);
        id
    }

    /// Append an existing node to the output list.
    pub fn register_node(&mut self, id: NodeId) -> Result<()> {
        item(&self.nodes, EntityKind::Node, id.0)?;
        self.node_list.push(id);
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Result<&Item<Node>> {
        item(&self.nodes, EntityKind::Node, id.0)
    }

    pub fn typed_node(&self, id: NodeId) -> Result<&Node> {
        typed(&self.nodes, EntityKind::Node, id.0)
    }

    pub fn node_list(&self) -> &[NodeId] {
        &self.node_list
    }

    // Elements

    pub fn create_element(&mut self, element: Element) -> ElementId {
        self.elements.push(Item::Typed(element));
        ElementId(self.elements.len() - 1)
    }

    /// Create an element and register it in the list of its physics family.
    pub fn add_element(&mut self, element: Element) -> ElementId {
        let physics = element.physics;
        let id = self.create_element(element);
        self.element_lists.entry(physics).or_default().push(id);
        id
    }

    pub fn add_verbatim_element(&mut self, physics: Physics, raw: RawItem) -> ElementId {
        self.elements.push(Item::Verbatim(raw));
        let id = ElementId(self.elements.len() - 1);
        self.element_lists.entry(physics).or_default().push(id);
        id
    }

    pub fn register_element(&mut self, id: ElementId) -> Result<()> {
        let physics = typed(&self.elements, EntityKind::Element, id.0)?.physics;
        self.element_lists.entry(physics).or_default().push(id);
        Ok(())
    }

    pub fn element(&self, id: ElementId) -> Result<&Item<Element>> {
        item(&self.elements, EntityKind::Element, id.0)
    }

    pub fn typed_element(&self, id: ElementId) -> Result<&Element> {
        typed(&self.elements, EntityKind::Element, id.0)
    }

    pub fn element_list(&self, physics: Physics) -> &[ElementId] {
        self.element_lists
            .get(&physics)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Registered elements in the order they are numbered.
    pub fn elements_in_numbering_order(&self) -> impl Iterator<Item = ElementId> + '_ {
        Physics::NUMBERING_ORDER
            .into_iter()
            .flat_map(|physics| self.element_list(physics).iter().copied())
    }

    /// Elements attached to each node, over all registered typed elements.
    pub fn element_links(&self) -> ElementLinks {
        let mut links = ElementLinks::new();
        for id in self.elements_in_numbering_order() {
            if let Some(Item::Typed(element)) = self.elements.get(id.0) {
                for node in &element.nodes {
                    let attached = links.entry(*node).or_default();
                    if !attached.contains(&id) {
                        attached.push(id);
                    }
                }
            }
        }
        links
    }

    // Materials

    pub fn create_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(Item::Typed(material));
        MaterialId(self.materials.len() - 1)
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = self.create_material(material);
        self.material_list.push(id);
        id
    }

    pub fn add_verbatim_material(&mut self, raw: RawItem) -> MaterialId {
        self.materials.push(Item::Verbatim(raw));
        let id = MaterialId(self.materials.len() - 1);
        self.material_list.push(id);
        id
    }

    pub fn register_material(&mut self, id: MaterialId) -> Result<()> {
        item(&self.materials, EntityKind::Material, id.0)?;
        self.material_list.push(id);
        Ok(())
    }

    pub fn material(&self, id: MaterialId) -> Result<&Item<Material>> {
        item(&self.materials, EntityKind::Material, id.0)
    }

    pub fn material_list(&self) -> &[MaterialId] {
        &self.material_list
    }

    // Functions

    pub fn create_function(&mut self, function: Function) -> FunctionId {
        self.functions.push(Item::Typed(function));
        FunctionId(self.functions.len() - 1)
    }

    pub fn add_function(&mut self, function: Function) -> FunctionId {
        let id = self.create_function(function);
        self.function_list.push(id);
        id
    }

    pub fn add_verbatim_function(&mut self, raw: RawItem) -> FunctionId {
        self.functions.push(Item::Verbatim(raw));
        let id = FunctionId(self.functions.len() - 1);
        self.function_list.push(id);
        id
    }

    pub fn register_function(&mut self, id: FunctionId) -> Result<()> {
        item(&self.functions, EntityKind::Function, id.0)?;
        self.function_list.push(id);
        Ok(())
    }

    pub fn function(&self, id: FunctionId) -> Result<&Item<Function>> {
        item(&self.functions, EntityKind::Function, id.0)
    }

    pub fn function_list(&self) -> &[FunctionId] {
        &self.function_list
    }

    // Geometry sets

    /// Create a set that is only written if a boundary condition refers to it.
    pub fn create_geometry_set(&mut self, set: GeometrySet) -> GeometrySetId {
        self.geometry_sets.push(Item::Typed(set));
        GeometrySetId(self.geometry_sets.len() - 1)
    }

    pub fn add_geometry_set(&mut self, set: GeometrySet) -> GeometrySetId {
        let geometry = set.geometry;
        let id = self.create_geometry_set(set);
        self.set_lists.entry(geometry).or_default().push(id);
        id
    }

    pub fn add_verbatim_geometry_set(
        &mut self,
        geometry: GeometryType,
        raw: RawItem,
    ) -> GeometrySetId {
        self.geometry_sets.push(Item::Verbatim(raw));
        let id = GeometrySetId(self.geometry_sets.len() - 1);
        self.set_lists.entry(geometry).or_default().push(id);
        id
    }

    pub fn register_geometry_set(&mut self, id: GeometrySetId) -> Result<()> {
        let geometry = typed(&self.geometry_sets, EntityKind::GeometrySet, id.0)?.geometry;
        self.set_lists.entry(geometry).or_default().push(id);
        Ok(())
    }

    pub fn geometry_set(&self, id: GeometrySetId) -> Result<&Item<GeometrySet>> {
        item(&self.geometry_sets, EntityKind::GeometrySet, id.0)
    }

    pub fn typed_geometry_set(&self, id: GeometrySetId) -> Result<&GeometrySet> {
        typed(&self.geometry_sets, EntityKind::GeometrySet, id.0)
    }

    /// Explicitly registered sets of one dimension.
    pub fn geometry_set_list(&self, geometry: GeometryType) -> &[GeometrySetId] {
        self.set_lists
            .get(&geometry)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Dimension of a set. Verbatim sets only know it from the list they were
    /// registered in.
    fn set_geometry(&self, id: GeometrySetId) -> Result<GeometryType> {
        match self.geometry_set(id)? {
            Item::Typed(set) => Ok(set.geometry),
            Item::Verbatim(_) => self
                .set_lists
                .iter()
                .find(|(_, ids)| ids.contains(&id))
                .map(|(geometry, _)| *geometry)
                .ok_or(ModelError::NotTyped {
                    kind: EntityKind::GeometrySet,
                    index: id.0,
                }),
        }
    }

    /// Sets to write, per dimension: the registered sets in order, followed by
    /// every set a typed boundary condition refers to that is not yet listed.
    /// All dimensions are present in the result, possibly empty.
    pub fn unique_geometry_sets(&self) -> Result<BTreeMap<GeometryType, Vec<GeometrySetId>>> {
        let mut unique: BTreeMap<GeometryType, Vec<GeometrySetId>> = GeometryType::ALL
            .into_iter()
            .map(|geometry| (geometry, self.geometry_set_list(geometry).to_vec()))
            .collect();
        let mut seen: HashSet<GeometrySetId> = unique.values().flatten().copied().collect();

        for ((_, geometry), ids) in &self.condition_lists {
            for id in ids {
                let Some(Item::Typed(condition)) = self.boundary_conditions.get(id.0) else {
                    continue;
                };
                let found = self.set_geometry(condition.geometry_set)?;
                if found != *geometry {
                    return Err(ModelError::DimensionMismatch {
                        expected: *geometry,
                        found,
                    });
                }
                if seen.insert(condition.geometry_set) {
                    unique
                        .entry(*geometry)
                        .or_default()
                        .push(condition.geometry_set);
                }
            }
        }
        Ok(unique)
    }

    // Boundary conditions

    /// Add a boundary condition after checking it against its set.
    pub fn add_boundary_condition(
        &mut self,
        condition: BoundaryCondition,
    ) -> Result<BoundaryConditionId> {
        self.check_boundary_condition(&condition)?;
        let key = (condition.kind, condition.geometry);
        self.boundary_conditions.push(Item::Typed(condition));
        let id = BoundaryConditionId(self.boundary_conditions.len() - 1);
        self.condition_lists.entry(key).or_default().push(id);
        Ok(id)
    }

    pub fn add_verbatim_boundary_condition(
        &mut self,
        key: ConditionKey,
        raw: RawItem,
    ) -> BoundaryConditionId {
        self.boundary_conditions.push(Item::Verbatim(raw));
        let id = BoundaryConditionId(self.boundary_conditions.len() - 1);
        self.condition_lists.entry(key).or_default().push(id);
        id
    }

    /// Couple `nodes` through a new, unregistered point set.
    pub fn add_coupling(
        &mut self,
        nodes: Vec<NodeId>,
        condition: impl FnOnce(GeometrySetId) -> BoundaryCondition,
    ) -> Result<BoundaryConditionId> {
        for node in &nodes {
            self.node(*node)?;
        }
        let set = self.create_geometry_set(GeometrySet::new(GeometryType::Point, nodes));
        let condition = condition(set);
        if !condition.is_coupling() {
            return Err(ModelError::type_mismatch(format!(
                "expected a point coupling, got a {} condition",
                condition.kind
            )));
        }
        self.add_boundary_condition(condition)
    }

    pub fn boundary_condition(&self, id: BoundaryConditionId) -> Result<&Item<BoundaryCondition>> {
        item(&self.boundary_conditions, EntityKind::BoundaryCondition, id.0)
    }

    pub fn boundary_condition_list(
        &self,
        kind: BoundaryKind,
        geometry: GeometryType,
    ) -> &[BoundaryConditionId] {
        self.condition_lists
            .get(&(kind, geometry))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Non-empty condition lists in output order.
    pub fn condition_groups(&self) -> impl Iterator<Item = (ConditionKey, &[BoundaryConditionId])> {
        self.condition_lists
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(key, ids)| (*key, ids.as_slice()))
    }

    /// Set dimension and coincident nodes of one condition.
    pub fn check_boundary_condition(&self, condition: &BoundaryCondition) -> Result<()> {
        let found = match self.geometry_set(condition.geometry_set)? {
            Item::Typed(set) => Some(set.geometry),
            Item::Verbatim(_) => None,
        };
        if let Some(found) = found
            && found != condition.geometry
        {
            return Err(ModelError::DimensionMismatch {
                expected: condition.geometry,
                found,
            });
        }

        if condition.needs_position_check() {
            let set = self.typed_geometry_set(condition.geometry_set)?;
            let nodes = set
                .nodes
                .iter()
                .map(|id| self.typed_node(*id))
                .collect::<Result<Vec<_>>>()?;
            coupling::check_coincident(nodes)?;
        }
        Ok(())
    }

    /// Check every registered typed boundary condition.
    pub fn check_boundary_conditions(&self) -> Result<()> {
        for ids in self.condition_lists.values() {
            for id in ids {
                if let Item::Typed(condition) = self.boundary_condition(*id)? {
                    self.check_boundary_condition(condition)?;
                }
            }
        }
        Ok(())
    }

    /// Data part of a condition line (after `E <set> - `).
    pub fn condition_data(
        &self,
        condition: &BoundaryCondition,
        numbering: &GlobalNumbering,
        links: &ElementLinks,
    ) -> Result<String> {
        match &condition.condition {
            Condition::Text(text) => Ok(text.clone()),
            Condition::Template { text, replacements } => {
                fill_template(text, replacements, numbering)
            }
            Condition::Coupling(coupling_type) => {
                let set = self.typed_geometry_set(condition.geometry_set)?;
                let mut attached = Vec::new();
                for node in &set.nodes {
                    for element in links.get(node).into_iter().flatten() {
                        attached.push(self.typed_element(*element)?.beam);
                    }
                }
                debug!(
                    "resolving {coupling_type:?} coupling over {} element(s)",
                    attached.len()
                );
                coupling::coupling_dofs(*coupling_type, &attached).map(str::to_string)
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_list.len()
    }

    pub fn element_count(&self) -> usize {
        self.element_lists.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary_condition::{CouplingType, Replacement};
    use crate::element::BeamFormulation;

    fn beam_store() -> (EntityStore, [NodeId; 4]) {
        let mut store = EntityStore::new();
        let nodes = [
            store.add_node(Node::new([0.0, 0.0, 0.0])),
            store.add_node(Node::new([1.0, 0.0, 0.0])),
            store.add_node(Node::new([1.0, 0.0, 0.0])),
            store.add_node(Node::new([2.0, 0.0, 0.0])),
        ];
        store.add_element(Element::new(
            Physics::Structure,
            "BEAM3R",
            "LINE2",
            vec![nodes[0], nodes[1]],
        ));
        store.add_element(Element::new(
            Physics::Structure,
            "BEAM3R",
            "LINE2",
            vec![nodes[2], nodes[3]],
        ));
        (store, nodes)
    }

    #[test]
    fn shared_set_is_written_once() {
        let mut store = EntityStore::new();
        let node = store.add_node(Node::new([0.0; 3]));
        let set = store.create_geometry_set(GeometrySet::new(GeometryType::Point, vec![node]));
        store
            .add_boundary_condition(BoundaryCondition::new(
                BoundaryKind::Dirichlet,
                GeometryType::Point,
                set,
                "NUMDOF 3 ONOFF 1 1 1",
            ))
            .expect("dirichlet");
        store
            .add_boundary_condition(BoundaryCondition::new(
                BoundaryKind::Neumann,
                GeometryType::Point,
                set,
                "NUMDOF 3 ONOFF 0 0 1",
            ))
            .expect("neumann");

        let unique = store.unique_geometry_sets().expect("consistent sets");
        assert_eq!(unique[&GeometryType::Point], vec![set]);
        assert!(unique[&GeometryType::Line].is_empty());
    }

    #[test]
    fn registered_sets_come_first() {
        let mut store = EntityStore::new();
        let node = store.add_node(Node::new([0.0; 3]));
        let referenced = store.create_geometry_set(GeometrySet::new(GeometryType::Point, vec![node]));
        let registered = store.add_geometry_set(GeometrySet::new(GeometryType::Point, vec![node]));
        store
            .add_boundary_condition(BoundaryCondition::new(
                BoundaryKind::Dirichlet,
                GeometryType::Point,
                referenced,
                "NUMDOF 3",
            ))
            .expect("dirichlet");
        let unique = store.unique_geometry_sets().expect("consistent sets");
        assert_eq!(unique[&GeometryType::Point], vec![registered, referenced]);
    }

    #[test]
    fn condition_dimension_must_match_set() {
        let mut store = EntityStore::new();
        let node = store.add_node(Node::new([0.0; 3]));
        let set = store.create_geometry_set(GeometrySet::new(GeometryType::Line, vec![node]));
        let err = store
            .add_boundary_condition(BoundaryCondition::new(
                BoundaryKind::Dirichlet,
                GeometryType::Point,
                set,
                "NUMDOF 3",
            ))
            .expect_err("line set on a point condition");
        assert_eq!(
            err,
            ModelError::DimensionMismatch {
                expected: GeometryType::Point,
                found: GeometryType::Line
            }
        );
    }

    #[test]
    fn coupling_checks_positions() {
        let (mut store, nodes) = beam_store();
        store
            .add_coupling(vec![nodes[1], nodes[2]], |set| {
                BoundaryCondition::coupling(set, CouplingType::Joint)
            })
            .expect("coincident nodes");

        let err = store
            .add_coupling(vec![nodes[0], nodes[3]], |set| {
                BoundaryCondition::coupling(set, CouplingType::Joint)
            })
            .expect_err("nodes 2 apart");
        assert!(matches!(err, ModelError::Geometry { .. }));

        store
            .add_coupling(vec![nodes[0], nodes[3]], |set| {
                BoundaryCondition::coupling(set, CouplingType::Joint).without_overlap_check()
            })
            .expect("check disabled");
    }

    #[test]
    fn coupling_data_follows_attached_beams() {
        let (mut store, nodes) = beam_store();
        let id = store
            .add_coupling(vec![nodes[1], nodes[2]], |set| {
                BoundaryCondition::coupling(set, CouplingType::Fix)
            })
            .expect("coincident nodes");
        let numbering = GlobalNumbering::assign(&store).expect("numbering");
        let Item::Typed(condition) = store.boundary_condition(id).expect("known id") else {
            panic!("coupling is typed");
        };
        let data = store
            .condition_data(condition, &numbering, &store.element_links())
            .expect("reissner beams");
        assert_eq!(data, "NUMDOF 9 ONOFF 1 1 1 1 1 1 0 0 0");
    }

    #[test]
    fn coupling_between_beam_theories_fails() {
        let mut store = EntityStore::new();
        let a = store.add_node(Node::new([0.0; 3]));
        let b = store.add_node(Node::new([0.0; 3]));
        let c = store.add_node(Node::new([1.0, 0.0, 0.0]));
        store.add_element(Element::new(Physics::Structure, "BEAM3R", "LINE2", vec![c, a]));
        store.add_element(
            Element::new(Physics::Structure, "BEAM3EB", "LINE2", vec![b, c])
                .with_beam(BeamFormulation::EulerBernoulli),
        );
        let id = store
            .add_coupling(vec![a, b], |set| BoundaryCondition::coupling(set, CouplingType::Joint))
            .expect("coincident nodes");
        let numbering = GlobalNumbering::assign(&store).expect("numbering");
        let Item::Typed(condition) = store.boundary_condition(id).expect("known id") else {
            panic!("coupling is typed");
        };
        let err = store
            .condition_data(condition, &numbering, &store.element_links())
            .expect_err("mixed beams");
        assert!(matches!(err, ModelError::TypeMismatch { .. }));
    }

    #[test]
    fn numbering_rejects_duplicate_registration() {
        let mut store = EntityStore::new();
        let node = store.add_node(Node::new([0.0; 3]));
        store.register_node(node).expect("known node");
        let err = GlobalNumbering::assign(&store).expect_err("node listed twice");
        assert_eq!(
            err,
            ModelError::DuplicateEntity {
                kind: EntityKind::Node,
                position: 2
            }
        );
    }

    #[test]
    fn numbering_rejects_set_registered_twice() {
        let mut store = EntityStore::new();
        let node = store.add_node(Node::new([0.0; 3]));
        let other = store.add_geometry_set(GeometrySet::new(GeometryType::Point, vec![node]));
        let set = store.add_geometry_set(GeometrySet::new(GeometryType::Point, vec![node]));
        store.register_geometry_set(set).expect("known set");
        assert_eq!(store.geometry_set_list(GeometryType::Point), &[other, set, set]);

        let err = GlobalNumbering::assign(&store).expect_err("set listed twice");
        assert_eq!(
            err,
            ModelError::DuplicateEntity {
                kind: EntityKind::GeometrySet,
                position: 3
            }
        );
    }

    #[test]
    fn numbering_is_positional_with_fluid_first() {
        let mut store = EntityStore::new();
        let a = store.add_node(Node::new([0.0; 3]));
        let b = store.add_node(Node::new([1.0, 0.0, 0.0]));
        let structure = store.add_element(Element::new(Physics::Structure, "BEAM3R", "LINE2", vec![a, b]));
        let fluid = store.add_element(Element::new(Physics::Fluid, "FLUID", "LINE2", vec![a, b]));

        let numbering = GlobalNumbering::assign(&store).expect("numbering");
        assert_eq!(numbering.node(b), Ok(2));
        assert_eq!(numbering.element(fluid), Ok(1));
        assert_eq!(numbering.element(structure), Ok(2));
        assert_eq!(numbering, GlobalNumbering::assign(&store).expect("numbering"));
    }

    #[test]
    fn unregistered_reference_is_reported() {
        let mut store = EntityStore::new();
        let loose = store.create_node(Node::new([0.0; 3]));
        let element = Element::new(Physics::Structure, "BEAM3R", "LINE2", vec![loose]);
        let numbering = GlobalNumbering::assign(&store).expect("numbering");
        assert_eq!(
            element.dat_line(1, &numbering),
            Err(ModelError::Unnumbered {
                kind: EntityKind::Node,
                index: 0
            })
        );
    }

    #[test]
    fn template_cites_function_numbers() {
        let mut store = EntityStore::new();
        let node = store.add_node(Node::new([0.0; 3]));
        store.add_function(Function::new(["SYMBOLIC_FUNCTION_OF_TIME a"]));
        let function = store.add_function(Function::new(["SYMBOLIC_FUNCTION_OF_TIME t"]));
        let set = store.add_geometry_set(GeometrySet::new(GeometryType::Point, vec![node]));
        let id = store
            .add_boundary_condition(BoundaryCondition::template(
                BoundaryKind::Neumann,
                GeometryType::Point,
                set,
                "NUMDOF 3 ONOFF 0 0 1 VAL 0 0 1 FUNCT 0 0 {}",
                vec![Replacement::Function(function)],
            ))
            .expect("neumann");
        let numbering = GlobalNumbering::assign(&store).expect("numbering");
        let Item::Typed(condition) = store.boundary_condition(id).expect("known id") else {
            panic!("condition is typed");
        };
        let data = store
            .condition_data(condition, &numbering, &ElementLinks::new())
            .expect("one placeholder");
        assert_eq!(data, "NUMDOF 3 ONOFF 0 0 1 VAL 0 0 1 FUNCT 0 0 2");
    }
}
