//! Global numbers assigned to the written collections of a store.
//!
//! Numbers are positions, computed once per write and thrown away after the
//! deck is rendered. Entities never carry their own number.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::boundary_condition::BoundaryKind;
use crate::error::{EntityKind, ModelError, Result};
use crate::geometry::GeometryType;
use crate::ids::{
    BoundaryConditionId, ElementId, FunctionId, GeometrySetId, MaterialId, NodeId,
};
use crate::store::EntityStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalNumbering {
    nodes: HashMap<NodeId, usize>,
    elements: HashMap<ElementId, usize>,
    materials: HashMap<MaterialId, usize>,
    functions: HashMap<FunctionId, usize>,
    sets: HashMap<GeometrySetId, usize>,
    boundary_conditions: HashMap<BoundaryConditionId, usize>,
    unique_sets: BTreeMap<GeometryType, Vec<GeometrySetId>>,
}

impl GlobalNumbering {
    /// Number every collection of `store`.
    ///
    /// Elements are numbered fluid first, then structure. Geometry sets are
    /// deduplicated per dimension and numbered within their dimension.
    pub fn assign(store: &EntityStore) -> Result<Self> {
        let mut numbering = Self::default();

        number_list(EntityKind::Node, store.node_list(), &mut numbering.nodes)?;
        let elements: Vec<ElementId> = store.elements_in_numbering_order().collect();
        number_list(EntityKind::Element, &elements, &mut numbering.elements)?;
        number_list(
            EntityKind::Material,
            store.material_list(),
            &mut numbering.materials,
        )?;
        number_list(
            EntityKind::Function,
            store.function_list(),
            &mut numbering.functions,
        )?;
        for kind in BoundaryKind::ALL {
            for geometry in GeometryType::ALL {
                let mut per_list = HashMap::new();
                number_list(
                    EntityKind::BoundaryCondition,
                    store.boundary_condition_list(kind, geometry),
                    &mut per_list,
                )?;
                numbering.boundary_conditions.extend(per_list);
            }
        }

        let unique_sets = store.unique_geometry_sets()?;
        for ids in unique_sets.values() {
            let mut per_list = HashMap::new();
            number_list(EntityKind::GeometrySet, ids, &mut per_list)?;
            numbering.sets.extend(per_list);
        }
        numbering.unique_sets = unique_sets;

        Ok(numbering)
    }

    pub fn node(&self, id: NodeId) -> Result<usize> {
        lookup(&self.nodes, id, EntityKind::Node, id.index())
    }

    pub fn element(&self, id: ElementId) -> Result<usize> {
        lookup(&self.elements, id, EntityKind::Element, id.index())
    }

    pub fn material(&self, id: MaterialId) -> Result<usize> {
        lookup(&self.materials, id, EntityKind::Material, id.index())
    }

    pub fn function(&self, id: FunctionId) -> Result<usize> {
        lookup(&self.functions, id, EntityKind::Function, id.index())
    }

    pub fn geometry_set(&self, id: GeometrySetId) -> Result<usize> {
        lookup(&self.sets, id, EntityKind::GeometrySet, id.index())
    }

    pub fn boundary_condition(&self, id: BoundaryConditionId) -> Result<usize> {
        lookup(
            &self.boundary_conditions,
            id,
            EntityKind::BoundaryCondition,
            id.index(),
        )
    }

    /// Deduplicated sets of one dimension, in output order.
    pub fn unique_sets(&self, geometry: GeometryType) -> &[GeometrySetId] {
        self.unique_sets
            .get(&geometry)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) fn insert_node(&mut self, id: NodeId, number: usize) {
        self.nodes.insert(id, number);
    }

    #[cfg(test)]
    pub(crate) fn insert_function(&mut self, id: FunctionId, number: usize) {
        self.functions.insert(id, number);
    }
}

fn number_list<I: Copy + Eq + Hash>(
    kind: EntityKind,
    ids: &[I],
    numbers: &mut HashMap<I, usize>,
) -> Result<()> {
    for (position, id) in ids.iter().enumerate() {
        if numbers.insert(*id, position + 1).is_some() {
            return Err(ModelError::DuplicateEntity {
                kind,
                position: position + 1,
            });
        }
    }
    Ok(())
}

fn lookup<I: Eq + Hash>(
    numbers: &HashMap<I, usize>,
    id: I,
    kind: EntityKind,
    index: usize,
) -> Result<usize> {
    numbers
        .get(&id)
        .copied()
        .ok_or(ModelError::Unnumbered { kind, index })
}
