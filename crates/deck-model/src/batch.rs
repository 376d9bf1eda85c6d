//! Mesh batches handed over by an external geometry generator.

use crate::element::{BeamFormulation, Element, Physics};
use crate::error::{EntityKind, ModelError, Result};
use crate::ids::{ElementId, MaterialId, NodeId};
use crate::node::Node;
use crate::store::EntityStore;

/// An element of a batch, nodes given as 0-based indices into the batch nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchElement {
    pub physics: Physics,
    pub type_name: String,
    pub shape: String,
    pub nodes: Vec<usize>,
    pub material: Option<MaterialId>,
    /// Overrides the formulation derived from the type name
    pub beam: Option<BeamFormulation>,
    pub rest: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBatch {
    pub nodes: Vec<[f64; 3]>,
    pub elements: Vec<BatchElement>,
}

/// Source of generated geometry, e.g. a beam line meshed into segments.
pub trait MeshProvider {
    fn mesh_batch(&self) -> Result<MeshBatch>;
}

/// Ids of everything a batch added, in batch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchIds {
    pub nodes: Vec<NodeId>,
    pub elements: Vec<ElementId>,
}

impl EntityStore {
    /// Add and register all nodes and elements of `batch`. The batch is
    /// checked first, a bad index leaves the store unchanged.
    pub fn add_mesh_batch(&mut self, batch: MeshBatch) -> Result<BatchIds> {
        for element in &batch.elements {
            if let Some(&index) = element.nodes.iter().find(|&&i| i >= batch.nodes.len()) {
                return Err(ModelError::DanglingReference {
                    kind: EntityKind::Node,
                    index: index + 1,
                    available: batch.nodes.len(),
                });
            }
            if let Some(material) = element.material {
                self.material(material)?;
            }
        }

        let nodes: Vec<NodeId> = batch
            .nodes
            .into_iter()
            .map(|coordinates| self.add_node(Node::new(coordinates)))
            .collect();
        let elements = batch
            .elements
            .into_iter()
            .map(|element| {
                let mut built = Element::new(
                    element.physics,
                    element.type_name,
                    element.shape,
                    element.nodes.iter().map(|&i| nodes[i]).collect(),
                )
                .with_rest(element.rest);
                built.material = element.material;
                if let Some(beam) = element.beam {
                    built.beam = Some(beam);
                }
                self.add_element(built)
            })
            .collect();
        Ok(BatchIds { nodes, elements })
    }

    pub fn add_from_provider(&mut self, provider: &impl MeshProvider) -> Result<BatchIds> {
        let batch = provider.mesh_batch()?;
        self.add_mesh_batch(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::numbering::GlobalNumbering;

    /// Straight Reissner beam from the origin along x, two nodes per element.
    struct StraightBeam {
        segments: usize,
        length: f64,
        material: MaterialId,
    }

    impl MeshProvider for StraightBeam {
        fn mesh_batch(&self) -> Result<MeshBatch> {
            let step = self.length / self.segments as f64;
            let nodes = (0..=self.segments)
                .map(|i| [i as f64 * step, 0.0, 0.0])
                .collect();
            let elements = (0..self.segments)
                .map(|i| BatchElement {
                    physics: Physics::Structure,
                    type_name: "BEAM3R".to_string(),
                    shape: "LINE2".to_string(),
                    nodes: vec![i, i + 1],
                    material: Some(self.material),
                    beam: None,
                    rest: String::new(),
                })
                .collect();
            Ok(MeshBatch { nodes, elements })
        }
    }

    #[test]
    fn provider_batch_is_resolved_to_ids() {
        let mut store = EntityStore::new();
        let material = store.add_material(Material::new("MAT_BeamReissnerElastHyper YOUNG 1"));
        let ids = store
            .add_from_provider(&StraightBeam {
                segments: 3,
                length: 3.0,
                material,
            })
            .expect("valid batch");
        assert_eq!(ids.nodes.len(), 4);
        assert_eq!(ids.elements.len(), 3);

        let numbering = GlobalNumbering::assign(&store).expect("numbering");
        let last = store.typed_element(ids.elements[2]).expect("typed element");
        assert_eq!(last.beam, Some(BeamFormulation::Reissner));
        assert_eq!(
            last.dat_line(3, &numbering).expect("numbered references"),
            "3 BEAM3R LINE2 3 4 MAT 1"
        );
    }

    #[test]
    fn bad_local_index_leaves_store_untouched() {
        let mut store = EntityStore::new();
        let batch = MeshBatch {
            nodes: vec![[0.0; 3]],
            elements: vec![BatchElement {
                physics: Physics::Structure,
                type_name: "BEAM3R".to_string(),
                shape: "LINE2".to_string(),
                nodes: vec![0, 1],
                material: None,
                beam: None,
                rest: String::new(),
            }],
        };
        let err = store.add_mesh_batch(batch).expect_err("node 1 missing");
        assert_eq!(
            err,
            ModelError::DanglingReference {
                kind: EntityKind::Node,
                index: 2,
                available: 1
            }
        );
        assert!(store.is_empty_mesh());
    }
}
