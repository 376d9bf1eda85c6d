//! Entity model of a deck: nodes, elements, materials, functions, geometry
//! sets and boundary conditions, held in one [`EntityStore`].
//!
//! Entities reference each other through typed ids. Global numbers are not
//! stored anywhere; [`GlobalNumbering::assign`] computes them from the
//! membership lists of a store right before a deck is written.

pub mod batch;
pub mod boundary_condition;
pub mod coupling;
pub mod element;
pub mod error;
pub mod format;
pub mod function;
pub mod geometry;
pub mod geometry_set;
pub mod ids;
pub mod item;
pub mod material;
pub mod node;
pub mod numbering;
pub mod store;

pub use batch::{BatchElement, BatchIds, MeshBatch, MeshProvider};
pub use boundary_condition::{
    BoundaryCondition, BoundaryKind, Condition, CouplingType, IndexedCondition, Replacement,
};
pub use coupling::EPS_POS;
pub use element::{BeamFormulation, Element, IndexedElement, Physics};
pub use error::{EntityKind, ModelError, Result};
pub use format::DeckFormat;
pub use function::Function;
pub use geometry::GeometryType;
pub use geometry_set::{GeometrySet, IndexedSetLine};
pub use ids::{BoundaryConditionId, ElementId, FunctionId, GeometrySetId, MaterialId, NodeId};
pub use item::{Item, RawItem};
pub use material::Material;
pub use node::Node;
pub use numbering::GlobalNumbering;
pub use store::{ConditionKey, ElementLinks, EntityStore};
