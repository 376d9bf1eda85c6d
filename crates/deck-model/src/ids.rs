//! Typed handles into the arenas of an [`EntityStore`](crate::EntityStore).

use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// Position in the arena, in creation order.
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }
    };
}

entity_id!(
    /// Handle of a node.
    NodeId,
    "N"
);
entity_id!(
    /// Handle of an element.
    ElementId,
    "E"
);
entity_id!(MaterialId, "M");
entity_id!(FunctionId, "F");
entity_id!(
    /// Handle of a geometry set. Sets are created first and registered or
    /// referenced afterwards.
    GeometrySetId,
    "S"
);
entity_id!(BoundaryConditionId, "BC");
