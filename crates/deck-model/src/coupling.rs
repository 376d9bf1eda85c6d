//! Checks and DOF selection for point couplings.

use crate::boundary_condition::CouplingType;
use crate::element::BeamFormulation;
use crate::error::{ModelError, Result};
use crate::node::Node;

/// Maximum distance between nodes that count as one position.
pub const EPS_POS: f64 = 1e-10;

/// Fail with [`ModelError::Geometry`] if any node lies further than
/// [`EPS_POS`] from the first one.
pub fn check_coincident<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Result<()> {
    let mut nodes = nodes.into_iter();
    let Some(first) = nodes.next() else {
        return Ok(());
    };
    let distance = nodes.map(|node| node.distance(first)).fold(0.0, f64::max);
    if distance > EPS_POS {
        return Err(ModelError::Geometry {
            distance,
            tolerance: EPS_POS,
        });
    }
    Ok(())
}

/// Condition string of a coupling, chosen from the beam formulations of all
/// elements attached to the coupled nodes (`None` for non-beam elements).
pub fn coupling_dofs(
    coupling_type: CouplingType,
    attached: &[Option<BeamFormulation>],
) -> Result<&'static str> {
    let Some(first) = attached.first() else {
        return Err(ModelError::type_mismatch(
            "no element is attached to the coupled nodes",
        ));
    };
    let Some(beam) = *first else {
        return Err(ModelError::type_mismatch(
            "an element attached to the coupling is not a beam",
        ));
    };

    for other in attached {
        let Some(other) = *other else {
            return Err(ModelError::type_mismatch(
                "an element attached to the coupling is not a beam",
            ));
        };
        if !beam.same_theory(other) {
            return Err(ModelError::type_mismatch(format!(
                "the first element is a {beam} beam, another one a {other} beam"
            )));
        }
        if let BeamFormulation::Kirchhoff { rotvec: false } = other {
            return Err(ModelError::type_mismatch(
                "couplings of Kirchhoff beams without rotation vector DOFs are not supported",
            ));
        }
    }

    let dofs = match (coupling_type, beam) {
        (CouplingType::Joint, BeamFormulation::Reissner) => "NUMDOF 9 ONOFF 1 1 1 0 0 0 0 0 0",
        (CouplingType::Joint, _) => "NUMDOF 7 ONOFF 1 1 1 0 0 0 0",
        (CouplingType::Fix, BeamFormulation::Reissner) => "NUMDOF 9 ONOFF 1 1 1 1 1 1 0 0 0",
        (CouplingType::Fix, _) => "NUMDOF 7 ONOFF 1 1 1 1 1 1 0",
    };
    Ok(dofs)
}
