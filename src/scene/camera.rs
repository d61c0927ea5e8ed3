//! Default view orientation per shape.

use crate::catalog::{ShapeDescriptor, ShapeFamily};
use crate::primitives::{Axis, Rotation};

/// The rotation that presents `shape` in its conventional orientation, or
/// `None` when the default view already does.
///
/// Keyed on domain count; six-domain shapes additionally look at their
/// family so that planar and T-shaped arrangements are seen face-on.
#[must_use]
pub fn orientation_for(shape: &ShapeDescriptor) -> Option<Rotation> {
    match shape.domain_count() {
        2 => Some(Rotation::new(90.0, Axis::Y)),
        3 => Some(Rotation::new(90.0, Axis::Z)),
        // Idealized tetrahedra are already canonical.
        4 => None,
        6 => match shape.family {
            ShapeFamily::SquarePlanar | ShapeFamily::TShaped => None,
            ShapeFamily::Linear => Some(Rotation::new(90.0, Axis::Z)),
            _ => Some(Rotation::new(90.0, Axis::X)),
        },
        _ => Some(Rotation::new(-90.0, Axis::X)),
    }
}
