//! Vector helpers shared by lobe and arc construction.

use std::borrow::Cow;

use glam::Vec3;

use crate::catalog::{ElectronDomain, ShapeDescriptor, SHELL_RADIUS};

/// Below this magnitude an x/y component counts as zero.
const AXIS_TOLERANCE: f32 = 1e-6;

/// A unit vector perpendicular to `v`, chosen in the horizontal (XY) plane.
///
/// For `v` along the vertical axis (x and y both within tolerance of zero)
/// this is `+X`; otherwise it is `(-vy, vx, 0)` normalized, i.e. the
/// horizontal projection of `v` rotated a quarter turn about Z.
#[must_use]
pub fn perpendicular_vector(v: Vec3) -> Vec3 {
    if v.x.abs() < AXIS_TOLERANCE && v.y.abs() < AXIS_TOLERANCE {
        return Vec3::X;
    }
    Vec3::new(-v.y, v.x, 0.0).normalize()
}

/// Vertices of a regular tetrahedron inscribed in a sphere of `radius`.
#[must_use]
pub fn tetrahedral_vertices(radius: f32) -> [Vec3; 4] {
    let s = radius / 3.0f32.sqrt();
    [
        Vec3::new(s, s, s),
        Vec3::new(s, -s, -s),
        Vec3::new(-s, s, -s),
        Vec3::new(-s, -s, s),
    ]
}

/// Replace approximate 4-domain positions with exact tetrahedral vertices.
///
/// Domain kinds are kept by index. Shapes with any other domain count are
/// returned untouched, so catalog entries are only ever borrowed.
#[must_use]
pub fn idealize(shape: &ShapeDescriptor) -> Cow<'_, ShapeDescriptor> {
    if shape.domain_count() != 4 {
        return Cow::Borrowed(shape);
    }

    let domains = shape
        .domains
        .iter()
        .zip(tetrahedral_vertices(SHELL_RADIUS))
        .map(|(domain, position)| ElectronDomain {
            position,
            kind: domain.kind,
        })
        .collect();

    Cow::Owned(ShapeDescriptor {
        display_name: shape.display_name.clone(),
        family: shape.family,
        domains,
    })
}
