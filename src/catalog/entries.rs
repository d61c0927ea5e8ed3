//! Hand-authored domain tables.
//!
//! Positions for 2, 3, 5 and 6 domains are the canonical VSEPR directions.
//! The 4-domain rows only approximate a tetrahedron (base ring at z = -0.8333,
//! apex on +z); the scene generator replaces them with exact vertices.

use super::{ElectronDomain as D, ShapeDescriptor, ShapeFamily};

/// Equatorial in-plane components at 120° on a 2.5 shell.
const EQ_X: f32 = -1.25;
const EQ_Y: f32 = 2.165;

/// Approximate tetrahedral base ring.
const TET_X: f32 = 2.357;
const TET_HALF_X: f32 = -1.1785;
const TET_Y: f32 = 2.0413;
const TET_Z: f32 = -0.8333;

fn shape(
    domain_count: usize,
    lone_pairs: usize,
    family: ShapeFamily,
    domains: Vec<D>,
) -> ShapeDescriptor {
    ShapeDescriptor {
        display_name: format!(
            "{domain_count} electron domains, {lone_pairs} LP: {}",
            family.name()
        ),
        family,
        domains,
    }
}

pub(super) fn standard_shapes() -> Vec<ShapeDescriptor> {
    vec![
        shape(
            2,
            0,
            ShapeFamily::Linear,
            vec![D::bonded(0.0, 0.0, 2.5), D::bonded(0.0, 0.0, -2.5)],
        ),
        shape(
            3,
            0,
            ShapeFamily::TrigonalPlanar,
            vec![
                D::bonded(2.5, 0.0, 0.0),
                D::bonded(EQ_X, EQ_Y, 0.0),
                D::bonded(EQ_X, -EQ_Y, 0.0),
            ],
        ),
        shape(
            3,
            1,
            ShapeFamily::Bent,
            vec![
                D::bonded(2.5, 0.0, 0.0),
                D::bonded(EQ_X, EQ_Y, 0.0),
                D::lone_pair(EQ_X, -EQ_Y, 0.0),
            ],
        ),
        shape(
            4,
            0,
            ShapeFamily::Tetrahedral,
            vec![
                D::bonded(TET_X, 0.0, TET_Z),
                D::bonded(TET_HALF_X, TET_Y, TET_Z),
                D::bonded(TET_HALF_X, -TET_Y, TET_Z),
                D::bonded(0.0, 0.0, 2.5),
            ],
        ),
        shape(
            4,
            1,
            ShapeFamily::TrigonalPyramidal,
            vec![
                D::bonded(TET_X, 0.0, TET_Z),
                D::bonded(TET_HALF_X, TET_Y, TET_Z),
                D::bonded(TET_HALF_X, -TET_Y, TET_Z),
                D::lone_pair(0.0, 0.0, 2.5),
            ],
        ),
        shape(
            4,
            2,
            ShapeFamily::Bent,
            vec![
                D::bonded(TET_X, 0.0, TET_Z),
                D::lone_pair(TET_HALF_X, TET_Y, TET_Z),
                D::lone_pair(TET_HALF_X, -TET_Y, TET_Z),
                D::bonded(0.0, 0.0, 2.5),
            ],
        ),
        shape(
            5,
            0,
            ShapeFamily::TrigonalBipyramidal,
            vec![
                D::bonded(0.0, 0.0, 2.5),
                D::bonded(0.0, 0.0, -2.5),
                D::bonded(2.5, 0.0, 0.0),
                D::bonded(EQ_X, EQ_Y, 0.0),
                D::bonded(EQ_X, -EQ_Y, 0.0),
            ],
        ),
        shape(
            5,
            1,
            ShapeFamily::Seesaw,
            vec![
                D::bonded(0.0, 0.0, 2.5),
                D::bonded(0.0, 0.0, -2.5),
                D::bonded(2.5, 0.0, 0.0),
                D::bonded(EQ_X, EQ_Y, 0.0),
                D::lone_pair(EQ_X, -EQ_Y, 0.0),
            ],
        ),
        shape(
            5,
            2,
            ShapeFamily::TShaped,
            vec![
                D::bonded(0.0, 0.0, 2.5),
                D::bonded(0.0, 0.0, -2.5),
                D::bonded(2.5, 0.0, 0.0),
                D::lone_pair(EQ_X, EQ_Y, 0.0),
                D::lone_pair(EQ_X, -EQ_Y, 0.0),
            ],
        ),
        shape(
            5,
            3,
            ShapeFamily::Linear,
            vec![
                D::bonded(0.0, 0.0, 2.5),
                D::bonded(0.0, 0.0, -2.5),
                D::lone_pair(2.5, 0.0, 0.0),
                D::lone_pair(EQ_X, EQ_Y, 0.0),
                D::lone_pair(EQ_X, -EQ_Y, 0.0),
            ],
        ),
        shape(
            6,
            0,
            ShapeFamily::Octahedral,
            vec![
                D::bonded(0.0, 0.0, 2.5),
                D::bonded(0.0, 0.0, -2.5),
                D::bonded(2.5, 0.0, 0.0),
                D::bonded(-2.5, 0.0, 0.0),
                D::bonded(0.0, 2.5, 0.0),
                D::bonded(0.0, -2.5, 0.0),
            ],
        ),
        shape(
            6,
            1,
            ShapeFamily::SquarePyramidal,
            vec![
                D::lone_pair(0.0, 0.0, 2.5),
                D::bonded(0.0, 0.0, -2.5),
                D::bonded(2.5, 0.0, 0.0),
                D::bonded(-2.5, 0.0, 0.0),
                D::bonded(0.0, 2.5, 0.0),
                D::bonded(0.0, -2.5, 0.0),
            ],
        ),
        shape(
            6,
            2,
            ShapeFamily::SquarePlanar,
            vec![
                D::lone_pair(0.0, 0.0, 2.5),
                D::lone_pair(0.0, 0.0, -2.5),
                D::bonded(2.5, 0.0, 0.0),
                D::bonded(-2.5, 0.0, 0.0),
                D::bonded(0.0, 2.5, 0.0),
                D::bonded(0.0, -2.5, 0.0),
            ],
        ),
        shape(
            6,
            3,
            ShapeFamily::TShaped,
            vec![
                D::lone_pair(0.0, 0.0, 2.5),
                D::lone_pair(0.0, 0.0, -2.5),
                D::lone_pair(2.5, 0.0, 0.0),
                D::bonded(-2.5, 0.0, 0.0),
                D::bonded(0.0, 2.5, 0.0),
                D::bonded(0.0, -2.5, 0.0),
            ],
        ),
        shape(
            6,
            4,
            ShapeFamily::Linear,
            vec![
                D::lone_pair(0.0, 0.0, 2.5),
                D::lone_pair(0.0, 0.0, -2.5),
                D::lone_pair(2.5, 0.0, 0.0),
                D::lone_pair(-2.5, 0.0, 0.0),
                D::bonded(0.0, 2.5, 0.0),
                D::bonded(0.0, -2.5, 0.0),
            ],
        ),
    ]
}
