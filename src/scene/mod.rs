//! Procedural scene generation for a single VSEPR shape.
//!
//! A render is a pure function of the shape, the `show_angles` flag and the
//! [`Options`]: it emits, in order, the coordinate axes, the central atom,
//! one lobe per electron domain, the optional bond-angle annotations, the
//! default camera rotation and a zoom-to-fit, then finalizes the surface.
//!
//! Four-domain shapes are rendered from an idealized copy (see
//! [`geometry::idealize`]); the catalog itself is never modified.

pub mod arc;
pub mod camera;
pub mod geometry;
pub mod lobe;

use glam::Vec3;

use crate::catalog::ShapeDescriptor;
use crate::options::Options;
use crate::primitives::{Cylinder, Sphere};
use crate::surface::{DrawingSurface, Scene, SceneRecorder};

pub use arc::{AngleArc, DEFAULT_ARC_SEGMENTS};
pub use camera::orientation_for;
pub use geometry::{idealize, perpendicular_vector, tetrahedral_vertices};
pub use lobe::{lobe_samples, teardrop_radius, TeardropProfile};

/// Render `shape` with default options into a recorded [`Scene`].
#[must_use]
pub fn generate_scene(shape: &ShapeDescriptor, show_angles: bool) -> Scene {
    SceneGenerator::default().generate_scene(shape, show_angles)
}

// ---------------------------------------------------------------------------
// SceneGenerator
// ---------------------------------------------------------------------------

/// Turns shape descriptors into primitives according to a set of
/// [`Options`].
#[derive(Debug, Clone, Default)]
pub struct SceneGenerator {
    options: Options,
}

impl SceneGenerator {
    /// Create a generator using `options`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// The options this generator renders with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Render `shape` into a [`SceneRecorder`] titled with its display name
    /// and framed for the configured camera.
    #[must_use]
    pub fn generate_scene(
        &self,
        shape: &ShapeDescriptor,
        show_angles: bool,
    ) -> Scene {
        let recorder = SceneRecorder::new(&shape.display_name)
            .with_camera(&self.options.camera);
        self.render(shape, show_angles, recorder)
    }

    /// Render `shape` onto `surface` and finalize it.
    ///
    /// Angle annotations are drawn only when `show_angles` is set and every
    /// domain is a bonded pair.
    pub fn render<S: DrawingSurface>(
        &self,
        shape: &ShapeDescriptor,
        show_angles: bool,
        mut surface: S,
    ) -> S::Output {
        let shape = idealize(shape);

        if self.options.display.show_axes {
            self.emit_axes(&mut surface);
        }
        if self.options.display.show_nucleus {
            surface.add_sphere(Sphere {
                center: Vec3::ZERO,
                radius: self.options.geometry.nucleus_radius,
                color: self.options.colors.nucleus.clone(),
                opacity: 1.0,
            });
        }

        for domain in &shape.domains {
            lobe::emit_lobe(&mut surface, domain, &self.options);
        }

        let arcs = if show_angles && shape.is_all_bonded() {
            arc::emit_angle_annotations(
                &mut surface,
                &shape.domains,
                &self.options,
            )
        } else {
            0
        };

        let rotation = orientation_for(&shape);
        if let Some(rotation) = rotation {
            surface.rotate(rotation);
        }
        surface.zoom_to_fit();

        log::debug!(
            "rendered '{}': {} domains, {} angle arcs, rotation {:?}",
            shape.display_name,
            shape.domain_count(),
            arcs,
            rotation
        );

        surface.finalize()
    }

    /// Three axis cylinders through the origin, colored X/Y/Z.
    fn emit_axes<S: DrawingSurface>(&self, surface: &mut S) {
        let display = &self.options.display;
        let axes = [Vec3::X, Vec3::Y, Vec3::Z];
        for (axis, color) in axes.iter().zip(&self.options.colors.axes) {
            let half = *axis * display.axis_length;
            surface.add_cylinder(Cylinder {
                start: -half,
                end: half,
                radius: display.axis_radius,
                color: color.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, DomainKind, SHELL_RADIUS};
    use crate::primitives::{Axis, Primitive, Rotation};

    fn shape(domains: u8, lone_pairs: u8) -> &'static ShapeDescriptor {
        Catalog::global().get(domains, lone_pairs).unwrap()
    }

    fn electron_dots(scene: &Scene) -> usize {
        scene
            .spheres()
            .filter(|s| s.radius == 0.1 && s.color == "black")
            .count()
    }

    #[test]
    fn linear_shape_end_to_end() {
        let scene = generate_scene(shape(2, 0), true);

        let labels: Vec<_> = scene.labels().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "180.0°");
        assert_eq!(scene.rotations, vec![Rotation::new(90.0, Axis::Y)]);
        assert!(scene.fit.is_some());
        assert_eq!(scene.title, shape(2, 0).display_name);
    }

    #[test]
    fn trigonal_pyramid_end_to_end() {
        let scene = generate_scene(shape(4, 1), true);

        assert!(scene.rotations.is_empty());
        assert_eq!(scene.labels().count(), 0);
        // Exactly one lone pair: two electron dots.
        assert_eq!(electron_dots(&scene), 2);

        // Ligands sit on the idealized vertices of the bonded domains only.
        let vertices = tetrahedral_vertices(SHELL_RADIUS);
        let ligands: Vec<Vec3> = scene
            .spheres()
            .filter(|s| s.radius == 0.5 && s.color == "lightblue")
            .map(|s| s.center)
            .collect();
        assert_eq!(ligands, vertices[..3].to_vec());

        // The lone pair's electrons straddle the midpoint of the fourth vertex.
        let dots: Vec<Vec3> = scene
            .spheres()
            .filter(|s| s.radius == 0.1)
            .map(|s| s.center)
            .collect();
        let middle = (dots[0] + dots[1]) / 2.0;
        assert!((middle - vertices[3] * 0.5).length() < 1e-5);
    }

    #[test]
    fn four_domain_shapes_always_idealize() {
        let vertices = tetrahedral_vertices(SHELL_RADIUS);
        for lp in 0..=2 {
            let original = shape(4, lp);
            let ideal = idealize(original);
            for (i, domain) in ideal.domains.iter().enumerate() {
                assert_eq!(domain.position, vertices[i]);
                assert_eq!(domain.kind, original.domains[i].kind);
            }
        }
    }

    #[test]
    fn lone_pairs_suppress_angles() {
        for (key, shape) in Catalog::global().iter() {
            if key.lone_pairs == 0 {
                continue;
            }
            for show_angles in [true, false] {
                let scene = generate_scene(shape, show_angles);
                assert_eq!(scene.labels().count(), 0, "{key}");
                assert!(
                    scene.cylinders().all(|c| c.color != "lightgray"),
                    "{key} drew an arc"
                );
            }
        }
    }

    #[test]
    fn angles_only_when_requested() {
        let scene = generate_scene(shape(6, 0), false);
        assert_eq!(scene.labels().count(), 0);
        assert_eq!(scene.cylinders().count(), 3);
    }

    #[test]
    fn octahedral_labels_skip_straight_angles() {
        let scene = generate_scene(shape(6, 0), true);
        // 15 pairs: 3 opposed (unlabeled), 12 at right angles.
        let labels: Vec<_> = scene.labels().collect();
        assert_eq!(labels.len(), 12);
        assert!(labels.iter().all(|l| l.text == "90.0°"));
        let arc_segments = scene
            .cylinders()
            .filter(|c| c.color == "lightgray")
            .count();
        assert_eq!(arc_segments, 15 * 30);
    }

    #[test]
    fn tetrahedral_labels_read_109_5() {
        let scene = generate_scene(shape(4, 0), true);
        let labels: Vec<_> = scene.labels().collect();
        assert_eq!(labels.len(), 6);
        assert!(labels.iter().all(|l| l.text == "109.5°"));
    }

    #[test]
    fn bipyramid_axial_pair_has_no_label() {
        let scene = generate_scene(shape(5, 0), true);
        // 10 pairs; the axial pair is straight and unlabeled for 5 domains.
        assert_eq!(scene.labels().count(), 9);
        assert_eq!(scene.rotations, vec![Rotation::new(-90.0, Axis::X)]);
    }

    #[test]
    fn emission_order_and_counts() {
        let scene = generate_scene(shape(3, 1), false);
        assert!(matches!(scene.primitives[0], Primitive::Cylinder(_)));
        assert!(matches!(scene.primitives[2], Primitive::Cylinder(_)));
        assert!(matches!(
            &scene.primitives[3],
            Primitive::Sphere(nucleus)
                if nucleus.center == Vec3::ZERO && nucleus.radius == 0.5
        ));
        // 3 axes + nucleus + 2 bonded lobes (19 + ligand) + lone pair (19 + 2).
        assert_eq!(scene.primitives.len(), 3 + 1 + 2 * 20 + 21);
        assert_eq!(electron_dots(&scene), 2);
    }

    #[test]
    fn furniture_can_be_disabled() {
        let mut options = Options::default();
        options.display.show_axes = false;
        options.display.show_nucleus = false;
        let generator = SceneGenerator::new(options);
        let scene = generator.generate_scene(shape(2, 0), false);
        assert_eq!(scene.cylinders().count(), 0);
        assert_eq!(scene.spheres().count(), 2 * 20);
    }

    #[test]
    fn renders_are_deterministic() {
        for (_, shape) in Catalog::global().iter() {
            assert_eq!(generate_scene(shape, true), generate_scene(shape, true));
        }
    }

    #[test]
    fn fit_covers_ligands() {
        let scene = generate_scene(shape(6, 0), false);
        let fit = scene.fit.unwrap();
        assert!(fit.radius >= SHELL_RADIUS + 0.5 - 1e-4);
        assert!((fit.zoom - 1.0).abs() < 1e-6);
    }

    #[test]
    fn camera_options_shape_the_fit() {
        let mut options = Options::default();
        options.camera.fovy = 20.0;
        options.camera.fit_padding = 3.0;
        let framed = SceneGenerator::new(options).generate_scene(shape(6, 0), false);
        let default = generate_scene(shape(6, 0), false);

        let (fit, reference) = (framed.fit.unwrap(), default.fit.unwrap());
        assert_eq!(fit.radius, reference.radius);
        assert!(fit.distance > reference.distance);
        assert!(fit.zoom < 1.0);
        assert_eq!(framed.primitives, default.primitives);
    }

    #[test]
    fn electron_dots_follow_lone_pair_count() {
        for (key, shape) in Catalog::global().iter() {
            let scene = generate_scene(shape, false);
            assert_eq!(
                electron_dots(&scene),
                2 * key.lone_pairs as usize,
                "{key}"
            );
            let lone_pair_lobes = shape
                .domains
                .iter()
                .filter(|d| d.kind == DomainKind::LonePair)
                .count();
            assert_eq!(lone_pair_lobes, key.lone_pairs as usize);
        }
    }
}
