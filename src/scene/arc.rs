//! Bond-angle arcs and their degree labels.

use std::f32::consts::PI;

use glam::Vec3;

use super::geometry::perpendicular_vector;
use crate::catalog::ElectronDomain;
use crate::options::Options;
use crate::primitives::{Cylinder, Label, LabelStyle};
use crate::surface::DrawingSurface;

/// Segment count for an arc drawn without a caller preference.
pub const DEFAULT_ARC_SEGMENTS: u32 = 20;

/// `u1·u2` within this of -1 is treated as exactly antiparallel.
const ANTIPARALLEL_TOLERANCE: f32 = 1e-6;

/// A circular arc from one domain direction to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleArc {
    /// Unit vector toward the first domain; the arc starts here.
    pub start: Vec3,
    /// Unit vector in the arc plane, orthogonal to `start`, pointing toward
    /// the second domain.
    pub normal: Vec3,
    /// Angle between the two domains in radians.
    pub angle: f32,
    /// Arc radius.
    pub radius: f32,
}

impl AngleArc {
    /// Arc between `v1` and `v2` whose radius is `clearance` times their
    /// mean length.
    ///
    /// For antiparallel directions the rotation plane is undefined; the arc
    /// then sweeps a half turn through [`perpendicular_vector`] of `v1`.
    #[must_use]
    pub fn between(v1: Vec3, v2: Vec3, clearance: f32) -> Self {
        let u1 = v1.normalize_or_zero();
        let u2 = v2.normalize_or_zero();
        let radius = (v1.length() + v2.length()) / 2.0 * clearance;
        let dp = u1.dot(u2);

        let (angle, normal) = if (dp + 1.0).abs() < ANTIPARALLEL_TOLERANCE {
            (PI, perpendicular_vector(u1))
        } else {
            let dp = dp.clamp(-1.0, 1.0);
            (dp.acos(), (u2 - dp * u1).normalize_or_zero())
        };

        Self {
            start: u1,
            normal,
            angle,
            radius,
        }
    }

    /// The angle in degrees.
    #[must_use]
    pub fn degrees(&self) -> f32 {
        self.angle.to_degrees()
    }

    /// Whether the two directions are (numerically) opposed.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        (self.angle - PI).abs() < ANTIPARALLEL_TOLERANCE
    }

    /// Point on the arc `phi` radians from the start.
    #[must_use]
    pub fn point_at(&self, phi: f32) -> Vec3 {
        self.radius * (self.start * phi.cos() + self.normal * phi.sin())
    }

    /// `segments + 1` evenly spaced points from start to end.
    #[must_use]
    pub fn points(&self, segments: u32) -> Vec<Vec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f32 / segments as f32 * self.angle))
            .collect()
    }

    /// Point halfway along the arc.
    #[must_use]
    pub fn midpoint(&self) -> Vec3 {
        self.point_at(self.angle / 2.0)
    }

    /// The angle formatted to one decimal place.
    #[must_use]
    pub fn label_text(&self) -> String {
        format!("{:.1}°", self.degrees())
    }

    /// Where the label goes: the midpoint pushed `offset` sideways.
    #[must_use]
    pub fn label_position(&self, offset: f32) -> Vec3 {
        let mid = self.midpoint();
        mid + perpendicular_vector(mid) * offset
    }
}

/// Draw `arc` as connected cylinders, and its label unless it is a straight
/// angle and `allow_straight_label` is off.
pub(crate) fn emit_arc<S: DrawingSurface>(
    surface: &mut S,
    arc: &AngleArc,
    segments: u32,
    allow_straight_label: bool,
    options: &Options,
) {
    let geo = &options.geometry;
    let colors = &options.colors;

    for pair in arc.points(segments).windows(2) {
        surface.add_cylinder(Cylinder {
            start: pair[0],
            end: pair[1],
            radius: geo.arc_radius,
            color: colors.arc.clone(),
        });
    }

    if arc.is_straight() && !allow_straight_label {
        return;
    }
    surface.add_label(Label {
        position: arc.label_position(geo.label_offset),
        text: arc.label_text(),
        style: LabelStyle {
            font_color: colors.label_font.clone(),
            background_color: colors.label_background.clone(),
            font_size: geo.label_font_size,
            show_background: false,
        },
    });
}

/// Arc every unordered pair of bonded domains (`i < j`). A 180° label is
/// only kept for two-domain shapes, where it is the one meaningful angle.
pub(crate) fn emit_angle_annotations<S: DrawingSurface>(
    surface: &mut S,
    domains: &[ElectronDomain],
    options: &Options,
) -> usize {
    let allow_straight_label = domains.len() == 2;
    let mut arcs = 0;
    for (i, first) in domains.iter().enumerate() {
        for second in &domains[i + 1..] {
            if !(first.is_bonded() && second.is_bonded()) {
                continue;
            }
            let arc = AngleArc::between(
                first.position,
                second.position,
                options.geometry.arc_clearance,
            );
            emit_arc(
                surface,
                &arc,
                options.geometry.arc_segments,
                allow_straight_label,
                options,
            );
            arcs += 1;
        }
    }
    arcs
}
