//! Drawing primitives emitted by the scene generator.
//!
//! These are plain data: the generator only ever appends them to a
//! [`DrawingSurface`](crate::surface::DrawingSurface) and never reads them
//! back.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A (possibly translucent) sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Sphere center.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// Color name understood by the viewer.
    pub color: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

/// A cylinder between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    /// First cap center.
    pub start: Vec3,
    /// Second cap center.
    pub end: Vec3,
    /// Cylinder radius.
    pub radius: f32,
    /// Color name understood by the viewer.
    pub color: String,
}

/// Text styling for a [`Label`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    /// Text color.
    pub font_color: String,
    /// Background color (only drawn when `show_background` is set).
    pub background_color: String,
    /// Font size in points.
    pub font_size: u32,
    /// Whether the label background box is drawn.
    pub show_background: bool,
}

/// A text label anchored in 3D space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Anchor position.
    pub position: Vec3,
    /// Label text.
    pub text: String,
    /// Text styling.
    pub style: LabelStyle,
}

/// Any drawable primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// See [`Sphere`].
    Sphere(Sphere),
    /// See [`Cylinder`].
    Cylinder(Cylinder),
    /// See [`Label`].
    Label(Label),
}

impl Primitive {
    /// Points (with their padding radius) that must be visible for this
    /// primitive to be framed.
    pub(crate) fn extent(&self) -> impl Iterator<Item = (Vec3, f32)> {
        let points = match self {
            Self::Sphere(s) => [Some((s.center, s.radius)), None],
            Self::Cylinder(c) => {
                [Some((c.start, c.radius)), Some((c.end, c.radius))]
            }
            Self::Label(l) => [Some((l.position, 0.0)), None],
        };
        points.into_iter().flatten()
    }
}

/// Rotation axis for camera operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

/// A view rotation of `degrees` about `axis`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Signed rotation angle in degrees.
    pub degrees: f32,
    /// Rotation axis.
    pub axis: Axis,
}

impl Rotation {
    /// Build a rotation.
    #[must_use]
    pub const fn new(degrees: f32, axis: Axis) -> Self {
        Self { degrees, axis }
    }
}
