//! The emission boundary between the scene generator and a renderer.
//!
//! A [`DrawingSurface`] receives primitives and camera operations and is
//! finalized exactly once (finalizing consumes it). [`SceneRecorder`] is the
//! in-crate implementation: it records everything into a [`Scene`] that the
//! [`export`](crate::export) module can turn into JSON or an embeddable page.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::options::{CameraOptions, DEFAULT_FIT_PADDING, DEFAULT_FOVY};
use crate::primitives::{Cylinder, Label, Primitive, Rotation, Sphere};

/// Something primitives can be drawn onto.
pub trait DrawingSurface {
    /// What [`finalize`](Self::finalize) produces.
    type Output;

    /// Append a sphere.
    fn add_sphere(&mut self, sphere: Sphere);
    /// Append a cylinder.
    fn add_cylinder(&mut self, cylinder: Cylinder);
    /// Append a text label.
    fn add_label(&mut self, label: Label);
    /// Rotate the view.
    fn rotate(&mut self, rotation: Rotation);
    /// Frame everything added so far.
    fn zoom_to_fit(&mut self);
    /// Produce the displayable result.
    fn finalize(self) -> Self::Output;
}

/// Bounding sphere of a set of primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Centroid of all primitive anchor points.
    pub center: Vec3,
    /// Distance from `center` to the farthest primitive surface.
    pub radius: f32,
}

impl Bounds {
    /// Bounding sphere of `primitives`. Returns `None` for an empty scene.
    #[must_use]
    pub fn of(primitives: &[Primitive]) -> Option<Self> {
        let points: Vec<(Vec3, f32)> =
            primitives.iter().flat_map(Primitive::extent).collect();
        if points.is_empty() {
            return None;
        }

        let center: Vec3 = points.iter().map(|(p, _)| *p).sum::<Vec3>()
            / points.len() as f32;
        let radius = points
            .iter()
            .map(|(p, pad)| (*p - center).length() + pad)
            .fold(0.0f32, f32::max);

        Some(Self { center, radius })
    }

    /// Camera distance from `center` that keeps the sphere inside a vertical
    /// field of view of `fovy_degrees`, scaled by `padding`.
    #[must_use]
    pub fn camera_distance(&self, fovy_degrees: f32, padding: f32) -> f32 {
        let fovy_rad = fovy_degrees.to_radians();
        self.radius / (fovy_rad / 2.0).tan() * padding
    }
}

/// Camera framing captured by [`DrawingSurface::zoom_to_fit`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoFit {
    /// Centroid of all primitive anchor points.
    pub center: Vec3,
    /// Distance from `center` to the farthest primitive surface.
    pub radius: f32,
    /// Camera distance from `center` that frames the bounding sphere.
    pub distance: f32,
    /// Zoom relative to the default framing (45° field of view, 1.5x
    /// padding). Values above 1 move the camera in.
    pub zoom: f32,
}

impl AutoFit {
    /// Frame `bounds` for a camera with the given field of view and padding.
    #[must_use]
    pub fn new(bounds: Bounds, fovy_degrees: f32, padding: f32) -> Self {
        let distance = bounds.camera_distance(fovy_degrees, padding);
        let reference =
            bounds.camera_distance(DEFAULT_FOVY, DEFAULT_FIT_PADDING);
        let zoom = if distance > 0.0 { reference / distance } else { 1.0 };
        Self {
            center: bounds.center,
            radius: bounds.radius,
            distance,
            zoom,
        }
    }
}

/// A finalized, fully-described scene.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Title shown by viewers.
    pub title: String,
    /// Primitives in emission order.
    pub primitives: Vec<Primitive>,
    /// Camera rotations in the order they were requested.
    pub rotations: Vec<Rotation>,
    /// Result of the last zoom-to-fit request, if any.
    pub fit: Option<AutoFit>,
}

impl Scene {
    /// Bounding sphere over every primitive's extent.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.primitives)
    }

    /// Framing for a camera with a `fovy` degree field of view, scaled by
    /// `padding`.
    #[must_use]
    pub fn fit_view(&self, fovy: f32, padding: f32) -> Option<AutoFit> {
        self.bounds().map(|b| AutoFit::new(b, fovy, padding))
    }

    /// All spheres in emission order.
    pub fn spheres(&self) -> impl Iterator<Item = &Sphere> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Sphere(s) => Some(s),
            _ => None,
        })
    }

    /// All cylinders in emission order.
    pub fn cylinders(&self) -> impl Iterator<Item = &Cylinder> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Cylinder(c) => Some(c),
            _ => None,
        })
    }

    /// All labels in emission order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Label(l) => Some(l),
            _ => None,
        })
    }
}

/// A [`DrawingSurface`] that records into a [`Scene`].
#[derive(Debug, Default)]
pub struct SceneRecorder {
    scene: Scene,
    camera: CameraOptions,
}

impl SceneRecorder {
    /// Start recording a scene with the given title and the default camera.
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            scene: Scene {
                title: title.to_owned(),
                ..Scene::default()
            },
            camera: CameraOptions::default(),
        }
    }

    /// Frame zoom-to-fit requests for `camera` instead of the default.
    #[must_use]
    pub fn with_camera(mut self, camera: &CameraOptions) -> Self {
        self.camera = camera.clone();
        self
    }
}

impl DrawingSurface for SceneRecorder {
    type Output = Scene;

    fn add_sphere(&mut self, sphere: Sphere) {
        self.scene.primitives.push(Primitive::Sphere(sphere));
    }

    fn add_cylinder(&mut self, cylinder: Cylinder) {
        self.scene.primitives.push(Primitive::Cylinder(cylinder));
    }

    fn add_label(&mut self, label: Label) {
        self.scene.primitives.push(Primitive::Label(label));
    }

    fn rotate(&mut self, rotation: Rotation) {
        self.scene.rotations.push(rotation);
    }

    fn zoom_to_fit(&mut self) {
        self.scene.fit = self
            .scene
            .fit_view(self.camera.fovy, self.camera.fit_padding);
    }

    fn finalize(self) -> Scene {
        self.scene
    }
}
