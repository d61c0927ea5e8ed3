use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Sizes and sampling density of the generated primitives.
pub struct GeometryOptions {
    /// Spheres sampled along each lobe (the endpoints are excluded).
    #[schemars(title = "Lobe Steps", range(min = 2, max = 100))]
    pub lobe_steps: u32,
    /// Peak lobe radius.
    #[schemars(title = "Lobe Width", range(min = 0.1, max = 1.5), extend("step" = 0.05))]
    pub lobe_amplitude: f32,
    /// Fraction of the lobe length where the radius peaks.
    #[schemars(title = "Lobe Peak", range(min = 0.05, max = 0.95), extend("step" = 0.05))]
    pub lobe_peak: f32,
    /// Opacity of lobe spheres.
    #[schemars(title = "Lobe Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub lobe_opacity: f32,
    /// Radius of the ligand atom capping a bonded lobe.
    #[schemars(skip)]
    pub ligand_radius: f32,
    /// Opacity of the ligand atom.
    #[schemars(skip)]
    pub ligand_opacity: f32,
    /// Radius of each lone-pair electron dot.
    #[schemars(skip)]
    pub electron_radius: f32,
    /// Distance of each electron dot from the lobe axis.
    #[schemars(skip)]
    pub electron_offset: f32,
    /// Radius of the central atom.
    #[schemars(skip)]
    pub nucleus_radius: f32,
    /// Segments per labeled angle arc.
    #[schemars(title = "Arc Segments", range(min = 2, max = 120))]
    pub arc_segments: u32,
    /// Cylinder radius of arc segments.
    #[schemars(skip)]
    pub arc_radius: f32,
    /// Arc radius as a multiple of the mean domain distance.
    #[schemars(skip)]
    pub arc_clearance: f32,
    /// Distance between an arc midpoint and its label.
    #[schemars(skip)]
    pub label_offset: f32,
    /// Angle label font size.
    #[schemars(title = "Label Size", range(min = 6, max = 48))]
    pub label_font_size: u32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            lobe_steps: 20,
            lobe_amplitude: 0.8,
            lobe_peak: 0.8,
            lobe_opacity: 0.6,
            ligand_radius: 0.5,
            ligand_opacity: 0.9,
            electron_radius: 0.1,
            electron_offset: 0.1,
            nucleus_radius: 0.5,
            arc_segments: 30,
            arc_radius: 0.02,
            arc_clearance: 1.1,
            label_offset: 0.15,
            label_font_size: 14,
        }
    }
}
