use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Scene furniture toggles.
pub struct DisplayOptions {
    /// Whether to draw the X/Y/Z axes.
    #[schemars(title = "Show Axes")]
    pub show_axes: bool,
    /// Half-length of each axis.
    #[schemars(title = "Axis Length", range(min = 1.0, max = 6.0), extend("step" = 0.5))]
    pub axis_length: f32,
    /// Cylinder radius of each axis.
    #[schemars(skip)]
    pub axis_radius: f32,
    /// Whether to draw the central atom.
    #[schemars(title = "Show Central Atom")]
    pub show_nucleus: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_axes: true,
            axis_length: 3.0,
            axis_radius: 0.05,
            show_nucleus: true,
        }
    }
}
