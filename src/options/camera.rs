use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Field of view the default framing is computed for.
pub const DEFAULT_FOVY: f32 = 45.0;
/// Padding the default framing is computed for.
pub const DEFAULT_FIT_PADDING: f32 = 1.5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Framing applied by zoom-to-fit.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Multiplier applied to the fit distance so the scene is not cropped.
    #[schemars(title = "Fit Padding", range(min = 1.0, max = 3.0), extend("step" = 0.1))]
    pub fit_padding: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: DEFAULT_FOVY,
            fit_padding: DEFAULT_FIT_PADDING,
        }
    }
}
