use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Viewer", inline)]
#[serde(default)]
/// Embeddable viewer page settings.
pub struct ViewerOptions {
    /// Viewer width in CSS pixels.
    #[schemars(title = "Width", range(min = 100, max = 4096))]
    pub width: u32,
    /// Viewer height in CSS pixels.
    #[schemars(title = "Height", range(min = 100, max = 4096))]
    pub height: u32,
    /// Viewer background color.
    #[schemars(title = "Background")]
    pub background: String,
    /// Where the page loads 3Dmol.js from.
    #[schemars(skip)]
    pub script_url: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            background: "white".to_owned(),
            script_url: "https://3Dmol.org/build/3Dmol-min.js".to_owned(),
        }
    }
}
