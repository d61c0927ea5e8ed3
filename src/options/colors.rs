use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Colors", inline)]
#[serde(default)]
/// Named colors (any CSS color name or hex string the viewer accepts).
pub struct ColorOptions {
    /// Lobe and ligand color for bonded pairs.
    #[schemars(title = "Bond")]
    pub bond: String,
    /// Lobe color for lone pairs.
    #[schemars(title = "Lone Pair")]
    pub lone_pair: String,
    /// Electron dots drawn inside lone-pair lobes.
    #[schemars(title = "Electron")]
    pub electron: String,
    /// Central atom.
    #[schemars(title = "Central Atom")]
    pub nucleus: String,
    /// Angle arc segments.
    #[schemars(title = "Angle Arc")]
    pub arc: String,
    /// Angle label text.
    #[schemars(title = "Label Text")]
    pub label_font: String,
    /// Angle label background.
    #[schemars(skip)]
    pub label_background: String,
    /// X, Y and Z axis colors.
    #[schemars(skip)]
    pub axes: [String; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            bond: "lightblue".to_owned(),
            lone_pair: "pink".to_owned(),
            electron: "black".to_owned(),
            nucleus: "black".to_owned(),
            arc: "lightgray".to_owned(),
            label_font: "black".to_owned(),
            label_background: "transparent".to_owned(),
            axes: ["red".to_owned(), "green".to_owned(), "blue".to_owned()],
        }
    }
}
