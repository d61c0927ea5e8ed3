//! Finalized scenes to JSON or an embeddable 3Dmol.js page.

use crate::error::VseprError;
use crate::options::ViewerOptions;
use crate::surface::Scene;

/// Pretty-printed JSON for `scene`.
pub fn to_json(scene: &Scene) -> Result<String, VseprError> {
    Ok(serde_json::to_string_pretty(scene)?)
}

/// A standalone HTML page that loads 3Dmol.js and replays `scene`:
/// primitives in order, then the camera rotations, then `zoomTo()` scaled by
/// the recorded fit's zoom.
pub fn to_html(
    scene: &Scene,
    viewer: &ViewerOptions,
) -> Result<String, VseprError> {
    let scene_json = script_safe(&serde_json::to_string(scene)?);
    let background = script_safe(&serde_json::to_string(&viewer.background)?);

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{script_url}"></script>
</head>
<body>
<div id="vsepr-viewer" style="width: {width}px; height: {height}px; position: relative;"></div>
<script>
var VSEPR_SCENE = {scene_json};
var VSEPR_BACKGROUND = {background};
{REPLAY_JS}</script>
</body>
</html>
"#,
        title = escape_html(&scene.title),
        script_url = escape_html(&viewer.script_url),
        width = viewer.width,
        height = viewer.height,
    ))
}

/// Keep embedded JSON from closing the surrounding `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Replays `VSEPR_SCENE` into a 3Dmol viewer.
const REPLAY_JS: &str = r#"(function() {
    var element = document.getElementById("vsepr-viewer");
    var viewer = $3Dmol.createViewer(element, { backgroundColor: VSEPR_BACKGROUND });
    function xyz(v) { return { x: v[0], y: v[1], z: v[2] }; }

    VSEPR_SCENE.primitives.forEach(function(p) {
        if (p.kind === "sphere") {
            viewer.addSphere({ center: xyz(p.center), radius: p.radius, color: p.color, opacity: p.opacity });
        } else if (p.kind === "cylinder") {
            viewer.addCylinder({ start: xyz(p.start), end: xyz(p.end), radius: p.radius, color: p.color });
        } else if (p.kind === "label") {
            viewer.addLabel(p.text, {
                position: xyz(p.position),
                fontColor: p.style.font_color,
                backgroundColor: p.style.background_color,
                fontSize: p.style.font_size,
                showBackground: p.style.show_background
            });
        }
    });

    VSEPR_SCENE.rotations.forEach(function(r) { viewer.rotate(r.degrees, r.axis); });
    var fit = VSEPR_SCENE.fit;
    if (fit) {
        viewer.zoomTo();
        if (fit.zoom !== 1) { viewer.zoom(fit.zoom); }
    }
    viewer.render();
})();
"#;
