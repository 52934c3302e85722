//! Builder für Render-Szenen aus dem AppState.

use crate::app::controls::ControlLabel;
use crate::app::AppState;
use crate::core::{Line, CROSS_SECTION};
use crate::shared::{RenderLine, RenderScene};

/// Toleranz beim Vergleich der Spant-Station.
const RIB_EPSILON: f64 = 1e-6;

/// Baut eine RenderScene für eine Zeichenfläche aus dem aktuellen AppState.
///
/// Im Spantriss werden nur Linien des gewählten Spants gezeigt, solange
/// `allLayers` aus ist.
pub fn build(state: &AppState, widget_type: &str) -> RenderScene {
    let selected_rib = state
        .controls
        .value(ControlLabel::SelectedRib)
        .and_then(|v| v.as_number());
    let all_layers = state.controls.is_active(ControlLabel::AllLayers);

    let rib_filter = (widget_type == CROSS_SECTION && !all_layers)
        .then_some(selected_rib)
        .flatten();

    let lines = state
        .model
        .lines()
        .filter(|line| rib_filter.is_none_or(|z| on_rib(line, z)))
        .map(|line| RenderLine {
            line: line.clone(),
            mirror: line.mirror_pos(),
        })
        .collect();

    RenderScene {
        widget_type: widget_type.to_string(),
        lines,
        background_image: state.model.background_image(widget_type).cloned(),
        selected_rib,
        all_layers,
        mode: state.controls.active_mode(),
    }
}

fn on_rib(line: &Line, z: f64) -> bool {
    (line.finish_pos.a().z - z).abs() < RIB_EPSILON
}
