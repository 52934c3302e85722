//! Handler für Bedienelemente und Warnungen.

use crate::app::controls::{ControlLabel, ControlValue};
use crate::app::{AppState, EditorWarning};
use crate::shared::ViewUpdate;

/// Drückt ein Bedienelement und meldet alle geänderten Werte.
pub fn press_control(state: &mut AppState, label: ControlLabel, value: Option<ControlValue>) {
    let press = state.controls.press(label, value);
    state.controls = press.controls;
    for (label, value) in press.changed {
        log::debug!("Bedienelement '{}' = {:?}", label, value);
        state.notify(ViewUpdate::ControlValue { label, value });
    }
}

/// Meldet eine Warnung aus dem Intent-Mapping.
pub fn report_warning(state: &mut AppState, warning: EditorWarning) {
    state.warn(warning);
}
