//! Vertrag zwischen Controller und View-Konsumenten.
//!
//! Views rendern nur und leiten Eingaben weiter; sie mutieren das Model nie
//! direkt. Der Controller schiebt Änderungen in strikter Reihenfolge über
//! [`EditorView`] hinaus.

use crate::app::controls::{ControlLabel, ControlValue};
use crate::core::{BackgroundImage, LineUpdate, ModelChange};

/// Empfänger von Zustandsänderungen.
pub trait EditorView {
    /// Linie neu, geändert oder gelöscht.
    fn update_line(&mut self, update: &LineUpdate);

    /// Hintergrundbild geändert.
    fn update_background_image(&mut self, image: &BackgroundImage);

    /// Wert eines Bedienelements geändert.
    fn set_control_value(&mut self, label: ControlLabel, value: &ControlValue);

    /// Bedienbarkeit eines Bedienelements geändert (z.B. Undo/Redo).
    fn set_control_enabled(&mut self, label: ControlLabel, enabled: bool);
}

/// Eine einzelne Benachrichtigung an alle Views.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    /// Linie geändert
    Line(LineUpdate),
    /// Hintergrundbild geändert
    BackgroundImage(BackgroundImage),
    /// Wert eines Bedienelements
    ControlValue {
        /// Element
        label: ControlLabel,
        /// Neuer Wert
        value: ControlValue,
    },
    /// Bedienbarkeit eines Bedienelements
    ControlEnabled {
        /// Element
        label: ControlLabel,
        /// Bedienbar
        enabled: bool,
    },
}

impl ViewUpdate {
    /// Reicht die Benachrichtigung an eine View weiter.
    pub fn dispatch(&self, view: &mut dyn EditorView) {
        match self {
            ViewUpdate::Line(update) => view.update_line(update),
            ViewUpdate::BackgroundImage(image) => view.update_background_image(image),
            ViewUpdate::ControlValue { label, value } => view.set_control_value(*label, value),
            ViewUpdate::ControlEnabled { label, enabled } => {
                view.set_control_enabled(*label, *enabled)
            }
        }
    }
}

impl From<ModelChange> for ViewUpdate {
    fn from(change: ModelChange) -> Self {
        match change {
            ModelChange::Line(update) => ViewUpdate::Line(update),
            ModelChange::BackgroundImage(image) => ViewUpdate::BackgroundImage(image),
        }
    }
}
