//! Render-Szene als expliziter Übergabevertrag zwischen App und Views.
//!
//! Lebt im shared-Modul, da `app` sie baut und Views sie konsumieren.

use crate::app::controls::EditMode;
use crate::core::{BackgroundImage, Line, LinePos};

/// Linie mit abgeleiteter Spiegelhälfte.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderLine {
    /// Linien-Snapshot
    pub line: Line,
    /// Gespiegelte Hälfte (nur bei gespiegelten Linien)
    pub mirror: Option<LinePos>,
}

/// Read-only Daten für das Zeichnen einer Zeichenfläche.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Zeichenfläche, für die die Szene gebaut wurde
    pub widget_type: String,
    /// Sichtbare Linien
    pub lines: Vec<RenderLine>,
    /// Hintergrundbild der Zeichenfläche
    pub background_image: Option<BackgroundImage>,
    /// Gewählter Spant
    pub selected_rib: Option<f64>,
    /// Alle Spant-Ebenen sichtbar
    pub all_layers: bool,
    /// Aktiver Bearbeitungsmodus
    pub mode: EditMode,
}

impl RenderScene {
    /// Gibt zurück, ob Linien zu zeichnen sind.
    pub fn has_lines(&self) -> bool {
        !self.lines.is_empty()
    }
}
