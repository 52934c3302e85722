//! Hintergrundbild-Zustand pro Zeichenfläche (Spantriss, Längsriss).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Bekannte Zeichenflächen.
pub const CROSS_SECTION: &str = "cross-section";
/// Längsriss-Zeichenfläche.
pub const LENGTH_SECTION: &str = "length-section";

/// Hintergrundbild einer Zeichenfläche. Wird nie gelöscht, nur ausgeblendet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImage {
    /// Zeichenfläche, zu der das Bild gehört
    pub widget_type: String,
    /// Sichtbarkeit
    pub visible: bool,
    /// Bildreferenz (URL oder Pfad), `None` solange kein Bild gesetzt ist
    pub image_ref: Option<String>,
    /// Verschiebung des Bildes in Flächenkoordinaten
    pub position: DVec2,
}

impl BackgroundImage {
    /// Erstellt ein unsichtbares Bild ohne Referenz.
    pub fn new(widget_type: impl Into<String>) -> Self {
        Self {
            widget_type: widget_type.into(),
            visible: false,
            image_ref: None,
            position: DVec2::ZERO,
        }
    }
}
