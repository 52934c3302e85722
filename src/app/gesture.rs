//! Zustand einer laufenden Zeige-Geste (eine `sequence` vom Drücken bis zum Loslassen).

use crate::core::{LineEnd, Point};
use glam::DVec2;

/// Was die laufende Geste bearbeitet.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureKind {
    /// Linie zeichnen oder einen Griff verschieben
    Line {
        /// Ziel-Linie
        line_id: String,
        /// Gezogener Griff
        line_end: LineEnd,
        /// Punkt- bzw. Segment-Index
        item_index: usize,
        /// Exakter Griff-Punkt bei Gestenbeginn (aus dem Model gelesen)
        start_point: Point,
        /// Die Geste legt die Linie neu an
        is_new: bool,
    },
    /// Selektion umschalten (einmal pro Geste)
    Select {
        /// Ziel-Linie
        line_id: String,
    },
    /// Kontrollpunkt entfernt; weitere Samples der Geste werden verworfen
    PointRemoved {
        /// Ziel-Linie
        line_id: String,
    },
    /// Hintergrundbild verschieben
    BackgroundImage {
        /// Zeichenfläche
        widget_type: String,
        /// Bildposition bei Gestenbeginn
        start_pos: DVec2,
        /// Zeigerposition bei Gestenbeginn
        anchor: Point,
    },
}

/// Laufende Geste.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    /// Gesten-ID
    pub sequence: String,
    /// Ursprungs-Zeichenfläche
    pub widget_type: String,
    /// Art der Geste
    pub kind: GestureKind,
}

impl Gesture {
    /// Gibt `true` zurück, wenn ein Drag-Sample zu dieser Geste gehört.
    pub fn continues(&self, sequence: &str) -> bool {
        self.sequence == sequence
    }
}
