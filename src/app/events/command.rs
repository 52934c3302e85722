use crate::app::controls::{ControlLabel, ControlValue};
use crate::app::gesture::Gesture;
use crate::app::EditorWarning;
use crate::core::{EditEvent, Point};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Model-Events anwenden und (falls loggbar) aufzeichnen
    ApplyEdit { events: Vec<EditEvent> },
    /// Neue Geste beginnen
    BeginGesture { gesture: Gesture },
    /// Laufende Geste zum aktuellen Zeigerpunkt fortführen
    DragGesture { finish_point: Point },
    /// Laufende Geste abschließen (Einrasten)
    FinishGesture,
    /// Bedienelement drücken
    PressControl {
        label: ControlLabel,
        value: Option<ControlValue>,
    },
    /// Undo: Letzten Command rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachten Command wiederholen
    Redo,
    /// Alle selektierten Linien löschen
    DeleteSelectedLines { widget_type: String },
    /// Spiegelung aller selektierten Linien umschalten
    MirrorSelectedLines { widget_type: String },
    /// Aktuelle History unter einem Namen speichern
    SaveBuffer { name: String },
    /// Gespeicherten Buffer laden (ersetzt den Startup-Buffer)
    LoadBuffer { name: String },
    /// Gespeicherten Buffer löschen
    DeleteBuffer { name: String },
    /// Leeren Buffer beginnen
    NewBuffer,
    /// Startup-Buffer abspielen
    RestoreStartupBuffer,
    /// Hintergrundbild ein-/ausblenden
    SetBackgroundVisible { surface: String, visible: bool },
    /// Bildreferenz eines Hintergrundbilds setzen
    SetBackgroundImageRef {
        surface: String,
        image_ref: Option<String>,
    },
    /// Nicht-fatalen Fehler melden
    ReportWarning(EditorWarning),
}
