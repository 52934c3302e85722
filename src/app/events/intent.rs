use crate::core::{LineEnd, LineModifyAction, Point};

/// Rohes Zeiger-Sample einer View (Position plus Tastenzustand).
#[derive(Debug, Clone, PartialEq)]
pub struct PointerSample {
    /// Ursprungs-Zeichenfläche
    pub widget_type: String,
    /// Zeigerposition in Rumpf-Koordinaten
    pub point: Option<Point>,
    /// Primärtaste gedrückt
    pub buttons_down: bool,
    /// Linie unter dem Zeiger
    pub line_id: Option<String>,
    /// Griff unter dem Zeiger
    pub line_end: Option<LineEnd>,
    /// Punkt- bzw. Segment-Index unter dem Zeiger
    pub item_index: Option<usize>,
}

/// Drag-Sample einer laufenden Geste.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerDrag {
    /// Ursprungs-Zeichenfläche
    pub widget_type: String,
    /// Gesten-ID
    pub sequence: String,
    /// Zeigerposition bei Gestenbeginn
    pub start_point: Option<Point>,
    /// Aktuelle Zeigerposition
    pub finish_point: Option<Point>,
    /// Linie unter dem Zeiger bei Gestenbeginn (`None` = neue Linie zeichnen)
    pub line_id: Option<String>,
    /// Gezogener Griff
    pub line_end: Option<LineEnd>,
    /// Punkt- bzw. Segment-Index
    pub item_index: Option<usize>,
    /// Art der Änderung (Kontrollpunkt einfügen/entfernen statt verschieben)
    pub action: LineModifyAction,
}

/// Zeigerbewegung ohne gedrückte Taste.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerMove {
    /// Ursprungs-Zeichenfläche
    pub widget_type: String,
    /// Zeigerposition
    pub start_point: Option<Point>,
    /// Linie unter dem Zeiger
    pub line_id: Option<String>,
    /// Griff unter dem Zeiger
    pub line_end: Option<LineEnd>,
}

/// Bedienelement betätigt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControlEvent {
    /// Ursprungs-Widget
    pub widget_type: String,
    /// Bezeichnung des Elements (z.B. `selectLine`, `undo`)
    pub label: String,
    /// Textwert (Eingabefeld, Auswahlliste)
    pub value_text: Option<String>,
    /// Schalterwert
    pub value_bool: Option<bool>,
}

/// App-Intents: Eingaben aus Views ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Rohes Zeiger-Sample (wird vom Controller in Drag/Hover übersetzt)
    PointerSampled(PointerSample),
    /// Drag-Sample mit Gesten-ID
    PointerDragged(PointerDrag),
    /// Hover ohne gedrückte Taste
    PointerMoved(PointerMove),
    /// Bedienelement betätigt
    ControlPressed(ControlEvent),
    /// Spant in einer Übersicht gewählt
    RibSelected {
        /// Ursprungs-Zeichenfläche
        widget_type: String,
        /// Spant-Station
        z: f64,
    },
    /// Startup-Buffer wiederherstellen (beim Programmstart)
    StartupRestoreRequested,
}
