//! Nicht-fatale Fehler, die eine Interaktion verwerfen, das Model aber unangetastet lassen.

use thiserror::Error;

/// Warnungen des Controllers.
///
/// Jede Warnung wird geloggt und in `AppState::last_warning` abgelegt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorWarning {
    /// Drag-Event ohne Start- oder Endpunkt.
    #[error("drag event without start or finish point ({widget_type})")]
    MissingPoints {
        /// Ursprungs-Zeichenfläche
        widget_type: String,
    },

    /// Selektions-Geste ohne Linie unter dem Zeiger.
    #[error("no line id when selecting line ({widget_type})")]
    MissingLineId {
        /// Ursprungs-Zeichenfläche
        widget_type: String,
    },

    /// Drag auf eine unbekannte Linie.
    #[error("drag event references unknown line '{0}'")]
    UnknownLine(String),

    /// Neue Linie ohne gültige Gesten-ID.
    #[error("cannot create a line from unrecognised sequence '{0}'")]
    UnrecognisedSequence(String),

    /// Drag auf eine bestehende Linie ohne Griff-Angabe.
    #[error("drag event on line '{0}' without line end or item index")]
    MissingLineEnd(String),

    /// Griff-Index außerhalb der Linie.
    #[error("line '{line_id}' has no handle at index {item_index}")]
    InvalidHandle {
        /// Ziel-Linie
        line_id: String,
        /// Angefragter Index
        item_index: usize,
    },

    /// Unbekannte Bedienelement-Bezeichnung.
    #[error("invalid button label: {0}")]
    UnknownControl(String),

    /// Undo bei leerer Vergangenheit.
    #[error("trying to undo past start of buffer")]
    UndoPastStart,

    /// Redo ohne rückgängig gemachte Commands.
    #[error("trying to redo past end of buffer. index: {index}")]
    RedoPastEnd {
        /// History-Zeiger beim Versuch
        index: usize,
    },

    /// Datei-Operation ohne Buffer-Namen.
    #[error("file operation '{0}' needs a buffer name")]
    MissingBufferName(String),

    /// Unbekannter Buffer-Name.
    #[error("no saved buffer named '{0}'")]
    UnknownBuffer(String),

    /// Gespeicherte Daten nicht lesbar, es wird mit leerer History gearbeitet.
    #[error("stored buffer '{key}' is corrupt: {reason}")]
    StorageCorrupt {
        /// Store-Schlüssel
        key: String,
        /// Parser-Meldung
        reason: String,
    },
}
