//! Linien-Entität des Line-Plans und die daraus abgeleitete Spiegelgeometrie.

use super::{LinePos, Point};
use serde::{Deserialize, Serialize};

/// Welcher Griff einer Linie bewegt wird.
///
/// `Point2`/`Segment2` sind die Griffe der gespiegelten Hälfte: der Zielpunkt
/// wird vor dem Schreiben an der Mittellinie gespiegelt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnd {
    /// Einzelpunkt auf der gespeicherten Seite
    Point1,
    /// Einzelpunkt auf der gespiegelten Seite
    Point2,
    /// Segment (Punkt + Folgepunkt) auf der gespeicherten Seite
    Segment1,
    /// Segment auf der gespiegelten Seite
    Segment2,
}

impl LineEnd {
    /// Gibt `true` zurück, wenn der Griff auf der gespiegelten Hälfte liegt.
    pub fn is_mirror_side(self) -> bool {
        matches!(self, LineEnd::Point2 | LineEnd::Segment2)
    }

    /// Gibt `true` zurück, wenn der Griff ein ganzes Segment verschiebt.
    pub fn is_segment(self) -> bool {
        matches!(self, LineEnd::Segment1 | LineEnd::Segment2)
    }

    /// Einzelpunkt-Griff auf derselben Seite.
    pub fn point_handle(self) -> LineEnd {
        if self.is_mirror_side() {
            LineEnd::Point2
        } else {
            LineEnd::Point1
        }
    }
}

/// Aktueller Zustand einer Linie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Eindeutige ID (z.B. `drawnLine_7`)
    pub id: String,
    /// Gespeicherte Geometrie
    pub finish_pos: LinePos,
    /// Hover-Hervorhebung (exklusiv, höchstens eine Linie)
    pub highlighted: bool,
    /// Wird als zwei symmetrische Hälften dargestellt
    pub mirrored: bool,
    /// Selektiert
    pub selected: bool,
}

impl Line {
    /// Erstellt eine neue, nicht selektierte Linie.
    pub fn new(id: impl Into<String>, finish_pos: LinePos) -> Self {
        Self {
            id: id.into(),
            finish_pos,
            highlighted: false,
            mirrored: false,
            selected: false,
        }
    }

    /// Gespiegelte Hälfte (nur für gespiegelte Linien). Wird immer abgeleitet, nie gespeichert.
    pub fn mirror_pos(&self) -> Option<LinePos> {
        self.mirrored.then(|| self.finish_pos.mirrored())
    }

    /// Liest den Punkt unter einem Griff, so wie ihn die Ansicht sieht
    /// (gespiegelte Griffe liefern den gespiegelten Punkt).
    pub fn handle_point(&self, end: LineEnd, idx: usize) -> Option<Point> {
        let p = self.finish_pos.get(idx)?;
        if end.is_mirror_side() {
            Some(super::mirror_point(p))
        } else {
            Some(p)
        }
    }
}

/// Benachrichtigung an Views über eine geänderte Linie.
#[derive(Debug, Clone, PartialEq)]
pub enum LineUpdate {
    /// Linie neu oder verändert (Snapshot nach der Änderung)
    Changed(Line),
    /// Linie wird entfernt; Views bauen ihre Darstellung ab
    Deleted {
        /// ID der gelöschten Linie
        id: String,
    },
}

impl LineUpdate {
    /// ID der betroffenen Linie.
    pub fn id(&self) -> &str {
        match self {
            LineUpdate::Changed(line) => &line.id,
            LineUpdate::Deleted { id } => id,
        }
    }
}
