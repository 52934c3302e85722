//! Model-Events: unveränderliche Beschreibungen genau eines Zustandsübergangs.
//!
//! Jedes Event trägt die Ursprungs-Zeichenfläche (`widget_type`), loggbare Events
//! zusätzlich die `sequence` der Geste, zu der sie gehören. Persistiert wird das
//! Enum intern getaggt (`"kind": "line_modify"` usw.), damit jeder Command aus
//! einem leeren Model heraus wieder abgespielt werden kann.

use super::{LineEnd, LinePos, Point};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Art einer Linienänderung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineModifyAction {
    /// Punkt oder Segment verschieben
    #[default]
    Move,
    /// Kontrollpunkt einfügen
    AddPoint,
    /// Kontrollpunkt entfernen
    DeletePoint,
}

impl LineModifyAction {
    /// Gibt `true` zurück, wenn `item_index` auf einer Linie der Ordnung `order`
    /// für diese Aktion und diesen Griff gültig ist.
    pub fn fits(self, line_end: LineEnd, item_index: usize, order: usize) -> bool {
        match self {
            // Ein Segment braucht einen Folgepunkt
            LineModifyAction::Move if line_end.is_segment() => {
                item_index < order.saturating_sub(1)
            }
            LineModifyAction::Move => item_index < order,
            LineModifyAction::AddPoint => (1..order).contains(&item_index),
            LineModifyAction::DeletePoint => {
                order > 2 && (1..order.saturating_sub(1)).contains(&item_index)
            }
        }
    }
}

/// Neue Linie zeichnen oder bestehende Linie verändern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineModify {
    /// Ursprungs-Zeichenfläche
    pub widget_type: String,
    /// Gesten-ID
    pub sequence: String,
    /// Ziel-Linie
    pub line_id: String,
    /// Bewegter Griff
    pub line_end: LineEnd,
    /// Punkt- bzw. Segment-Index
    pub item_index: usize,
    /// Art der Änderung
    #[serde(default)]
    pub action: LineModifyAction,
    /// Position vor der Änderung
    pub start_point: Point,
    /// Position nach der Änderung
    pub finish_point: Point,
}

/// Selektion einer Linie umschalten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSelect {
    /// Ursprungs-Zeichenfläche
    pub widget_type: String,
    /// Ziel-Linie
    pub line_id: String,
}

/// Hover-Hervorhebung setzen (`None` = nichts hervorheben).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineHighlight {
    /// Ursprungs-Zeichenfläche
    pub widget_type: String,
    /// Ziel-Linie
    pub line_id: Option<String>,
}

/// Spiegelung einer Linie umschalten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineMirror {
    /// Ursprungs-Zeichenfläche
    pub widget_type: String,
    /// Gesten-ID
    pub sequence: String,
    /// Ziel-Linie
    pub line_id: String,
}

/// Linie löschen. Trägt die letzte bekannte Geometrie für das Undo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDelete {
    /// Ursprungs-Zeichenfläche
    pub widget_type: String,
    /// Gesten-ID
    pub sequence: String,
    /// Ziel-Linie
    pub line_id: String,
    /// Geometrie zum Zeitpunkt des Löschens
    #[serde(default)]
    pub last_pos: Option<LinePos>,
    /// Spiegelstatus zum Zeitpunkt des Löschens
    #[serde(default)]
    pub mirrored: bool,
}

/// Gelöschte Linie mit vollständiger Geometrie wiederherstellen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRestore {
    /// Ursprungs-Zeichenfläche
    pub widget_type: String,
    /// Gesten-ID
    pub sequence: String,
    /// Ziel-Linie
    pub line_id: String,
    /// Wiederherzustellende Geometrie
    pub finish_pos: LinePos,
    /// Wiederherzustellender Spiegelstatus
    pub mirrored: bool,
}

/// Zustandsänderung eines Hintergrundbilds.
///
/// Die Position ergibt sich aus `start_pos + offset`; bei Drag-Gesten bleibt
/// `start_pos` auf dem Stand des Gestenbeginns und nur `offset` wächst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImageEvent {
    /// Zeichenfläche, deren Bild geändert wird
    pub widget_type: String,
    /// Gesten-ID
    pub sequence: String,
    /// Sichtbarkeit vorher
    pub start_visible: bool,
    /// Sichtbarkeit nachher
    pub finish_visible: bool,
    /// Bildreferenz vorher
    #[serde(default)]
    pub start_image: Option<String>,
    /// Bildreferenz nachher
    #[serde(default)]
    pub finish_image: Option<String>,
    /// Position bei Gestenbeginn
    pub start_pos: DVec2,
    /// Verschiebung relativ zu `start_pos`
    #[serde(default)]
    pub offset: DVec2,
}

/// Alle Model-Events (exhaustiv geswitcht in Model und Controller).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditEvent {
    /// Neue Linie (Undo = Löschen)
    LineNew(LineModify),
    /// Bestehende Linie verändern
    LineModify(LineModify),
    /// Selektion umschalten (nicht loggbar)
    LineSelect(LineSelect),
    /// Hover-Hervorhebung (nicht loggbar)
    LineHighlight(LineHighlight),
    /// Spiegelung umschalten
    LineMirror(LineMirror),
    /// Linie löschen
    LineDelete(LineDelete),
    /// Linie wiederherstellen
    LineRestore(LineRestore),
    /// Hintergrundbild ändern
    BackgroundImage(BackgroundImageEvent),
}

impl EditEvent {
    /// Ursprungs-Zeichenfläche.
    pub fn widget_type(&self) -> &str {
        match self {
            EditEvent::LineNew(e) | EditEvent::LineModify(e) => &e.widget_type,
            EditEvent::LineSelect(e) => &e.widget_type,
            EditEvent::LineHighlight(e) => &e.widget_type,
            EditEvent::LineMirror(e) => &e.widget_type,
            EditEvent::LineDelete(e) => &e.widget_type,
            EditEvent::LineRestore(e) => &e.widget_type,
            EditEvent::BackgroundImage(e) => &e.widget_type,
        }
    }

    /// Gesten-ID, falls das Event eine trägt.
    pub fn sequence(&self) -> Option<&str> {
        match self {
            EditEvent::LineNew(e) | EditEvent::LineModify(e) => Some(&e.sequence),
            EditEvent::LineMirror(e) => Some(&e.sequence),
            EditEvent::LineDelete(e) => Some(&e.sequence),
            EditEvent::LineRestore(e) => Some(&e.sequence),
            EditEvent::BackgroundImage(e) => Some(&e.sequence),
            EditEvent::LineSelect(_) | EditEvent::LineHighlight(_) => None,
        }
    }

    /// Betroffene Linie, falls vorhanden.
    pub fn line_id(&self) -> Option<&str> {
        match self {
            EditEvent::LineNew(e) | EditEvent::LineModify(e) => Some(&e.line_id),
            EditEvent::LineSelect(e) => Some(&e.line_id),
            EditEvent::LineHighlight(e) => e.line_id.as_deref(),
            EditEvent::LineMirror(e) => Some(&e.line_id),
            EditEvent::LineDelete(e) => Some(&e.line_id),
            EditEvent::LineRestore(e) => Some(&e.line_id),
            EditEvent::BackgroundImage(_) => None,
        }
    }

    /// Nur loggbare Events landen in der History. Selektion und Hover sind nicht rückgängig machbar.
    pub fn is_loggable(&self) -> bool {
        match self {
            EditEvent::LineNew(_)
            | EditEvent::LineModify(_)
            | EditEvent::LineMirror(_)
            | EditEvent::LineDelete(_)
            | EditEvent::LineRestore(_)
            | EditEvent::BackgroundImage(_) => true,
            EditEvent::LineSelect(_) | EditEvent::LineHighlight(_) => false,
        }
    }

    /// Semantische Umkehrung für Undo.
    ///
    /// `None` für nicht loggbare Events und für Löschungen ohne bekannte Geometrie.
    pub fn inverse(&self) -> Option<EditEvent> {
        match self {
            EditEvent::LineNew(e) => Some(EditEvent::LineDelete(LineDelete {
                widget_type: e.widget_type.clone(),
                sequence: e.sequence.clone(),
                line_id: e.line_id.clone(),
                last_pos: None,
                mirrored: false,
            })),
            EditEvent::LineModify(e) => {
                let mut reverse = e.clone();
                match e.action {
                    LineModifyAction::Move => {
                        reverse.start_point = e.finish_point;
                        reverse.finish_point = e.start_point;
                    }
                    LineModifyAction::AddPoint => {
                        reverse.action = LineModifyAction::DeletePoint;
                        reverse.start_point = e.finish_point;
                    }
                    LineModifyAction::DeletePoint => {
                        reverse.action = LineModifyAction::AddPoint;
                        reverse.finish_point = e.start_point;
                    }
                }
                Some(EditEvent::LineModify(reverse))
            }
            EditEvent::LineMirror(e) => Some(EditEvent::LineMirror(e.clone())),
            EditEvent::LineDelete(e) => {
                let finish_pos = e.last_pos.clone()?;
                Some(EditEvent::LineRestore(LineRestore {
                    widget_type: e.widget_type.clone(),
                    sequence: e.sequence.clone(),
                    line_id: e.line_id.clone(),
                    finish_pos,
                    mirrored: e.mirrored,
                }))
            }
            EditEvent::LineRestore(e) => Some(EditEvent::LineDelete(LineDelete {
                widget_type: e.widget_type.clone(),
                sequence: e.sequence.clone(),
                line_id: e.line_id.clone(),
                last_pos: Some(e.finish_pos.clone()),
                mirrored: e.mirrored,
            })),
            EditEvent::BackgroundImage(e) => {
                Some(EditEvent::BackgroundImage(BackgroundImageEvent {
                    widget_type: e.widget_type.clone(),
                    sequence: e.sequence.clone(),
                    start_visible: e.finish_visible,
                    finish_visible: e.start_visible,
                    start_image: e.finish_image.clone(),
                    finish_image: e.start_image.clone(),
                    start_pos: e.start_pos,
                    offset: DVec2::ZERO,
                }))
            }
            EditEvent::LineSelect(_) | EditEvent::LineHighlight(_) => None,
        }
    }

    /// Übernimmt ein späteres Event derselben Geste, wenn es denselben Griff betrifft.
    ///
    /// Der Startzustand bleibt der des ersten Events, nur der Endzustand wandert.
    /// Gibt `false` zurück, wenn `newer` als eigenes Event angehängt werden muss.
    pub fn absorb(&mut self, newer: &EditEvent) -> bool {
        match (self, newer) {
            (EditEvent::LineNew(cur), EditEvent::LineNew(next)) if cur.line_id == next.line_id => {
                cur.finish_point = next.finish_point;
                true
            }
            (EditEvent::LineNew(cur), EditEvent::LineModify(next))
                if cur.line_id == next.line_id
                    && next.action == LineModifyAction::Move
                    && next.line_end == cur.line_end
                    && next.item_index == cur.item_index =>
            {
                cur.finish_point = next.finish_point;
                true
            }
            (EditEvent::LineModify(cur), EditEvent::LineModify(next))
                if cur.line_id == next.line_id
                    && cur.action == LineModifyAction::Move
                    && next.action == LineModifyAction::Move
                    && cur.line_end == next.line_end
                    && cur.item_index == next.item_index =>
            {
                cur.finish_point = next.finish_point;
                true
            }
            (EditEvent::BackgroundImage(cur), EditEvent::BackgroundImage(next))
                if cur.widget_type == next.widget_type =>
            {
                cur.finish_visible = next.finish_visible;
                cur.finish_image = next.finish_image.clone();
                cur.offset = next.offset;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modify(action: LineModifyAction, start: Point, finish: Point) -> LineModify {
        LineModify {
            widget_type: "cross-section".into(),
            sequence: "sequence_1".into(),
            line_id: "drawnLine_1".into(),
            line_end: LineEnd::Point1,
            item_index: 1,
            action,
            start_point: start,
            finish_point: finish,
        }
    }

    #[test]
    fn inverse_of_move_swaps_points() {
        let ev = EditEvent::LineModify(modify(
            LineModifyAction::Move,
            Point::new(1.0, 2.0, 3.0),
            Point::new(4.0, 5.0, 6.0),
        ));
        let Some(EditEvent::LineModify(inv)) = ev.inverse() else {
            panic!("Move sollte als Move umkehrbar sein");
        };
        assert_eq!(inv.start_point, Point::new(4.0, 5.0, 6.0));
        assert_eq!(inv.finish_point, Point::new(1.0, 2.0, 3.0));
        assert_eq!(inv.line_end, LineEnd::Point1);
    }

    #[test]
    fn add_and_delete_point_invert_into_each_other() {
        let add = EditEvent::LineModify(modify(
            LineModifyAction::AddPoint,
            Point::ZERO,
            Point::new(2.0, 2.0, 0.0),
        ));
        let Some(EditEvent::LineModify(inv)) = add.inverse() else {
            panic!("AddPoint umkehrbar");
        };
        assert_eq!(inv.action, LineModifyAction::DeletePoint);
        assert_eq!(inv.start_point, Point::new(2.0, 2.0, 0.0));

        let Some(EditEvent::LineModify(back)) = EditEvent::LineModify(inv).inverse() else {
            panic!("DeletePoint umkehrbar");
        };
        assert_eq!(back.action, LineModifyAction::AddPoint);
        assert_eq!(back.finish_point, Point::new(2.0, 2.0, 0.0));
    }

    #[test]
    fn new_line_inverts_to_delete_and_delete_without_geometry_has_no_inverse() {
        let new = EditEvent::LineNew(modify(LineModifyAction::Move, Point::ZERO, Point::ONE));
        let inv = new.inverse().expect("LineNew umkehrbar");
        assert!(matches!(&inv, EditEvent::LineDelete(d) if d.line_id == "drawnLine_1"));
        assert!(inv.inverse().is_none());
    }

    #[test]
    fn selection_and_hover_are_not_loggable() {
        let select = EditEvent::LineSelect(LineSelect {
            widget_type: "cross-section".into(),
            line_id: "l".into(),
        });
        let hover = EditEvent::LineHighlight(LineHighlight {
            widget_type: "cross-section".into(),
            line_id: None,
        });
        assert!(!select.is_loggable());
        assert!(!hover.is_loggable());
        assert!(select.inverse().is_none());
    }

    #[test]
    fn absorb_keeps_first_start_point() {
        let mut first = EditEvent::LineModify(modify(
            LineModifyAction::Move,
            Point::new(1.0, 1.0, 0.0),
            Point::new(2.0, 2.0, 0.0),
        ));
        let later = EditEvent::LineModify(modify(
            LineModifyAction::Move,
            Point::new(9.0, 9.0, 0.0),
            Point::new(3.0, 3.0, 0.0),
        ));
        assert!(first.absorb(&later));
        let EditEvent::LineModify(m) = first else {
            unreachable!()
        };
        assert_eq!(m.start_point, Point::new(1.0, 1.0, 0.0));
        assert_eq!(m.finish_point, Point::new(3.0, 3.0, 0.0));
    }

    #[test]
    fn absorb_rejects_other_handle() {
        let mut first = EditEvent::LineModify(modify(LineModifyAction::Move, Point::ZERO, Point::ONE));
        let mut other = modify(LineModifyAction::Move, Point::ZERO, Point::ONE);
        other.item_index = 0;
        assert!(!first.absorb(&EditEvent::LineModify(other)));
    }

    #[test]
    fn handle_range_rejects_overflowing_segment_index() {
        assert!(LineModifyAction::Move.fits(LineEnd::Segment1, 0, 2));
        assert!(!LineModifyAction::Move.fits(LineEnd::Segment1, 1, 2));
        assert!(!LineModifyAction::Move.fits(LineEnd::Segment2, usize::MAX, 2));
        assert!(!LineModifyAction::Move.fits(LineEnd::Point1, usize::MAX, 2));
        assert!(!LineModifyAction::DeletePoint.fits(LineEnd::Point1, 1, 2));
        assert!(LineModifyAction::DeletePoint.fits(LineEnd::Point1, 1, 3));
        assert!(!LineModifyAction::AddPoint.fits(LineEnd::Segment1, 0, 2));
        assert!(!LineModifyAction::DeletePoint.fits(LineEnd::Point1, 0, 0));
    }

    #[test]
    fn json_record_is_tagged_by_kind() {
        let ev = EditEvent::LineMirror(LineMirror {
            widget_type: "toolbar".into(),
            sequence: "sequence_4".into(),
            line_id: "drawnLine_2".into(),
        });
        let json = serde_json::to_value(&ev).expect("serialisierbar");
        assert_eq!(json["kind"], "line_mirror");
        let back: EditEvent = serde_json::from_value(json).expect("deserialisierbar");
        assert_eq!(back, ev);
    }
}
