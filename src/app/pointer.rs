//! Wandelt rohe Zeiger-Samples (Position + Tastenzustand) in Drag- und Hover-Intents.
//!
//! Views, die selbst Gesten-IDs vergeben, können `PointerDragged`/`PointerMoved`
//! direkt senden und brauchen den Tracker nicht.

use super::events::{PointerDrag, PointerMove, PointerSample};
use super::sequence::SequenceGenerator;
use super::AppIntent;
use crate::core::{LineEnd, LineModifyAction, Point};

#[derive(Debug, Clone)]
struct DragOrigin {
    sequence: String,
    start_point: Option<Point>,
    line_id: Option<String>,
    line_end: Option<LineEnd>,
    item_index: Option<usize>,
}

/// Merkt sich, ob die Taste beim letzten Sample gedrückt war und wo der Drag begann.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    origin: Option<DragOrigin>,
}

impl PointerTracker {
    /// Erstellt einen Tracker ohne laufenden Drag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, solange ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Übersetzt ein Sample.
    ///
    /// - Taste neu gedrückt: neue Gesten-ID, Ursprung unter dem Zeiger merken
    /// - Taste gehalten: Drag mit festem Ursprung und aktuellem Endpunkt
    /// - Taste los oder nie gedrückt: Hover
    pub fn translate(
        &mut self,
        sample: PointerSample,
        sequences: &mut SequenceGenerator,
    ) -> AppIntent {
        if !sample.buttons_down {
            if let Some(origin) = self.origin.take() {
                log::debug!("Drag {} beendet", origin.sequence);
            }
            return AppIntent::PointerMoved(PointerMove {
                widget_type: sample.widget_type,
                start_point: sample.point,
                line_id: sample.line_id,
                line_end: sample.line_end,
            });
        }

        let origin = self.origin.get_or_insert_with(|| DragOrigin {
            sequence: sequences.next_sequence(),
            start_point: sample.point,
            line_id: sample.line_id.clone(),
            line_end: sample.line_end,
            item_index: sample.item_index,
        });

        AppIntent::PointerDragged(PointerDrag {
            widget_type: sample.widget_type,
            sequence: origin.sequence.clone(),
            start_point: origin.start_point,
            finish_point: sample.point,
            line_id: origin.line_id.clone(),
            line_end: origin.line_end,
            item_index: origin.item_index,
            action: LineModifyAction::Move,
        })
    }
}
