//! Handler für Linien-Editing und Gesten-Lebenszyklus.

use crate::app::gesture::{Gesture, GestureKind};
use crate::app::use_cases::snap;
use crate::app::AppState;
use crate::core::{
    BackgroundImageEvent, EditEvent, LineDelete, LineMirror, LineModify, LineModifyAction, Point,
};
use glam::DVec2;

/// Wendet Events an und zeichnet die loggbaren auf.
pub fn apply_edit(state: &mut AppState, events: Vec<EditEvent>) -> anyhow::Result<()> {
    if events.is_empty() {
        return Ok(());
    }
    state.apply_events(&events);
    state.record(events)
}

/// Beginnt eine Geste. Startwerte werden zum Ausführungszeitpunkt aus dem Model gelesen.
pub fn begin_gesture(state: &mut AppState, mut gesture: Gesture) {
    match &mut gesture.kind {
        GestureKind::Line {
            line_id,
            line_end,
            item_index,
            start_point,
            is_new: false,
        } => {
            if let Some(p) = state
                .model
                .get_line(line_id)
                .and_then(|line| line.handle_point(*line_end, *item_index))
            {
                *start_point = p;
            }
        }
        GestureKind::BackgroundImage {
            widget_type,
            start_pos,
            ..
        } => {
            *start_pos = state
                .model
                .background_image(widget_type)
                .map_or(DVec2::ZERO, |image| image.position);
        }
        _ => {}
    }
    log::debug!("Geste {} beginnt: {:?}", gesture.sequence, gesture.kind);
    state.gesture = Some(gesture);
}

/// Führt die laufende Geste zum Punkt `finish_point` fort.
pub fn drag_gesture(state: &mut AppState, finish_point: Point) -> anyhow::Result<()> {
    let Some(gesture) = state.gesture.as_ref() else {
        log::debug!("Drag ohne laufende Geste verworfen");
        return Ok(());
    };

    let event = match &gesture.kind {
        GestureKind::Line {
            line_id,
            line_end,
            item_index,
            start_point,
            is_new,
        } => {
            let modify = LineModify {
                widget_type: gesture.widget_type.clone(),
                sequence: gesture.sequence.clone(),
                line_id: line_id.clone(),
                line_end: *line_end,
                item_index: *item_index,
                action: LineModifyAction::Move,
                start_point: *start_point,
                finish_point,
            };
            if *is_new {
                EditEvent::LineNew(modify)
            } else {
                EditEvent::LineModify(modify)
            }
        }
        GestureKind::BackgroundImage {
            widget_type,
            start_pos,
            anchor,
        } => {
            let image = state.model.background_image(widget_type);
            let visible = image.is_some_and(|i| i.visible);
            let image_ref = image.and_then(|i| i.image_ref.clone());
            EditEvent::BackgroundImage(BackgroundImageEvent {
                widget_type: widget_type.clone(),
                sequence: gesture.sequence.clone(),
                start_visible: visible,
                finish_visible: visible,
                start_image: image_ref.clone(),
                finish_image: image_ref,
                start_pos: *start_pos,
                offset: (finish_point - *anchor).truncate(),
            })
        }
        GestureKind::Select { .. } | GestureKind::PointRemoved { .. } => return Ok(()),
    };

    apply_edit(state, vec![event])
}

/// Schließt die laufende Geste ab und rastet gezogene Linien-Endpunkte ein.
pub fn finish_gesture(state: &mut AppState) -> anyhow::Result<()> {
    let Some(gesture) = state.gesture.take() else {
        return Ok(());
    };

    let events = snap::snap_events(&state.model, &gesture, &state.options);
    if !events.is_empty() {
        log::info!(
            "Geste {}: {} Endpunkt(e) eingerastet",
            gesture.sequence,
            events.len()
        );
        apply_edit(state, events)?;
    }
    log::debug!("Geste {} abgeschlossen", gesture.sequence);
    Ok(())
}

/// Löscht alle selektierten Linien in einem gemeinsamen Command.
pub fn delete_selected(state: &mut AppState, widget_type: String) -> anyhow::Result<()> {
    let sequence = state.sequences.next_sequence();
    let events: Vec<EditEvent> = state
        .model
        .selected_lines()
        .into_iter()
        .map(|line| {
            EditEvent::LineDelete(LineDelete {
                widget_type: widget_type.clone(),
                sequence: sequence.clone(),
                line_id: line.id.clone(),
                last_pos: Some(line.finish_pos.clone()),
                mirrored: line.mirrored,
            })
        })
        .collect();

    if events.is_empty() {
        log::debug!("Löschen: keine Linie selektiert");
        return Ok(());
    }
    log::info!("{} Linie(n) gelöscht", events.len());
    apply_edit(state, events)
}

/// Schaltet die Spiegelung aller selektierten Linien um.
pub fn mirror_selected(state: &mut AppState, widget_type: String) -> anyhow::Result<()> {
    let sequence = state.sequences.next_sequence();
    let events: Vec<EditEvent> = state
        .model
        .selected_ids()
        .iter()
        .map(|id| {
            EditEvent::LineMirror(LineMirror {
                widget_type: widget_type.clone(),
                sequence: sequence.clone(),
                line_id: id.clone(),
            })
        })
        .collect();

    if events.is_empty() {
        log::debug!("Spiegeln: keine Linie selektiert");
        return Ok(());
    }
    apply_edit(state, events)
}
