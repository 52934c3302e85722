//! Mapping von View-Intents auf mutierende App-Commands.
//!
//! Das Mapping ist rein: es liest den State, validiert die Eingabe und
//! meldet fehlerhafte Eingaben als `ReportWarning`, ohne etwas zu verändern.

use super::controls::{ControlLabel, ControlValue, EditMode};
use super::events::{ControlEvent, PointerDrag, PointerMove};
use super::gesture::{Gesture, GestureKind};
use super::sequence::line_id_for_sequence;
use super::{AppCommand, AppIntent, AppState, EditorWarning};
use crate::core::{
    EditEvent, LineEnd, LineHighlight, LineModify, LineModifyAction, LineSelect, Point,
    CROSS_SECTION, LENGTH_SECTION,
};
use glam::DVec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerSampled(sample) => {
            // Der Controller übersetzt Samples vorher über seinen PointerTracker.
            log::debug!("Unübersetztes Zeiger-Sample von '{}'", sample.widget_type);
            Vec::new()
        }
        AppIntent::PointerDragged(drag) => map_drag(state, drag),
        AppIntent::PointerMoved(hover) => map_hover(state, hover),
        AppIntent::ControlPressed(event) => map_control(state, event),
        AppIntent::RibSelected { z, .. } => vec![AppCommand::PressControl {
            label: ControlLabel::SelectedRib,
            value: Some(ControlValue::Number(z)),
        }],
        AppIntent::StartupRestoreRequested => vec![AppCommand::RestoreStartupBuffer],
    }
}

fn warn(warning: EditorWarning) -> Vec<AppCommand> {
    vec![AppCommand::ReportWarning(warning)]
}

/// `FinishGesture`, falls noch eine Geste läuft.
fn finish_active(state: &AppState) -> Vec<AppCommand> {
    if state.gesture.is_some() {
        vec![AppCommand::FinishGesture]
    } else {
        Vec::new()
    }
}

fn continuing<'a>(state: &'a AppState, sequence: &str) -> Option<&'a Gesture> {
    state.gesture.as_ref().filter(|g| g.continues(sequence))
}

fn map_drag(state: &AppState, drag: PointerDrag) -> Vec<AppCommand> {
    match state.controls.active_mode() {
        EditMode::ModifyLine => map_modify_drag(state, drag),
        EditMode::SelectLine => map_select_drag(state, drag),
        EditMode::BackgroundImage => map_background_drag(state, drag),
        EditMode::None => {
            log::debug!("Drag ohne aktiven Bearbeitungsmodus ignoriert");
            Vec::new()
        }
    }
}

fn map_modify_drag(state: &AppState, drag: PointerDrag) -> Vec<AppCommand> {
    let (Some(start), Some(finish)) = (drag.start_point, drag.finish_point) else {
        return warn(EditorWarning::MissingPoints {
            widget_type: drag.widget_type,
        });
    };

    if let Some(gesture) = continuing(state, &drag.sequence) {
        return match gesture.kind {
            GestureKind::Line { .. } => vec![AppCommand::DragGesture {
                finish_point: finish,
            }],
            _ => Vec::new(),
        };
    }

    let Some(line_id) = drag.line_id.clone() else {
        return begin_new_line(state, drag, start, finish);
    };
    let (Some(line_end), Some(item_index)) = (drag.line_end, drag.item_index) else {
        return warn(EditorWarning::MissingLineEnd(line_id));
    };
    let Some(line) = state.model.get_line(&line_id) else {
        return warn(EditorWarning::UnknownLine(line_id));
    };

    let order = line.finish_pos.order();
    let Some(handle) = line
        .handle_point(line_end, item_index)
        .filter(|_| drag.action.fits(line_end, item_index, order))
    else {
        return warn(EditorWarning::InvalidHandle {
            line_id,
            item_index,
        });
    };

    let mut commands = finish_active(state);
    let kind = match drag.action {
        LineModifyAction::Move => GestureKind::Line {
            line_id,
            line_end,
            item_index,
            start_point: handle,
            is_new: false,
        },
        LineModifyAction::AddPoint => {
            commands.push(point_edit(&drag, &line_id, line_end, item_index, finish));
            // Weitere Samples ziehen den eingefügten Punkt
            GestureKind::Line {
                line_id,
                line_end: line_end.point_handle(),
                item_index,
                start_point: finish,
                is_new: false,
            }
        }
        LineModifyAction::DeletePoint => {
            commands.push(point_edit(&drag, &line_id, line_end, item_index, handle));
            GestureKind::PointRemoved { line_id }
        }
    };
    let drags_handle = matches!(drag.action, LineModifyAction::Move);
    commands.push(AppCommand::BeginGesture {
        gesture: Gesture {
            sequence: drag.sequence,
            widget_type: drag.widget_type,
            kind,
        },
    });
    if drags_handle {
        commands.push(AppCommand::DragGesture {
            finish_point: finish,
        });
    }
    commands
}

/// Einzelner Einfüge- oder Entfern-Edit; Start- und Zielpunkt fallen zusammen.
fn point_edit(
    drag: &PointerDrag,
    line_id: &str,
    line_end: LineEnd,
    item_index: usize,
    point: Point,
) -> AppCommand {
    AppCommand::ApplyEdit {
        events: vec![EditEvent::LineModify(LineModify {
            widget_type: drag.widget_type.clone(),
            sequence: drag.sequence.clone(),
            line_id: line_id.to_string(),
            line_end,
            item_index,
            action: drag.action,
            start_point: point,
            finish_point: point,
        })],
    }
}

/// Drag ins Leere: neue Linie, deren Kennung aus der Gesten-ID folgt.
fn begin_new_line(
    state: &AppState,
    drag: PointerDrag,
    start: Point,
    finish: Point,
) -> Vec<AppCommand> {
    let Some(line_id) = line_id_for_sequence(&drag.sequence) else {
        return warn(EditorWarning::UnrecognisedSequence(drag.sequence));
    };

    let (start_point, is_new) = match state.model.get_line(&line_id) {
        Some(line) => (line.handle_point(LineEnd::Point1, 1).unwrap_or(start), false),
        None => (start, true),
    };

    let mut commands = finish_active(state);
    commands.push(AppCommand::BeginGesture {
        gesture: Gesture {
            sequence: drag.sequence,
            widget_type: drag.widget_type,
            kind: GestureKind::Line {
                line_id,
                line_end: LineEnd::Point1,
                item_index: 1,
                start_point,
                is_new,
            },
        },
    });
    commands.push(AppCommand::DragGesture {
        finish_point: finish,
    });
    commands
}

/// Selektion wird genau einmal pro Geste umgeschaltet.
fn map_select_drag(state: &AppState, drag: PointerDrag) -> Vec<AppCommand> {
    if continuing(state, &drag.sequence).is_some() {
        return Vec::new();
    }
    let Some(line_id) = drag.line_id else {
        return warn(EditorWarning::MissingLineId {
            widget_type: drag.widget_type,
        });
    };
    if state.model.get_line(&line_id).is_none() {
        return warn(EditorWarning::UnknownLine(line_id));
    }

    let mut commands = finish_active(state);
    commands.push(AppCommand::BeginGesture {
        gesture: Gesture {
            sequence: drag.sequence,
            widget_type: drag.widget_type.clone(),
            kind: GestureKind::Select {
                line_id: line_id.clone(),
            },
        },
    });
    commands.push(AppCommand::ApplyEdit {
        events: vec![EditEvent::LineSelect(LineSelect {
            widget_type: drag.widget_type,
            line_id,
        })],
    });
    commands
}

fn map_background_drag(state: &AppState, drag: PointerDrag) -> Vec<AppCommand> {
    let (Some(start), Some(finish)) = (drag.start_point, drag.finish_point) else {
        return warn(EditorWarning::MissingPoints {
            widget_type: drag.widget_type,
        });
    };

    if let Some(gesture) = continuing(state, &drag.sequence) {
        return match gesture.kind {
            GestureKind::BackgroundImage { .. } => vec![AppCommand::DragGesture {
                finish_point: finish,
            }],
            _ => Vec::new(),
        };
    }

    let mut commands = finish_active(state);
    commands.push(AppCommand::BeginGesture {
        gesture: Gesture {
            sequence: drag.sequence,
            widget_type: drag.widget_type.clone(),
            kind: GestureKind::BackgroundImage {
                widget_type: drag.widget_type,
                start_pos: DVec2::ZERO,
                anchor: start,
            },
        },
    });
    commands.push(AppCommand::DragGesture {
        finish_point: finish,
    });
    commands
}

fn map_hover(state: &AppState, hover: PointerMove) -> Vec<AppCommand> {
    let mut commands = finish_active(state);
    if matches!(
        state.controls.active_mode(),
        EditMode::ModifyLine | EditMode::SelectLine
    ) {
        commands.push(AppCommand::ApplyEdit {
            events: vec![EditEvent::LineHighlight(LineHighlight {
                widget_type: hover.widget_type,
                line_id: hover.line_id,
            })],
        });
    }
    commands
}

fn map_control(state: &AppState, event: ControlEvent) -> Vec<AppCommand> {
    let label = match event.label.parse::<ControlLabel>() {
        Ok(label) => label,
        Err(unknown) => return warn(EditorWarning::UnknownControl(unknown)),
    };
    let value = event
        .value_text
        .clone()
        .map(ControlValue::Text)
        .or(event.value_bool.map(ControlValue::Bool));
    let buffer_name = event.value_text.clone().filter(|name| !name.trim().is_empty());

    let mut commands = finish_active(state);
    commands.push(AppCommand::PressControl { label, value });

    let follow_up = match label {
        ControlLabel::Undo => Some(AppCommand::Undo),
        ControlLabel::Redo => Some(AppCommand::Redo),
        ControlLabel::Delete => Some(AppCommand::DeleteSelectedLines {
            widget_type: event.widget_type,
        }),
        ControlLabel::Mirror => Some(AppCommand::MirrorSelectedLines {
            widget_type: event.widget_type,
        }),
        ControlLabel::FileOpsSave | ControlLabel::FileOpsLoad | ControlLabel::FileOpsDelete => {
            Some(match buffer_name {
                None => AppCommand::ReportWarning(EditorWarning::MissingBufferName(
                    label.as_str().to_string(),
                )),
                Some(name) if label == ControlLabel::FileOpsSave => AppCommand::SaveBuffer { name },
                Some(name) if label == ControlLabel::FileOpsLoad => AppCommand::LoadBuffer { name },
                Some(name) => AppCommand::DeleteBuffer { name },
            })
        }
        ControlLabel::FileOpsNew => Some(AppCommand::NewBuffer),
        ControlLabel::BackgroundImageShowCross | ControlLabel::BackgroundImageShowLength => {
            let surface = surface_for(label);
            let visible = event.value_bool.unwrap_or_else(|| {
                !state
                    .model
                    .background_image(surface)
                    .is_some_and(|image| image.visible)
            });
            Some(AppCommand::SetBackgroundVisible {
                surface: surface.to_string(),
                visible,
            })
        }
        ControlLabel::BackgroundImageUrlCross | ControlLabel::BackgroundImageUrlLength => {
            Some(AppCommand::SetBackgroundImageRef {
                surface: surface_for(label).to_string(),
                image_ref: buffer_name,
            })
        }
        _ => None,
    };
    commands.extend(follow_up);
    commands
}

fn surface_for(label: ControlLabel) -> &'static str {
    match label {
        ControlLabel::BackgroundImageShowLength | ControlLabel::BackgroundImageUrlLength => {
            LENGTH_SECTION
        }
        _ => CROSS_SECTION,
    }
}

#[cfg(test)]
mod tests;
