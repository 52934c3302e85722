use crate::app::events::{ControlEvent, PointerDrag, PointerMove};
use crate::app::gesture::{Gesture, GestureKind};
use crate::app::{AppCommand, AppIntent, AppState, ControlLabel, ControlValue, EditorWarning};
use crate::core::{EditEvent, LineEnd, LineModify, LineModifyAction, Point, CROSS_SECTION};

use super::map_intent_to_commands;

fn drag(sequence: &str, line_id: Option<&str>) -> PointerDrag {
    PointerDrag {
        widget_type: CROSS_SECTION.into(),
        sequence: sequence.into(),
        start_point: Some(Point::new(1.0, 1.0, 0.0)),
        finish_point: Some(Point::new(5.0, 5.0, 0.0)),
        line_id: line_id.map(str::to_string),
        line_end: None,
        item_index: None,
        action: LineModifyAction::Move,
    }
}

fn control(label: &str, value_text: Option<&str>) -> AppIntent {
    AppIntent::ControlPressed(ControlEvent {
        widget_type: "toolbar".into(),
        label: label.into(),
        value_text: value_text.map(str::to_string),
        value_bool: None,
    })
}

fn state_with_line() -> AppState {
    let mut state = AppState::new();
    state.apply_events(&[EditEvent::LineNew(LineModify {
        widget_type: CROSS_SECTION.into(),
        sequence: "sequence_1".into(),
        line_id: "drawnLine_1".into(),
        line_end: LineEnd::Point1,
        item_index: 1,
        action: LineModifyAction::Move,
        start_point: Point::new(0.0, 0.0, 0.0),
        finish_point: Point::new(10.0, 10.0, 0.0),
    })]);
    state
}

#[test]
fn rib_selected_maps_to_selected_rib_press() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::RibSelected {
            widget_type: "length-section".into(),
            z: 12.5,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::PressControl {
            label: ControlLabel::SelectedRib,
            value: Some(ControlValue::Number(12.5)),
        }]
    );
}

#[test]
fn drag_into_empty_space_begins_new_line_gesture() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDragged(drag("sequence_7", None)),
    );

    assert_eq!(commands.len(), 2);
    let AppCommand::BeginGesture { gesture } = &commands[0] else {
        panic!("BeginGesture erwartet, war {:?}", commands[0]);
    };
    assert!(matches!(
        &gesture.kind,
        GestureKind::Line { line_id, is_new: true, item_index: 1, .. } if line_id == "drawnLine_7"
    ));
    assert!(matches!(commands[1], AppCommand::DragGesture { .. }));
}

#[test]
fn drag_with_foreign_sequence_reports_warning() {
    let state = AppState::new();

    let commands =
        map_intent_to_commands(&state, AppIntent::PointerDragged(drag("gesture-1", None)));

    assert_eq!(
        commands,
        vec![AppCommand::ReportWarning(
            EditorWarning::UnrecognisedSequence("gesture-1".into())
        )]
    );
}

#[test]
fn continuing_gesture_only_drags() {
    let mut state = AppState::new();
    state.gesture = Some(Gesture {
        sequence: "sequence_3".into(),
        widget_type: CROSS_SECTION.into(),
        kind: GestureKind::Line {
            line_id: "drawnLine_3".into(),
            line_end: LineEnd::Point1,
            item_index: 1,
            start_point: Point::ZERO,
            is_new: true,
        },
    });

    let commands =
        map_intent_to_commands(&state, AppIntent::PointerDragged(drag("sequence_3", None)));

    assert_eq!(
        commands,
        vec![AppCommand::DragGesture {
            finish_point: Point::new(5.0, 5.0, 0.0)
        }]
    );
}

#[test]
fn drag_on_line_without_handle_is_rejected() {
    let state = state_with_line();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDragged(drag("sequence_2", Some("drawnLine_1"))),
    );

    assert_eq!(
        commands,
        vec![AppCommand::ReportWarning(EditorWarning::MissingLineEnd(
            "drawnLine_1".into()
        ))]
    );
}

#[test]
fn segment_index_must_leave_room_for_next_point() {
    let state = state_with_line();
    let mut d = drag("sequence_2", Some("drawnLine_1"));
    d.line_end = Some(LineEnd::Segment1);
    d.item_index = Some(1);

    let commands = map_intent_to_commands(&state, AppIntent::PointerDragged(d));

    assert!(matches!(
        commands[..],
        [AppCommand::ReportWarning(EditorWarning::InvalidHandle { item_index: 1, .. })]
    ));
}

#[test]
fn add_point_starts_a_gesture_on_the_inserted_point() {
    let state = state_with_line();
    let mut d = drag("sequence_2", Some("drawnLine_1"));
    d.line_end = Some(LineEnd::Segment1);
    d.item_index = Some(1);
    d.action = LineModifyAction::AddPoint;

    let commands = map_intent_to_commands(&state, AppIntent::PointerDragged(d));

    assert_eq!(commands.len(), 2);
    let AppCommand::ApplyEdit { events } = &commands[0] else {
        panic!("ApplyEdit erwartet");
    };
    assert!(matches!(
        &events[..],
        [EditEvent::LineModify(LineModify { action: LineModifyAction::AddPoint, .. })]
    ));
    assert!(matches!(
        &commands[1],
        AppCommand::BeginGesture { gesture } if matches!(
            gesture.kind,
            GestureKind::Line { line_end: LineEnd::Point1, item_index: 1, is_new: false, .. }
        )
    ));
}

#[test]
fn samples_after_point_removal_are_dropped() {
    let mut state = state_with_line();
    state.gesture = Some(Gesture {
        sequence: "sequence_2".into(),
        widget_type: CROSS_SECTION.into(),
        kind: GestureKind::PointRemoved {
            line_id: "drawnLine_1".into(),
        },
    });
    let mut d = drag("sequence_2", Some("drawnLine_1"));
    d.line_end = Some(LineEnd::Point1);
    d.item_index = Some(1);
    d.action = LineModifyAction::DeletePoint;

    let commands = map_intent_to_commands(&state, AppIntent::PointerDragged(d));

    assert!(commands.is_empty());
}

#[test]
fn segment_index_at_usize_max_is_rejected() {
    let state = state_with_line();
    let mut d = drag("sequence_2", Some("drawnLine_1"));
    d.line_end = Some(LineEnd::Segment1);
    d.item_index = Some(usize::MAX);

    let commands = map_intent_to_commands(&state, AppIntent::PointerDragged(d));

    assert!(matches!(
        commands[..],
        [AppCommand::ReportWarning(EditorWarning::InvalidHandle { item_index: usize::MAX, .. })]
    ));
}

#[test]
fn select_drag_without_line_reports_missing_id() {
    let mut state = AppState::new();
    state.controls = state
        .controls
        .press(ControlLabel::SelectLine, Some(ControlValue::Bool(true)))
        .controls;

    let commands =
        map_intent_to_commands(&state, AppIntent::PointerDragged(drag("sequence_1", None)));

    assert!(matches!(
        commands[..],
        [AppCommand::ReportWarning(EditorWarning::MissingLineId { .. })]
    ));
}

#[test]
fn unknown_control_label_reports_warning() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, control("bogus", None));

    assert_eq!(
        commands,
        vec![AppCommand::ReportWarning(EditorWarning::UnknownControl(
            "bogus".into()
        ))]
    );
}

#[test]
fn save_without_name_reports_missing_name() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, control("fileOpsSave", Some("  ")));

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[1],
        AppCommand::ReportWarning(EditorWarning::MissingBufferName(_))
    ));
}

#[test]
fn undo_press_finishes_running_gesture_first() {
    let mut state = AppState::new();
    state.gesture = Some(Gesture {
        sequence: "sequence_1".into(),
        widget_type: CROSS_SECTION.into(),
        kind: GestureKind::Select {
            line_id: "drawnLine_1".into(),
        },
    });

    let commands = map_intent_to_commands(&state, control("undo", None));

    assert_eq!(
        commands,
        vec![
            AppCommand::FinishGesture,
            AppCommand::PressControl {
                label: ControlLabel::Undo,
                value: None,
            },
            AppCommand::Undo,
        ]
    );
}

#[test]
fn hover_in_modify_mode_highlights() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved(PointerMove {
            widget_type: CROSS_SECTION.into(),
            start_point: Some(Point::ZERO),
            line_id: Some("drawnLine_1".into()),
            line_end: None,
        }),
    );

    assert!(matches!(
        &commands[..],
        [AppCommand::ApplyEdit { events }] if matches!(events[..], [EditEvent::LineHighlight(_)])
    ));
}
