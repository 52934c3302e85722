//! Gemeinsame Helfer für die Controller-Integrationstests.

#![allow(dead_code)]

use shipyard_editor::app::events::{ControlEvent, PointerDrag, PointerSample};
use shipyard_editor::core::{
    BackgroundImage, LineEnd, LineModifyAction, LineUpdate, Point, CROSS_SECTION,
};
use shipyard_editor::{
    AppController, AppIntent, AppState, ControlLabel, ControlValue, EditorView, ViewUpdate,
};
use std::cell::RefCell;
use std::rc::Rc;

/// View, die jede Benachrichtigung in einer geteilten Liste ablegt.
#[derive(Clone, Default)]
pub struct RecordingView {
    pub updates: Rc<RefCell<Vec<ViewUpdate>>>,
}

impl RecordingView {
    pub fn take(&self) -> Vec<ViewUpdate> {
        std::mem::take(&mut *self.updates.borrow_mut())
    }
}

impl EditorView for RecordingView {
    fn update_line(&mut self, update: &LineUpdate) {
        self.updates
            .borrow_mut()
            .push(ViewUpdate::Line(update.clone()));
    }

    fn update_background_image(&mut self, image: &BackgroundImage) {
        self.updates
            .borrow_mut()
            .push(ViewUpdate::BackgroundImage(image.clone()));
    }

    fn set_control_value(&mut self, label: ControlLabel, value: &ControlValue) {
        self.updates.borrow_mut().push(ViewUpdate::ControlValue {
            label,
            value: value.clone(),
        });
    }

    fn set_control_enabled(&mut self, label: ControlLabel, enabled: bool) {
        self.updates
            .borrow_mut()
            .push(ViewUpdate::ControlEnabled { label, enabled });
    }
}

/// Controller mit einer registrierten RecordingView.
pub fn setup(state: &AppState) -> (AppController, RecordingView) {
    let mut controller = AppController::new();
    let view = RecordingView::default();
    controller.add_view(state, Box::new(view.clone()));
    view.take();
    (controller, view)
}

pub fn p(x: f64, y: f64) -> Point {
    Point::new(x, y, 0.0)
}

pub fn sample(
    widget_type: &str,
    point: Point,
    down: bool,
    handle: Option<(&str, LineEnd, usize)>,
) -> AppIntent {
    AppIntent::PointerSampled(PointerSample {
        widget_type: widget_type.into(),
        point: Some(point),
        buttons_down: down,
        line_id: handle.map(|(id, _, _)| id.to_string()),
        line_end: handle.map(|(_, end, _)| end),
        item_index: handle.map(|(_, _, idx)| idx),
    })
}

/// Drücken, über alle Punkte ziehen, am letzten Punkt loslassen.
pub fn drag_path(
    controller: &mut AppController,
    state: &mut AppState,
    widget_type: &str,
    handle: Option<(&str, LineEnd, usize)>,
    path: &[Point],
) {
    let (first, rest) = path.split_first().expect("Pfad nicht leer");
    controller
        .handle_intent(state, sample(widget_type, *first, true, handle))
        .expect("Drücken");
    for point in rest {
        controller
            .handle_intent(state, sample(widget_type, *point, true, handle))
            .expect("Ziehen");
    }
    let last = rest.last().unwrap_or(first);
    controller
        .handle_intent(state, sample(widget_type, *last, false, None))
        .expect("Loslassen");
}

/// Drag-Samples einer View mit eigener Gesten-ID und Aktion, danach Loslassen.
pub fn handle_drag(
    controller: &mut AppController,
    state: &mut AppState,
    sequence: &str,
    handle: (&str, LineEnd, usize),
    action: LineModifyAction,
    path: &[Point],
) {
    let (line_id, line_end, item_index) = handle;
    for point in path {
        controller
            .handle_intent(
                state,
                AppIntent::PointerDragged(PointerDrag {
                    widget_type: CROSS_SECTION.into(),
                    sequence: sequence.into(),
                    start_point: path.first().copied(),
                    finish_point: Some(*point),
                    line_id: Some(line_id.to_string()),
                    line_end: Some(line_end),
                    item_index: Some(item_index),
                    action,
                }),
            )
            .expect("Ziehen");
    }
    let last = path.last().copied().unwrap_or(Point::ZERO);
    controller
        .handle_intent(state, sample(CROSS_SECTION, last, false, None))
        .expect("Loslassen");
}

/// Zeichnet eine neue Linie im Spantriss.
pub fn draw_line(controller: &mut AppController, state: &mut AppState, from: Point, to: Point) {
    drag_path(controller, state, CROSS_SECTION, None, &[from, to]);
}

pub fn press(controller: &mut AppController, state: &mut AppState, label: &str) {
    press_with(controller, state, label, None, None);
}

pub fn press_with(
    controller: &mut AppController,
    state: &mut AppState,
    label: &str,
    value_text: Option<&str>,
    value_bool: Option<bool>,
) {
    controller
        .handle_intent(
            state,
            AppIntent::ControlPressed(ControlEvent {
                widget_type: "toolbar".into(),
                label: label.into(),
                value_text: value_text.map(str::to_string),
                value_bool,
            }),
        )
        .expect("Bedienelement");
}
