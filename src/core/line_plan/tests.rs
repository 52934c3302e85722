use super::*;
use crate::core::{LineDelete, LineHighlight, LineMirror, LineSelect, CROSS_SECTION};
use glam::DVec2;

fn p(x: f64, y: f64, z: f64) -> Point {
    Point::new(x, y, z)
}

fn draw(id: &str, start: Point, finish: Point) -> EditEvent {
    EditEvent::LineNew(LineModify {
        widget_type: CROSS_SECTION.into(),
        sequence: "sequence_1".into(),
        line_id: id.into(),
        line_end: LineEnd::Point1,
        item_index: 1,
        action: LineModifyAction::Move,
        start_point: start,
        finish_point: finish,
    })
}

fn modify(id: &str, end: LineEnd, idx: usize, action: LineModifyAction, finish: Point) -> EditEvent {
    EditEvent::LineModify(LineModify {
        widget_type: CROSS_SECTION.into(),
        sequence: "sequence_2".into(),
        line_id: id.into(),
        line_end: end,
        item_index: idx,
        action,
        start_point: Point::ZERO,
        finish_point: finish,
    })
}

fn select(id: &str) -> EditEvent {
    EditEvent::LineSelect(LineSelect {
        widget_type: CROSS_SECTION.into(),
        line_id: id.into(),
    })
}

#[test]
fn new_line_uses_start_and_finish_point() {
    let mut plan = LinePlan::new();
    plan.apply(&draw("drawnLine_1", p(0.0, 0.0, 0.0), p(10.0, 10.0, 0.0)));

    let line = plan.get_line("drawnLine_1").expect("Linie angelegt");
    assert_eq!(line.finish_pos.a(), p(0.0, 0.0, 0.0));
    assert_eq!(line.finish_pos.b(), p(10.0, 10.0, 0.0));
    assert!(line.selected);

    let changes = plan.take_changes();
    assert_eq!(changes.len(), 1);
    assert!(plan.take_changes().is_empty());
}

#[test]
fn modify_leaves_exactly_one_line_selected() {
    let mut plan = LinePlan::new();
    plan.apply(&draw("a", p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));
    plan.apply(&draw("b", p(0.0, 5.0, 0.0), p(1.0, 5.0, 0.0)));
    plan.take_changes();

    plan.apply(&modify("a", LineEnd::Point1, 0, LineModifyAction::Move, p(-1.0, 0.0, 0.0)));

    assert_eq!(plan.selected_lines().len(), 1);
    assert_eq!(plan.selected_lines()[0].id, "a");
    assert!(!plan.get_line("b").expect("b").selected);

    // b abwählen, dann a aktualisieren
    let changes = plan.take_changes();
    assert_eq!(changes.len(), 2);
    assert!(matches!(&changes[0], ModelChange::Line(LineUpdate::Changed(l)) if l.id == "b"));
}

#[test]
fn mirror_side_handle_flips_x_before_writing() {
    let mut plan = LinePlan::new();
    plan.apply(&draw("a", p(1.0, 0.0, 0.0), p(5.0, 5.0, 0.0)));
    plan.apply(&modify("a", LineEnd::Point2, 1, LineModifyAction::Move, p(-7.0, 6.0, 0.0)));
    assert_eq!(plan.get_line("a").expect("a").finish_pos.b(), p(7.0, 6.0, 0.0));
}

#[test]
fn segment_move_keeps_offset_to_next_point() {
    let mut plan = LinePlan::new();
    plan.apply(&draw("a", p(0.0, 0.0, 0.0), p(4.0, 2.0, 0.0)));
    plan.apply(&modify("a", LineEnd::Segment1, 0, LineModifyAction::Move, p(1.0, 1.0, 0.0)));
    let pos = &plan.get_line("a").expect("a").finish_pos;
    assert_eq!(pos.a(), p(1.0, 1.0, 0.0));
    assert_eq!(pos.b(), p(5.0, 3.0, 0.0));
}

#[test]
fn add_and_delete_control_point() {
    let mut plan = LinePlan::new();
    plan.apply(&draw("a", p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0)));
    plan.apply(&modify("a", LineEnd::Point1, 1, LineModifyAction::AddPoint, p(2.0, 3.0, 0.0)));
    assert_eq!(plan.get_line("a").expect("a").finish_pos.order(), 3);

    plan.apply(&modify("a", LineEnd::Point1, 1, LineModifyAction::DeletePoint, Point::ZERO));
    let pos = &plan.get_line("a").expect("a").finish_pos;
    assert_eq!(pos.points(), &[p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0)]);
}

#[test]
fn select_toggles_and_tracks_side_table() {
    let mut plan = LinePlan::new();
    plan.apply(&draw("a", p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));
    plan.apply(&select("a"));
    assert!(plan.selected_ids().is_empty());
    plan.apply(&select("a"));
    assert!(plan.selected_ids().contains("a"));
}

#[test]
fn highlight_is_exclusive() {
    let mut plan = LinePlan::new();
    plan.apply(&draw("a", p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));
    plan.apply(&draw("b", p(0.0, 2.0, 0.0), p(1.0, 2.0, 0.0)));
    let hover = |id: Option<&str>| {
        EditEvent::LineHighlight(LineHighlight {
            widget_type: CROSS_SECTION.into(),
            line_id: id.map(str::to_string),
        })
    };

    plan.apply(&hover(Some("a")));
    plan.apply(&hover(Some("b")));
    assert!(!plan.get_line("a").expect("a").highlighted);
    assert!(plan.get_line("b").expect("b").highlighted);

    plan.apply(&hover(None));
    assert!(plan.lines().all(|l| !l.highlighted));
}

#[test]
fn repeated_hover_still_reports_target() {
    let mut plan = LinePlan::new();
    plan.apply(&draw("a", p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));
    let hover = EditEvent::LineHighlight(LineHighlight {
        widget_type: CROSS_SECTION.into(),
        line_id: Some("a".into()),
    });
    plan.apply(&hover);
    plan.take_changes();

    plan.apply(&hover);

    let changes = plan.take_changes();
    assert_eq!(changes.len(), 1);
    assert!(matches!(
        &changes[0],
        ModelChange::Line(LineUpdate::Changed(line)) if line.id == "a" && line.highlighted
    ));
}

#[test]
fn check_rejects_events_the_model_cannot_apply() {
    let mut plan = LinePlan::new();
    let ghost = EditEvent::LineMirror(LineMirror {
        widget_type: "toolbar".into(),
        sequence: "sequence_1".into(),
        line_id: "ghost".into(),
    });
    assert_eq!(plan.check(&ghost), Err(InvalidEvent::UnknownLine("ghost".into())));

    plan.apply(&draw("a", p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));
    let overflow = modify("a", LineEnd::Segment2, usize::MAX, LineModifyAction::Move, Point::ZERO);
    assert!(matches!(
        plan.check(&overflow),
        Err(InvalidEvent::HandleOutOfRange { order: 2, .. })
    ));
    assert_eq!(
        plan.check(&modify("a", LineEnd::Segment1, 0, LineModifyAction::Move, Point::ZERO)),
        Ok(())
    );
    assert_eq!(plan.check(&draw("b", p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0))), Ok(()));
}

#[test]
fn delete_removes_line_and_selection_entry() {
    let mut plan = LinePlan::new();
    plan.apply(&draw("a", p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));
    plan.take_changes();

    plan.apply(&EditEvent::LineDelete(LineDelete {
        widget_type: CROSS_SECTION.into(),
        sequence: "sequence_3".into(),
        line_id: "a".into(),
        last_pos: None,
        mirrored: false,
    }));

    assert!(plan.get_line("a").is_none());
    assert!(plan.selected_ids().is_empty());
    assert_eq!(
        plan.take_changes(),
        vec![ModelChange::Line(LineUpdate::Deleted { id: "a".into() })]
    );
}

#[test]
fn mirror_toggles_flag() {
    let mut plan = LinePlan::new();
    plan.apply(&draw("a", p(2.0, 0.0, 0.0), p(3.0, 1.0, 0.0)));
    let mirror = EditEvent::LineMirror(LineMirror {
        widget_type: CROSS_SECTION.into(),
        sequence: "sequence_5".into(),
        line_id: "a".into(),
    });
    plan.apply(&mirror);
    assert!(plan.get_line("a").expect("a").mirrored);
    plan.apply(&mirror);
    assert!(!plan.get_line("a").expect("a").mirrored);
}

#[test]
fn nearest_line_only_considers_coplanar_neighbours() {
    let mut plan = LinePlan::new();
    plan.apply(&draw("a", p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0)));
    plan.apply(&draw("far", p(13.0, 0.0, 5.0), p(20.0, 0.0, 5.0)));
    plan.apply(&draw("near", p(13.0, 0.0, 0.0), p(20.0, 0.0, 0.0)));

    let line = plan.get_line("a").expect("a").clone();
    let nearest = plan.nearest_line(&line);
    assert_eq!(nearest.point, Some(p(13.0, 0.0, 0.0)));
    assert!(!nearest.mirrored);
}

#[test]
fn nearest_line_without_neighbour_has_no_point() {
    let mut plan = LinePlan::new();
    plan.apply(&draw("a", p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0)));
    let line = plan.get_line("a").expect("a").clone();
    assert_eq!(plan.nearest_line(&line), NearestPoint::default());
}

#[test]
fn nearest_line_skips_zero_distance_matches() {
    let mut plan = LinePlan::new();
    plan.apply(&draw("a", p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0)));
    plan.apply(&draw("b", p(10.0, 0.0, 0.0), p(10.0, 30.0, 0.0)));
    let line = plan.get_line("a").expect("a").clone();
    // b.a liegt exakt auf a.b → nächster echter Kandidat ist b.a gegen a.a (Distanz 10)
    let nearest = plan.nearest_line(&line);
    assert_eq!(nearest.point, Some(p(10.0, 0.0, 0.0)));
}

#[test]
fn nearest_line_considers_mirrored_candidates() {
    let mut plan = LinePlan::new();
    plan.apply(&draw("a", p(-2.0, 0.0, 0.0), p(-8.0, 9.0, 0.0)));
    plan.apply(&draw("b", p(3.0, 0.0, 0.0), p(30.0, 30.0, 0.0)));
    plan.apply(&EditEvent::LineMirror(LineMirror {
        widget_type: CROSS_SECTION.into(),
        sequence: "sequence_9".into(),
        line_id: "b".into(),
    }));
    let line = plan.get_line("a").expect("a").clone();
    let nearest = plan.nearest_line(&line);
    assert_eq!(nearest.point, Some(p(3.0, 0.0, 0.0)));
    assert!(nearest.mirrored);
}

#[test]
fn background_image_position_is_start_plus_offset() {
    let mut plan = LinePlan::new();
    let event = BackgroundImageEvent {
        widget_type: CROSS_SECTION.into(),
        sequence: "sequence_1".into(),
        start_visible: false,
        finish_visible: true,
        start_image: None,
        finish_image: Some("hull.png".into()),
        start_pos: DVec2::new(1.0, 2.0),
        offset: DVec2::new(3.0, -1.0),
    };
    plan.apply(&EditEvent::BackgroundImage(event));

    let image = plan.background_image(CROSS_SECTION).expect("angelegt");
    assert!(image.visible);
    assert_eq!(image.image_ref.as_deref(), Some("hull.png"));
    assert_eq!(image.position, DVec2::new(4.0, 1.0));
}

#[test]
fn reset_reports_teardown() {
    let mut plan = LinePlan::new();
    plan.apply(&draw("a", p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));
    plan.apply_background_image_event(&BackgroundImageEvent {
        widget_type: CROSS_SECTION.into(),
        sequence: "sequence_2".into(),
        start_visible: false,
        finish_visible: true,
        start_image: None,
        finish_image: None,
        start_pos: DVec2::ZERO,
        offset: DVec2::ZERO,
    });
    plan.take_changes();

    plan.reset();
    let changes = plan.take_changes();
    assert_eq!(changes.len(), 2);
    assert!(matches!(&changes[1], ModelChange::BackgroundImage(img) if !img.visible));
    assert_eq!(plan.line_count(), 0);
}
