//! Einrasten gezogener Endpunkte auf Endpunkte benachbarter Linien.

use crate::app::gesture::{Gesture, GestureKind};
use crate::core::{
    planar_manhattan, planar_manhattan_mirrored, EditEvent, Line, LineEnd, LineModify,
    LineModifyAction, LinePlan, Point,
};
use crate::shared::EditorOptions;

/// Rastet die Endpunkte von `line` (in place) ein.
///
/// Gespiegelte Linien landen zuerst mit Endpunkten nahe der Mittellinie
/// exakt auf `x = 0`. Danach wird unter bis zu vier Paarungen (zwei direkte,
/// bei Spiegelung zwei gespiegelte) die kürzeste gewählt; liegt sie unter
/// `snap_distance`, übernimmt der Endpunkt die Koordinaten des Nachbarn
/// (bei gespiegelter Paarung mit negiertem `x`).
pub fn snap_line(model: &LinePlan, line: &mut Line, options: &EditorOptions) {
    let lookup = model.get_line(&line.id);
    let nearest = match lookup {
        Some(stored) => model.nearest_line(stored),
        None => model.nearest_line(line),
    };
    let mut mirrored = lookup.is_some_and(|l| l.mirrored);

    if mirrored {
        let last = line.finish_pos.last_index();
        for idx in [0, last] {
            if let Some(mut p) = line.finish_pos.get(idx) {
                if p.x.abs() < options.centre_snap_distance {
                    p.x = 0.0;
                    line.finish_pos.set(idx, p);
                }
            }
        }
    }

    let Some(target) = nearest.point else {
        return;
    };
    mirrored |= nearest.mirrored;

    let (a, b) = (line.finish_pos.a(), line.finish_pos.b());
    let mut matches = vec![planar_manhattan(target, a), planar_manhattan(target, b)];
    if mirrored {
        matches.push(planar_manhattan_mirrored(target, a));
        matches.push(planar_manhattan_mirrored(target, b));
    }

    let mut closest = 0;
    for (i, dist) in matches.iter().enumerate() {
        if *dist < matches[closest] {
            closest = i;
        }
    }
    if matches[closest] >= options.snap_distance {
        return;
    }

    let idx = if closest % 2 == 0 {
        0
    } else {
        line.finish_pos.last_index()
    };
    let snapped = if closest >= 2 {
        Point::new(-target.x, target.y, target.z)
    } else {
        target
    };
    line.finish_pos.set(idx, snapped);
}

/// Einrast-Korrekturen für eine abgeschlossene Linien-Geste als Modify-Events
/// derselben Sequenz (nur für verschobene Endpunkte).
pub fn snap_events(model: &LinePlan, gesture: &Gesture, options: &EditorOptions) -> Vec<EditEvent> {
    let GestureKind::Line { line_id, .. } = &gesture.kind else {
        return Vec::new();
    };
    let Some(stored) = model.get_line(line_id) else {
        return Vec::new();
    };

    let mut snapped = stored.clone();
    snap_line(model, &mut snapped, options);

    let last = stored.finish_pos.last_index();
    [0, last]
        .into_iter()
        .filter_map(|idx| {
            let before = stored.finish_pos.get(idx)?;
            let after = snapped.finish_pos.get(idx)?;
            (before != after).then(|| {
                EditEvent::LineModify(LineModify {
                    widget_type: gesture.widget_type.clone(),
                    sequence: gesture.sequence.clone(),
                    line_id: line_id.clone(),
                    line_end: LineEnd::Point1,
                    item_index: idx,
                    action: LineModifyAction::Move,
                    start_point: before,
                    finish_point: after,
                })
            })
        })
        .collect()
}
