//! Der Line-Plan: autoritativer Zustand aller Linien und Hintergrundbilder.
//!
//! Das Model wendet genau ein [`EditEvent`] pro Aufruf an und sammelt die
//! resultierenden Änderungen in einem Ausgangspuffer ([`LinePlan::take_changes`]),
//! den der Controller nach jedem Command an die Views verteilt.

use super::{
    mirror_point, planar_manhattan, planar_manhattan_mirrored, BackgroundImage,
    BackgroundImageEvent, EditEvent, Line, LineEnd, LineModify, LineModifyAction, LinePos,
    LineUpdate, Point,
};
use indexmap::{IndexMap, IndexSet};

/// Ergebnis der Nachbarsuche für das Einrasten.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NearestPoint {
    /// Nächster Endpunkt einer koplanaren Linie (`None` = kein Einrastziel)
    pub point: Option<Point>,
    /// Treffer stammt aus einem gespiegelten Kandidaten
    pub mirrored: bool,
}

/// Änderung, die an alle Views weitergereicht wird.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelChange {
    /// Linie geändert oder entfernt
    Line(LineUpdate),
    /// Hintergrundbild geändert
    BackgroundImage(BackgroundImage),
}

/// Event, das auf den aktuellen Model-Zustand nicht anwendbar ist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEvent {
    /// Event bezieht sich auf eine nicht vorhandene Linie.
    #[error("event references unknown line '{0}'")]
    UnknownLine(String),
    /// Griff-Index passt nicht zur Linie.
    #[error("line '{line_id}' has no {action:?} handle {line_end:?} at index {item_index} (order {order})")]
    HandleOutOfRange {
        /// Ziel-Linie
        line_id: String,
        /// Griff
        line_end: LineEnd,
        /// Aktion
        action: LineModifyAction,
        /// Angefragter Index
        item_index: usize,
        /// Punktanzahl der Linie
        order: usize,
    },
}

/// Container für Linien, Selektion und Hintergrundbilder.
#[derive(Debug, Clone, Default)]
pub struct LinePlan {
    lines: IndexMap<String, Line>,
    background_images: IndexMap<String, BackgroundImage>,
    selected: IndexSet<String>,
    changes: Vec<ModelChange>,
}

impl LinePlan {
    /// Erstellt einen leeren Line-Plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wendet ein beliebiges Event an (Linie oder Hintergrundbild).
    pub fn apply(&mut self, event: &EditEvent) {
        match event {
            EditEvent::BackgroundImage(bg) => self.apply_background_image_event(bg),
            _ => self.apply_line_event(event),
        }
    }

    /// Prüft, ob `event` auf den aktuellen Zustand anwendbar ist.
    ///
    /// Gespeicherte Commands werden vor dem Abspielen damit geprüft; `apply`
    /// selbst setzt gültige Events voraus.
    pub fn check(&self, event: &EditEvent) -> Result<(), InvalidEvent> {
        let known = |id: &str| {
            if self.lines.contains_key(id) {
                Ok(())
            } else {
                Err(InvalidEvent::UnknownLine(id.to_string()))
            }
        };
        match event {
            EditEvent::LineNew(m) | EditEvent::LineModify(m) => {
                // Eine fehlende Linie wird zweipunktig angelegt
                let order = self
                    .lines
                    .get(&m.line_id)
                    .map_or(2, |line| line.finish_pos.order());
                if m.action.fits(m.line_end, m.item_index, order) {
                    Ok(())
                } else {
                    Err(InvalidEvent::HandleOutOfRange {
                        line_id: m.line_id.clone(),
                        line_end: m.line_end,
                        action: m.action,
                        item_index: m.item_index,
                        order,
                    })
                }
            }
            EditEvent::LineSelect(e) => known(&e.line_id),
            EditEvent::LineMirror(e) => known(&e.line_id),
            EditEvent::LineDelete(e) => known(&e.line_id),
            EditEvent::LineHighlight(_)
            | EditEvent::LineRestore(_)
            | EditEvent::BackgroundImage(_) => Ok(()),
        }
    }

    /// Wendet ein Linien-Event an.
    pub fn apply_line_event(&mut self, event: &EditEvent) {
        match event {
            EditEvent::LineNew(m) | EditEvent::LineModify(m) => self.modify_line(m),
            EditEvent::LineSelect(e) => self.select_line(&e.line_id),
            EditEvent::LineHighlight(e) => self.highlight_line(e.line_id.as_deref()),
            EditEvent::LineMirror(e) => self.mirror_line(&e.line_id),
            EditEvent::LineDelete(e) => self.delete_line(&e.line_id),
            EditEvent::LineRestore(e) => {
                let mut line = Line::new(e.line_id.clone(), e.finish_pos.clone());
                line.mirrored = e.mirrored;
                self.changes
                    .push(ModelChange::Line(LineUpdate::Changed(line.clone())));
                self.lines.insert(e.line_id.clone(), line);
            }
            EditEvent::BackgroundImage(_) => {
                contract_violation("Hintergrundbild-Event an apply_line_event übergeben", "-");
            }
        }
    }

    /// Wendet ein Hintergrundbild-Event an. Die Zeichenfläche wird beim ersten Event angelegt.
    pub fn apply_background_image_event(&mut self, event: &BackgroundImageEvent) {
        let image = self
            .background_images
            .entry(event.widget_type.clone())
            .or_insert_with(|| BackgroundImage::new(event.widget_type.clone()));
        image.visible = event.finish_visible;
        image.image_ref = event.finish_image.clone();
        image.position = event.start_pos + event.offset;
        self.changes.push(ModelChange::BackgroundImage(image.clone()));
    }

    /// Sucht den nächsten Endpunkt einer anderen Linie auf derselben Spant-Station.
    ///
    /// Distanz-Null-Treffer (die Linie selbst bzw. bereits deckungsgleiche
    /// Punkte) werden übersprungen. Ist eine der beiden Linien gespiegelt,
    /// zählen auch die gespiegelten Kandidaten.
    pub fn nearest_line(&self, line: &Line) -> NearestPoint {
        let test = &line.finish_pos;
        let mut nearest_dist = f64::INFINITY;
        let mut nearest = NearestPoint::default();

        for other in self.lines.values() {
            if other.id == line.id || !other.finish_pos.coplanar_with(test) {
                continue;
            }
            let (oa, ob) = (other.finish_pos.a(), other.finish_pos.b());
            let mut candidates = vec![
                (planar_manhattan(oa, test.a()), oa, false),
                (planar_manhattan(ob, test.a()), ob, false),
                (planar_manhattan(oa, test.b()), oa, false),
                (planar_manhattan(ob, test.b()), ob, false),
            ];
            if other.mirrored || line.mirrored {
                candidates.extend([
                    (planar_manhattan_mirrored(oa, test.a()), oa, true),
                    (planar_manhattan_mirrored(ob, test.a()), ob, true),
                    (planar_manhattan_mirrored(oa, test.b()), oa, true),
                    (planar_manhattan_mirrored(ob, test.b()), ob, true),
                ]);
            }
            for (dist, point, mirrored) in candidates {
                if dist < nearest_dist && dist > 0.0 {
                    nearest_dist = dist;
                    nearest.point = Some(point);
                    // Einmal gespiegelt, bleibt das Flag für den Rest der Suche gesetzt
                    nearest.mirrored |= mirrored;
                }
            }
        }
        nearest
    }

    /// Linie per ID.
    pub fn get_line(&self, id: &str) -> Option<&Line> {
        self.lines.get(id)
    }

    /// Alle Linien in Einfüge-Reihenfolge.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    /// Anzahl der Linien.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// IDs der selektierten Linien in Selektions-Reihenfolge.
    pub fn selected_ids(&self) -> &IndexSet<String> {
        &self.selected
    }

    /// Selektierte Linien in Selektions-Reihenfolge.
    pub fn selected_lines(&self) -> Vec<&Line> {
        self.selected
            .iter()
            .filter_map(|id| self.lines.get(id))
            .collect()
    }

    /// Hintergrundbild einer Zeichenfläche, falls schon angelegt.
    pub fn background_image(&self, widget_type: &str) -> Option<&BackgroundImage> {
        self.background_images.get(widget_type)
    }

    /// Alle Hintergrundbilder.
    pub fn background_images(&self) -> impl Iterator<Item = &BackgroundImage> {
        self.background_images.values()
    }

    /// Entnimmt die seit dem letzten Aufruf angefallenen Änderungen.
    pub fn take_changes(&mut self) -> Vec<ModelChange> {
        std::mem::take(&mut self.changes)
    }

    /// Leert das Model vollständig.
    ///
    /// Jede Linie wird als gelöscht, jedes Hintergrundbild als ausgeblendet
    /// gemeldet, damit Views ihre Darstellung abbauen können.
    pub fn reset(&mut self) {
        for id in self.lines.keys() {
            self.changes
                .push(ModelChange::Line(LineUpdate::Deleted { id: id.clone() }));
        }
        for image in self.background_images.values() {
            let mut hidden = image.clone();
            hidden.visible = false;
            self.changes.push(ModelChange::BackgroundImage(hidden));
        }
        self.lines.clear();
        self.background_images.clear();
        self.selected.clear();
    }

    fn modify_line(&mut self, event: &LineModify) {
        if !self.lines.contains_key(&event.line_id) {
            let pos = LinePos::from_ends(event.start_point, Point::ZERO);
            self.lines
                .insert(event.line_id.clone(), Line::new(event.line_id.clone(), pos));
        }

        self.deselect_all_except(&event.line_id);

        let Some(line) = self.lines.get_mut(&event.line_id) else {
            return;
        };
        line.selected = true;
        self.selected.insert(event.line_id.clone());

        let target = if event.line_end.is_mirror_side() {
            mirror_point(event.finish_point)
        } else {
            event.finish_point
        };
        let idx = event.item_index;
        let applied = match (event.action, event.line_end) {
            (LineModifyAction::Move, LineEnd::Point1 | LineEnd::Point2) => {
                line.finish_pos.set(idx, target)
            }
            (LineModifyAction::Move, LineEnd::Segment1 | LineEnd::Segment2) => {
                line.finish_pos.move_segment(idx, target)
            }
            (LineModifyAction::AddPoint, _) => line.finish_pos.insert_control_point(idx, target),
            (LineModifyAction::DeletePoint, _) => {
                line.finish_pos.remove_control_point(idx).is_some()
            }
        };
        let snapshot = line.clone();
        if !applied {
            log::error!(
                "Linie '{}': Index {} ungültig für {:?}/{:?} (Ordnung {})",
                event.line_id,
                idx,
                event.action,
                event.line_end,
                snapshot.finish_pos.order()
            );
            debug_assert!(applied, "ungültiger Punkt-Index {idx}");
        }
        self.changes
            .push(ModelChange::Line(LineUpdate::Changed(snapshot)));
    }

    fn deselect_all_except(&mut self, keep: &str) {
        for id in self.selected.drain(..) {
            if id == keep {
                continue;
            }
            if let Some(line) = self.lines.get_mut(&id) {
                if line.selected {
                    line.selected = false;
                    self.changes
                        .push(ModelChange::Line(LineUpdate::Changed(line.clone())));
                }
            }
        }
    }

    fn select_line(&mut self, id: &str) {
        let Some(line) = self.lines.get_mut(id) else {
            contract_violation("Selektion", id);
            return;
        };
        line.selected = !line.selected;
        if line.selected {
            self.selected.insert(id.to_string());
        } else {
            self.selected.shift_remove(id);
        }
        self.changes
            .push(ModelChange::Line(LineUpdate::Changed(line.clone())));
    }

    fn highlight_line(&mut self, id: Option<&str>) {
        for line in self.lines.values_mut() {
            if line.highlighted && Some(line.id.as_str()) != id {
                line.highlighted = false;
                self.changes
                    .push(ModelChange::Line(LineUpdate::Changed(line.clone())));
            }
        }
        // Das Ziel wird immer gemeldet, auch wenn es schon hervorgehoben war
        if let Some(line) = id.and_then(|id| self.lines.get_mut(id)) {
            line.highlighted = true;
            self.changes
                .push(ModelChange::Line(LineUpdate::Changed(line.clone())));
        }
    }

    fn mirror_line(&mut self, id: &str) {
        let Some(line) = self.lines.get_mut(id) else {
            contract_violation("Spiegeln", id);
            return;
        };
        line.mirrored = !line.mirrored;
        self.changes
            .push(ModelChange::Line(LineUpdate::Changed(line.clone())));
    }

    fn delete_line(&mut self, id: &str) {
        if self.lines.shift_remove(id).is_none() {
            contract_violation("Löschen", id);
            return;
        }
        self.selected.shift_remove(id);
        self.changes.push(ModelChange::Line(LineUpdate::Deleted {
            id: id.to_string(),
        }));
    }
}

fn contract_violation(operation: &str, id: &str) {
    log::error!("{}: unbekannte Linie '{}'", operation, id);
    debug_assert!(false, "{operation}: unbekannte Linie '{id}'");
}

#[cfg(test)]
mod tests;
