//! Geometrie-Primitive: Punkte, Linienpositionen und Vergleichs-Hilfen.

use serde::{Deserialize, Serialize};

/// Punkt im Rumpf-Koordinatensystem.
///
/// - `x`: Backbord/Steuerbord (Mittellinie bei `x = 0`)
/// - `y`: oben/unten
/// - `z`: vorn/achtern (Spant-Station)
pub type Point = glam::DVec3;

/// Spiegelt einen Punkt an der Mittellinie (negiert `x`).
#[inline]
pub fn mirror_point(p: Point) -> Point {
    Point::new(-p.x, p.y, p.z)
}

/// Manhattan-Distanz zweier Punkte in der Spantebene (x/y), `z` bleibt unberücksichtigt.
#[inline]
pub fn planar_manhattan(p1: Point, p2: Point) -> f64 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}

/// Manhattan-Distanz eines Punktes zum gespiegelten Gegenpunkt (x-Summe statt x-Differenz).
#[inline]
pub fn planar_manhattan_mirrored(p1: Point, p2: Point) -> f64 {
    (p1.x + p2.x).abs() + (p1.y - p2.y).abs()
}

/// Fehler beim Aufbau einer `LinePos` mit weniger als zwei Punkten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a line position needs at least 2 points, got {0}")]
pub struct TooFewPoints(pub usize);

/// Geordnete Punktfolge einer Linie (mindestens zwei Punkte).
///
/// Erster Punkt = Endpunkt `a`, letzter Punkt = Endpunkt `b`. Innere Punkte
/// sind Kontrollpunkte einer Kurve höherer Ordnung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct LinePos {
    pts: Vec<Point>,
}

impl LinePos {
    /// Erstellt eine Linienposition aus einer Punktfolge.
    pub fn new(pts: Vec<Point>) -> Result<Self, TooFewPoints> {
        if pts.len() < 2 {
            return Err(TooFewPoints(pts.len()));
        }
        Ok(Self { pts })
    }

    /// Erstellt eine gerade Linie aus zwei Endpunkten.
    pub fn from_ends(a: Point, b: Point) -> Self {
        Self { pts: vec![a, b] }
    }

    /// Anzahl der Punkte (Ordnung der Kurve), immer `>= 2`.
    pub fn order(&self) -> usize {
        self.pts.len()
    }

    /// Erster Endpunkt.
    pub fn a(&self) -> Point {
        self.pts[0]
    }

    /// Letzter Endpunkt.
    pub fn b(&self) -> Point {
        self.pts[self.pts.len() - 1]
    }

    /// Index des letzten Punktes (Endpunkt `b`).
    pub fn last_index(&self) -> usize {
        self.pts.len() - 1
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn points(&self) -> &[Point] {
        &self.pts
    }

    /// Punkt an Index `idx`, falls vorhanden.
    pub fn get(&self, idx: usize) -> Option<Point> {
        self.pts.get(idx).copied()
    }

    /// Überschreibt den Punkt an `idx`. Gibt `false` zurück, wenn der Index ungültig ist.
    pub fn set(&mut self, idx: usize, p: Point) -> bool {
        match self.pts.get_mut(idx) {
            Some(slot) => {
                *slot = p;
                true
            }
            None => false,
        }
    }

    /// Verschiebt das Segment `idx..=idx+1` so, dass Punkt `idx` auf `p` liegt
    /// und der Versatz zum Folgepunkt erhalten bleibt.
    pub fn move_segment(&mut self, idx: usize, p: Point) -> bool {
        if idx >= self.pts.len().saturating_sub(1) {
            return false;
        }
        let diff = self.pts[idx + 1] - self.pts[idx];
        self.pts[idx] = p;
        self.pts[idx + 1] = p + diff;
        true
    }

    /// Fügt einen Kontrollpunkt an `idx` ein (nur zwischen den Endpunkten erlaubt).
    pub fn insert_control_point(&mut self, idx: usize, p: Point) -> bool {
        if idx == 0 || idx >= self.pts.len() {
            return false;
        }
        self.pts.insert(idx, p);
        true
    }

    /// Entfernt den Kontrollpunkt an `idx`. Endpunkte bleiben unangetastet.
    pub fn remove_control_point(&mut self, idx: usize) -> Option<Point> {
        if self.pts.len() <= 2 || idx == 0 || idx >= self.pts.len() - 1 {
            return None;
        }
        Some(self.pts.remove(idx))
    }

    /// Liefert die an der Mittellinie gespiegelte Geometrie.
    pub fn mirrored(&self) -> Self {
        Self {
            pts: self.pts.iter().copied().map(mirror_point).collect(),
        }
    }

    /// Beide Endpunkte liegen auf derselben Spant-Station wie bei `other`.
    pub fn coplanar_with(&self, other: &LinePos) -> bool {
        self.a().z == other.a().z && self.b().z == other.b().z
    }

    /// Günstige Näherung der Distanz zweier Linien in der x/y-Ebene.
    ///
    /// Nur `a`/`a` und `b`/`b` werden verglichen, innere Punkte ignoriert.
    pub fn approx_distance(&self, other: &LinePos) -> f64 {
        planar_manhattan(self.a(), other.a()) + planar_manhattan(self.b(), other.b())
    }
}

impl TryFrom<Vec<Point>> for LinePos {
    type Error = TooFewPoints;

    fn try_from(pts: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(pts)
    }
}

impl From<LinePos> for Vec<Point> {
    fn from(pos: LinePos) -> Self {
        pos.pts
    }
}
