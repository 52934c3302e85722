//! Handler für Sichtbarkeit und Bildreferenz der Hintergrundbilder.

use super::editing::apply_edit;
use crate::app::AppState;
use crate::core::{BackgroundImageEvent, EditEvent};
use glam::DVec2;

/// Blendet das Hintergrundbild einer Zeichenfläche ein oder aus.
pub fn set_visible(state: &mut AppState, surface: &str, visible: bool) -> anyhow::Result<()> {
    let mut event = current(state, surface);
    event.finish_visible = visible;
    apply_edit(state, vec![EditEvent::BackgroundImage(event)])
}

/// Setzt die Bildreferenz des Hintergrundbilds einer Zeichenfläche.
pub fn set_image_ref(
    state: &mut AppState,
    surface: &str,
    image_ref: Option<String>,
) -> anyhow::Result<()> {
    let mut event = current(state, surface);
    event.finish_image = image_ref;
    apply_edit(state, vec![EditEvent::BackgroundImage(event)])
}

/// Event ohne Änderung, ausgehend vom aktuellen Bildzustand.
fn current(state: &mut AppState, surface: &str) -> BackgroundImageEvent {
    let sequence = state.sequences.next_sequence();
    let image = state.model.background_image(surface);
    let visible = image.is_some_and(|i| i.visible);
    let image_ref = image.and_then(|i| i.image_ref.clone());
    BackgroundImageEvent {
        widget_type: surface.to_string(),
        sequence,
        start_visible: visible,
        finish_visible: visible,
        start_image: image_ref.clone(),
        finish_image: image_ref,
        start_pos: image.map_or(DVec2::ZERO, |i| i.position),
        offset: DVec2::ZERO,
    }
}
