//! Shipyard Line-Plan Editor.
//!
//! Startet die Editier-Engine ohne grafische Oberfläche: Optionen laden,
//! Startup-Buffer abspielen und den Zustand protokollieren.

use shipyard_editor::core::{BackgroundImage, LineUpdate};
use shipyard_editor::{
    AppController, AppIntent, AppState, ControlLabel, ControlValue, EditorOptions, EditorView,
    FileStore,
};

/// View, die alle Änderungen nur protokolliert.
struct LoggingView;

impl EditorView for LoggingView {
    fn update_line(&mut self, update: &LineUpdate) {
        match update {
            LineUpdate::Changed(line) => log::debug!(
                "Linie {}: {} Punkte{}",
                line.id,
                line.finish_pos.order(),
                if line.mirrored { ", gespiegelt" } else { "" }
            ),
            LineUpdate::Deleted { id } => log::debug!("Linie {} entfernt", id),
        }
    }

    fn update_background_image(&mut self, image: &BackgroundImage) {
        log::debug!(
            "Hintergrund {}: sichtbar={} bild={:?}",
            image.widget_type,
            image.visible,
            image.image_ref
        );
    }

    fn set_control_value(&mut self, label: ControlLabel, value: &ControlValue) {
        log::debug!("Bedienelement {} = {:?}", label, value);
    }

    fn set_control_enabled(&mut self, label: ControlLabel, enabled: bool) {
        log::debug!("Bedienelement {} bedienbar: {}", label, enabled);
    }
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!(
        "Shipyard Line-Plan Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);
    let store = FileStore::new(options.resolved_storage_dir());

    let mut state = AppState::with_store(options, Box::new(store));
    let mut controller = AppController::new();
    controller.add_view(&state, Box::new(LoggingView));

    controller.handle_intent(&mut state, AppIntent::StartupRestoreRequested)?;

    log::info!(
        "{} Linien, {} Commands in der History (Undo: {}, Redo: {})",
        state.line_count(),
        state.history.len(),
        state.can_undo(),
        state.can_redo()
    );
    let names = controller.saved_buffer_names(&state);
    if !names.is_empty() {
        log::info!("Gespeicherte Buffer: {}", names.join(", "));
    }
    if let Some(warning) = &state.last_warning {
        log::warn!("Letzte Warnung: {}", warning);
    }

    Ok(())
}
