//! Handler für Undo/Redo-Operationen.
//!
//! Undo/Redo verändert nur den History-Zeiger; der Startup-Buffer bleibt
//! unverändert, bis der nächste Edit aufgezeichnet wird.

use crate::app::history::HistoryError;
use crate::app::{AppState, EditorWarning};

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    match state.history.step_back() {
        Ok(command) => {
            let events = command.inverse_events();
            state.apply_events(&events);
            state.notify_history();
            log::info!("Undo ausgeführt");
        }
        Err(err) => state.warn(warning_for(err)),
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    match state.history.step_forward() {
        Ok(command) => {
            let events = command.events.clone();
            state.apply_events(&events);
            state.notify_history();
            log::info!("Redo ausgeführt");
        }
        Err(err) => state.warn(warning_for(err)),
    }
}

fn warning_for(err: HistoryError) -> EditorWarning {
    match err {
        HistoryError::UndoPastStart => EditorWarning::UndoPastStart,
        HistoryError::RedoPastEnd { index } => EditorWarning::RedoPastEnd { index },
    }
}
