//! Handler für benannte Buffer und den Startup-Buffer.

use crate::app::use_cases::replay;
use crate::app::{AppState, EditorWarning};
use crate::storage::buffers::{self, SAVED_BUFFERS_KEY, STARTUP_BUFFER_KEY};

/// Speichert die aktuelle History unter `name`.
pub fn save(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    let commands = state.history.commands().to_vec();
    buffers::save_named(state.store.as_mut(), name, &commands)?;
    log::info!("Buffer '{}' gespeichert ({} Commands)", name, commands.len());
    Ok(())
}

/// Lädt einen benannten Buffer, macht ihn zum Startup-Buffer und baut neu auf.
pub fn load(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    let commands = match buffers::load_named(state.store.as_ref(), name) {
        Ok(Some(commands)) => commands,
        Ok(None) => {
            state.warn(EditorWarning::UnknownBuffer(name.to_string()));
            return Ok(());
        }
        Err(err) => {
            state.warn(corrupt(SAVED_BUFFERS_KEY, &err));
            return Ok(());
        }
    };

    if let Err(err) = replay::rebuild(state, commands) {
        state.warn(corrupt(SAVED_BUFFERS_KEY, &err));
        // Der bisherige Startup-Buffer bleibt gültig
        restore_startup(state);
        return Ok(());
    }
    buffers::save_startup(state.store.as_mut(), state.history.commands())?;
    log::info!("Buffer '{}' geladen", name);
    Ok(())
}

/// Entfernt einen benannten Buffer.
pub fn delete(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    match buffers::delete_named(state.store.as_mut(), name) {
        Ok(true) => log::info!("Buffer '{}' gelöscht", name),
        Ok(false) => state.warn(EditorWarning::UnknownBuffer(name.to_string())),
        Err(err) => state.warn(corrupt(SAVED_BUFFERS_KEY, &err)),
    }
    Ok(())
}

/// Beginnt mit leerer History und leerem Startup-Buffer.
pub fn new_buffer(state: &mut AppState) -> anyhow::Result<()> {
    buffers::save_startup(state.store.as_mut(), &[])?;
    replay::rebuild(state, Vec::new())
}

/// Spielt den Startup-Buffer ab. Unlesbare oder nicht anwendbare Daten
/// ergeben eine leere History.
pub fn restore_startup(state: &mut AppState) {
    let commands = match buffers::load_startup(state.store.as_ref()) {
        Ok(commands) => commands,
        Err(err) => {
            state.warn(corrupt(STARTUP_BUFFER_KEY, &err));
            Vec::new()
        }
    };
    if let Err(err) = replay::rebuild(state, commands) {
        state.warn(corrupt(STARTUP_BUFFER_KEY, &err));
    }
}

/// Namen aller gespeicherten Buffer; unlesbare Daten zählen als leer.
pub fn list_names(state: &AppState) -> Vec<String> {
    buffers::list_names(state.store.as_ref()).unwrap_or_else(|err| {
        log::warn!("Gespeicherte Buffer nicht lesbar: {:#}", err);
        Vec::new()
    })
}

fn corrupt(key: &str, err: &anyhow::Error) -> EditorWarning {
    EditorWarning::StorageCorrupt {
        key: key.to_string(),
        reason: format!("{err:#}"),
    }
}
