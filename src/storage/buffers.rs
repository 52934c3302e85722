//! Layout der persistierten Buffer.
//!
//! - `shipyard_startup_buffer`: JSON-Array von Commands (aktive History)
//! - `shipyard_saved_buffers`: JSON-Objekt Name → Array von Commands,
//!   Schlüsselreihenfolge = Einfügereihenfolge

use super::BufferStore;
use crate::app::history::Command;
use anyhow::Context;
use indexmap::IndexMap;

/// Schlüssel des automatisch wiederhergestellten Buffers.
pub const STARTUP_BUFFER_KEY: &str = "shipyard_startup_buffer";
/// Schlüssel der benannten Buffer.
pub const SAVED_BUFFERS_KEY: &str = "shipyard_saved_buffers";

/// Benannte Buffer in Einfügereihenfolge.
pub type SavedBuffers = IndexMap<String, Vec<Command>>;

/// Liest den Startup-Buffer. Fehlt er, ist die History leer.
pub fn load_startup(store: &dyn BufferStore) -> anyhow::Result<Vec<Command>> {
    match store.read(STARTUP_BUFFER_KEY)? {
        Some(json) => serde_json::from_str(&json)
            .with_context(|| format!("'{STARTUP_BUFFER_KEY}' ist kein gültiger Command-Buffer")),
        None => Ok(Vec::new()),
    }
}

/// Schreibt den Startup-Buffer.
pub fn save_startup(store: &mut dyn BufferStore, commands: &[Command]) -> anyhow::Result<()> {
    let json = serde_json::to_string(commands)?;
    store.write(STARTUP_BUFFER_KEY, &json)
}

/// Liest alle benannten Buffer.
pub fn load_saved(store: &dyn BufferStore) -> anyhow::Result<SavedBuffers> {
    match store.read(SAVED_BUFFERS_KEY)? {
        Some(json) => serde_json::from_str(&json)
            .with_context(|| format!("'{SAVED_BUFFERS_KEY}' ist keine gültige Buffer-Sammlung")),
        None => Ok(SavedBuffers::new()),
    }
}

fn write_saved(store: &mut dyn BufferStore, buffers: &SavedBuffers) -> anyhow::Result<()> {
    let json = serde_json::to_string(buffers)?;
    store.write(SAVED_BUFFERS_KEY, &json)
}

/// Speichert Commands unter einem Namen. Ein vorhandener Name behält seine Position.
pub fn save_named(
    store: &mut dyn BufferStore,
    name: &str,
    commands: &[Command],
) -> anyhow::Result<()> {
    let mut buffers = load_saved(store)?;
    buffers.insert(name.to_string(), commands.to_vec());
    write_saved(store, &buffers)
}

/// Entfernt einen benannten Buffer. Gibt `false` zurück, wenn es ihn nicht gab.
pub fn delete_named(store: &mut dyn BufferStore, name: &str) -> anyhow::Result<bool> {
    let mut buffers = load_saved(store)?;
    if buffers.shift_remove(name).is_none() {
        return Ok(false);
    }
    write_saved(store, &buffers)?;
    Ok(true)
}

/// Namen aller gespeicherten Buffer in Einfügereihenfolge.
pub fn list_names(store: &dyn BufferStore) -> anyhow::Result<Vec<String>> {
    Ok(load_saved(store)?.into_keys().collect())
}

/// Liest einen benannten Buffer.
pub fn load_named(store: &dyn BufferStore, name: &str) -> anyhow::Result<Option<Vec<Command>>> {
    Ok(load_saved(store)?.shift_remove(name))
}
