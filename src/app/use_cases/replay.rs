//! Vollständiger Neuaufbau des Models aus einer Command-Liste.

use crate::app::history::Command;
use crate::app::AppState;
use anyhow::Context;

/// Baut den Zustand aus `commands` neu auf.
///
/// Alle bisherigen Linien werden den Views als gelöscht, alle Hintergrundbilder
/// als ausgeblendet gemeldet. Danach wird jeder Command vorwärts abgespielt;
/// der Gesten-Zähler springt hinter alle wiederhergestellten IDs.
///
/// Jedes Event wird vor dem Anwenden gegen das Model geprüft. Ist eines nicht
/// anwendbar, endet der Aufbau mit leerem Model und leerer History.
pub fn rebuild(state: &mut AppState, commands: Vec<Command>) -> anyhow::Result<()> {
    clear(state, commands);

    let replayed = replay_all(state);
    if replayed.is_err() {
        clear(state, Vec::new());
    }

    state.notify_history();
    log::info!(
        "{} Commands abgespielt, {} Linien",
        state.history.len(),
        state.line_count()
    );
    replayed
}

fn clear(state: &mut AppState, commands: Vec<Command>) {
    state.model.reset();
    state.flush_model_changes();
    state.gesture = None;
    state.sequences.reset();
    state.history.replace(commands);
}

fn replay_all(state: &mut AppState) -> anyhow::Result<()> {
    let mut index = 0;
    while let Ok(command) = state.history.step_forward() {
        let events = command.events.clone();
        for event in &events {
            state
                .model
                .check(event)
                .with_context(|| format!("Command {index} nicht anwendbar"))?;
            if let Some(sequence) = event.sequence() {
                state.sequences.sync(sequence);
            }
            if let Some(line_id) = event.line_id() {
                state.sequences.sync(line_id);
            }
            state.apply_events(std::slice::from_ref(event));
        }
        index += 1;
    }
    Ok(())
}
