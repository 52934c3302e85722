//! Application State: zentrale Datenhaltung.

use super::controls::{ControlLabel, Controls};
use super::gesture::Gesture;
use super::history::CommandHistory;
use super::sequence::SequenceGenerator;
use super::{CommandLog, EditorWarning};
use crate::core::{EditEvent, LinePlan};
use crate::shared::{EditorOptions, ViewUpdate};
use crate::storage::{buffers, BufferStore, MemoryStore};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Das Model (Linien, Selektion, Hintergrundbilder)
    pub model: LinePlan,
    /// Undo/Redo-History (Command-basiert)
    pub history: CommandHistory,
    /// Zustand der Bedienelemente
    pub controls: Controls,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Externer Speicher für Startup- und benannte Buffer
    pub store: Box<dyn BufferStore>,
    /// Gesten-ID-Generator
    pub sequences: SequenceGenerator,
    /// Laufende Zeige-Geste
    pub gesture: Option<Gesture>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Zuletzt gemeldete Warnung
    pub last_warning: Option<EditorWarning>,
    notifications: Vec<ViewUpdate>,
}

impl AppState {
    /// Erstellt einen leeren App-State mit flüchtigem Speicher.
    pub fn new() -> Self {
        Self::with_store(EditorOptions::default(), Box::new(MemoryStore::new()))
    }

    /// Erstellt einen leeren App-State mit gegebenem Speicher.
    pub fn with_store(options: EditorOptions, store: Box<dyn BufferStore>) -> Self {
        Self {
            model: LinePlan::new(),
            history: CommandHistory::new(),
            controls: Controls::default(),
            options,
            store,
            sequences: SequenceGenerator::new(),
            gesture: None,
            command_log: CommandLog::new(),
            last_warning: None,
            notifications: Vec::new(),
        }
    }

    /// Gibt die Anzahl der Linien zurück (für UI-Anzeige)
    pub fn line_count(&self) -> usize {
        self.model.line_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Wendet Events auf das Model an und reiht die Änderungen für die Views ein.
    pub fn apply_events(&mut self, events: &[EditEvent]) {
        for event in events {
            self.model.apply(event);
        }
        self.flush_model_changes();
    }

    /// Zeichnet Events auf und persistiert den Startup-Buffer.
    pub fn record(&mut self, events: Vec<EditEvent>) -> anyhow::Result<()> {
        if self.history.record(events) {
            self.persist_startup()?;
            self.notify_history();
        }
        Ok(())
    }

    /// Schreibt die komplette History als Startup-Buffer.
    pub fn persist_startup(&mut self) -> anyhow::Result<()> {
        buffers::save_startup(self.store.as_mut(), self.history.commands())
    }

    /// Übernimmt angefallene Model-Änderungen in die Benachrichtigungs-Queue.
    pub fn flush_model_changes(&mut self) {
        let changes = self.model.take_changes();
        self.notifications
            .extend(changes.into_iter().map(ViewUpdate::from));
    }

    /// Reiht eine Benachrichtigung ein.
    pub fn notify(&mut self, update: ViewUpdate) {
        self.notifications.push(update);
    }

    /// Meldet die Bedienbarkeit von Undo/Redo.
    pub fn notify_history(&mut self) {
        let (undo, redo) = (self.can_undo(), self.can_redo());
        self.notify(ViewUpdate::ControlEnabled {
            label: ControlLabel::Undo,
            enabled: undo,
        });
        self.notify(ViewUpdate::ControlEnabled {
            label: ControlLabel::Redo,
            enabled: redo,
        });
    }

    /// Entnimmt alle eingereihten Benachrichtigungen.
    pub fn take_notifications(&mut self) -> Vec<ViewUpdate> {
        std::mem::take(&mut self.notifications)
    }

    /// Meldet eine nicht-fatale Warnung (Log + `last_warning`).
    pub fn warn(&mut self, warning: EditorWarning) {
        log::warn!("{}", warning);
        self.last_warning = Some(warning);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
