//! Command-History: lineares Undo/Redo über Gruppen von Model-Events.
//!
//! Einträge mit Index `< pointer` sind angewendet, Einträge `>= pointer`
//! stehen für Redo bereit. Ein neuer Eintrag nach einem Undo verwirft alles
//! ab `pointer`.

use crate::core::EditEvent;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ein persistierter History-Eintrag: alle Events einer Geste.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Command {
    /// Events in Anwendungsreihenfolge
    pub events: Vec<EditEvent>,
}

impl Command {
    /// Erstellt einen Command aus Events.
    pub fn new(events: Vec<EditEvent>) -> Self {
        Self { events }
    }

    /// Gesten-ID des ersten Events.
    pub fn sequence(&self) -> Option<&str> {
        self.events.first().and_then(EditEvent::sequence)
    }

    /// Inverse Events in umgekehrter Reihenfolge.
    pub fn inverse_events(&self) -> Vec<EditEvent> {
        self.events.iter().rev().filter_map(EditEvent::inverse).collect()
    }
}

/// Fehler bei History-Navigation über die Grenzen hinaus.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    /// Zeiger steht bereits auf 0.
    #[error("nothing to undo")]
    UndoPastStart,
    /// Zeiger steht bereits am Ende.
    #[error("nothing to redo at index {index}")]
    RedoPastEnd {
        /// Zeigerstand beim Versuch
        index: usize,
    },
}

/// Geordnete Liste von Commands mit Zeiger.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    commands: Vec<Command>,
    pointer: usize,
}

impl CommandHistory {
    /// Erstellt eine leere History.
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt eine geladene Command-Liste. Der Zeiger steht danach auf 0.
    pub fn replace(&mut self, commands: Vec<Command>) {
        self.commands = commands;
        self.pointer = 0;
    }

    /// Leert die History.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.pointer = 0;
    }

    /// Zeichnet loggbare Events auf.
    ///
    /// Teilen die Events die Gesten-ID des Eintrags vor dem Zeiger, werden sie
    /// in diesen Eintrag gefaltet; sonst wird ab dem Zeiger abgeschnitten und
    /// ein neuer Eintrag angehängt. Gibt `true` zurück, wenn sich die History
    /// geändert hat.
    pub fn record(&mut self, events: Vec<EditEvent>) -> bool {
        let events: Vec<EditEvent> = events.into_iter().filter(EditEvent::is_loggable).collect();
        let Some(sequence) = events.first().and_then(EditEvent::sequence) else {
            return false;
        };

        self.commands.truncate(self.pointer);
        if let Some(previous) = self.commands.last_mut() {
            if previous.sequence() == Some(sequence) {
                for event in events {
                    let absorbed = previous.events.iter_mut().any(|e| e.absorb(&event));
                    if !absorbed {
                        previous.events.push(event);
                    }
                }
                return true;
            }
        }

        self.commands.push(Command::new(events));
        self.pointer += 1;
        true
    }

    /// Einen Schritt zurück; liefert den Command, dessen Inverse anzuwenden ist.
    pub fn step_back(&mut self) -> Result<&Command, HistoryError> {
        if self.pointer == 0 {
            return Err(HistoryError::UndoPastStart);
        }
        self.pointer -= 1;
        Ok(&self.commands[self.pointer])
    }

    /// Einen Schritt vor; liefert den erneut anzuwendenden Command.
    pub fn step_forward(&mut self) -> Result<&Command, HistoryError> {
        if self.pointer >= self.commands.len() {
            return Err(HistoryError::RedoPastEnd {
                index: self.pointer,
            });
        }
        self.pointer += 1;
        Ok(&self.commands[self.pointer - 1])
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.pointer < self.commands.len()
    }

    /// Aktueller Zeiger.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Anzahl der Commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Alle Commands (auch die für Redo vorgehaltenen).
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}
