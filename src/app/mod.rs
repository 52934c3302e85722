//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod controls;
pub mod events;
pub mod gesture;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod pointer;
pub mod render_scene;
pub mod sequence;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Model, History, Bedienelemente).
pub mod state;
pub mod use_cases;
pub mod warning;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use controls::{ControlLabel, ControlValue, Controls, EditMode};
pub use events::{AppCommand, AppIntent};
pub use history::{Command, CommandHistory};
pub use render_scene::build as build_render_scene;
pub use state::AppState;
pub use warning::EditorWarning;
