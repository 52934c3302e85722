//! Shipyard Line-Plan Editor Library.
//! Command-basierte Editier-Engine für Spant- und Längsrisse,
//! als Library exportiert für Views, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod storage;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, Command, CommandHistory, ControlLabel,
    ControlValue, EditMode, EditorWarning,
};
pub use core::{BackgroundImage, EditEvent, Line, LineEnd, LinePlan, LinePos, LineUpdate, Point};
pub use shared::{EditorOptions, EditorView, RenderScene, ViewUpdate};
pub use storage::{BufferStore, FileStore, MemoryStore};
