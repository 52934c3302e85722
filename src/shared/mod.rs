//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und den Views geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
pub mod view;

pub use options::EditorOptions;
pub use options::{CENTRE_SNAP_DISTANCE, SNAP_DISTANCE};
pub use render_scene::{RenderLine, RenderScene};
pub use view::{EditorView, ViewUpdate};
