//! Core-Domänentypen: Geometrie, Linien, Hintergrundbilder, Model-Events und der Line-Plan.

pub mod background_image;
pub mod edit_event;
pub mod geometry;
pub mod line;
/// Das Model: autoritativer Zustand des Line-Plans
pub mod line_plan;

pub use background_image::{BackgroundImage, CROSS_SECTION, LENGTH_SECTION};
pub use edit_event::{
    BackgroundImageEvent, EditEvent, LineDelete, LineHighlight, LineMirror, LineModify,
    LineModifyAction, LineRestore, LineSelect,
};
pub use geometry::{
    mirror_point, planar_manhattan, planar_manhattan_mirrored, LinePos, Point, TooFewPoints,
};
pub use line::{Line, LineEnd, LineUpdate};
pub use line_plan::{InvalidEvent, LinePlan, ModelChange, NearestPoint};
