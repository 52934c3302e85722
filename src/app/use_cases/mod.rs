//! Use-Cases: Logik, die Handler auf dem AppState ausführen.

pub mod replay;
pub mod snap;
