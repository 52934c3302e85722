//! Persistenz der Command-History in einem externen Schlüssel/Wert-Speicher.

pub mod buffers;
pub mod store;

pub use buffers::{SAVED_BUFFERS_KEY, STARTUP_BUFFER_KEY};
pub use store::{BufferStore, FileStore, MemoryStore};
