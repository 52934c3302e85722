//! Schlüssel/Wert-Speicher für serialisierte Buffer.

use anyhow::Context;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Externer Speicher für Command-Buffer (ein String pro Schlüssel).
pub trait BufferStore {
    /// Liest den Wert eines Schlüssels; `None`, wenn er nicht existiert.
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Schreibt (oder überschreibt) den Wert eines Schlüssels.
    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Flüchtiger Speicher (Tests, Sitzungen ohne Dateisystem).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BufferStore for MemoryStore {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Speicher mit einer `<key>.json`-Datei pro Schlüssel.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Erstellt einen Speicher im angegebenen Verzeichnis (wird beim ersten Schreiben angelegt).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Verzeichnis des Speichers.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BufferStore for FileStore {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Lesen von {} fehlgeschlagen", path.display())),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Verzeichnis {} nicht anlegbar", self.dir.display()))?;
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Schreiben nach {} fehlgeschlagen", path.display()))?;
        log::debug!("Buffer '{}' geschrieben ({} Bytes)", key, value.len());
        Ok(())
    }
}
