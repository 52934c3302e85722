//! Zentrale Konfiguration für den Shipyard-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Einrasten ───────────────────────────────────────────────────────

/// Einrast-Distanz (Manhattan, Rumpf-Einheiten) zu Endpunkten benachbarter Linien.
pub const SNAP_DISTANCE: f64 = 10.0;
/// Gespiegelte Linien: Endpunkte mit `|x|` unter diesem Wert landen auf der Mittellinie.
pub const CENTRE_SNAP_DISTANCE: f64 = 10.0;

// ── Persistenz ──────────────────────────────────────────────────────

/// Standard-Verzeichnis für Command-Buffer (relativ zur Binary).
pub const STORAGE_DIR: &str = "shipyard_buffers";
/// Dateiname der Optionen-Datei.
pub const OPTIONS_FILE_NAME: &str = "shipyard_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `shipyard_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Einrast-Distanz zu Nachbar-Endpunkten
    #[serde(default = "default_snap_distance")]
    pub snap_distance: f64,
    /// Mittellinien-Einrastdistanz für gespiegelte Linien
    #[serde(default = "default_centre_snap_distance")]
    pub centre_snap_distance: f64,
    /// Verzeichnis für gespeicherte Buffer (relativ zur Binary oder absolut)
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            snap_distance: SNAP_DISTANCE,
            centre_snap_distance: CENTRE_SNAP_DISTANCE,
            storage_dir: PathBuf::from(STORAGE_DIR),
        }
    }
}

fn default_snap_distance() -> f64 {
    SNAP_DISTANCE
}

fn default_centre_snap_distance() -> f64 {
    CENTRE_SNAP_DISTANCE
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(STORAGE_DIR)
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        binary_dir().join(OPTIONS_FILE_NAME)
    }

    /// Buffer-Verzeichnis; relative Angaben beziehen sich auf das Binary-Verzeichnis.
    pub fn resolved_storage_dir(&self) -> PathBuf {
        if self.storage_dir.is_absolute() {
            self.storage_dir.clone()
        } else {
            binary_dir().join(&self.storage_dir)
        }
    }
}

fn binary_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
