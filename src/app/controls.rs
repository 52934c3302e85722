//! Zustand der Bedienelemente (Modus-Buttons, Datei-Operationen, Hintergrundbild-Schalter).
//!
//! Die Modus-Exklusivität (genau einer von Select/Modify/Hintergrundbild aktiv)
//! wird nicht über ein eigenes Modus-Enum erzwungen, sondern über `clear`-Listen
//! und `prevent_unclick`. [`Controls::press`] ist ein reiner Reducer: er liefert
//! einen neuen Zustand plus die Liste geänderter Werte.

use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Alle bekannten Bedienelemente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlLabel {
    /// Modus: Linien selektieren
    SelectLine,
    /// Modus: Linien zeichnen und verändern
    ModifyLine,
    /// Modus: Hintergrundbild verschieben
    BackgroundImage,
    /// Alle Spant-Ebenen anzeigen
    AllLayers,
    /// Aktuell gewählter Spant (z)
    SelectedRib,
    /// Auswahl-Cursor zurücksetzen
    ClearSelectCursor,
    /// Datei-Menü
    FileOps,
    /// Buffer speichern
    FileOpsSave,
    /// Buffer laden
    FileOpsLoad,
    /// Buffer löschen
    FileOpsDelete,
    /// Neuer leerer Buffer
    FileOpsNew,
    /// Hintergrundbild Spantriss ein/aus
    BackgroundImageShowCross,
    /// Hintergrundbild Längsriss ein/aus
    BackgroundImageShowLength,
    /// Bildreferenz Spantriss
    BackgroundImageUrlCross,
    /// Bildreferenz Längsriss
    BackgroundImageUrlLength,
    /// Push-Button Undo
    Undo,
    /// Push-Button Redo
    Redo,
    /// Push-Button: Selektion löschen
    Delete,
    /// Push-Button: Selektion spiegeln
    Mirror,
}

impl ControlLabel {
    /// Bezeichnung, wie sie Views verwenden.
    pub fn as_str(self) -> &'static str {
        match self {
            ControlLabel::SelectLine => "selectLine",
            ControlLabel::ModifyLine => "modifyLine",
            ControlLabel::BackgroundImage => "backgroundImage",
            ControlLabel::AllLayers => "allLayers",
            ControlLabel::SelectedRib => "selectedRib",
            ControlLabel::ClearSelectCursor => "clearSelectCursor",
            ControlLabel::FileOps => "fileOps",
            ControlLabel::FileOpsSave => "fileOpsSave",
            ControlLabel::FileOpsLoad => "fileOpsLoad",
            ControlLabel::FileOpsDelete => "fileOpsDelete",
            ControlLabel::FileOpsNew => "fileOpsNew",
            ControlLabel::BackgroundImageShowCross => "backgroundImageShowCross",
            ControlLabel::BackgroundImageShowLength => "backgroundImageShowLength",
            ControlLabel::BackgroundImageUrlCross => "backgroundImageUrlCross",
            ControlLabel::BackgroundImageUrlLength => "backgroundImageUrlLength",
            ControlLabel::Undo => "undo",
            ControlLabel::Redo => "redo",
            ControlLabel::Delete => "delete",
            ControlLabel::Mirror => "mirror",
        }
    }
}

impl fmt::Display for ControlLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = match s {
            "selectLine" | "select" => ControlLabel::SelectLine,
            "modifyLine" | "modify" => ControlLabel::ModifyLine,
            "backgroundImage" => ControlLabel::BackgroundImage,
            "allLayers" => ControlLabel::AllLayers,
            "selectedRib" | "selected_rib" => ControlLabel::SelectedRib,
            "clearSelectCursor" => ControlLabel::ClearSelectCursor,
            "fileOps" => ControlLabel::FileOps,
            "fileOpsSave" => ControlLabel::FileOpsSave,
            "fileOpsLoad" => ControlLabel::FileOpsLoad,
            "fileOpsDelete" => ControlLabel::FileOpsDelete,
            "fileOpsNew" => ControlLabel::FileOpsNew,
            "backgroundImageShowCross" => ControlLabel::BackgroundImageShowCross,
            "backgroundImageShowLength" => ControlLabel::BackgroundImageShowLength,
            "backgroundImageUrlCross" => ControlLabel::BackgroundImageUrlCross,
            "backgroundImageUrlLength" => ControlLabel::BackgroundImageUrlLength,
            "undo" => ControlLabel::Undo,
            "redo" => ControlLabel::Redo,
            "delete" => ControlLabel::Delete,
            "mirror" => ControlLabel::Mirror,
            other => return Err(other.to_string()),
        };
        Ok(label)
    }
}

/// Wert eines Bedienelements.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    /// Schalter
    Bool(bool),
    /// Zahl (z.B. gewählter Spant)
    Number(f64),
    /// Text (z.B. Buffer-Name, Bild-URL)
    Text(String),
}

impl ControlValue {
    /// Wahrheitswert im Sinne eines Schalters.
    pub fn is_truthy(&self) -> bool {
        match self {
            ControlValue::Bool(b) => *b,
            ControlValue::Number(n) => *n != 0.0,
            ControlValue::Text(t) => !t.is_empty(),
        }
    }

    /// Textwert, falls vorhanden.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ControlValue::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Zahlenwert, falls vorhanden.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ControlValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Zustand eines zustandsbehafteten Bedienelements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControlState {
    /// Aktueller Wert (`None` = kein eigener Wert)
    pub value: Option<ControlValue>,
    /// Beim Drücken auf `false` gesetzte Elemente
    pub clear: Vec<ControlLabel>,
    /// Aktives Element ignoriert erneutes Drücken
    pub prevent_unclick: bool,
}

impl ControlState {
    fn new(value: Option<ControlValue>, clear: &[ControlLabel], prevent_unclick: bool) -> Self {
        Self {
            value,
            clear: clear.to_vec(),
            prevent_unclick,
        }
    }
}

/// Aktiver Bearbeitungsmodus, abgeleitet aus den Modus-Buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Linien selektieren
    SelectLine,
    /// Linien zeichnen/verändern
    ModifyLine,
    /// Hintergrundbild verschieben
    BackgroundImage,
    /// Kein Modus aktiv (z.B. Datei-Menü offen)
    None,
}

/// Ergebnis eines Button-Drucks.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPress {
    /// Neuer Gesamtzustand
    pub controls: Controls,
    /// Effektiver Wert des gedrückten Elements
    pub value: Option<ControlValue>,
    /// Geänderte Werte in Meldereihenfolge (gedrücktes Element zuerst)
    pub changed: Vec<(ControlLabel, ControlValue)>,
}

/// Unveränderliche Map Label → Zustand.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    states: IndexMap<ControlLabel, ControlState>,
}

impl Default for Controls {
    fn default() -> Self {
        use ControlLabel as L;
        let modes = [L::SelectLine, L::ModifyLine, L::BackgroundImage];
        let others = |own: ControlLabel| -> Vec<ControlLabel> {
            modes
                .iter()
                .copied()
                .filter(|l| *l != own)
                .chain([L::FileOps])
                .collect()
        };
        let mut states = IndexMap::new();
        states.insert(
            L::SelectLine,
            ControlState::new(Some(ControlValue::Bool(false)), &others(L::SelectLine), true),
        );
        states.insert(
            L::ModifyLine,
            ControlState::new(Some(ControlValue::Bool(true)), &others(L::ModifyLine), true),
        );
        states.insert(
            L::BackgroundImage,
            ControlState::new(
                Some(ControlValue::Bool(false)),
                &others(L::BackgroundImage),
                true,
            ),
        );
        states.insert(
            L::AllLayers,
            ControlState::new(Some(ControlValue::Bool(false)), &[L::FileOps], false),
        );
        states.insert(L::SelectedRib, ControlState::new(None, &[L::FileOps], false));
        states.insert(
            L::ClearSelectCursor,
            ControlState::new(Some(ControlValue::Bool(false)), &[L::FileOps], false),
        );
        states.insert(
            L::FileOps,
            ControlState::new(Some(ControlValue::Number(0.0)), &[], false),
        );
        for label in [
            L::FileOpsSave,
            L::FileOpsLoad,
            L::FileOpsDelete,
            L::FileOpsNew,
            L::BackgroundImageShowCross,
            L::BackgroundImageShowLength,
            L::BackgroundImageUrlCross,
            L::BackgroundImageUrlLength,
        ] {
            states.insert(label, ControlState::default());
        }
        Self { states }
    }
}

impl Controls {
    /// Zustand eines Elements (`None` für reine Push-Buttons).
    pub fn get(&self, label: ControlLabel) -> Option<&ControlState> {
        self.states.get(&label)
    }

    /// Aktueller Wert eines Elements.
    pub fn value(&self, label: ControlLabel) -> Option<&ControlValue> {
        self.states.get(&label).and_then(|s| s.value.as_ref())
    }

    /// Gibt `true` zurück, wenn das Element aktiv ist.
    pub fn is_active(&self, label: ControlLabel) -> bool {
        self.value(label).is_some_and(ControlValue::is_truthy)
    }

    /// Aktiver Bearbeitungsmodus.
    pub fn active_mode(&self) -> EditMode {
        if self.is_active(ControlLabel::ModifyLine) {
            EditMode::ModifyLine
        } else if self.is_active(ControlLabel::SelectLine) {
            EditMode::SelectLine
        } else if self.is_active(ControlLabel::BackgroundImage) {
            EditMode::BackgroundImage
        } else {
            EditMode::None
        }
    }

    /// Alle Elemente mit eigenem Wert (für die Initialisierung neuer Views).
    pub fn values(&self) -> impl Iterator<Item = (ControlLabel, &ControlValue)> {
        self.states
            .iter()
            .filter_map(|(label, state)| state.value.as_ref().map(|v| (*label, v)))
    }

    /// Drückt ein Element.
    ///
    /// - Push-Buttons ohne Zustand: Wert wird durchgereicht, nichts ändert sich.
    /// - Aktives `prevent_unclick`-Element: No-op.
    /// - Ohne übergebenen Wert wird ein vorhandener Wert umgeschaltet.
    /// - Mit Wert wird dieser übernommen; alle `clear`-Elemente werden `false`.
    pub fn press(&self, label: ControlLabel, value: Option<ControlValue>) -> ControlPress {
        let unchanged = |value| ControlPress {
            controls: self.clone(),
            value,
            changed: Vec::new(),
        };

        let Some(state) = self.states.get(&label) else {
            return unchanged(value);
        };
        if state.prevent_unclick && state.value.as_ref().is_some_and(ControlValue::is_truthy) {
            log::debug!("'{}' ist bereits aktiv", label);
            return unchanged(value);
        }

        let new_value = match (value, &state.value) {
            (Some(v), _) => v,
            (None, Some(current)) => ControlValue::Bool(!current.is_truthy()),
            (None, None) => return unchanged(None),
        };

        let mut controls = self.clone();
        let mut changed = vec![(label, new_value.clone())];
        if let Some(entry) = controls.states.get_mut(&label) {
            entry.value = Some(new_value.clone());
        }
        for other in &state.clear {
            if let Some(entry) = controls.states.get_mut(other) {
                entry.value = Some(ControlValue::Bool(false));
            }
            changed.push((*other, ControlValue::Bool(false)));
        }

        ControlPress {
            controls,
            value: Some(new_value),
            changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modify_is_the_default_mode() {
        let controls = Controls::default();
        assert_eq!(controls.active_mode(), EditMode::ModifyLine);
    }

    #[test]
    fn select_clears_modify() {
        let controls = Controls::default();
        let press = controls.press(ControlLabel::SelectLine, None);

        assert!(press.controls.is_active(ControlLabel::SelectLine));
        assert!(!press.controls.is_active(ControlLabel::ModifyLine));
        assert_eq!(press.controls.active_mode(), EditMode::SelectLine);
        assert_eq!(press.changed[0], (ControlLabel::SelectLine, ControlValue::Bool(true)));
        assert!(press
            .changed
            .contains(&(ControlLabel::ModifyLine, ControlValue::Bool(false))));
        // Ausgangszustand unverändert
        assert!(controls.is_active(ControlLabel::ModifyLine));
    }

    #[test]
    fn pressing_active_mode_again_is_a_noop() {
        let controls = Controls::default()
            .press(ControlLabel::SelectLine, None)
            .controls;
        let again = controls.press(ControlLabel::SelectLine, None);
        assert!(again.changed.is_empty());
        assert_eq!(again.controls, controls);
    }

    #[test]
    fn push_button_passes_value_through() {
        let controls = Controls::default();
        let press = controls.press(ControlLabel::Undo, None);
        assert!(press.changed.is_empty());
        assert_eq!(press.value, None);
    }

    #[test]
    fn text_value_is_stored_without_toggling() {
        let press = Controls::default().press(
            ControlLabel::FileOpsSave,
            Some(ControlValue::Text("hull_a".into())),
        );
        assert_eq!(press.value, Some(ControlValue::Text("hull_a".into())));
        assert_eq!(press.changed.len(), 1);
    }

    #[test]
    fn stateless_control_without_value_does_nothing() {
        let press = Controls::default().press(ControlLabel::FileOpsNew, None);
        assert!(press.changed.is_empty());
        assert_eq!(press.value, None);
    }

    #[test]
    fn rib_selection_closes_file_menu() {
        let press =
            Controls::default().press(ControlLabel::SelectedRib, Some(ControlValue::Number(4.0)));
        assert_eq!(
            press.controls.value(ControlLabel::SelectedRib),
            Some(&ControlValue::Number(4.0))
        );
        assert_eq!(
            press.controls.value(ControlLabel::FileOps),
            Some(&ControlValue::Bool(false))
        );
    }

    #[test]
    fn labels_round_trip_through_strings() {
        for label in [
            ControlLabel::SelectLine,
            ControlLabel::BackgroundImageUrlLength,
            ControlLabel::Mirror,
        ] {
            assert_eq!(label.as_str().parse::<ControlLabel>(), Ok(label));
        }
        assert_eq!("select".parse::<ControlLabel>(), Ok(ControlLabel::SelectLine));
        assert!("bogus".parse::<ControlLabel>().is_err());
    }
}
