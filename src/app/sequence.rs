//! Erzeugung von Gesten- und Linien-IDs.
//!
//! Gesten-IDs haben die Form `sequence_<n>`, neue Linien erben den Suffix
//! (`drawnLine_<n>`). Nach dem Wiederherstellen einer History wird der Zähler
//! hinter alle bereits vergebenen Nummern gesetzt.

use regex::Regex;
use std::sync::OnceLock;

/// Präfix aller erzeugten Gesten-IDs.
pub const SEQUENCE_PREFIX: &str = "sequence_";
/// Präfix gezeichneter Linien.
pub const LINE_PREFIX: &str = "drawnLine_";

fn numbered_id_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:sequence|drawnLine)_(?:[A-Za-z-]+_)?(\d+)$").ok())
        .as_ref()
}

/// Zähler für Gesten-IDs, gehört dem `AppState`.
#[derive(Debug, Clone, Default)]
pub struct SequenceGenerator {
    counter: u64,
}

impl SequenceGenerator {
    /// Erstellt einen Generator, der bei 1 beginnt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Vergibt die nächste Gesten-ID.
    pub fn next_sequence(&mut self) -> String {
        self.counter += 1;
        format!("{SEQUENCE_PREFIX}{}", self.counter)
    }

    /// Letzter vergebener Zählerstand.
    pub fn current(&self) -> u64 {
        self.counter
    }

    /// Setzt den Zähler hinter die Nummer einer bereits existierenden ID.
    pub fn sync(&mut self, id: &str) {
        if let Some(n) = numbered_id_regex()
            .and_then(|re| re.captures(id))
            .and_then(|c| c[1].parse::<u64>().ok())
        {
            self.counter = self.counter.max(n);
        }
    }

    /// Setzt den Zähler zurück.
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

/// Linien-ID für eine neue Linie aus ihrer Gesten-ID.
///
/// `None`, wenn die Gesten-ID nicht dem erzeugten Muster entspricht.
pub fn line_id_for_sequence(sequence: &str) -> Option<String> {
    let suffix = sequence.strip_prefix(SEQUENCE_PREFIX)?;
    if suffix.is_empty() {
        return None;
    }
    Some(format!("{LINE_PREFIX}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_count_up() {
        let mut generator = SequenceGenerator::new();
        assert_eq!(generator.next_sequence(), "sequence_1");
        assert_eq!(generator.next_sequence(), "sequence_2");
    }

    #[test]
    fn sync_skips_past_restored_ids() {
        let mut generator = SequenceGenerator::new();
        generator.sync("drawnLine_17");
        generator.sync("sequence_cross-section_4");
        generator.sync("fremdeLinie");
        assert_eq!(generator.next_sequence(), "sequence_18");
    }

    #[test]
    fn line_id_requires_sequence_prefix() {
        assert_eq!(
            line_id_for_sequence("sequence_7").as_deref(),
            Some("drawnLine_7")
        );
        assert_eq!(
            line_id_for_sequence("sequence_cross-section_3").as_deref(),
            Some("drawnLine_cross-section_3")
        );
        assert_eq!(line_id_for_sequence("gesture_7"), None);
        assert_eq!(line_id_for_sequence("sequence_"), None);
    }
}
