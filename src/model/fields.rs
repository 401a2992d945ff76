//! Part field record and highlight tags.

use serde::{Deserialize, Serialize};

/// Visual highlight tag carried by nodes and flattened cells.
///
/// Purely informational: structural operations never branch on it, with the
/// single exception that rename propagation sets `Changed`. The tags stand
/// for row background colors in an editing UI (yellow = new, red = changed,
/// gray = marked for deletion).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Highlight {
    #[default]
    None,
    New,
    Changed,
    ToBeDeleted,
}

impl Highlight {
    /// True for the default (untagged) state.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Keys for the fixed per-part field record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Prefix,
    Description,
    Quantity,
    Unit,
    Source,
    Process,
    Thread,
    /// Extra column carried by one workbook variant only.
    Ape,
}

/// The fixed record of labeled fields every part node carries.
///
/// All values are stored as text, exactly as they appear in the workbook,
/// quantities included. `ape` is `Some` only for trees loaded from the
/// workbook variant that carries the extra `APE` column; a single tree
/// never mixes both shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartFields {
    pub prefix: String,
    pub description: String,
    pub quantity: String,
    pub unit: String,
    pub source: String,
    pub process: String,
    pub thread: String,
    pub ape: Option<String>,
}

impl PartFields {
    /// Field value by key. A missing `ape` reads as empty text.
    #[must_use]
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Prefix => &self.prefix,
            FieldKey::Description => &self.description,
            FieldKey::Quantity => &self.quantity,
            FieldKey::Unit => &self.unit,
            FieldKey::Source => &self.source,
            FieldKey::Process => &self.process,
            FieldKey::Thread => &self.thread,
            FieldKey::Ape => self.ape.as_deref().unwrap_or(""),
        }
    }

    /// Set a field value by key.
    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            FieldKey::Prefix => self.prefix = value,
            FieldKey::Description => self.description = value,
            FieldKey::Quantity => self.quantity = value,
            FieldKey::Unit => self.unit = value,
            FieldKey::Source => self.source = value,
            FieldKey::Process => self.process = value,
            FieldKey::Thread => self.thread = value,
            FieldKey::Ape => self.ape = Some(value),
        }
    }

    /// Iterate field values in fixed column order (APE last, when present).
    pub fn values(&self) -> impl Iterator<Item = &str> {
        [
            self.prefix.as_str(),
            self.description.as_str(),
            self.quantity.as_str(),
            self.unit.as_str(),
            self.source.as_str(),
            self.process.as_str(),
            self.thread.as_str(),
        ]
        .into_iter()
        .chain(self.ape.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_round_trip() {
        let mut fields = PartFields::default();
        fields.set(FieldKey::Quantity, "2");
        fields.set(FieldKey::Unit, "EA");
        assert_eq!(fields.get(FieldKey::Quantity), "2");
        assert_eq!(fields.get(FieldKey::Unit), "EA");
        assert_eq!(fields.get(FieldKey::Thread), "");
    }

    #[test]
    fn ape_reads_empty_until_set() {
        let mut fields = PartFields::default();
        assert_eq!(fields.get(FieldKey::Ape), "");
        assert_eq!(fields.values().count(), 7);
        fields.set(FieldKey::Ape, "X");
        assert_eq!(fields.get(FieldKey::Ape), "X");
        assert_eq!(fields.values().count(), 8);
    }

    #[test]
    fn highlight_serializes_kebab_case() {
        let json = serde_json::to_string(&Highlight::ToBeDeleted).unwrap();
        assert_eq!(json, "\"to-be-deleted\"");
        let tag: Highlight = serde_json::from_str("\"changed\"").unwrap();
        assert_eq!(tag, Highlight::Changed);
    }
}
