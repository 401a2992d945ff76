//! Flat leveled-table representation of a BOM hierarchy.
//!
//! One row per non-top-level node, in pre-order: `LVL, PARENT, PREFIX, ITM,
//! ITM_DESC, QTY, UOM, SRC, PROC, THREAD` plus an optional trailing `APE`
//! column carried by one workbook variant. JSON objects keyed by these
//! column names are the interchange format.

use crate::error::{BomMergeError, Result};
use crate::model::Highlight;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fixed column order without the optional `APE` tail.
pub const COLUMNS: [&str; 10] = [
    "LVL", "PARENT", "PREFIX", "ITM", "ITM_DESC", "QTY", "UOM", "SRC", "PROC", "THREAD",
];

/// Name of the optional trailing column.
pub const APE_COLUMN: &str = "APE";

/// A table cell: text plus an explicit color tag, used uniformly for every
/// data column.
///
/// Untagged cells serialize as plain strings and both forms are accepted on
/// input, so tables written by hand or by a spreadsheet exporter stay
/// readable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub color: Highlight,
}

impl Cell {
    /// An untagged cell.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Highlight::None,
        }
    }

    /// A cell carrying a highlight tag.
    pub fn tagged(text: impl Into<String>, color: Highlight) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.color.is_none() {
            serializer.serialize_str(&self.text)
        } else {
            let mut cell = serializer.serialize_struct("Cell", 2)?;
            cell.serialize_field("text", &self.text)?;
            cell.serialize_field("color", &self.color)?;
            cell.end()
        }
    }
}

// Accept both the plain-string and the tagged form on input.
#[derive(Deserialize)]
#[serde(untagged)]
enum CellRepr {
    Tagged {
        text: String,
        #[serde(default)]
        color: Highlight,
    },
    Text(String),
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match CellRepr::deserialize(deserializer)? {
            CellRepr::Text(text) => Self::plain(text),
            CellRepr::Tagged { text, color } => Self { text, color },
        })
    }
}

/// One row of a flattened hierarchy.
///
/// `level` is the derived depth (children of top-level nodes = 1), `parent`
/// the identifier of the traversal parent, `prefix` the node's class prefix
/// promoted to its own plain column. The remaining columns are tagged
/// cells, all carrying the node's highlight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRow {
    #[serde(rename = "LVL")]
    pub level: usize,
    #[serde(rename = "PARENT")]
    pub parent: String,
    #[serde(rename = "PREFIX", default)]
    pub prefix: String,
    #[serde(rename = "ITM")]
    pub itm: Cell,
    #[serde(rename = "ITM_DESC", default)]
    pub description: Cell,
    #[serde(rename = "QTY", default)]
    pub quantity: Cell,
    #[serde(rename = "UOM", default)]
    pub unit: Cell,
    #[serde(rename = "SRC", default)]
    pub source: Cell,
    #[serde(rename = "PROC", default)]
    pub process: Cell,
    #[serde(rename = "THREAD", default)]
    pub thread: Cell,
    #[serde(rename = "APE", default, skip_serializing_if = "Option::is_none")]
    pub ape: Option<Cell>,
}

impl FlatRow {
    /// An untagged row with the trailing columns left empty. Test and
    /// fixture convenience.
    pub fn plain(
        level: usize,
        parent: impl Into<String>,
        prefix: impl Into<String>,
        itm: impl Into<String>,
        description: impl Into<String>,
        quantity: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            level,
            parent: parent.into(),
            prefix: prefix.into(),
            itm: Cell::plain(itm),
            description: Cell::plain(description),
            quantity: Cell::plain(quantity),
            unit: Cell::plain(unit),
            source: Cell::plain(""),
            process: Cell::plain(""),
            thread: Cell::plain(""),
            ape: None,
        }
    }

    /// Blank placeholder row marking an insertion in an aligned
    /// presentation; every cell is tagged [`Highlight::New`].
    #[must_use]
    pub fn placeholder(with_ape: bool) -> Self {
        let blank = || Cell::tagged("", Highlight::New);
        Self {
            level: 0,
            parent: String::new(),
            prefix: String::new(),
            itm: blank(),
            description: blank(),
            quantity: blank(),
            unit: blank(),
            source: blank(),
            process: blank(),
            thread: blank(),
            ape: with_ape.then(blank),
        }
    }

    /// The row's highlight, read from its `ITM` cell (flattening tags every
    /// cell of a row identically).
    #[must_use]
    pub fn highlight(&self) -> Highlight {
        self.itm.color
    }

    /// Tagged cells in column order, `APE` last when present.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        [
            &self.itm,
            &self.description,
            &self.quantity,
            &self.unit,
            &self.source,
            &self.process,
            &self.thread,
        ]
        .into_iter()
        .chain(self.ape.as_ref())
    }

    /// Total column count including the fixed leading columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        COLUMNS.len() + usize::from(self.ape.is_some())
    }
}

/// A flattened BOM revision: ordered rows, uniform shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatTable {
    pub rows: Vec<FlatRow>,
}

impl FlatTable {
    #[must_use]
    pub fn new(rows: Vec<FlatRow>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether this table carries the optional `APE` column (decided by the
    /// first row; `validate` enforces uniformity).
    #[must_use]
    pub fn has_ape(&self) -> bool {
        self.rows.first().is_some_and(|r| r.ape.is_some())
    }

    /// Column headers for this table's shape.
    #[must_use]
    pub fn column_names(&self) -> Vec<&'static str> {
        let mut names = COLUMNS.to_vec();
        if self.has_ape() {
            names.push(APE_COLUMN);
        }
        names
    }

    /// Check that every row has the same shape. A table mixing rows with
    /// and without the `APE` column cannot have come from a single
    /// workbook sheet; this is the only malformed-input condition the
    /// table layer itself rejects.
    pub fn validate(&self, context: &str) -> Result<()> {
        let with_ape = self.has_ape();
        for (index, row) in self.rows.iter().enumerate() {
            if row.ape.is_some() != with_ape {
                return Err(BomMergeError::inconsistent_shape(
                    context,
                    index,
                    if with_ape {
                        "is missing the APE column carried by earlier rows"
                    } else {
                        "carries an APE column earlier rows do not"
                    },
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_cells_serialize_as_strings() {
        let json = serde_json::to_string(&Cell::plain("M6")).unwrap();
        assert_eq!(json, "\"M6\"");

        let json = serde_json::to_string(&Cell::tagged("M6", Highlight::Changed)).unwrap();
        assert_eq!(json, "{\"text\":\"M6\",\"color\":\"changed\"}");
    }

    #[test]
    fn cells_deserialize_from_either_form() {
        let cell: Cell = serde_json::from_str("\"M6\"").unwrap();
        assert_eq!(cell, Cell::plain("M6"));

        let cell: Cell = serde_json::from_str("{\"text\":\"M6\",\"color\":\"new\"}").unwrap();
        assert_eq!(cell, Cell::tagged("M6", Highlight::New));

        // Color defaults to untagged.
        let cell: Cell = serde_json::from_str("{\"text\":\"M6\"}").unwrap();
        assert_eq!(cell, Cell::plain("M6"));
    }

    #[test]
    fn row_round_trips_through_column_keyed_json() {
        let row = FlatRow::plain(1, "ROOT", "4", "161-00345A", "BRACKET", "2", "EA");
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["LVL"], 1);
        assert_eq!(json["PARENT"], "ROOT");
        assert_eq!(json["ITM"], "161-00345A");
        assert!(json.get("APE").is_none());

        let back: FlatRow = serde_json::from_value(json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn validate_rejects_mixed_ape_shapes() {
        let mut table = FlatTable::new(vec![
            FlatRow::plain(1, "ROOT", "4", "A", "", "1", "EA"),
            FlatRow::plain(1, "ROOT", "4", "B", "", "1", "EA"),
        ]);
        assert!(table.validate("test").is_ok());
        assert!(!table.has_ape());

        table.rows[1].ape = Some(Cell::plain("X"));
        let err = table.validate("test").unwrap_err();
        assert!(err.to_string().contains("test"));
    }

    #[test]
    fn placeholder_is_fully_tagged() {
        let row = FlatRow::placeholder(true);
        assert_eq!(row.column_count(), 11);
        assert!(row.cells().all(|c| c.text.is_empty() && c.color == Highlight::New));
        assert_eq!(row.highlight(), Highlight::New);
    }
}
