//! Cells, rows, and the normalized table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field value, held as display text.
///
/// `Cell` exists so pre-split row input can carry anything printable:
/// strings, numbers, and bools all convert, and `Option` cells map
/// `None` to the empty string.
///
/// # Example
///
/// ```rust
/// use columnize::Cell;
///
/// assert_eq!(Cell::from(42).as_str(), "42");
/// assert_eq!(Cell::from(None::<i32>).as_str(), "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell(String);

impl Cell {
    /// View the cell's text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the cell's text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell(value.to_string())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

macro_rules! cell_from_display {
    ($($ty:ty),+ $(,)?) => {
        $(impl From<$ty> for Cell {
            fn from(value: $ty) -> Self {
                Cell(value.to_string())
            }
        })+
    };
}

cell_from_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// One row of the table, classified once at construction.
///
/// Classification is permanent: a passthrough row stays passthrough even
/// when later reconciliation widens the table around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row {
    /// Single-field row, emitted verbatim. Interleaves titles and
    /// comments among aligned rows.
    Passthrough(String),
    /// Multi-field row, subject to padding and alignment.
    Data(Vec<String>),
}

impl Row {
    /// Classify a field list: exactly one field is passthrough, anything
    /// else is data.
    pub fn from_fields(mut fields: Vec<String>) -> Self {
        if fields.len() == 1 {
            Row::Passthrough(fields.remove(0))
        } else {
            Row::Data(fields)
        }
    }

    /// True for single-field rows that render verbatim.
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Row::Passthrough(_))
    }
}

/// A normalized table: classified rows plus the resolved column count.
///
/// Produced by reconciliation. Every data row holds exactly
/// [`columns`](Table::columns) fields; passthrough rows keep their one
/// field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
    columns: usize,
}

impl Table {
    pub(crate) fn new(rows: Vec<Row>, columns: usize) -> Self {
        Table { rows, columns }
    }

    /// All rows in input order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Resolved column count over data rows.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// True when the input produced no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Cell conversion tests ---

    #[test]
    fn cell_from_strings() {
        assert_eq!(Cell::from("abc").as_str(), "abc");
        assert_eq!(Cell::from(String::from("abc")).as_str(), "abc");
        assert_eq!(Cell::from("").as_str(), "");
    }

    #[test]
    fn cell_from_numbers() {
        assert_eq!(Cell::from(7).as_str(), "7");
        assert_eq!(Cell::from(-3i64).as_str(), "-3");
        assert_eq!(Cell::from(2.5).as_str(), "2.5");
        assert_eq!(Cell::from(0u8).as_str(), "0");
    }

    #[test]
    fn cell_from_bool_and_char() {
        assert_eq!(Cell::from(true).as_str(), "true");
        assert_eq!(Cell::from('x').as_str(), "x");
    }

    #[test]
    fn cell_from_option() {
        assert_eq!(Cell::from(Some("present")).as_str(), "present");
        assert_eq!(Cell::from(Some(12)).as_str(), "12");
        assert_eq!(Cell::from(None::<&str>).as_str(), "");
    }

    #[test]
    fn cell_display_matches_text() {
        assert_eq!(Cell::from(42).to_string(), "42");
    }

    #[test]
    fn cell_serde_is_a_bare_string() {
        let json = serde_json::to_string(&Cell::from("x,y")).unwrap();
        assert_eq!(json, "\"x,y\"");
        let parsed: Cell = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(parsed, Cell::from("42"));
    }

    // --- Row classification tests ---

    #[test]
    fn single_field_is_passthrough() {
        let row = Row::from_fields(vec!["a title".to_string()]);
        assert_eq!(row, Row::Passthrough("a title".to_string()));
        assert!(row.is_passthrough());
    }

    #[test]
    fn multi_field_is_data() {
        let row = Row::from_fields(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(row, Row::Data(vec!["a".to_string(), "b".to_string()]));
        assert!(!row.is_passthrough());
    }

    #[test]
    fn zero_fields_is_data() {
        assert_eq!(Row::from_fields(Vec::new()), Row::Data(Vec::new()));
    }

    // --- Table accessor tests ---

    #[test]
    fn table_reports_shape() {
        let table = Table::new(
            vec![
                Row::Passthrough("t".to_string()),
                Row::Data(vec!["a".to_string(), "b".to_string()]),
            ],
            2,
        );
        assert_eq!(table.columns(), 2);
        assert_eq!(table.rows().len(), 2);
        assert!(!table.is_empty());
        assert!(Table::default().is_empty());
    }
}
