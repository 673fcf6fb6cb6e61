// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value, loosely following the dtypes a CSV reader
/// would infer per cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Missing cell (empty text or an NA marker).
    Null,
}

impl CellValue {
    /// Whether the cell holds no recorded data.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Interpret the value as an `f64`. Only numeric cells convert; text,
    /// booleans and missing cells yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded file
// ---------------------------------------------------------------------------

/// Rows × named columns, fixed in shape once built.
///
/// Every row holds exactly one cell per column, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    column_names: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table, padding short rows with [`CellValue::Null`].
    ///
    /// Rows wider than the header are a caller bug; the loader rejects them
    /// before they get here.
    pub fn new(column_names: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = column_names.len();
        for row in &mut rows {
            debug_assert!(row.len() <= width, "row wider than header");
            row.resize(width, CellValue::Null);
        }
        Table { column_names, rows }
    }

    /// Column names in source order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// All rows in source order.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.column_names.len()
    }

    /// Position of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["id".into(), "lon".into(), "lat".into()],
            vec![
                vec![CellValue::Integer(1), CellValue::Float(2.5), CellValue::Float(-3.0)],
                vec![CellValue::Integer(2)],
            ],
        )
    }

    #[test]
    fn short_rows_are_padded_with_null() {
        let table = sample();
        assert_eq!(table.len(), 2);
        assert_eq!(table.width(), 3);
        assert_eq!(table.rows()[1], vec![CellValue::Integer(2), CellValue::Null, CellValue::Null]);
    }

    #[test]
    fn column_index_finds_first_match() {
        let table = sample();
        assert_eq!(table.column_index("lon"), Some(1));
        assert_eq!(table.column_index("missing"), None);
    }

    #[test]
    fn only_numeric_cells_convert_to_f64() {
        assert_eq!(CellValue::Integer(7).as_f64(), Some(7.0));
        assert_eq!(CellValue::Float(-1.5).as_f64(), Some(-1.5));
        assert_eq!(CellValue::String("12".into()).as_f64(), None);
        assert_eq!(CellValue::Bool(true).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
        assert!(CellValue::Null.is_missing());
        assert!(!CellValue::String(String::new()).is_missing());
    }
}
