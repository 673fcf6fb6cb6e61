use serde::ser::{Serialize, SerializeMap, Serializer};

use super::model::Table;

/// Missing-cell count per column, kept in source column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingCounts(Vec<(String, usize)>);

impl MissingCounts {
    pub fn get(&self, column: &str) -> Option<usize> {
        self.0.iter().find(|(c, _)| c == column).map(|(_, n)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.0.iter().map(|(c, n)| (c.as_str(), *n))
    }
}

impl Serialize for MissingCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (column, count) in &self.0 {
            map.serialize_entry(column, count)?;
        }
        map.end()
    }
}

/// Shape and completeness of a loaded table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableProfile {
    pub rows: usize,
    pub columns: usize,
    pub column_names: Vec<String>,
    pub missing: MissingCounts,
}

/// Count rows, columns and missing cells per column.
pub fn profile(table: &Table) -> TableProfile {
    let mut counts = vec![0usize; table.width()];
    for row in table.rows() {
        for (slot, cell) in counts.iter_mut().zip(row) {
            if cell.is_missing() {
                *slot += 1;
            }
        }
    }

    TableProfile {
        rows: table.len(),
        columns: table.width(),
        column_names: table.column_names().to_vec(),
        missing: MissingCounts(table.column_names().iter().cloned().zip(counts).collect()),
    }
}
