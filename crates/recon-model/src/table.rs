use serde::{Deserialize, Serialize};

/// An opaque tabular batch: named columns in source order plus string cells.
///
/// The engine never assumes fixed column names; inference picks the columns
/// that matter. Column order is preserved because inference scans it
/// first-match-wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RowSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding or truncating it to the column count.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Returns the trimmed cell at (`row`, `column`), or `None` when the cell
    /// is absent or blank. Blank-after-trim counts as missing.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        let cell = self.rows.get(row)?.get(index)?.trim();
        if cell.is_empty() { None } else { Some(cell) }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_row_pads_and_truncates() {
        let mut table = RowSet::new(vec!["A".to_string(), "B".to_string()]);
        table.push_row(vec!["1".to_string()]);
        table.push_row(vec!["1".to_string(), "2".to_string(), "3".to_string()]);
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[1].len(), 2);
    }

    #[test]
    fn value_treats_blank_as_missing() {
        let mut table = RowSet::new(vec!["SKU".to_string(), "Quantity".to_string()]);
        table.push_row(vec!["  ABC-1 ".to_string(), "   ".to_string()]);
        assert_eq!(table.value(0, "SKU"), Some("ABC-1"));
        assert_eq!(table.value(0, "Quantity"), None);
        assert_eq!(table.value(0, "Missing"), None);
        assert_eq!(table.value(9, "SKU"), None);
    }
}
