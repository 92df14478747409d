//! Tabular cleanup data
//!
//! A [`Table`] is a header row plus string cells, which keeps every
//! original column intact while the cost columns are appended. Typed views
//! over a table live in [`rows`]; cost enrichment lives in [`enrich`].

pub mod csv;
pub mod enrich;
pub mod rows;

pub use enrich::{default_output_path, enrich, read_events, ColumnDefaults, Enriched};
pub use rows::{analysis_rows, analysis_rows_from, AnalysisRow, CostSource};

use crate::error::{CleanupError, Result};
use std::path::Path;
use tracing::debug;

/// Header plus rows of string cells; every row has one cell per header
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Build a table, checking that every row matches the header width
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let mut table = Self::new(headers);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Parse CSV text whose first record is the header
    pub fn parse(text: &str) -> Result<Self> {
        let mut records = csv::parse_records(text).into_iter();
        let headers = records.next().ok_or(CleanupError::MissingHeader)?;
        Self::from_rows(headers, records.collect())
    }

    /// Load a CSV file
    pub fn read_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CleanupError::io(path, e))?;
        let table = Self::parse(&text)?;
        debug!(path = %path.display(), rows = table.len(), "loaded table");
        Ok(table)
    }

    pub fn to_csv_string(&self) -> String {
        let mut out = csv::format_record(&self.headers);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&csv::format_record(row));
            out.push('\n');
        }
        out
    }

    /// Write the table as CSV, replacing any existing file
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_csv_string()).map_err(|source| CleanupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), rows = self.len(), "wrote table");
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// All values of a column, in row order
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    pub fn cell(&self, row: usize, column: usize) -> &str {
        &self.rows[row][column]
    }

    pub fn set_cell(&mut self, row: usize, column: usize, value: String) {
        self.rows[row][column] = value;
    }

    /// Append a row; its width must match the header
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(CleanupError::MalformedRow {
                row: self.rows.len() + 1,
                expected: self.headers.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append a column with the same value in every row.
    /// Returns the new column's index.
    pub fn add_column(&mut self, name: &str, fill: &str) -> usize {
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(fill.to_string());
        }
        self.headers.len() - 1
    }

    /// Drop the column `name` from the header and every row.
    /// Returns false when there is no such column.
    pub fn remove_column(&mut self, name: &str) -> bool {
        let Some(idx) = self.column_index(name) else {
            return false;
        };
        self.headers.remove(idx);
        for row in &mut self.rows {
            row.remove(idx);
        }
        true
    }

    /// Index of `name`, adding it (filled with `fill`) when absent
    pub fn ensure_column(&mut self, name: &str, fill: &str) -> usize {
        match self.column_index(name) {
            Some(idx) => idx,
            None => self.add_column(name, fill),
        }
    }

    /// Parse a cell as `f64`. `row` is 0-based; errors report it 1-based.
    pub fn parse_f64(&self, row: usize, column: usize) -> Result<f64> {
        let raw = self.cell(row, column).trim();
        raw.parse::<f64>().map_err(|_| self.invalid_cell(row, column))
    }

    /// Parse a cell as a non-negative count, accepting `"12"` and `"12.0"`
    pub fn parse_count(&self, row: usize, column: usize) -> Result<u32> {
        let raw = self.cell(row, column).trim();
        if let Ok(value) = raw.parse::<u32>() {
            return Ok(value);
        }
        match raw.parse::<f64>() {
            Ok(value) if value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) => {
                Ok(value as u32)
            }
            _ => Err(self.invalid_cell(row, column)),
        }
    }

    pub(crate) fn invalid_cell(&self, row: usize, column: usize) -> CleanupError {
        CleanupError::InvalidCell {
            row: row + 1,
            column: self.headers[column].clone(),
            value: self.rows[row][column].clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> Table {
        Table::parse("Country,People,Pounds\nKenya,4,10.5\nPeru,2.0,3\n").unwrap()
    }

    #[test]
    fn test_parse_and_render() {
        let table = small_table();
        assert_eq!(table.headers(), &["Country", "People", "Pounds"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("Country").unwrap(), vec!["Kenya", "Peru"]);
        assert_eq!(
            table.to_csv_string(),
            "Country,People,Pounds\nKenya,4,10.5\nPeru,2.0,3\n"
        );
    }

    #[test]
    fn test_empty_input_has_no_header() {
        assert!(matches!(Table::parse(""), Err(CleanupError::MissingHeader)));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let err = Table::parse("a,b\n1,2\n3\n").unwrap_err();
        assert!(matches!(
            err,
            CleanupError::MalformedRow { row: 2, expected: 2, found: 1 }
        ));
    }

    #[test]
    fn test_parse_count_accepts_integral_floats() {
        let table = small_table();
        let people = table.column_index("People").unwrap();
        assert_eq!(table.parse_count(0, people).unwrap(), 4);
        assert_eq!(table.parse_count(1, people).unwrap(), 2);
    }

    #[test]
    fn test_invalid_cell_reports_position() {
        let table = Table::parse("People\nmany\n").unwrap();
        match table.parse_count(0, 0) {
            Err(CleanupError::InvalidCell { row, column, value }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "People");
                assert_eq!(value, "many");
            }
            other => panic!("expected InvalidCell, got {:?}", other),
        }
    }

    #[test]
    fn test_ensure_column_is_idempotent() {
        let mut table = small_table();
        let idx = table.ensure_column("Miles", "0.1");
        assert_eq!(table.ensure_column("Miles", "9"), idx);
        assert_eq!(table.column("Miles").unwrap(), vec!["0.1", "0.1"]);
    }
}
