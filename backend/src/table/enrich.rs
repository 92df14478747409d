//! Cost enrichment of tabular data
//!
//! Reads the four model columns from every row, computes costs and writes
//! the [`COST_COLUMNS`] after the original columns. Missing model columns
//! are added with default values; blank model cells take the same
//! defaults. Any other unparsable cell aborts the whole batch.

use super::Table;
use crate::costs::{CostModel, COST_COLUMNS};
use crate::error::{CleanupError, Result};
use crate::models::{
    CleanupEvent, BAGS_COLUMN, MILES_COLUMN, MODEL_COLUMNS, PEOPLE_COLUMN, POUNDS_COLUMN,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Values substituted for absent model columns or blank model cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefaults {
    pub people: u32,
    pub pounds: f64,
    pub miles: f64,
    pub bags: u32,
}

impl Default for ColumnDefaults {
    fn default() -> Self {
        Self {
            people: 1,
            pounds: 0.1,
            miles: 0.1,
            bags: 1,
        }
    }
}

impl ColumnDefaults {
    fn fill_value(&self, column: &str) -> String {
        match column {
            PEOPLE_COLUMN => self.people.to_string(),
            POUNDS_COLUMN => self.pounds.to_string(),
            MILES_COLUMN => self.miles.to_string(),
            _ => self.bags.to_string(),
        }
    }
}

/// Result of [`enrich`]
#[derive(Debug, Clone)]
pub struct Enriched {
    /// Original columns followed by the cost columns
    pub table: Table,
    /// Model columns that were absent and filled with defaults
    pub defaulted_columns: Vec<String>,
    /// Blank model cells that took default values
    pub defaulted_cells: usize,
    /// Rows with negative or non-finite pounds/miles
    pub suspicious_rows: usize,
}

/// Add any missing model column, filled with its default.
/// Returns the names of the columns added.
pub fn fill_missing_columns(table: &mut Table, defaults: &ColumnDefaults) -> Vec<String> {
    let mut added = Vec::new();
    for column in MODEL_COLUMNS {
        if !table.has_column(column) {
            table.add_column(column, &defaults.fill_value(column));
            added.push(column.to_string());
        }
    }
    added
}

/// Read a [`CleanupEvent`] from every row.
///
/// All four model columns must exist (see [`fill_missing_columns`]).
/// Returns the events and the number of blank cells that were defaulted.
pub fn read_events(table: &Table, defaults: &ColumnDefaults) -> Result<(Vec<CleanupEvent>, usize)> {
    let column = |name: &str| {
        table
            .column_index(name)
            .ok_or_else(|| CleanupError::MissingColumn(name.to_string()))
    };
    let people_idx = column(PEOPLE_COLUMN)?;
    let pounds_idx = column(POUNDS_COLUMN)?;
    let miles_idx = column(MILES_COLUMN)?;
    let bags_idx = column(BAGS_COLUMN)?;

    let mut blanks = 0;
    let mut events = Vec::with_capacity(table.len());

    for row in 0..table.len() {
        let mut is_blank = |idx: usize| {
            let blank = table.cell(row, idx).trim().is_empty();
            if blank {
                blanks += 1;
            }
            blank
        };

        let people = if is_blank(people_idx) {
            defaults.people
        } else {
            table.parse_count(row, people_idx)?
        };
        let pounds = if is_blank(pounds_idx) {
            defaults.pounds
        } else {
            table.parse_f64(row, pounds_idx)?
        };
        let miles = if is_blank(miles_idx) {
            defaults.miles
        } else {
            table.parse_f64(row, miles_idx)?
        };
        let bags = if is_blank(bags_idx) {
            defaults.bags
        } else {
            table.parse_count(row, bags_idx)?
        };

        events.push(CleanupEvent::new(people, pounds, miles, bags));
    }

    Ok((events, blanks))
}

/// Append cost columns to every row of `table`.
///
/// Row order and original cells are preserved. Cost columns that already
/// exist (re-enriching an enriched file) are dropped first, so the output
/// always ends with the full [`COST_COLUMNS`] block in order.
pub fn enrich(table: Table, model: &CostModel) -> Result<Enriched> {
    enrich_with_defaults(table, model, &ColumnDefaults::default())
}

/// [`enrich`] with caller-supplied defaults
pub fn enrich_with_defaults(
    mut table: Table,
    model: &CostModel,
    defaults: &ColumnDefaults,
) -> Result<Enriched> {
    let defaulted_columns = fill_missing_columns(&mut table, defaults);
    if !defaulted_columns.is_empty() {
        warn!(columns = ?defaulted_columns, "missing required columns, using defaults");
    }

    let (events, defaulted_cells) = read_events(&table, defaults)?;
    if defaulted_cells > 0 {
        warn!(cells = defaulted_cells, "blank model cells replaced with defaults");
    }

    let suspicious_rows = events.iter().filter(|e| e.is_suspicious()).count();
    if suspicious_rows > 0 {
        warn!(rows = suspicious_rows, "rows with negative or non-finite quantities");
    }

    let annotated = model.annotate(&events);
    let stale = COST_COLUMNS
        .iter()
        .filter(|name| table.remove_column(name))
        .count();
    if stale > 0 {
        debug!(columns = stale, "replacing existing cost columns");
    }
    let cost_indices: Vec<usize> = COST_COLUMNS
        .iter()
        .map(|name| table.add_column(name, ""))
        .collect();

    for (row, item) in annotated.iter().enumerate() {
        for (&idx, value) in cost_indices.iter().zip(item.costs.values()) {
            table.set_cell(row, idx, value.to_string());
        }
    }

    info!(rows = table.len(), "calculated costs for each cleanup point");

    Ok(Enriched {
        table,
        defaulted_columns,
        defaulted_cells,
        suspicious_rows,
    })
}

/// `<dir>/<stem>_with_costs.csv` next to the input file
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cleanup".to_string());
    input.with_file_name(format!("{}_with_costs.csv", stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("data/ocean_cleanup.csv")),
            PathBuf::from("data/ocean_cleanup_with_costs.csv")
        );
        assert_eq!(
            default_output_path(Path::new("events")),
            PathBuf::from("events_with_costs.csv")
        );
    }

    #[test]
    fn test_missing_columns_are_defaulted() {
        let table = Table::parse("Country,People\nKenya,3\n").unwrap();
        let enriched = enrich(table, &CostModel::default()).unwrap();

        assert_eq!(enriched.defaulted_columns, vec!["Pounds", "Miles", "# of bags"]);
        assert_eq!(enriched.table.column("Miles").unwrap(), vec!["0.1"]);
        assert_eq!(enriched.table.column("# of bags").unwrap(), vec!["1"]);
    }

    #[test]
    fn test_blank_cells_are_defaulted() {
        let table = Table::parse("People,Pounds,Miles,# of bags\n,5,1,2\n").unwrap();
        let (events, blanks) = read_events(&table, &ColumnDefaults::default()).unwrap();
        assert_eq!(blanks, 1);
        assert_eq!(events[0], CleanupEvent::new(1, 5.0, 1.0, 2));
    }

    #[test]
    fn test_re_enrichment_does_not_duplicate_columns() {
        let table = Table::parse("People,Pounds,Miles,# of bags\n2,5,1,2\n").unwrap();
        let model = CostModel::default();
        let once = enrich(table, &model).unwrap().table;
        let twice = enrich(once.clone(), &model).unwrap().table;
        assert_eq!(once, twice);
        assert_eq!(twice.headers().len(), 4 + COST_COLUMNS.len());
    }

    #[test]
    fn test_partial_cost_columns_are_moved_to_the_end() {
        let table = Table::parse(
            "total_cost,People,Pounds,Miles,# of bags,carbon_cost\n1,4,10,1,1,2\n",
        )
        .unwrap();
        let enriched = enrich(table, &CostModel::default()).unwrap().table;

        let headers = enriched.headers();
        assert_eq!(headers.len(), 4 + COST_COLUMNS.len());
        assert_eq!(&headers[..4], &MODEL_COLUMNS[..]);
        assert_eq!(&headers[4..], &COST_COLUMNS[..]);
        let total: f64 = enriched.column("total_cost").unwrap()[0].parse().unwrap();
        let expected = CostModel::default().compute(&CleanupEvent::new(4, 10.0, 1.0, 1));
        assert_eq!(total, expected.total_cost);
    }
}
