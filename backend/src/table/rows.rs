//! Typed views over a [`Table`]
//!
//! [`analysis_rows`] gives reports and map builders a uniform row shape
//! whether or not the table has been enriched yet. [`Table::to_records`]
//! and [`Table::from_records`] convert whole datasets.

use super::enrich::{fill_missing_columns, read_events, ColumnDefaults};
use super::Table;
use crate::costs::{CostBreakdown, CostModel, COST_COLUMNS};
use crate::error::{CleanupError, Result};
use crate::geo::GeoPoint;
use crate::models::record::{
    CLEANUP_DATE_COLUMN, CLEANUP_ID_COLUMN, CLEANUP_TYPE_COLUMN, COUNTRY_COLUMN, DATE_FORMAT,
    GPS_COLUMN, GROUP_NAME_COLUMN, ZONE_COLUMN,
};
use crate::models::{CleanupEvent, CleanupRecord, CleanupType, MODEL_COLUMNS, TRASH_ITEMS};
use chrono::NaiveDate;

/// A dataset row with its cost breakdown, as consumed by reports
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRow {
    /// 0-based position in the source table
    pub index: usize,
    pub cleanup_id: String,
    pub country: String,
    pub zone: String,
    pub gps: String,
    pub cleanup_date: String,
    pub cleanup_type: String,
    pub group_name: String,
    pub people: u32,
    pub pounds: f64,
    pub miles: f64,
    pub bags: u32,
    pub costs: CostBreakdown,
}

impl AnalysisRow {
    pub fn event(&self) -> CleanupEvent {
        CleanupEvent::new(self.people, self.pounds, self.miles, self.bags)
    }

    /// Parsed coordinates, `None` when the GPS cell is invalid
    pub fn point(&self) -> Option<GeoPoint> {
        GeoPoint::parse(&self.gps).ok()
    }
}

/// Where [`analysis_rows_from`] takes each row's cost breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostSource {
    /// Stored cost columns when all of them are present, otherwise computed
    #[default]
    Stored,
    /// Always computed with the model; stored cost columns are ignored
    Model,
}

/// Build analysis rows from `table`, preferring stored cost columns.
///
/// Stored cost columns are used when all of them are present; otherwise
/// costs are computed with `model`. Descriptive columns that are absent
/// read as empty strings.
pub fn analysis_rows(table: &Table, model: &CostModel) -> Result<Vec<AnalysisRow>> {
    analysis_rows_from(table, model, CostSource::Stored)
}

/// [`analysis_rows`] with an explicit [`CostSource`]
pub fn analysis_rows_from(
    table: &Table,
    model: &CostModel,
    source: CostSource,
) -> Result<Vec<AnalysisRow>> {
    let mut working;
    let table = if MODEL_COLUMNS.iter().all(|c| table.has_column(c)) {
        table
    } else {
        working = table.clone();
        fill_missing_columns(&mut working, &ColumnDefaults::default());
        &working
    };

    let (events, _) = read_events(table, &ColumnDefaults::default())?;
    let stored = match source {
        CostSource::Stored => stored_costs(table)?,
        CostSource::Model => None,
    };

    let text = |name: &str, row: usize| -> String {
        table
            .column_index(name)
            .map(|idx| table.cell(row, idx).to_string())
            .unwrap_or_default()
    };

    Ok(events
        .iter()
        .enumerate()
        .map(|(row, event)| AnalysisRow {
            index: row,
            cleanup_id: text(CLEANUP_ID_COLUMN, row),
            country: text(COUNTRY_COLUMN, row),
            zone: text(ZONE_COLUMN, row),
            gps: text(GPS_COLUMN, row),
            cleanup_date: text(CLEANUP_DATE_COLUMN, row),
            cleanup_type: text(CLEANUP_TYPE_COLUMN, row),
            group_name: text(GROUP_NAME_COLUMN, row),
            people: event.people,
            pounds: event.pounds,
            miles: event.miles,
            bags: event.bags,
            costs: match &stored {
                Some(costs) => costs[row],
                None => model.compute(event),
            },
        })
        .collect())
}

/// Cost breakdowns read from the table, `None` unless every cost column exists
fn stored_costs(table: &Table) -> Result<Option<Vec<CostBreakdown>>> {
    let indices: Option<Vec<usize>> = COST_COLUMNS.iter().map(|c| table.column_index(c)).collect();
    let Some(indices) = indices else {
        return Ok(None);
    };

    let mut costs = Vec::with_capacity(table.len());
    for row in 0..table.len() {
        let mut values = [0.0; 16];
        for (slot, &idx) in values.iter_mut().zip(&indices) {
            *slot = table.parse_f64(row, idx)?;
        }
        costs.push(CostBreakdown::from_values(values));
    }
    Ok(Some(costs))
}

impl Table {
    /// Table with one row per record, using [`CleanupRecord::headers`]
    pub fn from_records(records: &[CleanupRecord]) -> Self {
        Table {
            headers: CleanupRecord::headers(),
            rows: records.iter().map(CleanupRecord::to_row).collect(),
        }
    }

    /// Parse every row as a [`CleanupRecord`]; all record columns are required
    pub fn to_records(&self) -> Result<Vec<CleanupRecord>> {
        let headers = CleanupRecord::headers();
        let mut indices = Vec::with_capacity(headers.len());
        for name in &headers {
            let idx = self
                .column_index(name)
                .ok_or_else(|| CleanupError::MissingColumn(name.clone()))?;
            indices.push(idx);
        }

        // Columns before the trash item counts
        let fixed = 14;
        let mut records = Vec::with_capacity(self.len());
        for row in 0..self.len() {
            let text = |i: usize| self.cell(row, indices[i]).to_string();

            let gps = GeoPoint::parse(self.cell(row, indices[4]))
                .map_err(|_| self.invalid_cell(row, indices[4]))?;
            let cleanup_type = CleanupType::from_label(self.cell(row, indices[5]))
                .ok_or_else(|| self.invalid_cell(row, indices[5]))?;
            let cleanup_date =
                NaiveDate::parse_from_str(self.cell(row, indices[6]).trim(), DATE_FORMAT)
                    .map_err(|_| self.invalid_cell(row, indices[6]))?;

            let item_counts = (0..TRASH_ITEMS.len())
                .map(|i| self.parse_count(row, indices[fixed + i]))
                .collect::<Result<Vec<u32>>>()?;

            records.push(CleanupRecord {
                cleanup_id: text(0),
                zone: text(1),
                state: text(2),
                country: text(3),
                gps,
                cleanup_type,
                cleanup_date,
                group_name: text(7),
                adults: self.parse_count(row, indices[8])?,
                children: self.parse_count(row, indices[9])?,
                people: self.parse_count(row, indices[10])?,
                pounds: self.parse_f64(row, indices[11])?,
                miles: self.parse_f64(row, indices[12])?,
                bags: self.parse_count(row, indices[13])?,
                item_counts,
            });
        }
        Ok(records)
    }
}
