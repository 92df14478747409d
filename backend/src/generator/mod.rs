//! Synthetic cleanup datasets
//!
//! Generates plausible cleanup records for every catalog country from a
//! seeded [`RngManager`], and re-samples coordinates of existing tables.
//! All randomness flows through one RNG in a fixed order, so a config
//! always yields the same records.

pub mod config;

pub use config::{GeneratorConfig, GeneratorError};

use crate::error::{CleanupError, Result};
use crate::geo::{bounds_for, CountryProfile, GeoPoint};
use crate::models::record::{region_of_zone, COUNTRY_COLUMN, GPS_COLUMN, ZONE_COLUMN};
use crate::models::{CleanupRecord, CleanupType, TRASH_ITEMS};
use crate::rng::RngManager;
use crate::table::Table;
use chrono::{Days, NaiveDate};
use tracing::{debug, info};

const GROUP_NAME_SUFFIXES: [&str; 12] = [
    "Beach Cleaners",
    "Ocean Guardians",
    "Coastal Warriors",
    "Marine Savers",
    "Cleanup Crew",
    "Eco Warriors",
    "Blue Guardians",
    "Ocean Protectors",
    "Beach Warriors",
    "Coastal Cleaners",
    "Marine Protectors",
    "Ocean Heroes",
];

/// Records produced by [`generate`] plus the config fingerprint
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDataset {
    pub config_hash: String,
    pub records: Vec<CleanupRecord>,
}

impl GeneratedDataset {
    pub fn to_table(&self) -> Table {
        Table::from_records(&self.records)
    }
}

/// Generate a dataset for every selected country
pub fn generate(config: &GeneratorConfig) -> std::result::Result<GeneratedDataset, GeneratorError> {
    config.validate()?;
    let config_hash = config.fingerprint()?;

    let mut rng = RngManager::new(config.seed);
    let end_date = config.end_date();
    let start_date = end_date
        .checked_sub_days(Days::new(u64::from(config.date_window_days)))
        .unwrap_or(end_date);

    let mut records = Vec::new();
    for profile in config.selected_countries() {
        let sites = config.sites_for(profile);
        debug!(country = profile.name, sites, "generating sites");

        for _ in 0..sites {
            let id = records.len() as u32 + 1;
            let record = synthesize(
                &mut rng,
                id,
                profile,
                start_date,
                config.date_window_days,
            );
            records.push(record);
        }
    }

    info!(
        records = records.len(),
        countries = config.selected_countries().len(),
        config_hash = %config_hash,
        "generated cleanup dataset"
    );

    Ok(GeneratedDataset {
        config_hash,
        records,
    })
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// One record for a site in `profile`
fn synthesize(
    rng: &mut RngManager,
    id: u32,
    profile: &CountryProfile,
    start_date: NaiveDate,
    window_days: u32,
) -> CleanupRecord {
    let region = rng
        .choose(profile.coastal_regions)
        .copied()
        .unwrap_or(profile.name);
    let gps = bounds_for(profile.name, region).sample(rng);

    let offset = rng.range_inclusive(0, i64::from(window_days)) as u64;
    let cleanup_date = start_date
        .checked_add_days(Days::new(offset))
        .unwrap_or(start_date);

    let suffix = GROUP_NAME_SUFFIXES[rng.range(0, GROUP_NAME_SUFFIXES.len() as i64) as usize];
    let adults = rng.range_inclusive(1, 50) as u32;
    let children = rng.range_inclusive(0, i64::from((adults / 2).min(20))) as u32;
    let pounds = round_to(rng.uniform(0.1, 100.0), 2);
    let miles = round_to(rng.uniform(0.01, 5.0), 4);
    let bags = rng.range_inclusive(0, 20) as u32;
    let item_counts = TRASH_ITEMS
        .iter()
        .map(|&(_, max)| rng.range_inclusive(0, i64::from(max)) as u32)
        .collect();
    let cleanup_type = CleanupType::ALL[rng.range(0, CleanupType::ALL.len() as i64) as usize];

    let zone = format!("{}, {}", region, profile.name);
    CleanupRecord {
        cleanup_id: format!("GLOBAL{:06}", id),
        state: zone.clone(),
        zone,
        country: profile.name.to_string(),
        gps,
        cleanup_type,
        cleanup_date,
        group_name: format!("{} {}", region, suffix),
        adults,
        children,
        people: adults + children,
        pounds,
        miles,
        bags,
        item_counts,
    }
}

/// Re-sample the GPS of every row from its country and zone region.
///
/// Rows keep every other cell. Returns the number of rows relocated.
pub fn relocate(table: &mut Table, rng: &mut RngManager) -> Result<usize> {
    let country_idx = table
        .column_index(COUNTRY_COLUMN)
        .ok_or_else(|| CleanupError::MissingColumn(COUNTRY_COLUMN.to_string()))?;
    let zone_idx = table
        .column_index(ZONE_COLUMN)
        .ok_or_else(|| CleanupError::MissingColumn(ZONE_COLUMN.to_string()))?;
    let gps_idx = table.ensure_column(GPS_COLUMN, "");

    for row in 0..table.len() {
        let point: GeoPoint = {
            let country = table.cell(row, country_idx).trim();
            let region = region_of_zone(table.cell(row, zone_idx));
            bounds_for(country, region).sample(rng)
        };
        table.set_cell(row, gps_idx, point.to_string());

        if (row + 1) % 1000 == 0 {
            debug!(rows = row + 1, "relocated coordinates");
        }
    }

    info!(rows = table.len(), "relocated cleanup coordinates");
    Ok(table.len())
}
