//! Dataset verification
//!
//! Checks a raw (not necessarily enriched) cleanup table: GPS validity,
//! country and continent distribution, and how many rows carry usable
//! people, pounds and item counts.

use super::format::{count, thousands};
use crate::geo::{continent_of, Continent, GeoPoint};
use crate::models::record::{COUNTRY_COLUMN, GPS_COLUMN, TOTAL_ITEMS_COLUMN};
use crate::models::{PEOPLE_COLUMN, POUNDS_COLUMN};
use crate::table::Table;
use std::collections::BTreeMap;
use std::fmt;

/// Coordinates listed per continent
pub const SAMPLES_PER_CONTINENT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    pub records: usize,
    pub valid_gps: usize,
    pub invalid_gps: usize,
    /// Events per country, most frequent first
    pub country_counts: Vec<(String, usize)>,
    /// Events per continent, most frequent first
    pub continent_counts: Vec<(Continent, usize)>,
    /// First few `(country, gps)` pairs seen per continent
    pub samples: BTreeMap<Continent, Vec<(String, String)>>,
    pub people_present: usize,
    pub pounds_present: usize,
    pub items_present: usize,
    pub total_people: f64,
    pub total_pounds: f64,
    pub total_items: f64,
}

impl Verification {
    pub fn countries(&self) -> usize {
        self.country_counts.len()
    }
}

fn by_count_desc<K: Ord + Clone>(counts: BTreeMap<K, usize>) -> Vec<(K, usize)> {
    let mut sorted: Vec<(K, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

/// Inspect every row of `table`; absent columns count as missing data
pub fn verify(table: &Table) -> Verification {
    let text = |name: &str, row: usize| -> &str {
        table
            .column_index(name)
            .map(|idx| table.cell(row, idx))
            .unwrap_or("")
    };
    let numeric = |name: &str, row: usize| -> Option<f64> {
        text(name, row)
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    };

    let mut report = Verification {
        records: table.len(),
        valid_gps: 0,
        invalid_gps: 0,
        country_counts: Vec::new(),
        continent_counts: Vec::new(),
        samples: BTreeMap::new(),
        people_present: 0,
        pounds_present: 0,
        items_present: 0,
        total_people: 0.0,
        total_pounds: 0.0,
        total_items: 0.0,
    };
    let mut countries: BTreeMap<String, usize> = BTreeMap::new();
    let mut continents: BTreeMap<Continent, usize> = BTreeMap::new();

    for row in 0..table.len() {
        let gps = text(GPS_COLUMN, row);
        if GeoPoint::parse(gps).is_ok() {
            report.valid_gps += 1;
        } else {
            report.invalid_gps += 1;
        }

        let country = text(COUNTRY_COLUMN, row).trim();
        *countries.entry(country.to_string()).or_default() += 1;

        let continent = continent_of(country);
        *continents.entry(continent).or_default() += 1;
        let samples = report.samples.entry(continent).or_default();
        if samples.len() < SAMPLES_PER_CONTINENT {
            samples.push((country.to_string(), gps.to_string()));
        }

        if let Some(people) = numeric(PEOPLE_COLUMN, row) {
            report.people_present += 1;
            report.total_people += people;
        }
        if let Some(pounds) = numeric(POUNDS_COLUMN, row) {
            report.pounds_present += 1;
            report.total_pounds += pounds;
        }
        if let Some(items) = numeric(TOTAL_ITEMS_COLUMN, row) {
            report.items_present += 1;
            report.total_items += items;
        }
    }

    report.country_counts = by_count_desc(countries);
    report.continent_counts = by_count_desc(continents);
    report
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== GLOBAL DATASET VERIFICATION ===")?;
        writeln!(f, "Total records: {}", count(self.records as u64))?;
        writeln!(f, "Countries: {}", self.countries())?;
        writeln!(f, "Valid GPS coordinates: {}", count(self.valid_gps as u64))?;
        writeln!(f, "Invalid GPS coordinates: {}", count(self.invalid_gps as u64))?;

        writeln!(f, "\n=== COUNTRY DISTRIBUTION ===")?;
        writeln!(f, "Top 20 countries by cleanup events:")?;
        for (country, events) in self.country_counts.iter().take(20) {
            writeln!(f, "   {:<24} {}", country, events)?;
        }

        writeln!(f, "\n=== CONTINENT DISTRIBUTION ===")?;
        for (continent, events) in &self.continent_counts {
            writeln!(f, "   {:<24} {}", continent.label(), events)?;
        }

        writeln!(f, "\n=== SAMPLE COORDINATES BY CONTINENT ===")?;
        for (continent, events) in &self.continent_counts {
            writeln!(f, "\n{} ({} records):", continent, events)?;
            for (country, gps) in self.samples.get(continent).into_iter().flatten() {
                writeln!(f, "  {}: {}", country, gps)?;
            }
        }

        writeln!(f, "\n=== DATA QUALITY CHECK ===")?;
        writeln!(f, "Records with valid people count: {}", count(self.people_present as u64))?;
        writeln!(f, "Records with valid pounds: {}", count(self.pounds_present as u64))?;
        writeln!(f, "Records with valid total items: {}", count(self.items_present as u64))?;
        writeln!(f, "\nTotal people involved: {}", thousands(self.total_people, 0))?;
        writeln!(f, "Total pounds collected: {}", thousands(self.total_pounds, 2))?;
        writeln!(f, "Total items collected: {}", thousands(self.total_items, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_counts_gps_and_quality() {
        let table = Table::parse(
            "Country,GPS,People,Pounds\n\
             Kenya,\"-4.0, 39.6\",3,1.5\n\
             Kenya,\"95.0, 39.6\",,2\n\
             Atlantis,,x,\n",
        )
        .unwrap();
        let report = verify(&table);

        assert_eq!(report.records, 3);
        assert_eq!(report.valid_gps, 1);
        assert_eq!(report.invalid_gps, 2);
        assert_eq!(report.country_counts[0], ("Kenya".to_string(), 2));
        assert_eq!(report.people_present, 1);
        assert_eq!(report.pounds_present, 2);
        assert_eq!(report.items_present, 0);
        assert_eq!(report.total_pounds, 3.5);
        assert_eq!(
            report.continent_counts,
            vec![(Continent::Africa, 2), (Continent::Other, 1)]
        );
        assert_eq!(report.samples[&Continent::Other], vec![("Atlantis".to_string(), String::new())]);
    }
}
