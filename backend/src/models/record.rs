//! Cleanup dataset record
//!
//! A full dataset row: where and when the cleanup happened, who took part,
//! what was collected. The cost model only reads [`CleanupRecord::event`].

use super::event::{CleanupEvent, BAGS_COLUMN, MILES_COLUMN, PEOPLE_COLUMN, POUNDS_COLUMN};
use crate::geo::GeoPoint;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the `Cleanup Date` column
pub const DATE_FORMAT: &str = "%m/%d/%Y";

pub const CLEANUP_ID_COLUMN: &str = "Cleanup ID";
pub const ZONE_COLUMN: &str = "Zone";
pub const STATE_COLUMN: &str = "State";
pub const COUNTRY_COLUMN: &str = "Country";
pub const GPS_COLUMN: &str = "GPS";
pub const CLEANUP_TYPE_COLUMN: &str = "Cleanup Type";
pub const CLEANUP_DATE_COLUMN: &str = "Cleanup Date";
pub const GROUP_NAME_COLUMN: &str = "Group Name";
pub const ADULTS_COLUMN: &str = "Adults";
pub const CHILDREN_COLUMN: &str = "Children";
pub const TOTAL_ITEMS_COLUMN: &str = "Total Items Collected";

/// Trash categories and the largest count generated for each
pub const TRASH_ITEMS: [(&str, u32); 46] = [
    ("Cigarette Butts", 100),
    ("Food Wrappers (candy, chips, etc.)", 50),
    ("Take Out/Away Containers (Plastic)", 30),
    ("Take Out/Away Containers (Foam)", 20),
    ("Bottle Caps (Plastic)", 40),
    ("Bottle Caps (Metal)", 20),
    ("Lids (Plastic)", 30),
    ("Straws, Stirrers", 25),
    ("Forks, Knives, Spoons", 15),
    ("Beverage Bottles (Plastic)", 35),
    ("Beverage Bottles (Glass)", 20),
    ("Beverage Cans", 25),
    ("Grocery Bags (Plastic)", 30),
    ("Other Plastic Bags", 25),
    ("Paper Bags", 15),
    ("Cups, Plates (Paper)", 20),
    ("Cups, Plates (Plastic)", 25),
    ("Cups, Plates (Foam)", 15),
    ("Fishing Buoys, Pots & Traps", 10),
    ("Fishing Net & Pieces", 8),
    ("Fishing Line (1 yard/meter = 1 piece)", 15),
    ("Rope (1 yard/meter = 1 piece)", 12),
    ("Fishing Gear (Clean Swell)", 5),
    ("6-Pack Holders", 10),
    ("Other Plastic/Foam Packaging", 20),
    ("Other Plastic Bottles (oil, bleach, etc.)", 15),
    ("Strapping Bands", 8),
    ("Tobacco Packaging/Wrap", 12),
    ("Other Packaging (Clean Swell)", 10),
    ("Appliances (refrigerators, washers, etc.)", 3),
    ("Balloons", 15),
    ("Cigar Tips", 8),
    ("Cigarette Lighters", 10),
    ("Construction Materials", 5),
    ("Fireworks", 3),
    ("Tires", 2),
    ("Toys", 12),
    ("Other Trash (Clean Swell)", 15),
    ("Condoms", 5),
    ("Diapers", 3),
    ("Syringes", 2),
    ("Tampons/Tampon Applicators", 4),
    ("Personal Hygiene (Clean Swell)", 8),
    ("Foam Pieces", 30),
    ("Glass Pieces", 25),
    ("Plastic Pieces", 50),
];

/// Where the cleanup took place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CleanupType {
    Land,
    Water,
    Underwater,
}

impl CleanupType {
    pub const ALL: [CleanupType; 3] = [CleanupType::Land, CleanupType::Water, CleanupType::Underwater];

    pub fn label(&self) -> &'static str {
        match self {
            CleanupType::Land => "Land (beach, shoreline and inland)",
            CleanupType::Water => "Water (boat, kayak, paddleboard)",
            CleanupType::Underwater => "Underwater (diving)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label.trim())
    }
}

/// One row of a cleanup dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanupRecord {
    pub cleanup_id: String,
    /// `"<region>, <country>"`
    pub zone: String,
    pub state: String,
    pub country: String,
    pub gps: GeoPoint,
    pub cleanup_type: CleanupType,
    pub cleanup_date: NaiveDate,
    pub group_name: String,
    pub adults: u32,
    pub children: u32,
    /// Always `adults + children`
    pub people: u32,
    pub pounds: f64,
    pub miles: f64,
    pub bags: u32,
    /// Counts aligned with [`TRASH_ITEMS`]
    pub item_counts: Vec<u32>,
}

impl CleanupRecord {
    /// The quantities the cost model reads
    pub fn event(&self) -> CleanupEvent {
        CleanupEvent::new(self.people, self.pounds, self.miles, self.bags)
    }

    /// Region part of the zone (text before the first comma)
    pub fn region(&self) -> &str {
        region_of_zone(&self.zone)
    }

    pub fn total_items(&self) -> u64 {
        self.item_counts.iter().map(|&count| u64::from(count)).sum()
    }

    /// Column headers of a dataset built from records
    pub fn headers() -> Vec<String> {
        let mut headers: Vec<String> = [
            CLEANUP_ID_COLUMN,
            ZONE_COLUMN,
            STATE_COLUMN,
            COUNTRY_COLUMN,
            GPS_COLUMN,
            CLEANUP_TYPE_COLUMN,
            CLEANUP_DATE_COLUMN,
            GROUP_NAME_COLUMN,
            ADULTS_COLUMN,
            CHILDREN_COLUMN,
            PEOPLE_COLUMN,
            POUNDS_COLUMN,
            MILES_COLUMN,
            BAGS_COLUMN,
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        headers.extend(TRASH_ITEMS.iter().map(|(name, _)| name.to_string()));
        headers.push(TOTAL_ITEMS_COLUMN.to_string());
        headers
    }

    /// Cell values aligned with [`CleanupRecord::headers`]
    pub fn to_row(&self) -> Vec<String> {
        let mut row = vec![
            self.cleanup_id.clone(),
            self.zone.clone(),
            self.state.clone(),
            self.country.clone(),
            self.gps.to_string(),
            self.cleanup_type.label().to_string(),
            self.cleanup_date.format(DATE_FORMAT).to_string(),
            self.group_name.clone(),
            self.adults.to_string(),
            self.children.to_string(),
            self.people.to_string(),
            self.pounds.to_string(),
            self.miles.to_string(),
            self.bags.to_string(),
        ];
        row.extend(self.item_counts.iter().map(|count| count.to_string()));
        row.push(self.total_items().to_string());
        row
    }
}

/// Region part of a `"<region>, <country>"` zone string
pub fn region_of_zone(zone: &str) -> &str {
    zone.split(',').next().unwrap_or("").trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> CleanupRecord {
        CleanupRecord {
            cleanup_id: "GLOBAL000001".to_string(),
            zone: "Kerala, India".to_string(),
            state: "Kerala, India".to_string(),
            country: "India".to_string(),
            gps: GeoPoint::new(9.5, 76.3).unwrap(),
            cleanup_type: CleanupType::Water,
            cleanup_date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            group_name: "Kerala Ocean Heroes".to_string(),
            adults: 10,
            children: 4,
            people: 14,
            pounds: 42.5,
            miles: 1.25,
            bags: 6,
            item_counts: vec![1; TRASH_ITEMS.len()],
        }
    }

    #[test]
    fn test_row_aligns_with_headers() {
        let record = sample_record();
        let headers = CleanupRecord::headers();
        let row = record.to_row();
        assert_eq!(headers.len(), row.len());
        assert_eq!(headers.len(), 14 + TRASH_ITEMS.len() + 1);
        assert_eq!(row[6], "03/09/2024");
        assert_eq!(row[4], "9.5, 76.3");
        assert_eq!(row.last().unwrap(), "46");
    }

    #[test]
    fn test_region_and_event() {
        let record = sample_record();
        assert_eq!(record.region(), "Kerala");
        assert_eq!(record.event(), CleanupEvent::new(14, 42.5, 1.25, 6));
    }

    #[test]
    fn test_cleanup_type_labels_round_trip() {
        for kind in CleanupType::ALL {
            assert_eq!(CleanupType::from_label(kind.label()), Some(kind));
        }
        assert_eq!(CleanupType::from_label("Orbital"), None);
    }
}
