//! Generator Tests
//!
//! Determinism and shape of synthetic datasets across the full catalog.

use chrono::NaiveDate;
use cleanup_cost_core::geo::{bounds_for, COUNTRIES};
use cleanup_cost_core::models::TRASH_ITEMS;
use cleanup_cost_core::{
    generate, relocate, CleanupType, GeneratorConfig, GeneratorError, GeoPoint, RngManager,
};
use std::collections::HashSet;

fn config(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        seed,
        min_sites_per_country: 3,
        max_sites_per_country: 3,
        reference_date: NaiveDate::from_ymd_opt(2025, 3, 1),
        ..Default::default()
    }
}

#[test]
fn test_same_config_same_dataset() {
    let a = generate(&config(42)).unwrap();
    let b = generate(&config(42)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.records.len(), COUNTRIES.len() * 3);
}

#[test]
fn test_different_seed_different_dataset() {
    let a = generate(&config(1)).unwrap();
    let b = generate(&config(2)).unwrap();
    assert_ne!(a.records, b.records);
    assert_ne!(a.config_hash, b.config_hash);
}

#[test]
fn test_every_record_is_consistent() {
    let dataset = generate(&config(11)).unwrap();
    let mut ids = HashSet::new();
    let mut types = HashSet::new();

    for record in &dataset.records {
        assert!(ids.insert(record.cleanup_id.clone()), "duplicate id");
        assert_eq!(record.people, record.adults + record.children);
        assert_eq!(record.item_counts.len(), TRASH_ITEMS.len());
        for (count, (name, max)) in record.item_counts.iter().zip(TRASH_ITEMS.iter()) {
            assert!(count <= max, "{} exceeds max {}", name, max);
        }
        assert_eq!(
            record.total_items(),
            record.item_counts.iter().map(|&c| u64::from(c)).sum::<u64>()
        );

        // GPS strings validate and sit inside their sampling bounds
        let parsed = GeoPoint::parse(&record.gps.to_string()).unwrap();
        assert_eq!(parsed, record.gps);
        assert!(bounds_for(&record.country, record.region()).contains(&record.gps));

        types.insert(record.cleanup_type);
    }
    assert_eq!(types.len(), CleanupType::ALL.len());
}

#[test]
fn test_default_sites_follow_coastline() {
    let config = GeneratorConfig {
        countries: vec!["Canada".to_string(), "Kenya".to_string()],
        reference_date: NaiveDate::from_ymd_opt(2025, 3, 1),
        ..Default::default()
    };
    let dataset = generate(&config).unwrap();
    let canada = dataset.records.iter().filter(|r| r.country == "Canada").count();
    let kenya = dataset.records.iter().filter(|r| r.country == "Kenya").count();
    assert_eq!(canada, 200);
    assert_eq!(kenya, 100);
}

#[test]
fn test_invalid_config_is_rejected() {
    let bad = GeneratorConfig {
        coastline_km_per_site: 0,
        ..config(1)
    };
    assert!(matches!(generate(&bad), Err(GeneratorError::InvalidConfig(_))));
}

#[test]
fn test_relocate_is_deterministic() {
    let table = generate(&config(5)).unwrap().to_table();

    let mut first = table.clone();
    let mut second = table.clone();
    relocate(&mut first, &mut RngManager::new(42)).unwrap();
    relocate(&mut second, &mut RngManager::new(42)).unwrap();
    assert_eq!(first, second);
    assert_ne!(first.column("GPS"), table.column("GPS"));

    let records = first.to_records().unwrap();
    for record in &records {
        assert!(bounds_for(&record.country, record.region()).contains(&record.gps));
    }
}
