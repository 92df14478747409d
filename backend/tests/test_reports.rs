//! Report and Map Tests
//!
//! Reports are checked through their fields first and their rendered
//! text second, so formatting changes do not hide arithmetic errors.

use cleanup_cost_core::map::{heat_points, marker_features, CostTier};
use cleanup_cost_core::report::{
    point_report, search_country, summarize, verify, CostBand, CostStatistics,
};
use cleanup_cost_core::{analysis_rows, enrich, AnalysisRow, Continent, CostModel, Table};

const DATASET: &str = "\
Cleanup ID,Zone,Country,GPS,Cleanup Date,People,Pounds,Miles,# of bags,Total Items Collected
A1,\"Goa, India\",India,\"15.1, 73.9\",01/02/2024,25,150.5,2.3,8,40
A2,\"Kerala, India\",India,\"10.0, 76.5\",02/03/2024,2,80,1,2,12
A3,\"Lamu, Kenya\",Kenya,\"-2.3, 40.9\",03/04/2024,1,0,0,0,0
A4,\"Bali, Indonesia\",Indonesia,not-a-point,04/05/2024,40,500,4,10,300
";

fn rows() -> Vec<AnalysisRow> {
    let table = Table::parse(DATASET).unwrap();
    let enriched = enrich(table, &CostModel::default()).unwrap().table;
    analysis_rows(&enriched, &CostModel::default()).unwrap()
}

#[test]
fn test_summary_totals_and_shares() {
    let rows = rows();
    let summary = summarize(&rows, 15);

    assert_eq!(summary.totals.events, 4);
    assert_eq!(summary.totals.people, 68);
    assert_eq!(summary.countries, 3);

    let share_sum: f64 = summary.shares.iter().map(|s| s.percent).sum();
    assert!((share_sum - 100.0).abs() < 1e-9);

    assert_eq!(summary.top_countries[0].0, "Indonesia");
    let banded: usize = summary.distribution.iter().map(|b| b.events).sum();
    assert_eq!(banded, 4);
    // Kenya has no pounds, so it cannot rank for efficiency
    assert!(summary.most_efficient.iter().all(|(c, _)| c != "Kenya"));

    let text = summary.to_string();
    assert!(text.contains("Total Cleanup Events: 4"));
    assert!(text.contains("Very High Cost"));
}

#[test]
fn test_distribution_bands() {
    let rows = rows();
    let bands = cleanup_cost_core::report::cost_distribution(&rows);
    let count = |band: CostBand| bands.iter().find(|b| b.band == band).unwrap().events;

    // A3 costs $302.10, A2 $592.70, A1 and A4 well above $2,000
    assert_eq!(count(CostBand::VeryLow), 0);
    assert_eq!(count(CostBand::Low), 1);
    assert_eq!(count(CostBand::Medium), 1);
    assert_eq!(count(CostBand::VeryHigh), 2);
}

#[test]
fn test_point_report_rankings() {
    let rows = rows();
    let report = point_report(&rows, 2);

    assert_eq!(report.details.len(), 2);
    assert_eq!(report.most_expensive[0].cleanup_id, "A4");
    assert_eq!(report.most_expensive.len(), 4);
    // A3 collected nothing, so it is not an efficiency candidate
    assert_eq!(report.most_efficient.len(), 3);
    assert!(report.most_efficient.iter().all(|r| r.pounds > 0.0));

    let stats = report.statistics.unwrap();
    let direct = CostStatistics::of_total_cost(&rows).unwrap();
    assert_eq!(stats, direct);
    assert!(stats.min <= stats.median && stats.median <= stats.max);

    let text = report.to_string();
    assert!(text.contains("CLEANUP POINT #1"));
    assert!(text.contains("CLEANUP POINT #2"));
    assert!(!text.contains("CLEANUP POINT #3"));
}

#[test]
fn test_country_search_is_case_insensitive() {
    let rows = rows();
    let found = search_country(&rows, "iNdI");
    assert_eq!(found.matches.len(), 2);
    assert_eq!(found.totals.people, 27);

    let none = search_country(&rows, "Atlantis");
    assert!(none.matches.is_empty());
    assert!(none.to_string().contains("No cleanup points found"));
}

#[test]
fn test_verification_of_raw_table() {
    let table = Table::parse(DATASET).unwrap();
    let report = verify(&table);

    assert_eq!(report.records, 4);
    assert_eq!(report.valid_gps, 3);
    assert_eq!(report.invalid_gps, 1);
    assert_eq!(report.countries(), 3);
    assert_eq!(report.country_counts[0], ("India".to_string(), 2));
    assert_eq!(report.items_present, 4);
    assert_eq!(report.total_items, 352.0);
    assert!(report.continent_counts.iter().any(|(c, n)| *c == Continent::Asia && *n == 3));
    assert_eq!(report.samples[&Continent::Asia].len(), 3);
}

#[test]
fn test_map_features_skip_invalid_gps() {
    let rows = rows();
    let geojson = marker_features(&rows);

    let features = geojson["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    assert_eq!(geojson["type"], "FeatureCollection");

    let first = &features[0];
    assert_eq!(first["geometry"]["coordinates"][0], 73.9);
    assert_eq!(first["geometry"]["coordinates"][1], 15.1);
    assert_eq!(first["properties"]["color"], CostTier::Over2000.color());
    assert_eq!(first["properties"]["radius"], 12);
    assert_eq!(first["properties"]["legend"], "> $2,000");

    let heat = heat_points(&rows);
    assert_eq!(heat.len(), 3);
    assert_eq!(heat[2][0], -2.3);
    assert!((heat[0][2] - rows[0].costs.total_cost).abs() < 1e-9);
}
