//! Cleanup Cost Core
//!
//! Estimates the economic and environmental cost of coastal cleanup events
//! and builds summaries, map data and synthetic datasets around that model.
//!
//! # Architecture
//!
//! - **costs**: Rate table and the per-event cost model
//! - **models**: Domain types (CleanupEvent, CleanupRecord)
//! - **table**: CSV tables, cost enrichment, typed row views
//! - **aggregate**: Per-group totals and rankings
//! - **report**: Text reports (summary, points, verification)
//! - **map**: GeoJSON markers and heat points
//! - **geo**: Coordinates, bounds, country catalog
//! - **generator**: Synthetic dataset generation
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. Cost computation is pure; the same event and rates give the same breakdown
//! 2. Ratios with a non-positive denominator are 0, never NaN or infinite
//! 3. All randomness is deterministic (seeded RNG)

pub mod aggregate;
pub mod costs;
pub mod error;
pub mod generator;
pub mod geo;
pub mod map;
pub mod models;
pub mod report;
pub mod rng;
pub mod table;

// Re-exports for convenience
pub use aggregate::{group_by, group_by_country, Costed, GroupTotals, Groups};
pub use costs::{AnnotatedEvent, CostBreakdown, CostModel, CostRates, COST_COLUMNS};
pub use error::{CleanupError, Result};
pub use generator::{generate, relocate, GeneratedDataset, GeneratorConfig, GeneratorError};
pub use geo::{Continent, GeoPoint, GpsError};
pub use models::{CleanupEvent, CleanupRecord, CleanupType};
pub use rng::RngManager;
pub use table::{
    analysis_rows, analysis_rows_from, enrich, AnalysisRow, CostSource, Enriched, Table,
};
