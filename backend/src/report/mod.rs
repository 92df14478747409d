//! Text reports over annotated cleanup data
//!
//! Each report is a plain value with a [`std::fmt::Display`] impl, so
//! callers can print it, test its fields, or serialize parts of it.

pub mod format;
pub mod points;
pub mod summary;
pub mod verify;

pub use points::{
    most_efficient_points, most_expensive, point_report, search_country, CostStatistics,
    CountrySearch, PointDetail, PointReport,
};
pub use summary::{
    cost_distribution, summarize, summarize_groups, BandCount, CostBand, CostShare, CostSummary,
    EFFICIENCY_MIN_POUNDS,
};
pub use verify::{verify, Verification};
