//! Cost Model
//!
//! This module provides:
//! - Cost rate configuration (`CostRates`)
//! - The per-event calculator and its bulk form (`CostModel`)

pub mod calculator;
pub mod rates;

// Re-exports
pub use calculator::{AnnotatedEvent, CostBreakdown, CostModel, COST_COLUMNS};
pub use rates::{CostRates, DEFAULT_HOURS_PER_PERSON, DEFAULT_VOLUNTEER_HOURLY_RATE};
