//! Domain models for cleanup events
//!
//! - [`CleanupEvent`]: the four quantities the cost model reads
//! - [`CleanupRecord`]: one full row of a cleanup dataset

pub mod event;
pub mod record;

// Re-exports
pub use event::{CleanupEvent, BAGS_COLUMN, MILES_COLUMN, MODEL_COLUMNS, PEOPLE_COLUMN, POUNDS_COLUMN};
pub use record::{CleanupRecord, CleanupType, TRASH_ITEMS};
