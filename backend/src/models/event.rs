//! Cleanup event model
//!
//! The input side of the cost model: headcount, weight collected,
//! distance covered and bag usage for one cleanup.

use serde::{Deserialize, Serialize};

/// Column holding the participant count
pub const PEOPLE_COLUMN: &str = "People";
/// Column holding pounds of waste collected
pub const POUNDS_COLUMN: &str = "Pounds";
/// Column holding miles covered
pub const MILES_COLUMN: &str = "Miles";
/// Column holding the bag count
pub const BAGS_COLUMN: &str = "# of bags";

/// Columns the cost model consumes, in input order
pub const MODEL_COLUMNS: [&str; 4] = [PEOPLE_COLUMN, POUNDS_COLUMN, MILES_COLUMN, BAGS_COLUMN];

/// One recorded waste-collection activity
///
/// # Example
/// ```
/// use cleanup_cost_core::CleanupEvent;
///
/// let event = CleanupEvent::new(25, 150.5, 2.3, 8);
/// assert_eq!(event.people, 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CleanupEvent {
    /// Number of participants
    pub people: u32,

    /// Pounds of waste collected
    pub pounds: f64,

    /// Miles of shoreline or water covered
    pub miles: f64,

    /// Bags filled (recorded, not priced)
    pub bags: u32,
}

impl CleanupEvent {
    pub fn new(people: u32, pounds: f64, miles: f64, bags: u32) -> Self {
        Self {
            people,
            pounds,
            miles,
            bags,
        }
    }

    /// True when a quantity is negative or not finite.
    ///
    /// The cost model still accepts such events; callers use this to
    /// flag suspicious rows.
    pub fn is_suspicious(&self) -> bool {
        !(self.pounds.is_finite() && self.miles.is_finite())
            || self.pounds < 0.0
            || self.miles < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_event_is_all_zero() {
        let event = CleanupEvent::default();
        assert_eq!(event, CleanupEvent::new(0, 0.0, 0.0, 0));
        assert!(!event.is_suspicious());
    }

    #[test]
    fn test_negative_and_nan_quantities_are_suspicious() {
        assert!(CleanupEvent::new(1, -3.0, 1.0, 0).is_suspicious());
        assert!(CleanupEvent::new(1, 3.0, -0.5, 0).is_suspicious());
        assert!(CleanupEvent::new(1, f64::NAN, 1.0, 0).is_suspicious());
        assert!(!CleanupEvent::new(1, 3.0, 1.0, 0).is_suspicious());
    }
}
