//! Cost Rates
//!
//! Fixed rates applied by the cost model. All monetary values are USD.
//! Rates are immutable once handed to a [`CostModel`](super::CostModel);
//! alternate rates mean a new model, never a mutated global.

use crate::error::{CleanupError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Independent Sector volunteer time value (USD/hour)
pub const DEFAULT_VOLUNTEER_HOURLY_RATE: f64 = 25.43;

/// Average monthly volunteer hours, spread over three cleanups
pub const DEFAULT_HOURS_PER_PERSON: f64 = 32.1 / 3.0;

/// Pounds in one US (short) ton
pub const POUNDS_PER_TON: f64 = 2000.0;

/// Tons of CO2 attributed to one ton of collected waste
pub const CO2_TONS_PER_WASTE_TON: f64 = 0.5;

/// Cost Rates Configuration
///
/// Every field falls back to its default when omitted from a rates file,
/// so a JSON override only needs to name the rates it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostRates {
    /// Economic value of one volunteer hour (USD/hour)
    pub volunteer_hourly_rate: f64,

    /// Gloves, bags and tools per participant (USD/person)
    pub equipment_cost_per_person: f64,

    /// Transportation per mile covered (USD/mile)
    pub transportation_cost_per_mile: f64,

    /// Flat administrative cost per event (USD/event)
    pub administrative_cost_per_event: f64,

    /// Waste disposal per pound collected (USD/pound)
    pub disposal_cost_per_pound: f64,

    /// Social cost of carbon (USD/ton CO2)
    pub carbon_cost_per_ton: f64,

    /// Hours each volunteer contributes when the event does not say
    pub hours_per_person: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            volunteer_hourly_rate: DEFAULT_VOLUNTEER_HOURLY_RATE,
            equipment_cost_per_person: 5.00,
            transportation_cost_per_mile: 0.50,
            administrative_cost_per_event: 25.00,
            disposal_cost_per_pound: 0.15,
            carbon_cost_per_ton: 50.00,
            hours_per_person: DEFAULT_HOURS_PER_PERSON,
        }
    }
}

impl CostRates {
    /// Parse rates from a JSON document, then validate them
    pub fn from_json(json: &str) -> Result<Self> {
        let rates: CostRates = serde_json::from_str(json)?;
        rates.validate()?;
        Ok(rates)
    }

    /// Load rates from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CleanupError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Reject negative or non-finite rates
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("volunteer_hourly_rate", self.volunteer_hourly_rate),
            ("equipment_cost_per_person", self.equipment_cost_per_person),
            ("transportation_cost_per_mile", self.transportation_cost_per_mile),
            ("administrative_cost_per_event", self.administrative_cost_per_event),
            ("disposal_cost_per_pound", self.disposal_cost_per_pound),
            ("carbon_cost_per_ton", self.carbon_cost_per_ton),
            ("hours_per_person", self.hours_per_person),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(CleanupError::InvalidRates(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
            if value < 0.0 {
                return Err(CleanupError::InvalidRates(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_rates_default() {
        let rates = CostRates::default();
        assert_eq!(rates.volunteer_hourly_rate, 25.43);
        assert_eq!(rates.equipment_cost_per_person, 5.0);
        assert_eq!(rates.transportation_cost_per_mile, 0.5);
        assert_eq!(rates.administrative_cost_per_event, 25.0);
        assert_eq!(rates.disposal_cost_per_pound, 0.15);
        assert_eq!(rates.carbon_cost_per_ton, 50.0);
        assert!((rates.hours_per_person - 10.7).abs() < 1e-12);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let rates = CostRates::from_json(r#"{"carbon_cost_per_ton": 80.0}"#).unwrap();
        assert_eq!(rates.carbon_cost_per_ton, 80.0);
        assert_eq!(rates.volunteer_hourly_rate, DEFAULT_VOLUNTEER_HOURLY_RATE);
        assert_eq!(rates.administrative_cost_per_event, 25.0);
    }

    #[test]
    fn test_negative_rate_rejected() {
        let err = CostRates::from_json(r#"{"disposal_cost_per_pound": -0.1}"#).unwrap_err();
        assert!(matches!(err, CleanupError::InvalidRates(_)));
        assert!(err.to_string().contains("disposal_cost_per_pound"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = CostRates::from_json("{not json").unwrap_err();
        assert!(matches!(err, CleanupError::RatesFormat(_)));
    }

    #[test]
    fn test_cost_rates_serialize_deserialize() {
        let rates = CostRates {
            volunteer_hourly_rate: 30.0,
            ..CostRates::default()
        };
        let json = serde_json::to_string(&rates).unwrap();
        let restored: CostRates = serde_json::from_str(&json).unwrap();
        assert_eq!(rates, restored);
    }

    #[test]
    fn test_default_rates_survive_json() {
        let rates = CostRates::default();
        let json = serde_json::to_string(&rates).unwrap();
        let restored = CostRates::from_json(&json).unwrap();
        assert_eq!(restored.hours_per_person, DEFAULT_HOURS_PER_PERSON);
        assert_eq!(rates, restored);
    }
}
