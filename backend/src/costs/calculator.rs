//! Cost Model
//!
//! Maps one [`CleanupEvent`] to a [`CostBreakdown`] using fixed linear
//! rates. The model holds no mutable state: the same event and rates
//! always yield the same breakdown, and rows never influence each other.
//!
//! # Formulas
//!
//! ```text
//! volunteer_hours     = people × hours_per_person
//! volunteer_cost      = volunteer_hours × volunteer_hourly_rate
//! equipment_cost      = people × equipment_cost_per_person
//! transportation_cost = miles × transportation_cost_per_mile
//! disposal_cost       = pounds × disposal_cost_per_pound
//! administrative_cost = administrative_cost_per_event
//! carbon_tons         = pounds / 2000 × 0.5
//! carbon_cost         = carbon_tons × carbon_cost_per_ton
//! total_cost          = volunteer_cost + total_direct_costs + carbon_cost
//! ```
//!
//! Ratios with a zero denominator are reported as 0.

use super::rates::{CostRates, CO2_TONS_PER_WASTE_TON, POUNDS_PER_TON};
use crate::models::{CleanupEvent, CleanupRecord};
use serde::{Deserialize, Serialize};

/// Output columns appended by the cost model, in order
pub const COST_COLUMNS: [&str; 16] = [
    "volunteer_hours",
    "volunteer_cost",
    "hours_per_person",
    "equipment_cost",
    "transportation_cost",
    "disposal_cost",
    "administrative_cost",
    "total_direct_costs",
    "carbon_footprint_tons",
    "carbon_cost",
    "total_cost",
    "cost_per_pound",
    "cost_per_person",
    "pounds_per_person",
    "pounds_per_hour",
    "miles_per_person",
];

/// Decomposed cost of a single cleanup event (USD unless noted)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    // Volunteer
    pub volunteer_hours: f64,
    pub volunteer_cost: f64,
    pub hours_per_person: f64,

    // Direct
    pub equipment_cost: f64,
    pub transportation_cost: f64,
    pub disposal_cost: f64,
    pub administrative_cost: f64,
    pub total_direct_costs: f64,

    // Environmental
    /// Estimated CO2 (US tons)
    pub carbon_footprint_tons: f64,
    pub carbon_cost: f64,

    // Aggregate
    pub total_cost: f64,
    pub cost_per_pound: f64,
    pub cost_per_person: f64,

    // Efficiency
    pub pounds_per_person: f64,
    pub pounds_per_hour: f64,
    pub miles_per_person: f64,
}

impl CostBreakdown {
    /// Field values in [`COST_COLUMNS`] order
    pub fn values(&self) -> [f64; 16] {
        [
            self.volunteer_hours,
            self.volunteer_cost,
            self.hours_per_person,
            self.equipment_cost,
            self.transportation_cost,
            self.disposal_cost,
            self.administrative_cost,
            self.total_direct_costs,
            self.carbon_footprint_tons,
            self.carbon_cost,
            self.total_cost,
            self.cost_per_pound,
            self.cost_per_person,
            self.pounds_per_person,
            self.pounds_per_hour,
            self.miles_per_person,
        ]
    }

    /// Rebuild a breakdown from values in [`COST_COLUMNS`] order
    pub fn from_values(v: [f64; 16]) -> Self {
        Self {
            volunteer_hours: v[0],
            volunteer_cost: v[1],
            hours_per_person: v[2],
            equipment_cost: v[3],
            transportation_cost: v[4],
            disposal_cost: v[5],
            administrative_cost: v[6],
            total_direct_costs: v[7],
            carbon_footprint_tons: v[8],
            carbon_cost: v[9],
            total_cost: v[10],
            cost_per_pound: v[11],
            cost_per_person: v[12],
            pounds_per_person: v[13],
            pounds_per_hour: v[14],
            miles_per_person: v[15],
        }
    }
}

/// An event together with its computed costs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedEvent {
    pub event: CleanupEvent,
    pub costs: CostBreakdown,
}

/// Stateless cost calculator over a fixed set of [`CostRates`]
///
/// # Example
/// ```
/// use cleanup_cost_core::{CleanupEvent, CostModel};
///
/// let model = CostModel::default();
/// let costs = model.compute(&CleanupEvent::new(25, 150.5, 2.3, 8));
/// assert!((costs.total_cost - 6978.13125).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CostModel {
    rates: CostRates,
}

impl CostModel {
    pub fn new(rates: CostRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &CostRates {
        &self.rates
    }

    /// Compute costs using the configured hours per person
    pub fn compute(&self, event: &CleanupEvent) -> CostBreakdown {
        self.compute_with_hours(event, self.rates.hours_per_person)
    }

    /// Compute costs with an explicit per-person hour count
    pub fn compute_with_hours(&self, event: &CleanupEvent, hours_per_person: f64) -> CostBreakdown {
        let rates = &self.rates;
        let people = f64::from(event.people);
        let pounds = event.pounds;
        let miles = event.miles;

        let volunteer_hours = people * hours_per_person;
        let volunteer_cost = volunteer_hours * rates.volunteer_hourly_rate;

        let equipment_cost = people * rates.equipment_cost_per_person;
        let transportation_cost = miles * rates.transportation_cost_per_mile;
        let disposal_cost = pounds * rates.disposal_cost_per_pound;
        let administrative_cost = rates.administrative_cost_per_event;
        let total_direct_costs =
            equipment_cost + transportation_cost + disposal_cost + administrative_cost;

        // Bag count is deliberately not part of the carbon estimate.
        let carbon_footprint_tons = (pounds / POUNDS_PER_TON) * CO2_TONS_PER_WASTE_TON;
        let carbon_cost = carbon_footprint_tons * rates.carbon_cost_per_ton;

        let total_cost = volunteer_cost + total_direct_costs + carbon_cost;

        CostBreakdown {
            volunteer_hours,
            volunteer_cost,
            hours_per_person,
            equipment_cost,
            transportation_cost,
            disposal_cost,
            administrative_cost,
            total_direct_costs,
            carbon_footprint_tons,
            carbon_cost,
            total_cost,
            cost_per_pound: ratio(total_cost, pounds),
            cost_per_person: ratio(total_cost, people),
            pounds_per_person: ratio(pounds, people),
            pounds_per_hour: ratio(pounds, volunteer_hours),
            miles_per_person: ratio(miles, people),
        }
    }

    /// Annotate every event, preserving input order
    pub fn annotate(&self, events: &[CleanupEvent]) -> Vec<AnnotatedEvent> {
        events
            .iter()
            .map(|event| AnnotatedEvent {
                event: *event,
                costs: self.compute(event),
            })
            .collect()
    }

    /// Annotate full dataset records, preserving input order
    pub fn annotate_records<'a>(
        &self,
        records: &'a [CleanupRecord],
    ) -> Vec<(&'a CleanupRecord, CostBreakdown)> {
        records
            .iter()
            .map(|record| (record, self.compute(&record.event())))
            .collect()
    }
}

/// `numerator / denominator`, or 0 when the denominator is not positive
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
