//! Group aggregation
//!
//! Sums event quantities and costs per group (usually country). Group
//! ratios are derived from the summed totals, never averaged from per-row
//! ratios, so large and small events carry their real weight.

use crate::costs::calculator::ratio;
use crate::costs::{AnnotatedEvent, CostBreakdown};
use crate::error::Result;
use crate::models::CleanupEvent;
use crate::table::{AnalysisRow, Table};
use serde::Serialize;
use std::collections::BTreeMap;

/// Anything carrying an event and its computed costs
pub trait Costed {
    fn event(&self) -> CleanupEvent;
    fn costs(&self) -> &CostBreakdown;
}

impl Costed for AnnotatedEvent {
    fn event(&self) -> CleanupEvent {
        self.event
    }

    fn costs(&self) -> &CostBreakdown {
        &self.costs
    }
}

impl Costed for AnalysisRow {
    fn event(&self) -> CleanupEvent {
        AnalysisRow::event(self)
    }

    fn costs(&self) -> &CostBreakdown {
        &self.costs
    }
}

/// Summed quantities and costs for a set of events
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupTotals {
    pub events: usize,
    pub people: u64,
    pub pounds: f64,
    pub miles: f64,
    pub bags: u64,
    pub volunteer_hours: f64,
    pub volunteer_cost: f64,
    pub total_direct_costs: f64,
    pub carbon_cost: f64,
    pub total_cost: f64,
}

impl GroupTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Totals over every item
    pub fn from_items<'a, T: Costed + 'a>(items: impl IntoIterator<Item = &'a T>) -> Self {
        let mut totals = Self::new();
        for item in items {
            totals.add(&item.event(), item.costs());
        }
        totals
    }

    /// Add one event
    pub fn add(&mut self, event: &CleanupEvent, costs: &CostBreakdown) {
        self.events += 1;
        self.people += u64::from(event.people);
        self.pounds += event.pounds;
        self.miles += event.miles;
        self.bags += u64::from(event.bags);
        self.volunteer_hours += costs.volunteer_hours;
        self.volunteer_cost += costs.volunteer_cost;
        self.total_direct_costs += costs.total_direct_costs;
        self.carbon_cost += costs.carbon_cost;
        self.total_cost += costs.total_cost;
    }

    /// Fold another group's totals into this one
    pub fn merge(&mut self, other: &GroupTotals) {
        self.events += other.events;
        self.people += other.people;
        self.pounds += other.pounds;
        self.miles += other.miles;
        self.bags += other.bags;
        self.volunteer_hours += other.volunteer_hours;
        self.volunteer_cost += other.volunteer_cost;
        self.total_direct_costs += other.total_direct_costs;
        self.carbon_cost += other.carbon_cost;
        self.total_cost += other.total_cost;
    }

    pub fn cost_per_person(&self) -> f64 {
        ratio(self.total_cost, self.people as f64)
    }

    pub fn cost_per_pound(&self) -> f64 {
        ratio(self.total_cost, self.pounds)
    }

    pub fn cost_per_event(&self) -> f64 {
        ratio(self.total_cost, self.events as f64)
    }

    pub fn pounds_per_person(&self) -> f64 {
        ratio(self.pounds, self.people as f64)
    }

    pub fn pounds_per_hour(&self) -> f64 {
        ratio(self.pounds, self.volunteer_hours)
    }

    /// Percentage of `total_cost` contributed by `part`
    pub fn share_of_total(&self, part: f64) -> f64 {
        ratio(part, self.total_cost) * 100.0
    }
}

/// Totals per group key, ordered by key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Groups {
    groups: BTreeMap<String, GroupTotals>,
}

/// Group items by `key`
///
/// # Example
/// ```
/// use cleanup_cost_core::aggregate::group_by;
/// use cleanup_cost_core::{CleanupEvent, CostModel};
///
/// let model = CostModel::default();
/// let rows = model.annotate(&[CleanupEvent::new(2, 5.0, 1.0, 1), CleanupEvent::new(4, 0.0, 0.0, 0)]);
/// let groups = group_by(&rows, |row| if row.event.pounds > 0.0 { "wet" } else { "dry" }.to_string());
/// assert_eq!(groups.len(), 2);
/// ```
pub fn group_by<T: Costed>(items: &[T], key: impl Fn(&T) -> String) -> Groups {
    let mut groups: BTreeMap<String, GroupTotals> = BTreeMap::new();
    for item in items {
        groups
            .entry(key(item))
            .or_default()
            .add(&item.event(), item.costs());
    }
    Groups { groups }
}

/// Group analysis rows by country; blank countries group as `"Unknown"`
pub fn group_by_country(rows: &[AnalysisRow]) -> Groups {
    group_by(rows, |row| {
        let country = row.country.trim();
        if country.is_empty() {
            "Unknown".to_string()
        } else {
            country.to_string()
        }
    })
}

impl Groups {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&GroupTotals> {
        self.groups.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupTotals)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Sum over all groups
    pub fn overall(&self) -> GroupTotals {
        let mut totals = GroupTotals::new();
        for group in self.groups.values() {
            totals.merge(group);
        }
        totals
    }

    /// Groups by descending total cost, ties broken by key
    pub fn rank_by_total_cost(&self, limit: usize) -> Vec<(&str, &GroupTotals)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cost.total_cmp(&a.1.total_cost).then(a.0.cmp(b.0)));
        ranked.truncate(limit);
        ranked
    }

    /// Groups with more than `min_pounds` collected, by ascending cost per pound
    pub fn most_efficient(&self, min_pounds: f64, limit: usize) -> Vec<(&str, &GroupTotals)> {
        let mut ranked: Vec<_> = self.iter().filter(|(_, g)| g.pounds > min_pounds).collect();
        ranked.sort_by(|a, b| {
            a.1.cost_per_pound()
                .total_cmp(&b.1.cost_per_pound())
                .then(a.0.cmp(b.0))
        });
        ranked.truncate(limit);
        ranked
    }

    /// Per-group analysis table, highest total cost first, values rounded to cents
    pub fn to_table(&self, key_header: &str) -> Result<Table> {
        let headers = [
            key_header,
            "events",
            "total_cost",
            "volunteer_cost",
            "total_direct_costs",
            "carbon_cost",
            "People",
            "Pounds",
            "cost_per_event",
            "cost_per_person",
            "cost_per_pound",
            "pounds_per_person",
        ];
        let money = |v: f64| format!("{:.2}", v);
        let rows = self
            .rank_by_total_cost(usize::MAX)
            .into_iter()
            .map(|(key, g)| {
                vec![
                    key.to_string(),
                    g.events.to_string(),
                    money(g.total_cost),
                    money(g.volunteer_cost),
                    money(g.total_direct_costs),
                    money(g.carbon_cost),
                    g.people.to_string(),
                    money(g.pounds),
                    money(g.cost_per_event()),
                    money(g.cost_per_person()),
                    money(g.cost_per_pound()),
                    money(g.pounds_per_person()),
                ]
            })
            .collect();

        Table::from_rows(headers.iter().map(|h| h.to_string()).collect(), rows)
    }
}
