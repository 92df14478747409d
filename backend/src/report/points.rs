//! Per-point cost listings and statistics

use super::format::{count, money, thousands};
use crate::aggregate::GroupTotals;
use crate::table::AnalysisRow;
use serde::Serialize;
use std::fmt;

/// Descriptive statistics over per-point total costs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostStatistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (n - 1); 0 with fewer than two values
    pub std_dev: f64,
}

impl CostStatistics {
    /// `None` for an empty slice
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len();
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mean = sorted.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };
        let std_dev = if n < 2 {
            0.0
        } else {
            let squares: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (squares / (n - 1) as f64).sqrt()
        };

        Some(Self {
            count: n,
            mean,
            median,
            min: sorted[0],
            max: sorted[n - 1],
            std_dev,
        })
    }

    /// Statistics of `total_cost` over `rows`
    pub fn of_total_cost(rows: &[AnalysisRow]) -> Option<Self> {
        let values: Vec<f64> = rows.iter().map(|row| row.costs.total_cost).collect();
        Self::from_values(&values)
    }
}

impl fmt::Display for CostStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "COST STATISTICS SUMMARY:")?;
        writeln!(f, "   Average Cost per Point: {}", money(self.mean))?;
        writeln!(f, "   Median Cost per Point: {}", money(self.median))?;
        writeln!(f, "   Min Cost per Point: {}", money(self.min))?;
        writeln!(f, "   Max Cost per Point: {}", money(self.max))?;
        writeln!(f, "   Standard Deviation: {}", money(self.std_dev))
    }
}

/// The `n` rows with the highest total cost; earlier rows win ties
pub fn most_expensive(rows: &[AnalysisRow], n: usize) -> Vec<&AnalysisRow> {
    let mut ranked: Vec<&AnalysisRow> = rows.iter().collect();
    ranked.sort_by(|a, b| b.costs.total_cost.total_cmp(&a.costs.total_cost));
    ranked.truncate(n);
    ranked
}

/// The `n` rows with positive pounds and the lowest cost per pound
pub fn most_efficient_points(rows: &[AnalysisRow], n: usize) -> Vec<&AnalysisRow> {
    let mut ranked: Vec<&AnalysisRow> = rows.iter().filter(|row| row.pounds > 0.0).collect();
    ranked.sort_by(|a, b| a.costs.cost_per_pound.total_cmp(&b.costs.cost_per_pound));
    ranked.truncate(n);
    ranked
}

/// Full cost card for one row
pub struct PointDetail<'a> {
    pub row: &'a AnalysisRow,
}

impl fmt::Display for PointDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.row;
        let c = &row.costs;
        writeln!(f, "CLEANUP POINT #{}", row.index + 1)?;
        writeln!(f, "   Location: {}, {}", row.zone, row.country)?;
        writeln!(f, "   GPS: {}", row.gps)?;
        writeln!(f, "   Date: {}", row.cleanup_date)?;
        writeln!(f, "   Type: {}", row.cleanup_type)?;
        writeln!(f, "   Group: {}", row.group_name)?;

        writeln!(f, "\n   ACTIVITY METRICS:")?;
        writeln!(f, "   People: {}", row.people)?;
        writeln!(f, "   Pounds Collected: {:.2}", row.pounds)?;
        writeln!(f, "   Miles Covered: {:.2}", row.miles)?;
        writeln!(f, "   Bags Used: {}", row.bags)?;

        writeln!(f, "\n   COST BREAKDOWN:")?;
        writeln!(f, "   Volunteer Hours: {:.2}", c.volunteer_hours)?;
        writeln!(f, "   Volunteer Cost: {}", money(c.volunteer_cost))?;
        writeln!(f, "   Equipment Cost: {}", money(c.equipment_cost))?;
        writeln!(f, "   Transportation Cost: {}", money(c.transportation_cost))?;
        writeln!(f, "   Disposal Cost: {}", money(c.disposal_cost))?;
        writeln!(f, "   Administrative Cost: {}", money(c.administrative_cost))?;
        writeln!(f, "   Carbon Cost: {}", money(c.carbon_cost))?;
        writeln!(f, "   TOTAL COST: {}", money(c.total_cost))?;

        writeln!(f, "\n   EFFICIENCY METRICS:")?;
        writeln!(f, "   Cost per Person: {}", money(c.cost_per_person))?;
        writeln!(f, "   Cost per Pound: {}", money(c.cost_per_pound))?;
        writeln!(f, "   Pounds per Person: {:.2}", c.pounds_per_person)?;
        writeln!(f, "   Pounds per Hour: {:.2}", c.pounds_per_hour)?;
        writeln!(f, "   Miles per Person: {:.2}", c.miles_per_person)
    }
}

/// Point listing: the first `limit` cards, statistics and rankings
pub struct PointReport<'a> {
    pub details: Vec<&'a AnalysisRow>,
    pub statistics: Option<CostStatistics>,
    pub most_expensive: Vec<&'a AnalysisRow>,
    pub most_efficient: Vec<&'a AnalysisRow>,
}

pub fn point_report(rows: &[AnalysisRow], limit: usize) -> PointReport<'_> {
    PointReport {
        details: rows.iter().take(limit).collect(),
        statistics: CostStatistics::of_total_cost(rows),
        most_expensive: most_expensive(rows, 10),
        most_efficient: most_efficient_points(rows, 10),
    }
}

impl fmt::Display for PointReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(100))?;
        writeln!(f, "INDIVIDUAL CLEANUP POINT COST ANALYSIS")?;
        writeln!(f, "{}", "=".repeat(100))?;
        for row in &self.details {
            writeln!(f)?;
            write!(f, "{}", PointDetail { row: *row })?;
            writeln!(f, "{}", "-".repeat(100))?;
        }

        if let Some(stats) = &self.statistics {
            writeln!(f)?;
            write!(f, "{}", stats)?;
        }

        writeln!(f, "\nTOP {} MOST EXPENSIVE CLEANUP POINTS:", self.most_expensive.len())?;
        for (i, row) in self.most_expensive.iter().enumerate() {
            writeln!(
                f,
                "   {:2}. {} - {} ({} people, {:.1} lbs)",
                i + 1,
                row.country,
                money(row.costs.total_cost),
                row.people,
                row.pounds
            )?;
        }

        writeln!(
            f,
            "\nTOP {} MOST EFFICIENT CLEANUP POINTS (lowest cost per pound):",
            self.most_efficient.len()
        )?;
        for (i, row) in self.most_efficient.iter().enumerate() {
            writeln!(
                f,
                "   {:2}. {} - {}/lb ({} people, {:.1} lbs)",
                i + 1,
                row.country,
                money(row.costs.cost_per_pound),
                row.people,
                row.pounds
            )?;
        }
        Ok(())
    }
}

/// Rows whose country contains a search term
pub struct CountrySearch<'a> {
    pub query: String,
    pub matches: Vec<&'a AnalysisRow>,
    pub totals: GroupTotals,
}

/// Case-insensitive substring match on the country column
pub fn search_country<'a>(rows: &'a [AnalysisRow], query: &str) -> CountrySearch<'a> {
    let needle = query.to_lowercase();
    let matches: Vec<&AnalysisRow> = rows
        .iter()
        .filter(|row| row.country.to_lowercase().contains(&needle))
        .collect();
    let totals = GroupTotals::from_items(matches.iter().copied());
    CountrySearch {
        query: query.to_string(),
        matches,
        totals,
    }
}

impl fmt::Display for CountrySearch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matches.is_empty() {
            return writeln!(f, "No cleanup points found for country: {}", self.query);
        }
        let t = &self.totals;
        writeln!(f, "CLEANUP POINTS IN {}", self.query.to_uppercase())?;
        writeln!(f, "Found {} cleanup points", self.matches.len())?;
        writeln!(f, "\nCountry Summary:")?;
        writeln!(f, "   Total Cost: {}", money(t.total_cost))?;
        writeln!(f, "   Total People: {}", count(t.people))?;
        writeln!(f, "   Total Pounds: {}", thousands(t.pounds, 2))?;
        writeln!(f, "   Average Cost per Point: {}", money(t.cost_per_event()))?;
        for row in &self.matches {
            writeln!(f, "\n   {} - {}", row.zone, money(row.costs.total_cost))?;
            writeln!(
                f,
                "      Date: {}, People: {}, Pounds: {:.1}",
                row.cleanup_date, row.people, row.pounds
            )?;
        }
        Ok(())
    }
}
