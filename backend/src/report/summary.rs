//! Dataset-level cost summary

use super::format::{count, money, thousands};
use crate::aggregate::{group_by_country, GroupTotals, Groups};
use crate::table::AnalysisRow;
use serde::Serialize;
use std::fmt;

/// Countries need more than this many pounds to be ranked for efficiency
pub const EFFICIENCY_MIN_POUNDS: f64 = 100.0;

/// Total-cost bands for the distribution report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum CostBand {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl CostBand {
    pub const ALL: [CostBand; 5] = [
        CostBand::VeryLow,
        CostBand::Low,
        CostBand::Medium,
        CostBand::High,
        CostBand::VeryHigh,
    ];

    /// Band containing `total_cost`; negative or NaN costs belong to none
    pub fn classify(total_cost: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|band| {
            let (low, high) = band.range();
            total_cost >= low && total_cost < high
        })
    }

    /// Half-open `[low, high)` range
    pub fn range(&self) -> (f64, f64) {
        match self {
            CostBand::VeryLow => (0.0, 100.0),
            CostBand::Low => (100.0, 500.0),
            CostBand::Medium => (500.0, 1000.0),
            CostBand::High => (1000.0, 2000.0),
            CostBand::VeryHigh => (2000.0, f64::INFINITY),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostBand::VeryLow => "Very Low",
            CostBand::Low => "Low",
            CostBand::Medium => "Medium",
            CostBand::High => "High",
            CostBand::VeryHigh => "Very High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandCount {
    pub band: CostBand,
    pub events: usize,
    /// Share of all events, in percent
    pub percent: f64,
}

/// Event counts per [`CostBand`], in band order
pub fn cost_distribution(rows: &[AnalysisRow]) -> Vec<BandCount> {
    let mut counts = [0usize; 5];
    for row in rows {
        if let Some(band) = CostBand::classify(row.costs.total_cost) {
            counts[band as usize] += 1;
        }
    }
    CostBand::ALL
        .into_iter()
        .zip(counts)
        .map(|(band, events)| BandCount {
            band,
            events,
            percent: if rows.is_empty() {
                0.0
            } else {
                events as f64 / rows.len() as f64 * 100.0
            },
        })
        .collect()
}

/// One slice of the total cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostShare {
    pub label: &'static str,
    pub amount: f64,
    pub percent: f64,
}

/// Overview of an annotated dataset
#[derive(Debug, Clone, PartialEq)]
pub struct CostSummary {
    pub totals: GroupTotals,
    pub countries: usize,
    /// Volunteer, direct and carbon slices of the total
    pub shares: Vec<CostShare>,
    pub top_countries: Vec<(String, GroupTotals)>,
    pub most_efficient: Vec<(String, GroupTotals)>,
    pub distribution: Vec<BandCount>,
}

/// Build a summary listing the `top_n` countries by total cost
pub fn summarize(rows: &[AnalysisRow], top_n: usize) -> CostSummary {
    summarize_groups(&group_by_country(rows), rows, top_n)
}

/// [`summarize`] over groups the caller already computed
pub fn summarize_groups(groups: &Groups, rows: &[AnalysisRow], top_n: usize) -> CostSummary {
    let totals = groups.overall();
    let shares = vec![
        CostShare {
            label: "Volunteer Time Value",
            amount: totals.volunteer_cost,
            percent: totals.share_of_total(totals.volunteer_cost),
        },
        CostShare {
            label: "Direct Costs",
            amount: totals.total_direct_costs,
            percent: totals.share_of_total(totals.total_direct_costs),
        },
        CostShare {
            label: "Carbon Footprint Cost",
            amount: totals.carbon_cost,
            percent: totals.share_of_total(totals.carbon_cost),
        },
    ];

    let owned = |ranked: Vec<(&str, &GroupTotals)>| {
        ranked
            .into_iter()
            .map(|(k, g)| (k.to_string(), g.clone()))
            .collect::<Vec<_>>()
    };

    CostSummary {
        countries: groups.len(),
        shares,
        top_countries: owned(groups.rank_by_total_cost(top_n)),
        most_efficient: owned(groups.most_efficient(EFFICIENCY_MIN_POUNDS, 10)),
        distribution: cost_distribution(rows),
        totals,
    }
}

impl fmt::Display for CostSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.totals;
        writeln!(f, "{}", "=".repeat(80))?;
        writeln!(f, "GLOBAL OCEAN CLEANUP COST ANALYSIS REPORT")?;
        writeln!(f, "{}", "=".repeat(80))?;

        writeln!(f, "OVERVIEW:")?;
        writeln!(f, "   Total Cleanup Events: {}", count(t.events as u64))?;
        writeln!(f, "   Total People Involved: {}", count(t.people))?;
        writeln!(f, "   Total Pounds Collected: {}", thousands(t.pounds, 2))?;
        writeln!(f, "   Total Miles Covered: {}", thousands(t.miles, 2))?;
        writeln!(f, "   Total Countries: {}", self.countries)?;

        writeln!(f, "\nCOST BREAKDOWN:")?;
        for share in &self.shares {
            writeln!(
                f,
                "   {}: {} ({:.1}%)",
                share.label,
                money(share.amount),
                share.percent
            )?;
        }
        writeln!(f, "   TOTAL COST: {}", money(t.total_cost))?;

        writeln!(f, "\nEFFICIENCY METRICS:")?;
        writeln!(f, "   Average Cost per Event: {}", money(t.cost_per_event()))?;
        writeln!(f, "   Average Cost per Person: {}", money(t.cost_per_person()))?;
        writeln!(f, "   Average Cost per Pound: {}", money(t.cost_per_pound()))?;
        writeln!(f, "   Average Pounds per Person: {:.2}", t.pounds_per_person())?;
        writeln!(f, "   Average Pounds per Hour: {:.2}", t.pounds_per_hour())?;

        writeln!(f, "\nTOP {} COUNTRIES BY TOTAL COST:", self.top_countries.len())?;
        for (i, (country, g)) in self.top_countries.iter().enumerate() {
            writeln!(f, "   {:2}. {}:", i + 1, country)?;
            writeln!(f, "       Total Cost: {}", money(g.total_cost))?;
            writeln!(f, "       Events: {}", g.events)?;
            writeln!(f, "       People: {}", count(g.people))?;
            writeln!(f, "       Pounds: {}", thousands(g.pounds, 2))?;
            writeln!(f, "       Cost per Event: {}", money(g.cost_per_event()))?;
        }

        writeln!(f, "\nCOST DISTRIBUTION ANALYSIS:")?;
        for band in &self.distribution {
            let (low, high) = band.band.range();
            let upper = if high.is_finite() {
                format!("{}", high)
            } else {
                "inf".to_string()
            };
            writeln!(
                f,
                "   {} Cost (${}-{}): {} events ({:.1}%)",
                band.band.label(),
                low,
                upper,
                band.events,
                band.percent
            )?;
        }

        writeln!(f, "\nMOST EFFICIENT COUNTRIES (by cost per pound):")?;
        for (i, (country, g)) in self.most_efficient.iter().enumerate() {
            writeln!(
                f,
                "   {:2}. {}: ${:.2}/pound, {:.2} lbs/person",
                i + 1,
                country,
                g.cost_per_pound(),
                g.pounds_per_person()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(CostBand::classify(0.0), Some(CostBand::VeryLow));
        assert_eq!(CostBand::classify(99.99), Some(CostBand::VeryLow));
        assert_eq!(CostBand::classify(100.0), Some(CostBand::Low));
        assert_eq!(CostBand::classify(1999.0), Some(CostBand::High));
        assert_eq!(CostBand::classify(2000.0), Some(CostBand::VeryHigh));
        assert_eq!(CostBand::classify(1e12), Some(CostBand::VeryHigh));
        assert_eq!(CostBand::classify(-1.0), None);
        assert_eq!(CostBand::classify(f64::NAN), None);
    }

    #[test]
    fn test_empty_distribution() {
        let bands = cost_distribution(&[]);
        assert_eq!(bands.len(), 5);
        assert!(bands.iter().all(|b| b.events == 0 && b.percent == 0.0));
    }
}
