//! Map-ready data for annotated cleanup points
//!
//! Produces GeoJSON marker features and weighted heat points. Rendering is
//! left to whatever consumes the JSON.

use crate::table::AnalysisRow;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

/// Marker style bucket for a point's total cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTier {
    Under100,
    Under500,
    Under1000,
    Under2000,
    Over2000,
}

impl CostTier {
    /// Tier of `total_cost`; `None` for negative or NaN costs
    pub fn of(total_cost: f64) -> Option<Self> {
        let tier = if total_cost.is_nan() || total_cost < 0.0 {
            return None;
        } else if total_cost < 100.0 {
            CostTier::Under100
        } else if total_cost < 500.0 {
            CostTier::Under500
        } else if total_cost < 1000.0 {
            CostTier::Under1000
        } else if total_cost < 2000.0 {
            CostTier::Under2000
        } else {
            CostTier::Over2000
        };
        Some(tier)
    }

    pub fn color(&self) -> &'static str {
        match self {
            CostTier::Under100 => "green",
            CostTier::Under500 => "yellow",
            CostTier::Under1000 => "orange",
            CostTier::Under2000 => "red",
            CostTier::Over2000 => "darkred",
        }
    }

    /// Marker radius in pixels
    pub fn radius(&self) -> u32 {
        match self {
            CostTier::Under100 => 4,
            CostTier::Under500 => 6,
            CostTier::Under1000 => 8,
            CostTier::Under2000 => 10,
            CostTier::Over2000 => 12,
        }
    }

    /// Legend text
    pub fn legend(&self) -> &'static str {
        match self {
            CostTier::Under100 => "< $100",
            CostTier::Under500 => "$100-$500",
            CostTier::Under1000 => "$500-$1,000",
            CostTier::Under2000 => "$1,000-$2,000",
            CostTier::Over2000 => "> $2,000",
        }
    }
}

/// GeoJSON `FeatureCollection` with one point feature per row.
///
/// Rows whose GPS cell does not parse, or whose total cost has no tier,
/// are skipped.
pub fn marker_features(rows: &[AnalysisRow]) -> Value {
    let features: Vec<Value> = rows
        .iter()
        .filter_map(|row| {
            let point = row.point()?;
            let c = &row.costs;
            let tier = CostTier::of(c.total_cost)?;
            Some(json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [point.lon, point.lat],
                },
                "properties": {
                    "cleanup_id": row.cleanup_id,
                    "country": row.country,
                    "zone": row.zone,
                    "cleanup_date": row.cleanup_date,
                    "people": row.people,
                    "pounds": row.pounds,
                    "miles": row.miles,
                    "tier": tier,
                    "color": tier.color(),
                    "radius": tier.radius(),
                    "legend": tier.legend(),
                    "volunteer_cost": c.volunteer_cost,
                    "total_direct_costs": c.total_direct_costs,
                    "carbon_cost": c.carbon_cost,
                    "total_cost": c.total_cost,
                    "cost_per_person": c.cost_per_person,
                    "cost_per_pound": c.cost_per_pound,
                },
            }))
        })
        .collect();

    debug!(
        markers = features.len(),
        skipped = rows.len() - features.len(),
        "built marker features"
    );

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// `[lat, lon, total_cost]` triples for a cost-weighted heat map
pub fn heat_points(rows: &[AnalysisRow]) -> Vec<[f64; 3]> {
    rows.iter()
        .filter_map(|row| {
            let point = row.point()?;
            Some([point.lat, point.lon, row.costs.total_cost])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::report::CostBand;

    #[test]
    fn test_tier_boundaries() {
        let tier = |cost: f64| CostTier::of(cost).unwrap();
        assert_eq!(tier(0.0).color(), "green");
        assert_eq!(tier(99.99).color(), "green");
        assert_eq!(tier(100.0).color(), "yellow");
        assert_eq!(tier(999.0).radius(), 8);
        assert_eq!(tier(1000.0).color(), "red");
        assert_eq!(tier(2000.0), CostTier::Over2000);
        assert_eq!(tier(2000.0).legend(), "> $2,000");
    }

    #[test]
    fn test_unclassifiable_costs_match_bands() {
        for cost in [f64::NAN, -5.0] {
            assert_eq!(CostTier::of(cost), None);
            assert_eq!(CostBand::classify(cost), None);
        }
    }
}
