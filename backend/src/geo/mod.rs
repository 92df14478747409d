//! Geographic helpers
//!
//! GPS strings in cleanup datasets are `"lat, lon"` pairs in decimal
//! degrees. This module parses and validates them, samples points inside
//! rectangular bounds and maps countries to continents.

pub mod catalog;

pub use catalog::{country_profile, region_bounds, CountryProfile, COUNTRIES};

use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Decimal places kept for generated coordinates
pub const COORDINATE_PRECISION: i32 = 6;

/// Bounds used when neither region nor country bounds are known
pub const FALLBACK_BOUNDS: Bounds = Bounds::new((-60.0, 60.0), (-180.0, 180.0));

/// Reasons a GPS string fails validation
#[derive(Debug, Error, PartialEq)]
pub enum GpsError {
    #[error("GPS value is empty")]
    Empty,

    #[error("expected 'lat, lon', found {0} components")]
    WrongArity(usize),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("coordinate ({lat}, {lon}) is outside valid latitude/longitude ranges")]
    OutOfRange { lat: f64, lon: f64 },
}

/// A validated latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Build a point, checking `-90 <= lat <= 90` and `-180 <= lon <= 180`
    pub fn new(lat: f64, lon: f64) -> Result<Self, GpsError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(GpsError::OutOfRange { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// Parse a `"lat, lon"` string
    ///
    /// # Example
    /// ```
    /// use cleanup_cost_core::geo::GeoPoint;
    ///
    /// let point = GeoPoint::parse("34.05, -118.25").unwrap();
    /// assert_eq!(point.lat, 34.05);
    /// assert!(GeoPoint::parse("91.0, 0.0").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, GpsError> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("nan") {
            return Err(GpsError::Empty);
        }

        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != 2 {
            return Err(GpsError::WrongArity(parts.len()));
        }

        let parse_component = |s: &str| {
            s.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| GpsError::InvalidNumber(s.to_string()))
        };

        Self::new(parse_component(parts[0])?, parse_component(parts[1])?)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}

/// Rectangular latitude/longitude bounds
///
/// A longitude range whose minimum exceeds its maximum wraps across the
/// antimeridian, e.g. `(177.0, -178.1)` for Fiji.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lat: (f64, f64),
    pub lon: (f64, f64),
}

impl Bounds {
    pub const fn new(lat: (f64, f64), lon: (f64, f64)) -> Self {
        Self { lat, lon }
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.lon.0 > self.lon.1
    }

    /// Sample a uniform point inside the bounds, rounded to
    /// [`COORDINATE_PRECISION`] decimal places
    pub fn sample(&self, rng: &mut RngManager) -> GeoPoint {
        let lat = rng.uniform(self.lat.0, self.lat.1);

        let lon = if self.crosses_antimeridian() {
            let raw = rng.uniform(self.lon.0, self.lon.1 + 360.0);
            if raw > 180.0 {
                raw - 360.0
            } else {
                raw
            }
        } else {
            rng.uniform(self.lon.0, self.lon.1)
        };

        GeoPoint {
            lat: round_coordinate(lat),
            lon: round_coordinate(lon),
        }
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        let lat_ok = point.lat >= self.lat.0 && point.lat <= self.lat.1;
        let lon_ok = if self.crosses_antimeridian() {
            point.lon >= self.lon.0 || point.lon <= self.lon.1
        } else {
            point.lon >= self.lon.0 && point.lon <= self.lon.1
        };
        lat_ok && lon_ok
    }
}

fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(COORDINATE_PRECISION);
    (value * scale).round() / scale
}

/// Continent grouping used by dataset verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Continent {
    NorthAmerica,
    SouthAmerica,
    Europe,
    Asia,
    Africa,
    Oceania,
    Other,
}

impl Continent {
    pub fn label(&self) -> &'static str {
        match self {
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Europe => "Europe",
            Continent::Asia => "Asia",
            Continent::Africa => "Africa",
            Continent::Oceania => "Oceania",
            Continent::Other => "Other",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Continent for a country name; unknown countries map to `Other`
pub fn continent_of(country: &str) -> Continent {
    country_profile(country)
        .map(|profile| profile.continent)
        .unwrap_or(Continent::Other)
}

/// Bounds for a country/region pair
///
/// Region bounds win over country bounds; unknown countries fall back to
/// [`FALLBACK_BOUNDS`].
pub fn bounds_for(country: &str, region: &str) -> Bounds {
    region_bounds(country, region)
        .or_else(|| country_profile(country).map(|profile| profile.bounds))
        .unwrap_or(FALLBACK_BOUNDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_gps() {
        let point = GeoPoint::parse(" -33.8688, 151.2093 ").unwrap();
        assert_eq!(point, GeoPoint { lat: -33.8688, lon: 151.2093 });
    }

    #[test]
    fn test_parse_rejects_malformed_gps() {
        assert_eq!(GeoPoint::parse(""), Err(GpsError::Empty));
        assert_eq!(GeoPoint::parse("nan"), Err(GpsError::Empty));
        assert_eq!(GeoPoint::parse("1.0"), Err(GpsError::WrongArity(1)));
        assert_eq!(GeoPoint::parse("1, 2, 3"), Err(GpsError::WrongArity(3)));
        assert_eq!(
            GeoPoint::parse("north, 2"),
            Err(GpsError::InvalidNumber("north".to_string()))
        );
        assert!(matches!(
            GeoPoint::parse("10.0, 181.0"),
            Err(GpsError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_display_round_trips() {
        let point = GeoPoint::new(12.345678, -98.7).unwrap();
        assert_eq!(point.to_string(), "12.345678, -98.7");
        assert_eq!(GeoPoint::parse(&point.to_string()).unwrap(), point);
    }

    #[test]
    fn test_sample_stays_in_bounds() {
        let bounds = Bounds::new((20.0, 24.0), (68.0, 72.0));
        let mut rng = RngManager::new(7);
        for _ in 0..500 {
            let point = bounds.sample(&mut rng);
            assert!(bounds.contains(&point), "{} escaped bounds", point);
        }
    }

    #[test]
    fn test_antimeridian_sampling_wraps() {
        let fiji = Bounds::new((-20.7, -16.0), (177.0, -178.1));
        assert!(fiji.crosses_antimeridian());

        let mut rng = RngManager::new(11);
        for _ in 0..500 {
            let point = fiji.sample(&mut rng);
            assert!(point.lon >= 177.0 || point.lon <= -178.1, "lon {}", point.lon);
            assert!(GeoPoint::new(point.lat, point.lon).is_ok());
        }
    }

    #[test]
    fn test_continent_lookup() {
        assert_eq!(continent_of("Kenya"), Continent::Africa);
        assert_eq!(continent_of("Norway"), Continent::Europe);
        assert_eq!(continent_of("Atlantis"), Continent::Other);
    }

    #[test]
    fn test_bounds_prefer_region() {
        let kerala = bounds_for("India", "Kerala");
        assert_eq!(kerala, Bounds::new((8.0, 12.0), (76.0, 77.5)));

        let india = bounds_for("India", "Somewhere");
        assert_eq!(india, Bounds::new((6.7, 37.1), (68.2, 97.4)));

        assert_eq!(bounds_for("Atlantis", "Deep"), FALLBACK_BOUNDS);
    }
}
