//! Generator configuration and fingerprinting

use crate::geo::{country_profile, CountryProfile, COUNTRIES};
use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Parameters of a synthetic dataset
///
/// Two runs with equal configs produce identical records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub min_sites_per_country: u32,
    pub max_sites_per_country: u32,
    /// Kilometres of coastline per generated site, before clamping
    pub coastline_km_per_site: u32,
    /// Last possible cleanup date; `None` means today
    pub reference_date: Option<NaiveDate>,
    /// Dates are drawn from `[reference_date - window, reference_date]`
    pub date_window_days: u32,
    /// Restrict generation to these countries; empty means all
    pub countries: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            min_sites_per_country: 100,
            max_sites_per_country: 200,
            coastline_km_per_site: 100,
            reference_date: None,
            date_window_days: 730,
            countries: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.min_sites_per_country > self.max_sites_per_country {
            return Err(GeneratorError::InvalidConfig(format!(
                "min_sites_per_country ({}) exceeds max_sites_per_country ({})",
                self.min_sites_per_country, self.max_sites_per_country
            )));
        }
        if self.coastline_km_per_site == 0 {
            return Err(GeneratorError::InvalidConfig(
                "coastline_km_per_site must be positive".to_string(),
            ));
        }
        if self
            .end_date()
            .checked_sub_days(Days::new(u64::from(self.date_window_days)))
            .is_none()
        {
            return Err(GeneratorError::InvalidConfig(format!(
                "date window of {} days is out of range",
                self.date_window_days
            )));
        }
        if let Some(unknown) = self.countries.iter().find(|c| country_profile(c).is_none()) {
            return Err(GeneratorError::InvalidConfig(format!(
                "unknown country '{}'",
                unknown
            )));
        }
        Ok(())
    }

    /// Reference date with `None` resolved to today
    pub fn end_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Countries to generate, in catalog order
    pub fn selected_countries(&self) -> Vec<&'static CountryProfile> {
        COUNTRIES
            .iter()
            .filter(|p| self.countries.is_empty() || self.countries.iter().any(|c| c == p.name))
            .collect()
    }

    /// `clamp(coastline_km / coastline_km_per_site, min, max)`
    pub fn sites_for(&self, profile: &CountryProfile) -> u32 {
        (profile.coastline_km / self.coastline_km_per_site.max(1))
            .clamp(self.min_sites_per_country, self.max_sites_per_country)
    }

    /// SHA-256 of the JSON form, identifying datasets built from this config
    pub fn fingerprint(&self) -> Result<String, GeneratorError> {
        let json = serde_json::to_string(self)?;
        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sites_are_clamped() {
        let config = GeneratorConfig::default();
        let canada = country_profile("Canada").unwrap();
        let singapore = country_profile("Singapore").unwrap();
        let india = country_profile("India").unwrap();
        assert_eq!(config.sites_for(canada), 200);
        assert_eq!(config.sites_for(singapore), 100);
        assert_eq!(config.sites_for(india), 100);
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let inverted = GeneratorConfig {
            min_sites_per_country: 10,
            max_sites_per_country: 5,
            ..Default::default()
        };
        assert!(matches!(inverted.validate(), Err(GeneratorError::InvalidConfig(_))));

        let unknown = GeneratorConfig {
            countries: vec!["Atlantis".to_string()],
            ..Default::default()
        };
        assert!(unknown.validate().is_err());

        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_fingerprint_tracks_config() {
        let a = GeneratorConfig::default();
        let b = GeneratorConfig { seed: 7, ..Default::default() };
        assert_eq!(a.fingerprint().unwrap(), a.clone().fingerprint().unwrap());
        assert_ne!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
        assert_eq!(a.fingerprint().unwrap().len(), 64);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"seed": 9, "countries": ["Fiji"]}"#).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.date_window_days, 730);
        assert_eq!(config.selected_countries().len(), 1);
    }
}
