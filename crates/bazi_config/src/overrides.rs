//! The wire format for a caller-supplied configuration override: every
//! field optional, so an override blob only needs to name the tunables
//! it actually changes.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A partial override of [`crate::BaziConfig`]'s tunables. Every field
/// defaults to `None`, meaning "use the built-in default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BaziConfigOverrides {
    pub hidden_stem_primary_weight: Option<f64>,
    pub hidden_stem_middle_weight: Option<f64>,
    pub hidden_stem_residual_weight: Option<f64>,

    pub element_stem_weight: Option<f64>,
    pub element_hidden_primary_weight: Option<f64>,
    pub element_hidden_middle_weight: Option<f64>,
    pub element_hidden_residual_weight: Option<f64>,

    pub strength_strong_threshold: Option<f64>,
    pub strength_weak_threshold: Option<f64>,
}

impl BaziConfigOverrides {
    /// Decode an override from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Decode an override from a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_all_none() {
        let overrides = BaziConfigOverrides::from_toml_str("").unwrap();
        assert_eq!(overrides, BaziConfigOverrides::default());
    }

    #[test]
    fn partial_toml_sets_only_named_fields() {
        let overrides = BaziConfigOverrides::from_toml_str("strength_strong_threshold = 0.6\n").unwrap();
        assert_eq!(overrides.strength_strong_threshold, Some(0.6));
        assert_eq!(overrides.strength_weak_threshold, None);
    }

    #[test]
    fn partial_json_round_trips() {
        let overrides = BaziConfigOverrides::from_json_str(r#"{"element_stem_weight": 1.2}"#).unwrap();
        assert_eq!(overrides.element_stem_weight, Some(1.2));
    }

    #[test]
    fn malformed_toml_reports_an_error() {
        assert!(BaziConfigOverrides::from_toml_str("not = [valid").is_err());
    }
}
