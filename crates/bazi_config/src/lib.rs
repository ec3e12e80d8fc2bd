//! Layered configuration for `bazi_core`'s tunable weights and thresholds.
//!
//! Two layers: built-in defaults (mirroring `bazi_elements`'s own
//! `Default` impls, i.e. spec.md's defaults) and an optional
//! [`BaziConfigOverrides`] blob the caller supplies, typically decoded
//! from a TOML or JSON document via [`overrides::BaziConfigOverrides`].
//! `bazi_core::compute` performs no file or environment reads itself —
//! only this two-layer merge, driven entirely by values the caller
//! passes in.

pub mod error;
pub mod overrides;

use bazi_elements::{ElementWeights, StrengthThresholds};

pub use error::ConfigError;
pub use overrides::BaziConfigOverrides;

/// Per-role weight applied when rendering a branch's hidden stems in the
/// result record (spec.md §4.5: "standard weights...normalized per the
/// chosen weighting scheme"). Distinct from `bazi_elements::ElementWeights`,
/// which weighs hidden stems when tallying the five-element score rather
/// than when displaying them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiddenStemWeights {
    pub primary: f64,
    pub middle: f64,
    pub residual: f64,
}

impl Default for HiddenStemWeights {
    fn default() -> Self {
        Self {
            primary: 1.0,
            middle: 0.3,
            residual: 0.1,
        }
    }
}

impl HiddenStemWeights {
    /// The configured weight for a given hidden-stem role.
    pub fn for_role(self, role: bazi_pillars::HiddenStemRole) -> f64 {
        match role {
            bazi_pillars::HiddenStemRole::Primary => self.primary,
            bazi_pillars::HiddenStemRole::Middle => self.middle,
            bazi_pillars::HiddenStemRole::Residual => self.residual,
        }
    }
}

/// The full set of tunables `bazi_core::compute` resolves before running
/// the ornament (L4) and five-element (L6) layers: hidden-stem display
/// weights, the five-element weighting scheme, and the day-master
/// strength thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaziConfig {
    pub hidden_stem_weights: HiddenStemWeights,
    pub element_weights: ElementWeights,
    pub strength_thresholds: StrengthThresholds,
}

impl Default for BaziConfig {
    fn default() -> Self {
        Self {
            hidden_stem_weights: HiddenStemWeights::default(),
            element_weights: ElementWeights::default(),
            strength_thresholds: StrengthThresholds::default(),
        }
    }
}

impl BaziConfig {
    /// Merge `overrides` on top of the built-in defaults.
    pub fn with_overrides(overrides: BaziConfigOverrides) -> Self {
        Self::default().merged_with(overrides)
    }

    /// Merge `overrides` on top of `self`: every `Some` field replaces
    /// the current value, every `None` leaves it untouched. Used by
    /// callers layering more than one override source (e.g. a base file
    /// plus a per-call tweak).
    pub fn merged_with(mut self, overrides: BaziConfigOverrides) -> Self {
        if let Some(w) = overrides.hidden_stem_primary_weight {
            self.hidden_stem_weights.primary = w;
        }
        if let Some(w) = overrides.hidden_stem_middle_weight {
            self.hidden_stem_weights.middle = w;
        }
        if let Some(w) = overrides.hidden_stem_residual_weight {
            self.hidden_stem_weights.residual = w;
        }
        if let Some(w) = overrides.element_stem_weight {
            self.element_weights.stem = w;
        }
        if let Some(w) = overrides.element_hidden_primary_weight {
            self.element_weights.hidden_primary = w;
        }
        if let Some(w) = overrides.element_hidden_middle_weight {
            self.element_weights.hidden_middle = w;
        }
        if let Some(w) = overrides.element_hidden_residual_weight {
            self.element_weights.hidden_residual = w;
        }
        if let Some(t) = overrides.strength_strong_threshold {
            self.strength_thresholds.strong = t;
        }
        if let Some(t) = overrides.strength_weak_threshold {
            self.strength_thresholds.weak = t;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_element_crate_defaults() {
        let config = BaziConfig::default();
        assert_eq!(config.element_weights, ElementWeights::default());
        assert_eq!(config.strength_thresholds, StrengthThresholds::default());
    }

    #[test]
    fn overrides_replace_only_named_fields() {
        let overrides = BaziConfigOverrides {
            strength_strong_threshold: Some(0.6),
            ..Default::default()
        };
        let config = BaziConfig::with_overrides(overrides);
        assert_eq!(config.strength_thresholds.strong, 0.6);
        assert_eq!(
            config.strength_thresholds.weak,
            StrengthThresholds::default().weak
        );
    }

    #[test]
    fn merged_with_layers_over_a_non_default_base() {
        let base = BaziConfig::default().merged_with(BaziConfigOverrides {
            element_stem_weight: Some(1.2),
            ..Default::default()
        });
        let layered = base.merged_with(BaziConfigOverrides {
            strength_weak_threshold: Some(0.3),
            ..Default::default()
        });
        assert_eq!(layered.element_weights.stem, 1.2);
        assert_eq!(layered.strength_thresholds.weak, 0.3);
    }
}
