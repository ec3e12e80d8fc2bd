//! The weighting scheme used to turn a chart's stems and hidden stems
//! into a five-element score. Configurable so `bazi_config` can supply
//! an override; these are the spec's defaults.

use bazi_pillars::HiddenStemRole;

/// Per-role weight applied when tallying element contributions: a
/// chart's own four stems always count at `stem`; each branch's hidden
/// stems count at `hidden_primary`/`hidden_middle`/`hidden_residual`
/// according to their [`HiddenStemRole`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementWeights {
    pub stem: f64,
    pub hidden_primary: f64,
    pub hidden_middle: f64,
    pub hidden_residual: f64,
}

impl Default for ElementWeights {
    fn default() -> Self {
        Self {
            stem: 1.0,
            hidden_primary: 0.7,
            hidden_middle: 0.3,
            hidden_residual: 0.1,
        }
    }
}

impl ElementWeights {
    pub(crate) fn hidden_weight(self, role: HiddenStemRole) -> f64 {
        match role {
            HiddenStemRole::Primary => self.hidden_primary,
            HiddenStemRole::Middle => self.hidden_middle,
            HiddenStemRole::Residual => self.hidden_residual,
        }
    }
}
