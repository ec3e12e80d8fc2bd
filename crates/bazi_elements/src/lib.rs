//! Weighted five-element count/score over a chart, and day-master
//! strength classification.

pub mod strength;
pub mod tally;
pub mod weights;

pub use strength::{day_master_strength, Strength, StrengthAnalysis, StrengthThresholds};
pub use tally::{element_tally, ElementTally};
pub use weights::ElementWeights;
