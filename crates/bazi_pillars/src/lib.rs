//! Stem/Branch/Pillar types and the year/month/day/hour derivation rules
//! that build a [`FourPillars`] chart.

pub mod derive;
pub mod error;
pub mod four_pillars;
pub mod resolve;
pub mod types;

pub use derive::{day_pillar, hour_branch, hour_pillar, month_index_from_branch, month_pillar, year_pillar};
pub use error::PillarError;
pub use four_pillars::{FourPillars, Position, ALL_POSITIONS};
pub use resolve::{
    bazi_year_for_instant, four_pillars_for_birth, four_pillars_for_true_solar_instant,
    month_branch_for_instant, BirthResolution,
};
pub use types::{
    Branch, Element, HiddenStem, HiddenStemRole, Pillar, Polarity, Stem, ALL_BRANCHES, ALL_STEMS,
};
