//! The normalized input record `compute` accepts (spec.md §6).

use serde::{Deserialize, Serialize};

/// Whether the calendar fields in [`Input`] are civil (Gregorian) or
/// lunisolar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateType {
    Solar,
    Lunar,
}

/// Whether `hour`/`minute` are the caller's +08 civil clock or have
/// already been reduced to true solar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeType {
    Standard,
    TrueSolar,
}

/// The subject's sex, consumed by the luck-direction rule (spec.md §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
}

impl From<Gender> for bazi_luck::Sex {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => bazi_luck::Sex::Male,
            Gender::Female => bazi_luck::Sex::Female,
        }
    }
}

/// The normalized input record `compute` accepts: a civil or lunar
/// birth moment, the observer's longitude, sex, and the school/
/// convention flags spec.md §6 lists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub date_type: DateType,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Only meaningful when `date_type` is `Lunar`: whether `month` is
    /// the encoded leap-month insertion for `year`.
    #[serde(default)]
    pub is_leap_month: Option<bool>,
    pub hour: u32,
    pub minute: u32,
    pub time_type: TimeType,
    pub gender: Gender,
    /// Decimal degrees, east-positive, in `[-180, 180]`.
    pub longitude: f64,
    /// Whether the civil clock above already includes the historical
    /// 1986-1991 DST offset; only consulted when `time_type` is
    /// `Standard`.
    #[serde(default)]
    pub dst_confirmed: Option<bool>,
    /// Whether the 23:00-23:59 hour belongs to the next day's day
    /// pillar (the "early rat split" convention).
    pub early_rat_split: bool,
}
