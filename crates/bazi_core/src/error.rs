//! The public error taxonomy `compute` surfaces (spec.md §7): three
//! kinds, each relaying the lower crates' errors the same way
//! `SearchError::from(VedicError)` does in the teacher codebase.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_calendar::CalendarError;
use bazi_pillars::PillarError;
use bazi_time::TimeError;

/// Errors `compute` can return. No internal failure is swallowed,
/// retried, or logged — every failure surfaces here with an enumerated
/// kind and a human-readable message.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoreError {
    /// Civil year, lunar year, longitude, or solar-term index fell
    /// outside its supported range.
    OutOfRange(String),
    /// `isLeapMonth=true` named a month that isn't the encoded leap
    /// insertion, or a lunar day exceeded its month's length.
    InvalidLunarDate(String),
    /// A structurally malformed input: a field out of its valid range,
    /// or a non-finite number.
    InvalidInput(String),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(msg) => write!(f, "out of range: {msg}"),
            Self::InvalidLunarDate(msg) => write!(f, "invalid lunar date: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for CoreError {}

impl From<TimeError> for CoreError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::YearOutOfRange(y) => Self::OutOfRange(format!("year {y} is outside [1900, 2100]")),
            TimeError::InvalidField(field) => Self::InvalidInput(format!("invalid {field}")),
        }
    }
}

impl From<PillarError> for CoreError {
    fn from(e: PillarError) -> Self {
        match e {
            PillarError::InvalidField(field) => Self::InvalidInput(format!("invalid {field}")),
        }
    }
}

impl From<CalendarError> for CoreError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::YearOutOfRange(y) => {
                Self::OutOfRange(format!("lunar year {y} is outside [1900, 2100]"))
            }
            CalendarError::InvalidLunarMonth { year, month } => {
                Self::InvalidLunarDate(format!("lunar month {month} does not exist in year {year}"))
            }
            CalendarError::InvalidLunarDay { year, month, day } => Self::InvalidLunarDate(format!(
                "lunar day {day} does not exist in year {year} month {month}"
            )),
        }
    }
}
