//! Errors for pillar derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from deriving the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PillarError {
    /// A civil-time field (hour, minute) was out of its valid range.
    InvalidField(&'static str),
}

impl Display for PillarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidField(field) => write!(f, "invalid {field}"),
        }
    }
}

impl Error for PillarError {}
