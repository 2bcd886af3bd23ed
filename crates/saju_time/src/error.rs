//! Error types for location resolution and time correction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the solar-time corrector.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A birthplace name could not be resolved by any matching strategy.
    LocationNotFound(String),
    /// Time-of-day out of range (hour fraction outside [0, 24)).
    InvalidTime(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocationNotFound(name) => write!(f, "unknown birthplace: {name}"),
            Self::InvalidTime(h) => write!(f, "hour fraction {h} outside [0, 24)"),
        }
    }
}

impl Error for TimeError {}
