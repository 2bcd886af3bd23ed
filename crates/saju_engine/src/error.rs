//! Error types for the calculation engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_calendar::CalendarError;
use saju_time::TimeError;

/// Errors from chart calculation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    /// Sex code other than `M`/`F`.
    InvalidSex(char),
    /// Error from location resolution or time correction.
    Time(TimeError),
    /// Error from lunar-calendar conversion.
    Calendar(CalendarError),
    /// An internal invariant was violated (a computed pairing fell
    /// outside the sexagenary cycle).
    Calculation(&'static str),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSex(c) => write!(f, "invalid sex code '{c}' (expected M or F)"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
            Self::Calculation(msg) => write!(f, "calculation error: {msg}"),
        }
    }
}

impl Error for EngineError {}

impl From<TimeError> for EngineError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<CalendarError> for EngineError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}
