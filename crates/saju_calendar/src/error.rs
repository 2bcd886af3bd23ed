//! Error types for calendar conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from lunar-calendar assembly and conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Requested year is outside the supported lunar-calendar range.
    LunarOutOfRange(i32),
    /// The lunar date does not exist (bad month/day, or a leap month
    /// that does not occur in that year).
    InvalidLunarDate {
        year: i32,
        month: u32,
        day: u32,
        is_leap_month: bool,
    },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LunarOutOfRange(year) => {
                write!(f, "lunar calendar year {year} is out of the supported range")
            }
            Self::InvalidLunarDate {
                year,
                month,
                day,
                is_leap_month,
            } => {
                let leap = if *is_leap_month { "leap " } else { "" };
                write!(f, "invalid lunar date {year}/{leap}{month}/{day}")
            }
        }
    }
}

impl Error for CalendarError {}
