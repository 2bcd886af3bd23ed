//! Political time zones and their offset history.
//!
//! Only the zones the city directory references are modeled. The
//! Korean zone carries its documented meridian changes; the difference
//! between the offset in force at a birth date and the nominal offset
//! is the fixed regional component of the time correction.

use serde::{Deserialize, Serialize};

use saju_calendar::CivilDate;

/// Political time zones referenced by the city directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    /// Korea Standard Time (UTC+9).
    KoreaStandard,
    /// Japan Standard Time (UTC+9).
    JapanStandard,
    /// China Standard Time (UTC+8).
    ChinaStandard,
    /// US Eastern Standard Time (UTC-5).
    UsEastern,
    /// US Pacific Standard Time (UTC-8).
    UsPacific,
    /// Greenwich Mean Time (UTC+0).
    Greenwich,
    /// Central European Time (UTC+1).
    CentralEuropean,
}

impl ZoneId {
    /// Nominal civil UTC offset in minutes.
    pub const fn utc_offset_minutes(self) -> i32 {
        match self {
            Self::KoreaStandard | Self::JapanStandard => 540,
            Self::ChinaStandard => 480,
            Self::UsEastern => -300,
            Self::UsPacific => -480,
            Self::Greenwich => 0,
            Self::CentralEuropean => 60,
        }
    }

    /// Civil UTC offset in force on a given date.
    ///
    /// Korea ran UTC+8:30 from 1908-04-01, +9:00 from 1912-01-01,
    /// +8:30 again from 1954-03-21, and +9:00 from 1961-08-10. All
    /// other modeled zones are treated as fixed.
    pub fn utc_offset_minutes_on(self, date: CivilDate) -> i32 {
        match self {
            Self::KoreaStandard => {
                let d = (date.year, date.month, date.day);
                if d >= (1961, 8, 10) {
                    540
                } else if d >= (1954, 3, 21) {
                    510
                } else if d >= (1912, 1, 1) {
                    540
                } else if d >= (1908, 4, 1) {
                    510
                } else {
                    540
                }
            }
            _ => self.utc_offset_minutes(),
        }
    }

    /// Meridian (degrees east) implied by the nominal offset.
    pub fn nominal_meridian_deg(self) -> f64 {
        self.utc_offset_minutes() as f64 / 4.0
    }
}
