//! Julian-day arithmetic with the 1582 calendar transition.
//!
//! The continuous day count is the backbone of the engine: the day
//! pillar is a pure modulo over it, and every astronomical instant is a
//! fractional JD. Dates before 1582-10-15 are interpreted in the Julian
//! calendar, from then on in the Gregorian calendar, so the count stays
//! continuous across the transition.

use crate::types::{CivilDate, CivilDateTime};

/// JDN of 1582-10-15, the first Gregorian day.
const GREGORIAN_START_JDN: i64 = 2_299_161;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian day number (noon-based) of a civil date.
pub fn civil_to_jdn(date: CivilDate) -> i64 {
    let y = date.year as i64;
    let m = date.month as i64;
    let d = date.day as i64;
    let a = (14 - m) / 12;
    let yy = y + 4800 - a;
    let mm = m + 12 * a - 3;
    let core = d + (153 * mm + 2) / 5 + 365 * yy + yy / 4;

    let gregorian = (y, m, d) >= (1582, 10, 15);
    if gregorian {
        core - yy / 100 + yy / 400 - 32045
    } else {
        core - 32083
    }
}

/// Civil date of a Julian day number (inverse of [`civil_to_jdn`]).
pub fn jdn_to_civil(jdn: i64) -> CivilDate {
    let (b, c) = if jdn >= GREGORIAN_START_JDN {
        let a = jdn + 32044;
        let b = (4 * a + 3) / 146097;
        (b, a - 146097 * b / 4)
    } else {
        (0, jdn + 32082)
    };
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    CivilDate {
        day: (e - (153 * m + 2) / 5 + 1) as u32,
        month: (m + 3 - 12 * (m / 10)) as u32,
        year: (100 * b + d - 4800 + m / 10) as i32,
    }
}

/// Fractional Julian Date of a civil date + fractional hour.
///
/// The result is in whatever timescale the civil time is expressed in;
/// this function performs no timescale conversion.
pub fn jd_from_civil(date: CivilDate, hour_fraction: f64) -> f64 {
    civil_to_jdn(date) as f64 - 0.5 + hour_fraction / 24.0
}

/// Civil date/time of a fractional Julian Date.
pub fn civil_from_jd(jd: f64) -> CivilDateTime {
    let jdn = (jd + 0.5).floor() as i64;
    let date = jdn_to_civil(jdn);
    let frac = jd + 0.5 - jdn as f64;
    let total_seconds = frac * 86_400.0;
    let hour = (total_seconds / 3600.0).floor() as u32;
    let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
    let second = total_seconds % 60.0;
    CivilDateTime {
        date,
        hour: hour.min(23),
        minute,
        second,
    }
}

/// Day of week of a Julian day number (0 = Sunday .. 6 = Saturday).
pub fn day_of_week(jdn: i64) -> u8 {
    ((jdn + 1).rem_euclid(7)) as u8
}

/// Shift a civil date by a signed number of days.
pub fn add_days(date: CivilDate, days: i64) -> CivilDate {
    jdn_to_civil(civil_to_jdn(date) + days)
}

/// Leap-year predicate under the calendar in force for that year.
pub fn is_leap_year(year: i32) -> bool {
    if year < 1582 {
        year % 4 == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

/// Number of days in a civil month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
