//! Korean lunisolar calendar from first principles.
//!
//! Months run new moon to new moon; the month containing the winter
//! solstice is month 11; in a solstice-to-solstice span of thirteen
//! lunations, the first month after month 11 without a major term is
//! the leap month and repeats its predecessor's number. Day boundaries
//! follow the 135°E civil meridian, which is where the Korean and
//! Chinese calendars occasionally part ways.
//!
//! New-moon instants come from the standard mean-lunation series with
//! the principal periodic corrections (Meeus ch. 49), good to well
//! under a minute over the supported range.

use crate::error::CalendarError;
use crate::julian::{civil_to_jdn, jdn_to_civil};
use crate::solar::{SolarTerm, next_major_term_tt, term_instant_tt, tt_to_ut, ut_to_tt};
use crate::types::CivilDate;

/// Civil meridian the calendar's day boundaries are pinned to.
const CALENDAR_MERIDIAN_HOURS: f64 = 9.0;

/// Supported lunar-calendar year range.
const LUNAR_YEAR_MIN: i32 = 1800;
/// Upper bound of the supported range.
const LUNAR_YEAR_MAX: i32 = 2200;

/// Mean new moon epoch (JDE of lunation k = 0).
const MEAN_NEW_MOON_EPOCH: f64 = 2_451_550.097_66;

/// Mean synodic month in days.
const SYNODIC_MONTH: f64 = 29.530_588_861;

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap_month: bool,
}

/// One assembled lunar month: its number, leap flag, first civil day
/// (as a JDN at the calendar meridian) and length in days (29 or 30).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonth {
    pub number: u32,
    pub is_leap: bool,
    pub start_jdn: i64,
    pub days: u32,
}

// ---------------------------------------------------------------------------
// New moon instants
// ---------------------------------------------------------------------------

/// TT instant of mean-corrected new moon number `k` (k = 0 near
/// 2000-01-06).
fn new_moon_tt(k: i64) -> f64 {
    let kf = k as f64;
    let t = kf / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let jde = MEAN_NEW_MOON_EPOCH + SYNODIC_MONTH * kf + 0.000_154_37 * t2
        - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    // Eccentricity damping of solar terms.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    // Fundamental arguments in degrees.
    let m = 2.5534 + 29.105_356_70 * kf - 0.000_001_4 * t2 - 0.000_000_11 * t3;
    let mp = 201.5643 + 385.816_935_28 * kf + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4;
    let f = 160.7108 + 390.670_502_84 * kf - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4;
    let omega = 124.7746 - 1.563_755_88 * kf + 0.002_067_2 * t2 + 0.000_002_15 * t3;

    let m = m.to_radians();
    let mp = mp.to_radians();
    let f = f.to_radians();
    let omega = omega.to_radians();

    let mut corr = -0.40720 * mp.sin() + 0.17241 * e * m.sin();
    corr += 0.01608 * (2.0 * mp).sin();
    corr += 0.01039 * (2.0 * f).sin();
    corr += 0.00739 * e * (mp - m).sin();
    corr += -0.00514 * e * (mp + m).sin();
    corr += 0.00208 * e * e * (2.0 * m).sin();
    corr += -0.00111 * (mp - 2.0 * f).sin();
    corr += -0.00057 * (mp + 2.0 * f).sin();
    corr += 0.00056 * e * (2.0 * mp + m).sin();
    corr += -0.00042 * (3.0 * mp).sin();
    corr += 0.00042 * e * (m + 2.0 * f).sin();
    corr += 0.00038 * e * (m - 2.0 * f).sin();
    corr += -0.00024 * e * (2.0 * mp - m).sin();
    corr += -0.00017 * omega.sin();
    corr += -0.00007 * (mp + 2.0 * m).sin();

    // Leading planetary corrections.
    let a1 = (299.77 + 0.107_408 * kf - 0.009_173 * t2).to_radians();
    let a2 = (251.88 + 0.016_321 * kf).to_radians();
    corr += 0.000_325 * a1.sin() + 0.000_165 * a2.sin();

    jde + corr
}

/// Lunation number whose mean new moon lies nearest `jd_tt`.
fn nearest_lunation(jd_tt: f64) -> i64 {
    ((jd_tt - MEAN_NEW_MOON_EPOCH) / SYNODIC_MONTH).round() as i64
}

/// Civil day number of a TT instant at the calendar meridian.
fn calendar_jdn(jd_tt: f64) -> i64 {
    (tt_to_ut(jd_tt) + CALENDAR_MERIDIAN_HOURS / 24.0 + 0.5).floor() as i64
}

// ---------------------------------------------------------------------------
// Month assembly
// ---------------------------------------------------------------------------

/// Lunation number and first civil day of month 11 of year `y` (the
/// lunar month whose span of civil days contains the winter solstice).
fn month_eleven(y: i32) -> (i64, i64) {
    let solstice_tt = term_instant_tt(y, SolarTerm::Dongji);
    let solstice_jdn = calendar_jdn(solstice_tt);
    let k0 = nearest_lunation(solstice_tt);
    for k in (k0 - 2)..=(k0 + 2) {
        let start = calendar_jdn(new_moon_tt(k));
        let next = calendar_jdn(new_moon_tt(k + 1));
        if start <= solstice_jdn && solstice_jdn < next {
            return (k, start);
        }
    }
    // The ±2 window always brackets the solstice lunation.
    unreachable!("winter solstice not bracketed by nearby lunations")
}

/// Whether any major term (solar longitude multiple of 30°) falls on a
/// civil day in `[start_jdn, end_jdn)`.
fn has_major_term(start_jdn: i64, end_jdn: i64) -> bool {
    // TT instant of the month's first civil midnight.
    let start_ut = start_jdn as f64 - 0.5 - CALENDAR_MERIDIAN_HOURS / 24.0;
    let (crossing_tt, _) = next_major_term_tt(ut_to_tt(start_ut));
    calendar_jdn(crossing_tt) < end_jdn
}

/// The months of the solstice-to-solstice span ending at month 11 of
/// year `y`, numbered 11, 12, 1, 2, ... with the leap month (if the
/// span holds thirteen lunations) repeating its predecessor's number.
fn span_months(y: i32) -> Vec<LunarMonth> {
    let (ka, _) = month_eleven(y - 1);
    let (kb, _) = month_eleven(y);
    let lunations = (kb - ka) as usize;
    let leap_span = lunations == 13;

    let mut months = Vec::with_capacity(lunations);
    let mut number = 11;
    let mut leap_used = false;
    for i in 0..lunations {
        let start = calendar_jdn(new_moon_tt(ka + i as i64));
        let end = calendar_jdn(new_moon_tt(ka + i as i64 + 1));
        let is_leap = leap_span && !leap_used && i > 0 && !has_major_term(start, end);
        if is_leap {
            leap_used = true;
        } else if i > 0 {
            number = number % 12 + 1;
        }
        months.push(LunarMonth {
            number,
            is_leap,
            start_jdn: start,
            days: (end - start) as u32,
        });
    }
    months
}

/// All months of lunar year `ly` in order: month 1 through month 12,
/// with any leap month in place.
pub fn months_of_lunar_year(ly: i32) -> Result<Vec<LunarMonth>, CalendarError> {
    if !(LUNAR_YEAR_MIN..=LUNAR_YEAR_MAX).contains(&ly) {
        return Err(CalendarError::LunarOutOfRange(ly));
    }
    // Months 1..=10 live in the span ending at this year's solstice;
    // months 11 and 12 open the next span.
    let head = span_months(ly);
    let tail = span_months(ly + 1);

    let mut months: Vec<LunarMonth> = head
        .into_iter()
        .skip_while(|m| !(m.number == 1 && !m.is_leap))
        .collect();
    months.extend(tail.into_iter().take_while(|m| m.number >= 11 || m.is_leap));
    Ok(months)
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// First civil day of lunar year `ly` (Seollal).
pub fn lunar_new_year(ly: i32) -> Result<CivilDate, CalendarError> {
    let months = months_of_lunar_year(ly)?;
    Ok(jdn_to_civil(months[0].start_jdn))
}

/// Convert a lunar date (with leap-month flag) to the civil calendar.
pub fn lunar_to_solar(
    year: i32,
    month: u32,
    day: u32,
    is_leap_month: bool,
) -> Result<CivilDate, CalendarError> {
    let invalid = CalendarError::InvalidLunarDate {
        year,
        month,
        day,
        is_leap_month,
    };
    if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
        return Err(invalid);
    }
    let months = months_of_lunar_year(year)?;
    let m = months
        .iter()
        .find(|m| m.number == month && m.is_leap == is_leap_month)
        .ok_or(invalid.clone())?;
    if day > m.days {
        return Err(invalid);
    }
    Ok(jdn_to_civil(m.start_jdn + day as i64 - 1))
}

/// Convert a civil date to the lunar calendar.
pub fn solar_to_lunar(date: CivilDate) -> Result<LunarDate, CalendarError> {
    let jdn = civil_to_jdn(date);
    let mut ly = date.year;
    let mut months = months_of_lunar_year(ly)?;
    if jdn < months[0].start_jdn {
        ly -= 1;
        months = months_of_lunar_year(ly)?;
    }
    for m in &months {
        if jdn >= m.start_jdn && jdn < m.start_jdn + m.days as i64 {
            return Ok(LunarDate {
                year: ly,
                month: m.number,
                day: (jdn - m.start_jdn + 1) as u32,
                is_leap_month: m.is_leap,
            });
        }
    }
    // Months 1..=12 tile the whole lunar year, so the scan cannot miss
    // once the year guess is fixed up above.
    unreachable!("civil date {date} not covered by lunar year {ly}")
}
