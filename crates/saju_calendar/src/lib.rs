//! Calendar mathematics for four-pillars calculation.
//!
//! This crate provides:
//! - Civil date/time value types
//! - Julian-day arithmetic across the 1582 calendar transition
//! - ΔT and apparent solar longitude, with the 24 solar-term instants
//! - A first-principles Korean lunisolar calendar (new moons, leap
//!   months, Seollal) and lunar ↔ solar conversion
//!
//! Everything here is a pure function of its arguments; no reference
//! files are loaded and no wall clock is consulted.

pub mod error;
pub mod julian;
pub mod lunar;
pub mod solar;
pub mod types;

pub use error::CalendarError;
pub use julian::{
    J2000_JD, add_days, civil_from_jd, civil_to_jdn, day_of_week, days_in_month, is_leap_year,
    jd_from_civil, jdn_to_civil,
};
pub use lunar::{LunarDate, LunarMonth, lunar_new_year, lunar_to_solar, months_of_lunar_year, solar_to_lunar};
pub use solar::{
    ALL_TERMS, SolarTerm, delta_t_seconds, month_index_from_longitude, sun_apparent_longitude,
    term_instant_tt, term_instant_ut, tt_to_ut, ut_to_tt,
};
pub use types::{CivilDate, CivilDateTime};
