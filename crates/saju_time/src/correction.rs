//! Solar-time correction.
//!
//! Converts a civil birth instant plus birthplace into the local mean
//! solar instant the pillar calculators consume, returning the full
//! component breakdown alongside the adjusted time.
//!
//! Component semantics (all signed minutes, added to civil time):
//! - longitude: `(longitude − reference meridian) × 4 min/deg`, applied
//!   when `use_local_solar_time` is on
//! - timezone: `reference-meridian minutes − zone civil offset`, applied
//!   when `use_political_timezone` or `use_international_mode` is on
//!   (with local solar time off this aligns civil offsets alone)
//! - dst: minus the seasonal offset in force at the birth instant
//! - regional: nominal zone offset minus the offset in force at the
//!   birth date (the Korean meridian changes)
//!
//! The reported total is always the exact sum of the four components.

use serde::{Deserialize, Serialize};

use saju_calendar::{CivilDate, CivilDateTime, add_days};

use crate::city::{CityDirectory, GeoCoordinates};
use crate::dst::DstTable;
use crate::error::TimeError;
use crate::zone::ZoneId;

/// Minutes of solar-time shift per degree of longitude.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// A birthplace: either a directory name or explicit coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Birthplace {
    /// A city name resolved against the directory.
    Name(String),
    /// Explicit coordinates with an optional civil UTC offset.
    Coordinates {
        coordinates: GeoCoordinates,
        utc_offset_minutes: Option<i32>,
    },
}

impl Birthplace {
    /// Convenience constructor for a named birthplace.
    pub fn name(n: impl Into<String>) -> Self {
        Self::Name(n.into())
    }
}

/// Options controlling which corrections apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationOptions {
    /// Apply the longitude-based mean-solar-time offset.
    pub use_local_solar_time: bool,
    /// Apply current-regime DST windows from the table.
    pub apply_dst: bool,
    /// Apply discontinued historical DST regimes.
    pub apply_historical_dst: bool,
    /// Fold the political-zone offset difference into the correction.
    pub use_political_timezone: bool,
    /// Resolve against each location's own zone rather than the fixed
    /// reference meridian; also selects the solar-term year boundary.
    pub use_international_mode: bool,
    /// Reference meridian in degrees east (135 for KST/JST).
    pub reference_meridian_deg: f64,
    /// Keep sub-minute precision in the components and the total.
    pub use_second_precision: bool,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            use_local_solar_time: true,
            apply_dst: false,
            apply_historical_dst: true,
            use_political_timezone: false,
            use_international_mode: false,
            reference_meridian_deg: 135.0,
            use_second_precision: false,
        }
    }
}

/// The applied correction, component by component, in signed minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeCorrection {
    pub timezone_minutes: f64,
    pub longitude_minutes: f64,
    pub dst_minutes: f64,
    pub regional_minutes: f64,
    pub total_minutes: f64,
}

/// The resolved place a correction was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    pub coordinates: GeoCoordinates,
    pub zone: Option<ZoneId>,
    pub utc_offset_minutes: i32,
}

/// Resolve a birthplace to coordinates and a civil offset.
pub fn resolve_place(
    directory: &CityDirectory,
    place: &Birthplace,
) -> Result<ResolvedPlace, TimeError> {
    match place {
        Birthplace::Name(name) => {
            let entry = directory
                .resolve(name)
                .ok_or_else(|| TimeError::LocationNotFound(name.clone()))?;
            Ok(ResolvedPlace {
                coordinates: entry.coordinates(),
                zone: Some(entry.zone),
                utc_offset_minutes: entry.zone.utc_offset_minutes(),
            })
        }
        Birthplace::Coordinates {
            coordinates,
            utc_offset_minutes,
        } => Ok(ResolvedPlace {
            coordinates: *coordinates,
            zone: None,
            // Without a stated offset the nearest whole-hour meridian
            // stands in for the civil zone.
            utc_offset_minutes: utc_offset_minutes
                .unwrap_or_else(|| ((coordinates.longitude / 15.0).round() * 60.0) as i32),
        }),
    }
}

/// Correct a civil birth instant to local mean solar time.
///
/// `hour_fraction` is hour + minute/60 (+ second/3600) in [0, 24).
/// Returns the adjusted instant and the component breakdown.
pub fn correct(
    directory: &CityDirectory,
    dst: &DstTable,
    date: CivilDate,
    hour_fraction: f64,
    place: &Birthplace,
    options: &CalculationOptions,
) -> Result<(CivilDateTime, TimeCorrection), TimeError> {
    let resolved = resolve_place(directory, place)?;
    correct_resolved(dst, date, hour_fraction, &resolved, options)
}

/// [`correct`] for an already-resolved place.
pub fn correct_resolved(
    dst: &DstTable,
    date: CivilDate,
    hour_fraction: f64,
    place: &ResolvedPlace,
    options: &CalculationOptions,
) -> Result<(CivilDateTime, TimeCorrection), TimeError> {
    if !(0.0..24.0).contains(&hour_fraction) || !hour_fraction.is_finite() {
        return Err(TimeError::InvalidTime(hour_fraction));
    }
    let correction = components(dst, date, hour_fraction, place, options);
    Ok((apply(date, hour_fraction, correction.total_minutes), correction))
}

/// Compute the correction components for a resolved place.
pub fn components(
    dst: &DstTable,
    date: CivilDate,
    hour_fraction: f64,
    place: &ResolvedPlace,
    options: &CalculationOptions,
) -> TimeCorrection {
    let reference_minutes = options.reference_meridian_deg * MINUTES_PER_DEGREE;

    let longitude = if options.use_local_solar_time {
        (place.coordinates.longitude - options.reference_meridian_deg) * MINUTES_PER_DEGREE
    } else {
        0.0
    };

    let timezone = if options.use_political_timezone || options.use_international_mode {
        reference_minutes - place.utc_offset_minutes as f64
    } else {
        0.0
    };

    let dst_minutes = match place.zone {
        Some(zone) => -dst.offset_minutes_at(
            zone,
            date,
            hour_fraction,
            options.apply_dst,
            options.apply_historical_dst,
        ) as f64,
        None => 0.0,
    };

    let regional = match place.zone {
        Some(zone) => {
            (zone.utc_offset_minutes() - zone.utc_offset_minutes_on(date)) as f64
        }
        None => 0.0,
    };

    let round = |m: f64| {
        if options.use_second_precision {
            m
        } else {
            m.round()
        }
    };

    let timezone = round(timezone);
    let longitude = round(longitude);
    let dst_minutes = round(dst_minutes);
    let regional = round(regional);

    TimeCorrection {
        timezone_minutes: timezone,
        longitude_minutes: longitude,
        dst_minutes,
        regional_minutes: regional,
        total_minutes: timezone + longitude + dst_minutes + regional,
    }
}

/// Apply a signed minute offset to a civil instant, carrying across
/// day boundaries.
fn apply(date: CivilDate, hour_fraction: f64, total_minutes: f64) -> CivilDateTime {
    let day_seconds = hour_fraction * 3600.0 + total_minutes * 60.0;
    let day_shift = (day_seconds / 86_400.0).floor();
    let rem = day_seconds - day_shift * 86_400.0;

    let adjusted_date = add_days(date, day_shift as i64);
    let hour = (rem / 3600.0).floor();
    let minute = ((rem - hour * 3600.0) / 60.0).floor();
    let second = rem - hour * 3600.0 - minute * 60.0;
    CivilDateTime {
        date: adjusted_date,
        hour: hour as u32,
        minute: minute as u32,
        // Clip float dust at the minute edge.
        second: if second < 1e-6 { 0.0 } else { second },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seoul() -> Birthplace {
        Birthplace::name("Seoul")
    }

    #[test]
    fn seoul_default_correction() {
        let dir = CityDirectory::default();
        let dst = DstTable::default();
        let opts = CalculationOptions::default();
        let (adjusted, corr) = correct(
            &dir,
            &dst,
            CivilDate::new(1990, 1, 15),
            13.0,
            &seoul(),
            &opts,
        )
        .unwrap();
        // (126.978 - 135) * 4 = -32.088 → -32 whole minutes.
        assert_eq!(corr.longitude_minutes, -32.0);
        assert_eq!(corr.total_minutes, -32.0);
        assert_eq!(adjusted.date, CivilDate::new(1990, 1, 15));
        assert_eq!(adjusted.hour, 12);
        assert_eq!(adjusted.minute, 28);
    }

    #[test]
    fn total_is_component_sum() {
        let dir = CityDirectory::default();
        let dst = DstTable::default();
        for (place, opts) in [
            (seoul(), CalculationOptions::default()),
            (
                Birthplace::name("Beijing"),
                CalculationOptions {
                    use_political_timezone: true,
                    ..CalculationOptions::default()
                },
            ),
            (
                Birthplace::name("New York"),
                CalculationOptions {
                    use_international_mode: true,
                    use_second_precision: true,
                    ..CalculationOptions::default()
                },
            ),
        ] {
            let (_, c) = correct(
                &dir,
                &dst,
                CivilDate::new(1988, 7, 1),
                10.0,
                &place,
                &opts,
            )
            .unwrap();
            let sum =
                c.timezone_minutes + c.longitude_minutes + c.dst_minutes + c.regional_minutes;
            assert!((c.total_minutes - sum).abs() < 1e-9);
        }
    }

    #[test]
    fn dst_subtracts_an_hour() {
        let dir = CityDirectory::default();
        let dst = DstTable::default();
        let opts = CalculationOptions::default();
        let (_, c) = correct(
            &dir,
            &dst,
            CivilDate::new(1988, 7, 1),
            10.0,
            &seoul(),
            &opts,
        )
        .unwrap();
        assert_eq!(c.dst_minutes, -60.0);
        assert_eq!(c.total_minutes, -92.0);
    }

    #[test]
    fn regional_component_for_1957() {
        // Korea ran UTC+8:30 in 1957: the regional component gives the
        // 30 minutes back.
        let dir = CityDirectory::default();
        let dst = DstTable::default();
        let opts = CalculationOptions {
            apply_historical_dst: false,
            ..CalculationOptions::default()
        };
        let (_, c) = correct(
            &dir,
            &dst,
            CivilDate::new(1957, 1, 10),
            6.0,
            &seoul(),
            &opts,
        )
        .unwrap();
        assert_eq!(c.regional_minutes, 30.0);
        assert_eq!(c.total_minutes, -2.0);
    }

    #[test]
    fn international_mode_new_york() {
        let dir = CityDirectory::default();
        let dst = DstTable::default();
        let opts = CalculationOptions {
            use_international_mode: true,
            use_second_precision: true,
            ..CalculationOptions::default()
        };
        let (_, c) = correct(
            &dir,
            &dst,
            CivilDate::new(2000, 6, 1),
            12.0,
            &Birthplace::name("New York"),
            &opts,
        )
        .unwrap();
        // timezone: 540 - (-300) = 840; longitude: (-74.006 - 135) * 4.
        // Net: -74.006*4 + 300 = 3.976 minutes.
        assert!((c.total_minutes - 3.976).abs() < 1e-9);
    }

    #[test]
    fn day_boundary_carry() {
        let dir = CityDirectory::default();
        let dst = DstTable::default();
        let opts = CalculationOptions::default();
        let (adjusted, _) = correct(
            &dir,
            &dst,
            CivilDate::new(1990, 1, 15),
            0.25,
            &seoul(),
            &opts,
        )
        .unwrap();
        // 00:15 - 32 min lands the previous evening.
        assert_eq!(adjusted.date, CivilDate::new(1990, 1, 14));
        assert_eq!(adjusted.hour, 23);
        assert_eq!(adjusted.minute, 43);
    }

    #[test]
    fn invalid_hour_rejected() {
        let dir = CityDirectory::default();
        let dst = DstTable::default();
        let opts = CalculationOptions::default();
        let err = correct(
            &dir,
            &dst,
            CivilDate::new(1990, 1, 15),
            24.0,
            &seoul(),
            &opts,
        )
        .unwrap_err();
        assert!(matches!(err, TimeError::InvalidTime(_)));
    }

    #[test]
    fn unknown_place_rejected() {
        let dir = CityDirectory::default();
        let dst = DstTable::default();
        let opts = CalculationOptions::default();
        let err = correct(
            &dir,
            &dst,
            CivilDate::new(1990, 1, 15),
            12.0,
            &Birthplace::name("Atlantis"),
            &opts,
        )
        .unwrap_err();
        assert_eq!(err, TimeError::LocationNotFound("Atlantis".into()));
    }

    #[test]
    fn explicit_coordinates_skip_directory() {
        let dir = CityDirectory::default();
        let dst = DstTable::default();
        let opts = CalculationOptions {
            use_second_precision: true,
            ..CalculationOptions::default()
        };
        let place = Birthplace::Coordinates {
            coordinates: GeoCoordinates {
                longitude: 135.0,
                latitude: 35.0,
            },
            utc_offset_minutes: Some(540),
        };
        let (_, c) = correct(&dir, &dst, CivilDate::new(1990, 1, 15), 12.0, &place, &opts)
            .unwrap();
        assert_eq!(c.total_minutes, 0.0);
    }
}
