//! Engine facade.
//!
//! An `Engine` is an explicit value built once from the immutable
//! reference tables and shared by reference; there is no global
//! instance. `calculate` runs the fixed pipeline (correct, four
//! calculators, combination resolver, annotators, profile) and either
//! returns a complete chart or the first typed error; there are no
//! partial results and nothing is cached between calls.

use chrono::{Datelike, Timelike, Utc};

use saju_calendar::{CivilDate, civil_from_jd, jd_from_civil};
use saju_time::{
    Birthplace, CalculationOptions, CityDirectory, DstTable, GeoCoordinates, correct_resolved,
    resolve_place,
};

use crate::annotate::annotate;
use crate::chart::{Chart, Sex};
use crate::combine::resolve;
use crate::error::EngineError;
use crate::pillar::RawPillars;
use crate::pillars::{day_pillar, effective_year, hour_pillar, month_pillar, year_pillar};
use crate::profile::aggregate;

/// The calculation engine: immutable reference tables behind a facade.
#[derive(Debug, Clone)]
pub struct Engine {
    directory: CityDirectory,
    dst: DstTable,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine over the built-in directory and DST table.
    pub fn new() -> Self {
        Self {
            directory: CityDirectory::default(),
            dst: DstTable::default(),
        }
    }

    /// Engine over caller-supplied reference tables.
    pub fn with_tables(directory: CityDirectory, dst: DstTable) -> Self {
        Self { directory, dst }
    }

    /// Calculate the chart for a birth instant.
    ///
    /// `hour_fraction` is hour + minute/60 (+ second/3600) in [0, 24).
    pub fn calculate(
        &self,
        birth_date: CivilDate,
        hour_fraction: f64,
        sex: Sex,
        place: &Birthplace,
        options: &CalculationOptions,
    ) -> Result<Chart, EngineError> {
        let resolved_place = resolve_place(&self.directory, place)?;
        let (adjusted, correction) = correct_resolved(
            &self.dst,
            birth_date,
            hour_fraction,
            &resolved_place,
            options,
        )?;

        // The adjusted instant reads as UT plus the civil offset plus
        // the meridian-related components, which pins the absolute
        // instant for the astronomical year/month boundaries.
        let jd_local = jd_from_civil(adjusted.date, adjusted.hour_fraction());
        let jd_ut = jd_local
            - (resolved_place.utc_offset_minutes as f64
                + correction.longitude_minutes
                + correction.timezone_minutes)
                / 1440.0;

        let year = year_pillar(effective_year(
            adjusted.date,
            jd_ut,
            options.use_international_mode,
        )?);
        let month = month_pillar(jd_ut, year.stem)?;
        let day = day_pillar(adjusted.date);
        let hour = hour_pillar(day.stem, adjusted.hour_fraction())?;

        let resolved = resolve(RawPillars {
            year,
            month,
            day,
            hour,
        });
        let day_master = resolved.day_master();
        let pillars = annotate(&resolved);
        let profile = aggregate(&pillars, day_master);

        Ok(Chart {
            pillars,
            day_master,
            profile,
            correction,
            adjusted,
            sex,
        })
    }

    /// Calculate the chart for a lunar-calendar birth date.
    ///
    /// The date (with its leap-month flag) is converted to the civil
    /// calendar first, then fed through the same pipeline.
    pub fn calculate_lunar(
        &self,
        lunar_year: i32,
        lunar_month: u32,
        lunar_day: u32,
        is_leap_month: bool,
        hour_fraction: f64,
        sex: Sex,
        place: &Birthplace,
        options: &CalculationOptions,
    ) -> Result<Chart, EngineError> {
        let birth_date =
            saju_calendar::lunar_to_solar(lunar_year, lunar_month, lunar_day, is_leap_month)?;
        self.calculate(birth_date, hour_fraction, sex, place, options)
    }

    /// Calculate the chart for the present instant at a place.
    ///
    /// The present UTC instant is shifted by the place's civil offset
    /// and fed through the same pipeline as [`Engine::calculate`].
    pub fn current_chart(
        &self,
        sex: Sex,
        place: &Birthplace,
        options: &CalculationOptions,
    ) -> Result<Chart, EngineError> {
        let resolved_place = resolve_place(&self.directory, place)?;

        let now = Utc::now();
        let jd_utc = jd_from_civil(
            CivilDate::new(now.year(), now.month(), now.day()),
            now.hour() as f64
                + now.minute() as f64 / 60.0
                + now.second() as f64 / 3600.0,
        );
        let local = civil_from_jd(jd_utc + resolved_place.utc_offset_minutes as f64 / 1440.0);

        self.calculate(local.date, local.hour_fraction(), sex, place, options)
    }

    /// All supported city names.
    pub fn city_names(&self) -> Vec<&'static str> {
        self.directory.names()
    }

    /// Coordinates for a city name, if the directory resolves it.
    pub fn coordinates_for(&self, name: &str) -> Option<GeoCoordinates> {
        self.directory.coordinates(name)
    }

    /// Longitude-based local-time offset in minutes for a coordinate
    /// pair under the given options.
    pub fn local_offset_minutes(
        &self,
        coordinates: GeoCoordinates,
        options: &CalculationOptions,
    ) -> f64 {
        let raw = (coordinates.longitude - options.reference_meridian_deg) * 4.0;
        if options.use_second_precision {
            raw
        } else {
            raw.round()
        }
    }
}
