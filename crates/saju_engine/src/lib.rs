//! Four-pillars (saju) calculation engine.
//!
//! This crate provides:
//! - The year/month/day/hour pillar calculators over the corrected
//!   local-solar instant
//! - The combination resolver (stem pairs, triads, assemblies, unions)
//! - The relational annotators (ten relations, vitality stages, spirit
//!   killers) and the element-profile aggregator
//! - The `Engine` facade tying the pipeline together
//!
//! The engine is a pure function of its inputs plus the immutable
//! reference tables it is constructed with; calls share nothing and
//! may run concurrently without coordination.

pub mod annotate;
pub mod chart;
pub mod combine;
pub mod engine;
pub mod error;
pub mod pillar;
pub mod pillars;
pub mod profile;

pub use annotate::annotate;
pub use chart::{Chart, Sex};
pub use combine::{resolve, resolve_pillars};
pub use engine::Engine;
pub use error::EngineError;
pub use pillar::{
    ALL_POSITIONS, AnnotatedPillar, FourPillars, HiddenStemRelation, PillarPosition, RawPillars,
    ResolvedPillar, ResolvedPillars,
};
pub use pillars::{day_pillar, effective_year, hour_pillar, month_pillar, year_pillar};
pub use profile::{ElementProfile, aggregate};

// The caller-facing pieces of the lower layers, re-exported so the
// service layer can depend on this crate alone.
pub use saju_calendar::{CivilDate, CivilDateTime};
pub use saju_time::{
    Birthplace, CalculationOptions, CityDirectory, DstRule, DstTable, GeoCoordinates,
    TimeCorrection, TimeError, ZoneId,
};
