//! Birthplace resolution and solar-time correction.
//!
//! This crate provides:
//! - The static city directory with three-stage name matching
//! - Political-zone offset history and the swappable DST table
//! - The solar-time corrector and its component breakdown
//!
//! All reference data is immutable after construction; lookups are
//! read-only and the corrector is a pure function.

pub mod city;
pub mod correction;
pub mod dst;
pub mod error;
pub mod zone;

pub use city::{CityDirectory, CityEntry, GeoCoordinates};
pub use correction::{
    Birthplace, CalculationOptions, ResolvedPlace, TimeCorrection, components, correct,
    correct_resolved, resolve_place,
};
pub use dst::{DstRule, DstTable};
pub use error::TimeError;
pub use zone::ZoneId;
