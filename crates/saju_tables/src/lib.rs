//! Closed symbolic reference tables for four-pillars calculation.
//!
//! This crate provides:
//! - The ten stems and twelve branches with fixed element/polarity data
//! - The 60-term sexagenary cycle with its pairing invariant
//! - Ten-relation, vitality-stage, and spirit-killer classifications
//! - Combination rule tables (stem pairs, unions, triads, assemblies)
//!
//! Every lookup is an exhaustive match over closed enumerations; there
//! are no string-keyed tables and no lookup can silently miss.

pub mod branch;
pub mod combine;
pub mod cycle;
pub mod element;
pub mod relation;
pub mod spirit;
pub mod stage;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch};
pub use combine::{
    BRANCH_TRIADS, BRANCH_UNIONS, DIRECTIONAL_ASSEMBLIES, STEM_COMBINATIONS, branch_union,
    stem_combination,
};
pub use cycle::GanJi;
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use relation::{TenRelation, ten_relation, ten_relation_for_element};
pub use spirit::{ALL_SPIRITS, SpiritKiller, spirit_killer};
pub use stage::{ALL_STAGES, VitalityStage, vitality_stage};
pub use stem::{ALL_STEMS, Stem};
