//! Pillar value types for the staged pipeline.
//!
//! `RawPillars` (bare pairings) → `ResolvedPillars` (combination
//! overrides applied) → `FourPillars` (fully annotated). Each stage is
//! an immutable value produced from the previous one; nothing mutates
//! in place across stages.

use serde::{Deserialize, Serialize};

use saju_tables::{
    Branch, Element, GanJi, SpiritKiller, Stem, TenRelation, VitalityStage,
};

/// The four chart positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

/// The four bare pairings as computed by the pillar calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPillars {
    pub year: GanJi,
    pub month: GanJi,
    pub day: GanJi,
    pub hour: GanJi,
}

impl RawPillars {
    /// Pairings in chart order.
    pub fn as_array(&self) -> [GanJi; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

/// One pillar after combination resolution.
///
/// `stem` is never rewritten: a triggered stem combination records the
/// participant in `original_stem` and the transformation target in
/// `enhanced_element`. A branch-rule trigger sets `enhanced_element`
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPillar {
    pub ganji: GanJi,
    pub original_stem: Option<Stem>,
    pub enhanced_element: Option<Element>,
}

impl From<GanJi> for ResolvedPillar {
    fn from(ganji: GanJi) -> Self {
        Self {
            ganji,
            original_stem: None,
            enhanced_element: None,
        }
    }
}

/// The four pillars after combination resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPillars {
    pub year: ResolvedPillar,
    pub month: ResolvedPillar,
    pub day: ResolvedPillar,
    pub hour: ResolvedPillar,
}

impl From<RawPillars> for ResolvedPillars {
    fn from(raw: RawPillars) -> Self {
        Self {
            year: raw.year.into(),
            month: raw.month.into(),
            day: raw.day.into(),
            hour: raw.hour.into(),
        }
    }
}

impl ResolvedPillars {
    /// The day master: the Day pillar's (never-rewritten) stem.
    pub fn day_master(&self) -> Stem {
        self.day.ganji.stem
    }

    /// Pillars in chart order.
    pub fn as_array(&self) -> [ResolvedPillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Replace the pillar at a position (used by the resolver's pass).
    pub(crate) fn set(&mut self, position: PillarPosition, pillar: ResolvedPillar) {
        match position {
            PillarPosition::Year => self.year = pillar,
            PillarPosition::Month => self.month = pillar,
            PillarPosition::Day => self.day = pillar,
            PillarPosition::Hour => self.hour = pillar,
        }
    }

    pub(crate) fn get(&self, position: PillarPosition) -> ResolvedPillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }
}

/// A hidden stem with its relation to the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenStemRelation {
    pub stem: Stem,
    pub relation: TenRelation,
}

/// One fully annotated pillar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPillar {
    pub stem: Stem,
    pub branch: Branch,
    pub original_stem: Option<Stem>,
    pub enhanced_element: Option<Element>,
    pub hidden_stems: Vec<Stem>,
    pub stem_relation: TenRelation,
    pub branch_relation: TenRelation,
    pub hidden_stem_relations: Vec<HiddenStemRelation>,
    pub vitality_stage: VitalityStage,
    pub spirit_killer: Option<SpiritKiller>,
}

/// The four annotated pillars of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: AnnotatedPillar,
    pub month: AnnotatedPillar,
    pub day: AnnotatedPillar,
    pub hour: AnnotatedPillar,
}

impl FourPillars {
    /// Pillars in chart order.
    pub fn as_array(&self) -> [&AnnotatedPillar; 4] {
        [&self.year, &self.month, &self.day, &self.hour]
    }
}
