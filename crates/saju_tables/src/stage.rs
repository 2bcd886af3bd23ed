//! Twelve vitality stages (십이운성).
//!
//! Each day stem anchors the cycle at its birth branch; yang stems walk
//! the branches forward, yin stems backward. The twelve stages then
//! follow in fixed order from that anchor.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Polarity;
use crate::stem::Stem;

/// The twelve vitality stages in progression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VitalityStage {
    /// 장생 — birth.
    Jangsaeng,
    /// 목욕 — bathing.
    Mokyok,
    /// 관대 — coming of age.
    Gwandae,
    /// 건록 — establishment.
    Geonnok,
    /// 제왕 — peak.
    Jewang,
    /// 쇠 — decline.
    Soe,
    /// 병 — sickness.
    Byeong,
    /// 사 — death.
    Sa,
    /// 묘 — burial.
    Myo,
    /// 절 — severance.
    Jeol,
    /// 태 — conception.
    Tae,
    /// 양 — nurture.
    Yang,
}

/// All twelve stages in progression order (index 0 = Jangsaeng).
pub const ALL_STAGES: [VitalityStage; 12] = [
    VitalityStage::Jangsaeng,
    VitalityStage::Mokyok,
    VitalityStage::Gwandae,
    VitalityStage::Geonnok,
    VitalityStage::Jewang,
    VitalityStage::Soe,
    VitalityStage::Byeong,
    VitalityStage::Sa,
    VitalityStage::Myo,
    VitalityStage::Jeol,
    VitalityStage::Tae,
    VitalityStage::Yang,
];

impl VitalityStage {
    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jangsaeng => "Jangsaeng",
            Self::Mokyok => "Mokyok",
            Self::Gwandae => "Gwandae",
            Self::Geonnok => "Geonnok",
            Self::Jewang => "Jewang",
            Self::Soe => "Soe",
            Self::Byeong => "Byeong",
            Self::Sa => "Sa",
            Self::Myo => "Myo",
            Self::Jeol => "Jeol",
            Self::Tae => "Tae",
            Self::Yang => "Yang",
        }
    }
}

/// Birth (장생) branch of each stem.
const fn birth_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Gap => Branch::Hae,
        Stem::Eul => Branch::O,
        Stem::Byeong | Stem::Mu => Branch::In,
        Stem::Jeong | Stem::Gi => Branch::Yu,
        Stem::Gyeong => Branch::Sa,
        Stem::Sin => Branch::Ja,
        Stem::Im => Branch::Shin,
        Stem::Gye => Branch::Myo,
    }
}

/// Vitality stage of a branch relative to a day stem.
pub fn vitality_stage(day_stem: Stem, branch: Branch) -> VitalityStage {
    let anchor = birth_branch(day_stem).index() as i64;
    let step = branch.index() as i64 - anchor;
    let offset = match day_stem.polarity() {
        Polarity::Yang => step,
        Polarity::Yin => -step,
    };
    ALL_STAGES[offset.rem_euclid(12) as usize]
}
