//! Twelve spirit killers (십이신살).
//!
//! Keyed on the reference branch's triad group: the cycle opens at the
//! group's Geopsal branch and the remaining eleven spirits follow in
//! branch order. The reference branch is conventionally the year
//! branch; a day-branch reference is also in traditional use, so the
//! lookup takes the reference explicitly.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;

/// The twelve spirit killers in cycle order from Geopsal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpiritKiller {
    /// 겁살 — robbery.
    Geopsal,
    /// 재살 — disaster.
    Jaesal,
    /// 천살 — heaven.
    Cheonsal,
    /// 지살 — earth.
    Jisal,
    /// 연살 — peach blossom.
    Yeonsal,
    /// 월살 — moon.
    Wolsal,
    /// 망신살 — loss.
    Mangsinsal,
    /// 장성살 — general's star.
    Jangseongsal,
    /// 반안살 — saddle.
    Banansal,
    /// 역마살 — station horse.
    Yeokmasal,
    /// 육해살 — six harms.
    Yukhaesal,
    /// 화개살 — canopy.
    Hwagaesal,
}

/// All twelve spirits in cycle order (index 0 = Geopsal).
pub const ALL_SPIRITS: [SpiritKiller; 12] = [
    SpiritKiller::Geopsal,
    SpiritKiller::Jaesal,
    SpiritKiller::Cheonsal,
    SpiritKiller::Jisal,
    SpiritKiller::Yeonsal,
    SpiritKiller::Wolsal,
    SpiritKiller::Mangsinsal,
    SpiritKiller::Jangseongsal,
    SpiritKiller::Banansal,
    SpiritKiller::Yeokmasal,
    SpiritKiller::Yukhaesal,
    SpiritKiller::Hwagaesal,
];

impl SpiritKiller {
    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Geopsal => "Geopsal",
            Self::Jaesal => "Jaesal",
            Self::Cheonsal => "Cheonsal",
            Self::Jisal => "Jisal",
            Self::Yeonsal => "Yeonsal",
            Self::Wolsal => "Wolsal",
            Self::Mangsinsal => "Mangsinsal",
            Self::Jangseongsal => "Jangseongsal",
            Self::Banansal => "Banansal",
            Self::Yeokmasal => "Yeokmasal",
            Self::Yukhaesal => "Yukhaesal",
            Self::Hwagaesal => "Hwagaesal",
        }
    }
}

/// Geopsal branch for the triad group the reference branch belongs to.
///
/// Triad membership is index mod 4: Shin-Ja-Jin, Sa-Yu-Chuk, In-O-Sul,
/// Hae-Myo-Mi.
const fn geopsal_branch(reference: Branch) -> Branch {
    match reference {
        Branch::Shin | Branch::Ja | Branch::Jin => Branch::Sa,
        Branch::Sa | Branch::Yu | Branch::Chuk => Branch::In,
        Branch::In | Branch::O | Branch::Sul => Branch::Hae,
        Branch::Hae | Branch::Myo | Branch::Mi => Branch::Shin,
    }
}

/// Spirit killer of a branch relative to a reference branch.
pub fn spirit_killer(reference: Branch, branch: Branch) -> SpiritKiller {
    let start = geopsal_branch(reference).index() as i64;
    let offset = (branch.index() as i64 - start).rem_euclid(12);
    ALL_SPIRITS[offset as usize]
}
