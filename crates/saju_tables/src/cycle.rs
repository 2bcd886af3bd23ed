//! The sexagenary cycle (육십갑자).
//!
//! Sixty valid stem/branch pairings: a pairing is valid exactly when
//! stem and branch share polarity, which the cycle guarantees by
//! construction (both indices advance together).

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// One term of the sexagenary cycle: a stem/branch pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GanJi {
    pub stem: Stem,
    pub branch: Branch,
}

impl GanJi {
    /// The pairing at an arbitrary (possibly negative) cycle position.
    pub fn from_index(i: i64) -> GanJi {
        GanJi {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }

    /// Checked constructor. Returns `None` when the stem and branch
    /// polarities differ (a pairing outside the 60-term cycle).
    pub fn new(stem: Stem, branch: Branch) -> Option<GanJi> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(GanJi { stem, branch })
        } else {
            None
        }
    }

    /// 0-based cycle index (Gap-Ja = 0 .. Gye-Hae = 59).
    ///
    /// CRT recombination of the two residues: `36s + 25b (mod 60)`.
    pub fn index(self) -> u8 {
        ((36 * self.stem.index() as u32 + 25 * self.branch.index() as u32) % 60) as u8
    }

    /// The next term in the cycle (wraps after Gye-Hae).
    pub fn next(self) -> GanJi {
        GanJi::from_index(self.index() as i64 + 1)
    }

    /// Romanized name, e.g. "Gap-Ja".
    pub fn name(self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }
}

impl std::fmt::Display for GanJi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem.name(), self.branch.name())
    }
}
