//! The twelve earthly branches (지지).
//!
//! Each branch carries a fixed element, a polarity (index parity), an
//! ordered set of hidden stems (지장간), and a two-hour civil window.
//! The first branch's window opens at 23:00, so window boundaries fall
//! on odd civil hours.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// The twelve earthly branches in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Shin,
    Yu,
    Sul,
    Hae,
}

/// All twelve branches in cycle order (index 0 = Ja).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Shin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

impl Branch {
    /// 0-based index (Ja=0 .. Hae=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Shin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch for an arbitrary (possibly negative) cycle position.
    pub fn from_index(i: i64) -> Branch {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Fixed element assignment.
    pub const fn element(self) -> Element {
        match self {
            Self::Ja | Self::Hae => Element::Water,
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Shin | Self::Yu => Element::Metal,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
        }
    }

    /// Polarity alternates with the index (even = yang).
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Hidden stems (지장간), principal stem first, then the middle and
    /// residual stems where present.
    ///
    /// Mainstream assignment; Jin is Mu-Eul-Gye.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        match self {
            Self::Ja => &[Stem::Gye, Stem::Im],
            Self::Chuk => &[Stem::Gi, Stem::Gye, Stem::Sin],
            Self::In => &[Stem::Gap, Stem::Byeong, Stem::Mu],
            Self::Myo => &[Stem::Eul, Stem::Gap],
            Self::Jin => &[Stem::Mu, Stem::Eul, Stem::Gye],
            Self::Sa => &[Stem::Byeong, Stem::Gyeong, Stem::Mu],
            Self::O => &[Stem::Jeong, Stem::Gi, Stem::Byeong],
            Self::Mi => &[Stem::Gi, Stem::Jeong, Stem::Eul],
            Self::Shin => &[Stem::Gyeong, Stem::Im, Stem::Mu],
            Self::Yu => &[Stem::Sin, Stem::Gyeong],
            Self::Sul => &[Stem::Mu, Stem::Sin, Stem::Jeong],
            Self::Hae => &[Stem::Im, Stem::Gap, Stem::Mu],
        }
    }

    /// The principal (정기) hidden stem, the key used by the improved
    /// branch-level ten-relation lookup.
    pub const fn principal_hidden_stem(self) -> Stem {
        self.hidden_stems()[0]
    }

    /// The branch whose two-hour window contains the given hour
    /// fraction in [0, 24). The Ja window opens at 23:00.
    pub fn from_hour_fraction(hour: f64) -> Branch {
        let slot = ((hour + 1.0) / 2.0).floor() as i64;
        Branch::from_index(slot)
    }

    /// Civil hour at which this branch's window opens (23 for Ja,
    /// 1 for Chuk, ...).
    pub const fn window_start_hour(self) -> u8 {
        (self.index() * 2 + 23) % 24
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ja => "Rat",
            Self::Chuk => "Ox",
            Self::In => "Tiger",
            Self::Myo => "Rabbit",
            Self::Jin => "Dragon",
            Self::Sa => "Snake",
            Self::O => "Horse",
            Self::Mi => "Goat",
            Self::Shin => "Monkey",
            Self::Yu => "Rooster",
            Self::Sul => "Dog",
            Self::Hae => "Pig",
        }
    }

    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Shin => "Shin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    /// Hangul name.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Ja => "자",
            Self::Chuk => "축",
            Self::In => "인",
            Self::Myo => "묘",
            Self::Jin => "진",
            Self::Sa => "사",
            Self::O => "오",
            Self::Mi => "미",
            Self::Shin => "신",
            Self::Yu => "유",
            Self::Sul => "술",
            Self::Hae => "해",
        }
    }

    /// Hanja glyph.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Shin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }
}
