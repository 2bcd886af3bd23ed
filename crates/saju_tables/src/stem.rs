//! The ten heavenly stems (천간).
//!
//! Each stem carries a fixed element and polarity. Stems cycle with
//! period 10; the polarity alternates with the index, so even-indexed
//! stems are yang and odd-indexed stems are yin.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The ten heavenly stems in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All ten stems in cycle order (index 0 = Gap).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

impl Stem {
    /// 0-based index (Gap=0 .. Gye=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem for an arbitrary (possibly negative) cycle position.
    pub fn from_index(i: i64) -> Stem {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    /// Fixed element: Gap/Eul wood, Byeong/Jeong fire, Mu/Gi earth,
    /// Gyeong/Sin metal, Im/Gye water.
    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
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

    /// The stem this one combines with (천간합): partners sit five
    /// positions apart (Gap↔Gi, Eul↔Gyeong, ...).
    pub fn combining_partner(self) -> Stem {
        Stem::from_index(self.index() as i64 + 5)
    }

    /// The element a triggered combination of this stem and its partner
    /// transforms into.
    pub const fn combination_element(self) -> Element {
        match self {
            Self::Gap | Self::Gi => Element::Earth,
            Self::Eul | Self::Gyeong => Element::Metal,
            Self::Byeong | Self::Sin => Element::Water,
            Self::Jeong | Self::Im => Element::Wood,
            Self::Mu | Self::Gye => Element::Fire,
        }
    }

    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    /// Hangul name.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Gap => "갑",
            Self::Eul => "을",
            Self::Byeong => "병",
            Self::Jeong => "정",
            Self::Mu => "무",
            Self::Gi => "기",
            Self::Gyeong => "경",
            Self::Sin => "신",
            Self::Im => "임",
            Self::Gye => "계",
        }
    }

    /// Hanja glyph.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }
}
