//! Ten-relation (십성) classification.
//!
//! Every stem stands in exactly one of ten fixed relations to the day
//! master, determined by the element relation (peer, output, wealth,
//! officer, resource) crossed with polarity equality. The element-level
//! entry point exists for combination-transformed stems, whose element
//! is overridden while their polarity is kept.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// The ten relations, grouped in element-relation pairs
/// (same-polarity variant first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenRelation {
    /// 비견 — peer element, same polarity.
    Bigyeon,
    /// 겁재 — peer element, opposite polarity.
    Geopjae,
    /// 식신 — generated by the day master, same polarity.
    Siksin,
    /// 상관 — generated by the day master, opposite polarity.
    Sanggwan,
    /// 편재 — restrained by the day master, same polarity.
    Pyeonjae,
    /// 정재 — restrained by the day master, opposite polarity.
    Jeongjae,
    /// 편관 — restrains the day master, same polarity.
    Pyeongwan,
    /// 정관 — restrains the day master, opposite polarity.
    Jeonggwan,
    /// 편인 — generates the day master, same polarity.
    Pyeonin,
    /// 정인 — generates the day master, opposite polarity.
    Jeongin,
}

impl TenRelation {
    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bigyeon => "Bigyeon",
            Self::Geopjae => "Geopjae",
            Self::Siksin => "Siksin",
            Self::Sanggwan => "Sanggwan",
            Self::Pyeonjae => "Pyeonjae",
            Self::Jeongjae => "Jeongjae",
            Self::Pyeongwan => "Pyeongwan",
            Self::Jeonggwan => "Jeonggwan",
            Self::Pyeonin => "Pyeonin",
            Self::Jeongin => "Jeongin",
        }
    }
}

/// Relation of a bare element/polarity pair to the day master.
///
/// Used directly when a combination has overridden a stem's element;
/// the stem keeps its own polarity in that case.
pub const fn ten_relation_for_element(
    day_master: Stem,
    element: Element,
    polarity: Polarity,
) -> TenRelation {
    let dm = day_master.element();
    let same = matches!(
        (day_master.polarity(), polarity),
        (Polarity::Yang, Polarity::Yang) | (Polarity::Yin, Polarity::Yin)
    );

    if dm as u8 == element as u8 {
        if same { TenRelation::Bigyeon } else { TenRelation::Geopjae }
    } else if dm.generates() as u8 == element as u8 {
        if same { TenRelation::Siksin } else { TenRelation::Sanggwan }
    } else if dm.restrains() as u8 == element as u8 {
        if same { TenRelation::Pyeonjae } else { TenRelation::Jeongjae }
    } else if element.restrains() as u8 == dm as u8 {
        if same { TenRelation::Pyeongwan } else { TenRelation::Jeonggwan }
    } else {
        // Only the generating relation remains.
        if same { TenRelation::Pyeonin } else { TenRelation::Jeongin }
    }
}

/// Relation of a stem to the day master.
pub const fn ten_relation(day_master: Stem, other: Stem) -> TenRelation {
    ten_relation_for_element(day_master, other.element(), other.polarity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn day_master_relates_to_itself_as_bigyeon() {
        for s in ALL_STEMS {
            assert_eq!(ten_relation(s, s), TenRelation::Bigyeon);
        }
    }

    #[test]
    fn each_relation_appears_exactly_once_per_day_master() {
        for dm in ALL_STEMS {
            let mut seen = Vec::new();
            for other in ALL_STEMS {
                let r = ten_relation(dm, other);
                assert!(!seen.contains(&r), "{dm:?}/{other:?} repeats {r:?}");
                seen.push(r);
            }
            assert_eq!(seen.len(), 10);
        }
    }

    #[test]
    fn gyeong_day_master_classics() {
        // Day master Gyeong (yang metal).
        let dm = Stem::Gyeong;
        // Gi (yin earth) generates metal, opposite polarity.
        assert_eq!(ten_relation(dm, Stem::Gi), TenRelation::Jeongin);
        // Jeong (yin fire) restrains metal, opposite polarity.
        assert_eq!(ten_relation(dm, Stem::Jeong), TenRelation::Jeonggwan);
        // Byeong (yang fire) restrains metal, same polarity.
        assert_eq!(ten_relation(dm, Stem::Byeong), TenRelation::Pyeongwan);
        // Gye (yin water) is generated by metal, opposite polarity.
        assert_eq!(ten_relation(dm, Stem::Gye), TenRelation::Sanggwan);
        // Mu (yang earth) generates metal, same polarity.
        assert_eq!(ten_relation(dm, Stem::Mu), TenRelation::Pyeonin);
        // Sin (yin metal) is the peer of opposite polarity.
        assert_eq!(ten_relation(dm, Stem::Sin), TenRelation::Geopjae);
    }

    #[test]
    fn element_override_keeps_polarity() {
        // A yang stem transformed to earth reads as an officer to an Im
        // day master (earth restrains water, same polarity).
        let r = ten_relation_for_element(Stem::Im, Element::Earth, Polarity::Yang);
        assert_eq!(r, TenRelation::Pyeongwan);
    }
}
