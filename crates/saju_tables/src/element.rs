//! Five elements (오행) and polarity (음양).
//!
//! The generation and restraint cycles are the closed relations every
//! higher-level classification (ten relations, combinations, element
//! profile) is derived from.

use serde::{Deserialize, Serialize};

/// The five elements, in generation-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generation-cycle order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index in generation-cycle order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one generates (상생): Wood→Fire→Earth→Metal→Water→Wood.
    pub const fn generates(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one restrains (상극): Wood→Earth→Water→Fire→Metal→Wood.
    pub const fn restrains(self) -> Element {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// The element that generates this one.
    pub const fn generated_by(self) -> Element {
        match self {
            Self::Fire => Self::Wood,
            Self::Earth => Self::Fire,
            Self::Metal => Self::Earth,
            Self::Water => Self::Metal,
            Self::Wood => Self::Water,
        }
    }

    /// The element that restrains this one.
    pub const fn restrained_by(self) -> Element {
        match self {
            Self::Earth => Self::Wood,
            Self::Water => Self::Earth,
            Self::Fire => Self::Water,
            Self::Metal => Self::Fire,
            Self::Wood => Self::Metal,
        }
    }

    /// Romanized Korean name.
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Wood => "Mok",
            Self::Fire => "Hwa",
            Self::Earth => "To",
            Self::Metal => "Geum",
            Self::Water => "Su",
        }
    }

    /// Hanja glyph.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// The opposite polarity.
    pub const fn opposite(self) -> Polarity {
        match self {
            Self::Yang => Self::Yin,
            Self::Yin => Self::Yang,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_cycle_closes() {
        for e in ALL_ELEMENTS {
            let mut x = e;
            for _ in 0..5 {
                x = x.generates();
            }
            assert_eq!(x, e);
        }
    }

    #[test]
    fn restraint_cycle_closes() {
        for e in ALL_ELEMENTS {
            let mut x = e;
            for _ in 0..5 {
                x = x.restrains();
            }
            assert_eq!(x, e);
        }
    }

    #[test]
    fn generated_by_inverts_generates() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generated_by(), e);
        }
    }

    #[test]
    fn restrained_by_inverts_restrains() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.restrains().restrained_by(), e);
        }
    }

    #[test]
    fn restraint_skips_one_in_cycle() {
        // The restrained element is two generation steps ahead.
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generates(), e.restrains());
        }
    }
}
