//! Combination rule tables (합).
//!
//! Three branch rule families plus the five stem pairs. The tables only
//! state which symbols combine and into what element; trigger conditions
//! (adjacency, presence-anywhere) belong to the resolver that walks a
//! concrete chart.

use crate::branch::Branch;
use crate::element::Element;
use crate::stem::Stem;

/// The five stem combinations (천간합) and their resulting elements.
pub const STEM_COMBINATIONS: [(Stem, Stem, Element); 5] = [
    (Stem::Gap, Stem::Gi, Element::Earth),
    (Stem::Eul, Stem::Gyeong, Element::Metal),
    (Stem::Byeong, Stem::Sin, Element::Water),
    (Stem::Jeong, Stem::Im, Element::Wood),
    (Stem::Mu, Stem::Gye, Element::Fire),
];

/// The six branch unions (육합) and their resulting elements.
pub const BRANCH_UNIONS: [(Branch, Branch, Element); 6] = [
    (Branch::Ja, Branch::Chuk, Element::Earth),
    (Branch::In, Branch::Hae, Element::Wood),
    (Branch::Myo, Branch::Sul, Element::Fire),
    (Branch::Jin, Branch::Yu, Element::Metal),
    (Branch::Sa, Branch::Shin, Element::Water),
    (Branch::O, Branch::Mi, Element::Fire),
];

/// The four three-branch triads (삼합) and their resulting elements.
pub const BRANCH_TRIADS: [([Branch; 3], Element); 4] = [
    ([Branch::Shin, Branch::Ja, Branch::Jin], Element::Water),
    ([Branch::Hae, Branch::Myo, Branch::Mi], Element::Wood),
    ([Branch::In, Branch::O, Branch::Sul], Element::Fire),
    ([Branch::Sa, Branch::Yu, Branch::Chuk], Element::Metal),
];

/// The four directional assemblies (방합) and their resulting elements.
pub const DIRECTIONAL_ASSEMBLIES: [([Branch; 3], Element); 4] = [
    ([Branch::In, Branch::Myo, Branch::Jin], Element::Wood),
    ([Branch::Sa, Branch::O, Branch::Mi], Element::Fire),
    ([Branch::Shin, Branch::Yu, Branch::Sul], Element::Metal),
    ([Branch::Hae, Branch::Ja, Branch::Chuk], Element::Water),
];

/// Resulting element of a stem pair, if the pair is one of the five
/// combinations.
pub fn stem_combination(a: Stem, b: Stem) -> Option<Element> {
    STEM_COMBINATIONS
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, e)| *e)
}

/// Resulting element of a branch pair, if the pair is one of the six
/// unions.
pub fn branch_union(a: Branch, b: Branch) -> Option<Element> {
    BRANCH_UNIONS
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, e)| *e)
}
