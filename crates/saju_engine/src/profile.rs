//! Element profile aggregation.
//!
//! Weighted tally over the final pillar set. Primary stems and
//! branches carry full weight (a combination override substitutes its
//! element for the occurrence that triggered it); hidden stems carry a
//! reduced weight each. Ties resolve by generation-cycle order so the
//! profile is deterministic.

use serde::{Deserialize, Serialize};

use saju_tables::{ALL_ELEMENTS, Element, Polarity, Stem};

use crate::pillar::FourPillars;

/// Weight of a primary stem or branch occurrence.
const PRIMARY_WEIGHT: f64 = 1.0;

/// Weight of each hidden stem occurrence.
const HIDDEN_WEIGHT: f64 = 0.3;

/// Minimum weight for a secondary element to be reported.
const SECONDARY_THRESHOLD: f64 = 1.0;

/// Aggregated five-element profile of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementProfile {
    /// Accumulated weight per element, in generation-cycle order
    /// (wood, fire, earth, metal, water).
    pub weights: [f64; 5],
    pub main_element: Element,
    pub secondary_element: Option<Element>,
    pub polarity: Polarity,
}

impl ElementProfile {
    /// Accumulated weight of one element.
    pub fn weight(&self, element: Element) -> f64 {
        self.weights[element.index() as usize]
    }
}

/// Aggregate the profile of an annotated pillar set.
pub fn aggregate(pillars: &FourPillars, day_master: Stem) -> ElementProfile {
    let mut weights = [0.0f64; 5];
    let mut add = |element: Element, w: f64| {
        weights[element.index() as usize] += w;
    };

    for p in pillars.as_array() {
        // A stem-combination override replaces the stem occurrence; a
        // branch-rule override replaces the branch occurrence.
        let stem_element = match (p.enhanced_element, p.original_stem) {
            (Some(e), Some(_)) => e,
            _ => p.stem.element(),
        };
        let branch_element = match (p.enhanced_element, p.original_stem) {
            (Some(e), None) => e,
            _ => p.branch.element(),
        };
        add(stem_element, PRIMARY_WEIGHT);
        add(branch_element, PRIMARY_WEIGHT);
        for s in &p.hidden_stems {
            add(s.element(), HIDDEN_WEIGHT);
        }
    }

    let main_element = argmax(&weights, None);
    let secondary = argmax(&weights, Some(main_element));
    let secondary_element = (weights[secondary.index() as usize] >= SECONDARY_THRESHOLD
        && secondary != main_element)
        .then_some(secondary);

    let yang = pillars
        .as_array()
        .iter()
        .filter(|p| p.stem.polarity() == Polarity::Yang)
        .count();
    let polarity = match yang {
        3.. => Polarity::Yang,
        0 | 1 => Polarity::Yin,
        _ => day_master.polarity(),
    };

    ElementProfile {
        weights,
        main_element,
        secondary_element,
        polarity,
    }
}

/// Highest-weighted element, skipping `exclude`; ties resolve to the
/// earlier element in generation-cycle order.
fn argmax(weights: &[f64; 5], exclude: Option<Element>) -> Element {
    let mut best = None;
    for e in ALL_ELEMENTS {
        if Some(e) == exclude {
            continue;
        }
        let w = weights[e.index() as usize];
        match best {
            None => best = Some((e, w)),
            Some((_, bw)) if w > bw => best = Some((e, w)),
            _ => {}
        }
    }
    // ALL_ELEMENTS is non-empty, so best is always set.
    best.map(|(e, _)| e).unwrap_or(Element::Wood)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::annotate;
    use crate::combine::resolve;
    use crate::pillar::RawPillars;
    use saju_tables::{Branch, GanJi};

    fn chart(pillars: [(Stem, Branch); 4]) -> FourPillars {
        let [y, m, d, h] = pillars;
        annotate(&resolve(RawPillars {
            year: GanJi::new(y.0, y.1).unwrap(),
            month: GanJi::new(m.0, m.1).unwrap(),
            day: GanJi::new(d.0, d.1).unwrap(),
            hour: GanJi::new(h.0, h.1).unwrap(),
        }))
    }

    #[test]
    fn sample_chart_is_earth_dominant() {
        let c = chart([
            (Stem::Gi, Branch::Sa),
            (Stem::Jeong, Branch::Chuk),
            (Stem::Gyeong, Branch::Jin),
            (Stem::Gye, Branch::Mi),
        ]);
        let profile = aggregate(&c, Stem::Gyeong);
        assert_eq!(profile.main_element, Element::Earth);
        // Primary occurrences alone: Gi+Chuk+Jin+Mi = 4.0 earth.
        assert!(profile.weight(Element::Earth) >= 4.0);
    }

    #[test]
    fn weights_total_is_fixed_shape() {
        // 8 primary occurrences plus 0.3 per hidden stem.
        let c = chart([
            (Stem::Gi, Branch::Sa),
            (Stem::Jeong, Branch::Chuk),
            (Stem::Gyeong, Branch::Jin),
            (Stem::Gye, Branch::Mi),
        ]);
        let hidden: usize = c.as_array().iter().map(|p| p.hidden_stems.len()).sum();
        let profile = aggregate(&c, Stem::Gyeong);
        let total: f64 = profile.weights.iter().sum();
        let expected = 8.0 * PRIMARY_WEIGHT + hidden as f64 * HIDDEN_WEIGHT;
        assert!((total - expected).abs() < 1e-9);
    }

    #[test]
    fn secondary_element_needs_threshold() {
        let c = chart([
            (Stem::Gi, Branch::Sa),
            (Stem::Jeong, Branch::Chuk),
            (Stem::Gyeong, Branch::Jin),
            (Stem::Gye, Branch::Mi),
        ]);
        let profile = aggregate(&c, Stem::Gyeong);
        // Fire reaches the threshold through Jeong, Sa and hidden fire.
        assert_eq!(profile.secondary_element, Some(Element::Fire));
    }

    #[test]
    fn polarity_majority_and_tie() {
        // Three yin stems out of four: yin.
        let c = chart([
            (Stem::Gi, Branch::Sa),
            (Stem::Jeong, Branch::Chuk),
            (Stem::Gyeong, Branch::Jin),
            (Stem::Gye, Branch::Mi),
        ]);
        assert_eq!(aggregate(&c, Stem::Gyeong).polarity, Polarity::Yin);

        // Two-two tie resolves to the day master's polarity.
        let c = chart([
            (Stem::Gap, Branch::Ja),
            (Stem::Jeong, Branch::Chuk),
            (Stem::Gyeong, Branch::Jin),
            (Stem::Gye, Branch::Mi),
        ]);
        assert_eq!(aggregate(&c, Stem::Gyeong).polarity, Polarity::Yang);
    }

    #[test]
    fn enhanced_element_shifts_the_tally() {
        // Gap+Gi transform to earth: the wood occurrence moves to
        // earth.
        let c = chart([
            (Stem::Gap, Branch::Ja),
            (Stem::Gi, Branch::Chuk),
            (Stem::Gyeong, Branch::O),
            (Stem::Im, Branch::O),
        ]);
        let profile = aggregate(&c, Stem::Gyeong);
        // No primary wood left anywhere.
        assert!(profile.weight(Element::Wood) < 1.0);
    }
}
