//! Combination resolver.
//!
//! A single pure pass over the four pillars. Rule order: stem pairs,
//! then branch triads, then directional assemblies, then branch
//! unions. A pillar's `enhanced_element` is written at most once per
//! calculation, so re-running the resolver on an already-resolved set
//! changes nothing.
//!
//! Stem pairs and branch unions trigger only between adjacent pillars
//! (year-month, month-day, day-hour); the three-branch families
//! trigger on presence anywhere in the chart.

use saju_tables::{
    BRANCH_TRIADS, DIRECTIONAL_ASSEMBLIES, Element, branch_union, stem_combination,
};

use crate::pillar::{ALL_POSITIONS, PillarPosition, RawPillars, ResolvedPillar, ResolvedPillars};

/// Adjacent pillar pairs, in chart order.
const ADJACENT: [(PillarPosition, PillarPosition); 3] = [
    (PillarPosition::Year, PillarPosition::Month),
    (PillarPosition::Month, PillarPosition::Day),
    (PillarPosition::Day, PillarPosition::Hour),
];

/// Resolve combinations over freshly calculated pillars.
pub fn resolve(raw: RawPillars) -> ResolvedPillars {
    resolve_pillars(raw.into())
}

/// Resolve combinations over an already-staged pillar set.
///
/// Idempotent: an `enhanced_element` that is already set is never
/// overwritten, and trigger conditions read only the immutable
/// pairings.
pub fn resolve_pillars(pillars: ResolvedPillars) -> ResolvedPillars {
    let mut out = pillars;

    // 1. Stem pairs, adjacency-gated; both participants must still be
    // unclaimed. The participant record goes to `original_stem`, the
    // stem itself stays untouched.
    for (a, b) in ADJACENT {
        let pa = out.get(a);
        let pb = out.get(b);
        if pa.enhanced_element.is_some() || pb.enhanced_element.is_some() {
            continue;
        }
        if let Some(element) = stem_combination(pa.ganji.stem, pb.ganji.stem) {
            out.set(a, claimed(pa, element, true));
            out.set(b, claimed(pb, element, true));
        }
    }

    // 2. Branch triads, presence-anywhere.
    for (branches, element) in BRANCH_TRIADS {
        apply_triple(&mut out, &branches, element);
    }

    // 3. Directional assemblies, presence-anywhere.
    for (branches, element) in DIRECTIONAL_ASSEMBLIES {
        apply_triple(&mut out, &branches, element);
    }

    // 4. Branch unions, adjacency-gated, weakest rule last.
    for (a, b) in ADJACENT {
        let pa = out.get(a);
        let pb = out.get(b);
        if let Some(element) = branch_union(pa.ganji.branch, pb.ganji.branch) {
            if pa.enhanced_element.is_none() {
                out.set(a, claimed(pa, element, false));
            }
            if pb.enhanced_element.is_none() {
                out.set(b, claimed(pb, element, false));
            }
        }
    }

    out
}

fn claimed(pillar: ResolvedPillar, element: Element, stem_rule: bool) -> ResolvedPillar {
    ResolvedPillar {
        ganji: pillar.ganji,
        original_stem: if stem_rule {
            Some(pillar.ganji.stem)
        } else {
            pillar.original_stem
        },
        enhanced_element: Some(element),
    }
}

fn apply_triple(out: &mut ResolvedPillars, branches: &[saju_tables::Branch; 3], element: Element) {
    let present = |b: saju_tables::Branch| {
        ALL_POSITIONS
            .iter()
            .any(|&p| out.get(p).ganji.branch == b)
    };
    if !branches.iter().copied().all(present) {
        return;
    }
    for p in ALL_POSITIONS {
        let pillar = out.get(p);
        if branches.contains(&pillar.ganji.branch) && pillar.enhanced_element.is_none() {
            out.set(p, claimed(pillar, element, false));
        }
    }
}
