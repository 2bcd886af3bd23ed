//! Relational annotators.
//!
//! Three independent lookups over the resolved pillars, all relative
//! to the day master: ten relations (primary stem, improved branch,
//! and hidden stems), vitality stages, and spirit killers (year-branch
//! reference). Order between the three does not matter; each reads the
//! same immutable input.

use saju_tables::{
    ten_relation, ten_relation_for_element, spirit_killer, vitality_stage,
};

use crate::pillar::{AnnotatedPillar, FourPillars, ResolvedPillar, ResolvedPillars};

/// Annotate a resolved pillar set into the final chart pillars.
pub fn annotate(resolved: &ResolvedPillars) -> FourPillars {
    let day_master = resolved.day_master();
    let year_branch = resolved.year.ganji.branch;

    let one = |p: &ResolvedPillar| -> AnnotatedPillar {
        let stem = p.ganji.stem;
        let branch = p.ganji.branch;

        // A combination-transformed stem keeps its polarity while its
        // element is overridden.
        let stem_relation = match (p.enhanced_element, p.original_stem) {
            (Some(element), Some(_)) => {
                ten_relation_for_element(day_master, element, stem.polarity())
            }
            _ => ten_relation(day_master, stem),
        };

        // Improved branch relation: through the principal hidden stem
        // rather than the branch's nominal element.
        let branch_relation = ten_relation(day_master, branch.principal_hidden_stem());

        let hidden = branch.hidden_stems();
        AnnotatedPillar {
            stem,
            branch,
            original_stem: p.original_stem,
            enhanced_element: p.enhanced_element,
            hidden_stems: hidden.to_vec(),
            stem_relation,
            branch_relation,
            hidden_stem_relations: hidden
                .iter()
                .map(|&s| crate::pillar::HiddenStemRelation {
                    stem: s,
                    relation: ten_relation(day_master, s),
                })
                .collect(),
            vitality_stage: vitality_stage(day_master, branch),
            spirit_killer: Some(spirit_killer(year_branch, branch)),
        }
    };

    FourPillars {
        year: one(&resolved.year),
        month: one(&resolved.month),
        day: one(&resolved.day),
        hour: one(&resolved.hour),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combine::resolve;
    use crate::pillar::RawPillars;
    use saju_tables::{
        Branch, Element, GanJi, SpiritKiller, Stem, TenRelation, VitalityStage,
    };

    fn sample() -> ResolvedPillars {
        // The usage-sample chart: Gi-Sa / Jeong-Chuk / Gyeong-Jin /
        // Gye-Mi.
        resolve(RawPillars {
            year: GanJi::new(Stem::Gi, Branch::Sa).unwrap(),
            month: GanJi::new(Stem::Jeong, Branch::Chuk).unwrap(),
            day: GanJi::new(Stem::Gyeong, Branch::Jin).unwrap(),
            hour: GanJi::new(Stem::Gye, Branch::Mi).unwrap(),
        })
    }

    #[test]
    fn sample_stem_relations() {
        let chart = annotate(&sample());
        assert_eq!(chart.year.stem_relation, TenRelation::Jeongin);
        assert_eq!(chart.month.stem_relation, TenRelation::Jeonggwan);
        assert_eq!(chart.day.stem_relation, TenRelation::Bigyeon);
        assert_eq!(chart.hour.stem_relation, TenRelation::Sanggwan);
    }

    #[test]
    fn sample_branch_relations() {
        // Through the principal hidden stems: Sa→Byeong, Chuk→Gi,
        // Jin→Mu, Mi→Gi, all against the Gyeong day master.
        let chart = annotate(&sample());
        assert_eq!(chart.year.branch_relation, TenRelation::Pyeongwan);
        assert_eq!(chart.month.branch_relation, TenRelation::Jeongin);
        assert_eq!(chart.day.branch_relation, TenRelation::Pyeonin);
        assert_eq!(chart.hour.branch_relation, TenRelation::Jeongin);
    }

    #[test]
    fn sample_vitality_stages() {
        let chart = annotate(&sample());
        // Gyeong is born at Sa, buried at Chuk, nurtured at Jin.
        assert_eq!(chart.year.vitality_stage, VitalityStage::Jangsaeng);
        assert_eq!(chart.month.vitality_stage, VitalityStage::Myo);
        assert_eq!(chart.day.vitality_stage, VitalityStage::Yang);
        assert_eq!(chart.hour.vitality_stage, VitalityStage::Gwandae);
    }

    #[test]
    fn sample_spirit_killers() {
        // Year branch Sa (metal triad): Geopsal opens at In, so Sa is
        // Jisal, Chuk is Hwagaesal, Jin is Cheonsal... offset by cycle.
        let chart = annotate(&sample());
        assert_eq!(chart.year.spirit_killer, Some(SpiritKiller::Jisal));
        assert_eq!(chart.month.spirit_killer, Some(SpiritKiller::Hwagaesal));
        assert_eq!(chart.day.spirit_killer, Some(SpiritKiller::Cheonsal));
        assert_eq!(chart.hour.spirit_killer, Some(SpiritKiller::Wolsal));
    }

    #[test]
    fn hidden_stem_relations_cover_all_hidden_stems() {
        let chart = annotate(&sample());
        for p in chart.as_array() {
            assert_eq!(p.hidden_stems.len(), p.hidden_stem_relations.len());
        }
        // Jin hides Mu, Eul, Gye against Gyeong: Pyeonin, Jeongjae,
        // Sanggwan.
        let rel: Vec<_> = chart.day.hidden_stem_relations.iter().map(|h| h.relation).collect();
        assert_eq!(
            rel,
            vec![
                TenRelation::Pyeonin,
                TenRelation::Jeongjae,
                TenRelation::Sanggwan
            ]
        );
    }

    #[test]
    fn transformed_stem_reads_through_enhanced_element() {
        // Gap+Gi adjacent: both transform to earth. Against the Gyeong
        // day master the year stem then reads as Pyeonin (yang earth)
        // instead of Pyeonjae (yang wood).
        let resolved = resolve(RawPillars {
            year: GanJi::new(Stem::Gap, Branch::Ja).unwrap(),
            month: GanJi::new(Stem::Gi, Branch::Chuk).unwrap(),
            day: GanJi::new(Stem::Gyeong, Branch::O).unwrap(),
            hour: GanJi::new(Stem::Im, Branch::O).unwrap(),
        });
        assert_eq!(resolved.year.enhanced_element, Some(Element::Earth));
        let chart = annotate(&resolved);
        assert_eq!(chart.year.stem_relation, TenRelation::Pyeonin);
        // The underlying stem is still exposed unchanged.
        assert_eq!(chart.year.stem, Stem::Gap);
    }

    #[test]
    fn day_master_is_stable_under_annotation() {
        let resolved = sample();
        let before = resolved.day_master();
        let chart = annotate(&resolved);
        assert_eq!(chart.day.stem, before);
    }
}
