//! The four pillar calculators.
//!
//! All four consume the corrected local-solar instant. Year and month
//! boundaries are astronomical (Ipchun / the jie terms, or Seollal in
//! the domestic year rule); the day count is a pure modulo over the
//! continuous day number; the hour follows the two-hour windows.

use saju_calendar::{
    CivilDate, SolarTerm, civil_to_jdn, lunar_new_year, month_index_from_longitude,
    sun_apparent_longitude, term_instant_ut, ut_to_tt,
};
use saju_tables::{Branch, GanJi, Stem};

use crate::error::EngineError;

/// Sexagenary offset of the continuous day count: JDN + 49 ≡ 0 (mod
/// 60) on a Gap-Ja day (anchored at 1912-02-18).
const DAY_CYCLE_OFFSET: i64 = 49;

/// Sexagenary offset of the year count: year − 4 ≡ 0 (mod 60) in a
/// Gap-Ja year (1984).
const YEAR_CYCLE_OFFSET: i64 = 4;

/// The sexagenary year in force at an adjusted instant.
///
/// International mode flips the year at the Ipchun instant; the
/// domestic rule flips it at Seollal (the first day of lunar month 1),
/// which is where leap-month bookkeeping matters.
pub fn effective_year(
    adjusted_date: CivilDate,
    jd_ut: f64,
    international: bool,
) -> Result<i32, EngineError> {
    let year = adjusted_date.year;
    if international {
        let boundary = term_instant_ut(year, SolarTerm::Ipchun);
        Ok(if jd_ut < boundary { year - 1 } else { year })
    } else {
        let seollal = lunar_new_year(year)?;
        let before = civil_to_jdn(adjusted_date) < civil_to_jdn(seollal);
        Ok(if before { year - 1 } else { year })
    }
}

/// Year pillar for an effective sexagenary year.
pub fn year_pillar(effective_year: i32) -> GanJi {
    GanJi::from_index(effective_year as i64 - YEAR_CYCLE_OFFSET)
}

/// Month pillar from the Sun's position and the year stem.
///
/// The branch follows the jie interval the instant falls in; the stem
/// follows the five-tiger rule (the In-month stem of a Gap/Gi year is
/// Byeong, advancing two stems per year-stem step).
pub fn month_pillar(jd_ut: f64, year_stem: Stem) -> Result<GanJi, EngineError> {
    let lambda = sun_apparent_longitude(ut_to_tt(jd_ut));
    let month_index = month_index_from_longitude(lambda) as i64;

    let branch = Branch::from_index(2 + month_index);
    let first_month_stem = (year_stem.index() % 5) as i64 * 2 + 2;
    let stem = Stem::from_index(first_month_stem + month_index);

    GanJi::new(stem, branch).ok_or(EngineError::Calculation("month pillar outside cycle"))
}

/// Day pillar from the adjusted calendar date.
///
/// A pure modulo over the continuous day number, so it is independent
/// of the year and month rules; the 1582 calendar transition is folded
/// in by the day-number conversion itself.
pub fn day_pillar(adjusted_date: CivilDate) -> GanJi {
    GanJi::from_index(civil_to_jdn(adjusted_date) + DAY_CYCLE_OFFSET)
}

/// Hour pillar from the adjusted hour fraction and the day stem.
///
/// The branch is the two-hour window (Ja opens at 23:00); the stem
/// follows the five-rat rule keyed on the day stem.
pub fn hour_pillar(day_stem: Stem, hour_fraction: f64) -> Result<GanJi, EngineError> {
    let branch = Branch::from_hour_fraction(hour_fraction);
    let stem = Stem::from_index(
        (day_stem.index() % 5) as i64 * 2 + branch.index() as i64,
    );
    GanJi::new(stem, branch).ok_or(EngineError::Calculation("hour pillar outside cycle"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_calendar::jd_from_civil;

    #[test]
    fn year_1984_is_gap_ja() {
        assert_eq!(year_pillar(1984), GanJi::from_index(0));
    }

    #[test]
    fn year_1989_is_gi_sa() {
        let g = year_pillar(1989);
        assert_eq!(g.stem, Stem::Gi);
        assert_eq!(g.branch, Branch::Sa);
    }

    #[test]
    fn effective_year_flips_at_ipchun() {
        // 1990-01-15 noon UT is before Ipchun 1990.
        let date = CivilDate::new(1990, 1, 15);
        let jd = jd_from_civil(date, 12.0);
        assert_eq!(effective_year(date, jd, true).unwrap(), 1989);
        // Mid-year is unambiguous.
        let date = CivilDate::new(1990, 7, 1);
        let jd = jd_from_civil(date, 12.0);
        assert_eq!(effective_year(date, jd, true).unwrap(), 1990);
    }

    #[test]
    fn effective_year_flips_at_seollal() {
        // Seollal 1990 fell on Jan 27.
        let jd = 0.0; // unused by the domestic rule
        assert_eq!(
            effective_year(CivilDate::new(1990, 1, 26), jd, false).unwrap(),
            1989
        );
        assert_eq!(
            effective_year(CivilDate::new(1990, 1, 27), jd, false).unwrap(),
            1990
        );
    }

    #[test]
    fn day_anchor_1912() {
        // 1912-02-18 is the Gap-Ja anchor.
        assert_eq!(day_pillar(CivilDate::new(1912, 2, 18)).index(), 0);
    }

    #[test]
    fn day_anchor_1949() {
        // 1949-10-01 was also a Gap-Ja day.
        assert_eq!(day_pillar(CivilDate::new(1949, 10, 1)).index(), 0);
    }

    #[test]
    fn day_1990_01_15_is_gyeong_jin() {
        let g = day_pillar(CivilDate::new(1990, 1, 15));
        assert_eq!(g.stem, Stem::Gyeong);
        assert_eq!(g.branch, Branch::Jin);
    }

    #[test]
    fn day_cycle_property() {
        let d = CivilDate::new(1990, 1, 15);
        let shifted = saju_calendar::add_days(d, 60);
        assert_eq!(day_pillar(d), day_pillar(shifted));
    }

    #[test]
    fn month_january_1990() {
        // Mid-January sits in the Chuk month of a Gi year: Jeong-Chuk.
        let jd = jd_from_civil(CivilDate::new(1990, 1, 15), 4.0);
        let g = month_pillar(jd, Stem::Gi).unwrap();
        assert_eq!(g.stem, Stem::Jeong);
        assert_eq!(g.branch, Branch::Chuk);
    }

    #[test]
    fn month_stem_five_tiger_rule() {
        // In-month stems: Gap/Gi years start at Byeong, Eul/Gyeong at
        // Mu, Byeong/Sin at Gyeong, Jeong/Im at Im, Mu/Gye at Gap.
        let jd = jd_from_civil(CivilDate::new(1990, 2, 20), 4.0);
        for (year_stem, expected) in [
            (Stem::Gap, Stem::Byeong),
            (Stem::Eul, Stem::Mu),
            (Stem::Byeong, Stem::Gyeong),
            (Stem::Jeong, Stem::Im),
            (Stem::Mu, Stem::Gap),
        ] {
            let g = month_pillar(jd, year_stem).unwrap();
            assert_eq!(g.branch, Branch::In);
            assert_eq!(g.stem, expected, "year stem {year_stem:?}");
        }
    }

    #[test]
    fn hour_five_rat_rule() {
        // Ja-hour stems: Gap/Gi days start at Gap, Eul/Gyeong at
        // Byeong, Byeong/Sin at Mu, Jeong/Im at Gyeong, Mu/Gye at Im.
        for (day_stem, expected) in [
            (Stem::Gap, Stem::Gap),
            (Stem::Gyeong, Stem::Byeong),
            (Stem::Sin, Stem::Mu),
            (Stem::Im, Stem::Gyeong),
            (Stem::Gye, Stem::Im),
        ] {
            let g = hour_pillar(day_stem, 23.5).unwrap();
            assert_eq!(g.branch, Branch::Ja);
            assert_eq!(g.stem, expected, "day stem {day_stem:?}");
        }
    }

    #[test]
    fn hour_13_on_gyeong_day() {
        let g = hour_pillar(Stem::Gyeong, 13.0).unwrap();
        assert_eq!(g.stem, Stem::Gye);
        assert_eq!(g.branch, Branch::Mi);
    }

    #[test]
    fn hour_boundary_at_23() {
        assert_eq!(hour_pillar(Stem::Gap, 23.0).unwrap().branch, Branch::Ja);
        assert_eq!(
            hour_pillar(Stem::Gap, 22.0 + 59.0 / 60.0).unwrap().branch,
            Branch::Hae
        );
    }
}
