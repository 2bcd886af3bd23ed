//! Boundary and cycle properties of the pipeline.

use saju_calendar::{CivilDate, SolarTerm, add_days, civil_from_jd, term_instant_ut};
use saju_engine::{Birthplace, CalculationOptions, Engine, Sex, day_pillar};
use saju_tables::{Branch, Stem};

fn engine() -> Engine {
    Engine::new()
}

/// Options that leave the civil instant untouched, so test inputs map
/// 1:1 onto the engine's internal instant.
fn uncorrected() -> CalculationOptions {
    CalculationOptions {
        use_local_solar_time: false,
        apply_historical_dst: false,
        use_international_mode: true,
        ..CalculationOptions::default()
    }
}

// ---------------------------------------------------------------------------
// Sexagenary validity
// ---------------------------------------------------------------------------

#[test]
fn all_computed_pillars_are_valid_pairings() {
    let e = engine();
    let opts = CalculationOptions::default();
    let mut date = CivilDate::new(1948, 3, 1);
    for step in 0..40 {
        let hour = (step % 24) as f64 + 0.5;
        let chart = e
            .calculate(date, hour, Sex::Male, &Birthplace::name("Seoul"), &opts)
            .unwrap();
        for p in chart.pillars.as_array() {
            assert_eq!(
                p.stem.polarity(),
                p.branch.polarity(),
                "invalid pairing at {date} {hour}"
            );
        }
        date = add_days(date, 367);
    }
}

// ---------------------------------------------------------------------------
// Day-pillar cycle
// ---------------------------------------------------------------------------

#[test]
fn day_pillar_repeats_every_sixty_days() {
    let mut date = CivilDate::new(1582, 9, 1);
    // Crosses the Julian→Gregorian transition and three centuries.
    for _ in 0..30 {
        let shifted = add_days(date, 60);
        assert_eq!(day_pillar(date), day_pillar(shifted), "at {date}");
        date = add_days(date, 4321);
    }
}

// ---------------------------------------------------------------------------
// Hour-branch boundary
// ---------------------------------------------------------------------------

#[test]
fn hour_23_opens_the_ja_window() {
    let e = engine();
    let opts = uncorrected();
    let place = Birthplace::name("Seoul");
    let date = CivilDate::new(1990, 6, 10);

    let at_23 = e.calculate(date, 23.0, Sex::Male, &place, &opts).unwrap();
    assert_eq!(at_23.pillars.hour.branch, Branch::Ja);

    let before = e
        .calculate(date, 22.0 + 59.0 / 60.0, Sex::Male, &place, &opts)
        .unwrap();
    assert_eq!(before.pillars.hour.branch, Branch::Hae);

    // The day pillar still belongs to the civil date.
    assert_eq!(at_23.pillars.day, before.pillars.day);
}

// ---------------------------------------------------------------------------
// Solar-term year boundary (international mode)
// ---------------------------------------------------------------------------

#[test]
fn ipchun_boundary_is_deterministic() {
    let e = engine();
    let opts = uncorrected();
    let place = Birthplace::name("Seoul");

    // Ipchun 1990 in Seoul civil time, truncated to the whole second.
    let local = civil_from_jd(term_instant_ut(1990, SolarTerm::Ipchun) + 540.0 / 1440.0);
    let base = local.hour as f64 + local.minute as f64 / 60.0 + local.second.floor() / 3600.0;

    let year_stem_at = |offset_seconds: f64| {
        e.calculate(
            local.date,
            base + offset_seconds / 3600.0,
            Sex::Male,
            &place,
            &opts,
        )
        .unwrap()
        .pillars
        .year
        .stem
    };

    // A second before the boundary the old year still holds.
    assert_eq!(year_stem_at(-1.0), Stem::Gi);
    // Two seconds after, the new Gyeong-O year has begun.
    assert_eq!(year_stem_at(2.0), Stem::Gyeong);
    // The truncated boundary instant itself selects one side stably.
    assert_eq!(year_stem_at(0.0), year_stem_at(0.0));
}

#[test]
fn month_flips_with_the_jie() {
    let e = engine();
    let opts = uncorrected();
    let place = Birthplace::name("Seoul");

    // Gyeongchip 1990 in Seoul civil time.
    let local = civil_from_jd(term_instant_ut(1990, SolarTerm::Gyeongchip) + 540.0 / 1440.0);
    let base = local.hour as f64 + local.minute as f64 / 60.0 + local.second.floor() / 3600.0;

    let before = e
        .calculate(local.date, base - 2.0 / 3600.0, Sex::Male, &place, &opts)
        .unwrap();
    let after = e
        .calculate(local.date, base + 2.0 / 3600.0, Sex::Male, &place, &opts)
        .unwrap();
    assert_eq!(before.pillars.month.branch, Branch::In);
    assert_eq!(after.pillars.month.branch, Branch::Myo);
}

// ---------------------------------------------------------------------------
// Correction additivity across the option grid
// ---------------------------------------------------------------------------

#[test]
fn correction_total_equals_component_sum() {
    let e = engine();
    let places = [
        Birthplace::name("Seoul"),
        Birthplace::name("Tokyo"),
        Birthplace::name("Beijing"),
        Birthplace::name("New York"),
    ];
    let dates = [
        CivilDate::new(1949, 5, 1),
        CivilDate::new(1957, 8, 15),
        CivilDate::new(1988, 6, 21),
        CivilDate::new(2001, 12, 31),
    ];
    for place in &places {
        for date in dates {
            for political in [false, true] {
                for international in [false, true] {
                    for seconds in [false, true] {
                        let opts = CalculationOptions {
                            use_political_timezone: political,
                            use_international_mode: international,
                            use_second_precision: seconds,
                            ..CalculationOptions::default()
                        };
                        let chart = e
                            .calculate(date, 11.75, Sex::Female, place, &opts)
                            .unwrap();
                        let c = chart.correction;
                        let sum = c.timezone_minutes
                            + c.longitude_minutes
                            + c.dst_minutes
                            + c.regional_minutes;
                        assert!(
                            (c.total_minutes - sum).abs() < 1e-9,
                            "{place:?} {date} {opts:?}"
                        );
                    }
                }
            }
        }
    }
}
