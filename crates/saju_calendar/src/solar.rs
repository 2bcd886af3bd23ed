//! Apparent solar longitude and the 24 solar terms (절기).
//!
//! Longitude comes from the standard low-accuracy solar series (mean
//! longitude + equation of center + aberration and a nutation constant,
//! good to ~0.01°, i.e. term instants to ~15 s of arc-motion). Term
//! instants are found by bisection on the wrapped longitude difference,
//! which the Sun's monotonic motion keeps well-behaved.
//!
//! Sources: standard solar-position and ΔT polynomial formulas
//! (Meeus, Espenak). Original implementation from the fundamental
//! formulas.

use crate::julian::{J2000_JD, civil_from_jd, jd_from_civil};
use crate::types::CivilDate;

/// Maximum bisection iterations for a term instant.
const MAX_ITERATIONS: usize = 60;

/// Convergence threshold in days (~9 ms).
const CONVERGENCE_DAYS: f64 = 1.0e-7;

/// Half-width of the bisection bracket around the first guess, in days.
const BRACKET_DAYS: f64 = 20.0;

// ---------------------------------------------------------------------------
// ΔT (TT − UT)
// ---------------------------------------------------------------------------

/// ΔT = TT − UT in seconds for a decimal year.
///
/// Espenak/Meeus polynomial segments for 1600–2150; the long-range
/// parabola `-20 + 32 u²` (u in centuries from 1820) outside them.
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if y < 1600.0 || y >= 2150.0 {
        let u = (y - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u;
    }
    if y < 1700.0 {
        let t = y - 1600.0;
        return 120.0 - 0.9808 * t - 0.01532 * t * t + t * t * t / 7129.0;
    }
    if y < 1800.0 {
        let t = y - 1700.0;
        return 8.83 + 0.1603 * t - 0.0059285 * t * t + 0.00013336 * t * t * t
            - t.powi(4) / 1_174_000.0;
    }
    if y < 1860.0 {
        let t = y - 1800.0;
        return 13.72 - 0.332447 * t + 0.0068612 * t * t + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7);
    }
    if y < 1900.0 {
        let t = y - 1860.0;
        return 7.62 + 0.5737 * t - 0.251754 * t * t + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0;
    }
    if y < 1920.0 {
        let t = y - 1900.0;
        return -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4);
    }
    if y < 1941.0 {
        let t = y - 1920.0;
        return 21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t.powi(3);
    }
    if y < 1961.0 {
        let t = y - 1950.0;
        return 29.07 + 0.407 * t - t * t / 233.0 + t.powi(3) / 2547.0;
    }
    if y < 1986.0 {
        let t = y - 1975.0;
        return 45.45 + 1.067 * t - t * t / 260.0 - t.powi(3) / 718.0;
    }
    if y < 2005.0 {
        let t = y - 2000.0;
        return 63.86 + 0.3345 * t - 0.060374 * t * t + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5);
    }
    if y < 2050.0 {
        let t = y - 2000.0;
        return 62.92 + 0.32217 * t + 0.005589 * t * t;
    }
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
}

/// Decimal year of a JD (month-resolution, enough for ΔT).
fn decimal_year(jd: f64) -> f64 {
    let t = civil_from_jd(jd);
    t.date.year as f64 + (t.date.month as f64 - 0.5) / 12.0
}

/// Convert a TT Julian Date to UT.
pub fn tt_to_ut(jd_tt: f64) -> f64 {
    jd_tt - delta_t_seconds(decimal_year(jd_tt)) / 86_400.0
}

/// Convert a UT Julian Date to TT.
pub fn ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(decimal_year(jd_ut)) / 86_400.0
}

// ---------------------------------------------------------------------------
// Apparent solar longitude
// ---------------------------------------------------------------------------

/// Apparent geocentric ecliptic longitude of the Sun in degrees [0, 360).
pub fn sun_apparent_longitude(jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / 36_525.0;
    let l0 = 280.46646 + 36_000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.0001537 * t * t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = l0 + c - 0.00569 - 0.00478 * omega.sin();
    apparent.rem_euclid(360.0)
}

/// Signed wrapped difference `a - b` in (-180, 180].
fn wrapped_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

// ---------------------------------------------------------------------------
// The 24 solar terms
// ---------------------------------------------------------------------------

/// The 24 solar terms, Ipchun first (apparent longitude 315°, step 15°).
///
/// Even-indexed terms are the month-opening jie (절); odd-indexed terms
/// are the mid-month major terms (중기).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baengno,
    Chubun,
    Hallo,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
    Sohan,
    Daehan,
}

/// All 24 terms starting from Ipchun.
pub const ALL_TERMS: [SolarTerm; 24] = [
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baengno,
    SolarTerm::Chubun,
    SolarTerm::Hallo,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
    SolarTerm::Sohan,
    SolarTerm::Daehan,
];

impl SolarTerm {
    /// 0-based index from Ipchun.
    pub const fn index(self) -> u8 {
        match self {
            Self::Ipchun => 0,
            Self::Usu => 1,
            Self::Gyeongchip => 2,
            Self::Chunbun => 3,
            Self::Cheongmyeong => 4,
            Self::Gogu => 5,
            Self::Ipha => 6,
            Self::Soman => 7,
            Self::Mangjong => 8,
            Self::Haji => 9,
            Self::Soseo => 10,
            Self::Daeseo => 11,
            Self::Ipchu => 12,
            Self::Cheoseo => 13,
            Self::Baengno => 14,
            Self::Chubun => 15,
            Self::Hallo => 16,
            Self::Sanggang => 17,
            Self::Ipdong => 18,
            Self::Soseol => 19,
            Self::Daeseol => 20,
            Self::Dongji => 21,
            Self::Sohan => 22,
            Self::Daehan => 23,
        }
    }

    /// Target apparent solar longitude in degrees.
    pub const fn target_longitude(self) -> f64 {
        let deg = 315 + 15 * self.index() as u32;
        (deg % 360) as f64
    }

    /// Whether this term opens a pillar month (절).
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Approximate civil (month, day) of the term, used to seed the
    /// bisection bracket. Sohan and Daehan fall in January.
    const fn approximate_date(self) -> (u32, u32) {
        match self {
            Self::Ipchun => (2, 4),
            Self::Usu => (2, 19),
            Self::Gyeongchip => (3, 6),
            Self::Chunbun => (3, 21),
            Self::Cheongmyeong => (4, 5),
            Self::Gogu => (4, 20),
            Self::Ipha => (5, 6),
            Self::Soman => (5, 21),
            Self::Mangjong => (6, 6),
            Self::Haji => (6, 21),
            Self::Soseo => (7, 7),
            Self::Daeseo => (7, 23),
            Self::Ipchu => (8, 8),
            Self::Cheoseo => (8, 23),
            Self::Baengno => (9, 8),
            Self::Chubun => (9, 23),
            Self::Hallo => (10, 8),
            Self::Sanggang => (10, 23),
            Self::Ipdong => (11, 7),
            Self::Soseol => (11, 22),
            Self::Daeseol => (12, 7),
            Self::Dongji => (12, 22),
            Self::Sohan => (1, 6),
            Self::Daehan => (1, 20),
        }
    }
}

/// TT instant at which the Sun reaches `target_deg` apparent longitude,
/// bisected within `[guess - BRACKET_DAYS, guess + BRACKET_DAYS]`.
fn longitude_crossing_tt(guess_jd_tt: f64, target_deg: f64) -> f64 {
    let mut lo = guess_jd_tt - BRACKET_DAYS;
    let mut hi = guess_jd_tt + BRACKET_DAYS;
    for _ in 0..MAX_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if wrapped_diff(sun_apparent_longitude(mid), target_deg) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo < CONVERGENCE_DAYS {
            break;
        }
    }
    0.5 * (lo + hi)
}

/// TT instant of a solar term in a given civil year.
///
/// "In year y" means the occurrence whose civil date falls in year `y`
/// (so Sohan and Daehan are the January occurrences).
pub fn term_instant_tt(year: i32, term: SolarTerm) -> f64 {
    let (month, day) = term.approximate_date();
    let guess = jd_from_civil(CivilDate::new(year, month, day), 12.0);
    longitude_crossing_tt(guess, term.target_longitude())
}

/// UT instant of a solar term in a given civil year.
pub fn term_instant_ut(year: i32, term: SolarTerm) -> f64 {
    tt_to_ut(term_instant_tt(year, term))
}

/// Pillar-month index (0 = the Ipchun month .. 11) for an apparent
/// solar longitude.
///
/// The boundary longitude itself belongs to the opening month, which
/// makes the exact term instant deterministically part of the new
/// month.
pub fn month_index_from_longitude(lambda_deg: f64) -> u8 {
    ((lambda_deg - 315.0).rem_euclid(360.0) / 30.0).floor() as u8
}

/// TT instant at which the Sun next reaches a multiple of 30°
/// (a major term) at or after `jd_tt`, together with that longitude.
pub fn next_major_term_tt(jd_tt: f64) -> (f64, f64) {
    let lambda = sun_apparent_longitude(jd_tt);
    let target = (lambda / 30.0).ceil() * 30.0 % 360.0;
    // If we are exactly on a major term, it counts as the next one.
    let target = if wrapped_diff(lambda, target) == 0.0 {
        lambda
    } else {
        target
    };
    // The Sun needs at most ~31 days to advance 30°.
    let ahead = wrapped_diff(target, lambda).rem_euclid(360.0);
    let guess = jd_tt + ahead / 0.9856;
    (longitude_crossing_tt(guess, target), target)
}
