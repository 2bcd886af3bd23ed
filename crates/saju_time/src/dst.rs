//! Daylight-saving reference table.
//!
//! DST is treated as swappable reference data: a flat list of dated
//! windows per zone, consulted read-only. The built-in table carries
//! the documented Korean regimes (1948–1951, 1955–1960, 1987–1988);
//! a caller with better data supplies its own table.

use saju_calendar::{CivilDate, civil_to_jdn};

use crate::zone::ZoneId;

/// One DST window: the offset applies from `start` (inclusive) to
/// `end` (exclusive), both in local standard time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DstRule {
    pub zone: ZoneId,
    pub start: (i32, u32, u32, u32),
    pub end: (i32, u32, u32, u32),
    pub offset_minutes: i32,
    /// Windows of a discontinued regime, gated by the
    /// `apply_historical_dst` option rather than `apply_dst`.
    pub historical: bool,
}

/// Civil instant as whole minutes on the day-number scale.
fn instant_minutes(year: i32, month: u32, day: u32, hour: u32) -> i64 {
    civil_to_jdn(CivilDate::new(year, month, day)) * 1440 + hour as i64 * 60
}

const fn rok(start: (i32, u32, u32, u32), end: (i32, u32, u32, u32)) -> DstRule {
    DstRule {
        zone: ZoneId::KoreaStandard,
        start,
        end,
        offset_minutes: 60,
        historical: true,
    }
}

/// The documented Korean summer-time windows.
///
/// 1948–1951 and 1955–1960 ran on varying spring/autumn dates;
/// 1987–1988 switched at 02:00/03:00 in May and October.
const KOREAN_DST: [DstRule; 12] = [
    rok((1948, 6, 1, 0), (1948, 9, 13, 0)),
    rok((1949, 4, 3, 0), (1949, 9, 11, 0)),
    rok((1950, 4, 1, 0), (1950, 9, 10, 0)),
    rok((1951, 5, 6, 0), (1951, 9, 9, 0)),
    rok((1955, 5, 5, 0), (1955, 9, 9, 0)),
    rok((1956, 5, 20, 0), (1956, 9, 30, 0)),
    rok((1957, 5, 5, 0), (1957, 9, 22, 0)),
    rok((1958, 5, 4, 0), (1958, 9, 21, 0)),
    rok((1959, 5, 3, 0), (1959, 9, 20, 0)),
    rok((1960, 5, 1, 0), (1960, 9, 18, 0)),
    rok((1987, 5, 10, 2), (1987, 10, 11, 3)),
    rok((1988, 5, 8, 2), (1988, 10, 9, 3)),
];

/// A loaded DST table, consulted read-only.
#[derive(Debug, Clone)]
pub struct DstTable {
    rules: Vec<DstRule>,
}

impl Default for DstTable {
    /// The built-in Korean table.
    fn default() -> Self {
        Self {
            rules: KOREAN_DST.to_vec(),
        }
    }
}

impl DstTable {
    /// A table with no windows at all.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// A table from caller-supplied windows.
    pub fn from_rules(rules: Vec<DstRule>) -> Self {
        Self { rules }
    }

    /// The seasonal offset in minutes in force at a civil instant, or 0.
    ///
    /// `apply_current` admits non-historical windows, `apply_historical`
    /// the discontinued regimes.
    pub fn offset_minutes_at(
        &self,
        zone: ZoneId,
        date: CivilDate,
        hour_fraction: f64,
        apply_current: bool,
        apply_historical: bool,
    ) -> i32 {
        let at = civil_to_jdn(date) * 1440 + (hour_fraction * 60.0).floor() as i64;
        for rule in &self.rules {
            if rule.zone != zone {
                continue;
            }
            if rule.historical && !apply_historical {
                continue;
            }
            if !rule.historical && !apply_current {
                continue;
            }
            let (sy, sm, sd, sh) = rule.start;
            let (ey, em, ed, eh) = rule.end;
            if at >= instant_minutes(sy, sm, sd, sh) && at < instant_minutes(ey, em, ed, eh) {
                return rule.offset_minutes;
            }
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_1948_window() {
        let t = DstTable::default();
        let z = ZoneId::KoreaStandard;
        assert_eq!(
            t.offset_minutes_at(z, CivilDate::new(1948, 7, 15), 12.0, false, true),
            60
        );
    }

    #[test]
    fn outside_any_window() {
        let t = DstTable::default();
        let z = ZoneId::KoreaStandard;
        assert_eq!(
            t.offset_minutes_at(z, CivilDate::new(1948, 3, 1), 12.0, false, true),
            0
        );
        assert_eq!(
            t.offset_minutes_at(z, CivilDate::new(1990, 7, 15), 12.0, true, true),
            0
        );
    }

    #[test]
    fn historical_gate() {
        let t = DstTable::default();
        let z = ZoneId::KoreaStandard;
        assert_eq!(
            t.offset_minutes_at(z, CivilDate::new(1948, 7, 15), 12.0, true, false),
            0
        );
    }

    #[test]
    fn window_edges() {
        let t = DstTable::default();
        let z = ZoneId::KoreaStandard;
        // 1987 window opens at 02:00 on May 10.
        assert_eq!(
            t.offset_minutes_at(z, CivilDate::new(1987, 5, 10), 1.5, false, true),
            0
        );
        assert_eq!(
            t.offset_minutes_at(z, CivilDate::new(1987, 5, 10), 2.0, false, true),
            60
        );
        // End instant is exclusive.
        assert_eq!(
            t.offset_minutes_at(z, CivilDate::new(1987, 10, 11), 3.0, false, true),
            0
        );
        assert_eq!(
            t.offset_minutes_at(z, CivilDate::new(1987, 10, 11), 2.5, false, true),
            60
        );
    }

    #[test]
    fn other_zone_untouched() {
        let t = DstTable::default();
        assert_eq!(
            t.offset_minutes_at(
                ZoneId::JapanStandard,
                CivilDate::new(1948, 7, 15),
                12.0,
                true,
                true
            ),
            0
        );
    }
}
