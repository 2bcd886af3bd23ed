//! Static city directory.
//!
//! Read-only lookup from a birthplace name to coordinates and a
//! political zone. Resolution tries three strategies in priority
//! order: exact match (romanized or hangul, case-insensitive),
//! administrative-suffix-stripped match, then substring fallback.

use serde::{Deserialize, Serialize};

use crate::zone::ZoneId;

/// Geographic coordinates in degrees (east and north positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    pub longitude: f64,
    pub latitude: f64,
}

/// One directory entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityEntry {
    pub name: &'static str,
    pub hangul: &'static str,
    pub longitude: f64,
    pub latitude: f64,
    pub zone: ZoneId,
}

impl CityEntry {
    /// Coordinates of the entry.
    pub fn coordinates(&self) -> GeoCoordinates {
        GeoCoordinates {
            longitude: self.longitude,
            latitude: self.latitude,
        }
    }
}

/// Administrative suffixes stripped by the second matching strategy.
const NAME_SUFFIXES: [&str; 8] = [
    "특별시", "광역시", "-si", "-gun", "-gu", "시", "군", "구",
];

const K: ZoneId = ZoneId::KoreaStandard;

/// The built-in directory.
const DIRECTORY: [CityEntry; 32] = [
    CityEntry { name: "Seoul", hangul: "서울", longitude: 126.9780, latitude: 37.5665, zone: K },
    CityEntry { name: "Busan", hangul: "부산", longitude: 129.0756, latitude: 35.1796, zone: K },
    CityEntry { name: "Incheon", hangul: "인천", longitude: 126.7052, latitude: 37.4563, zone: K },
    CityEntry { name: "Daegu", hangul: "대구", longitude: 128.6014, latitude: 35.8714, zone: K },
    CityEntry { name: "Daejeon", hangul: "대전", longitude: 127.3845, latitude: 36.3504, zone: K },
    CityEntry { name: "Gwangju", hangul: "광주", longitude: 126.8526, latitude: 35.1595, zone: K },
    CityEntry { name: "Ulsan", hangul: "울산", longitude: 129.3114, latitude: 35.5384, zone: K },
    CityEntry { name: "Suwon", hangul: "수원", longitude: 127.0286, latitude: 37.2636, zone: K },
    CityEntry { name: "Changwon", hangul: "창원", longitude: 128.6811, latitude: 35.2281, zone: K },
    CityEntry { name: "Seongnam", hangul: "성남", longitude: 127.1378, latitude: 37.4449, zone: K },
    CityEntry { name: "Goyang", hangul: "고양", longitude: 126.8320, latitude: 37.6584, zone: K },
    CityEntry { name: "Yongin", hangul: "용인", longitude: 127.1775, latitude: 37.2411, zone: K },
    CityEntry { name: "Jeonju", hangul: "전주", longitude: 127.1480, latitude: 35.8242, zone: K },
    CityEntry { name: "Cheongju", hangul: "청주", longitude: 127.4890, latitude: 36.6424, zone: K },
    CityEntry { name: "Cheonan", hangul: "천안", longitude: 127.1522, latitude: 36.8151, zone: K },
    CityEntry { name: "Pohang", hangul: "포항", longitude: 129.3435, latitude: 36.0190, zone: K },
    CityEntry { name: "Jeju", hangul: "제주", longitude: 126.5312, latitude: 33.4996, zone: K },
    CityEntry { name: "Chuncheon", hangul: "춘천", longitude: 127.7298, latitude: 37.8813, zone: K },
    CityEntry { name: "Gangneung", hangul: "강릉", longitude: 128.8761, latitude: 37.7519, zone: K },
    CityEntry { name: "Andong", hangul: "안동", longitude: 128.7294, latitude: 36.5684, zone: K },
    CityEntry { name: "Mokpo", hangul: "목포", longitude: 126.3922, latitude: 34.8118, zone: K },
    CityEntry { name: "Yeosu", hangul: "여수", longitude: 127.6622, latitude: 34.7604, zone: K },
    CityEntry { name: "Gimhae", hangul: "김해", longitude: 128.8895, latitude: 35.2342, zone: K },
    CityEntry { name: "Pyongyang", hangul: "평양", longitude: 125.7625, latitude: 39.0392, zone: K },
    CityEntry { name: "Tokyo", hangul: "도쿄", longitude: 139.6917, latitude: 35.6895, zone: ZoneId::JapanStandard },
    CityEntry { name: "Osaka", hangul: "오사카", longitude: 135.5023, latitude: 34.6937, zone: ZoneId::JapanStandard },
    CityEntry { name: "Beijing", hangul: "베이징", longitude: 116.4074, latitude: 39.9042, zone: ZoneId::ChinaStandard },
    CityEntry { name: "Shanghai", hangul: "상하이", longitude: 121.4737, latitude: 31.2304, zone: ZoneId::ChinaStandard },
    CityEntry { name: "New York", hangul: "뉴욕", longitude: -74.0060, latitude: 40.7128, zone: ZoneId::UsEastern },
    CityEntry { name: "Los Angeles", hangul: "로스앤젤레스", longitude: -118.2437, latitude: 34.0522, zone: ZoneId::UsPacific },
    CityEntry { name: "London", hangul: "런던", longitude: -0.1278, latitude: 51.5074, zone: ZoneId::Greenwich },
    CityEntry { name: "Paris", hangul: "파리", longitude: 2.3522, latitude: 48.8566, zone: ZoneId::CentralEuropean },
];

/// The read-only city directory.
#[derive(Debug, Clone)]
pub struct CityDirectory {
    entries: &'static [CityEntry],
}

impl Default for CityDirectory {
    fn default() -> Self {
        Self { entries: &DIRECTORY }
    }
}

impl CityDirectory {
    /// Directory backed by a caller-supplied static table.
    pub fn with_entries(entries: &'static [CityEntry]) -> Self {
        Self { entries }
    }

    /// All romanized city names, in directory order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// Resolve a birthplace name to a directory entry.
    ///
    /// Strategies in priority order: exact, suffix-stripped, substring.
    pub fn resolve(&self, name: &str) -> Option<&CityEntry> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        if let Some(e) = self.entries.iter().find(|e| Self::exact(e, &query)) {
            return Some(e);
        }

        let stripped = Self::strip_suffix(&query);
        if stripped != query {
            if let Some(e) = self.entries.iter().find(|e| Self::exact(e, &stripped)) {
                return Some(e);
            }
        }

        self.entries.iter().find(|e| {
            let n = e.name.to_lowercase();
            n.contains(&query) || query.contains(&n) || query.contains(e.hangul)
        })
    }

    /// Coordinates for a city name, if resolvable.
    pub fn coordinates(&self, name: &str) -> Option<GeoCoordinates> {
        self.resolve(name).map(CityEntry::coordinates)
    }

    fn exact(entry: &CityEntry, query: &str) -> bool {
        entry.name.to_lowercase() == query || entry.hangul == query
    }

    fn strip_suffix(query: &str) -> String {
        for suffix in NAME_SUFFIXES {
            if let Some(base) = query.strip_suffix(suffix) {
                let base = base.trim_end_matches([' ', '-']);
                if !base.is_empty() {
                    return base.to_string();
                }
            }
        }
        query.to_string()
    }
}
