//! Greeting resolution for a located visitor.
//!
//! Turns a [`GeoRecord`] into the display address, a region-specific
//! greeting and the distance from the site's reference point. Resolution is
//! total: unlisted countries and provinces get a generic greeting.

mod regions;
mod time_of_day;

pub use regions::{
    CHINA, COUNTRIES, PROVINCES, ProvinceEntry, ProvinceGreeting, UNKNOWN,
    UNKNOWN_COUNTRY_GREETING, UNKNOWN_PROVINCE_GREETING, country_greeting, find_province,
};
pub use time_of_day::time_greeting;

use crate::geo::{Coordinate, GeoRecord, distance_km};

/// Region-derived part of a welcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub address: String,
    pub greeting: &'static str,
    pub distance_km: u32,
}

/// Resolve address, greeting and distance for `record`.
pub fn resolve(record: &GeoRecord, reference: Coordinate) -> Resolution {
    let (address, greeting) = resolve_region(record);

    Resolution {
        address,
        greeting,
        distance_km: distance_km(reference, record.coordinate()),
    }
}

fn resolve_region(record: &GeoRecord) -> (String, &'static str) {
    if record.country != CHINA {
        let greeting = country_greeting(&record.country).unwrap_or(UNKNOWN_COUNTRY_GREETING);
        return (country_address(&record.country), greeting);
    }

    match find_province(&record.province) {
        Some(entry) if entry.address_override => {
            (entry.name.to_string(), entry.greeting_for(&record.city))
        }
        Some(entry) => (full_address(record), entry.greeting_for(&record.city)),
        None => (full_address(record), UNKNOWN_PROVINCE_GREETING),
    }
}

/// Overseas lookups carry no region detail; show the country itself.
fn country_address(country: &str) -> String {
    if country.is_empty() {
        UNKNOWN.to_string()
    } else {
        country.to_string()
    }
}

/// Province, city and district joined by single spaces. Empty parts are kept.
fn full_address(record: &GeoRecord) -> String {
    format!("{} {} {}", record.province, record.city, record.district)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::REFERENCE_POINT;

    fn china(province: &str, city: &str, district: &str) -> GeoRecord {
        GeoRecord {
            ip: Some("1.2.3.4".into()),
            country: CHINA.into(),
            province: province.into(),
            city: city.into(),
            district: district.into(),
            longitude: 116.4,
            latitude: 39.9,
        }
    }

    fn abroad(country: &str) -> GeoRecord {
        GeoRecord {
            ip: None,
            country: country.into(),
            province: String::new(),
            city: String::new(),
            district: String::new(),
            longitude: 139.69,
            latitude: 35.69,
        }
    }

    #[test]
    fn beijing_overrides_address() {
        let r = resolve(&china("北京市", "北京市", "朝阳区"), REFERENCE_POINT);
        assert_eq!(r.address, "北京市");
        assert!(r.greeting.contains("北——京——欢迎你"));
    }

    #[test]
    fn sar_overrides_address() {
        let r = resolve(&china("香港特别行政区", "", ""), REFERENCE_POINT);
        assert_eq!(r.address, "香港特别行政区");
        assert_eq!(r.greeting, "永定贼有残留地鬼嚎，迎击光非岁玉");
    }

    #[test]
    fn suzhou_gets_city_greeting() {
        let r = resolve(&china("江苏省", "苏州市", "姑苏区"), REFERENCE_POINT);
        assert_eq!(r.address, "江苏省 苏州市 姑苏区");
        assert!(r.greeting.contains("苏杭"));
    }

    #[test]
    fn other_jiangsu_city_is_loose() {
        let r = resolve(&china("江苏省", "常州市", "武进区"), REFERENCE_POINT);
        assert_eq!(r.greeting, "散装是必须要散装的");
    }

    #[test]
    fn ordinary_province_keeps_full_address() {
        let r = resolve(&china("四川省", "成都市", "武侯区"), REFERENCE_POINT);
        assert_eq!(r.address, "四川省 成都市 武侯区");
        assert_eq!(r.greeting, "康康川妹子");
    }

    #[test]
    fn empty_segments_are_not_trimmed() {
        let r = resolve(&china("湖北省", "", ""), REFERENCE_POINT);
        assert_eq!(r.address, "湖北省  ");
    }

    #[test]
    fn unlisted_province_falls_back() {
        let r = resolve(&china("河南省", "郑州市", "中原区"), REFERENCE_POINT);
        assert_eq!(r.address, "河南省 郑州市 中原区");
        assert_eq!(r.greeting, UNKNOWN_PROVINCE_GREETING);
    }

    #[test]
    fn japan_greeting_and_country_address() {
        let r = resolve(&abroad("日本"), REFERENCE_POINT);
        assert_eq!(r.greeting, "よろしく，一起去看樱花吗");
        assert_eq!(r.address, "日本");
    }

    #[test]
    fn unknown_country_falls_back() {
        let r = resolve(&abroad("巴西"), REFERENCE_POINT);
        assert_eq!(r.greeting, "带我去你的国家看看吧");
        assert_eq!(r.address, "巴西");
    }

    #[test]
    fn empty_country_is_unknown() {
        let r = resolve(&abroad(""), REFERENCE_POINT);
        assert_eq!(r.address, UNKNOWN);
        assert_eq!(r.greeting, UNKNOWN_COUNTRY_GREETING);
    }

    #[test]
    fn province_is_ignored_outside_china() {
        let mut record = abroad("美国");
        record.province = "北京市".into();
        let r = resolve(&record, REFERENCE_POINT);
        assert_eq!(r.greeting, "Make America Great Again");
        assert_eq!(r.address, "美国");
    }

    #[test]
    fn reference_point_is_zero_km_away() {
        let mut record = china("河南省", "郑州市", "");
        record.latitude = 34.827619;
        record.longitude = 113.551425;
        assert_eq!(resolve(&record, REFERENCE_POINT).distance_km, 0);
    }

    #[test]
    fn every_table_row_resolves() {
        for (country, greeting) in COUNTRIES {
            assert_eq!(resolve(&abroad(country), REFERENCE_POINT).greeting, *greeting);
        }
        for entry in PROVINCES {
            let r = resolve(&china(entry.name, "某市", "某区"), REFERENCE_POINT);
            assert_eq!(r.greeting, entry.greeting_for("某市"));
            assert!(r.address.starts_with(entry.name));
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::geo::REFERENCE_POINT;
    use proptest::prelude::*;
    use proptest::sample::select;

    fn country() -> impl Strategy<Value = String> {
        let mut known: Vec<String> = COUNTRIES.iter().map(|(c, _)| c.to_string()).collect();
        known.push(CHINA.to_string());
        prop_oneof![select(known), ".{0,8}"]
    }

    fn province() -> impl Strategy<Value = String> {
        let known: Vec<String> = PROVINCES.iter().map(|p| p.name.to_string()).collect();
        prop_oneof![select(known), ".{0,8}"]
    }

    fn city() -> impl Strategy<Value = String> {
        prop_oneof![
            select(vec!["南京市".to_string(), "苏州市".to_string(), "泰州市".to_string()]),
            ".{0,8}"
        ]
    }

    proptest! {
        /// Any (country, province, city) yields a non-empty address and greeting
        #[test]
        fn resolution_is_total(
            country in country(),
            province in province(),
            city in city(),
            district in ".{0,8}",
            latitude in -90.0f64..=90.0,
            longitude in -180.0f64..=180.0,
        ) {
            let record = GeoRecord {
                ip: None,
                country,
                province,
                city,
                district,
                longitude,
                latitude,
            };
            let r = resolve(&record, REFERENCE_POINT);
            prop_assert!(!r.address.is_empty());
            prop_assert!(!r.greeting.is_empty());
            prop_assert!(r.distance_km <= 20038);
        }
    }
}
