use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// One entry from a normalized station search response.
///
/// `uid` is the only field the upstream guarantees; everything else may be
/// absent and is left as `None` rather than defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StationSearchResult {
    pub uid: i64,

    pub name: String,

    #[validate(range(min = 0, max = 500))]
    pub aqi: Option<i64>,

    pub time: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: Option<f64>,
}

impl StationSearchResult {
    pub fn has_coordinates(&self) -> bool {
        self.lat.is_some() && self.lon.is_some()
    }
}

/// A raw station entry from a bounding-box query, deserialized leniently.
///
/// The upstream reports `aqi` as either a number or a string (including
/// placeholders like "-"), so it is kept as an opaque JSON value until
/// `analyzers::geo::extract_valid` decides whether the entry is usable.
#[derive(Debug, Clone, Deserialize)]
pub struct MapStation {
    #[serde(default)]
    pub uid: Option<i64>,

    #[serde(default)]
    pub lat: Option<f64>,

    #[serde(default)]
    pub lon: Option<f64>,

    #[serde(default)]
    pub aqi: Option<Value>,

    #[serde(default)]
    pub station: Option<MapStationMeta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapStationMeta {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_validation() {
        let station = StationSearchResult {
            uid: 1451,
            name: "Mumbai US Consulate".to_string(),
            aqi: Some(155),
            time: Some("2026-08-20 11:00:00".to_string()),
            lat: Some(19.0728),
            lon: Some(72.8826),
        };

        assert!(station.validate().is_ok());
        assert!(station.has_coordinates());
    }

    #[test]
    fn test_invalid_latitude_fails_validation() {
        let station = StationSearchResult {
            uid: 1451,
            name: "Broken".to_string(),
            aqi: Some(80),
            time: None,
            lat: Some(91.0),
            lon: Some(0.0),
        };

        assert!(station.validate().is_err());
    }

    #[test]
    fn test_missing_geo_is_not_a_validation_error() {
        let station = StationSearchResult {
            uid: 99,
            name: "Unknown station".to_string(),
            aqi: None,
            time: None,
            lat: None,
            lon: None,
        };

        assert!(station.validate().is_ok());
        assert!(!station.has_coordinates());
    }
}
