use serde_json::Value;

use crate::error::Result;
use crate::models::MapStation;
use crate::readers::require_ok_data;

/// Normalizes `/map/bounds/` responses into lenient map-station entries.
///
/// Bounding-box entries stay deliberately loose (`MapStation` keeps `aqi` as
/// an opaque value); `analyzers::geo::extract_valid` applies the strict
/// filter downstream.
#[derive(Debug)]
pub struct BoundsReader;

impl BoundsReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_payload(&self, payload: &Value) -> Result<Vec<MapStation>> {
        let data = require_ok_data(payload)?;
        let stations: Vec<MapStation> = serde_json::from_value(data.clone())?;
        Ok(stations)
    }
}

impl Default for BoundsReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bounds_entries_survive_missing_fields() {
        let payload = json!({
            "status": "ok",
            "data": [
                {"uid": 1, "lat": 19.0, "lon": 72.8, "aqi": "80",
                 "station": {"name": "Bandra", "time": "2026-08-20T11:00:00+05:30"}},
                {"uid": 2, "aqi": 55},
                {"lat": 18.9, "lon": 72.9}
            ]
        });

        let stations = BoundsReader::new().read_payload(&payload).unwrap();
        assert_eq!(stations.len(), 3);
        assert_eq!(stations[0].station.as_ref().unwrap().name.as_deref(), Some("Bandra"));
        assert!(stations[1].lat.is_none());
        assert!(stations[2].aqi.is_none());
    }

    #[test]
    fn test_non_ok_status_is_error() {
        let payload = json!({"status": "error", "data": "Over quota"});
        assert!(BoundsReader::new().read_payload(&payload).is_err());
    }
}
