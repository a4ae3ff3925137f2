use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::models::StationSearchResult;
use crate::readers::{lenient_i64, require_ok_data};

/// Normalizes `/search/` responses into canonical station records.
#[derive(Debug)]
pub struct SearchReader;

impl SearchReader {
    pub fn new() -> Self {
        Self
    }

    /// Turns a raw search payload into a list of `StationSearchResult`.
    ///
    /// Entries without a usable `uid` are skipped; `uid` is the one field
    /// the record cannot exist without. Every other field falls back to an
    /// explicit absent value rather than raising.
    pub fn read_payload(&self, payload: &Value) -> Result<Vec<StationSearchResult>> {
        let data = require_ok_data(payload)?;

        let entries = data.as_array().map(Vec::as_slice).unwrap_or(&[]);
        let mut results = Vec::with_capacity(entries.len());

        for entry in entries {
            match self.parse_entry(entry) {
                Some(station) => results.push(station),
                None => debug!("skipping search entry without uid: {}", entry),
            }
        }

        Ok(results)
    }

    fn parse_entry(&self, entry: &Value) -> Option<StationSearchResult> {
        let uid = entry.get("uid").and_then(lenient_i64)?;

        let station = entry.get("station");
        let name = station
            .and_then(|s| s.get("name"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown station")
            .to_string();

        let geo = station
            .and_then(|s| s.get("geo"))
            .and_then(Value::as_array);
        let lat = geo.and_then(|g| g.first()).and_then(Value::as_f64);
        let lon = geo.and_then(|g| g.get(1)).and_then(Value::as_f64);

        let aqi = entry.get("aqi").and_then(lenient_i64);

        let time = entry.get("time").and_then(|t| {
            t.get("stime")
                .or_else(|| t.get("s"))
                .and_then(Value::as_str)
                .map(str::to_string)
        });

        Some(StationSearchResult {
            uid,
            name,
            aqi,
            time,
            lat,
            lon,
        })
    }
}

impl Default for SearchReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn search_payload() -> Value {
        json!({
            "status": "ok",
            "data": [
                {
                    "uid": 1451,
                    "aqi": "155",
                    "time": {"tz": "+05:30", "stime": "2026-08-20 11:00:00"},
                    "station": {
                        "name": "Mumbai US Consulate, India",
                        "geo": [19.0728, 72.8826]
                    }
                },
                {
                    "uid": 8190,
                    "aqi": "-",
                    "time": {"s": "2026-08-20 10:00:00"},
                    "station": {}
                },
                {
                    "aqi": "42",
                    "station": {"name": "No uid station"}
                }
            ]
        })
    }

    #[test]
    fn test_full_entry_is_normalized() {
        let results = SearchReader::new().read_payload(&search_payload()).unwrap();

        assert_eq!(results.len(), 2);
        let first = &results[0];
        assert_eq!(first.uid, 1451);
        assert_eq!(first.name, "Mumbai US Consulate, India");
        assert_eq!(first.aqi, Some(155));
        assert_eq!(first.time.as_deref(), Some("2026-08-20 11:00:00"));
        assert_eq!(first.lat, Some(19.0728));
        assert_eq!(first.lon, Some(72.8826));
    }

    #[test]
    fn test_missing_name_and_geo_fall_back() {
        let results = SearchReader::new().read_payload(&search_payload()).unwrap();

        let second = &results[1];
        assert_eq!(second.name, "Unknown station");
        assert_eq!(second.aqi, None);
        assert_eq!(second.lat, None);
        assert_eq!(second.lon, None);
        // time.s fallback when stime is absent
        assert_eq!(second.time.as_deref(), Some("2026-08-20 10:00:00"));
    }

    #[test]
    fn test_entry_without_uid_is_skipped() {
        let results = SearchReader::new().read_payload(&search_payload()).unwrap();
        assert!(results.iter().all(|s| s.name != "No uid station"));
    }

    #[test]
    fn test_short_geo_array_leaves_lon_absent() {
        let payload = json!({
            "status": "ok",
            "data": [{"uid": 7, "station": {"name": "Half geo", "geo": [10.5]}}]
        });

        let results = SearchReader::new().read_payload(&payload).unwrap();
        assert_eq!(results[0].lat, Some(10.5));
        assert_eq!(results[0].lon, None);
    }

    #[test]
    fn test_error_status_propagates_payload() {
        let payload = json!({"status": "error", "data": "Invalid key"});
        assert!(SearchReader::new().read_payload(&payload).is_err());
    }

    #[test]
    fn test_empty_data_yields_empty_list() {
        let payload = json!({"status": "ok", "data": []});
        let results = SearchReader::new().read_payload(&payload).unwrap();
        assert!(results.is_empty());
    }
}
