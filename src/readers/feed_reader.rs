use serde_json::Value;

use crate::error::{MonitorError, Result};
use crate::models::StationReading;
use crate::readers::{lenient_i64, require_ok_data};

/// Normalizes `/feed/` responses into a single `StationReading`.
#[derive(Debug)]
pub struct FeedReader;

impl FeedReader {
    pub fn new() -> Self {
        Self
    }

    /// Builds one reading from a raw feed payload.
    ///
    /// Each pollutant and weather field is read independently from
    /// `iaqi.<code>.v`; a missing sub-key leaves that field absent and never
    /// blocks extraction of the others. The station id comes from the
    /// top-level `data.idx`, falling back to the uid the caller requested
    /// (geo lookups have no requested uid).
    pub fn read_payload(&self, payload: &Value, uid_hint: Option<i64>) -> Result<StationReading> {
        let data = require_ok_data(payload)?;

        let uid = data
            .get("idx")
            .and_then(lenient_i64)
            .or(uid_hint)
            .ok_or_else(|| {
                MonitorError::Transport("feed payload carries no station identifier".to_string())
            })?;

        let aqi = data.get("aqi").and_then(lenient_i64);

        let city = data
            .get("city")
            .and_then(|c| c.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string);

        let time = data
            .get("time")
            .and_then(|t| t.get("s"))
            .and_then(Value::as_str)
            .map(str::to_string);

        let dominant_pollutant = data
            .get("dominentpol")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(StationReading {
            uid,
            aqi,
            pm25: iaqi_value(data, "pm25"),
            pm10: iaqi_value(data, "pm10"),
            o3: iaqi_value(data, "o3"),
            no2: iaqi_value(data, "no2"),
            so2: iaqi_value(data, "so2"),
            co: iaqi_value(data, "co"),
            temp: iaqi_value(data, "t"),
            humidity: iaqi_value(data, "h"),
            wind: iaqi_value(data, "w"),
            pressure: iaqi_value(data, "p"),
            city,
            time,
            dominant_pollutant,
            raw: data.clone(),
        })
    }
}

impl Default for FeedReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads `iaqi.<code>.v` as a float, absent if any level of the path is
/// missing or non-numeric.
fn iaqi_value(data: &Value, code: &str) -> Option<f64> {
    data.get("iaqi")
        .and_then(|iaqi| iaqi.get(code))
        .and_then(|entry| entry.get("v"))
        .and_then(Value::as_f64)
}
