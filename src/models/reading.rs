use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// A point-in-time snapshot of one station's feed.
///
/// Every pollutant and weather field is independently optional: the WAQI
/// `iaqi` block reports whatever sensors the station actually has, and a
/// missing sub-key is normal, not an error. A reading is never mutated once
/// built; a fresh fetch supersedes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StationReading {
    pub uid: i64,

    #[validate(range(min = 0, max = 500))]
    pub aqi: Option<i64>,

    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub o3: Option<f64>,
    pub no2: Option<f64>,
    pub so2: Option<f64>,
    pub co: Option<f64>,

    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    pub wind: Option<f64>,
    pub pressure: Option<f64>,

    pub city: Option<String>,
    pub time: Option<String>,
    pub dominant_pollutant: Option<String>,

    /// The raw `data` object as received, kept for diagnostics.
    pub raw: Value,
}

impl StationReading {
    /// Parses the station-local observation timestamp, if one was reported.
    ///
    /// WAQI formats `time.s` as `YYYY-MM-DD HH:MM:SS`.
    pub fn observed_at(&self) -> Option<NaiveDateTime> {
        self.time
            .as_deref()
            .and_then(|s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn empty_reading() -> StationReading {
        StationReading {
            uid: 1451,
            aqi: Some(155),
            pm25: None,
            pm10: None,
            o3: None,
            no2: None,
            so2: None,
            co: None,
            temp: None,
            humidity: None,
            wind: None,
            pressure: None,
            city: None,
            time: None,
            dominant_pollutant: None,
            raw: Value::Null,
        }
    }

    #[test]
    fn test_observed_at_parses_waqi_timestamp() {
        let reading = StationReading {
            time: Some("2026-08-20 11:00:00".to_string()),
            ..empty_reading()
        };

        let ts = reading.observed_at().unwrap();
        assert_eq!(ts.year(), 2026);
        assert_eq!(ts.month(), 8);
        assert_eq!(ts.hour(), 11);
    }

    #[test]
    fn test_observed_at_tolerates_garbage() {
        let reading = StationReading {
            time: Some("not a timestamp".to_string()),
            ..empty_reading()
        };

        assert!(reading.observed_at().is_none());
    }

    #[test]
    fn test_aqi_range_validation() {
        let reading = StationReading {
            aqi: Some(760),
            ..empty_reading()
        };

        assert!(reading.validate().is_err());
    }
}
