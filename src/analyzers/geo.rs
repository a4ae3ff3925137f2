use tracing::debug;

use crate::models::MapStation;
use crate::readers::lenient_i64;
use crate::utils::constants::AQI_MAX;

/// Parallel coordinate/AQI sequences extracted from a bounding-box result,
/// ready for clustering or heatmap rendering. All three vectors are always
/// the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoSamples {
    pub lats: Vec<f64>,
    pub lons: Vec<f64>,
    pub aqis: Vec<i64>,
}

impl GeoSamples {
    pub fn len(&self) -> usize {
        self.aqis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aqis.is_empty()
    }

    pub fn aqis_as_f64(&self) -> Vec<f64> {
        self.aqis.iter().map(|&a| a as f64).collect()
    }
}

/// Best-effort filter over raw map stations.
///
/// An entry makes it through only when its AQI parses to an integer in
/// (0, 500] and both coordinates are present. Anything else drops that one
/// entry silently; this is a filter, not a validator.
pub struct GeoFilter;

impl GeoFilter {
    pub fn new() -> Self {
        Self
    }

    pub fn extract_valid(&self, stations: &[MapStation]) -> GeoSamples {
        let mut samples = GeoSamples::default();

        for station in stations {
            let aqi = match station.aqi.as_ref().and_then(lenient_i64) {
                Some(aqi) if aqi > 0 && aqi <= AQI_MAX => aqi,
                _ => continue,
            };
            let (Some(lat), Some(lon)) = (station.lat, station.lon) else {
                continue;
            };

            samples.lats.push(lat);
            samples.lons.push(lon);
            samples.aqis.push(aqi);
        }

        debug!(
            "geo filter kept {} of {} stations",
            samples.len(),
            stations.len()
        );
        samples
    }
}

impl Default for GeoFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Min-max normalizes AQI values into [0, 1] weights for heatmap layers.
pub fn normalized_weights(aqis: &[i64]) -> Vec<f64> {
    let Some(&min) = aqis.iter().min() else {
        return Vec::new();
    };
    let max = *aqis.iter().max().expect("non-empty");

    aqis.iter()
        .map(|&v| (v - min) as f64 / ((max - min) as f64 + 1e-6))
        .collect()
}
