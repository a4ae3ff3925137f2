use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{MonitorError, Result};
use crate::models::{MapStation, StationReading, StationSearchResult};
use crate::readers::{BoundsReader, FeedReader, SearchReader};
use crate::settings::Settings;
use crate::utils::constants::WAQI_BASE_URL;

/// Blocking client for the WAQI (World Air Quality Index) API.
///
/// Every call either completes, times out, or returns a typed error; the
/// client holds no mutable state, so concurrent use from several callers is
/// safe. Responses are normalized by the `readers` module before they leave
/// this type.
#[derive(Debug)]
pub struct WaqiClient {
    http: reqwest::blocking::Client,
    token: String,
    base_url: String,
    search_reader: SearchReader,
    feed_reader: FeedReader,
    bounds_reader: BoundsReader,
}

impl WaqiClient {
    /// Builds a client from settings.
    ///
    /// An absent token is a configuration error raised here, before any
    /// network call is ever attempted.
    pub fn new(settings: &Settings) -> Result<Self> {
        if !settings.has_token() {
            return Err(MonitorError::Config(
                "missing WAQI API token (set AEROGUARD_TOKEN or add `token` to aeroguard.toml)"
                    .to_string(),
            ));
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            token: settings.token.trim().to_string(),
            base_url: WAQI_BASE_URL.to_string(),
            search_reader: SearchReader::new(),
            feed_reader: FeedReader::new(),
            bounds_reader: BoundsReader::new(),
        })
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Searches monitoring stations by keyword.
    ///
    /// The keyword is trimmed; an empty keyword short-circuits to an empty
    /// list without touching the network.
    pub fn search(&self, keyword: &str) -> Result<Vec<StationSearchResult>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/search/", self.base_url);
        let payload = self.get_json(&url, &[("keyword", keyword)])?;
        let results = self.search_reader.read_payload(&payload)?;

        info!("search '{}' returned {} stations", keyword, results.len());
        Ok(results)
    }

    /// Fetches the full feed for one station by uid.
    pub fn feed_by_station(&self, uid: i64) -> Result<StationReading> {
        let url = format!("{}/feed/@{}/", self.base_url, uid);
        let payload = self.get_json(&url, &[])?;
        self.feed_reader.read_payload(&payload, Some(uid))
    }

    /// Fetches the feed of the station nearest to a coordinate.
    ///
    /// Missing fields stay explicitly absent, the same policy as the
    /// per-station path.
    pub fn feed_by_geo(&self, lat: f64, lon: f64) -> Result<StationReading> {
        let url = format!("{}/feed/geo:{};{}/", self.base_url, lat, lon);
        let payload = self.get_json(&url, &[])?;
        self.feed_reader.read_payload(&payload, None)
    }

    /// Fetches raw station entries inside a rectangle centered on
    /// (lat, lon) with the given half-width in degrees.
    pub fn stations_in_bounds(&self, lat: f64, lon: f64, delta: f64) -> Result<Vec<MapStation>> {
        let latlng = format!(
            "{},{},{},{}",
            lat - delta,
            lon - delta,
            lat + delta,
            lon + delta
        );

        let url = format!("{}/map/bounds/", self.base_url);
        let payload = self.get_json(&url, &[("latlng", latlng.as_str())])?;
        self.bounds_reader.read_payload(&payload)
    }

    fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .query(query)
            .query(&[("token", self.token.as_str())])
            .send()?;

        if !response.status().is_success() {
            return Err(MonitorError::Transport(format!(
                "WAQI API returned HTTP {}",
                response.status()
            )));
        }

        let payload: Value = response.json()?;
        Ok(payload)
    }
}
