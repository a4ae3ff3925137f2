use serde::Deserialize;

use crate::error::Result;
use crate::utils::constants::{DEFAULT_MAP_DELTA, DEFAULT_TIMEOUT_SECS};

/// Runtime settings for the WAQI client.
///
/// Values are layered: built-in defaults, then an optional `aeroguard.toml`
/// file in the working directory, then `AEROGUARD_*` environment variables
/// (e.g. `AEROGUARD_TOKEN`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// WAQI API token. Empty means unconfigured; the client refuses to
    /// start without one.
    pub token: String,

    /// Request timeout in seconds for all API calls.
    pub timeout_secs: u64,

    /// Default half-width, in degrees, of the bounding box used for area
    /// queries.
    pub map_delta: f64,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("token", "")?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("map_delta", DEFAULT_MAP_DELTA)?
            .add_source(config::File::with_name("aeroguard").required(false))
            .add_source(config::Environment::with_prefix("AEROGUARD").try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            token: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            map_delta: DEFAULT_MAP_DELTA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_have_no_token() {
        let settings = Settings::default();
        assert!(!settings.has_token());
        assert_eq!(settings.timeout_secs, 12);
        assert!((settings.map_delta - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_whitespace_token_counts_as_missing() {
        let settings = Settings {
            token: "   ".to_string(),
            ..Settings::default()
        };
        assert!(!settings.has_token());
    }
}
