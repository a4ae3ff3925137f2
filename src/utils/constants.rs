/// WAQI API endpoint
pub const WAQI_BASE_URL: &str = "https://api.waqi.info";

/// AQI scale bounds
pub const AQI_MIN: i64 = 0;
pub const AQI_MAX: i64 = 500;

/// EPA AQI band upper bounds (inclusive)
pub const EPA_GOOD_MAX: i64 = 50;
pub const EPA_MODERATE_MAX: i64 = 100;
pub const EPA_UNHEALTHY_SG_MAX: i64 = 150;
pub const EPA_UNHEALTHY_MAX: i64 = 200;
pub const EPA_VERY_UNHEALTHY_MAX: i64 = 300;

/// WHO PM2.5 interim target upper bounds (inclusive), in µg/m³
pub const WHO_PM25_GOOD_MAX: f64 = 15.0;
pub const WHO_PM25_FAIR_MAX: f64 = 25.0;
pub const WHO_PM25_MODERATE_MAX: f64 = 37.5;
pub const WHO_PM25_POOR_MAX: f64 = 75.0;

/// Severity color scheme (hex)
pub const COLOR_GOOD: &str = "#00d26a";
pub const COLOR_MODERATE: &str = "#facc15";
pub const COLOR_UNHEALTHY_SG: &str = "#fb923c";
pub const COLOR_UNHEALTHY: &str = "#f97316";
pub const COLOR_VERY_UNHEALTHY: &str = "#ef4444";
pub const COLOR_HAZARDOUS: &str = "#7f1d1d";
pub const COLOR_UNKNOWN: &str = "#9ca3af";

/// Forecast defaults: 6 hourly steps, each a uniform draw from
/// [FORECAST_STEP_LOW, FORECAST_STEP_HIGH)
pub const FORECAST_HORIZON: usize = 6;
pub const FORECAST_STEP_LOW: i64 = -5;
pub const FORECAST_STEP_HIGH: i64 = 6;

/// Clustering defaults
pub const CLUSTER_SEED: u64 = 42;
pub const CLUSTER_RESTARTS: usize = 10;
pub const CLUSTER_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_CLUSTER_COUNT: usize = 3;

/// Request defaults
pub const DEFAULT_TIMEOUT_SECS: u64 = 12;
pub const DEFAULT_MAP_DELTA: f64 = 0.6;
