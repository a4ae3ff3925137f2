pub mod cluster;
pub mod forecast;
pub mod geo;
pub mod health;

pub use cluster::SeverityClusterer;
pub use forecast::TrendForecaster;
pub use geo::{normalized_weights, GeoFilter, GeoSamples};
pub use health::HealthClassifier;
