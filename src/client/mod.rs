pub mod waqi;

pub use waqi::WaqiClient;
