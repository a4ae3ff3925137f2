pub mod assessment;
pub mod reading;
pub mod station;

pub use assessment::{
    AqiCategory, HealthAssessment, PersonalizedAdvice, Pm25Assessment, Pm25Category,
};
pub use reading::StationReading;
pub use station::{MapStation, MapStationMeta, StationSearchResult};
