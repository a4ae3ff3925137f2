use serde::{Deserialize, Serialize};

/// EPA AQI severity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    Unknown,
}

impl AqiCategory {
    /// Human-readable band label, as shown on EPA material.
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
            AqiCategory::Unknown => "Unknown",
        }
    }
}

/// WHO PM2.5 interim-target tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pm25Category {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
    Unknown,
}

impl Pm25Category {
    pub fn label(&self) -> &'static str {
        match self {
            Pm25Category::Good => "Good",
            Pm25Category::Fair => "Fair",
            Pm25Category::Moderate => "Moderate",
            Pm25Category::Poor => "Poor",
            Pm25Category::VeryPoor => "Very Poor",
            Pm25Category::Unknown => "Unknown",
        }
    }
}

/// Full EPA classification of one AQI value. Derived on demand from a
/// numeric input, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    pub category: AqiCategory,
    pub color: String,
    pub description: String,
    pub recommended_actions: Vec<String>,
}

/// WHO PM2.5 classification of one particulate reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pm25Assessment {
    pub category: Pm25Category,
    pub color: String,
    pub description: String,
}

/// Age-aware activity guidance for one AQI value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizedAdvice {
    pub band: String,
    pub message: String,
    pub tasks: Vec<String>,
    pub color: String,
}
