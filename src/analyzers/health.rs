use crate::models::{
    AqiCategory, HealthAssessment, PersonalizedAdvice, Pm25Assessment, Pm25Category,
};
use crate::utils::constants::{
    COLOR_GOOD, COLOR_HAZARDOUS, COLOR_MODERATE, COLOR_UNHEALTHY, COLOR_UNHEALTHY_SG,
    COLOR_UNKNOWN, COLOR_VERY_UNHEALTHY, EPA_GOOD_MAX, EPA_MODERATE_MAX, EPA_UNHEALTHY_MAX,
    EPA_UNHEALTHY_SG_MAX, EPA_VERY_UNHEALTHY_MAX, WHO_PM25_FAIR_MAX, WHO_PM25_GOOD_MAX,
    WHO_PM25_MODERATE_MAX, WHO_PM25_POOR_MAX,
};

/// One row of the EPA band table.
struct EpaBand {
    /// Inclusive upper AQI bound; `i64::MAX` for the open-ended last band.
    upper: i64,
    category: AqiCategory,
    color: &'static str,
    description: &'static str,
    actions: &'static [&'static str],
}

/// The single authoritative EPA band table. Both `classify_epa` and `advise`
/// derive band, color and text from here so the two call sites cannot drift.
const EPA_BANDS: [EpaBand; 6] = [
    EpaBand {
        upper: EPA_GOOD_MAX,
        category: AqiCategory::Good,
        color: COLOR_GOOD,
        description: "Air quality is satisfactory, and air pollution poses little or no risk.",
        actions: &["Enjoy outdoor activities", "No health precautions needed"],
    },
    EpaBand {
        upper: EPA_MODERATE_MAX,
        category: AqiCategory::Moderate,
        color: COLOR_MODERATE,
        description: "Air quality is acceptable. However, there may be a risk for some people \
                      who are unusually sensitive to air pollution.",
        actions: &["Unusually sensitive people should consider limiting prolonged outdoor exertion"],
    },
    EpaBand {
        upper: EPA_UNHEALTHY_SG_MAX,
        category: AqiCategory::UnhealthyForSensitive,
        color: COLOR_UNHEALTHY_SG,
        description: "Members of sensitive groups may experience health effects. The general \
                      public is less likely to be affected.",
        actions: &[
            "Children, elderly, and people with respiratory conditions should limit outdoor activities",
            "Consider moving activities indoors",
            "Reduce prolonged or heavy exertion outdoors",
        ],
    },
    EpaBand {
        upper: EPA_UNHEALTHY_MAX,
        category: AqiCategory::Unhealthy,
        color: COLOR_UNHEALTHY,
        description: "Some members of the general public may experience health effects; members \
                      of sensitive groups may experience more serious health effects.",
        actions: &[
            "Everyone should reduce prolonged outdoor exertion",
            "Sensitive groups should avoid all outdoor physical activity",
            "Consider wearing a mask if going outside",
        ],
    },
    EpaBand {
        upper: EPA_VERY_UNHEALTHY_MAX,
        category: AqiCategory::VeryUnhealthy,
        color: COLOR_VERY_UNHEALTHY,
        description: "Health alert: The risk of health effects is increased for everyone.",
        actions: &[
            "Everyone should avoid prolonged outdoor exertion",
            "Sensitive groups should remain indoors",
            "Close windows and use air purifiers",
            "Wear N95 masks if must go outside",
        ],
    },
    EpaBand {
        upper: i64::MAX,
        category: AqiCategory::Hazardous,
        color: COLOR_HAZARDOUS,
        description: "Health warning of emergency conditions: everyone is more likely to be affected.",
        actions: &[
            "Everyone should avoid all outdoor activities",
            "Remain indoors with windows closed",
            "Use air purifiers on high settings",
            "Seek medical attention if experiencing symptoms",
        ],
    },
];

const UNKNOWN_DESCRIPTION: &str = "Data unavailable";

fn epa_band(aqi: i64) -> &'static EpaBand {
    EPA_BANDS
        .iter()
        .find(|band| aqi <= band.upper)
        .unwrap_or(&EPA_BANDS[EPA_BANDS.len() - 1])
}

/// Classifies AQI and PM2.5 readings against EPA and WHO standards.
///
/// All methods are pure; an absent input classifies as Unknown rather than
/// erroring.
pub struct HealthClassifier;

impl HealthClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Maps an AQI value onto the six EPA bands (inclusive upper bounds).
    pub fn classify_epa(&self, aqi: Option<i64>) -> HealthAssessment {
        let Some(aqi) = aqi else {
            return HealthAssessment {
                category: AqiCategory::Unknown,
                color: COLOR_UNKNOWN.to_string(),
                description: UNKNOWN_DESCRIPTION.to_string(),
                recommended_actions: Vec::new(),
            };
        };

        let band = epa_band(aqi);
        HealthAssessment {
            category: band.category,
            color: band.color.to_string(),
            description: band.description.to_string(),
            recommended_actions: band.actions.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Maps a PM2.5 concentration (µg/m³) onto the WHO interim targets.
    pub fn classify_who_pm25(&self, pm25: Option<f64>) -> Pm25Assessment {
        let Some(pm25) = pm25 else {
            return Pm25Assessment {
                category: Pm25Category::Unknown,
                color: COLOR_UNKNOWN.to_string(),
                description: UNKNOWN_DESCRIPTION.to_string(),
            };
        };

        let (category, color, description) = if pm25 <= WHO_PM25_GOOD_MAX {
            (
                Pm25Category::Good,
                COLOR_GOOD,
                "Air quality meets WHO interim target-4",
            )
        } else if pm25 <= WHO_PM25_FAIR_MAX {
            (
                Pm25Category::Fair,
                COLOR_MODERATE,
                "Exceeds WHO interim target-3",
            )
        } else if pm25 <= WHO_PM25_MODERATE_MAX {
            (
                Pm25Category::Moderate,
                COLOR_UNHEALTHY_SG,
                "Exceeds WHO interim target-2",
            )
        } else if pm25 <= WHO_PM25_POOR_MAX {
            (
                Pm25Category::Poor,
                COLOR_UNHEALTHY,
                "Exceeds WHO interim target-1",
            )
        } else {
            (
                Pm25Category::VeryPoor,
                COLOR_VERY_UNHEALTHY,
                "Far exceeds all WHO guidelines",
            )
        };

        Pm25Assessment {
            category,
            color: color.to_string(),
            description: description.to_string(),
        }
    }

    /// Produces activity guidance for a user of the given age.
    ///
    /// Band label and color come from the shared EPA table. Ages at or below
    /// 12 and at or above 60 count as sensitive; that only changes the
    /// guidance in the Moderate and Unhealthy-for-Sensitive-Groups tiers.
    pub fn advise(&self, age: u32, aqi: Option<i64>) -> PersonalizedAdvice {
        let sensitive = age <= 12 || age >= 60;

        let Some(aqi) = aqi else {
            return PersonalizedAdvice {
                band: AqiCategory::Unknown.label().to_string(),
                message: "AQI unavailable. Try again later.".to_string(),
                tasks: vec!["Indoor-only (light)".to_string()],
                color: COLOR_UNKNOWN.to_string(),
            };
        };

        let band = epa_band(aqi);

        let (message, tasks): (&str, &[&str]) = if aqi <= EPA_GOOD_MAX {
            (
                "Great time for outdoor activities.",
                &["Outdoor workout", "Walk / run", "Errands"],
            )
        } else if aqi <= EPA_MODERATE_MAX {
            if sensitive {
                (
                    "OK for most, but kids/seniors should reduce prolonged outdoor exertion.",
                    &["Short outdoor walk", "Indoor workout", "Errands (short)"],
                )
            } else {
                (
                    "Generally OK. If symptoms appear, reduce intensity.",
                    &["Outdoor workout (moderate)", "Errands"],
                )
            }
        } else if aqi <= EPA_UNHEALTHY_SG_MAX {
            if sensitive {
                (
                    "For kids/seniors: avoid outdoor exertion. Prefer indoor activities.",
                    &["Indoor workout", "Indoor chores", "Air purifier time"],
                )
            } else {
                (
                    "Limit prolonged outdoor exertion.",
                    &["Indoor workout", "Short essential errands"],
                )
            }
        } else if aqi <= EPA_UNHEALTHY_MAX {
            (
                "Avoid outdoor activities; prefer indoors.",
                &["Indoor workout", "Mask if must go out"],
            )
        } else {
            (
                "Stay indoors; avoid outdoor exposure.",
                &["Indoor only", "Close windows", "Air purifier time"],
            )
        };

        PersonalizedAdvice {
            band: band.category.label().to_string(),
            message: message.to_string(),
            tasks: tasks.iter().map(|s| s.to_string()).collect(),
            color: band.color.to_string(),
        }
    }
}

impl Default for HealthClassifier {
    fn default() -> Self {
        Self::new()
    }
}
