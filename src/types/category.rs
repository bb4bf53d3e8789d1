//! AQI severity bands and their fixed display constants

use serde::{Deserialize, Serialize};

/// One of the six AQI severity bands, ordered from least to most severe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthySensitive,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// Severity rank, 0 (Good) to 5 (Hazardous).
    pub fn rank(self) -> u8 {
        match self {
            AqiCategory::Good => 0,
            AqiCategory::Moderate => 1,
            AqiCategory::UnhealthySensitive => 2,
            AqiCategory::Unhealthy => 3,
            AqiCategory::VeryUnhealthy => 4,
            AqiCategory::Hazardous => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthySensitive => "Unhealthy (Sensitive)",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Colored marker shown next to the label.
    pub fn glyph(self) -> &'static str {
        match self {
            AqiCategory::Good => "🟢",
            AqiCategory::Moderate => "🟡",
            AqiCategory::UnhealthySensitive => "🟠",
            AqiCategory::Unhealthy => "🔴",
            AqiCategory::VeryUnhealthy => "🟣",
            AqiCategory::Hazardous => "⚫",
        }
    }

    /// Band color (hex) used for the gauge bar and steps.
    pub fn color(self) -> &'static str {
        match self {
            AqiCategory::Good => "#00e400",
            AqiCategory::Moderate => "#ffff00",
            AqiCategory::UnhealthySensitive => "#ff7e00",
            AqiCategory::Unhealthy => "#ff0000",
            AqiCategory::VeryUnhealthy => "#8f3f97",
            AqiCategory::Hazardous => "#7e0023",
        }
    }

    /// Short health advisory for the result card and the report.
    pub fn advisory(self) -> &'static str {
        match self {
            AqiCategory::Good => "Air quality is excellent.",
            AqiCategory::Moderate => "Acceptable; minor concern for sensitive groups.",
            AqiCategory::UnhealthySensitive => "Children or elderly may experience effects.",
            AqiCategory::Unhealthy => "Health effects possible for everyone.",
            AqiCategory::VeryUnhealthy => "Emergency health warning conditions.",
            AqiCategory::Hazardous => "Serious health effects for the entire population.",
        }
    }

    /// Longer description used on the AQI scale reference table.
    pub fn health_impact(self) -> &'static str {
        match self {
            AqiCategory::Good => "Air quality is considered satisfactory.",
            AqiCategory::Moderate => "Acceptable, but may affect sensitive groups.",
            AqiCategory::UnhealthySensitive => "May cause breathing discomfort.",
            AqiCategory::Unhealthy => "Everyone may begin to experience health effects.",
            AqiCategory::VeryUnhealthy => "Health warnings of emergency conditions.",
            AqiCategory::Hazardous => "Serious health effects for everyone.",
        }
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
