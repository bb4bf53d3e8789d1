//! Pollutant sub-index inputs and the model feature order

use serde::{Deserialize, Serialize};

use crate::config::InputLimits;
use crate::error::AqiError;

/// One of the four pollutants whose sub-index feeds the models.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Pollutant {
    Co,
    No2,
    Ozone,
    Pm25,
}

impl Pollutant {
    /// Declaration (display) order used by the dashboard and the report.
    pub const ALL: [Pollutant; 4] = [Pollutant::Co, Pollutant::No2, Pollutant::Ozone, Pollutant::Pm25];

    /// Short key used in JSON bodies, query strings and artifact feature names.
    pub fn key(self) -> &'static str {
        match self {
            Pollutant::Co => "co",
            Pollutant::No2 => "no2",
            Pollutant::Ozone => "ozone",
            Pollutant::Pm25 => "pm25",
        }
    }

    /// Human-readable sub-index label.
    pub fn label(self) -> &'static str {
        match self {
            Pollutant::Co => "CO AQI Value",
            Pollutant::No2 => "NO₂ AQI Value",
            Pollutant::Ozone => "Ozone AQI Value",
            Pollutant::Pm25 => "PM2.5 AQI Value",
        }
    }
}

impl std::fmt::Display for Pollutant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pollutant::Co => write!(f, "CO"),
            Pollutant::No2 => write!(f, "NO₂"),
            Pollutant::Ozone => write!(f, "Ozone"),
            Pollutant::Pm25 => write!(f, "PM2.5"),
        }
    }
}

/// Column order the regression models were trained with.
///
/// NOT the declaration order of [`PollutantReading`]: Ozone precedes NO₂.
/// Every predictor must build its feature vector from this constant.
pub const MODEL_FEATURE_ORDER: [Pollutant; 4] =
    [Pollutant::Co, Pollutant::Ozone, Pollutant::No2, Pollutant::Pm25];

/// Immutable set of four pollutant sub-index values.
///
/// Only constructible through [`PollutantReading::new`], so every instance
/// holds finite, non-negative values. Values above the dashboard slider
/// ranges are allowed; the models extrapolate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PollutantReading {
    co: f64,
    no2: f64,
    ozone: f64,
    pm25: f64,
}

impl PollutantReading {
    /// Validate and build a reading.
    pub fn new(co: f64, no2: f64, ozone: f64, pm25: f64) -> Result<Self, AqiError> {
        let reading = Self { co, no2, ozone, pm25 };
        for pollutant in Pollutant::ALL {
            check_sub_index(pollutant.key(), reading.value(pollutant))?;
        }
        Ok(reading)
    }

    pub fn co(&self) -> f64 {
        self.co
    }

    pub fn no2(&self) -> f64 {
        self.no2
    }

    pub fn ozone(&self) -> f64 {
        self.ozone
    }

    pub fn pm25(&self) -> f64 {
        self.pm25
    }

    pub fn value(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Co => self.co,
            Pollutant::No2 => self.no2,
            Pollutant::Ozone => self.ozone,
            Pollutant::Pm25 => self.pm25,
        }
    }

    /// Feature vector in [`MODEL_FEATURE_ORDER`].
    pub fn model_features(&self) -> [f64; 4] {
        MODEL_FEATURE_ORDER.map(|p| self.value(p))
    }

    /// Pollutants whose value lies above the configured slider maximum.
    pub fn above_input_range(&self, limits: &InputLimits) -> Vec<Pollutant> {
        Pollutant::ALL
            .into_iter()
            .filter(|&p| self.value(p) > limits.range_for(p).max)
            .collect()
    }
}

fn check_sub_index(field: &'static str, value: f64) -> Result<(), AqiError> {
    if !value.is_finite() {
        return Err(AqiError::InvalidInput {
            field,
            value,
            reason: "must be a finite number",
        });
    }
    if value < 0.0 {
        return Err(AqiError::InvalidInput {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}
