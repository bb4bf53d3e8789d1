//! Reference information about the four pollutants behind the AQI inputs.

use serde::Serialize;

use crate::config::{InputLimits, SliderRange};
use crate::types::Pollutant;

/// Static description of one pollutant for the "About Air Pollution" view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PollutantInfo {
    pub pollutant: Pollutant,
    pub symbol: &'static str,
    pub name: &'static str,
    pub sources: &'static str,
    pub effect: &'static str,
    pub safe_limit: &'static str,
}

impl Pollutant {
    pub fn info(self) -> PollutantInfo {
        match self {
            Pollutant::Co => PollutantInfo {
                pollutant: self,
                symbol: "CO",
                name: "Carbon Monoxide",
                sources: "Vehicle emissions, burning of fuel, industrial processes.",
                effect: "Reduces oxygen delivery in the body; harmful at high levels.",
                safe_limit: "≤ 1 ppm (good air quality)",
            },
            Pollutant::Ozone => PollutantInfo {
                pollutant: self,
                symbol: "O₃",
                name: "Ozone",
                sources: "Formed by reaction between sunlight and vehicle/industrial pollutants.",
                effect: "Irritates lungs, aggravates asthma, reduces lung function.",
                safe_limit: "≤ 50 ppb (good air quality)",
            },
            Pollutant::No2 => PollutantInfo {
                pollutant: self,
                symbol: "NO₂",
                name: "Nitrogen Dioxide",
                sources: "Combustion of fossil fuels, vehicles, power plants.",
                effect: "Causes respiratory problems and contributes to smog formation.",
                safe_limit: "≤ 40 µg/m³ (annual mean)",
            },
            Pollutant::Pm25 => PollutantInfo {
                pollutant: self,
                symbol: "PM2.5",
                name: "Particulate Matter ≤ 2.5 µm",
                sources: "Construction dust, vehicle exhaust, burning of coal and wood.",
                effect: "Penetrates deep into lungs, causes cardiovascular and respiratory diseases.",
                safe_limit: "≤ 35 µg/m³ (24-hour mean)",
            },
        }
    }
}

/// Pollutant reference joined with the configured slider range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PollutantReference {
    #[serde(flatten)]
    pub info: PollutantInfo,
    pub key: &'static str,
    pub label: &'static str,
    pub slider: SliderRange,
}

/// Reference entries in the order the About page lists them (CO, O₃, NO₂, PM2.5).
pub fn pollutant_reference(limits: &InputLimits) -> Vec<PollutantReference> {
    [Pollutant::Co, Pollutant::Ozone, Pollutant::No2, Pollutant::Pm25]
        .into_iter()
        .map(|p| PollutantReference {
            info: p.info(),
            key: p.key(),
            label: p.label(),
            slider: limits.range_for(p),
        })
        .collect()
}

/// Everyday steps that lower exposure and emissions.
pub const REDUCTION_TIPS: [&str; 5] = [
    "Use public transport or carpool.",
    "Switch to renewable energy.",
    "Plant trees and maintain green spaces.",
    "Avoid burning waste.",
    "Maintain vehicles properly.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_covers_every_pollutant_once() {
        let reference = pollutant_reference(&InputLimits::default());
        assert_eq!(reference.len(), 4);
        for p in Pollutant::ALL {
            assert_eq!(reference.iter().filter(|r| r.info.pollutant == p).count(), 1);
        }
    }

    #[test]
    fn test_reference_carries_slider_range() {
        let reference = pollutant_reference(&InputLimits::default());
        let pm25 = reference.iter().find(|r| r.key == "pm25").unwrap();
        assert_eq!(pm25.slider.max, 500.0);
        assert_eq!(pm25.info.safe_limit, "≤ 35 µg/m³ (24-hour mean)");
    }

    #[test]
    fn test_serialized_shape_is_flat() {
        let reference = pollutant_reference(&InputLimits::default());
        let json = serde_json::to_value(&reference[0]).unwrap();
        assert_eq!(json["symbol"], "CO");
        assert_eq!(json["key"], "co");
        assert_eq!(json["slider"]["default"], 50.0);
    }
}
