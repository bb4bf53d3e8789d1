//! Gauge description for the dashboard's radial AQI indicator.
//!
//! The browser draws the gauge; this module only decides the axis, the
//! colored steps and the bar color so the front end holds no band logic.

use serde::Serialize;

use crate::classifier::band_ranges;
use crate::config::defaults::GAUGE_MAX;
use crate::types::PredictionResult;

/// One colored step on the gauge axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeBand {
    pub from: f64,
    pub to: f64,
    pub color: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeSpec {
    pub min: f64,
    pub max: f64,
    pub value: f64,
    /// Needle position; equals `value` clamped to the axis.
    pub needle: f64,
    pub bar_color: &'static str,
    pub bands: Vec<GaugeBand>,
}

/// Colored steps covering `0..=GAUGE_MAX`, one per AQI band.
pub fn gauge_bands() -> Vec<GaugeBand> {
    band_ranges()
        .into_iter()
        .map(|range| GaugeBand {
            from: range.lower,
            to: range.upper.unwrap_or(GAUGE_MAX),
            color: range.category.color(),
            label: range.category.label(),
        })
        .collect()
}

impl GaugeSpec {
    pub fn for_prediction(result: &PredictionResult) -> Self {
        Self {
            min: 0.0,
            max: GAUGE_MAX,
            value: result.value,
            needle: result.value.clamp(0.0, GAUGE_MAX),
            bar_color: result.category.color(),
            bands: gauge_bands(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AqiCategory;

    #[test]
    fn test_bands_span_axis() {
        let bands = gauge_bands();
        assert_eq!(bands.len(), 6);
        assert_eq!(bands[0].from, 0.0);
        assert_eq!(bands[5].from, 300.0);
        assert_eq!(bands[5].to, GAUGE_MAX);
        for pair in bands.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn test_bar_color_follows_category() {
        let spec = GaugeSpec::for_prediction(&PredictionResult {
            value: 120.0,
            category: AqiCategory::UnhealthySensitive,
        });
        assert_eq!(spec.bar_color, "#ff7e00");
        assert_eq!(spec.needle, 120.0);
    }

    #[test]
    fn test_needle_clamped_above_axis() {
        let spec = GaugeSpec::for_prediction(&PredictionResult {
            value: 742.0,
            category: AqiCategory::Hazardous,
        });
        assert_eq!(spec.value, 742.0);
        assert_eq!(spec.needle, GAUGE_MAX);
    }
}
