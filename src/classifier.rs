//! AQI band classification
//!
//! The bands are a sorted table of inclusive upper bounds. A value belongs to
//! the first band whose upper bound it does not exceed; anything above the
//! last bound is `Hazardous`.

use serde::Serialize;

use crate::error::AqiError;
use crate::types::AqiCategory;

/// Inclusive upper bound of each bounded band, ascending.
const BANDS: [(f64, AqiCategory); 5] = [
    (50.0, AqiCategory::Good),
    (100.0, AqiCategory::Moderate),
    (150.0, AqiCategory::UnhealthySensitive),
    (200.0, AqiCategory::Unhealthy),
    (300.0, AqiCategory::VeryUnhealthy),
];

/// Band for values above the last bound.
const OPEN_BAND: AqiCategory = AqiCategory::Hazardous;

/// Classify an AQI value.
///
/// Negative and non-finite values are rejected instead of falling through
/// to `Hazardous`.
pub fn classify(value: f64) -> Result<AqiCategory, AqiError> {
    if !value.is_finite() {
        return Err(AqiError::InvalidInput {
            field: "aqi",
            value,
            reason: "must be a finite number",
        });
    }
    if value < 0.0 {
        return Err(AqiError::InvalidInput {
            field: "aqi",
            value,
            reason: "must not be negative",
        });
    }

    Ok(BANDS
        .iter()
        .find(|(upper, _)| value <= *upper)
        .map_or(OPEN_BAND, |&(_, category)| category))
}

/// Value range covered by a band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandRange {
    pub category: AqiCategory,
    /// Exclusive lower bound (inclusive for the first band, which starts at 0).
    pub lower: f64,
    /// Inclusive upper bound, `None` for the open-ended band.
    pub upper: Option<f64>,
}

/// All six bands in ascending order, derived from the classification table.
pub fn band_ranges() -> Vec<BandRange> {
    let mut lower = 0.0;
    let mut ranges = Vec::with_capacity(BANDS.len() + 1);
    for &(upper, category) in &BANDS {
        ranges.push(BandRange {
            category,
            lower,
            upper: Some(upper),
        });
        lower = upper;
    }
    ranges.push(BandRange {
        category: OPEN_BAND,
        lower,
        upper: None,
    });
    ranges
}
