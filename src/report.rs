//! Plain-text prediction report offered as a download.

use crate::types::{Pollutant, PollutantReading, PredictionResult};

/// Render the downloadable report for one prediction.
///
/// Inputs are printed with their shortest exact representation (`50`,
/// `12.5`); the prediction always has two decimals.
pub fn format_report(
    model_name: &str,
    reading: &PollutantReading,
    result: &PredictionResult,
) -> String {
    let inputs: String = Pollutant::ALL
        .iter()
        .map(|&p| format!("- {}: {}\n", p.label(), reading.value(p)))
        .collect();

    format!(
        "🌍 AQI Prediction Report\n\
         \n\
         Selected Model: {model_name}\n\
         Predicted AQI: {value:.2}\n\
         Status: {label} {glyph}\n\
         Message: {advisory}\n\
         \n\
         Pollutant Inputs:\n\
         {inputs}\
         \n\
         Generated via AQI Predictor Dashboard\n",
        value = result.value,
        label = result.category.label(),
        glyph = result.category.glyph(),
        advisory = result.category.advisory(),
    )
}
