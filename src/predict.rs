//! One prediction request: model lookup, inference, classification.

use tracing::debug;

use crate::classifier::classify;
use crate::error::AqiError;
use crate::models::ModelRegistry;
use crate::types::{PollutantReading, PredictionResult};

/// Predict the overall AQI for `reading` with the named model.
///
/// Fails with `ModelNotFound` when the model is not loaded and with
/// `InvalidInput` when the model output cannot be classified (negative or
/// non-finite).
pub fn predict(
    registry: &ModelRegistry,
    model_name: &str,
    reading: &PollutantReading,
) -> Result<PredictionResult, AqiError> {
    let model = registry.get(model_name)?;
    let value = model.predict(reading);
    let category = classify(value)?;

    debug!(
        model = model_name,
        co = reading.co(),
        no2 = reading.no2(),
        ozone = reading.ozone(),
        pm25 = reading.pm25(),
        aqi = value,
        category = %category,
        "Prediction served"
    );

    Ok(PredictionResult { value, category })
}
