//! Shared data structures for the AQI predictor
//!
//! - `PollutantReading`: the four sub-index inputs from the dashboard sliders
//! - `AqiCategory`: the six fixed severity bands
//! - `PredictionResult`: one model output plus its band

mod reading;
mod category;
mod prediction;

pub use reading::*;
pub use category::*;
pub use prediction::*;
