//! Request-level error taxonomy.
//!
//! Every variant is terminal for the request that produced it: the dashboard
//! shows the message, nothing is retried and no other model is substituted.

use thiserror::Error;

/// Errors surfaced to the user while serving a prediction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AqiError {
    /// The selected model was never configured or its artifact failed to load.
    #[error("'{name}' model file not found in the model directory")]
    ModelNotFound { name: String },

    /// A reading or a predicted AQI that cannot be processed.
    #[error("invalid {field} value {value}: {reason}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl AqiError {
    /// Stable machine-readable code used in API error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            AqiError::ModelNotFound { .. } => "MODEL_NOT_FOUND",
            AqiError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }

    pub(crate) fn model_not_found(name: &str) -> Self {
        AqiError::ModelNotFound {
            name: name.to_string(),
        }
    }
}
