//! Offline evaluation metrics shown on the model comparison view.
//!
//! The figures come from the training notebook's held-out split and are not
//! recomputed at runtime.

use serde::Serialize;

/// Evaluation figures for one model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub model_name: &'static str,
    /// Accuracy in percent (R² × 100).
    pub accuracy_pct: f64,
    pub r2_score: f64,
    pub rmse: f64,
}

const ROWS: [ComparisonRow; 4] = [
    ComparisonRow {
        model_name: "XGBoost Regressor",
        accuracy_pct: 99.3,
        r2_score: 0.99,
        rmse: 4.35,
    },
    ComparisonRow {
        model_name: "Linear Regression",
        accuracy_pct: 79.3,
        r2_score: 0.79,
        rmse: 8.44,
    },
    ComparisonRow {
        model_name: "Lasso Regression",
        accuracy_pct: 97.3,
        r2_score: 0.97,
        rmse: 6.54,
    },
    ComparisonRow {
        model_name: "Ridge Regression",
        accuracy_pct: 97.2,
        r2_score: 0.97,
        rmse: 6.32,
    },
];

/// All rows in display order.
pub fn comparison_rows() -> &'static [ComparisonRow] {
    &ROWS
}

/// Row for a single model, if one was evaluated.
pub fn comparison_for(model_name: &str) -> Option<&'static ComparisonRow> {
    ROWS.iter().find(|row| row.model_name == model_name)
}

/// Row with the lowest RMSE.
pub fn best_by_rmse() -> &'static ComparisonRow {
    // ROWS is a non-empty const array; fold from the first element.
    ROWS[1..]
        .iter()
        .fold(&ROWS[0], |best, row| if row.rmse < best.rmse { row } else { best })
}
