//! Regression metrics.

use super::Metric;
use ndarray::ArrayView1;

/// Mean squared error: `mean((pred - true)²)`.
///
/// Lower is better. Returns 0.0 for empty inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanSquaredError;

impl Metric for MeanSquaredError {
    fn score(&self, y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> f64 {
        if y_true.is_empty() {
            return 0.0;
        }
        let sum: f64 = y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(t, p)| (p - t).powi(2))
            .sum();
        sum / y_true.len() as f64
    }

    fn name(&self) -> &str {
        "mse"
    }

    fn higher_is_better(&self) -> bool {
        false
    }
}

/// Mean absolute error: `mean(|pred - true|)`.
///
/// Lower is better. Returns 0.0 for empty inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanAbsoluteError;

impl Metric for MeanAbsoluteError {
    fn score(&self, y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> f64 {
        if y_true.is_empty() {
            return 0.0;
        }
        let sum: f64 = y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(t, p)| (p - t).abs())
            .sum();
        sum / y_true.len() as f64
    }

    fn name(&self) -> &str {
        "mae"
    }

    fn higher_is_better(&self) -> bool {
        false
    }
}

/// Coefficient of determination: `1 - SS_res / SS_tot`.
///
/// Higher is better. A constant target scores 1.0 when predicted exactly
/// and 0.0 otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct R2Score;

impl Metric for R2Score {
    fn score(&self, y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> f64 {
        let Some(mean) = y_true.mean() else {
            return 0.0;
        };

        let ss_res: f64 = y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(t, p)| (t - p).powi(2))
            .sum();
        let ss_tot: f64 = y_true.iter().map(|t| (t - mean).powi(2)).sum();

        if ss_tot == 0.0 {
            return if ss_res == 0.0 { 1.0 } else { 0.0 };
        }
        1.0 - ss_res / ss_tot
    }

    fn name(&self) -> &str {
        "r2"
    }
}
