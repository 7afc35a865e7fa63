//! Scalar performance metrics.
//!
//! A [`Metric`] turns true and predicted targets for the whole test set into
//! one score. Every evaluator calls its metric exactly once.
//!
//! Any `Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64` closure is a metric.
//! Common choices ship with the crate:
//!
//! ## Regression
//! - [`MeanSquaredError`]
//! - [`MeanAbsoluteError`]
//! - [`R2Score`]
//!
//! ## Classification
//! - [`Accuracy`]: thresholded agreement with binary labels
//! - [`RocAuc`]: area under the ROC curve

mod classification;
mod regression;

pub use classification::{Accuracy, RocAuc};
pub use regression::{MeanAbsoluteError, MeanSquaredError, R2Score};

use ndarray::ArrayView1;

/// A pure scoring function over true and predicted targets.
pub trait Metric {
    /// Score predictions against ground truth. Both views have equal length.
    fn score(&self, y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> f64;

    /// Name of the metric (for logging and reports).
    fn name(&self) -> &str {
        "custom"
    }

    /// Whether higher values indicate better performance.
    fn higher_is_better(&self) -> bool {
        true
    }
}

impl<F> Metric for F
where
    F: Fn(ArrayView1<'_, f64>, ArrayView1<'_, f64>) -> f64,
{
    fn score(&self, y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> f64 {
        self(y_true, y_pred)
    }
}
