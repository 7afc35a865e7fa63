//! Masking curves.
//!
//! A benchmark usually scores one method at several mask fractions and
//! summarizes the resulting curve by its area. Each point applies the same
//! count, `round(fraction * n_features)`, to every sample.

use crate::batch::BatchInputs;
use crate::error::{EvalError, Result};
use crate::evaluator::{Evaluator, Method};
use crate::metric::Metric;
use crate::model::ModelFactory;
use ablate_data::Dataset;
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Attribution matrices for a curve. `train` is required by batch methods.
#[derive(Debug, Clone, Copy)]
pub struct Attributions<'a> {
    /// Training attributions, same shape as `X_train`.
    pub train: Option<ArrayView2<'a, f64>>,
    /// Test attributions, same shape as `X_test`.
    pub test: ArrayView2<'a, f64>,
}

/// One evaluated point of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Requested fraction of features.
    pub fraction: f64,
    /// Per-sample count derived from the fraction.
    pub count: usize,
    /// Metric value.
    pub score: f64,
    /// Models trained for this point.
    pub retrainings: usize,
}

/// Scores of one method across mask fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskingCurve {
    /// Evaluated method.
    pub method: Method,
    /// Name of the metric.
    pub metric: String,
    /// Points in evaluation order.
    pub points: Vec<CurvePoint>,
}

impl MaskingCurve {
    /// Trapezoidal area under the curve over the fraction axis.
    ///
    /// Points are integrated in ascending fraction order; fewer than two
    /// points give zero area.
    pub fn area(&self) -> f64 {
        self.sorted_points()
            .windows(2)
            .map(|w| (w[1].fraction - w[0].fraction) * (w[0].score + w[1].score) / 2.0)
            .sum()
    }

    /// Whether scores never change direction as the fraction grows.
    ///
    /// Flat curves and curves with fewer than three points are monotone.
    pub fn is_monotone(&self) -> bool {
        let points = self.sorted_points();
        let steps = points.windows(2).map(|w| w[1].score - w[0].score);
        let (mut rises, mut falls) = (false, false);
        for step in steps {
            rises |= step > 0.0;
            falls |= step < 0.0;
        }
        !(rises && falls)
    }

    fn sorted_points(&self) -> Vec<&CurvePoint> {
        let mut points: Vec<_> = self.points.iter().collect();
        points.sort_by(|a, b| a.fraction.total_cmp(&b.fraction));
        points
    }

    /// Total retrainings across all points.
    pub fn retrainings(&self) -> usize {
        self.points.iter().map(|p| p.retrainings).sum()
    }

    /// Point with the smallest fraction.
    pub fn first(&self) -> Option<&CurvePoint> {
        self.points
            .iter()
            .min_by(|a, b| a.fraction.total_cmp(&b.fraction))
    }

    /// Point with the largest fraction.
    pub fn last(&self) -> Option<&CurvePoint> {
        self.points
            .iter()
            .max_by(|a, b| a.fraction.total_cmp(&b.fraction))
    }
}

/// Per-sample count for a feature fraction.
///
/// # Errors
/// Returns [`EvalError::InvalidFraction`] outside `[0, 1]`.
pub fn fraction_count(fraction: f64, n_features: usize) -> Result<usize> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(EvalError::InvalidFraction(fraction));
    }
    Ok(((fraction * n_features as f64).round() as usize).min(n_features))
}

impl Evaluator {
    /// Evaluate `method` at each fraction in `fractions`.
    ///
    /// # Errors
    /// Returns [`EvalError::InvalidFraction`] before any training for a
    /// fraction outside `[0, 1]`, [`EvalError::MissingTrainAttributions`]
    /// for a batch method without training attributions, and otherwise the
    /// first error of the underlying evaluations.
    pub fn curve<F, M>(
        &self,
        method: Method,
        fractions: &[f64],
        data: &Dataset,
        attributions: Attributions<'_>,
        factory: &mut F,
        metric: &M,
    ) -> Result<MaskingCurve>
    where
        F: ModelFactory,
        M: Metric + ?Sized,
    {
        let n_features = data.n_features();
        let counts = fractions
            .iter()
            .map(|&f| fraction_count(f, n_features))
            .collect::<Result<Vec<_>>>()?;
        if method.is_batch() && attributions.train.is_none() {
            return Err(EvalError::MissingTrainAttributions {
                method: method.name(),
            });
        }

        info!(%method, points = fractions.len(), "evaluating masking curve");

        let mut points = Vec::with_capacity(fractions.len());
        for (&fraction, count) in fractions.iter().zip(counts) {
            let test_counts = vec![count; data.n_test()];
            let evaluation = match (method, attributions.train) {
                (Method::Remove, _) => {
                    self.remove_with_stats(&test_counts, data, attributions.test, factory, metric)?
                }
                (Method::Keep, _) => {
                    self.keep_with_stats(&test_counts, data, attributions.test, factory, metric)?
                }
                (Method::BatchRemove | Method::BatchKeep, Some(attr_train)) => {
                    let train_counts = vec![count; data.n_train()];
                    let inputs = BatchInputs {
                        counts_train: &train_counts,
                        counts_test: &test_counts,
                        attr_train: attr_train.reborrow(),
                        attr_test: attributions.test.reborrow(),
                    };
                    self.batch_with_stats(method, inputs, data, factory, metric)?
                }
                (Method::BatchRemove | Method::BatchKeep, None) => {
                    return Err(EvalError::MissingTrainAttributions {
                        method: method.name(),
                    });
                }
            };

            points.push(CurvePoint {
                fraction,
                count,
                score: evaluation.score,
                retrainings: evaluation.stats.retrainings,
            });
        }

        Ok(MaskingCurve {
            method,
            metric: metric.name().to_string(),
            points,
        })
    }
}
