//! Masking state shared by every sample of one evaluation.

use crate::baseline::training_means;
use crate::error::{MaskingError, Result};
use crate::mask::{MaskSpan, mask_columns, mask_row};
use crate::ordering::feature_ordering;
use crate::tie_break::scaled_tie_break_noise;
use ndarray::{Array1, ArrayView1, ArrayView2, ArrayViewMut1, ArrayViewMut2, Axis};

/// Tie-break vector and baseline for a single evaluator call.
///
/// Built once per call from the unmasked training matrix; every sample's
/// ordering reuses the same tie-break vector and every masked cell receives
/// the training mean of its feature.
#[derive(Debug, Clone)]
pub struct Masker {
    noise: Array1<f64>,
    baseline: Array1<f64>,
}

impl Masker {
    /// Build from the original training matrix.
    ///
    /// Returns `None` if `x_train` has no rows.
    pub fn from_training(x_train: ArrayView2<'_, f64>, seed: u64, noise_scale: f64) -> Option<Self> {
        let baseline = training_means(x_train)?;
        Some(Self::new(baseline, seed, noise_scale))
    }

    /// Build from an explicit baseline vector.
    pub fn new(baseline: Array1<f64>, seed: u64, noise_scale: f64) -> Self {
        let noise = scaled_tie_break_noise(baseline.len(), seed, noise_scale);
        Self { noise, baseline }
    }

    /// Number of features.
    pub fn n_features(&self) -> usize {
        self.baseline.len()
    }

    /// Per-feature baseline values.
    pub fn baseline(&self) -> ArrayView1<'_, f64> {
        self.baseline.view()
    }

    /// Scaled tie-break vector.
    pub fn noise(&self) -> ArrayView1<'_, f64> {
        self.noise.view()
    }

    /// Descending-importance ordering of one attribution row.
    ///
    /// # Errors
    /// Returns [`MaskingError::FeatureLength`] unless `attributions` has one
    /// entry per feature.
    pub fn ordering(&self, attributions: ArrayView1<'_, f64>) -> Result<Vec<usize>> {
        self.check_length("attributions", attributions.len())?;
        feature_ordering(attributions, self.noise.view())
    }

    /// Features of one sample selected by `span`, most important first.
    ///
    /// # Errors
    /// Same as [`Masker::ordering`].
    pub fn select(&self, attributions: ArrayView1<'_, f64>, span: MaskSpan) -> Result<Vec<usize>> {
        let ordering = self.ordering(attributions)?;
        Ok(span.masked_features(&ordering).to_vec())
    }

    /// Mask one row by its own attribution ranking. Returns the number of
    /// cells overwritten.
    ///
    /// # Errors
    /// Returns [`MaskingError::FeatureLength`] if `row` or `attributions`
    /// does not have one entry per feature.
    pub fn mask_row(
        &self,
        row: ArrayViewMut1<'_, f64>,
        attributions: ArrayView1<'_, f64>,
        span: MaskSpan,
    ) -> Result<usize> {
        self.check_length("row", row.len())?;
        if span.is_empty(self.n_features()) {
            return Ok(0);
        }
        let features = self.select(attributions, span)?;
        mask_row(row, &features, self.baseline.view());
        Ok(features.len())
    }

    /// Mask every row of `matrix` independently, row `i` by
    /// `attributions.row(i)` and `spans[i]`. Returns the total number of
    /// cells overwritten.
    ///
    /// # Errors
    /// Returns [`MaskingError::AttributionShape`] unless `attributions` has
    /// the shape of `matrix`, and [`MaskingError::CountLengthMismatch`]
    /// unless there is one span per row. Nothing is written on error.
    pub fn mask_rows(
        &self,
        mut matrix: ArrayViewMut2<'_, f64>,
        attributions: ArrayView2<'_, f64>,
        spans: &[MaskSpan],
    ) -> Result<usize> {
        if attributions.dim() != matrix.dim() {
            return Err(MaskingError::AttributionShape {
                argument: "attributions",
                expected: matrix.dim(),
                actual: attributions.dim(),
            });
        }
        if spans.len() != matrix.nrows() {
            return Err(MaskingError::CountLengthMismatch {
                argument: "spans",
                expected: matrix.nrows(),
                actual: spans.len(),
            });
        }
        self.check_length("row", matrix.ncols())?;

        matrix
            .axis_iter_mut(Axis(0))
            .zip(attributions.axis_iter(Axis(0)))
            .zip(spans)
            .map(|((row, attr), &span)| self.mask_row(row, attr, span))
            .sum()
    }

    /// Overwrite whole columns with their baseline values.
    pub fn mask_columns(&self, matrix: ArrayViewMut2<'_, f64>, features: &[usize]) {
        mask_columns(matrix, features, self.baseline.view());
    }

    fn check_length(&self, argument: &'static str, actual: usize) -> Result<()> {
        if actual == self.n_features() {
            Ok(())
        } else {
            Err(MaskingError::FeatureLength {
                argument,
                expected: self.n_features(),
                actual,
            })
        }
    }
}
