//! Per-sample feature ordering.
//!
//! The ordering of a sample is its feature indices sorted ascending on
//! `-attribution[i] + noise[i]`: most important first, exact ties resolved by
//! the smaller tie-break noise value.

use crate::error::{MaskingError, Result};
use ndarray::{ArrayView1, ArrayView2};

/// Descending-importance ordering of one attribution row.
///
/// `noise` must be the scaled tie-break vector shared by every sample of the
/// current evaluation, with the same length as `attributions`.
///
/// # Errors
/// Returns [`MaskingError::FeatureLength`] if `noise` and `attributions`
/// differ in length.
pub fn feature_ordering(attributions: ArrayView1<'_, f64>, noise: ArrayView1<'_, f64>) -> Result<Vec<usize>> {
    if noise.len() != attributions.len() {
        return Err(MaskingError::FeatureLength {
            argument: "noise",
            expected: attributions.len(),
            actual: noise.len(),
        });
    }

    let keys: Vec<f64> = attributions
        .iter()
        .zip(noise.iter())
        .map(|(&a, &n)| -a + n)
        .collect();

    let mut ordering: Vec<usize> = (0..keys.len()).collect();
    // Stable sort: identical keys (possible only with zero noise) keep index order
    ordering.sort_by(|&i, &j| keys[i].total_cmp(&keys[j]));
    Ok(ordering)
}

/// Check an attribution matrix against the shape of its feature matrix.
///
/// # Errors
/// Returns [`MaskingError::AttributionShape`] on a shape mismatch and
/// [`MaskingError::NonFiniteAttribution`] for NaN or infinite entries.
pub fn validate_attributions(
    attributions: ArrayView2<'_, f64>,
    expected: (usize, usize),
    argument: &'static str,
) -> Result<()> {
    if attributions.dim() != expected {
        return Err(MaskingError::AttributionShape {
            argument,
            expected,
            actual: attributions.dim(),
        });
    }

    if let Some(((sample, feature), _)) = attributions
        .indexed_iter()
        .find(|(_, value)| !value.is_finite())
    {
        return Err(MaskingError::NonFiniteAttribution {
            argument,
            sample,
            feature,
        });
    }

    Ok(())
}
