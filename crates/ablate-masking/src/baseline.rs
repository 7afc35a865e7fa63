//! Baseline values used for masked cells.

use ndarray::{Array1, ArrayView2, Axis};

/// Per-feature mean of the (unmasked) training matrix.
///
/// This is the only baseline used for masking, for both training and test
/// rows. Returns `None` when the matrix has no rows.
pub fn training_means(x_train: ArrayView2<'_, f64>) -> Option<Array1<f64>> {
    x_train.mean_axis(Axis(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{Array2, array};

    #[test]
    fn test_column_means() {
        let x = array![[1.0, 10.0], [3.0, 20.0], [5.0, 60.0]];
        let means = training_means(x.view()).unwrap();
        assert_relative_eq!(means[0], 3.0);
        assert_relative_eq!(means[1], 30.0);
    }

    #[test]
    fn test_empty() {
        let x = Array2::<f64>::zeros((0, 3));
        assert!(training_means(x.view()).is_none());
    }
}
