//! Train/test dataset split.

use crate::error::{DataError, Result};
use crate::table::{FeatureTable, TargetColumn};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// A validated train/test split.
///
/// Holds owned copies of the coerced inputs. Invariants established by
/// [`Dataset::new`]:
/// - `x_train` and `x_test` have the same number of columns
/// - `y_train.len() == x_train.nrows()` and `y_test.len() == x_test.nrows()`
/// - the training set has at least one row
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x_train: Array2<f64>,
    y_train: Array1<f64>,
    x_test: Array2<f64>,
    y_test: Array1<f64>,
}

impl Dataset {
    /// Coerce and validate a train/test split.
    ///
    /// # Errors
    /// Returns [`DataError::ShapeMismatch`] when the feature counts differ,
    /// [`DataError::LengthMismatch`] when a target is misaligned with its
    /// matrix, [`DataError::EmptyTrainingSet`] for a training set without
    /// rows, and any coercion error from the inputs.
    pub fn new<'a>(
        x_train: impl Into<FeatureTable<'a>>,
        y_train: impl Into<TargetColumn<'a>>,
        x_test: impl Into<FeatureTable<'a>>,
        y_test: impl Into<TargetColumn<'a>>,
    ) -> Result<Self> {
        let x_train = x_train.into().to_array("X_train")?;
        let x_test = x_test.into().to_array("X_test")?;

        // Fail fast on the feature dimension before touching the targets
        if x_train.ncols() != x_test.ncols() {
            return Err(DataError::ShapeMismatch {
                train: x_train.ncols(),
                test: x_test.ncols(),
            });
        }

        let y_train = y_train.into().to_array("y_train")?;
        let y_test = y_test.into().to_array("y_test")?;

        Self::from_arrays(x_train, y_train, x_test, y_test)
    }

    /// Validate already-coerced arrays.
    ///
    /// # Errors
    /// Same validation as [`Dataset::new`].
    pub fn from_arrays(
        x_train: Array2<f64>,
        y_train: Array1<f64>,
        x_test: Array2<f64>,
        y_test: Array1<f64>,
    ) -> Result<Self> {
        if x_train.ncols() != x_test.ncols() {
            return Err(DataError::ShapeMismatch {
                train: x_train.ncols(),
                test: x_test.ncols(),
            });
        }
        if y_train.len() != x_train.nrows() {
            return Err(DataError::LengthMismatch {
                argument: "y_train",
                expected: x_train.nrows(),
                actual: y_train.len(),
            });
        }
        if y_test.len() != x_test.nrows() {
            return Err(DataError::LengthMismatch {
                argument: "y_test",
                expected: x_test.nrows(),
                actual: y_test.len(),
            });
        }
        if x_train.nrows() == 0 {
            return Err(DataError::EmptyTrainingSet);
        }

        Ok(Self {
            x_train,
            y_train,
            x_test,
            y_test,
        })
    }

    /// Training features.
    pub fn x_train(&self) -> ArrayView2<'_, f64> {
        self.x_train.view()
    }

    /// Training targets.
    pub fn y_train(&self) -> ArrayView1<'_, f64> {
        self.y_train.view()
    }

    /// Test features.
    pub fn x_test(&self) -> ArrayView2<'_, f64> {
        self.x_test.view()
    }

    /// Test targets.
    pub fn y_test(&self) -> ArrayView1<'_, f64> {
        self.y_test.view()
    }

    /// Number of feature columns.
    pub fn n_features(&self) -> usize {
        self.x_train.ncols()
    }

    /// Number of training samples.
    pub fn n_train(&self) -> usize {
        self.x_train.nrows()
    }

    /// Number of test samples.
    pub fn n_test(&self) -> usize {
        self.x_test.nrows()
    }
}
