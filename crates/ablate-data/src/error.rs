//! Error types for data coercion and validation.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while coercing or validating evaluation inputs.
#[derive(Debug, Error)]
pub enum DataError {
    /// Training and test feature counts differ
    #[error("Shape mismatch: X_train has {train} features but X_test has {test}")]
    ShapeMismatch {
        /// Feature count of the training matrix
        train: usize,
        /// Feature count of the test matrix
        test: usize,
    },

    /// Target length does not match the number of rows of its matrix
    #[error("Length mismatch for {argument}: expected {expected} values, got {actual}")]
    LengthMismatch {
        /// Offending argument
        argument: &'static str,
        /// Number of rows in the matching feature matrix
        expected: usize,
        /// Number of target values supplied
        actual: usize,
    },

    /// Training set has no rows, so no baseline can be computed
    #[error("Training set is empty")]
    EmptyTrainingSet,

    /// A table column cannot be interpreted as numeric
    #[error("Unsupported type for {argument}: column '{column}' has dtype {dtype}")]
    UnsupportedType {
        /// Offending argument
        argument: &'static str,
        /// Column name
        column: String,
        /// Column dtype as reported by polars
        dtype: String,
    },

    /// A table column or series contains nulls
    #[error("Null values in {argument}: column '{column}'")]
    NullValues {
        /// Offending argument
        argument: &'static str,
        /// Column name
        column: String,
    },

    /// Row vectors of unequal length
    #[error("Ragged rows in {argument}: row {row} has {actual} values, expected {expected}")]
    RaggedRows {
        /// Offending argument
        argument: &'static str,
        /// Index of the first ragged row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// ndarray shape error
    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
