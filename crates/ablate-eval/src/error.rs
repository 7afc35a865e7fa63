//! Evaluation errors.

use ablate_data::DataError;
use ablate_masking::MaskingError;
use thiserror::Error;

/// Boxed error returned by model factories, `fit` and `predict`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for evaluations.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors that can abort an evaluation.
///
/// Collaborator failures are wrapped without modification; the original
/// error is available through [`std::error::Error::source`] or by matching
/// on the `source` field.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Input coercion or dataset validation error
    #[error(transparent)]
    Data(#[from] DataError),

    /// Invalid attributions or mask counts
    #[error(transparent)]
    Masking(#[from] MaskingError),

    /// The model factory failed to produce a model
    #[error("Model factory failed: {source}")]
    Factory {
        /// Error raised by the factory
        source: BoxError,
    },

    /// `fit` failed
    #[error("Model fit failed: {source}")]
    Fit {
        /// Error raised by the model
        source: BoxError,
    },

    /// `predict` failed
    #[error("Model predict failed: {source}")]
    Predict {
        /// Error raised by the model
        source: BoxError,
    },

    /// `predict` returned the wrong number of values
    #[error("Model returned {actual} predictions for {expected} rows")]
    PredictionLength {
        /// Rows passed to `predict`
        expected: usize,
        /// Values returned
        actual: usize,
    },

    /// The evaluation was cancelled before completion
    #[error("Evaluation cancelled after {completed} retrainings")]
    Cancelled {
        /// Retrainings finished before cancellation was observed
        completed: usize,
    },

    /// Invalid evaluator configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Curve fraction outside `[0, 1]`
    #[error("Invalid mask fraction: {0} (must be between 0 and 1)")]
    InvalidFraction(f64),

    /// A batch method was requested without training attributions
    #[error("{method} requires training attributions")]
    MissingTrainAttributions {
        /// Requested method
        method: &'static str,
    },

    /// An exhaustive method was passed to a batch evaluator
    #[error("{method} is not a batch method")]
    NotABatchMethod {
        /// Requested method
        method: &'static str,
    },
}
