//! Error types for masking inputs.

use thiserror::Error;

/// Result type for masking operations.
pub type Result<T> = std::result::Result<T, MaskingError>;

/// Errors raised while validating attributions and mask counts.
#[derive(Debug, Error)]
pub enum MaskingError {
    /// Count vector length differs from the number of samples
    #[error("{argument} has {actual} counts but the split has {expected} samples")]
    CountLengthMismatch {
        /// Offending argument
        argument: &'static str,
        /// Number of samples in the split
        expected: usize,
        /// Number of counts supplied
        actual: usize,
    },

    /// A count exceeds the number of features
    #[error("{argument}[{sample}] = {count} is outside [0, {n_features}]")]
    CountOutOfRange {
        /// Offending argument
        argument: &'static str,
        /// Sample index
        sample: usize,
        /// Supplied count
        count: usize,
        /// Number of features
        n_features: usize,
    },

    /// Attribution matrix shape differs from its feature matrix
    #[error("{argument} has shape {actual:?}, expected {expected:?}")]
    AttributionShape {
        /// Offending argument
        argument: &'static str,
        /// Shape of the feature matrix
        expected: (usize, usize),
        /// Shape of the attribution matrix
        actual: (usize, usize),
    },

    /// A vector does not have one entry per feature
    #[error("{argument} has length {actual}, expected {expected}")]
    FeatureLength {
        /// Offending argument
        argument: &'static str,
        /// Number of features
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// NaN or infinite attribution value
    #[error("{argument}[{sample}, {feature}] is not finite")]
    NonFiniteAttribution {
        /// Offending argument
        argument: &'static str,
        /// Sample index
        sample: usize,
        /// Feature index
        feature: usize,
    },
}
