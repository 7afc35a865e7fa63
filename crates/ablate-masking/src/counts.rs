//! Validation of per-sample mask and keep counts.

use crate::error::{MaskingError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::warn;

/// How counts above the feature count are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountPolicy {
    /// Fail the evaluation with [`MaskingError::CountOutOfRange`].
    #[default]
    Reject,
    /// Clamp to the feature count and log a warning.
    Clamp,
}

/// Check a count vector against its split and apply `policy`.
///
/// Returns the input unchanged when every count is in range; clamped
/// counts are returned as an owned copy.
///
/// # Errors
/// Returns [`MaskingError::CountLengthMismatch`] when `counts` is not one
/// per sample, and [`MaskingError::CountOutOfRange`] under
/// [`CountPolicy::Reject`] for a count above `n_features`.
pub fn resolve_counts<'a>(
    counts: &'a [usize],
    n_samples: usize,
    n_features: usize,
    policy: CountPolicy,
    argument: &'static str,
) -> Result<Cow<'a, [usize]>> {
    if counts.len() != n_samples {
        return Err(MaskingError::CountLengthMismatch {
            argument,
            expected: n_samples,
            actual: counts.len(),
        });
    }

    let Some(sample) = counts.iter().position(|&c| c > n_features) else {
        return Ok(Cow::Borrowed(counts));
    };

    match policy {
        CountPolicy::Reject => Err(MaskingError::CountOutOfRange {
            argument,
            sample,
            count: counts[sample],
            n_features,
        }),
        CountPolicy::Clamp => {
            let clamped = counts.iter().filter(|&&c| c > n_features).count();
            warn!(argument, clamped, n_features, "clamping mask counts to feature count");
            Ok(Cow::Owned(
                counts.iter().map(|&c| c.min(n_features)).collect(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_borrowed() {
        let counts = [0, 1, 3];
        let out = resolve_counts(&counts, 3, 3, CountPolicy::Reject, "nmask").unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(&*out, &counts);
    }

    #[test]
    fn test_length_mismatch() {
        let err = resolve_counts(&[1, 2], 3, 4, CountPolicy::Clamp, "nkeep").unwrap_err();
        assert!(matches!(
            err,
            MaskingError::CountLengthMismatch {
                argument: "nkeep",
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_reject_reports_first_offender() {
        let err = resolve_counts(&[1, 5, 9], 3, 4, CountPolicy::Reject, "nmask_test").unwrap_err();
        assert!(matches!(
            err,
            MaskingError::CountOutOfRange {
                sample: 1,
                count: 5,
                n_features: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_clamp() {
        let out = resolve_counts(&[1, 5, 9], 3, 4, CountPolicy::Clamp, "nmask").unwrap();
        assert_eq!(&*out, &[1, 4, 4]);
    }

    #[test]
    fn test_policy_default() {
        assert_eq!(CountPolicy::default(), CountPolicy::Reject);
    }
}
