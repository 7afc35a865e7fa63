//! Evaluator configuration.

use crate::error::{EvalError, Result};
use ablate_masking::{CountPolicy, DEFAULT_NOISE_SCALE, DEFAULT_SEED};
use serde::{Deserialize, Serialize};

/// Evaluator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Seed of the tie-break noise (default: 23980)
    pub seed: u64,

    /// Scale of the tie-break noise added to attributions (default: 1e-6)
    /// Must stay well below the smallest meaningful attribution difference
    pub noise_scale: f64,

    /// Handling of mask/keep counts above the feature count (default: reject)
    pub count_policy: CountPolicy,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            noise_scale: DEFAULT_NOISE_SCALE,
            count_policy: CountPolicy::Reject,
        }
    }
}

impl EvalConfig {
    /// Check parameter ranges.
    ///
    /// # Errors
    /// Returns [`EvalError::InvalidConfig`] if `noise_scale` is negative or
    /// not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.noise_scale.is_finite() || self.noise_scale < 0.0 {
            return Err(EvalError::InvalidConfig(format!(
                "noise_scale must be finite and non-negative, got {}",
                self.noise_scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = EvalConfig::default();
        assert_eq!(config.seed, 23980);
        assert_eq!(config.noise_scale, 1e-6);
        assert_eq!(config.count_policy, CountPolicy::Reject);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_noise_scale() {
        for noise_scale in [-1e-6, f64::NAN, f64::INFINITY] {
            let config = EvalConfig {
                noise_scale,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(EvalError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_config_from_json() {
        let config: EvalConfig =
            serde_json::from_str(r#"{"seed": 7, "count_policy": "clamp"}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.noise_scale, 1e-6);
        assert_eq!(config.count_policy, CountPolicy::Clamp);
    }
}
