//! Evaluator shared state and retraining helpers.

use crate::cancel::CancellationToken;
use crate::config::EvalConfig;
use crate::error::{EvalError, Result};
use crate::model::{Model, ModelFactory};
use ablate_data::{DataError, Dataset};
use ablate_masking::{MaskSpan, Masker};
use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Evaluation protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Retrain per test sample with its top features masked.
    Remove,
    /// Retrain per test sample with all but its top features masked.
    Keep,
    /// Mask every row's top features, retrain once (ROAR).
    BatchRemove,
    /// Mask all but every row's top features, retrain once (KAR).
    BatchKeep,
}

impl Method {
    /// All methods.
    pub const ALL: [Self; 4] = [Self::Remove, Self::Keep, Self::BatchRemove, Self::BatchKeep];

    /// Identifier used in logs and exports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Remove => "remove",
            Self::Keep => "keep",
            Self::BatchRemove => "batch_remove",
            Self::BatchKeep => "batch_keep",
        }
    }

    /// Whether the method retrains once instead of per sample.
    pub const fn is_batch(self) -> bool {
        matches!(self, Self::BatchRemove | Self::BatchKeep)
    }

    /// Mask span for a per-sample count.
    pub const fn span(self, count: usize) -> MaskSpan {
        match self {
            Self::Remove | Self::BatchRemove => MaskSpan::Top(count),
            Self::Keep | Self::BatchKeep => MaskSpan::AllBut(count),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Work performed by one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalStats {
    /// Models built and fitted, including the unmasked reference model.
    pub retrainings: usize,
    /// Training-matrix cells overwritten with the baseline, summed over retrainings.
    pub masked_train_cells: usize,
    /// Test-matrix cells overwritten with the baseline.
    pub masked_test_cells: usize,
}

/// Score and work statistics of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Metric value on the test set.
    pub score: f64,
    /// Work statistics.
    pub stats: EvalStats,
}

/// Runs the remove/keep and batch evaluation protocols.
///
/// Stateless between calls: each evaluation is a function of its inputs and
/// the configured seed.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
    cancellation: Option<CancellationToken>,
}

impl Evaluator {
    /// Create an evaluator with the given configuration.
    ///
    /// # Errors
    /// Returns [`EvalError::InvalidConfig`] for an invalid configuration.
    pub fn new(config: EvalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cancellation: None,
        })
    }

    /// Attach a cancellation token checked before every retraining.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Active configuration.
    pub const fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Tie-break vector and training-mean baseline for one call.
    pub(crate) fn masker(&self, data: &Dataset) -> Result<Masker> {
        Masker::from_training(data.x_train(), self.config.seed, self.config.noise_scale)
            .ok_or(EvalError::Data(DataError::EmptyTrainingSet))
    }

    fn check_cancelled(&self, completed: usize) -> Result<()> {
        match &self.cancellation {
            Some(token) if token.is_cancelled() => Err(EvalError::Cancelled { completed }),
            _ => Ok(()),
        }
    }

    /// Build a fresh model and fit it.
    pub(crate) fn fit_model<F: ModelFactory>(
        &self,
        factory: &mut F,
        x: ArrayView2<'_, f64>,
        y: ArrayView1<'_, f64>,
        stats: &mut EvalStats,
    ) -> Result<F::Model> {
        self.check_cancelled(stats.retrainings)?;

        let mut model = factory
            .build()
            .map_err(|source| EvalError::Factory { source })?;
        model
            .fit(x, y)
            .map_err(|source| EvalError::Fit { source })?;
        stats.retrainings += 1;

        debug!(retrainings = stats.retrainings, n_rows = x.nrows(), "model fitted");
        Ok(model)
    }
}

/// Predict and check that one value came back per row.
pub(crate) fn predict_checked<M: Model>(model: &M, x: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
    let predictions = model
        .predict(x)
        .map_err(|source| EvalError::Predict { source })?;
    if predictions.len() != x.nrows() {
        return Err(EvalError::PredictionLength {
            expected: x.nrows(),
            actual: predictions.len(),
        });
    }
    Ok(predictions)
}
