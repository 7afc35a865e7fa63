//! Single-retraining approximations: ROAR (`batch_remove`) and KAR
//! (`batch_keep`).
//!
//! Every training and test row is masked by its own attribution ranking,
//! then one model is trained on the masked training copy and the masked
//! test copy is predicted in one call.

use crate::error::{EvalError, Result};
use crate::evaluator::{EvalStats, Evaluation, Evaluator, Method, predict_checked};
use crate::metric::Metric;
use crate::model::ModelFactory;
use ablate_data::Dataset;
use ablate_masking::{MaskSpan, resolve_counts, validate_attributions};
use ndarray::ArrayView2;
use tracing::info;

/// Per-split counts and attributions for the batch evaluators.
#[derive(Debug, Clone, Copy)]
pub struct BatchInputs<'a> {
    /// One count per training row.
    pub counts_train: &'a [usize],
    /// One count per test row.
    pub counts_test: &'a [usize],
    /// Training attributions, same shape as `X_train`.
    pub attr_train: ArrayView2<'a, f64>,
    /// Test attributions, same shape as `X_test`.
    pub attr_test: ArrayView2<'a, f64>,
}

impl Evaluator {
    /// ROAR: mask each row's top features, retrain once, score.
    ///
    /// Training row `i` loses its top `nmask_train[i]` features by
    /// `attr_train[i]`; test row `j` its top `nmask_test[j]` by
    /// `attr_test[j]`. Rows with a zero count are left untouched.
    ///
    /// # Errors
    /// Fails before training on invalid counts or attributions and
    /// propagates any factory, `fit` or `predict` failure.
    pub fn batch_remove<F, M>(
        &self,
        inputs: BatchInputs<'_>,
        data: &Dataset,
        factory: &mut F,
        metric: &M,
    ) -> Result<f64>
    where
        F: ModelFactory,
        M: Metric + ?Sized,
    {
        Ok(self
            .batch_with_stats(Method::BatchRemove, inputs, data, factory, metric)?
            .score)
    }

    /// KAR: keep each row's top features, mask the rest, retrain once, score.
    ///
    /// Rows whose keep count equals the feature count are left untouched.
    ///
    /// # Errors
    /// Same policy as [`Evaluator::batch_remove`].
    pub fn batch_keep<F, M>(
        &self,
        inputs: BatchInputs<'_>,
        data: &Dataset,
        factory: &mut F,
        metric: &M,
    ) -> Result<f64>
    where
        F: ModelFactory,
        M: Metric + ?Sized,
    {
        Ok(self
            .batch_with_stats(Method::BatchKeep, inputs, data, factory, metric)?
            .score)
    }

    /// Run a batch method and return work statistics alongside the score.
    ///
    /// # Errors
    /// Returns [`EvalError::NotABatchMethod`] for `remove` or `keep`;
    /// otherwise see [`Evaluator::batch_remove`].
    pub fn batch_with_stats<F, M>(
        &self,
        method: Method,
        inputs: BatchInputs<'_>,
        data: &Dataset,
        factory: &mut F,
        metric: &M,
    ) -> Result<Evaluation>
    where
        F: ModelFactory,
        M: Metric + ?Sized,
    {
        if !method.is_batch() {
            return Err(EvalError::NotABatchMethod {
                method: method.name(),
            });
        }

        let (n_train, n_test, n_features) = (data.n_train(), data.n_test(), data.n_features());
        let (train_arg, test_arg) = match method {
            Method::BatchKeep => ("nkeep_train", "nkeep_test"),
            _ => ("nmask_train", "nmask_test"),
        };
        let policy = self.config().count_policy;
        let counts_train = resolve_counts(inputs.counts_train, n_train, n_features, policy, train_arg)?;
        let counts_test = resolve_counts(inputs.counts_test, n_test, n_features, policy, test_arg)?;
        validate_attributions(inputs.attr_train, (n_train, n_features), "attr_train")?;
        validate_attributions(inputs.attr_test, (n_test, n_features), "attr_test")?;

        let masker = self.masker(data)?;
        info!(%method, n_train, n_test, n_features, "starting batch evaluation");

        let spans = |counts: &[usize]| -> Vec<MaskSpan> {
            counts.iter().map(|&c| method.span(c)).collect()
        };

        let mut stats = EvalStats::default();
        let mut x_train = data.x_train().to_owned();
        stats.masked_train_cells =
            masker.mask_rows(x_train.view_mut(), inputs.attr_train, &spans(&*counts_train))?;
        let mut x_test = data.x_test().to_owned();
        stats.masked_test_cells =
            masker.mask_rows(x_test.view_mut(), inputs.attr_test, &spans(&*counts_test))?;

        let model = self.fit_model(factory, x_train.view(), data.y_train(), &mut stats)?;
        let predictions = predict_checked(&model, x_test.view())?;

        let score = metric.score(data.y_test(), predictions.view());
        info!(
            %method,
            score,
            masked_train_cells = stats.masked_train_cells,
            masked_test_cells = stats.masked_test_cells,
            "batch evaluation finished"
        );

        Ok(Evaluation { score, stats })
    }
}
