#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ablate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod cancel;
pub mod config;
pub mod curve;
pub mod error;
pub mod evaluator;
pub mod exhaustive;
pub mod metric;
pub mod model;

// Re-export main types
pub use batch::BatchInputs;
pub use cancel::CancellationToken;
pub use config::EvalConfig;
pub use curve::{Attributions, CurvePoint, MaskingCurve, fraction_count};
pub use error::{BoxError, EvalError, Result};
pub use evaluator::{EvalStats, Evaluation, Evaluator, Method};
pub use metric::{Accuracy, MeanAbsoluteError, MeanSquaredError, Metric, R2Score, RocAuc};
pub use model::{Model, ModelFactory};

use ablate_data::{Dataset, FeatureTable, TargetColumn};

/// Exhaustive "remove" evaluation with the default configuration.
///
/// Inputs may be any table-like type accepted by [`FeatureTable`] and
/// [`TargetColumn`]. See [`Evaluator::remove`].
///
/// # Errors
/// See [`Evaluator::remove`]; coercion and shape errors come first.
#[allow(clippy::too_many_arguments)]
pub fn remove<'a, F, M>(
    nmask: &[usize],
    x_train: impl Into<FeatureTable<'a>>,
    y_train: impl Into<TargetColumn<'a>>,
    x_test: impl Into<FeatureTable<'a>>,
    y_test: impl Into<TargetColumn<'a>>,
    attr_test: impl Into<FeatureTable<'a>>,
    mut model_factory: F,
    metric: M,
) -> Result<f64>
where
    F: ModelFactory,
    M: Metric,
{
    let data = Dataset::new(x_train, y_train, x_test, y_test)?;
    let attr_test = attr_test.into().to_array("attr_test")?;
    Evaluator::default().remove(nmask, &data, attr_test.view(), &mut model_factory, &metric)
}

/// Exhaustive "keep" evaluation with the default configuration.
///
/// # Errors
/// See [`Evaluator::keep`]; coercion and shape errors come first.
#[allow(clippy::too_many_arguments)]
pub fn keep<'a, F, M>(
    nkeep: &[usize],
    x_train: impl Into<FeatureTable<'a>>,
    y_train: impl Into<TargetColumn<'a>>,
    x_test: impl Into<FeatureTable<'a>>,
    y_test: impl Into<TargetColumn<'a>>,
    attr_test: impl Into<FeatureTable<'a>>,
    mut model_factory: F,
    metric: M,
) -> Result<f64>
where
    F: ModelFactory,
    M: Metric,
{
    let data = Dataset::new(x_train, y_train, x_test, y_test)?;
    let attr_test = attr_test.into().to_array("attr_test")?;
    Evaluator::default().keep(nkeep, &data, attr_test.view(), &mut model_factory, &metric)
}

/// Batch "remove" (ROAR) evaluation with the default configuration.
///
/// # Errors
/// See [`Evaluator::batch_remove`]; coercion and shape errors come first.
#[allow(clippy::too_many_arguments)]
pub fn batch_remove<'a, F, M>(
    nmask_train: &[usize],
    nmask_test: &[usize],
    x_train: impl Into<FeatureTable<'a>>,
    y_train: impl Into<TargetColumn<'a>>,
    x_test: impl Into<FeatureTable<'a>>,
    y_test: impl Into<TargetColumn<'a>>,
    attr_train: impl Into<FeatureTable<'a>>,
    attr_test: impl Into<FeatureTable<'a>>,
    mut model_factory: F,
    metric: M,
) -> Result<f64>
where
    F: ModelFactory,
    M: Metric,
{
    let data = Dataset::new(x_train, y_train, x_test, y_test)?;
    let attr_train = attr_train.into().to_array("attr_train")?;
    let attr_test = attr_test.into().to_array("attr_test")?;
    let inputs = BatchInputs {
        counts_train: nmask_train,
        counts_test: nmask_test,
        attr_train: attr_train.view(),
        attr_test: attr_test.view(),
    };
    Evaluator::default().batch_remove(inputs, &data, &mut model_factory, &metric)
}

/// Batch "keep" (KAR) evaluation with the default configuration.
///
/// # Errors
/// See [`Evaluator::batch_keep`]; coercion and shape errors come first.
#[allow(clippy::too_many_arguments)]
pub fn batch_keep<'a, F, M>(
    nkeep_train: &[usize],
    nkeep_test: &[usize],
    x_train: impl Into<FeatureTable<'a>>,
    y_train: impl Into<TargetColumn<'a>>,
    x_test: impl Into<FeatureTable<'a>>,
    y_test: impl Into<TargetColumn<'a>>,
    attr_train: impl Into<FeatureTable<'a>>,
    attr_test: impl Into<FeatureTable<'a>>,
    mut model_factory: F,
    metric: M,
) -> Result<f64>
where
    F: ModelFactory,
    M: Metric,
{
    let data = Dataset::new(x_train, y_train, x_test, y_test)?;
    let attr_train = attr_train.into().to_array("attr_train")?;
    let attr_test = attr_test.into().to_array("attr_test")?;
    let inputs = BatchInputs {
        counts_train: nkeep_train,
        counts_test: nkeep_test,
        attr_train: attr_train.view(),
        attr_test: attr_test.view(),
    };
    Evaluator::default().batch_keep(inputs, &data, &mut model_factory, &metric)
}
