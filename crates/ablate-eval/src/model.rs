//! Model plug-in traits.
//!
//! Evaluators never train anything themselves. They ask a [`ModelFactory`]
//! for a fresh, untrained [`Model`] once per required retraining, call
//! [`Model::fit`] on a masked training copy and [`Model::predict`] on the
//! matching masked test rows, then drop the model.

use crate::error::BoxError;
use ndarray::{Array1, ArrayView1, ArrayView2};

/// A trainable regressor or scorer.
pub trait Model {
    /// Train on `x` (rows = samples) and targets `y`.
    ///
    /// # Errors
    /// Any error is propagated unchanged to the evaluator's caller.
    fn fit(&mut self, x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> Result<(), BoxError>;

    /// Predict one value per row of `x`. Must not mutate the fitted state.
    ///
    /// # Errors
    /// Any error is propagated unchanged to the evaluator's caller.
    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, BoxError>;
}

impl<M: Model + ?Sized> Model for Box<M> {
    fn fit(&mut self, x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> Result<(), BoxError> {
        (**self).fit(x, y)
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, BoxError> {
        (**self).predict(x)
    }
}

/// Produces fresh, untrained models.
///
/// Implemented for every `FnMut() -> Result<M, E>` closure.
pub trait ModelFactory {
    /// Model type produced.
    type Model: Model;

    /// Build a new untrained model.
    ///
    /// # Errors
    /// Any error aborts the evaluation.
    fn build(&mut self) -> Result<Self::Model, BoxError>;
}

impl<F, M, E> ModelFactory for F
where
    F: FnMut() -> Result<M, E>,
    M: Model,
    E: Into<BoxError>,
{
    type Model = M;

    fn build(&mut self) -> Result<M, BoxError> {
        self().map_err(Into::into)
    }
}
