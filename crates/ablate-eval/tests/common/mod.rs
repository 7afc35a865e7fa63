//! Deterministic models shared by the integration tests.

#![allow(dead_code, unreachable_pub)]

use ablate_eval::{BoxError, Model};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, array};
use std::cell::RefCell;
use std::rc::Rc;

/// 1-nearest-neighbour regressor; ties go to the lowest training index.
#[derive(Debug, Default, Clone)]
pub struct NearestNeighbor {
    x: Array2<f64>,
    y: Array1<f64>,
}

impl Model for NearestNeighbor {
    fn fit(&mut self, x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> Result<(), BoxError> {
        self.x = x.to_owned();
        self.y = y.to_owned();
        Ok(())
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, BoxError> {
        if self.x.nrows() == 0 {
            return Err("predict called before fit".into());
        }
        Ok(x.rows()
            .into_iter()
            .map(|row| {
                let mut best = (f64::INFINITY, 0);
                for (i, train_row) in self.x.rows().into_iter().enumerate() {
                    let dist: f64 = row
                        .iter()
                        .zip(train_row.iter())
                        .map(|(a, b)| (a - b).powi(2))
                        .sum();
                    if dist < best.0 {
                        best = (dist, i);
                    }
                }
                self.y[best.1]
            })
            .collect())
    }
}

/// Wraps [`NearestNeighbor`] and records every matrix passed to `fit`.
#[derive(Debug)]
pub struct Recording {
    inner: NearestNeighbor,
    log: Rc<RefCell<Vec<Array2<f64>>>>,
}

impl Recording {
    pub fn new(log: &Rc<RefCell<Vec<Array2<f64>>>>) -> Self {
        Self {
            inner: NearestNeighbor::default(),
            log: Rc::clone(log),
        }
    }
}

impl Model for Recording {
    fn fit(&mut self, x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> Result<(), BoxError> {
        self.log.borrow_mut().push(x.to_owned());
        self.inner.fit(x, y)
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, BoxError> {
        self.inner.predict(x)
    }
}

/// Factory for [`NearestNeighbor`] models.
pub fn nn_factory() -> impl FnMut() -> Result<NearestNeighbor, BoxError> {
    || Ok(NearestNeighbor::default())
}

/// Training targets follow `y = x0 + 2 * x1`.
pub fn x_train() -> Array2<f64> {
    array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]
}

pub fn y_train() -> Array1<f64> {
    array![0.0, 1.0, 2.0, 3.0]
}

pub fn x_test() -> Array2<f64> {
    array![[0.9, 0.1], [0.1, 0.9], [0.8, 0.8]]
}

pub fn y_test() -> Array1<f64> {
    array![1.0, 2.0, 3.0]
}

pub fn attr_test() -> Array2<f64> {
    array![[1.0, 0.0], [0.0, 1.0], [0.5, 0.5]]
}

pub fn attr_train() -> Array2<f64> {
    array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.5, 0.5]]
}

/// Score of a model trained once on the unmasked data.
pub fn unmasked_mse() -> f64 {
    let mut model = NearestNeighbor::default();
    model.fit(x_train().view(), y_train().view()).unwrap();
    let predictions = model.predict(x_test().view()).unwrap();
    mse(y_test().view(), predictions.view())
}

pub fn mse(y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> f64 {
    let n = y_true.len() as f64;
    y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum::<f64>()
        / n
}
