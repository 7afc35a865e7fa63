//! Exhaustive per-sample retraining: `remove` and `keep`.
//!
//! For every test sample a fresh model is trained on the full training set
//! with that sample's selected features replaced by their training mean in
//! every row, and only that sample is predicted. This costs one retraining
//! per test sample and is the reference the batch evaluators approximate.

use crate::error::Result;
use crate::evaluator::{EvalStats, Evaluation, Evaluator, Method, predict_checked};
use crate::metric::Metric;
use crate::model::ModelFactory;
use ablate_data::Dataset;
use ablate_masking::{resolve_counts, validate_attributions};
use ndarray::{Array1, ArrayView2, Axis};
use tracing::{debug, info};

impl Evaluator {
    /// Mask each test sample's top `nmask[i]` features, retrain, and score.
    ///
    /// Samples with `nmask[i] == 0` are predicted by a single model trained
    /// on the unmasked data, built the first time such a sample is seen.
    ///
    /// # Errors
    /// Fails before any training on invalid counts or attributions, and
    /// aborts on the first factory, `fit` or `predict` failure.
    pub fn remove<F, M>(
        &self,
        nmask: &[usize],
        data: &Dataset,
        attr_test: ArrayView2<'_, f64>,
        factory: &mut F,
        metric: &M,
    ) -> Result<f64>
    where
        F: ModelFactory,
        M: Metric + ?Sized,
    {
        Ok(self
            .remove_with_stats(nmask, data, attr_test, factory, metric)?
            .score)
    }

    /// [`Evaluator::remove`] returning work statistics alongside the score.
    ///
    /// # Errors
    /// See [`Evaluator::remove`].
    pub fn remove_with_stats<F, M>(
        &self,
        nmask: &[usize],
        data: &Dataset,
        attr_test: ArrayView2<'_, f64>,
        factory: &mut F,
        metric: &M,
    ) -> Result<Evaluation>
    where
        F: ModelFactory,
        M: Metric + ?Sized,
    {
        self.exhaustive(Method::Remove, nmask, "nmask", data, attr_test, factory, metric)
    }

    /// Keep each test sample's top `nkeep[i]` features, mask the rest,
    /// retrain, and score. Every sample is retrained, including those that
    /// keep all features.
    ///
    /// # Errors
    /// Same policy as [`Evaluator::remove`].
    pub fn keep<F, M>(
        &self,
        nkeep: &[usize],
        data: &Dataset,
        attr_test: ArrayView2<'_, f64>,
        factory: &mut F,
        metric: &M,
    ) -> Result<f64>
    where
        F: ModelFactory,
        M: Metric + ?Sized,
    {
        Ok(self
            .keep_with_stats(nkeep, data, attr_test, factory, metric)?
            .score)
    }

    /// [`Evaluator::keep`] returning work statistics alongside the score.
    ///
    /// # Errors
    /// See [`Evaluator::keep`].
    pub fn keep_with_stats<F, M>(
        &self,
        nkeep: &[usize],
        data: &Dataset,
        attr_test: ArrayView2<'_, f64>,
        factory: &mut F,
        metric: &M,
    ) -> Result<Evaluation>
    where
        F: ModelFactory,
        M: Metric + ?Sized,
    {
        self.exhaustive(Method::Keep, nkeep, "nkeep", data, attr_test, factory, metric)
    }

    #[allow(clippy::too_many_arguments)]
    fn exhaustive<F, M>(
        &self,
        method: Method,
        counts: &[usize],
        argument: &'static str,
        data: &Dataset,
        attr_test: ArrayView2<'_, f64>,
        factory: &mut F,
        metric: &M,
    ) -> Result<Evaluation>
    where
        F: ModelFactory,
        M: Metric + ?Sized,
    {
        let (n_train, n_test, n_features) = (data.n_train(), data.n_test(), data.n_features());
        let counts = resolve_counts(
            counts,
            n_test,
            n_features,
            self.config().count_policy,
            argument,
        )?;
        validate_attributions(attr_test, (n_test, n_features), "attr_test")?;

        let masker = self.masker(data)?;
        let (x_train, y_train) = (data.x_train(), data.y_train());
        let x_test = data.x_test();

        info!(%method, n_train, n_test, n_features, "starting exhaustive evaluation");

        let mut stats = EvalStats::default();
        let mut unmasked = None;
        let mut scratch = x_train.to_owned();
        let mut predictions = Array1::<f64>::zeros(n_test);

        for (i, &count) in counts.iter().enumerate() {
            let test_row = x_test.row(i).insert_axis(Axis(0));

            if method == Method::Remove && count == 0 {
                let model = match unmasked.take() {
                    Some(model) => model,
                    None => self.fit_model(factory, x_train, y_train, &mut stats)?,
                };
                predictions[i] = predict_checked(&model, test_row)?[0];
                unmasked = Some(model);
                continue;
            }

            let features = masker.select(attr_test.row(i), method.span(count))?;

            // Reset from the original so no earlier sample's masking survives
            scratch.assign(&x_train);
            masker.mask_columns(scratch.view_mut(), &features);
            let mut masked_row = test_row.to_owned();
            masker.mask_columns(masked_row.view_mut(), &features);

            debug!(%method, sample = i, masked = features.len(), "retraining on masked copy");
            let model = self.fit_model(factory, scratch.view(), y_train, &mut stats)?;
            predictions[i] = predict_checked(&model, masked_row.view())?[0];

            stats.masked_train_cells += features.len() * n_train;
            stats.masked_test_cells += features.len();
        }

        let score = metric.score(data.y_test(), predictions.view());
        info!(%method, score, retrainings = stats.retrainings, "exhaustive evaluation finished");

        Ok(Evaluation { score, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BoxError, EvalError};
    use crate::metric::MeanSquaredError;
    use crate::model::Model;
    use ndarray::{Array2, ArrayView1, array};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Predicts the sum of the row; records every training matrix it sees.
    #[derive(Debug)]
    struct RowSum {
        seen: Rc<RefCell<Vec<Array2<f64>>>>,
    }

    impl Model for RowSum {
        fn fit(&mut self, x: ArrayView2<'_, f64>, _y: ArrayView1<'_, f64>) -> std::result::Result<(), BoxError> {
            self.seen.borrow_mut().push(x.to_owned());
            Ok(())
        }

        fn predict(&self, x: ArrayView2<'_, f64>) -> std::result::Result<Array1<f64>, BoxError> {
            Ok(x.sum_axis(ndarray::Axis(1)))
        }
    }

    fn data() -> Dataset {
        Dataset::from_arrays(
            array![[0.0, 10.0], [2.0, 30.0]],
            array![0.0, 0.0],
            array![[5.0, 5.0], [7.0, 7.0]],
            array![0.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn test_remove_masks_columns_everywhere() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut factory = || Ok::<_, BoxError>(RowSum { seen: Rc::clone(&seen) });
        let attr = array![[1.0, 0.0], [0.0, 1.0]];
        let predictions = RefCell::new(Array1::zeros(0));
        let metric = |_t: ArrayView1<'_, f64>, p: ArrayView1<'_, f64>| {
            *predictions.borrow_mut() = p.to_owned();
            0.0
        };

        let eval = Evaluator::default()
            .remove_with_stats(&[1, 1], &data(), attr.view(), &mut factory, &metric)
            .unwrap();

        assert_eq!(eval.stats.retrainings, 2);
        assert_eq!(eval.stats.masked_train_cells, 4);
        assert_eq!(eval.stats.masked_test_cells, 2);

        let seen = seen.borrow();
        assert_eq!(seen[0], array![[1.0, 10.0], [1.0, 30.0]]);
        assert_eq!(seen[1], array![[0.0, 20.0], [2.0, 20.0]]);
        // sample 0: feature 0 -> mean 1.0; sample 1: feature 1 -> mean 20.0
        assert_eq!(*predictions.borrow(), array![6.0, 27.0]);
    }

    #[test]
    fn test_zero_counts_predict_each_test_row() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut factory = || Ok::<_, BoxError>(RowSum { seen: Rc::clone(&seen) });
        let attr = array![[1.0, 0.0], [0.0, 1.0]];
        let predictions = RefCell::new(Array1::zeros(0));
        let metric = |_t: ArrayView1<'_, f64>, p: ArrayView1<'_, f64>| {
            *predictions.borrow_mut() = p.to_owned();
            0.0
        };

        let eval = Evaluator::default()
            .remove_with_stats(&[0, 0], &data(), attr.view(), &mut factory, &metric)
            .unwrap();

        // one shared unmasked model, each sample predicted from its own row
        assert_eq!(eval.stats.retrainings, 1);
        assert_eq!(*predictions.borrow(), array![10.0, 14.0]);
    }

    #[test]
    fn test_keep_masks_suffix() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut factory = || Ok::<_, BoxError>(RowSum { seen: Rc::clone(&seen) });
        let attr = array![[1.0, 0.0], [0.0, 1.0]];

        let eval = Evaluator::default()
            .keep_with_stats(&[1, 2], &data(), attr.view(), &mut factory, &MeanSquaredError)
            .unwrap();

        // nkeep = n_features still retrains
        assert_eq!(eval.stats.retrainings, 2);
        let seen = seen.borrow();
        assert_eq!(seen[0], array![[0.0, 20.0], [2.0, 20.0]]);
        assert_eq!(seen[1], array![[0.0, 10.0], [2.0, 30.0]]);
    }

    #[test]
    fn test_remove_rejects_bad_attribution_shape() {
        let mut calls = 0;
        let mut factory = || {
            calls += 1;
            Ok::<_, BoxError>(RowSum {
                seen: Rc::default(),
            })
        };
        let attr = array![[1.0, 0.0]];
        let err = Evaluator::default()
            .remove(&[1, 1], &data(), attr.view(), &mut factory, &MeanSquaredError)
            .unwrap_err();
        assert!(matches!(err, EvalError::Masking(_)));
        assert_eq!(calls, 0);
    }
}
