//! Facade-level tests: frame inputs through the top-level entry points.

use ablate::prelude::*;
use ndarray::{Array1, ArrayView1, ArrayView2, array};
use polars::prelude::*;

/// 1-nearest-neighbour classifier; ties go to the lowest training index.
#[derive(Debug, Default)]
struct Nearest {
    x: ndarray::Array2<f64>,
    y: Array1<f64>,
}

impl Model for Nearest {
    fn fit(&mut self, x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> Result<(), BoxError> {
        self.x = x.to_owned();
        self.y = y.to_owned();
        Ok(())
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, BoxError> {
        let mut out = Array1::zeros(x.nrows());
        for (i, row) in x.rows().into_iter().enumerate() {
            let mut best = (f64::INFINITY, 0);
            for (j, train) in self.x.rows().into_iter().enumerate() {
                let d = (&row - &train).mapv(|v| v * v).sum();
                if d < best.0 {
                    best = (d, j);
                }
            }
            out[i] = self.y[best.1];
        }
        Ok(out)
    }
}

struct Fixture {
    train: DataFrame,
    test: DataFrame,
    y_train: Series,
    y_test: Series,
}

// The label is the sign of `signal`; `noise` is unrelated to it.
fn fixture() -> Fixture {
    Fixture {
        train: df! {
            "signal" => [-2.0, -1.0, 1.0, 2.0],
            "noise" => [0.0, 1.0, 0.0, 1.0],
        }
        .unwrap(),
        test: df! {
            "signal" => [-1.5, 1.5],
            "noise" => [0.9, 0.1],
        }
        .unwrap(),
        y_train: Series::new("label".into(), &[0i32, 0, 1, 1]),
        y_test: Series::new("label".into(), &[0i32, 1]),
    }
}

fn factory() -> impl FnMut() -> Result<Nearest, BoxError> {
    || Ok(Nearest::default())
}

#[test]
fn test_good_attributions_separate_remove_and_keep() {
    let f = fixture();
    let attr_test = array![[0.9, 0.1], [0.8, 0.05]];

    let unmasked = ablate::remove(&[0, 0], &f.train, &f.y_train, &f.test, &f.y_test, &attr_test, factory(), RocAuc)
        .unwrap();
    let removed = ablate::remove(&[1, 1], &f.train, &f.y_train, &f.test, &f.y_test, &attr_test, factory(), RocAuc)
        .unwrap();
    let kept = ablate::keep(&[1, 1], &f.train, &f.y_train, &f.test, &f.y_test, &attr_test, factory(), RocAuc)
        .unwrap();

    assert_eq!(unmasked, 1.0);
    // Without the signal every test row falls back to a class-0 neighbour
    assert_eq!(removed, 0.5);
    assert_eq!(kept, 1.0);
}

#[test]
fn test_batch_methods_with_frames() {
    let f = fixture();
    let attr_train = array![[1.0, 0.0], [1.0, 0.0], [1.0, 0.0], [1.0, 0.0]];
    let attr_test = array![[1.0, 0.0], [1.0, 0.0]];

    let roar = ablate::batch_remove(
        &[1; 4],
        &[1; 2],
        &f.train,
        &f.y_train,
        &f.test,
        &f.y_test,
        &attr_train,
        &attr_test,
        factory(),
        Accuracy::default(),
    )
    .unwrap();
    let kar = ablate::batch_keep(
        &[1; 4],
        &[1; 2],
        &f.train,
        &f.y_train,
        &f.test,
        &f.y_test,
        &attr_train,
        &attr_test,
        factory(),
        Accuracy::default(),
    )
    .unwrap();

    assert_eq!(roar, 0.5);
    assert_eq!(kar, 1.0);
}

#[test]
fn test_summary_from_prelude() {
    let f = fixture();
    let data = Dataset::new(&f.train, &f.y_train, &f.test, &f.y_test).unwrap();
    let attr = array![[1.0, 0.0], [1.0, 0.0]];
    let mut models = factory();
    let evaluator = Evaluator::default();

    let curves: Vec<MaskingCurve> = [Method::Remove, Method::Keep]
        .into_iter()
        .map(|method| {
            let attributions = Attributions {
                train: None,
                test: attr.view(),
            };
            evaluator
                .curve(method, &[0.0, 0.5, 1.0], &data, attributions, &mut models, &RocAuc)
                .unwrap()
        })
        .collect();

    let summary = CurveSummary::new(&curves);
    assert_eq!(summary.get(Method::Remove).unwrap().first_score, Some(1.0));
    assert_eq!(summary.get(Method::Keep).unwrap().last_score, Some(1.0));
    assert!(summary.export_to_string(ExportFormat::Csv).unwrap().contains("roc_auc"));
}

#[test]
fn test_errors_reach_the_caller() {
    let f = fixture();
    let err = ablate::keep(&[3, 0], &f.train, &f.y_train, &f.test, &f.y_test, &array![[1.0, 0.0], [1.0, 0.0]], factory(), RocAuc)
        .unwrap_err();
    assert!(matches!(err, EvalError::Masking(MaskingError::CountOutOfRange { .. })));
}
