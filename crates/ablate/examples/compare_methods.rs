//! Compare an informative and an uninformative attribution with every method.

use ablate::prelude::*;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Two-feature least squares via the normal equations.
#[derive(Debug, Default)]
struct TwoFeatureOls {
    coef: [f64; 2],
    intercept: f64,
}

impl Model for TwoFeatureOls {
    fn fit(&mut self, x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> Result<(), BoxError> {
        let means = x.mean_axis(ndarray::Axis(0)).ok_or("empty training set")?;
        let my = y.mean().ok_or("empty training set")?;
        let centered = &x - &means;
        let yc = &y - my;

        let s00 = centered.column(0).dot(&centered.column(0));
        let s11 = centered.column(1).dot(&centered.column(1));
        let s01 = centered.column(0).dot(&centered.column(1));
        let t0 = centered.column(0).dot(&yc);
        let t1 = centered.column(1).dot(&yc);

        let det = s00 * s11 - s01 * s01;
        self.coef = if det.abs() > 1e-12 {
            [(s11 * t0 - s01 * t1) / det, (s00 * t1 - s01 * t0) / det]
        } else if s00 > 1e-12 {
            [t0 / s00, 0.0]
        } else if s11 > 1e-12 {
            [0.0, t1 / s11]
        } else {
            [0.0, 0.0]
        };
        self.intercept = my - self.coef[0] * means[0] - self.coef[1] * means[1];
        Ok(())
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, BoxError> {
        Ok(x.rows()
            .into_iter()
            .map(|r| self.intercept + self.coef[0] * r[0] + self.coef[1] * r[1])
            .collect())
    }
}

fn constant_attributions(n_rows: usize, weights: [f64; 2]) -> Array2<f64> {
    Array2::from_shape_fn((n_rows, 2), |(_, j)| weights[j])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Ablate Method Comparison ===\n");

    // y depends strongly on x0 and weakly on x1
    let x = |i: usize| [((i * 7) % 11) as f64, ((i * 5) % 13) as f64];
    let target = |r: [f64; 2]| 3.0 * r[0] + 0.5 * r[1];
    let rows = |range: std::ops::Range<usize>| {
        let n = range.len();
        let flat: Vec<f64> = range.clone().flat_map(x).collect();
        let y: Vec<f64> = range.map(|i| target(x(i))).collect();
        (Array2::from_shape_vec((n, 2), flat), Array1::from(y))
    };
    let (x_train, y_train) = rows(0..40);
    let (x_test, y_test) = rows(40..55);
    let (x_train, x_test) = (x_train?, x_test?);
    let data = Dataset::from_arrays(x_train, y_train, x_test, y_test)?;

    // Informative: x0 ranked first. Misleading: x1 ranked first.
    let informative_train = constant_attributions(data.n_train(), [1.0, 0.1]);
    let informative_test = constant_attributions(data.n_test(), [1.0, 0.1]);
    let misleading_train = constant_attributions(data.n_train(), [0.1, 1.0]);
    let misleading_test = constant_attributions(data.n_test(), [0.1, 1.0]);

    let evaluator = Evaluator::default();
    let mut factory = || Ok::<_, BoxError>(TwoFeatureOls::default());
    let fractions = [0.0, 0.5, 1.0];

    for (label, train, test) in [
        ("informative", &informative_train, &informative_test),
        ("misleading", &misleading_train, &misleading_test),
    ] {
        let attributions = Attributions {
            train: Some(train.view()),
            test: test.view(),
        };
        let curves = Method::ALL
            .into_iter()
            .map(|method| {
                evaluator.curve(
                    method,
                    &fractions,
                    &data,
                    attributions,
                    &mut factory,
                    &R2Score,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        println!("Attribution: {label}");
        println!("{}", CurveSummary::new(&curves));
    }

    println!("Single-point scores (mask one feature per sample):");
    let mse_remove = ablate::remove(
        &vec![1; data.n_test()][..],
        data.x_train(),
        data.y_train(),
        data.x_test(),
        data.y_test(),
        informative_test.view(),
        || Ok::<_, BoxError>(TwoFeatureOls::default()),
        MeanSquaredError,
    )?;
    println!("  remove (informative): MSE = {mse_remove:.4}");

    Ok(())
}
