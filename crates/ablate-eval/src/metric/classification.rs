//! Binary classification metrics.
//!
//! Labels are read as positive when `y_true >= 0.5`.

use super::Metric;
use ndarray::ArrayView1;

fn is_positive(label: f64) -> bool {
    label >= 0.5
}

/// Fraction of predictions on the same side of `threshold` as their label.
///
/// Higher is better. Returns 0.0 for empty inputs.
#[derive(Debug, Clone, Copy)]
pub struct Accuracy {
    /// Predictions at or above this value count as positive.
    pub threshold: f64,
}

impl Default for Accuracy {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

impl Metric for Accuracy {
    fn score(&self, y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> f64 {
        if y_true.is_empty() {
            return 0.0;
        }
        let correct = y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|&(&t, &p)| is_positive(t) == (p >= self.threshold))
            .count();
        correct as f64 / y_true.len() as f64
    }

    fn name(&self) -> &str {
        "accuracy"
    }
}

/// Area under the ROC curve, computed from average ranks.
///
/// Tied predictions share their mean rank, so they contribute one half to
/// the pairwise comparison. Returns 0.5 when only one class is present.
#[derive(Debug, Clone, Copy, Default)]
pub struct RocAuc;

impl Metric for RocAuc {
    fn score(&self, y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> f64 {
        let n = y_true.len();
        let n_pos = y_true.iter().filter(|&&t| is_positive(t)).count();
        let n_neg = n - n_pos;
        if n_pos == 0 || n_neg == 0 {
            return 0.5;
        }

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| y_pred[a].total_cmp(&y_pred[b]));

        // Sum of 1-based average ranks of the positive samples
        let mut pos_rank_sum = 0.0;
        let mut start = 0;
        while start < n {
            let mut end = start + 1;
            while end < n && y_pred[order[end]] == y_pred[order[start]] {
                end += 1;
            }
            let avg_rank = (start + end + 1) as f64 / 2.0;
            let positives = order[start..end]
                .iter()
                .filter(|&&i| is_positive(y_true[i]))
                .count();
            pos_rank_sum += avg_rank * positives as f64;
            start = end;
        }

        let n_pos = n_pos as f64;
        (pos_rank_sum - n_pos * (n_pos + 1.0) / 2.0) / (n_pos * n_neg as f64)
    }

    fn name(&self) -> &str {
        "roc_auc"
    }
}
