//! Baseline substitution over a range of a feature ordering.

use ndarray::{ArrayView1, ArrayViewMut1, ArrayViewMut2, Axis};
use serde::{Deserialize, Serialize};

/// Which part of a sample's ordering gets masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaskSpan {
    /// Mask the `k` most important features (`ordering[..k]`).
    Top(usize),
    /// Keep the `k` most important features and mask the rest (`ordering[k..]`).
    AllBut(usize),
}

impl MaskSpan {
    /// Features selected for masking, in ordering order.
    ///
    /// Counts larger than the ordering saturate at its length.
    pub fn masked_features(self, ordering: &[usize]) -> &[usize] {
        match self {
            Self::Top(k) => &ordering[..k.min(ordering.len())],
            Self::AllBut(k) => &ordering[k.min(ordering.len())..],
        }
    }

    /// Number of features this span masks out of `n_features`.
    pub fn masked_count(self, n_features: usize) -> usize {
        match self {
            Self::Top(k) => k.min(n_features),
            Self::AllBut(k) => n_features - k.min(n_features),
        }
    }

    /// Whether nothing would be masked.
    pub fn is_empty(self, n_features: usize) -> bool {
        self.masked_count(n_features) == 0
    }
}

/// Overwrite `features` of a single row with their baseline values.
pub fn mask_row(mut row: ArrayViewMut1<'_, f64>, features: &[usize], baseline: ArrayView1<'_, f64>) {
    for &j in features {
        row[j] = baseline[j];
    }
}

/// Overwrite whole columns of `matrix` with their baseline values.
pub fn mask_columns(mut matrix: ArrayViewMut2<'_, f64>, features: &[usize], baseline: ArrayView1<'_, f64>) {
    for &j in features {
        matrix.index_axis_mut(Axis(1), j).fill(baseline[j]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rstest::rstest;

    #[rstest]
    #[case(MaskSpan::Top(0), Vec::new())]
    #[case(MaskSpan::Top(2), vec![3usize, 1])]
    #[case(MaskSpan::Top(4), vec![3usize, 1, 0, 2])]
    #[case(MaskSpan::Top(9), vec![3usize, 1, 0, 2])]
    #[case(MaskSpan::AllBut(0), vec![3usize, 1, 0, 2])]
    #[case(MaskSpan::AllBut(3), vec![2usize])]
    #[case(MaskSpan::AllBut(4), Vec::new())]
    fn test_masked_features(#[case] span: MaskSpan, #[case] expected: Vec<usize>) {
        let ordering = [3, 1, 0, 2];
        assert_eq!(span.masked_features(&ordering), expected.as_slice());
        assert_eq!(span.masked_count(4), expected.len());
    }

    #[test]
    fn test_top_and_all_but_are_complementary() {
        let ordering = [4, 0, 2, 1, 3];
        for k in 0..=ordering.len() {
            let removed = MaskSpan::Top(k).masked_features(&ordering);
            let masked_by_keep = MaskSpan::AllBut(k).masked_features(&ordering);

            let mut all: Vec<usize> = removed.iter().chain(masked_by_keep).copied().collect();
            all.sort_unstable();
            assert_eq!(all, vec![0, 1, 2, 3, 4]);
            assert!(removed.iter().all(|f| !masked_by_keep.contains(f)));
        }
    }

    #[test]
    fn test_is_empty() {
        assert!(MaskSpan::Top(0).is_empty(3));
        assert!(MaskSpan::AllBut(3).is_empty(3));
        assert!(!MaskSpan::AllBut(2).is_empty(3));
    }

    #[test]
    fn test_mask_row() {
        let mut x = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let baseline = array![10.0, 20.0, 30.0];
        mask_row(x.row_mut(1), &[0, 2], baseline.view());
        assert_eq!(x, array![[1.0, 2.0, 3.0], [10.0, 5.0, 30.0]]);
    }

    #[test]
    fn test_mask_columns() {
        let mut x = array![[1.0, 2.0], [3.0, 4.0]];
        let baseline = array![9.0, 8.0];
        mask_columns(x.view_mut(), &[1], baseline.view());
        assert_eq!(x, array![[1.0, 8.0], [3.0, 8.0]]);
    }
}
