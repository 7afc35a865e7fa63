//! Tabular summaries of masking curves.
//!
//! A [`CurveSummary`] holds one row per evaluated curve: the scores at the
//! smallest and largest mask fractions, the trapezoidal area under the
//! curve and the number of models trained to produce it.

use ablate_eval::{MaskingCurve, Method};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary statistics of a single curve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurveSummaryRow {
    /// Evaluated method.
    pub method: Method,

    /// Name of the metric.
    pub metric: String,

    /// Number of evaluated fractions.
    pub points: usize,

    /// Score at the smallest fraction.
    pub first_score: Option<f64>,

    /// Score at the largest fraction.
    pub last_score: Option<f64>,

    /// Trapezoidal area under the curve.
    pub area: f64,

    /// Models trained across all points.
    pub retrainings: usize,
}

impl From<&MaskingCurve> for CurveSummaryRow {
    fn from(curve: &MaskingCurve) -> Self {
        Self {
            method: curve.method,
            metric: curve.metric.clone(),
            points: curve.points.len(),
            first_score: curve.first().map(|p| p.score),
            last_score: curve.last().map(|p| p.score),
            area: curve.area(),
            retrainings: curve.retrainings(),
        }
    }
}

impl CurveSummaryRow {
    /// Score change from the smallest to the largest fraction.
    pub fn score_change(&self) -> Option<f64> {
        Some(self.last_score? - self.first_score?)
    }
}

/// One row per curve, in the order the curves were given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CurveSummary {
    /// Summary rows.
    pub rows: Vec<CurveSummaryRow>,
}

impl CurveSummary {
    /// Summarize the given curves.
    pub fn new(curves: &[MaskingCurve]) -> Self {
        Self {
            rows: curves.iter().map(CurveSummaryRow::from).collect(),
        }
    }

    /// Row for `method`, if it was evaluated.
    pub fn get(&self, method: Method) -> Option<&CurveSummaryRow> {
        self.rows.iter().find(|row| row.method == method)
    }

    /// Total retrainings across all curves.
    pub fn total_retrainings(&self) -> usize {
        self.rows.iter().map(|row| row.retrainings).sum()
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str("\nMasking Curve Summary\n");
        output.push_str(&"=".repeat(80));
        output.push('\n');

        output.push_str(&format!(
            "{:<14} {:<10} {:>7} {:>12} {:>12} {:>10} {:>10}\n",
            "Method", "Metric", "Points", "First", "Last", "Area", "Models"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<14} {:<10} {:>7} {:>12} {:>12} {:>10.4} {:>10}\n",
                row.method.name(),
                row.metric,
                row.points,
                format_score(row.first_score),
                format_score(row.last_score),
                row.area,
                row.retrainings
            ));
        }

        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!("Total models trained: {}\n", self.total_retrainings()));

        output
    }

    /// Format as Markdown table for documentation.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str("# Masking Curve Summary\n\n");
        output.push_str("| Method | Metric | Points | First | Last | Area | Models |\n");
        output.push_str("|--------|--------|--------|-------|------|------|--------|\n");

        for row in &self.rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {:.4} | {} |\n",
                row.method.name(),
                row.metric,
                row.points,
                format_score(row.first_score),
                format_score(row.last_score),
                row.area,
                row.retrainings
            ));
        }

        output.push('\n');
        output.push_str(&format!(
            "- **Total models trained:** {}\n",
            self.total_retrainings()
        ));

        output
    }
}

impl fmt::Display for CurveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ascii_table())
    }
}

fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "-".to_string(), |s| format!("{s:.4}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ablate_eval::CurvePoint;
    use approx::assert_relative_eq;

    fn curve(method: Method, scores: &[(f64, f64)]) -> MaskingCurve {
        MaskingCurve {
            method,
            metric: "r2".to_string(),
            points: scores
                .iter()
                .map(|&(fraction, score)| CurvePoint {
                    fraction,
                    count: (fraction * 4.0).round() as usize,
                    score,
                    retrainings: if method.is_batch() { 1 } else { 10 },
                })
                .collect(),
        }
    }

    fn summary() -> CurveSummary {
        CurveSummary::new(&[
            curve(Method::Remove, &[(0.0, 0.9), (0.5, 0.6), (1.0, 0.1)]),
            curve(Method::BatchKeep, &[(0.0, 0.2), (1.0, 0.9)]),
        ])
    }

    #[test]
    fn test_rows_follow_curves() {
        let summary = summary();
        assert_eq!(summary.rows.len(), 2);

        let remove = summary.get(Method::Remove).unwrap();
        assert_eq!(remove.points, 3);
        assert_eq!(remove.first_score, Some(0.9));
        assert_eq!(remove.last_score, Some(0.1));
        assert_relative_eq!(remove.area, 0.55, epsilon = 1e-12);
        assert_relative_eq!(remove.score_change().unwrap(), -0.8, epsilon = 1e-12);

        assert!(summary.get(Method::Keep).is_none());
        assert_eq!(summary.total_retrainings(), 32);
    }

    #[test]
    fn test_empty_curve_row() {
        let row = CurveSummaryRow::from(&curve(Method::Keep, &[]));
        assert_eq!(row.first_score, None);
        assert_eq!(row.score_change(), None);
        assert_eq!(row.area, 0.0);
    }

    #[test]
    fn test_ascii_table() {
        let table = summary().to_ascii_table();
        assert!(table.contains("Masking Curve Summary"));
        assert!(table.contains("remove"));
        assert!(table.contains("batch_keep"));
        assert!(table.contains("0.5500"));
        assert!(table.contains("Total models trained: 32"));
        assert_eq!(summary().to_string(), table);
    }

    #[test]
    fn test_markdown() {
        let md = summary().to_markdown();
        assert!(md.starts_with("# Masking Curve Summary"));
        assert!(md.contains("| remove | r2 | 3 | 0.9000 | 0.1000 | 0.5500 | 30 |"));
        assert!(md.contains("| batch_keep | r2 | 2 | 0.2000 | 0.9000 | 0.5500 | 2 |"));
    }
}
