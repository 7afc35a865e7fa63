#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ablate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export main types from sub-crates
pub use ablate_data as data;
pub use ablate_eval as eval;
pub use ablate_masking as masking;
pub use ablate_output as output;

// Entry points
pub use ablate_eval::{batch_keep, batch_remove, keep, remove};

/// Commonly used types.
pub mod prelude {
    pub use ablate_data::{DataError, Dataset, FeatureTable, TargetColumn};
    pub use ablate_eval::{
        Accuracy, Attributions, BatchInputs, BoxError, CancellationToken, EvalConfig, EvalError,
        EvalStats, Evaluation, Evaluator, MaskingCurve, MeanAbsoluteError, MeanSquaredError,
        Method, Metric, Model, ModelFactory, R2Score, RocAuc,
    };
    pub use ablate_masking::{CountPolicy, MaskSpan, MaskingError};
    pub use ablate_output::{CurveSummary, ExportFormat, Exporter};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
