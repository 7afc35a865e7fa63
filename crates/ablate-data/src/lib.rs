#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ablate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod table;

pub use dataset::Dataset;
pub use error::{DataError, Result};
pub use table::{FeatureTable, TargetColumn, to_array};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
