#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ablate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod baseline;
pub mod counts;
pub mod error;
pub mod mask;
pub mod masker;
pub mod ordering;
pub mod tie_break;

pub use baseline::training_means;
pub use counts::{CountPolicy, resolve_counts};
pub use error::{MaskingError, Result};
pub use mask::{MaskSpan, mask_columns, mask_row};
pub use masker::Masker;
pub use ordering::{feature_ordering, validate_attributions};
pub use tie_break::{DEFAULT_NOISE_SCALE, DEFAULT_SEED, scaled_tie_break_noise, tie_break_noise};
