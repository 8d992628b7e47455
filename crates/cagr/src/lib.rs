#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cagr-rs/cagr/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod quadruple;
pub mod solve;

// Re-export the inversion functions from the math crate
pub use cagr_math as math;

// Re-export main types
pub use quadruple::{Quadruple, Quantity};
pub use solve::{Result, SolveError, resolve, resolve_parts};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
