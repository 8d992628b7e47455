#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cagr-rs/cagr/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod change;

// Re-export the inversions at the crate root
pub use change::{change_factor, end_value, period_count, rate_per_period, start_value};
