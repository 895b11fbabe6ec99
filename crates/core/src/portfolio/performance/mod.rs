//! Weighted portfolio vs. benchmark performance.
//!
//! Pipeline: fetch → [`align_series`] → [`weighted_returns`] →
//! [`compare_with_benchmark`] → [`sample_rows`] + [`build_summary`].
//! Every stage is a pure function; [`PerformanceService`] does the fetching.

mod alignment;
mod comparison;
pub mod performance_model;
pub mod performance_service;
mod returns;
mod sampling;
mod summary;

pub use alignment::align_series;
pub use comparison::compare_with_benchmark;
pub use performance_model::*;
pub use performance_service::*;
pub use returns::{weight_fractions, weighted_returns};
pub use sampling::{sample_rows, stride_for_window};
pub use summary::build_summary;
