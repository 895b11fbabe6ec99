//! Quote source abstraction and provider implementations.
//!
//! The core crate depends only on [`QuoteSource`]; concrete providers live in
//! submodules and can be swapped or decorated (see [`crate::cache`]).

mod traits;

pub mod vci;

pub use traits::{QuoteSource, LATEST_QUOTE_LOOKBACK_DAYS};
