//! Portfolio definitions, the default-portfolio store, and performance analytics.

pub mod default_portfolio;
pub mod performance;
pub mod portfolio_model;
pub mod validation;

pub use default_portfolio::{
    DefaultPortfolioService, DefaultPortfolioServiceTrait, DefaultPortfolioStore,
    InMemoryPortfolioStore,
};
pub use portfolio_model::*;
pub use validation::{normalize_holdings, validate_request, validate_window};
