mod default_portfolio_service;
mod default_portfolio_traits;
mod memory_store;

pub use default_portfolio_service::{DefaultPortfolioService, DefaultPortfolioServiceTrait};
pub use default_portfolio_traits::DefaultPortfolioStore;
pub use memory_store::InMemoryPortfolioStore;
