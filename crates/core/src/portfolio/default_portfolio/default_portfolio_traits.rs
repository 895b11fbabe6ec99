//! Storage trait for the default portfolio.

use crate::errors::Result;
use crate::portfolio::portfolio_model::DefaultPortfolioConfig;

/// Read/write access to the single persisted default portfolio.
///
/// Writes replace the stored config wholesale. Readers must never observe a
/// partially written config.
pub trait DefaultPortfolioStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> Result<Option<DefaultPortfolioConfig>>;

    fn write(&self, config: &DefaultPortfolioConfig) -> Result<()>;
}
