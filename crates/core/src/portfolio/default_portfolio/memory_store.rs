use std::sync::RwLock;

use super::DefaultPortfolioStore;
use crate::errors::{Error, Result};
use crate::portfolio::portfolio_model::DefaultPortfolioConfig;

/// Process-local store, used by tests and when no file is configured.
#[derive(Debug, Default)]
pub struct InMemoryPortfolioStore {
    config: RwLock<Option<DefaultPortfolioConfig>>,
}

impl InMemoryPortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DefaultPortfolioStore for InMemoryPortfolioStore {
    fn read(&self) -> Result<Option<DefaultPortfolioConfig>> {
        let guard = self
            .config
            .read()
            .map_err(|_| Error::Persistence("Portfolio store lock poisoned".into()))?;
        Ok(guard.clone())
    }

    fn write(&self, config: &DefaultPortfolioConfig) -> Result<()> {
        let mut guard = self
            .config
            .write()
            .map_err(|_| Error::Persistence("Portfolio store lock poisoned".into()))?;
        *guard = Some(config.clone());
        Ok(())
    }
}
