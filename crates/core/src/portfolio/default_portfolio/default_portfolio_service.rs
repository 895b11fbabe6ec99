use std::sync::Arc;

use log::{debug, error};

use super::DefaultPortfolioStore;
use crate::errors::{Error, Result};
use crate::portfolio::portfolio_model::{DefaultPortfolioConfig, HoldingSpec};
use crate::portfolio::validation::normalize_holdings;

pub trait DefaultPortfolioServiceTrait: Send + Sync {
    /// Stored default, or the built-in one when nothing usable is stored.
    fn get_default(&self) -> DefaultPortfolioConfig;

    /// Validate and persist `holdings`, returning what was saved.
    fn save_default(&self, holdings: &[HoldingSpec]) -> Result<DefaultPortfolioConfig>;
}

pub struct DefaultPortfolioService {
    store: Arc<dyn DefaultPortfolioStore>,
}

impl DefaultPortfolioService {
    pub fn new(store: Arc<dyn DefaultPortfolioStore>) -> Self {
        Self { store }
    }
}

impl DefaultPortfolioServiceTrait for DefaultPortfolioService {
    fn get_default(&self) -> DefaultPortfolioConfig {
        match self.store.read() {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!("No default portfolio stored, using built-in default");
                DefaultPortfolioConfig::builtin()
            }
            Err(e) => {
                error!("Failed to read default portfolio: {}", e);
                DefaultPortfolioConfig::builtin()
            }
        }
    }

    fn save_default(&self, holdings: &[HoldingSpec]) -> Result<DefaultPortfolioConfig> {
        let config = DefaultPortfolioConfig::new(normalize_holdings(holdings)?);

        self.store.write(&config).map_err(|e| {
            error!("Failed to save default portfolio: {}", e);
            Error::Persistence(format!("Failed to save portfolio: {}", e))
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::default_portfolio::InMemoryPortfolioStore;
    use rust_decimal_macros::dec;

    struct BrokenStore;

    impl DefaultPortfolioStore for BrokenStore {
        fn read(&self) -> Result<Option<DefaultPortfolioConfig>> {
            Err(Error::Persistence("disk on fire".into()))
        }

        fn write(&self, _config: &DefaultPortfolioConfig) -> Result<()> {
            Err(Error::Persistence("read-only filesystem".into()))
        }
    }

    #[test]
    fn test_empty_store_falls_back_to_builtin() {
        let service = DefaultPortfolioService::new(Arc::new(InMemoryPortfolioStore::new()));
        assert_eq!(service.get_default(), DefaultPortfolioConfig::builtin());
    }

    #[test]
    fn test_save_then_get() {
        let service = DefaultPortfolioService::new(Arc::new(InMemoryPortfolioStore::new()));
        let saved = service
            .save_default(&[
                HoldingSpec::new(" fpt", dec!(60)),
                HoldingSpec::new("MWG", dec!(40)),
            ])
            .unwrap();

        assert_eq!(saved.holdings[0].symbol, "FPT");
        assert_eq!(service.get_default(), saved);
    }

    #[test]
    fn test_save_rejects_over_allocation() {
        let store = Arc::new(InMemoryPortfolioStore::new());
        let service = DefaultPortfolioService::new(store.clone());

        let err = service
            .save_default(&[HoldingSpec::new("VNM", dec!(101))])
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_read_failure_falls_back_to_builtin() {
        let service = DefaultPortfolioService::new(Arc::new(BrokenStore));
        assert_eq!(service.get_default(), DefaultPortfolioConfig::builtin());
    }

    #[test]
    fn test_write_failure_is_persistence_error() {
        let service = DefaultPortfolioService::new(Arc::new(BrokenStore));
        let err = service
            .save_default(&[HoldingSpec::new("VNM", dec!(100))])
            .unwrap_err();

        assert!(matches!(err, Error::Persistence(_)));
        assert!(err.to_string().starts_with("Failed to save portfolio:"));
    }
}
