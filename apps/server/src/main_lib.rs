use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use vnfolio_core::{
    performance::{PerformanceService, PerformanceServiceTrait},
    DefaultPortfolioService, DefaultPortfolioServiceTrait, DefaultPortfolioStore,
};
use vnfolio_market_data::{CachedQuoteSource, QuoteSource, VciProvider};

use crate::{config::Config, store::FilePortfolioStore};

pub struct AppState {
    pub performance_service: Arc<dyn PerformanceServiceTrait>,
    pub default_portfolio_service: Arc<dyn DefaultPortfolioServiceTrait>,
    pub market_timezone: Tz,
}

impl AppState {
    /// Current calendar date on the exchange.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.market_timezone).date_naive()
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("VF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = VciProvider::new()?;
    let quote_source: Arc<dyn QuoteSource> =
        Arc::new(CachedQuoteSource::new(provider, config.quote_cache_ttl));
    tracing::info!(
        "Quote source: {} (cache ttl {}s)",
        quote_source.id(),
        config.quote_cache_ttl.as_secs()
    );

    let store = FilePortfolioStore::new(config.portfolio_file.clone());
    tracing::info!("Default portfolio file: {}", store.path().display());

    Ok(build_state_with(config, quote_source, Arc::new(store)))
}

/// Assemble the state around explicit collaborators.
pub fn build_state_with(
    config: &Config,
    quote_source: Arc<dyn QuoteSource>,
    store: Arc<dyn DefaultPortfolioStore>,
) -> Arc<AppState> {
    let performance_service = Arc::new(PerformanceService::new(
        quote_source,
        config.benchmark_symbol.clone(),
    ));
    let default_portfolio_service = Arc::new(DefaultPortfolioService::new(store));

    Arc::new(AppState {
        performance_service,
        default_portfolio_service,
        market_timezone: config.market_timezone,
    })
}
