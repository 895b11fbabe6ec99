use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::{anyhow, Context};
use chrono_tz::Tz;
use vnfolio_core::constants::DEFAULT_BENCHMARK_SYMBOL;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub portfolio_file: PathBuf,
    pub benchmark_symbol: String,
    /// Zero disables the quote cache
    pub quote_cache_ttl: Duration,
    /// Timezone whose calendar date is "today" for lookback windows
    pub market_timezone: Tz,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup; unset variables take their defaults.
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let listen_addr: SocketAddr = get("VF_LISTEN_ADDR", "0.0.0.0:8000")
            .parse()
            .context("Invalid VF_LISTEN_ADDR")?;
        let cors_allow = get("VF_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = get("VF_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid VF_REQUEST_TIMEOUT_MS")?;
        let portfolio_file = PathBuf::from(get("VF_PORTFOLIO_FILE", "default_portfolio.json"));
        let benchmark_symbol = get("VF_BENCHMARK_SYMBOL", DEFAULT_BENCHMARK_SYMBOL)
            .trim()
            .to_uppercase();
        if benchmark_symbol.is_empty() {
            return Err(anyhow!("VF_BENCHMARK_SYMBOL must not be empty"));
        }
        let cache_ttl_secs: u64 = get("VF_QUOTE_CACHE_TTL_SECS", "300")
            .parse()
            .context("Invalid VF_QUOTE_CACHE_TTL_SECS")?;
        let tz_name = get("VF_MARKET_TIMEZONE", "Asia/Ho_Chi_Minh");
        let market_timezone: Tz = tz_name
            .parse()
            .map_err(|e| anyhow!("Invalid VF_MARKET_TIMEZONE {}: {}", tz_name, e))?;

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            portfolio_file,
            benchmark_symbol,
            quote_cache_ttl: Duration::from_secs(cache_ttl_secs),
            market_timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]).unwrap();
        assert_eq!(config.listen_addr.port(), 8000);
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.portfolio_file, PathBuf::from("default_portfolio.json"));
        assert_eq!(config.benchmark_symbol, "VNINDEX");
        assert_eq!(config.quote_cache_ttl, Duration::from_secs(300));
        assert_eq!(config.market_timezone, chrono_tz::Asia::Ho_Chi_Minh);
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("VF_CORS_ALLOW_ORIGINS", "http://a.test, http://b.test,"),
            ("VF_BENCHMARK_SYMBOL", "vn30"),
            ("VF_QUOTE_CACHE_TTL_SECS", "0"),
        ])
        .unwrap();
        assert_eq!(config.cors_allow, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.benchmark_symbol, "VN30");
        assert!(config.quote_cache_ttl.is_zero());
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(config_with(&[("VF_LISTEN_ADDR", "nope")]).is_err());
        assert!(config_with(&[("VF_REQUEST_TIMEOUT_MS", "-1")]).is_err());
        assert!(config_with(&[("VF_MARKET_TIMEZONE", "Mars/Olympus")]).is_err());
    }
}
