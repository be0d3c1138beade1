//! Server Configuration

use std::path::PathBuf;

use astro_engine::{AstroError, MarketTrend, Result};

/// Environment-driven server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address (`BIND_ADDR`)
    pub bind_addr: String,

    /// Directory served for non-API paths (`STATIC_DIR`)
    pub static_dir: PathBuf,

    /// Forced market trend (`MARKET_TREND`), overriding the market feed
    pub market_trend: Option<MarketTrend>,

    /// JSON price/news snapshot for the static feed (`MARKET_SNAPSHOT`)
    pub market_snapshot: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: PathBuf::from("static"),
            market_trend: None,
            market_snapshot: None,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let market_trend = var("MARKET_TREND")
            .map(|raw| {
                raw.parse::<MarketTrend>().map_err(|_| {
                    AstroError::Config(format!(
                        "MARKET_TREND must be bullish, bearish or neutral, got '{raw}'"
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            bind_addr: var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: var("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            market_trend,
            market_snapshot: var("MARKET_SNAPSHOT").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("STATIC_DIR", "/srv/www"),
            ("MARKET_TREND", "Bearish"),
            ("MARKET_SNAPSHOT", "data/market.json"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.market_trend, Some(MarketTrend::Bearish));
        assert_eq!(config.market_snapshot, Some(PathBuf::from("data/market.json")));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "  "), ("MARKET_TREND", "")]))
            .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.market_trend, None);
    }

    #[test]
    fn test_invalid_trend_is_rejected() {
        let err =
            ServerConfig::from_lookup(lookup(&[("MARKET_TREND", "sideways-ish")])).unwrap_err();
        assert!(matches!(err, AstroError::Config(_)));
    }
}
