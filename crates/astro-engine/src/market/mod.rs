//! Market Context
//!
//! The price and news feeds live outside the engine. Their JSON arrives as
//! opaque input and is reduced to a [`MarketContext`]: a trend, the BTC
//! 24h change and a few headlines.

mod fixed;

pub use fixed::StaticMarketFeed;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AstroError, Result};

/// 24h change (percent) above which the market counts as bullish
pub const BULLISH_THRESHOLD: Decimal = dec!(2);

/// 24h change (percent) below which the market counts as bearish
pub const BEARISH_THRESHOLD: Decimal = dec!(-2);

const MAX_HEADLINES: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketTrend {
    Bullish,
    Bearish,
    Neutral,
}

impl MarketTrend {
    pub fn from_change(change_24h: Decimal) -> Self {
        if change_24h > BULLISH_THRESHOLD {
            Self::Bullish
        } else if change_24h < BEARISH_THRESHOLD {
            Self::Bearish
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for MarketTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Neutral => "neutral",
        })
    }
}

impl FromStr for MarketTrend {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bullish" | "bull" | "up" => Ok(Self::Bullish),
            "bearish" | "bear" | "down" => Ok(Self::Bearish),
            "neutral" | "sideways" | "flat" => Ok(Self::Neutral),
            other => Err(AstroError::Config(format!("unknown market trend '{other}'"))),
        }
    }
}

/// Market state handed to insight synthesis
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketContext {
    pub trend: MarketTrend,

    /// BTC 24h change in percent, when a price feed supplied one
    #[serde(default)]
    pub btc_change_24h: Option<Decimal>,

    #[serde(default)]
    pub headlines: Vec<String>,
}

impl MarketContext {
    pub const fn with_trend(trend: MarketTrend) -> Self {
        Self {
            trend,
            btc_change_24h: None,
            headlines: Vec::new(),
        }
    }

    /// Build from a simple-price response shaped like
    /// `{"bitcoin": {"usd": 97500, "usd_24h_change": 2.4}}`
    pub fn from_price_feed(prices: &serde_json::Value) -> Result<Self> {
        let change = prices
            .get("bitcoin")
            .and_then(|btc| btc.get("usd_24h_change"))
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| AstroError::Market("price feed has no bitcoin 24h change".into()))?;

        let change = Decimal::from_f64_retain(change)
            .ok_or_else(|| AstroError::Market(format!("unrepresentable change {change}")))?
            .round_dp(2);

        Ok(Self {
            trend: MarketTrend::from_change(change),
            btc_change_24h: Some(change),
            headlines: Vec::new(),
        })
    }

    /// Attach headlines from a news response with an `articles` or
    /// `results` array of objects carrying a `title`
    #[must_use]
    pub fn with_news(mut self, news: &serde_json::Value) -> Self {
        let items = news
            .get("articles")
            .or_else(|| news.get("results"))
            .and_then(serde_json::Value::as_array);

        self.headlines = items
            .into_iter()
            .flatten()
            .filter_map(|item| item.get("title").and_then(serde_json::Value::as_str))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .take(MAX_HEADLINES)
            .map(String::from)
            .collect();
        self
    }
}

/// Source of market context (Strategy pattern)
///
/// Implement this for each price/news provider.
#[async_trait]
pub trait MarketFeed: Send + Sync {
    /// Current market context
    async fn market_context(&self) -> Result<MarketContext>;

    /// Check if the feed is reachable
    async fn health_check(&self) -> bool;

    /// Feed name
    fn name(&self) -> &str;
}
