//! Static Market Feed
//!
//! For tests, demos and offline runs. Holds canned price and news payloads
//! in the providers' JSON shapes and reduces them like a live feed would.

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Value, json};

use super::{MarketContext, MarketFeed};
use crate::error::{AstroError, Result};

/// Market feed over fixed price/news payloads
pub struct StaticMarketFeed {
    prices: Value,
    news: Value,
}

impl Default for StaticMarketFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticMarketFeed {
    pub fn new() -> Self {
        Self {
            prices: json!({"bitcoin": {"usd": 97_500.0, "usd_24h_change": 1.2}}),
            news: json!({"articles": [
                {"title": "Bitcoin consolidates near recent highs"},
                {"title": "Ethereum staking inflows steady"}
            ]}),
        }
    }

    /// Feed reporting the given BTC 24h change
    pub fn with_change(btc_change_24h: Decimal) -> Self {
        let mut feed = Self::new();
        feed.prices = json!({"bitcoin": {
            "usd": 97_500.0,
            "usd_24h_change": btc_change_24h.to_f64(),
        }});
        feed
    }

    /// Feed over raw provider payloads
    pub const fn from_payloads(prices: Value, news: Value) -> Self {
        Self { prices, news }
    }

    #[must_use]
    pub fn with_headlines(mut self, headlines: Vec<String>) -> Self {
        let articles: Vec<Value> = headlines.into_iter().map(|t| json!({"title": t})).collect();
        self.news = json!({"articles": articles});
        self
    }
}

#[async_trait]
impl MarketFeed for StaticMarketFeed {
    async fn market_context(&self) -> Result<MarketContext> {
        Ok(MarketContext::from_price_feed(&self.prices)?.with_news(&self.news))
    }

    async fn health_check(&self) -> bool {
        self.market_context().await.is_ok()
    }

    fn name(&self) -> &str {
        "StaticMarket"
    }
}

impl TryFrom<&str> for StaticMarketFeed {
    type Error = AstroError;

    /// Parse a `{"prices": ..., "news": ...}` snapshot document
    fn try_from(raw: &str) -> Result<Self> {
        let mut doc: Value = serde_json::from_str(raw)?;
        let prices = doc
            .get_mut("prices")
            .map(Value::take)
            .ok_or_else(|| AstroError::Market("snapshot has no prices".into()))?;
        let news = doc.get_mut("news").map(Value::take).unwrap_or(Value::Null);
        Ok(Self::from_payloads(prices, news))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::MarketTrend;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_static_feed_default_is_neutral() {
        let feed = StaticMarketFeed::new();
        let ctx = feed.market_context().await.unwrap();
        assert_eq!(ctx.trend, MarketTrend::Neutral);
        assert_eq!(ctx.btc_change_24h, Some(dec!(1.2)));
        assert_eq!(ctx.headlines.len(), 2);
        assert!(feed.health_check().await);
    }

    #[tokio::test]
    async fn test_static_feed_with_change() {
        let feed = StaticMarketFeed::with_change(dec!(6.5)).with_headlines(Vec::new());
        let ctx = feed.market_context().await.unwrap();
        assert_eq!(ctx.trend, MarketTrend::Bullish);
        assert_eq!(ctx.btc_change_24h, Some(dec!(6.5)));
        assert!(ctx.headlines.is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_document() {
        let feed = StaticMarketFeed::try_from(
            r#"{"prices": {"bitcoin": {"usd_24h_change": -3.1}},
                "news": {"results": [{"title": "Miners capitulate"}]}}"#,
        )
        .unwrap();
        let ctx = feed.market_context().await.unwrap();
        assert_eq!(ctx.trend, MarketTrend::Bearish);
        assert_eq!(ctx.headlines, vec!["Miners capitulate"]);

        assert!(StaticMarketFeed::try_from(r#"{"news": {}}"#).is_err());
        assert!(StaticMarketFeed::try_from("not json").is_err());
    }

    #[tokio::test]
    async fn test_unusable_prices_fail_health_check() {
        let feed = StaticMarketFeed::from_payloads(json!({"ethereum": {}}), Value::Null);
        assert!(feed.market_context().await.is_err());
        assert!(!feed.health_check().await);
    }
}
