//! Application State

use std::sync::Arc;

use astro_engine::{InsightEngine, MarketFeed};

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Market context source (static feed unless a live one is wired in)
    pub market: Arc<dyn MarketFeed>,

    pub insight: InsightEngine,

    pub config: Arc<ServerConfig>,
}
