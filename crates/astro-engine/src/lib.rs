//! # astro-engine
//!
//! Astrology-driven wealth insight engine. Birth data goes in; a natal
//! report, a cosmic alignment score and wealth guidance come out.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌───────────────────┐   ┌─────────────────────┐
//! │  BirthInput  │──▶│  NatalCalculator  │──▶│     NatalReport     │
//! │ date/time/   │   │ sun/moon/rising,  │   │ profile, chart,     │
//! │ place/coords │   │ houses, transits  │   │ wealth houses       │
//! └──────────────┘   └─────────┬─────────┘   └──────────┬──────────┘
//!                              │                        │
//!                    ┌─────────▼─────────┐   ┌──────────▼──────────┐
//!                    │ ephemeris tables  │   │    InsightEngine    │◀── MarketContext
//!                    │ zodiac database   │   │ alignment, forecast │
//!                    └───────────────────┘   │ archetype, weather  │
//!                                            └──────────┬──────────┘
//!                                                       ▼
//!                                             guidance::compose()
//! ```
//!
//! Everything here is synchronous and pure. Transit-dependent calls take
//! `now` explicitly; only the server reads the clock.

pub mod ephemeris;
pub mod error;
pub mod guidance;
pub mod insight;
pub mod market;
pub mod model;
pub mod natal;
pub mod zodiac;

pub use error::{AstroError, Result};
pub use insight::{InsightEngine, InsightReport};
pub use market::{MarketContext, MarketFeed, MarketTrend, StaticMarketFeed};
pub use model::{Element, Modality, Planet, RiskTolerance, ZodiacSign};
pub use natal::{BirthInput, NatalCalculator, NatalProfile, NatalReport};

/// System prompt for the language-model guidance layer
pub const WEALTH_GUIDE_PROMPT: &str = r#"You are a warm, grounded astrology guide who connects a person's chart to their relationship with money.

## Ground Rules

1. **Use only the supplied context** - Every claim must come from the natal report, insight bundle or market context
2. **Signs are tendencies, not destiny** - Frame placements as strengths to lean on and habits to watch
3. **Respect the risk profile** - Never push a low-tolerance sign toward speculative assets
4. **No specific trades** - Talk about approach, pacing and allocation style, never exact buys or price targets

## Structure

1. Open with the sun, moon and rising signs and the cosmic alignment score
2. Describe the wealth archetype and its strategy
3. Connect today's cosmic weather and the weekly lucky days to timing
4. If market context is present, relate the trend to the person's risk tolerance
5. Close with the disclaimer

Always end with: "This is astrological entertainment, not financial advice.""#;
