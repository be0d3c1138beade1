//! Insight Synthesis
//!
//! Combines a natal report, today's sky and optional market context into the
//! structured bundle the guidance layer is grounded on.

mod alignment;
mod forecast;

pub use alignment::{
    AlignmentFactor, AlignmentScore, BASE_SCORE, cosmic_alignment_score, market_alignment,
};
pub use forecast::{DailyHighlight, WeeklyForecast, lucky_days, weekday_name, weekly_forecast};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::guidance;
use crate::market::MarketContext;
use crate::model::{ElementalBalance, ModalityBalance};
use crate::natal::{CurrentTransits, NatalReport};
use crate::zodiac::{CosmicWeather, WealthArchetype, cosmic_weather, wealth_archetype};

/// Everything derived for one user at one moment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightReport {
    pub generated_at: DateTime<Utc>,
    pub alignment: AlignmentScore,
    pub archetype: WealthArchetype,
    pub elemental_balance: ElementalBalance,
    pub modality_balance: ModalityBalance,

    /// Absent when the sun sign is unknown
    pub weekly_forecast: Option<WeeklyForecast>,

    /// Absent when the sun sign is unknown
    pub cosmic_weather: Option<CosmicWeather>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub market: Option<MarketContext>,

    pub guidance: String,
}

impl InsightReport {
    pub const fn score(&self) -> u8 {
        self.alignment.score
    }
}

/// Stateless synthesizer; every call is a pure function of its arguments
#[derive(Clone, Copy, Debug, Default)]
pub struct InsightEngine;

impl InsightEngine {
    pub const fn new() -> Self {
        Self
    }

    /// Build the insight bundle for `report` at `now`
    pub fn synthesize(
        &self,
        report: &NatalReport,
        market: Option<&MarketContext>,
        now: DateTime<Utc>,
    ) -> InsightReport {
        let profile = &report.profile;
        let [sun, moon, rising] = profile.big_three();
        let sky = CurrentTransits::on(now.date_naive());

        let mut insight = InsightReport {
            generated_at: now,
            alignment: cosmic_alignment_score(profile, market.map(|m| m.trend), now),
            archetype: wealth_archetype(sun, moon, rising),
            elemental_balance: profile.elemental_balance,
            modality_balance: profile.modality_balance,
            weekly_forecast: sun.map(|s| weekly_forecast(s, now)),
            cosmic_weather: sun.map(|s| cosmic_weather(s, sky.sun, sky.moon)),
            market: market.cloned(),
            guidance: String::new(),
        };
        insight.guidance = guidance::compose(report, &insight, market);

        tracing::debug!(
            score = insight.alignment.score,
            archetype = %insight.archetype.archetype,
            "insight synthesized"
        );
        insight
    }
}
