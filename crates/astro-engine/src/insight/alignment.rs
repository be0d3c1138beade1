//! Cosmic Alignment Score
//!
//! Additive rule table on a base of 50, clamped to 0..=100. Each rule that
//! fires is kept as an [`AlignmentFactor`] so callers can explain the score.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::market::MarketTrend;
use crate::model::RiskTolerance;
use crate::natal::{MoonPhase, NatalProfile, TransitSnapshot};
use crate::zodiac::{record, wealth_archetype};

use super::forecast::lucky_days;

pub const BASE_SCORE: i32 = 50;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentFactor {
    pub label: String,
    pub points: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentScore {
    /// Final score in 0..=100
    pub score: u8,
    pub factors: Vec<AlignmentFactor>,
}

impl AlignmentScore {
    fn from_factors(factors: Vec<AlignmentFactor>) -> Self {
        let raw = BASE_SCORE + factors.iter().map(|f| f.points).sum::<i32>();
        Self {
            score: u8::try_from(raw.clamp(0, 100)).unwrap_or_default(),
            factors,
        }
    }
}

/// Bonus when the market mood suits the sign's natural risk appetite:
/// 15 for a match, 7 for an adjacent tolerance
pub const fn market_alignment(trend: MarketTrend, tolerance: RiskTolerance) -> i32 {
    use RiskTolerance::{High, Low, LowModerate, Moderate, ModerateHigh, VeryHigh};

    match (trend, tolerance) {
        (MarketTrend::Bullish, High | VeryHigh)
        | (MarketTrend::Bearish, Low | LowModerate)
        | (MarketTrend::Neutral, Moderate) => 15,
        (MarketTrend::Bullish, ModerateHigh)
        | (MarketTrend::Bearish, Moderate)
        | (MarketTrend::Neutral, LowModerate | ModerateHigh) => 7,
        _ => 0,
    }
}

/// Score a profile against the sky at `now` and an optional market trend.
///
/// Market, transit and lucky-day rules need a resolved sun sign, so an
/// all-"Unknown" profile scores exactly the base.
pub fn cosmic_alignment_score(
    profile: &NatalProfile,
    market: Option<MarketTrend>,
    now: DateTime<Utc>,
) -> AlignmentScore {
    let mut factors = Vec::new();
    let mut add = |label: &str, points: i32| {
        factors.push(AlignmentFactor {
            label: label.into(),
            points,
        });
    };

    let [sun, moon, rising] = profile.big_three();

    if sun.is_some() {
        add("Sun sign resolved", 15);
    }
    if moon.is_some() {
        add("Moon sign resolved", 15);
    }
    if rising.is_some() {
        add("Rising sign resolved", 10);
    }
    if !wealth_archetype(sun, moon, rising).is_default() {
        add("Distinct wealth archetype", 10);
    }

    if let (Some(s), Some(m), Some(r)) = (sun, moon, rising) {
        let (es, em, er) = (s.element(), m.element(), r.element());
        if es == em && em == er {
            add("Elemental focus", 5);
        } else if es != em && em != er && es != er {
            add("Elemental diversity", 8);
        }
    }

    if let Some(sun) = sun {
        if let Some(trend) = market {
            let points = market_alignment(trend, record(sun).wealth.risk_tolerance);
            if points > 0 {
                add("Market mood suits risk appetite", points);
            }
        }

        for (label, points) in transit_factors(&TransitSnapshot::at(now, Some(sun))) {
            add(label, points);
        }

        if lucky_days(sun).contains(&now.weekday()) {
            add("Lucky day", 10);
        }
    }

    AlignmentScore::from_factors(factors)
}

fn transit_factors(transit: &TransitSnapshot) -> Vec<(&'static str, i32)> {
    let mut out = Vec::new();
    if transit.solar_return {
        out.push(("Solar return", 20));
    }
    match transit.moon_phase {
        MoonPhase::NewMoon => out.push(("New Moon", 10)),
        MoonPhase::FullMoon => out.push(("Full Moon", 8)),
        _ => {}
    }
    if transit.mercury_retrograde {
        out.push(("Mercury retrograde", -5));
    }
    out
}
