//! Template Guidance
//!
//! Deterministic guidance text used when no language model is available,
//! and the grounding context a language model would be given instead.

use serde::Serialize;
use std::fmt::Write;

use crate::error::Result;
use crate::insight::InsightReport;
use crate::market::{MarketContext, MarketTrend};
use crate::model::sign_label;
use crate::natal::NatalReport;
use crate::zodiac::record;

pub const DISCLAIMER: &str =
    "This is astrological entertainment, not financial advice. Do your own research before investing.";

const fn trend_note(trend: MarketTrend) -> &'static str {
    match trend {
        MarketTrend::Bullish => {
            "Markets are running hot. Keep entries staged and take partial profits on strength."
        }
        MarketTrend::Bearish => {
            "Markets are under pressure. Favour capital preservation and slow accumulation."
        }
        MarketTrend::Neutral => {
            "Markets are range-bound. A steady contribution plan suits the conditions."
        }
    }
}

const fn score_band(score: u8) -> &'static str {
    match score {
        80..=100 => "strongly aligned",
        60..=79 => "well aligned",
        40..=59 => "moderately aligned",
        _ => "out of step",
    }
}

/// Multi-paragraph guidance built from the report and insight bundle
pub fn compose(
    report: &NatalReport,
    insight: &InsightReport,
    market: Option<&MarketContext>,
) -> String {
    let profile = &report.profile;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Sun in {}, Moon in {}, Rising in {}. You are {} today with a cosmic alignment of {}/100.",
        sign_label(profile.sun_sign),
        sign_label(profile.moon_sign),
        sign_label(profile.rising_sign),
        score_band(insight.alignment.score),
        insight.alignment.score,
    );

    let _ = writeln!(
        out,
        "\nArchetype: {}. {}\nStrategy: {}",
        insight.archetype.archetype, insight.archetype.description, insight.archetype.strategy,
    );

    if let Some(sun) = profile.sun_sign {
        let wealth = &record(sun).wealth;
        let _ = writeln!(
            out,
            "\nAs a {} with {} risk tolerance, your natural mix is {}. Money mindset: {}",
            wealth.style, wealth.risk_tolerance, wealth.ideal_portfolio, wealth.money_mindset,
        );
    }

    if let Some(weather) = &insight.cosmic_weather {
        let _ = writeln!(
            out,
            "\nCosmic weather is {}. {} Best timing: {}.",
            weather.energy, weather.advice, weather.lucky_timing,
        );
    }

    if let Some(forecast) = &insight.weekly_forecast {
        let _ = writeln!(out, "\nLucky days this week: {}.", forecast.lucky_days.join(", "));
    }

    if let Some(ctx) = market {
        let _ = write!(out, "\n{}", trend_note(ctx.trend));
        if let Some(change) = ctx.btc_change_24h {
            let _ = write!(out, " BTC moved {change}% in the last 24 hours.");
        }
        out.push('\n');
    }

    let _ = write!(out, "\n{DISCLAIMER}");
    out
}

#[derive(Serialize)]
struct Grounding<'a> {
    natal: &'a NatalReport,
    insight: &'a InsightReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    market: Option<&'a MarketContext>,
}

/// Structured context for a language model, as pretty JSON after a short
/// instruction header
pub fn grounding_prompt(
    report: &NatalReport,
    insight: &InsightReport,
    market: Option<&MarketContext>,
) -> Result<String> {
    let context = serde_json::to_string_pretty(&Grounding {
        natal: report,
        insight,
        market,
    })?;

    Ok(format!(
        "Write personalised wealth guidance for this user. Use only the facts in the JSON below, \
         keep a warm and grounded tone, and end with: \"{DISCLAIMER}\"\n\n{context}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::InsightEngine;
    use crate::natal::{BirthInput, NatalCalculator};
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_compose_mentions_signs_and_disclaimer() {
        let report = NatalCalculator::new(now())
            .calculate(&BirthInput::new("1990-08-05").with_time("07:15"))
            .unwrap();
        let market = MarketContext {
            trend: MarketTrend::Bullish,
            btc_change_24h: Some(dec!(3.4)),
            headlines: Vec::new(),
        };
        let insight = InsightEngine::new().synthesize(&report, Some(&market), now());

        assert!(insight.guidance.starts_with("Sun in Leo"));
        assert!(insight.guidance.contains("BTC moved 3.4%"));
        assert!(insight.guidance.contains("Lucky days this week"));
        assert!(insight.guidance.ends_with(DISCLAIMER));
    }

    #[test]
    fn test_compose_for_degraded_report() {
        let report = NatalReport::degraded("bad date");
        let insight = InsightEngine::new().synthesize(&report, None, now());
        let text = compose(&report, &insight, None);

        assert!(text.starts_with("Sun in Unknown, Moon in Unknown, Rising in Unknown"));
        assert!(text.contains("moderately aligned"));
        assert!(!text.contains("Cosmic weather"));
    }

    #[test]
    fn test_grounding_prompt_embeds_json() {
        let report = NatalCalculator::new(now()).calculate(&BirthInput::new("1993-12-30")).unwrap();
        let insight = InsightEngine::new().synthesize(&report, None, now());
        let prompt = grounding_prompt(&report, &insight, None).unwrap();

        let json_start = prompt.find('{').unwrap();
        let value: serde_json::Value = serde_json::from_str(&prompt[json_start..]).unwrap();
        assert_eq!(value["natal"]["profile"]["sun_sign"], "Capricorn");
        assert_eq!(value["natal"]["profile"]["rising_sign"], "Unknown");
        assert!(value.get("market").is_none());
    }
}
