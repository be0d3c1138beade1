//! Cosmic Weather
//!
//! Classifies today's sky for a sun sign using the compatibility score
//! against the transiting sun, with a lunar intuition overlay.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ZodiacSign;

use super::compatibility::compatibility;

/// Overall energy class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Energy {
    #[serde(rename = "Highly Favorable")]
    HighlyFavorable,
    Favorable,
    Challenging,
}

impl Energy {
    pub const fn from_score(score: u8) -> Self {
        if score >= 70 {
            Self::HighlyFavorable
        } else if score >= 50 {
            Self::Favorable
        } else {
            Self::Challenging
        }
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HighlyFavorable => "Highly Favorable",
            Self::Favorable => "Favorable",
            Self::Challenging => "Challenging",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmicWeather {
    pub energy: Energy,

    /// Compatibility of the user's sun with the transiting sun
    pub solar_score: u8,

    /// Compatibility of the user's sun with the transiting moon
    pub lunar_score: u8,

    pub advice: String,
    pub opportunities: Vec<String>,
    pub cautions: Vec<String>,
    pub lucky_timing: String,
}

/// Today's weather for `user_sun` under the given transiting sun and moon
pub fn cosmic_weather(
    user_sun: ZodiacSign,
    current_sun: ZodiacSign,
    current_moon: ZodiacSign,
) -> CosmicWeather {
    let solar_score = compatibility(user_sun, current_sun);
    let lunar_score = compatibility(user_sun, current_moon);
    let energy = Energy::from_score(solar_score);

    let (advice, mut opportunities, mut cautions, lucky_timing) = match energy {
        Energy::HighlyFavorable => (
            format!(
                "The {current_sun} sun amplifies your {user_sun} strengths. Momentum favours bold but planned moves."
            ),
            vec![
                "Execute planned entries you have already researched".to_string(),
                "Negotiations and partnerships are well supported".to_string(),
            ],
            vec!["Enthusiasm can outrun position sizing".to_string()],
            "Morning hours, while energy is at its peak".to_string(),
        ),
        Energy::Favorable => (
            format!(
                "The {current_sun} sun offers steady support to {user_sun}. Incremental progress beats big swings."
            ),
            vec![
                "Good window for rebalancing and reviewing goals".to_string(),
                "Small, consistent contributions compound well now".to_string(),
            ],
            vec!["Avoid forcing trades when conviction is low".to_string()],
            "Early afternoon, after the market's opening noise settles".to_string(),
        ),
        Energy::Challenging => (
            format!(
                "The {current_sun} sun creates friction with {user_sun}. Protect capital and favour patience."
            ),
            vec!["Study the market and refine your watchlist".to_string()],
            vec![
                "Postpone large or impulsive commitments".to_string(),
                "Double-check the details of any agreement".to_string(),
            ],
            "Evening reflection rather than daytime action".to_string(),
        ),
    };

    if lunar_score >= 70 {
        opportunities.push(format!(
            "The {current_moon} moon sharpens your financial intuition; trust well-founded hunches"
        ));
    } else if lunar_score <= 30 {
        cautions.push(format!(
            "The {current_moon} moon clouds intuition; separate feelings from facts"
        ));
    }

    CosmicWeather {
        energy,
        solar_score,
        lunar_score,
        advice,
        opportunities,
        cautions,
        lucky_timing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_thresholds() {
        assert_eq!(Energy::from_score(100), Energy::HighlyFavorable);
        assert_eq!(Energy::from_score(70), Energy::HighlyFavorable);
        assert_eq!(Energy::from_score(69), Energy::Favorable);
        assert_eq!(Energy::from_score(50), Energy::Favorable);
        assert_eq!(Energy::from_score(49), Energy::Challenging);
    }

    #[test]
    fn test_same_sign_season_is_highly_favorable() {
        let weather = cosmic_weather(ZodiacSign::Leo, ZodiacSign::Leo, ZodiacSign::Taurus);
        assert_eq!(weather.energy, Energy::HighlyFavorable);
        assert_eq!(weather.solar_score, 90);
    }

    #[test]
    fn test_intuition_overlay() {
        // Aries with an Aries moon: 90, adds a lunar opportunity
        let boosted = cosmic_weather(ZodiacSign::Aries, ZodiacSign::Libra, ZodiacSign::Aries);
        assert!(boosted.opportunities.iter().any(|o| o.contains("intuition")));

        // Aries with a Cancer moon: 20, adds a lunar caution
        let clouded = cosmic_weather(ZodiacSign::Aries, ZodiacSign::Libra, ZodiacSign::Cancer);
        assert!(clouded.cautions.iter().any(|c| c.contains("intuition")));
        assert!(!clouded.opportunities.iter().any(|o| o.contains("intuition")));
    }

    #[test]
    fn test_challenging_season() {
        let weather = cosmic_weather(ZodiacSign::Aries, ZodiacSign::Cancer, ZodiacSign::Leo);
        assert_eq!(weather.energy, Energy::Challenging);
        assert!(weather.advice.contains("friction"));
    }
}
