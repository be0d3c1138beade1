//! Weekly Forecast
//!
//! Rule-table forecast for a sun sign: one highlight per weekday, lucky
//! days, an overview and focus lists drawn from the sign record.

use chrono::{DateTime, Datelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::model::{Element, ZodiacSign};
use crate::zodiac::record;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Highlight pool per weekday, Monday first
const DAY_TEMPLATES: [[&str; 3]; 7] = [
    [
        "Set clear financial intentions for the week",
        "Review last week's moves before making new ones",
        "Organise budgets and automate one recurring saving",
    ],
    [
        "Take decisive action on a plan you have already researched",
        "Good day for difficult money conversations",
        "Energy favours starting, not finishing",
    ],
    [
        "Research day: read, compare and question the narrative",
        "Communication opens doors to new opportunities",
        "Double-check figures before signing anything",
    ],
    [
        "Growth opportunities come through mentors and networks",
        "Think long-term and expand your horizon",
        "Optimism is high; size positions accordingly",
    ],
    [
        "Values and money align; invest in what you believe in",
        "Collaborative ventures look promising",
        "Treat yourself modestly and protect the savings rate",
    ],
    [
        "Consolidate gains and shore up foundations",
        "Structure beats impulse today",
        "Audit subscriptions, fees and hidden costs",
    ],
    [
        "Rest and reflect; clarity comes from stepping back",
        "Visualise the next milestone of your wealth plan",
        "Recharge before the new week's decisions",
    ],
];

const fn element_modifier(element: Element) -> &'static str {
    match element {
        Element::Fire => "channel your boldness into decisive moves",
        Element::Earth => "trust slow and steady progress",
        Element::Air => "let information guide your choices",
        Element::Water => "follow your intuition, then verify",
    }
}

/// Two lucky weekdays per element
const fn element_lucky_days(element: Element) -> [Weekday; 2] {
    match element {
        Element::Fire => [Weekday::Tue, Weekday::Sun],
        Element::Earth => [Weekday::Fri, Weekday::Sat],
        Element::Air => [Weekday::Wed, Weekday::Fri],
        Element::Water => [Weekday::Mon, Weekday::Thu],
    }
}

/// Full English weekday name
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Up to three lucky weekdays: two from the element, one from the sign's
/// first lucky number (mod 7, Sunday = 0)
pub fn lucky_days(sign: ZodiacSign) -> Vec<Weekday> {
    let mut days = element_lucky_days(sign.element()).to_vec();

    if let Some(&number) = record(sign).lucky_numbers.first() {
        let from_number = WEEK[(number as usize + 6) % 7];
        if !days.contains(&from_number) {
            days.push(from_number);
        }
    }
    days.truncate(3);
    days
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHighlight {
    pub day: String,
    pub highlight: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyForecast {
    pub sign: ZodiacSign,
    pub overview: String,
    pub daily: Vec<DailyHighlight>,
    pub lucky_days: Vec<String>,
    pub opportunities: Vec<String>,
    pub challenges: Vec<String>,
    pub focus_areas: Vec<String>,
}

/// Forecast for the week containing `now`
pub fn weekly_forecast(sign: ZodiacSign, now: DateTime<Utc>) -> WeeklyForecast {
    let rec = record(sign);
    let modifier = element_modifier(rec.element);
    let rotation = sign.index() + now.iso_week().week() as usize;

    let daily = WEEK
        .iter()
        .zip(DAY_TEMPLATES.iter())
        .enumerate()
        .map(|(i, (day, pool))| DailyHighlight {
            day: weekday_name(*day).into(),
            highlight: format!("{} - {modifier}", pool[(rotation + i) % pool.len()]),
        })
        .collect();

    let overview = format!(
        "{sign} moves through this week with {} energy. {} sets the tone, so lean on your {} instincts.",
        rec.element.to_string().to_lowercase(),
        rec.personality.motivation,
        rec.wealth.style.to_lowercase(),
    );

    let challenges = rec
        .wealth
        .challenges
        .iter()
        .chain(rec.personality.challenges.iter().take(1))
        .map(|s| (*s).to_string())
        .collect();

    let focus_areas = rec
        .personality
        .core_values
        .iter()
        .chain(rec.wealth.best_investments.iter().take(2))
        .map(|s| (*s).to_string())
        .collect();

    WeeklyForecast {
        sign,
        overview,
        daily,
        lucky_days: lucky_days(sign).into_iter().map(|d| weekday_name(d).to_string()).collect(),
        opportunities: rec.wealth.strengths.iter().map(|s| (*s).to_string()).collect(),
        challenges,
        focus_areas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_lucky_days() {
        // Aries: Tue, Sun from fire; 9 % 7 = 2 -> Tuesday, already present
        assert_eq!(lucky_days(ZodiacSign::Aries), vec![Weekday::Tue, Weekday::Sun]);
        // Taurus: Fri, Sat from earth; 6 -> Saturday, already present
        assert_eq!(lucky_days(ZodiacSign::Taurus), vec![Weekday::Fri, Weekday::Sat]);
        // Cancer: Mon, Thu from water; 2 -> Tuesday
        assert_eq!(
            lucky_days(ZodiacSign::Cancer),
            vec![Weekday::Mon, Weekday::Thu, Weekday::Tue]
        );
        for sign in ZodiacSign::ALL {
            let days = lucky_days(sign);
            assert!((2..=3).contains(&days.len()));
        }
    }

    #[test]
    fn test_forecast_covers_the_week() {
        let forecast = weekly_forecast(ZodiacSign::Leo, now());
        assert_eq!(forecast.daily.len(), 7);
        assert_eq!(forecast.daily[0].day, "Monday");
        assert_eq!(forecast.daily[6].day, "Sunday");
        assert!(forecast.daily.iter().all(|d| d.highlight.ends_with("decisive moves")));
        assert!(forecast.overview.contains("fire"));
        assert!(forecast.focus_areas.contains(&"Recognition".to_string()));
    }

    #[test]
    fn test_forecast_is_deterministic_for_fixed_now() {
        assert_eq!(
            weekly_forecast(ZodiacSign::Pisces, now()),
            weekly_forecast(ZodiacSign::Pisces, now())
        );
    }

    #[test]
    fn test_rotation_differs_between_signs() {
        let a = weekly_forecast(ZodiacSign::Aries, now());
        let b = weekly_forecast(ZodiacSign::Taurus, now());
        assert_ne!(a.daily[0].highlight, b.daily[0].highlight);
    }
}
