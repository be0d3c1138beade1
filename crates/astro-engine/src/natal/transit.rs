//! Transits relative to "now"
//!
//! Moon phase, the yearly Mercury retrograde approximation, today's planet
//! signs and the personal overlay against a natal sun. `now` is always
//! passed in.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ephemeris::SYNODIC_MONTH;
use crate::model::{Planet, ZodiacSign, unknown_sign};
use crate::zodiac::compatibility;

use super::signs::{moon_sign, planet_fallback, planetary_positions, sun_sign};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl MoonPhase {
    const CYCLE: [Self; 8] = [
        Self::NewMoon,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::FullMoon,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// Phase for a cycle fraction in [0, 1)
    pub fn from_fraction(fraction: f64) -> Self {
        let bin = (fraction.rem_euclid(1.0) * 8.0).floor() as usize;
        Self::CYCLE[bin % 8]
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        })
    }
}

fn reference_new_moon() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 6).unwrap_or(NaiveDate::MIN)
}

/// Fraction of the synodic cycle elapsed since the 2000-01-06 new moon
pub fn lunar_cycle_fraction(date: NaiveDate) -> f64 {
    let days = (date - reference_new_moon()).num_days() as f64;
    days.rem_euclid(SYNODIC_MONTH) / SYNODIC_MONTH
}

pub fn moon_phase(date: NaiveDate) -> MoonPhase {
    MoonPhase::from_fraction(lunar_cycle_fraction(date))
}

/// Approximate retrograde windows by day of year; the same every year
const MERCURY_RETROGRADE_DAYS: [(u32, u32); 4] = [(10, 31), (130, 151), (250, 271), (340, 361)];

pub fn mercury_retrograde(date: NaiveDate) -> bool {
    let day = date.ordinal();
    MERCURY_RETROGRADE_DAYS
        .iter()
        .any(|&(start, end)| (start..=end).contains(&day))
}

/// How a transiting planet sits with the natal sun
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Influence {
    Favorable,
    Neutral,
    Challenging,
}

impl Influence {
    pub const fn from_score(score: u8) -> Self {
        if score >= 70 {
            Self::Favorable
        } else if score <= 40 {
            Self::Challenging
        } else {
            Self::Neutral
        }
    }
}

/// Today's sign for every tracked body
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTransits {
    pub sun: ZodiacSign,
    pub moon: ZodiacSign,
    pub mercury: ZodiacSign,
    pub venus: ZodiacSign,
    pub mars: ZodiacSign,
    pub jupiter: ZodiacSign,
    pub saturn: ZodiacSign,
}

impl CurrentTransits {
    pub fn on(date: NaiveDate) -> Self {
        let sun = sun_sign(date);
        let positions = planetary_positions(date, sun);
        let sign = |planet: Planet| {
            positions
                .get(&planet)
                .copied()
                .unwrap_or_else(|| planet_fallback(planet, sun))
        };

        Self {
            sun: sun.unwrap_or_else(|| planet_fallback(Planet::Sun, None)),
            moon: moon_sign(date),
            mercury: sign(Planet::Mercury),
            venus: sign(Planet::Venus),
            mars: sign(Planet::Mars),
            jupiter: sign(Planet::Jupiter),
            saturn: sign(Planet::Saturn),
        }
    }
}

/// Sky at "now", optionally read against a natal sun
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitSnapshot {
    pub date: NaiveDate,
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub moon_phase: MoonPhase,
    pub mercury_retrograde: bool,

    /// Transiting sun in the natal sun sign
    pub solar_return: bool,

    #[serde(with = "unknown_sign")]
    pub natal_sun: Option<ZodiacSign>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub venus_influence: Option<Influence>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mars_influence: Option<Influence>,
}

impl TransitSnapshot {
    pub fn at(now: DateTime<Utc>, natal_sun: Option<ZodiacSign>) -> Self {
        let date = now.date_naive();
        let transits = CurrentTransits::on(date);
        let influence = |transiting: ZodiacSign| {
            natal_sun.map(|sun| Influence::from_score(compatibility(sun, transiting)))
        };

        Self {
            date,
            sun_sign: transits.sun,
            moon_sign: transits.moon,
            moon_phase: moon_phase(date),
            mercury_retrograde: mercury_retrograde(date),
            solar_return: natal_sun == Some(transits.sun),
            natal_sun,
            venus_influence: influence(transits.venus),
            mars_influence: influence(transits.mars),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reference_date_is_new_moon() {
        assert_eq!(moon_phase(date(2000, 1, 6)), MoonPhase::NewMoon);
        // 15 days in: fraction 0.508 -> Full
        assert_eq!(moon_phase(date(2000, 1, 21)), MoonPhase::FullMoon);
        // 7 days: 0.237, just short of the First Quarter bin
        assert_eq!(moon_phase(date(2000, 1, 13)), MoonPhase::WaxingCrescent);
        // one day before: 0.966 -> Waning Crescent
        assert_eq!(moon_phase(date(2000, 1, 5)), MoonPhase::WaningCrescent);
    }

    #[test]
    fn test_phase_is_periodic_within_one_bin() {
        let mut day = date(1990, 1, 1);
        for _ in 0..400 {
            let a = MoonPhase::CYCLE.iter().position(|p| *p == moon_phase(day)).unwrap();
            let later = day + Duration::days(30);
            let fraction = lunar_cycle_fraction(later);
            let b = (fraction * 8.0).floor() as usize % 8;
            let diff = (a as i64 - b as i64).rem_euclid(8);
            assert!(diff == 0 || diff == 1 || diff == 7, "{day}: {a} vs {b}");
            day += Duration::days(17);
        }
    }

    #[test]
    fn test_fraction_mapping_wraps() {
        assert_eq!(MoonPhase::from_fraction(0.0), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_fraction(0.124), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_fraction(0.125), MoonPhase::WaxingCrescent);
        assert_eq!(MoonPhase::from_fraction(0.999), MoonPhase::WaningCrescent);
        assert_eq!(MoonPhase::from_fraction(1.0), MoonPhase::NewMoon);
    }

    #[test]
    fn test_mercury_retrograde_windows() {
        assert!(!mercury_retrograde(date(2023, 1, 9)));
        assert!(mercury_retrograde(date(2023, 1, 10)));
        assert!(mercury_retrograde(date(2023, 1, 31)));
        assert!(!mercury_retrograde(date(2023, 2, 1)));
        // day 361 in a common year is Dec 27
        assert!(mercury_retrograde(date(2023, 12, 27)));
        assert!(!mercury_retrograde(date(2023, 12, 28)));
    }

    #[test]
    fn test_solar_return_and_influences() {
        let now = Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap();
        let leo = TransitSnapshot::at(now, Some(ZodiacSign::Leo));
        assert_eq!(leo.sun_sign, ZodiacSign::Leo);
        assert!(leo.solar_return);
        assert!(leo.venus_influence.is_some());

        let general = TransitSnapshot::at(now, None);
        assert!(!general.solar_return);
        assert!(general.venus_influence.is_none());
        assert!(general.mars_influence.is_none());
    }

    #[test]
    fn test_current_transits_use_table_near_entries() {
        let transits = CurrentTransits::on(date(2024, 1, 2));
        assert_eq!(transits.sun, ZodiacSign::Capricorn);
        assert_eq!(transits.moon, ZodiacSign::Virgo);
        assert_eq!(transits.jupiter, ZodiacSign::Taurus);
    }

    #[test]
    fn test_influence_thresholds() {
        assert_eq!(Influence::from_score(70), Influence::Favorable);
        assert_eq!(Influence::from_score(41), Influence::Neutral);
        assert_eq!(Influence::from_score(40), Influence::Challenging);
    }
}
