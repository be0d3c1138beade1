//! Natal Calculator
//!
//! Turns birth data into a [`NatalReport`]: sun/moon/rising signs, planet
//! placements, houses, balances, wealth houses and today's transits.
//!
//! Every step degrades to a documented default. The only error is a birth
//! date that cannot be parsed at all, and [`NatalCalculator::calculate_or_degraded`]
//! turns even that into an all-"Unknown" report.

pub mod geo;
pub mod input;
pub mod signs;
pub mod transit;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;
use crate::model::{
    Element, ElementalBalance, ModalityBalance, Planet, RiskTolerance, ZodiacSign, unknown_sign,
};
use crate::zodiac::{database::record, wealth_archetype};

pub use geo::{CoordinateSource, Coordinates, resolve_coordinates};
pub use input::{parse_birth_date, parse_birth_time};
pub use signs::{house_sign, moon_sign, planetary_house, rising_sign, sun_sign};
pub use transit::{
    CurrentTransits, Influence, MoonPhase, TransitSnapshot, mercury_retrograde, moon_phase,
};

/// Birth data as entered by the user
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BirthInput {
    /// `YYYY-MM-DD` or a slash-delimited alternative
    pub birth_date: String,

    #[serde(default)]
    pub birth_time: Option<String>,

    /// Free-text city name
    #[serde(default)]
    pub birth_place: Option<String>,

    #[serde(default)]
    pub birth_lat: Option<f64>,

    #[serde(default)]
    pub birth_lng: Option<f64>,
}

impl BirthInput {
    pub fn new(birth_date: impl Into<String>) -> Self {
        Self {
            birth_date: birth_date.into(),
            ..Default::default()
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.birth_time = Some(time.into());
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.birth_place = Some(place.into());
        self
    }

    pub const fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.birth_lat = Some(lat);
        self.birth_lng = Some(lng);
        self
    }

    /// Time string with blank input treated as absent
    fn time(&self) -> Option<&str> {
        self.birth_time.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

/// Pure function of the birth data; recomputed on every request
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatalProfile {
    #[serde(with = "unknown_sign")]
    pub sun_sign: Option<ZodiacSign>,

    #[serde(with = "unknown_sign")]
    pub moon_sign: Option<ZodiacSign>,

    #[serde(with = "unknown_sign")]
    pub rising_sign: Option<ZodiacSign>,

    /// Mercury through Saturn
    pub planetary_positions: BTreeMap<Planet, ZodiacSign>,

    /// House number (1-12) to cusp sign
    pub houses: BTreeMap<u8, ZodiacSign>,

    pub elemental_balance: ElementalBalance,
    pub modality_balance: ModalityBalance,
}

impl NatalProfile {
    /// The big three, in sun/moon/rising order
    pub const fn big_three(&self) -> [Option<ZodiacSign>; 3] {
        [self.sun_sign, self.moon_sign, self.rising_sign]
    }

    /// Sign the houses are counted from: rising, else the sun (solar houses)
    pub fn house_anchor(&self) -> Option<ZodiacSign> {
        self.rising_sign.or(self.sun_sign)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatalChartEntry {
    pub planet: Planet,

    #[serde(with = "unknown_sign")]
    pub sign: Option<ZodiacSign>,

    pub house: Option<u8>,
    pub meaning: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WealthHouse {
    pub house: u8,
    pub sign: ZodiacSign,
    pub ruler: String,
    pub themes: Vec<String>,
    pub insight: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityBlock {
    pub archetype: String,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub opportunities: Vec<String>,
    pub wealth_style: String,
    pub ideal_portfolio: String,
    pub risk_tolerance: RiskTolerance,
    pub lucky_numbers: Vec<u32>,
    pub lucky_colors: Vec<String>,
    pub gemstones: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityBlock {
    pub best_matches: Vec<ZodiacSign>,
    pub challenging_matches: Vec<ZodiacSign>,
    pub business_partners: Vec<ZodiacSign>,
}

/// Everything the presentation layer receives for one birth
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NatalReport {
    pub birth_date: Option<NaiveDate>,
    pub profile: NatalProfile,
    pub dominant_element: Option<Element>,
    pub natal_chart: Vec<NatalChartEntry>,
    pub wealth_houses: Vec<WealthHouse>,
    pub current_transits: Option<CurrentTransits>,
    pub transit: Option<TransitSnapshot>,
    pub personality: Option<PersonalityBlock>,
    pub compatibility: Option<CompatibilityBlock>,
    pub coordinates: Option<Coordinates>,

    /// Set when the birth data could not be used
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl NatalReport {
    /// All-"Unknown" report carrying an error message
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    pub const fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Wealth houses in presentation order with their themes
const WEALTH_HOUSES: [(u8, &str, [&str; 3]); 4] = [
    (2, "2nd", ["Personal income", "Material security", "Self-worth"]),
    (8, "8th", ["Shared resources", "Investments", "Transformation"]),
    (5, "5th", ["Speculation", "Creative ventures", "Calculated risk"]),
    (10, "10th", ["Career", "Public reputation", "Long-term legacy"]),
];

const fn planet_meaning(planet: Planet) -> &'static str {
    match planet {
        Planet::Sun => "Core identity and the way you pursue success",
        Planet::Moon => "Emotional needs and instinctive reactions to money",
        Planet::Mercury => "How you think, research and negotiate",
        Planet::Venus => "What you value and how you attract resources",
        Planet::Mars => "Drive, ambition and how you take action",
        Planet::Jupiter => "Where growth and good fortune expand",
        Planet::Saturn => "Discipline, long-term structures and lessons",
    }
}

/// Natal calculator bound to a fixed "now" for transit work
#[derive(Clone, Copy, Debug)]
pub struct NatalCalculator {
    now: DateTime<Utc>,
}

impl NatalCalculator {
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Core profile for a parsed birth date
    pub fn profile(
        &self,
        date: NaiveDate,
        input: &BirthInput,
        coordinates: &Coordinates,
    ) -> NatalProfile {
        let sun = sun_sign(date);
        let moon = Some(moon_sign(date));
        let rising = rising_sign(date, input.time(), coordinates.known_latitude());
        let big_three = [sun, moon, rising];

        let houses = rising
            .or(sun)
            .map(signs::houses)
            .unwrap_or_default();

        NatalProfile {
            sun_sign: sun,
            moon_sign: moon,
            rising_sign: rising,
            planetary_positions: signs::planetary_positions(date, sun),
            houses,
            elemental_balance: ElementalBalance::from_signs(&big_three),
            modality_balance: ModalityBalance::from_signs(&big_three),
        }
    }

    /// Full report. Fails only when the birth date cannot be parsed.
    pub fn calculate(&self, input: &BirthInput) -> Result<NatalReport> {
        let date = parse_birth_date(&input.birth_date)?;
        let coordinates = resolve_coordinates(
            input.birth_place.as_deref(),
            input.birth_lat,
            input.birth_lng,
        );
        let profile = self.profile(date, input, &coordinates);

        let report = NatalReport {
            birth_date: Some(date),
            dominant_element: profile.elemental_balance.dominant(),
            natal_chart: natal_chart(&profile),
            wealth_houses: wealth_houses(&profile),
            current_transits: Some(CurrentTransits::on(self.now.date_naive())),
            transit: Some(TransitSnapshot::at(self.now, profile.sun_sign)),
            personality: personality_block(&profile),
            compatibility: profile.sun_sign.map(compatibility_block),
            coordinates: Some(coordinates),
            error: None,
            profile,
        };

        tracing::debug!(
            sun = ?report.profile.sun_sign,
            moon = ?report.profile.moon_sign,
            rising = ?report.profile.rising_sign,
            "natal report calculated"
        );
        Ok(report)
    }

    /// Like [`Self::calculate`], but a malformed date yields a degraded report
    pub fn calculate_or_degraded(&self, input: &BirthInput) -> NatalReport {
        self.calculate(input).unwrap_or_else(|e| {
            tracing::warn!("natal calculation degraded: {}", e);
            NatalReport::degraded(e.user_message())
        })
    }
}

fn natal_chart(profile: &NatalProfile) -> Vec<NatalChartEntry> {
    let anchor = profile.house_anchor();
    let rising_house = anchor.map(ZodiacSign::natural_house);

    Planet::ALL
        .into_iter()
        .map(|planet| {
            let sign = match planet {
                Planet::Sun => profile.sun_sign,
                Planet::Moon => profile.moon_sign,
                _ => profile.planetary_positions.get(&planet).copied(),
            };
            let house = match planet {
                Planet::Sun | Planet::Moon => sign.zip(anchor).map(|(s, a)| signs::house_of(s, a)),
                _ => rising_house.and_then(|h| planetary_house(planet, h)),
            };
            NatalChartEntry {
                planet,
                sign,
                house,
                meaning: planet_meaning(planet).into(),
            }
        })
        .collect()
}

fn wealth_houses(profile: &NatalProfile) -> Vec<WealthHouse> {
    let Some(anchor) = profile.house_anchor() else {
        return Vec::new();
    };

    WEALTH_HOUSES
        .iter()
        .map(|(house, ordinal, themes)| {
            let sign = house_sign(anchor, *house);
            let rec = record(sign);
            WealthHouse {
                house: *house,
                sign,
                ruler: rec.ruler.into(),
                themes: themes.iter().map(|t| (*t).to_string()).collect(),
                insight: format!(
                    "{sign} on your {ordinal} house brings a {} approach to {}.",
                    rec.wealth.style.to_lowercase(),
                    themes[0].to_lowercase()
                ),
            }
        })
        .collect()
}

fn personality_block(profile: &NatalProfile) -> Option<PersonalityBlock> {
    let rec = record(profile.sun_sign?);
    let archetype = wealth_archetype(profile.sun_sign, profile.moon_sign, profile.rising_sign);
    let owned = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect::<Vec<_>>();

    Some(PersonalityBlock {
        archetype: archetype.archetype,
        strengths: owned(rec.personality.strengths),
        challenges: owned(rec.personality.challenges),
        opportunities: archetype.opportunities,
        wealth_style: rec.wealth.style.into(),
        ideal_portfolio: rec.wealth.ideal_portfolio.into(),
        risk_tolerance: rec.wealth.risk_tolerance,
        lucky_numbers: rec.lucky_numbers.to_vec(),
        lucky_colors: owned(rec.colors),
        gemstones: owned(rec.gemstones),
    })
}

fn compatibility_block(sun: ZodiacSign) -> CompatibilityBlock {
    let rel = &record(sun).relationships;
    CompatibilityBlock {
        best_matches: rel.best_matches.to_vec(),
        challenging_matches: rel.challenging_matches.to_vec(),
        business_partners: rel.business_partners.to_vec(),
    }
}
