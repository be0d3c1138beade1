//! Domain Models
//!
//! Core enums shared by every component: signs, elements, modalities,
//! risk tolerance and planets, plus the elemental/modality balance counters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AstroError;

/// Label used wherever a sign could not be resolved
pub const UNKNOWN: &str = "Unknown";

/// The twelve signs in canonical (Aries-first) order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Position in the canonical order (Aries = 0)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index` modulo 12
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Sign `steps` positions further round the wheel (negative steps go back)
    pub fn offset(self, steps: i64) -> Self {
        let index = (self.index() as i64 + steps).rem_euclid(12);
        Self::from_index(index as usize)
    }

    /// Default house (1-12), one-to-one with sign order
    pub const fn natural_house(self) -> u8 {
        self as u8 + 1
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }

    pub const fn modality(self) -> Modality {
        match self {
            Self::Aries | Self::Cancer | Self::Libra | Self::Capricorn => Modality::Cardinal,
            Self::Taurus | Self::Leo | Self::Scorpio | Self::Aquarius => Modality::Fixed,
            Self::Gemini | Self::Virgo | Self::Sagittarius | Self::Pisces => Modality::Mutable,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| AstroError::UnknownSign(needle.to_string()))
    }
}

/// Display name for an optional sign ("Unknown" when unresolved)
pub fn sign_label(sign: Option<ZodiacSign>) -> &'static str {
    sign.map_or(UNKNOWN, ZodiacSign::name)
}

/// Serde adapter: `Option<ZodiacSign>` as a plain sign name, `None` as "Unknown"
pub mod unknown_sign {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{UNKNOWN, ZodiacSign, sign_label};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(sign: &Option<ZodiacSign>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(sign_label(*sign))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<ZodiacSign>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw.trim().is_empty() || raw.trim().eq_ignore_ascii_case(UNKNOWN) {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}

/// Classical element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Self; 4] = [Self::Fire, Self::Earth, Self::Air, Self::Water];
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        };
        f.write_str(name)
    }
}

/// Modality (quality) of a sign
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const ALL: [Self; 3] = [Self::Cardinal, Self::Fixed, Self::Mutable];
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        };
        f.write_str(name)
    }
}

/// Natural risk appetite of a sign, ordered from most cautious to boldest
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTolerance {
    Low,
    #[serde(rename = "Low-Moderate")]
    LowModerate,
    Moderate,
    #[serde(rename = "Moderate-High")]
    ModerateHigh,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::LowModerate => "Low-Moderate",
            Self::Moderate => "Moderate",
            Self::ModerateHigh => "Moderate-High",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        };
        f.write_str(label)
    }
}

/// Bodies tracked by the natal chart
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Planet {
    /// Planets whose sign comes from the ephemeris table or a fallback
    pub const OUTER: [Self; 5] = [
        Self::Mercury,
        Self::Venus,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
    ];

    pub const ALL: [Self; 7] = [
        Self::Sun,
        Self::Moon,
        Self::Mercury,
        Self::Venus,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
    ];
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Element counts across a set of signs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementalBalance {
    pub fire: u8,
    pub earth: u8,
    pub air: u8,
    pub water: u8,
}

impl ElementalBalance {
    /// Count elements of the resolved signs; unresolved ones are skipped
    pub fn from_signs(signs: &[Option<ZodiacSign>]) -> Self {
        let mut balance = Self::default();
        for sign in signs.iter().flatten() {
            match sign.element() {
                Element::Fire => balance.fire += 1,
                Element::Earth => balance.earth += 1,
                Element::Air => balance.air += 1,
                Element::Water => balance.water += 1,
            }
        }
        balance
    }

    pub const fn count(&self, element: Element) -> u8 {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }

    pub const fn total(&self) -> u8 {
        self.fire + self.earth + self.air + self.water
    }

    /// Element with the highest count; ties go to the earlier element
    /// in Fire/Earth/Air/Water order
    pub fn dominant(&self) -> Option<Element> {
        let mut best: Option<(Element, u8)> = None;
        for element in Element::ALL {
            let count = self.count(element);
            if count > 0 && best.is_none_or(|(_, c)| count > c) {
                best = Some((element, count));
            }
        }
        best.map(|(element, _)| element)
    }
}

/// Modality counts across a set of signs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalityBalance {
    pub cardinal: u8,
    pub fixed: u8,
    pub mutable: u8,
}

impl ModalityBalance {
    pub fn from_signs(signs: &[Option<ZodiacSign>]) -> Self {
        let mut balance = Self::default();
        for sign in signs.iter().flatten() {
            match sign.modality() {
                Modality::Cardinal => balance.cardinal += 1,
                Modality::Fixed => balance.fixed += 1,
                Modality::Mutable => balance.mutable += 1,
            }
        }
        balance
    }

    pub const fn count(&self, modality: Modality) -> u8 {
        match modality {
            Modality::Cardinal => self.cardinal,
            Modality::Fixed => self.fixed,
            Modality::Mutable => self.mutable,
        }
    }
}
