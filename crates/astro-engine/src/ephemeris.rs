//! Ephemeris Lookup
//!
//! A small hand-kept table of dated planet positions with a bounded
//! nearest-date search, plus a lunar-cycle approximation for the Moon.
//! Deliberately approximate; nothing here is astronomy-grade.

use chrono::NaiveDate;

use crate::model::{Planet, ZodiacSign};

use ZodiacSign::{
    Aquarius, Aries, Cancer, Capricorn, Gemini, Leo, Libra, Pisces, Sagittarius, Scorpio, Taurus,
    Virgo,
};

/// Mean synodic month in days
pub const SYNODIC_MONTH: f64 = 29.530_59;

/// Largest day distance at which a table entry still answers a query
pub const MAX_LOOKUP_DISTANCE_DAYS: i64 = 5;

/// Reference point for the Moon approximation: the new moon of 2000-01-06,
/// taken as the Moon in Capricorn.
pub const MOON_REFERENCE_SIGN: ZodiacSign = Capricorn;

type Entry = (i32, u32, u32, ZodiacSign);

const MOON: &[Entry] = &[
    (1985, 6, 15, Libra),
    (1988, 2, 14, Sagittarius),
    (1990, 1, 1, Scorpio),
    (1990, 6, 15, Aquarius),
    (1993, 12, 30, Cancer),
    (1995, 3, 10, Leo),
    (1998, 8, 22, Pisces),
    (2000, 1, 6, Capricorn),
    (2005, 7, 4, Gemini),
    (2010, 10, 10, Sagittarius),
    (2015, 5, 20, Cancer),
    (2020, 3, 15, Sagittarius),
    (2024, 1, 1, Virgo),
    (2025, 6, 1, Leo),
];

const MERCURY: &[Entry] = &[
    (1985, 6, 15, Cancer),
    (1990, 1, 1, Capricorn),
    (1993, 12, 30, Capricorn),
    (1995, 3, 10, Pisces),
    (2000, 1, 6, Capricorn),
    (2010, 10, 10, Libra),
    (2020, 3, 15, Aquarius),
    (2024, 1, 1, Sagittarius),
    (2025, 6, 1, Gemini),
];

const VENUS: &[Entry] = &[
    (1985, 6, 15, Taurus),
    (1990, 1, 1, Capricorn),
    (1993, 12, 30, Sagittarius),
    (1995, 3, 10, Aquarius),
    (2000, 1, 6, Sagittarius),
    (2010, 10, 10, Scorpio),
    (2020, 3, 15, Taurus),
    (2024, 1, 1, Sagittarius),
    (2025, 6, 1, Aries),
];

const MARS: &[Entry] = &[
    (1985, 6, 15, Gemini),
    (1990, 1, 1, Sagittarius),
    (1993, 12, 30, Capricorn),
    (1995, 3, 10, Leo),
    (2000, 1, 6, Aquarius),
    (2010, 10, 10, Scorpio),
    (2020, 3, 15, Capricorn),
    (2024, 1, 1, Sagittarius),
    (2025, 6, 1, Leo),
];

const JUPITER: &[Entry] = &[
    (1985, 6, 15, Aquarius),
    (1990, 1, 1, Cancer),
    (1993, 12, 30, Scorpio),
    (1995, 3, 10, Sagittarius),
    (2000, 1, 6, Aries),
    (2010, 10, 10, Pisces),
    (2020, 3, 15, Capricorn),
    (2024, 1, 1, Taurus),
    (2025, 6, 1, Gemini),
];

const SATURN: &[Entry] = &[
    (1985, 6, 15, Scorpio),
    (1990, 1, 1, Capricorn),
    (1993, 12, 30, Aquarius),
    (1995, 3, 10, Pisces),
    (2000, 1, 6, Taurus),
    (2010, 10, 10, Libra),
    (2020, 3, 15, Aquarius),
    (2024, 1, 1, Pisces),
    (2025, 6, 1, Aries),
];

const fn table(planet: Planet) -> &'static [Entry] {
    match planet {
        Planet::Moon => MOON,
        Planet::Mercury => MERCURY,
        Planet::Venus => VENUS,
        Planet::Mars => MARS,
        Planet::Jupiter => JUPITER,
        Planet::Saturn => SATURN,
        // the Sun is derived from date ranges, never from the table
        Planet::Sun => &[],
    }
}

fn entries(planet: Planet) -> impl Iterator<Item = (NaiveDate, ZodiacSign)> {
    table(planet)
        .iter()
        .filter_map(|&(y, m, d, sign)| NaiveDate::from_ymd_opt(y, m, d).map(|date| (date, sign)))
}

/// Sign of `planet` on `date` from the table.
///
/// Exact date first, then the nearest entry if it lies within
/// [`MAX_LOOKUP_DISTANCE_DAYS`]; otherwise `None` and the caller falls back.
pub fn planet_sign_on_date(planet: Planet, date: NaiveDate) -> Option<ZodiacSign> {
    if let Some((_, sign)) = entries(planet).find(|(d, _)| *d == date) {
        return Some(sign);
    }

    let mut nearest: Option<(i64, ZodiacSign)> = None;
    for (entry_date, sign) in entries(planet) {
        let distance = (entry_date - date).num_days().abs();
        if nearest.is_none_or(|(best, _)| distance < best) {
            nearest = Some((distance, sign));
        }
    }

    match nearest {
        Some((distance, sign)) if distance <= MAX_LOOKUP_DISTANCE_DAYS => Some(sign),
        _ => {
            tracing::debug!(%planet, %date, "no ephemeris entry within lookup window");
            None
        }
    }
}

fn moon_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 6).unwrap_or(NaiveDate::MIN)
}

/// Moon sign estimate: elapsed synodic cycles since the reference new moon,
/// twelve signs per cycle, counted from the reference sign.
pub fn approximate_moon_sign(date: NaiveDate) -> ZodiacSign {
    let elapsed_days = (date - moon_reference_date()).num_days() as f64;
    let cycles = elapsed_days / SYNODIC_MONTH;
    let signs_advanced = (cycles * 12.0).floor() as i64;
    MOON_REFERENCE_SIGN.offset(signs_advanced)
}
