//! Sign derivation: sun, moon, rising, houses and planet placements

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::ephemeris::{approximate_moon_sign, planet_sign_on_date};
use crate::model::{Planet, ZodiacSign};
use crate::zodiac::database;

use super::input::parse_birth_time;

/// Sun sign from the date ranges. `None` only for an impossible (month, day).
pub fn sun_sign_for(month: u32, day: u32) -> Option<ZodiacSign> {
    database::all()
        .iter()
        .find(|rec| rec.date_range.contains(month, day))
        .map(|rec| rec.sign)
}

pub fn sun_sign(date: NaiveDate) -> Option<ZodiacSign> {
    sun_sign_for(date.month(), date.day())
}

/// Moon sign: table lookup, else the lunar-cycle approximation
pub fn moon_sign(date: NaiveDate) -> ZodiacSign {
    planet_sign_on_date(Planet::Moon, date).unwrap_or_else(|| {
        tracing::debug!(%date, "moon sign from cycle approximation");
        approximate_moon_sign(date)
    })
}

/// Rising sign heuristic.
///
/// Each sign rises for a two-hour block; the block index is shifted by a
/// seasonal quarter and by a latitude band. Latitudes outside -90..=90
/// are ignored. Returns `None` without a parseable birth time.
pub fn rising_sign(
    date: NaiveDate,
    time: Option<&str>,
    latitude: Option<f64>,
) -> Option<ZodiacSign> {
    let (hours, minutes) = match parse_birth_time(time?) {
        Ok(hm) => hm,
        Err(e) => {
            tracing::debug!(error = %e, "rising sign unavailable");
            return None;
        }
    };

    let decimal_hour = f64::from(hours) + f64::from(minutes) / 60.0;
    let day_of_year = f64::from(date.ordinal());
    let latitude_factor = latitude
        .filter(|lat| lat.is_finite() && lat.abs() <= 90.0)
        .map_or(0.0, |lat| lat.abs() / 90.0);

    let base = (decimal_hour / 2.0).floor() as usize % 12;
    let seasonal = ((day_of_year / 365.0) * 4.0).floor() as usize % 4;
    let latitude_shift = (latitude_factor * 2.0).floor() as usize % 12;

    Some(ZodiacSign::from_index(base + seasonal + latitude_shift))
}

/// Sign on the cusp of `house` (1-based) counting from the rising sign
pub fn house_sign(rising: ZodiacSign, house: u8) -> ZodiacSign {
    ZodiacSign::from_index(rising.index() + usize::from(house.max(1)) - 1)
}

/// All twelve houses rotated from the rising sign
pub fn houses(rising: ZodiacSign) -> BTreeMap<u8, ZodiacSign> {
    (1..=12).map(|house| (house, house_sign(rising, house))).collect()
}

/// Whole-sign house of `sign` relative to `rising`
pub fn house_of(sign: ZodiacSign, rising: ZodiacSign) -> u8 {
    let offset = (sign.index() + 12 - rising.index()) % 12;
    offset as u8 + 1
}

/// (offset from the rising sign's house, house used when the sum lands on 0)
const fn house_rule(planet: Planet) -> Option<(u8, u8)> {
    match planet {
        Planet::Mercury => Some((2, 3)),
        Planet::Venus => Some((1, 2)),
        Planet::Mars => Some((5, 6)),
        Planet::Jupiter => Some((8, 9)),
        Planet::Saturn => Some((9, 10)),
        Planet::Sun | Planet::Moon => None,
    }
}

/// House of an outer planet: `(rising house + offset) mod 12`, with the
/// planet's default house standing in for a result of 0.
pub fn planetary_house(planet: Planet, rising_house: u8) -> Option<u8> {
    let (offset, default_house) = house_rule(planet)?;
    match (rising_house + offset) % 12 {
        0 => Some(default_house),
        house => Some(house),
    }
}

/// Fallback sign when the table has nothing near `date`: Mercury and Venus
/// sit next to the sun, the slower planets take a fixed sign.
pub fn planet_fallback(planet: Planet, sun: Option<ZodiacSign>) -> ZodiacSign {
    match (planet, sun) {
        (Planet::Mercury, Some(sun)) => sun.offset(1),
        (Planet::Venus, Some(sun)) => sun.offset(-1),
        (Planet::Mercury, None) => ZodiacSign::Gemini,
        (Planet::Venus, None) => ZodiacSign::Taurus,
        (Planet::Mars, _) => ZodiacSign::Aries,
        (Planet::Jupiter, _) => ZodiacSign::Sagittarius,
        (Planet::Saturn, _) => ZodiacSign::Capricorn,
        (Planet::Sun | Planet::Moon, Some(sun)) => sun,
        (Planet::Sun | Planet::Moon, None) => ZodiacSign::Aries,
    }
}

/// Signs of Mercury through Saturn on `date`
pub fn planetary_positions(
    date: NaiveDate,
    sun: Option<ZodiacSign>,
) -> BTreeMap<Planet, ZodiacSign> {
    Planet::OUTER
        .into_iter()
        .map(|planet| {
            let sign = planet_sign_on_date(planet, date)
                .unwrap_or_else(|| planet_fallback(planet, sun));
            (planet, sign)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ZodiacSign::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sun_sign_partitions_the_year() {
        // 2000 is a leap year, so Feb 29 is covered too
        let mut day = date(2000, 1, 1);
        let end = date(2000, 12, 31);
        let mut counts = [0u32; 12];
        while day <= end {
            let sign = sun_sign(day).unwrap_or_else(|| panic!("no sign for {day}"));
            let matching = database::all()
                .iter()
                .filter(|r| r.date_range.contains(day.month(), day.day()))
                .count();
            assert_eq!(matching, 1, "overlap on {day}");
            counts[sign.index()] += 1;
            day = day.succ_opt().unwrap();
        }
        assert_eq!(counts.iter().sum::<u32>(), 366);
        assert!(counts.iter().all(|&c| c >= 29));
    }

    #[test]
    fn test_capricorn_wraparound() {
        assert_eq!(sun_sign(date(1993, 12, 30)), Some(Capricorn));
        assert_eq!(sun_sign(date(1994, 1, 19)), Some(Capricorn));
        assert_eq!(sun_sign(date(1994, 1, 20)), Some(Aquarius));
        assert_eq!(sun_sign(date(1993, 12, 21)), Some(Sagittarius));
        assert_eq!(sun_sign(date(1993, 12, 22)), Some(Capricorn));
    }

    #[test]
    fn test_cusp_days() {
        assert_eq!(sun_sign(date(1990, 3, 20)), Some(Pisces));
        assert_eq!(sun_sign(date(1990, 3, 21)), Some(Aries));
        assert_eq!(sun_sign(date(1990, 8, 22)), Some(Leo));
        assert_eq!(sun_sign(date(1990, 8, 23)), Some(Virgo));
        assert_eq!(sun_sign_for(13, 1), None);
    }

    #[test]
    fn test_moon_sign_table_then_approximation() {
        assert_eq!(moon_sign(date(1993, 12, 30)), Cancer);
        assert_eq!(moon_sign(date(1970, 6, 1)), approximate_moon_sign(date(1970, 6, 1)));
    }

    #[test]
    fn test_rising_sign_formula() {
        // 14.5h -> block 7; Dec 30 is day 364 -> seasonal 3; no latitude
        assert_eq!(rising_sign(date(1993, 12, 30), Some("14:30"), None), Some(Aquarius));
        // |51.5| / 90 * 2 = 1.14 -> one more sign
        assert_eq!(rising_sign(date(1993, 12, 30), Some("14:30"), Some(-51.5)), Some(Pisces));
        // Jan 1 04:00: block 2, seasonal 0
        assert_eq!(rising_sign(date(2000, 1, 1), Some("0400"), None), Some(Gemini));
        // 23:59 on day 364 wraps: 11 + 3 = 14 -> 2
        assert_eq!(rising_sign(date(1993, 12, 30), Some("23:59"), None), Some(Gemini));
    }

    #[test]
    fn test_rising_sign_ignores_impossible_latitude() {
        let day = date(1993, 12, 30);
        let no_latitude = rising_sign(day, Some("14:30"), None);
        for lat in [1e300, -1e300, 500.0, -90.5, f64::INFINITY, f64::NAN] {
            assert_eq!(rising_sign(day, Some("14:30"), Some(lat)), no_latitude, "{lat}");
        }
        // poles are still in range: 90 / 90 * 2 = 2 signs on from Aquarius
        assert_eq!(rising_sign(day, Some("14:30"), Some(90.0)), Some(Aries));
    }

    #[test]
    fn test_rising_sign_requires_valid_time() {
        assert_eq!(rising_sign(date(1993, 12, 30), None, None), None);
        assert_eq!(rising_sign(date(1993, 12, 30), Some("25:00"), None), None);
        assert_eq!(rising_sign(date(1993, 12, 30), Some("later"), None), None);
    }

    #[test]
    fn test_houses_rotate_from_rising() {
        assert_eq!(house_sign(Aquarius, 1), Aquarius);
        assert_eq!(house_sign(Aquarius, 2), Pisces);
        assert_eq!(house_sign(Aquarius, 10), Scorpio);
        let all = houses(Leo);
        assert_eq!(all.len(), 12);
        assert_eq!(all[&12], Cancer);
        assert_eq!(house_of(Leo, Leo), 1);
        assert_eq!(house_of(Cancer, Leo), 12);
    }

    #[test]
    fn test_planetary_house_offsets_and_defaults() {
        // Aquarius rising sits in house 11
        assert_eq!(planetary_house(Planet::Mercury, 11), Some(1));
        assert_eq!(planetary_house(Planet::Venus, 11), Some(2)); // 12 % 12 = 0
        assert_eq!(planetary_house(Planet::Mars, 11), Some(4));
        assert_eq!(planetary_house(Planet::Jupiter, 11), Some(7));
        assert_eq!(planetary_house(Planet::Saturn, 11), Some(8));
        assert_eq!(planetary_house(Planet::Mercury, 10), Some(3)); // 12 % 12 = 0
        assert_eq!(planetary_house(Planet::Sun, 1), None);
    }

    #[test]
    fn test_planet_fallbacks() {
        let positions = planetary_positions(date(1970, 6, 1), Some(Gemini));
        assert_eq!(positions[&Planet::Mercury], Cancer);
        assert_eq!(positions[&Planet::Venus], Taurus);
        assert_eq!(positions[&Planet::Mars], Aries);
        assert_eq!(positions[&Planet::Jupiter], Sagittarius);
        assert_eq!(positions[&Planet::Saturn], Capricorn);

        let table = planetary_positions(date(1993, 12, 30), Some(Capricorn));
        assert_eq!(table[&Planet::Venus], Sagittarius);
        assert_eq!(table[&Planet::Saturn], Aquarius);
    }
}
