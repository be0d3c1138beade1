//! Birth date and time parsing

use chrono::NaiveDate;

use crate::error::{AstroError, Result};

/// Parse a birth date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD` and slash-delimited day/month
/// strings. For `A/B/YYYY`: `A > 12` forces DD/MM/YYYY; otherwise
/// DD/MM/YYYY is assumed unless that is not a real date, in which case
/// MM/DD/YYYY is tried.
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate> {
    let s = raw.trim();
    let invalid = || AstroError::InvalidDate(raw.to_string());

    if s.contains('-') {
        return NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid());
    }

    let parts: Vec<&str> = s.split('/').map(str::trim).collect();
    let [first, second, third] = parts.as_slice() else {
        return Err(invalid());
    };

    if first.len() == 4 {
        let year: i32 = first.parse().map_err(|_| invalid())?;
        let month: u32 = second.parse().map_err(|_| invalid())?;
        let day: u32 = third.parse().map_err(|_| invalid())?;
        return NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid);
    }

    let a: u32 = first.parse().map_err(|_| invalid())?;
    let b: u32 = second.parse().map_err(|_| invalid())?;
    let year: i32 = third.parse().map_err(|_| invalid())?;

    if a > 12 {
        return NaiveDate::from_ymd_opt(year, b, a).ok_or_else(invalid);
    }

    NaiveDate::from_ymd_opt(year, b, a)
        .or_else(|| NaiveDate::from_ymd_opt(year, a, b))
        .ok_or_else(invalid)
}

/// Parse a birth time into (hours, minutes).
///
/// Accepted forms: `HH:MM` (seconds ignored), `HH.MM`, a 3-4 digit run
/// `HHMM`, or a bare hour. Hours must be 0-23 and minutes 0-59.
pub fn parse_birth_time(raw: &str) -> Result<(u32, u32)> {
    let s = raw.trim();
    let invalid = || AstroError::InvalidTime(raw.to_string());

    let (hours, minutes): (&str, &str) = if let Some((h, rest)) = s.split_once(':') {
        (h, rest.split(':').next().unwrap_or_default())
    } else if let Some((h, m)) = s.split_once('.') {
        (h, m)
    } else if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
        match s.len() {
            1 | 2 => (s, "0"),
            3 | 4 => s.split_at(s.len() - 2),
            _ => return Err(invalid()),
        }
    } else {
        return Err(invalid());
    };

    let hours: u32 = hours.trim().parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;

    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok((hours, minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_dates() {
        assert_eq!(parse_birth_date("1993-12-30").unwrap(), date(1993, 12, 30));
        assert_eq!(parse_birth_date(" 2000-02-29 ").unwrap(), date(2000, 2, 29));
        assert!(parse_birth_date("1993-13-01").is_err());
        assert!(parse_birth_date("2001-02-29").is_err());
    }

    #[test]
    fn test_slash_dates() {
        // Day above 12 forces DD/MM
        assert_eq!(parse_birth_date("30/12/1993").unwrap(), date(1993, 12, 30));
        // Ambiguous: DD/MM preferred
        assert_eq!(parse_birth_date("04/05/1990").unwrap(), date(1990, 5, 4));
        // DD/MM invalid (month 25), falls back to MM/DD
        assert_eq!(parse_birth_date("12/25/1990").unwrap(), date(1990, 12, 25));
        assert_eq!(parse_birth_date("1993/12/30").unwrap(), date(1993, 12, 30));
    }

    #[test]
    fn test_malformed_dates() {
        for raw in ["", "yesterday", "12/1993", "32/13/1990", "1993-12", "aa/bb/cccc"] {
            let err = parse_birth_date(raw).unwrap_err();
            assert!(matches!(err, AstroError::InvalidDate(_)), "{raw}");
        }
    }

    #[test]
    fn test_time_formats() {
        assert_eq!(parse_birth_time("14:30").unwrap(), (14, 30));
        assert_eq!(parse_birth_time("14:30:59").unwrap(), (14, 30));
        assert_eq!(parse_birth_time("7.05").unwrap(), (7, 5));
        assert_eq!(parse_birth_time("1430").unwrap(), (14, 30));
        assert_eq!(parse_birth_time("930").unwrap(), (9, 30));
        assert_eq!(parse_birth_time("9").unwrap(), (9, 0));
        assert_eq!(parse_birth_time("00:00").unwrap(), (0, 0));
    }

    #[test]
    fn test_time_out_of_range() {
        for raw in ["24:00", "12:60", "2400", "99", "noon", "", "12345", "-1:30"] {
            assert!(parse_birth_time(raw).is_err(), "{raw}");
        }
    }
}
