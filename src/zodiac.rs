//! zodiac.rs
//!
//! Western tropical zodiac lookup from a birth date's month and day.
//! Depends only on the calendar date, never on the elapsed-time breakdown.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ZodiacSign {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
        };
        f.write_str(name)
    }
}

/// Day of month on which the next sign takes over, indexed by month − 1.
/// E.g. January's cutoff is 20: Jan 1–19 is still Capricorn, Jan 20 starts
/// Aquarius.
const SIGN_CUTOFFS: [u32; 12] = [20, 19, 20, 20, 20, 21, 22, 22, 22, 23, 22, 21];

/// Sign in effect at the start of each month, indexed by month − 1.
/// The December sign wraps into January, so `SIGNS_AT_MONTH_START[0]` is
/// Capricorn.
const SIGNS_AT_MONTH_START: [ZodiacSign; 12] = [
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
];

/// Looks up the sign for a month (1–12) and day of month. Days before the
/// month's cutoff keep the sign carried over from the previous month; days
/// on or after it get the sign that begins this month. Expects an already
/// valid month/day pair; validation happens where the date is parsed.
pub fn sign_for_month_day(month: u32, day: u32) -> ZodiacSign {
    let idx = (month - 1) as usize;
    if day < SIGN_CUTOFFS[idx] {
        SIGNS_AT_MONTH_START[idx]
    } else {
        SIGNS_AT_MONTH_START[(idx + 1) % 12]
    }
}

/// Sign for a birth date.
pub fn sign_for(birthdate: NaiveDate) -> ZodiacSign {
    sign_for_month_day(birthdate.month(), birthdate.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_equinox_is_aries() {
        assert_eq!(sign_for_month_day(3, 21), ZodiacSign::Aries);
    }

    #[test]
    fn test_new_years_eve_is_capricorn() {
        assert_eq!(sign_for_month_day(12, 31), ZodiacSign::Capricorn);
    }

    #[test]
    fn test_january_first_wraps_to_capricorn() {
        assert_eq!(sign_for_month_day(1, 1), ZodiacSign::Capricorn);
    }

    #[test]
    fn test_cutoff_boundaries() {
        // Day before each cutoff keeps the carried-over sign, the cutoff
        // day itself switches.
        assert_eq!(sign_for_month_day(1, 19), ZodiacSign::Capricorn);
        assert_eq!(sign_for_month_day(1, 20), ZodiacSign::Aquarius);
        assert_eq!(sign_for_month_day(2, 18), ZodiacSign::Aquarius);
        assert_eq!(sign_for_month_day(2, 19), ZodiacSign::Pisces);
        assert_eq!(sign_for_month_day(6, 20), ZodiacSign::Gemini);
        assert_eq!(sign_for_month_day(6, 21), ZodiacSign::Cancer);
        assert_eq!(sign_for_month_day(10, 22), ZodiacSign::Libra);
        assert_eq!(sign_for_month_day(10, 23), ZodiacSign::Scorpio);
        assert_eq!(sign_for_month_day(12, 20), ZodiacSign::Sagittarius);
        assert_eq!(sign_for_month_day(12, 21), ZodiacSign::Capricorn);
    }

    #[test]
    fn test_sign_from_date() {
        let date = NaiveDate::from_ymd_opt(1992, 6, 14).unwrap();
        assert_eq!(sign_for(date), ZodiacSign::Gemini);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ZodiacSign::Aries.to_string(), "Aries");
        assert_eq!(ZodiacSign::Sagittarius.to_string(), "Sagittarius");
    }
}
