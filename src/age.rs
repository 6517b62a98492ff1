//! age.rs
//!
//! Elapsed-time decomposition between a birth date and the current instant.
//!
//! The breakdown deliberately uses average unit lengths (a 365.25-day year
//! and a 30.44-day month) instead of calendar-aware borrowing: the same
//! millisecond duration always decomposes to the same fields, regardless of
//! which months or leap years it happens to span. Do not swap these
//! constants for calendar arithmetic; downstream output depends on them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;
/// Average Gregorian year: 365.25 days.
pub const MS_PER_YEAR: u64 = MS_PER_DAY * 365 + MS_PER_DAY / 4;
/// Average month: 30.44 days.
pub const MS_PER_MONTH: u64 = MS_PER_DAY * 30 + (MS_PER_DAY / 100) * 44;

/// Elapsed time split into calendar-ish units. Built fresh per calculation,
/// never updated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// Splits a millisecond duration into years/months/days/hours/minutes/seconds
/// by successive divide-and-remainder with the average unit lengths above.
pub fn decompose_ms(ms: u64) -> AgeBreakdown {
    let years = ms / MS_PER_YEAR;
    let rem = ms % MS_PER_YEAR;

    let months = rem / MS_PER_MONTH;
    let rem = rem % MS_PER_MONTH;

    let days = rem / MS_PER_DAY;
    let rem = rem % MS_PER_DAY;

    let hours = rem / MS_PER_HOUR;
    let rem = rem % MS_PER_HOUR;

    let minutes = rem / MS_PER_MINUTE;
    let seconds = (rem % MS_PER_MINUTE) / MS_PER_SECOND;

    AgeBreakdown {
        years,
        months,
        days,
        hours,
        minutes,
        seconds,
    }
}

/// Milliseconds between midnight of `birthdate` and `now`, as an absolute
/// value. A birth date after `now` therefore still yields a positive
/// duration; whether that is acceptable input is decided at the boundary,
/// not here.
pub fn elapsed_ms(birthdate: NaiveDate, now: NaiveDateTime) -> u64 {
    let birth = birthdate.and_hms_opt(0, 0, 0).expect("midnight is valid");
    (now - birth).num_milliseconds().unsigned_abs()
}

/// Full calculation: elapsed duration decomposed into an [`AgeBreakdown`].
pub fn age_breakdown(birthdate: NaiveDate, now: NaiveDateTime) -> AgeBreakdown {
    decompose_ms(elapsed_ms(birthdate, now))
}

/// Share-ready summary. The wording is fixed; callers pass it verbatim to
/// whatever share mechanism they have.
pub fn share_line(age: &AgeBreakdown) -> String {
    format!(
        "My age: {} years, {} months, and {} days!",
        age.years, age.months, age.days
    )
}

/// Returns a human age as a string, e.g. "33 years, 1 month, 24 days".
pub fn age_string(age: &AgeBreakdown) -> String {
    format!(
        "{} year{}, {} month{}, {} day{}",
        age.years,
        plural(age.years),
        age.months,
        plural(age.months),
        age.days,
        plural(age.days)
    )
}

fn plural(n: u64) -> &'static str {
    if n == 1 { "" } else { "s" }
}
