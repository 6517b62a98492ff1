//! stats.rs
//!
//! Vanity statistics derived from whole years lived. The per-second rates
//! and the life-expectancy figure are rough averages; keep them as named
//! constants so the assumptions can be revisited without touching the
//! formulas.

use serde::Serialize;

pub const SECONDS_PER_YEAR: u64 = 31_536_000;
pub const HEARTBEATS_PER_SECOND: f64 = 1.2;
pub const BREATHS_PER_SECOND: f64 = 16.0;
pub const LIFE_EXPECTANCY_YEARS: u64 = 73;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VitalStats {
    pub heartbeats: u64,
    pub breaths: u64,
    pub life_progress_pct: u64,
}

impl VitalStats {
    /// Derives the estimates from whole years lived. Sub-year remainders
    /// are intentionally ignored, matching the display granularity.
    pub fn from_years(years: u64) -> Self {
        let seconds = (years * SECONDS_PER_YEAR) as f64;
        VitalStats {
            heartbeats: (seconds * HEARTBEATS_PER_SECOND) as u64,
            breaths: (seconds * BREATHS_PER_SECOND) as u64,
            life_progress_pct: life_progress(years),
        }
    }
}

/// Percentage of the assumed life expectancy already lived, rounded half
/// away from zero. Exceeds 100 past the assumed expectancy.
pub fn life_progress(years: u64) -> u64 {
    (years as f64 / LIFE_EXPECTANCY_YEARS as f64 * 100.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_progress_at_expectancy_is_100() {
        assert_eq!(life_progress(73), 100);
    }

    #[test]
    fn test_life_progress_rounds_half_away_from_zero() {
        // 36 / 73 = 49.3%, rounds down.
        assert_eq!(life_progress(36), 49);
        // 37 / 73 = 50.7%, rounds up.
        assert_eq!(life_progress(37), 51);
        assert_eq!(life_progress(0), 0);
    }

    #[test]
    fn test_life_progress_past_expectancy() {
        assert_eq!(life_progress(146), 200);
    }

    #[test]
    fn test_vitals_for_one_year() {
        let vitals = VitalStats::from_years(1);
        assert_eq!(vitals.heartbeats, 37_843_200);
        assert_eq!(vitals.breaths, 504_576_000);
        assert_eq!(vitals.life_progress_pct, 1);
    }

    #[test]
    fn test_vitals_for_zero_years() {
        let vitals = VitalStats::from_years(0);
        assert_eq!(vitals.heartbeats, 0);
        assert_eq!(vitals.breaths, 0);
        assert_eq!(vitals.life_progress_pct, 0);
    }
}
