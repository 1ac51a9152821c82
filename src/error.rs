//! Error types for the Hijri calendar engine.

use crate::range::YearRange;

/// Error type for date construction, conversion and parsing.
///
/// Year clamping performed while paging through months is not an error and
/// never surfaces here; see [`crate::Navigation`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateError {
    /// Month index outside `0..=11`.
    #[error("Invalid Hijri month index: {0} (must be 0-11)")]
    InvalidMonth(u8),

    /// Day outside `1..=days_in_month` for the given Hijri month.
    #[error("Invalid day {day} for Hijri month {month} of {year} (max {max})")]
    InvalidDay { year: u32, month: u8, day: u8, max: u8 },

    /// Hijri years start at 1.
    #[error("Invalid Hijri year: {0} (must be at least 1)")]
    InvalidYear(i64),

    /// Month or day out of bounds for the Gregorian (or pre-reform Julian) calendar.
    #[error("Invalid Gregorian date: {year:04}-{month:02}-{day:02}")]
    InvalidGregorianDate { year: i32, month: u8, day: u8 },

    /// Time-of-day component out of bounds.
    #[error("Invalid time of day: {hour:02}:{minute:02}:{second:02}.{millisecond:03}")]
    InvalidTime {
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    },

    /// NaN, infinite, or too far from the epoch to convert.
    #[error("Day count is not finite or outside the supported range")]
    InvalidDayCount,

    /// Requested year lies outside the configured valid range.
    #[error("Year {year} is outside the configured range {range}")]
    YearOutOfRange { year: u32, range: YearRange },

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            DateError::InvalidMonth(12).to_string(),
            "Invalid Hijri month index: 12 (must be 0-11)"
        );
        assert_eq!(
            DateError::InvalidDay {
                year: 1445,
                month: 1,
                day: 30,
                max: 29
            }
            .to_string(),
            "Invalid day 30 for Hijri month 1 of 1445 (max 29)"
        );
        assert_eq!(
            DateError::InvalidGregorianDate {
                year: 2023,
                month: 2,
                day: 29
            }
            .to_string(),
            "Invalid Gregorian date: 2023-02-29"
        );
    }

    #[test]
    fn test_year_out_of_range_message() {
        let err = DateError::YearOutOfRange {
            year: 999,
            range: YearRange::default(),
        };
        assert_eq!(
            err.to_string(),
            "Year 999 is outside the configured range 1000/3000"
        );
    }
}
