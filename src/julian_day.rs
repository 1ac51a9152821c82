//! Conversion between civil (Gregorian or proleptic Julian) dates and the
//! Astronomical Julian Day count.
//!
//! Dates before 1582-10-15 are read as Julian calendar dates, including the
//! ten days skipped by the reform. No timezone shift is applied anywhere: the
//! components are taken as local wall-clock values.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CUTOVER_JDN,
    GREGORIAN_CYCLE, GREGORIAN_REFORM, LEAP_YEAR_CYCLE, MAX_MONTH, MILLIS_PER_DAY, MIN_DAY,
};
use crate::error::DateError;

const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_SECOND: i64 = 1_000;

/// Largest day count magnitude accepted for conversion.
///
/// Above the last day of Hijri year `u32::MAX` (about 1.53e12) and well below
/// the point where the `i64` intermediates of the decoding could overflow.
const MAX_DAY_COUNT: f64 = 2.0e12;

/// A civil calendar date with an optional time of day.
///
/// Dates on or after 1582-10-15 are Gregorian, anything earlier is Julian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GregorianDateTime {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
}

impl GregorianDateTime {
    /// Creates a date at midnight.
    ///
    /// # Errors
    /// Returns `DateError::InvalidGregorianDate` if the month is not 1-12 or the
    /// day does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(1..=MAX_MONTH).contains(&month) || !(MIN_DAY..=days_in_month(year, month)).contains(&day)
        {
            return Err(DateError::InvalidGregorianDate { year, month, day });
        }
        Ok(Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        })
    }

    /// Returns a copy with the given time of day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidTime` if any component is out of range.
    pub fn with_time(
        self,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Result<Self, DateError> {
        if hour > 23 || minute > 59 || second > 59 || millisecond > 999 {
            return Err(DateError::InvalidTime {
                hour,
                minute,
                second,
                millisecond,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
            millisecond,
            ..self
        })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year (1-12)
    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn millisecond(&self) -> u16 {
        self.millisecond
    }

    /// Date components as `(year, month, day)`
    pub const fn date(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// True when the date falls before the Gregorian reform and is read as Julian.
    pub fn is_julian(&self) -> bool {
        let (year, month, day) = GREGORIAN_REFORM;
        (self.year, self.month, self.day) < (year, month, day)
    }

    /// Milliseconds elapsed since midnight.
    pub fn millis_of_day(&self) -> i64 {
        i64::from(self.hour) * MILLIS_PER_HOUR
            + i64::from(self.minute) * MILLIS_PER_MINUTE
            + i64::from(self.second) * MILLIS_PER_SECOND
            + i64::from(self.millisecond)
    }

    pub fn to_ajd(&self) -> f64 {
        gregorian_to_ajd(self)
    }

    /// # Errors
    /// See [`ajd_to_gregorian`].
    pub fn from_ajd(ajd: f64) -> Result<Self, DateError> {
        ajd_to_gregorian(ajd)
    }
}

impl PartialOrd for GregorianDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GregorianDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date()
            .cmp(&other.date())
            .then_with(|| self.millis_of_day().cmp(&other.millis_of_day()))
    }
}

impl fmt::Display for GregorianDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.millis_of_day() != 0 {
            write!(
                f,
                "T{:02}:{:02}:{:02}.{:03}",
                self.hour, self.minute, self.second, self.millisecond
            )?;
        }
        Ok(())
    }
}

/// Converts a civil date and time to the Astronomical Julian Day.
///
/// Pre-reform dates use pure Julian arithmetic; from 1582-10-15 on the
/// century correction `2 - a + floor(a / 4)` is applied.
pub fn gregorian_to_ajd(date: &GregorianDateTime) -> f64 {
    let (mut year, mut month) = (i64::from(date.year), i64::from(date.month));
    if month < 3 {
        year -= 1;
        month += 12;
    }

    let correction = if date.is_julian() {
        0
    } else {
        let century = year.div_euclid(100);
        2 - century + century.div_euclid(4)
    };

    // floor(365.25 * (year + 4716)) + floor(30.6001 * (month + 1)) in exact integers
    let day_number = (1461 * (year + 4716)).div_euclid(4)
        + (306 * (month + 1)).div_euclid(10)
        + i64::from(date.day)
        + correction;

    #[allow(clippy::cast_precision_loss)]
    let fraction = date.millis_of_day() as f64 / MILLIS_PER_DAY as f64;
    #[allow(clippy::cast_precision_loss)]
    let whole = day_number as f64;
    whole - 1524.5 + fraction
}

/// Converts an Astronomical Julian Day back to a civil date and time.
///
/// Day numbers (integer part of `ajd + 0.5`) below `2299161` decode as
/// Julian, the rest as Gregorian. The time of day is rounded to the nearest
/// millisecond.
///
/// # Errors
/// Returns `DateError::InvalidDayCount` for NaN, infinite or out-of-range input and
/// `DateError::InvalidYear` if the resulting year does not fit in an `i32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn ajd_to_gregorian(ajd: f64) -> Result<GregorianDateTime, DateError> {
    let ajd = checked_day_count(ajd)?;

    let shifted = ajd + 0.5;
    let whole = shifted.floor();
    #[allow(clippy::cast_precision_loss)]
    let mut millis = ((shifted - whole) * MILLIS_PER_DAY as f64).round() as i64;
    let mut z = whole as i64;
    if millis >= MILLIS_PER_DAY {
        z += 1;
        millis -= MILLIS_PER_DAY;
    }

    let a = if z < GREGORIAN_CUTOVER_JDN {
        z
    } else {
        // floor((z - 1867216.25) / 36524.25)
        let alpha = (4 * z - 7_468_865).div_euclid(146_097);
        z + 1 + alpha - alpha.div_euclid(4)
    };
    let b = a + 1524;
    // floor((b - 122.1) / 365.25)
    let c = (20 * b - 2442).div_euclid(7305);
    let d = (1461 * c).div_euclid(4);
    // floor((b - d) / 30.6001)
    let e = (10_000 * (b - d)).div_euclid(306_001);

    let day = b - d - (306 * e).div_euclid(10);
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };
    let year = i32::try_from(year).map_err(|_| DateError::InvalidYear(year))?;

    Ok(GregorianDateTime {
        year,
        month: month as u8,
        day: day as u8,
        hour: (millis / MILLIS_PER_HOUR) as u8,
        minute: (millis % MILLIS_PER_HOUR / MILLIS_PER_MINUTE) as u8,
        second: (millis % MILLIS_PER_MINUTE / MILLIS_PER_SECOND) as u8,
        millisecond: (millis % MILLIS_PER_SECOND) as u16,
    })
}

// Helper functions

/// Rejects day counts that are not finite or too large for integer arithmetic.
pub(crate) fn checked_day_count(ajd: f64) -> Result<f64, DateError> {
    if ajd.is_finite() && ajd.abs() <= MAX_DAY_COUNT {
        Ok(ajd)
    } else {
        Err(DateError::InvalidDayCount)
    }
}

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn is_julian_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
}

/// Leap year test for the calendar in force in `year` (Julian before 1582).
pub const fn is_leap_year(year: i32) -> bool {
    if year < GREGORIAN_REFORM.0 {
        is_julian_leap_year(year)
    } else {
        is_gregorian_leap_year(year)
    }
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
