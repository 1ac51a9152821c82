//! A tabular Hijri calendar engine.
//!
//! Dates are converted through the Astronomical Julian Day count, using the
//! fixed 30-year leap cycle rather than moon sighting. On top of the date
//! value sits a month-grid builder that lays a Hijri month out in complete
//! seven-day weeks and attaches yearly-recurring events to each day.
//!
//! ```
//! use hijri_calendar::HijriDate;
//!
//! let date: HijriDate = "1445-08-15".parse().unwrap();
//! assert_eq!(date.to_gregorian().unwrap().date(), (2024, 2, 24));
//! ```

mod config;
mod consts;
mod error;
mod event;
mod format;
mod grid;
mod julian_day;
mod navigate;
mod prelude;
mod range;
mod types;

pub use config::CalendarConfig;
pub use consts::*;
pub use error::DateError;
pub use event::{DailyDua, EventAnchor, EventBook, Miqaat};
pub use format::{
    GREGORIAN_MONTH_NAMES, HIJRI_MONTH_NAMES, HIJRI_MONTH_SHORT_NAMES, gregorian_month_name,
    to_arabic_numerals,
};
pub use grid::{CalendarDay, CalendarGrid, GregorianSpan};
pub use julian_day::{GregorianDateTime, ajd_to_gregorian, gregorian_to_ajd};
pub use navigate::Navigation;
pub use range::{RangeError, YearRange};
pub use types::{HijriMonth, WeekStart, Weekday, days_in_month, is_leap_year};

use std::fmt;
use std::str::FromStr;

/// A day in the tabular Hijri calendar.
///
/// The month is a 0-based index (0 is Moharram, 11 is Zilhaj); the textual
/// form uses 1-based months, so `HijriDate::new(1445, 7, 15)` displays as
/// `1445-08-15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    year:  u32,
    month: HijriMonth,
    day:   u8,
}

impl HijriDate {
    /// Creates a validated date from a year, a 0-based month index and a day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` for year 0, `DateError::InvalidMonth`
    /// for a month index above 11 and `DateError::InvalidDay` if the day does
    /// not exist in that month.
    pub fn new(year: u32, month: u8, day: u8) -> Result<Self, DateError> {
        Self::from_parts(year, HijriMonth::new(month)?, day)
    }

    /// Creates a validated date from an already-checked month.
    ///
    /// # Errors
    /// See [`HijriDate::new`].
    pub fn from_parts(year: u32, month: HijriMonth, day: u8) -> Result<Self, DateError> {
        if year == 0 {
            return Err(DateError::InvalidYear(0));
        }
        let max = days_in_month(year, month);
        if !(MIN_DAY..=max).contains(&day) {
            return Err(DateError::InvalidDay {
                year,
                month: month.get(),
                day,
                max,
            });
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u32 {
        self.year
    }

    /// Returns the 0-based month index
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the month as a `HijriMonth`
    pub const fn month_typed(&self) -> HijriMonth {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Same year and month, different day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day does not exist in this month.
    pub fn with_day(&self, day: u8) -> Result<Self, DateError> {
        Self::from_parts(self.year, self.month, day)
    }

    /// Whether this date's year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Day of the year, starting at 1 on 1 Moharram.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn day_of_year(&self) -> u16 {
        (MONTH_CUMULATIVE_DAYS[usize::from(self.month.get())] + i64::from(self.day)) as u16
    }

    /// Astronomical Julian Day at the start (midnight) of this date.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_ajd(&self) -> f64 {
        let cycles = i64::from(self.year / CYCLE_YEARS);
        let year_in_cycle = (self.year % CYCLE_YEARS) as usize;
        let days = cycles * CYCLE_DAYS
            + CYCLE_CUMULATIVE_DAYS[year_in_cycle]
            + i64::from(self.day_of_year());
        HIJRI_EPOCH + days as f64
    }

    /// Hijri date of the civil day containing `ajd`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDayCount` for NaN, infinite or out-of-range input and
    /// `DateError::InvalidYear` when the day falls before 1 Moharram of year 1.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_ajd(ajd: f64) -> Result<Self, DateError> {
        let ajd = julian_day::checked_day_count(ajd)?;

        // Day 1 of the count is 1 Moharram of year 0.
        let elapsed = (ajd - HIJRI_EPOCH).floor() as i64 - 1;
        let cycle = elapsed.div_euclid(CYCLE_DAYS);
        let day_of_cycle = elapsed.rem_euclid(CYCLE_DAYS);

        let year_in_cycle = CYCLE_CUMULATIVE_DAYS
            .iter()
            .rposition(|&start| start <= day_of_cycle)
            .unwrap_or_default();
        let day_of_year = day_of_cycle - CYCLE_CUMULATIVE_DAYS[year_in_cycle];

        let month = MONTH_CUMULATIVE_DAYS
            .iter()
            .rposition(|&start| start <= day_of_year)
            .unwrap_or_default();
        let day = day_of_year - MONTH_CUMULATIVE_DAYS[month] + 1;

        let year = cycle * i64::from(CYCLE_YEARS) + year_in_cycle as i64;
        let year = u32::try_from(year)
            .ok()
            .filter(|y| *y >= 1)
            .ok_or(DateError::InvalidYear(year))?;

        Self::new(year, month as u8, day as u8)
    }

    /// # Errors
    /// See [`HijriDate::from_ajd`].
    pub fn from_gregorian(date: &GregorianDateTime) -> Result<Self, DateError> {
        Self::from_ajd(gregorian_to_ajd(date))
    }

    /// Civil date (midnight) of this Hijri date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the civil year does not fit in an `i32`,
    /// which happens for Hijri years above roughly 2.21e9. The day count itself
    /// is always in range, so `DateError::InvalidDayCount` does not occur.
    pub fn to_gregorian(&self) -> Result<GregorianDateTime, DateError> {
        ajd_to_gregorian(self.to_ajd())
    }

    /// Moves by a number of days in either direction.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` when the result falls before year 1.
    #[allow(clippy::cast_precision_loss)]
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        Self::from_ajd(self.to_ajd() + days as f64)
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_sunday_index(WeekStart::Sunday.column(self.to_ajd()))
    }

    pub const fn month_name(&self) -> &'static str {
        self.month.long_name()
    }

    pub const fn short_month_name(&self) -> &'static str {
        self.month.short_name()
    }

    /// Day of month in Arabic-Indic digits
    pub fn arabic_day(&self) -> String {
        to_arabic_numerals(self.day)
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month.number(),
            self.day
        )
    }
}

impl FromStr for HijriDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s)",
                parts.len()
            )));
        };

        let year = year
            .parse::<u32>()
            .map_err(|_| DateError::InvalidFormat((*year).to_owned()))?;
        let month_number = month
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat((*month).to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat((*day).to_owned()))?;

        let month = month_number
            .checked_sub(1)
            .ok_or_else(|| DateError::InvalidFormat(format!("Month must be 1-12: {trimmed}")))?;

        Self::new(year, month, day)
    }
}

impl From<HijriDate> for (u32, u8, u8) {
    fn from(date: HijriDate) -> Self {
        (date.year, date.month.get(), date.day)
    }
}

impl TryFrom<(u32, u8, u8)> for HijriDate {
    type Error = DateError;

    fn try_from(value: (u32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for HijriDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HijriDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
