use crate::consts::{
    CYCLE_YEARS, DAYS_IN_WEEK, LAST_MONTH, LEAP_YEAR_REMAINDERS, LONG_MONTH_DAYS,
    SHORT_MONTH_DAYS,
};
use crate::error::DateError;
use crate::format::{HIJRI_MONTH_NAMES, HIJRI_MONTH_SHORT_NAMES};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Hijri month index guaranteed to be in the range `0..=11` (0 is Moharram).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HijriMonth(u8);

impl HijriMonth {
    pub const FIRST: Self = Self(0);
    pub const LAST: Self = Self(LAST_MONTH);

    /// Creates a new month index, validating that it is `<= 11`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is greater than 11.
    pub fn new(index: u8) -> Result<Self, DateError> {
        if index > LAST_MONTH {
            return Err(DateError::InvalidMonth(index));
        }
        Ok(Self(index))
    }

    /// Returns the 0-based month index
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the 1-based month number used in text (1..=12)
    #[inline]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    pub const fn long_name(self) -> &'static str {
        HIJRI_MONTH_NAMES[self.0 as usize]
    }

    pub const fn short_name(self) -> &'static str {
        HIJRI_MONTH_SHORT_NAMES[self.0 as usize]
    }

    /// The following month, and whether the year rolled over
    pub const fn next(self) -> (Self, bool) {
        if self.0 == LAST_MONTH {
            (Self::FIRST, true)
        } else {
            (Self(self.0 + 1), false)
        }
    }

    /// The preceding month, and whether the year rolled back
    pub const fn previous(self) -> (Self, bool) {
        if self.0 == 0 {
            (Self::LAST, true)
        } else {
            (Self(self.0 - 1), false)
        }
    }
}

impl TryFrom<u8> for HijriMonth {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HijriMonth> for u8 {
    fn from(month: HijriMonth) -> Self {
        month.0
    }
}

impl fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

/// Day of the week, numbered from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday,
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
}

impl Weekday {
    const ALL: [Self; DAYS_IN_WEEK] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Weekday for a Sunday-based index; wraps modulo 7
    pub const fn from_sunday_index(index: usize) -> Self {
        Self::ALL[index % DAYS_IN_WEEK]
    }

    pub const fn sunday_index(self) -> usize {
        self as usize
    }

    /// Three-letter abbreviation
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }
}

/// Which weekday occupies the first column of a rendered week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    #[display(fmt = "sunday")]
    Sunday,
    #[display(fmt = "monday")]
    Monday,
}

impl WeekStart {
    /// Column (0..7) of the civil day containing `ajd`.
    ///
    /// Equivalent to `floor((ajd + 1.5) mod 7)` for Sunday-first weeks and
    /// `floor((ajd + 0.5) mod 7)` for Monday-first weeks.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn column(self, ajd: f64) -> usize {
        let day_number = (ajd + 0.5).floor() as i64;
        let shift = match self {
            Self::Sunday => 1,
            Self::Monday => 0,
        };
        (day_number + shift).rem_euclid(DAYS_IN_WEEK as i64) as usize
    }

    /// Weekday shown in the given column.
    pub const fn weekday_at(self, column: usize) -> Weekday {
        match self {
            Self::Sunday => Weekday::from_sunday_index(column),
            Self::Monday => Weekday::from_sunday_index(column + 1),
        }
    }

    /// Column headers in display order.
    pub fn weekday_headers(self) -> [Weekday; DAYS_IN_WEEK] {
        std::array::from_fn(|column| self.weekday_at(column))
    }
}

// Helper functions

/// True when `year % 30` is one of the eleven leap remainders.
pub fn is_leap_year(year: u32) -> bool {
    LEAP_YEAR_REMAINDERS.contains(&(year % CYCLE_YEARS))
}

/// Even-indexed months have 30 days, odd-indexed 29, except the last month
/// which gains a day in leap years.
pub fn days_in_month(year: u32, month: HijriMonth) -> u8 {
    if month.get() % 2 == 0 || (month == HijriMonth::LAST && is_leap_year(year)) {
        LONG_MONTH_DAYS
    } else {
        SHORT_MONTH_DAYS
    }
}
