use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, RANGE_SEPARATOR, prelude::*};

/// An inclusive range of Hijri years that month navigation may reach.
/// The start year must be at least 1 and no greater than the end year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct YearRange {
    start: u32,
    end:   u32,
}

/// Error type for year range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start year is after end year.
    #[error("Invalid year range: start ({start}) is after end ({end})")]
    InvalidRange { start: u32, end: u32 },

    /// Hijri years start at 1.
    #[error("Invalid year range: start year must be at least 1")]
    ZeroStart,

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl YearRange {
    /// Creates a new year range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end and
    /// `RangeError::ZeroStart` if start is 0.
    pub fn new(start: u32, end: u32) -> Result<Self, RangeError> {
        if start == 0 {
            return Err(RangeError::ZeroStart);
        }
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the lowest year of the range
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Returns the highest year of the range
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Checks if the range contains a given year
    pub const fn contains(&self, year: u32) -> bool {
        self.start <= year && year <= self.end
    }

    /// Nearest year inside the range
    pub fn clamp(&self, year: u32) -> u32 {
        year.clamp(self.start, self.end)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_MIN_YEAR,
            end:   DEFAULT_MAX_YEAR,
        }
    }
}

impl FromStr for YearRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let parse = |part: &str| {
                    part.trim()
                        .parse::<u32>()
                        .map_err(|_| RangeError::InvalidFormat(part.trim().to_owned()))
                };

                Self::new(parse(start_str)?, parse(end_str)?)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for YearRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
