//! Configuration shared by every grid built from the same calendar view.

use serde::{Deserialize, Serialize};

use crate::range::YearRange;
use crate::types::WeekStart;

/// Settings for month-grid building and navigation.
///
/// Defaults: years `1000/3000`, weeks starting on Sunday.
///
/// # Example
///
/// ```
/// use hijri_calendar::{CalendarConfig, WeekStart, YearRange};
///
/// let config = CalendarConfig::default()
///     .with_year_range(YearRange::new(1400, 1500).unwrap())
///     .with_week_start(WeekStart::Monday);
///
/// assert_eq!(config.year_range().start(), 1400);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarConfig {
    /// Years that month and year navigation may reach.
    year_range: YearRange,
    /// Weekday shown in the first grid column.
    week_start: WeekStart,
}

impl CalendarConfig {
    pub fn new(year_range: YearRange, week_start: WeekStart) -> Self {
        Self {
            year_range,
            week_start,
        }
    }

    /// Sets the navigable year range.
    pub fn with_year_range(mut self, year_range: YearRange) -> Self {
        self.year_range = year_range;
        self
    }

    /// Sets the first weekday of each rendered week.
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub const fn year_range(&self) -> YearRange {
        self.year_range
    }

    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }
}
