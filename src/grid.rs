//! Month grids: a Hijri month laid out in complete seven-day weeks.
//!
//! The first and last rows are padded with filler days borrowed from the
//! neighboring months so every row has exactly seven days.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::CalendarConfig;
use crate::consts::{DAYS_IN_WEEK, MIN_DAY};
use crate::error::DateError;
use crate::event::{DailyDua, EventBook, Miqaat};
use crate::format::gregorian_month_name;
use crate::julian_day::GregorianDateTime;
use crate::types::{HijriMonth, Weekday, days_in_month};
use crate::HijriDate;

/// One cell of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay<'a> {
    date:             HijriDate,
    gregorian:        GregorianDateTime,
    is_current_month: bool,
    is_today:         bool,
    filler:           bool,
    miqaats:          Vec<&'a Miqaat>,
    daily_duas:       Vec<&'a DailyDua>,
}

impl<'a> CalendarDay<'a> {
    pub const fn date(&self) -> HijriDate {
        self.date
    }

    /// Civil date at the start of this Hijri day
    pub const fn gregorian(&self) -> GregorianDateTime {
        self.gregorian
    }

    pub const fn is_current_month(&self) -> bool {
        self.is_current_month
    }

    pub const fn is_today(&self) -> bool {
        self.is_today
    }

    /// True for days borrowed from a neighboring month to complete a week
    pub const fn is_filler(&self) -> bool {
        self.filler
    }

    pub fn miqaats(&self) -> &[&'a Miqaat] {
        &self.miqaats
    }

    pub fn daily_duas(&self) -> &[&'a DailyDua] {
        &self.daily_duas
    }

    pub fn has_miqaats(&self) -> bool {
        !self.miqaats.is_empty()
    }

    pub fn has_daily_duas(&self) -> bool {
        !self.daily_duas.is_empty()
    }

    fn into_filler(self) -> Self {
        Self {
            is_current_month: false,
            filler: true,
            ..self
        }
    }
}

/// Builder for the weeks of one Hijri month.
///
/// A grid borrows the event book; the days it produces borrow the matched
/// records from it.
#[derive(Debug, Clone, Copy)]
pub struct CalendarGrid<'a> {
    year:   u32,
    month:  HijriMonth,
    today:  HijriDate,
    config: CalendarConfig,
    events: &'a EventBook,
}

impl<'a> CalendarGrid<'a> {
    /// Creates a grid for a 0-based month of a year within the configured range.
    ///
    /// `today` is the reference date used for the `is_today` flag.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for a month index above 11 and
    /// `DateError::YearOutOfRange` if the year is outside the configured range.
    pub fn new(
        year: u32,
        month: u8,
        today: HijriDate,
        config: CalendarConfig,
        events: &'a EventBook,
    ) -> Result<Self, DateError> {
        let month = HijriMonth::new(month)?;
        let range = config.year_range();
        if !range.contains(year) {
            return Err(DateError::YearOutOfRange { year, range });
        }
        debug!(year, month = month.get(), "creating calendar grid");
        Ok(Self {
            year,
            month,
            today,
            config,
            events,
        })
    }

    /// Grid for the month containing `today`, with the year clamped into the
    /// configured range.
    pub fn for_today(today: HijriDate, config: CalendarConfig, events: &'a EventBook) -> Self {
        Self {
            year: config.year_range().clamp(today.year()),
            month: today.month_typed(),
            today,
            config,
            events,
        }
    }

    pub const fn year(&self) -> u32 {
        self.year
    }

    pub const fn month(&self) -> HijriMonth {
        self.month
    }

    pub const fn today(&self) -> HijriDate {
        self.today
    }

    pub const fn config(&self) -> CalendarConfig {
        self.config
    }

    pub const fn events(&self) -> &'a EventBook {
        self.events
    }

    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Same settings, different year and month.
    pub(crate) const fn with_year_month(&self, year: u32, month: HijriMonth) -> Self {
        Self {
            year,
            month,
            ..*self
        }
    }

    /// The year range guarantees `year >= 1`, so every day in `1..=days_in_month` is valid.
    const fn date_unchecked(&self, day: u8) -> HijriDate {
        HijriDate {
            year: self.year,
            month: self.month,
            day,
        }
    }

    /// Grid column (0..7) of a day of this month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day does not exist in this month.
    pub fn day_of_week(&self, day: u8) -> Result<usize, DateError> {
        let date = HijriDate::from_parts(self.year, self.month, day)?;
        Ok(self.config.week_start().column(date.to_ajd()))
    }

    fn first_column(&self) -> usize {
        self.config
            .week_start()
            .column(self.date_unchecked(MIN_DAY).to_ajd())
    }

    fn build_day(&self, date: HijriDate) -> Result<CalendarDay<'a>, DateError> {
        Ok(CalendarDay {
            date,
            gregorian: date.to_gregorian()?,
            is_current_month: true,
            is_today: date == self.today,
            filler: false,
            miqaats: self.events.miqaats_on(date).collect(),
            daily_duas: self.events.daily_duas_on(date).collect(),
        })
    }

    /// Every day of this month with its matched events.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if a civil date cannot be represented.
    pub fn days(&self) -> Result<Vec<CalendarDay<'a>>, DateError> {
        (MIN_DAY..=self.days_in_month())
            .map(|day| self.build_day(self.date_unchecked(day)))
            .collect()
    }

    /// Trailing days of the previous month that fill the first week.
    ///
    /// # Errors
    /// See [`CalendarGrid::days`].
    pub fn previous_days(&self) -> Result<Vec<CalendarDay<'a>>, DateError> {
        let count = self.first_column();
        let mut days = self.previous_month().into_inner().days()?;
        let skip = days.len().saturating_sub(count);
        Ok(days.drain(skip..).map(CalendarDay::into_filler).collect())
    }

    /// Leading days of the next month that fill the last week.
    ///
    /// # Errors
    /// See [`CalendarGrid::days`].
    pub fn next_days(&self) -> Result<Vec<CalendarDay<'a>>, DateError> {
        let used = self.first_column() + usize::from(self.days_in_month());
        let count = (DAYS_IN_WEEK - used % DAYS_IN_WEEK) % DAYS_IN_WEEK;
        let days = self.next_month().into_inner().days()?;
        Ok(days
            .into_iter()
            .take(count)
            .map(CalendarDay::into_filler)
            .collect())
    }

    /// The month as complete weeks, filler days included.
    ///
    /// # Errors
    /// See [`CalendarGrid::days`].
    #[tracing::instrument(skip(self), fields(year = self.year, month = self.month.get()))]
    pub fn weeks(&self) -> Result<Vec<Vec<CalendarDay<'a>>>, DateError> {
        let mut cells = self.previous_days()?;
        cells.extend(self.days()?);
        cells.extend(self.next_days()?);

        let mut weeks = Vec::with_capacity(cells.len() / DAYS_IN_WEEK);
        let mut cells = cells.into_iter();
        loop {
            let week: Vec<_> = cells.by_ref().take(DAYS_IN_WEEK).collect();
            if week.is_empty() {
                break;
            }
            weeks.push(week);
        }

        debug!(weeks = weeks.len(), "built month grid");
        Ok(weeks)
    }

    /// Column headers in display order.
    pub fn weekday_headers(&self) -> [Weekday; DAYS_IN_WEEK] {
        self.config.week_start().weekday_headers()
    }

    /// Heading such as `Shabaan al-Karim 1445`.
    pub fn title(&self) -> String {
        format!("{} {}", self.month.long_name(), self.year)
    }

    /// The Gregorian month(s) this Hijri month overlaps.
    ///
    /// # Errors
    /// See [`CalendarGrid::days`].
    pub fn gregorian_span(&self) -> Result<GregorianSpan, DateError> {
        let first = self.date_unchecked(MIN_DAY).to_gregorian()?;
        let last = self.date_unchecked(self.days_in_month()).to_gregorian()?;
        Ok(GregorianSpan::new(&first, &last))
    }
}

/// The one or two Gregorian months covered by a Hijri month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GregorianSpan {
    start: (i32, u8),
    end:   (i32, u8),
}

impl GregorianSpan {
    pub fn new(first: &GregorianDateTime, last: &GregorianDateTime) -> Self {
        Self {
            start: (first.year(), first.month()),
            end:   (last.year(), last.month()),
        }
    }

    /// `(year, month)` of the first day
    pub const fn start(&self) -> (i32, u8) {
        self.start
    }

    /// `(year, month)` of the last day
    pub const fn end(&self) -> (i32, u8) {
        self.end
    }

    pub fn is_single_month(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for GregorianSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start_year, start_month) = self.start;
        let (end_year, end_month) = self.end;
        if self.is_single_month() {
            write!(f, "{} {start_year}", gregorian_month_name(start_month))
        } else if start_year == end_year {
            write!(
                f,
                "{} / {} {end_year}",
                gregorian_month_name(start_month),
                gregorian_month_name(end_month)
            )
        } else {
            write!(
                f,
                "{} {start_year} / {} {end_year}",
                gregorian_month_name(start_month),
                gregorian_month_name(end_month)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{WeekStart, YearRange};

    fn hijri(year: u32, month: u8, day: u8) -> HijriDate {
        HijriDate::new(year, month, day).unwrap()
    }

    fn miqaat(id: &str, date: u8, month: u8) -> Miqaat {
        Miqaat {
            id: id.to_owned(),
            name: format!("Miqaat {id}"),
            date,
            month,
            description: None,
            location: None,
            important: false,
            phase: "day".to_owned(),
            kind: "urs".to_owned(),
        }
    }

    fn daily_dua(id: &str, date: u8, month: u8) -> DailyDua {
        DailyDua {
            id: id.to_owned(),
            date,
            month,
            library_reference: format!("library/{id}"),
            note: None,
        }
    }

    fn grid<'a>(year: u32, month: u8, events: &'a EventBook) -> CalendarGrid<'a> {
        CalendarGrid::new(year, month, hijri(1445, 7, 15), CalendarConfig::default(), events).unwrap()
    }

    #[test]
    fn test_new_validation() {
        let events = EventBook::default();
        let today = hijri(1445, 7, 15);
        let config = CalendarConfig::default();
        assert!(matches!(
            CalendarGrid::new(1445, 12, today, config, &events),
            Err(DateError::InvalidMonth(12))
        ));
        assert!(matches!(
            CalendarGrid::new(999, 0, today, config, &events),
            Err(DateError::YearOutOfRange { year: 999, .. })
        ));
        assert!(CalendarGrid::new(3000, 11, today, config, &events).is_ok());
    }

    #[test]
    fn test_for_today() {
        let events = EventBook::default();
        let grid = CalendarGrid::for_today(hijri(1445, 7, 15), CalendarConfig::default(), &events);
        assert_eq!((grid.year(), grid.month().get()), (1445, 7));

        let narrow = CalendarConfig::default().with_year_range(YearRange::new(1400, 1420).unwrap());
        let grid = CalendarGrid::for_today(hijri(1445, 7, 15), narrow, &events);
        assert_eq!((grid.year(), grid.month().get()), (1420, 7));
    }

    #[test]
    fn test_days() {
        let events = EventBook::default();
        let days = grid(1445, 7, &events).days().unwrap();
        assert_eq!(days.len(), 29);
        assert_eq!(days[0].date(), hijri(1445, 7, 1));
        assert_eq!(days[0].gregorian().date(), (2024, 2, 10));
        assert!(days.iter().all(|d| d.is_current_month() && !d.is_filler()));

        let today: Vec<_> = days.iter().filter(|d| d.is_today()).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date().day(), 15);
    }

    #[test]
    fn test_day_of_week() {
        let events = EventBook::default();
        let sunday_first = grid(1445, 7, &events);
        // 1445-08-01 is Saturday 2024-02-10
        assert_eq!(sunday_first.day_of_week(1).unwrap(), 6);
        assert_eq!(sunday_first.day_of_week(2).unwrap(), 0);
        assert!(sunday_first.day_of_week(30).is_err());

        let config = CalendarConfig::default().with_week_start(WeekStart::Monday);
        let monday_first = CalendarGrid::new(1445, 7, hijri(1445, 7, 15), config, &events).unwrap();
        assert_eq!(monday_first.day_of_week(1).unwrap(), 5);
    }

    #[test]
    fn test_weeks_layout() {
        let events = EventBook::default();
        let weeks = grid(1445, 7, &events).weeks().unwrap();
        // six days from Rajab, then 29 days of Shabaan
        assert_eq!(weeks.len(), 5);
        assert!(weeks.iter().all(|w| w.len() == 7));

        let first_week = &weeks[0];
        assert_eq!(first_week[0].date(), hijri(1445, 6, 25));
        assert!(first_week[..6].iter().all(|d| d.is_filler() && !d.is_current_month()));
        assert_eq!(first_week[6].date(), hijri(1445, 7, 1));
        assert!(!first_week[6].is_filler());
        assert_eq!(weeks[4][6].date(), hijri(1445, 7, 29));
    }

    #[test]
    fn test_weeks_layout_monday_start() {
        let events = EventBook::default();
        let config = CalendarConfig::default().with_week_start(WeekStart::Monday);
        let grid = CalendarGrid::new(1445, 7, hijri(1445, 7, 15), config, &events).unwrap();

        let next = grid.next_days().unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].date(), hijri(1445, 8, 1));
        assert!(next[0].is_filler());

        let weeks = grid.weeks().unwrap();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0].date(), hijri(1445, 6, 26));
        assert_eq!(grid.weekday_headers()[0], Weekday::Monday);
    }

    #[test]
    fn test_miqaat_overlay() {
        let events = EventBook::new([miqaat("m1", 10, 3)], []);

        let days = grid(1445, 2, &events).days().unwrap();
        let tenth = &days[9];
        assert_eq!(tenth.date().day(), 10);
        assert!(tenth.has_miqaats());
        assert_eq!(tenth.miqaats()[0].id, "m1");
        assert_eq!(days.iter().filter(|d| d.has_miqaats()).count(), 1);

        let days = grid(1445, 3, &events).days().unwrap();
        assert!(days.iter().all(|d| !d.has_miqaats()));
    }

    #[test]
    fn test_daily_dua_overlay() {
        let events = EventBook::new([], [daily_dua("d1", 5, 2)]);

        let days = grid(1445, 2, &events).days().unwrap();
        assert!(days[4].has_daily_duas());
        assert_eq!(days[4].daily_duas()[0].library_reference, "library/d1");
        assert!(!days[4].has_miqaats());

        let days = grid(1445, 1, &events).days().unwrap();
        assert!(days.iter().all(|d| !d.has_daily_duas()));
    }

    #[test]
    fn test_filler_keeps_events() {
        // Rajab 27 shows up as filler in the Shabaan 1445 grid
        let events = EventBook::new([miqaat("rajab27", 27, 7)], []);
        let weeks = grid(1445, 7, &events).weeks().unwrap();
        let cell = &weeks[0][2];
        assert_eq!(cell.date(), hijri(1445, 6, 27));
        assert!(cell.is_filler());
        assert!(cell.has_miqaats());
    }

    #[test]
    fn test_title_and_span() {
        let events = EventBook::default();
        let shabaan = grid(1445, 7, &events);
        assert_eq!(shabaan.title(), "Shabaan al-Karim 1445");
        assert_eq!(shabaan.gregorian_span().unwrap().to_string(), "February / March 2024");

        let jumada = grid(1445, 5, &events);
        let span = jumada.gregorian_span().unwrap();
        assert_eq!(span.start(), (2023, 12));
        assert_eq!(span.end(), (2024, 1));
        assert_eq!(span.to_string(), "December 2023 / January 2024");
    }

    #[test]
    fn test_span_single_month() {
        let first = GregorianDateTime::new(2024, 3, 1).unwrap();
        let last = GregorianDateTime::new(2024, 3, 30).unwrap();
        let span = GregorianSpan::new(&first, &last);
        assert!(span.is_single_month());
        assert_eq!(span.to_string(), "March 2024");
    }

    #[test]
    fn test_serialize_day() {
        let events = EventBook::new([miqaat("m1", 1, 8)], []);
        let days = grid(1445, 7, &events).days().unwrap();
        let json = serde_json::to_value(&days[0]).unwrap();
        assert_eq!(json["date"], "1445-08-01");
        assert_eq!(json["isCurrentMonth"], true);
        assert_eq!(json["filler"], false);
        assert_eq!(json["miqaats"][0]["id"], "m1");
    }
}
