//! Paging between month grids within the configured year range.

use tracing::debug;

use crate::grid::CalendarGrid;

/// Outcome of a navigation step.
///
/// Navigation never fails: at the edge of the configured year range the
/// current grid is handed back as `Clamped` instead of wrapping into a year
/// outside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation<T> {
    /// Moved to the adjacent month or year.
    Moved(T),
    /// Stayed in place at a year bound.
    Clamped(T),
}

impl<T> Navigation<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Moved(value) | Self::Clamped(value) => value,
        }
    }

    pub const fn get(&self) -> &T {
        match self {
            Self::Moved(value) | Self::Clamped(value) => value,
        }
    }

    pub const fn is_clamped(&self) -> bool {
        matches!(self, Self::Clamped(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Navigation<U> {
        match self {
            Self::Moved(value) => Navigation::Moved(f(value)),
            Self::Clamped(value) => Navigation::Clamped(f(value)),
        }
    }
}

impl CalendarGrid<'_> {
    fn step_year(&self, year: Option<u32>) -> Option<u32> {
        year.filter(|y| self.config().year_range().contains(*y))
    }

    fn clamped(&self, direction: &str) -> Navigation<Self> {
        debug!(
            year = self.year(),
            month = self.month().get(),
            direction,
            "navigation clamped at year bound"
        );
        Navigation::Clamped(*self)
    }

    /// Grid for the previous month; Moharram of the lowest year stays put.
    pub fn previous_month(&self) -> Navigation<Self> {
        let (month, rolled_back) = self.month().previous();
        if !rolled_back {
            return Navigation::Moved(self.with_year_month(self.year(), month));
        }
        match self.step_year(self.year().checked_sub(1)) {
            Some(year) => Navigation::Moved(self.with_year_month(year, month)),
            None => self.clamped("previous month"),
        }
    }

    /// Grid for the next month; Zilhaj of the highest year stays put.
    pub fn next_month(&self) -> Navigation<Self> {
        let (month, rolled_over) = self.month().next();
        if !rolled_over {
            return Navigation::Moved(self.with_year_month(self.year(), month));
        }
        match self.step_year(self.year().checked_add(1)) {
            Some(year) => Navigation::Moved(self.with_year_month(year, month)),
            None => self.clamped("next month"),
        }
    }

    /// Same month one year earlier, unless already at the lowest year.
    pub fn previous_year(&self) -> Navigation<Self> {
        match self.step_year(self.year().checked_sub(1)) {
            Some(year) => Navigation::Moved(self.with_year_month(year, self.month())),
            None => self.clamped("previous year"),
        }
    }

    /// Same month one year later, unless already at the highest year.
    pub fn next_year(&self) -> Navigation<Self> {
        match self.step_year(self.year().checked_add(1)) {
            Some(year) => Navigation::Moved(self.with_year_month(year, self.month())),
            None => self.clamped("next year"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CalendarConfig, EventBook, HijriDate, YearRange};

    fn position(nav: &Navigation<CalendarGrid<'_>>) -> (u32, u8) {
        (nav.get().year(), nav.get().month().get())
    }

    fn bounded<'a>(year: u32, month: u8, events: &'a EventBook) -> CalendarGrid<'a> {
        let config = CalendarConfig::default().with_year_range(YearRange::new(1445, 1446).unwrap());
        let today = HijriDate::new(1445, 7, 15).unwrap();
        CalendarGrid::new(year, month, today, config, events).unwrap()
    }

    #[test]
    fn test_month_steps_within_year() {
        let events = EventBook::default();
        let grid = bounded(1445, 5, &events);

        let prev = grid.previous_month();
        assert!(!prev.is_clamped());
        assert_eq!(position(&prev), (1445, 4));

        let next = grid.next_month();
        assert!(matches!(next, Navigation::Moved(_)));
        assert_eq!(position(&next), (1445, 6));
    }

    #[test]
    fn test_month_steps_across_years() {
        let events = EventBook::default();
        assert_eq!(position(&bounded(1445, 11, &events).next_month()), (1446, 0));
        assert_eq!(position(&bounded(1446, 0, &events).previous_month()), (1445, 11));
    }

    #[test]
    fn test_month_steps_clamp_at_bounds() {
        let events = EventBook::default();

        let prev = bounded(1445, 0, &events).previous_month();
        assert!(prev.is_clamped());
        assert_eq!(position(&prev), (1445, 0));

        let next = bounded(1446, 11, &events).next_month();
        assert!(next.is_clamped());
        assert_eq!(position(&next), (1446, 11));
    }

    #[test]
    fn test_year_steps() {
        let events = EventBook::default();

        let next = bounded(1445, 3, &events).next_year();
        assert!(!next.is_clamped());
        assert_eq!(position(&next), (1446, 3));

        assert!(bounded(1446, 3, &events).next_year().is_clamped());
        assert!(bounded(1445, 3, &events).previous_year().is_clamped());
        assert_eq!(position(&bounded(1446, 3, &events).previous_year()), (1445, 3));
    }

    #[test]
    fn test_navigation_keeps_settings() {
        let events = EventBook::default();
        let grid = bounded(1445, 11, &events);
        let next = grid.next_month().into_inner();
        assert_eq!(next.config(), grid.config());
        assert_eq!(next.today(), grid.today());
    }

    #[test]
    fn test_map() {
        let nav = Navigation::Clamped(2).map(|v| v * 10);
        assert_eq!(nav, Navigation::Clamped(20));
        assert_eq!(Navigation::Moved("a").map(str::len).into_inner(), 1);
    }

    #[test]
    fn test_filler_at_lower_bound_comes_from_same_month() {
        let events = EventBook::default();
        // 1445-01-01 is a Tuesday: two filler days, borrowed from the clamped month itself
        let grid = bounded(1445, 0, &events);
        let previous = grid.previous_days().unwrap();
        assert_eq!(previous.len(), 2);
        assert_eq!(previous[0].date(), HijriDate::new(1445, 0, 29).unwrap());
        assert!(previous.iter().all(|d| d.is_filler()));
        assert_eq!(grid.weeks().unwrap().concat().len() % 7, 0);
    }
}
