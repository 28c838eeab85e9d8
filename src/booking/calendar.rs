//! Month grid for the booking calendar.
//!
//! Only today and tomorrow can be booked; every other day renders but
//! ignores clicks.

use chrono::{Datelike, Months, NaiveDate};

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Today or tomorrow.
pub fn is_bookable(date: NaiveDate, today: NaiveDate) -> bool {
    date == today || today.succ_opt() == Some(date)
}

/// A month being displayed. Always anchored on its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// "Feb 2026"
    pub fn title(&self) -> String {
        format!("{} {}", MONTHS[self.first.month0() as usize], self.first.year())
    }

    pub fn previous(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first;
        if next == self.first {
            // Last representable month
            return 31;
        }
        next.signed_duration_since(self.first).num_days() as u32
    }

    /// Empty cells before the 1st in a Sunday-first grid.
    pub fn leading_blanks(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (1..=self.days_in_month()).filter_map(|day| self.date(day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_only_today_and_tomorrow_are_bookable() {
        let today = ymd(2026, 1, 31);
        assert!(is_bookable(today, today));
        assert!(is_bookable(ymd(2026, 2, 1), today));
        assert!(!is_bookable(ymd(2026, 2, 2), today));
        assert!(!is_bookable(ymd(2026, 1, 30), today));
    }

    #[test]
    fn test_month_shape() {
        let feb = CalendarMonth::containing(ymd(2026, 2, 17));
        assert_eq!(feb.first_day(), ymd(2026, 2, 1));
        assert_eq!(feb.title(), "Feb 2026");
        assert_eq!(feb.days_in_month(), 28);
        // 1 Feb 2026 is a Sunday
        assert_eq!(feb.leading_blanks(), 0);
        assert_eq!(feb.days().count(), 28);

        let leap = CalendarMonth::containing(ymd(2028, 2, 1));
        assert_eq!(leap.days_in_month(), 29);
    }

    #[test]
    fn test_navigation_wraps_years() {
        let jan = CalendarMonth::containing(ymd(2026, 1, 10));
        assert_eq!(jan.previous().title(), "Dec 2025");
        assert_eq!(jan.previous().next(), jan);
        assert_eq!(CalendarMonth::containing(ymd(2026, 12, 5)).next().title(), "Jan 2027");
    }

    #[test]
    fn test_out_of_range_day() {
        let apr = CalendarMonth::containing(ymd(2026, 4, 1));
        assert_eq!(apr.date(31), None);
        assert_eq!(apr.leading_blanks(), 3);
    }
}
