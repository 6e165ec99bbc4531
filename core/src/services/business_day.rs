use chrono::{Datelike, NaiveDate, Weekday};

use super::holiday::HolidayCalendar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    BusinessDay,
    Weekend,
    Holiday,
}

impl DayStatus {
    pub fn is_business_day(&self) -> bool {
        matches!(self, DayStatus::BusinessDay)
    }
}

/// Walks the calendar one day at a time, skipping weekends and holidays.
#[derive(Debug, Clone, Default)]
pub struct BusinessDayWalker {
    holidays: HolidayCalendar,
}

impl BusinessDayWalker {
    pub fn new(holidays: HolidayCalendar) -> Self {
        Self { holidays }
    }

    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Weekends win over holidays when a listed holiday falls on Sat/Sun.
    pub fn day_status(&self, date: NaiveDate) -> DayStatus {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            DayStatus::Weekend
        } else if self.holidays.is_holiday(date) {
            DayStatus::Holiday
        } else {
            DayStatus::BusinessDay
        }
    }

    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        self.day_status(date).is_business_day()
    }

    /// Earliest business day strictly after `date`.
    pub fn next_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut cursor = date;
        while let Some(next) = cursor.succ_opt() {
            cursor = next;
            if self.is_business_day(cursor) {
                break;
            }
        }
        cursor
    }

    /// `date` itself when it is a business day, otherwise the next one.
    pub fn ensure_business_day(&self, date: NaiveDate) -> NaiveDate {
        if self.is_business_day(date) {
            date
        } else {
            self.next_business_day(date)
        }
    }

    /// The date of the `n`-th business day after `date`; `n == 0` is the
    /// identity.
    pub fn add_business_days(&self, date: NaiveDate, n: u32) -> NaiveDate {
        let mut cursor = date;
        let mut remaining = n;
        while remaining > 0 {
            match cursor.succ_opt() {
                Some(next) => cursor = next,
                None => break,
            }
            if self.is_business_day(cursor) {
                remaining -= 1;
            }
        }
        cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn christmas_walker() -> BusinessDayWalker {
        BusinessDayWalker::new(HolidayCalendar::new([date(2025, 12, 25), date(2025, 12, 26)]))
    }

    #[test]
    fn day_status_classifies_weekend_holiday_and_working_days() {
        let walker = christmas_walker();
        assert_eq!(walker.day_status(date(2025, 12, 24)), DayStatus::BusinessDay);
        assert_eq!(walker.day_status(date(2025, 12, 25)), DayStatus::Holiday);
        assert_eq!(walker.day_status(date(2025, 12, 27)), DayStatus::Weekend);
    }

    #[test]
    fn holiday_on_a_weekend_reports_weekend() {
        let walker = BusinessDayWalker::new(HolidayCalendar::new([date(2025, 6, 14)]));
        assert_eq!(walker.day_status(date(2025, 6, 14)), DayStatus::Weekend);
    }

    #[test]
    fn next_business_day_skips_holidays_and_weekend() {
        let walker = christmas_walker();
        assert_eq!(walker.next_business_day(date(2025, 12, 24)), date(2025, 12, 29));
    }

    #[test]
    fn next_business_day_never_returns_input() {
        let walker = BusinessDayWalker::default();
        let tuesday = date(2025, 6, 10);
        assert_eq!(walker.next_business_day(tuesday), date(2025, 6, 11));
    }

    #[test]
    fn ensure_business_day_keeps_business_days() {
        let walker = christmas_walker();
        assert_eq!(walker.ensure_business_day(date(2025, 12, 24)), date(2025, 12, 24));
        assert_eq!(walker.ensure_business_day(date(2025, 12, 25)), date(2025, 12, 29));
    }

    #[test]
    fn add_zero_business_days_is_identity_even_on_weekend() {
        let walker = BusinessDayWalker::default();
        let saturday = date(2025, 6, 14);
        assert_eq!(walker.add_business_days(saturday, 0), saturday);
    }

    #[test]
    fn add_business_days_counts_only_business_days() {
        let walker = christmas_walker();
        assert_eq!(walker.add_business_days(date(2025, 12, 23), 1), date(2025, 12, 24));
        assert_eq!(walker.add_business_days(date(2025, 12, 23), 2), date(2025, 12, 29));
        assert_eq!(walker.add_business_days(date(2025, 12, 23), 4), date(2025, 12, 31));
    }

    #[test]
    fn walking_stops_at_the_end_of_the_calendar() {
        let walker = BusinessDayWalker::default();
        assert_eq!(walker.next_business_day(NaiveDate::MAX), NaiveDate::MAX);
        assert_eq!(walker.add_business_days(NaiveDate::MAX, 3), NaiveDate::MAX);
    }
}
