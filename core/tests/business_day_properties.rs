use chrono::{Datelike, Duration, NaiveDate, Weekday};
use storefront_core::{BusinessDayWalker, HolidayCalendar};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Every day from 2025-01-01 through 2027-12-31.
fn sample_days() -> impl Iterator<Item = NaiveDate> {
    let start = date(2025, 1, 1);
    let end = date(2027, 12, 31);
    start.iter_days().take_while(move |d| *d <= end)
}

fn walker() -> BusinessDayWalker {
    BusinessDayWalker::new(HolidayCalendar::uk_default())
}

#[test]
fn business_day_is_weekday_and_not_holiday() {
    let walker = walker();
    let holidays = walker.holidays().clone();
    for d in sample_days() {
        let weekday = !matches!(d.weekday(), Weekday::Sat | Weekday::Sun);
        assert_eq!(
            walker.is_business_day(d),
            weekday && !holidays.is_holiday(d),
            "mismatch on {d}"
        );
    }
}

#[test]
fn next_business_day_is_the_first_one_after() {
    let walker = walker();
    for d in sample_days() {
        let next = walker.next_business_day(d);
        assert!(next > d, "{next} should be after {d}");
        assert!(walker.is_business_day(next));
        let mut between = d + Duration::days(1);
        while between < next {
            assert!(!walker.is_business_day(between), "{between} skipped from {d}");
            between += Duration::days(1);
        }
    }
}

#[test]
fn ensure_business_day_is_identity_or_next() {
    let walker = walker();
    for d in sample_days() {
        let ensured = walker.ensure_business_day(d);
        if walker.is_business_day(d) {
            assert_eq!(ensured, d);
        } else {
            assert_eq!(ensured, walker.next_business_day(d));
        }
        assert_eq!(walker.ensure_business_day(ensured), ensured);
    }
}

#[test]
fn add_business_days_counts_exactly_n() {
    let walker = walker();
    for d in sample_days().step_by(3) {
        assert_eq!(walker.add_business_days(d, 0), d);
        for n in 1..=8u32 {
            let target = walker.add_business_days(d, n);
            assert!(walker.is_business_day(target));
            let counted = d
                .iter_days()
                .skip(1)
                .take_while(|day| *day <= target)
                .filter(|day| walker.is_business_day(*day))
                .count();
            assert_eq!(counted, n as usize, "from {d} adding {n}");
        }
    }
}

#[test]
fn christmas_run_skips_weekend_and_both_holidays() {
    let christmas = HolidayCalendar::new([date(2025, 12, 25), date(2025, 12, 26)]);
    let walker = BusinessDayWalker::new(christmas);
    assert_eq!(walker.next_business_day(date(2025, 12, 24)), date(2025, 12, 29));
}

#[test]
fn easter_weekend_is_walked_through() {
    let walker = walker();
    // Good Friday 2026-04-03, Easter Monday 2026-04-06
    assert_eq!(walker.next_business_day(date(2026, 4, 2)), date(2026, 4, 7));
    assert_eq!(walker.add_business_days(date(2026, 4, 2), 2), date(2026, 4, 8));
}
