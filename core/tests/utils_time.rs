use chrono::{Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use storefront_core::utils::time::time_until;

fn wall(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn fall_back_night_gains_an_hour() {
    let tz: Tz = "Europe/London".parse().unwrap();
    // Sat 2026-10-24 22:00 BST; clocks go back at 02:00 on Sunday
    let now = Utc
        .with_ymd_and_hms(2026, 10, 24, 21, 0, 0)
        .unwrap()
        .with_timezone(&tz);
    assert_eq!(now.naive_local(), wall(2026, 10, 24, 22, 0));
    assert_eq!(time_until(&now, wall(2026, 10, 25, 21, 0)), Duration::hours(24));
}

#[test]
fn ambiguous_reading_uses_first_occurrence() {
    let tz: Tz = "Europe/London".parse().unwrap();
    let now = Utc
        .with_ymd_and_hms(2026, 10, 24, 23, 0, 0)
        .unwrap()
        .with_timezone(&tz);
    // 01:30 happens twice; the BST one is 00:30 UTC
    assert_eq!(
        time_until(&now, wall(2026, 10, 25, 1, 30)),
        Duration::minutes(90)
    );
}

#[test]
fn past_reading_is_negative() {
    let tz: Tz = "America/New_York".parse().unwrap();
    let now = Utc
        .with_ymd_and_hms(2025, 6, 14, 1, 0, 0)
        .unwrap()
        .with_timezone(&tz);
    assert_eq!(now.naive_local(), wall(2025, 6, 13, 21, 0));
    assert_eq!(time_until(&now, wall(2025, 6, 13, 20, 0)), -Duration::hours(1));
}
