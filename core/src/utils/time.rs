use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};

/// Real time from `now` until the wall-clock reading `until` in the same
/// zone, so a clock change in between is counted.
///
/// An ambiguous reading resolves to its first occurrence. A reading that
/// falls in a skipped hour has no instant and is measured on the wall clock.
pub fn time_until<Z: TimeZone>(now: &DateTime<Z>, until: NaiveDateTime) -> Duration {
    match now.timezone().from_local_datetime(&until).earliest() {
        Some(target) => target - now.clone(),
        None => until - now.naive_local(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn wall(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn utc_matches_wall_clock_difference() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 18, 0, 0).unwrap();
        assert_eq!(time_until(&now, wall(2025, 6, 10, 21, 0)), Duration::hours(3));
    }

    #[test]
    fn spring_forward_loses_an_hour() {
        let tz = chrono_tz::Europe::London;
        let now = Utc
            .with_ymd_and_hms(2026, 3, 28, 22, 0, 0)
            .unwrap()
            .with_timezone(&tz);
        assert_eq!(time_until(&now, wall(2026, 3, 29, 21, 0)), Duration::hours(22));
    }

    #[test]
    fn skipped_reading_falls_back_to_wall_clock() {
        let tz = chrono_tz::Europe::London;
        let now = Utc
            .with_ymd_and_hms(2026, 3, 29, 0, 0, 0)
            .unwrap()
            .with_timezone(&tz);
        // 01:30 does not exist on 2026-03-29 in London
        assert_eq!(
            time_until(&now, wall(2026, 3, 29, 1, 30)),
            Duration::minutes(90)
        );
    }
}
