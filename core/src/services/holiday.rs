use std::collections::BTreeSet;

use chrono::NaiveDate;

/// UK bank holidays plus the Christmas Eve / New Year's Eve closures.
///
/// Literal dates, not rules: extend this list before the last entry passes.
const DEFAULT_HOLIDAYS: &[(i32, u32, u32)] = &[
    (2025, 4, 18),
    (2025, 4, 21),
    (2025, 5, 5),
    (2025, 5, 26),
    (2025, 8, 25),
    (2025, 12, 24),
    (2025, 12, 25),
    (2025, 12, 26),
    (2025, 12, 31),
    (2026, 1, 1),
    (2026, 4, 3),
    (2026, 4, 6),
    (2026, 5, 4),
    (2026, 5, 25),
    (2026, 8, 31),
    (2026, 12, 24),
    (2026, 12, 25),
    (2026, 12, 28),
    (2026, 12, 31),
    (2027, 1, 1),
    (2027, 3, 26),
    (2027, 3, 29),
    (2027, 5, 3),
    (2027, 5, 31),
    (2027, 8, 30),
    (2027, 12, 24),
    (2027, 12, 27),
    (2027, 12, 28),
    (2027, 12, 31),
];

/// Fixed set of non-business dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn uk_default() -> Self {
        DEFAULT_HOLIDAYS
            .iter()
            .filter_map(|&(year, month, day)| NaiveDate::from_ymd_opt(year, month, day))
            .collect()
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Holidays in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// The latest date the hardcoded list knows about.
    pub fn last_covered(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// True once `today` is past the last listed holiday. An empty calendar
    /// never expires.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.last_covered().is_some_and(|last| today > last)
    }
}

impl FromIterator<NaiveDate> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self::new(iter)
    }
}
