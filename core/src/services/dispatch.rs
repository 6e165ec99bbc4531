use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::business_day::BusinessDayWalker;
use crate::config::DispatchConfig;
use crate::models::dispatch::{CutoffPolicy, DispatchEstimate, LeadTimeWindow};
use crate::utils::time::time_until;

/// Turns "now" into cutoff, order base date and delivery window.
///
/// Every call is a pure recomputation from its inputs; the only state is a
/// flag so the expired-holiday warning is logged once.
#[derive(Debug)]
pub struct DispatchEstimator {
    walker: BusinessDayWalker,
    cutoff: CutoffPolicy,
    lead_time: LeadTimeWindow,
    tracked_threshold: u32,
    express: bool,
    horizon_warned: AtomicBool,
}

impl DispatchEstimator {
    pub fn new(walker: BusinessDayWalker, cutoff: CutoffPolicy, lead_time: LeadTimeWindow) -> Self {
        Self {
            walker,
            cutoff,
            lead_time,
            tracked_threshold: DispatchConfig::DEFAULT_TRACKED_THRESHOLD,
            express: false,
            horizon_warned: AtomicBool::new(false),
        }
    }

    pub fn from_config(config: &DispatchConfig) -> Self {
        Self {
            tracked_threshold: config.tracked_threshold,
            express: config.express,
            ..Self::new(
                BusinessDayWalker::new(config.holidays.clone()),
                config.cutoff,
                config.lead_time,
            )
        }
    }

    pub fn walker(&self) -> &BusinessDayWalker {
        &self.walker
    }

    pub fn lead_time(&self) -> LeadTimeWindow {
        self.lead_time
    }

    /// Next cutoff at or after `now`. Weekends and holidays are not skipped.
    pub fn current_cutoff(&self, now: NaiveDateTime) -> NaiveDateTime {
        let today = self.cutoff.on(now.date());
        if now <= today {
            return today;
        }
        match now.date().succ_opt() {
            Some(tomorrow) => self.cutoff.on(tomorrow),
            None => today,
        }
    }

    pub fn order_base_date(&self, now: NaiveDateTime) -> NaiveDate {
        let today = now.date();
        let date = if now < self.cutoff.on(today) {
            today
        } else {
            today.succ_opt().unwrap_or(today)
        };
        self.walker.ensure_business_day(date)
    }

    pub fn delivery_window(
        &self,
        base_date: NaiveDate,
        window: LeadTimeWindow,
    ) -> (NaiveDate, NaiveDate) {
        (
            self.walker.add_business_days(base_date, window.min()),
            self.walker.add_business_days(base_date, window.max()),
        )
    }

    /// Time left until the current cutoff on the wall clock, never negative.
    pub fn countdown(&self, now: NaiveDateTime) -> Duration {
        (self.current_cutoff(now) - now).max(Duration::zero())
    }

    /// Real time left until the current cutoff in `now`'s zone, never
    /// negative. Differs from [`Self::countdown`] on clock-change nights.
    pub fn countdown_at<Z: TimeZone>(&self, now: &DateTime<Z>) -> Duration {
        let cutoff = self.current_cutoff(now.naive_local());
        time_until(now, cutoff).max(Duration::zero())
    }

    pub fn express_date(&self, base_date: NaiveDate) -> NaiveDate {
        self.walker.next_business_day(base_date)
    }

    pub fn shows_tracked_note(&self) -> bool {
        self.lead_time.min() >= self.tracked_threshold
    }

    /// Snapshot for a wall-clock reading with no zone attached.
    pub fn estimate(&self, now: NaiveDateTime) -> DispatchEstimate {
        self.snapshot(now, self.countdown(now))
    }

    /// Snapshot for a zoned instant; the countdown is real elapsed time.
    pub fn estimate_at<Z: TimeZone>(&self, now: &DateTime<Z>) -> DispatchEstimate {
        self.snapshot(now.naive_local(), self.countdown_at(now))
    }

    /// Snapshot for `instant` read in `tz`, or in the host's zone for `None`.
    pub fn estimate_instant(&self, instant: DateTime<Utc>, tz: Option<&Tz>) -> DispatchEstimate {
        match tz {
            Some(tz) => self.estimate_at(&instant.with_timezone(tz)),
            None => self.estimate_at(&instant.with_timezone(&Local)),
        }
    }

    fn snapshot(&self, now: NaiveDateTime, countdown: Duration) -> DispatchEstimate {
        self.warn_if_horizon_expired(now.date());

        let base_date = self.order_base_date(now);
        let (delivery_start, delivery_end) = self.delivery_window(base_date, self.lead_time);

        DispatchEstimate {
            now,
            cutoff: self.current_cutoff(now),
            countdown,
            base_date,
            window: self.lead_time,
            delivery_start,
            delivery_end,
            express_date: self.express.then(|| self.express_date(base_date)),
            show_tracked_note: self.shows_tracked_note(),
        }
    }

    /// Returns whether the warning was emitted by this call.
    fn warn_if_horizon_expired(&self, today: NaiveDate) -> bool {
        let holidays = self.walker.holidays();
        if !holidays.is_expired(today) || self.horizon_warned.swap(true, Ordering::Relaxed) {
            return false;
        }
        tracing::warn!(
            last_covered = ?holidays.last_covered(),
            %today,
            "Holiday list has run out; delivery dates ignore holidays from here on"
        );
        true
    }
}

impl Default for DispatchEstimator {
    fn default() -> Self {
        Self::from_config(&DispatchConfig::default())
    }
}
