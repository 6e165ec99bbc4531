use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigError;

/// Daily time of day after which new orders roll to the next business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutoffPolicy {
    time: NaiveTime,
}

impl CutoffPolicy {
    pub const DEFAULT_HOUR: u32 = 21;

    pub fn at(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(|time| Self { time })
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// The cutoff instant on `date`.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.time)
    }
}

impl Default for CutoffPolicy {
    fn default() -> Self {
        Self {
            time: NaiveTime::from_hms_opt(Self::DEFAULT_HOUR, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

impl FromStr for CutoffPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map(|time| Self { time })
            .map_err(|_| ConfigError::InvalidCutoff(s.to_string()))
    }
}

/// Customer-facing delivery estimate in business days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadTimeWindow {
    min: u32,
    max: u32,
}

impl LeadTimeWindow {
    pub const DEFAULT_MIN: u32 = 4;
    pub const DEFAULT_MAX: u32 = 6;

    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedLeadTime { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

impl Default for LeadTimeWindow {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// Everything the presenter needs for one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchEstimate {
    pub now: NaiveDateTime,
    pub cutoff: NaiveDateTime,
    pub countdown: Duration,
    pub base_date: NaiveDate,
    pub window: LeadTimeWindow,
    pub delivery_start: NaiveDate,
    pub delivery_end: NaiveDate,
    pub express_date: Option<NaiveDate>,
    pub show_tracked_note: bool,
}
