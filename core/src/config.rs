use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::models::dispatch::{CutoffPolicy, LeadTimeWindow};
use crate::services::holiday::HolidayCalendar;

/// Raw widget options as the page supplies them. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchOptions {
    #[serde(default)]
    pub holidays: Option<Vec<String>>,
    #[serde(default)]
    pub courier_min: Option<f64>,
    #[serde(default)]
    pub courier_max: Option<f64>,
    #[serde(default)]
    pub cutoff: Option<String>,
    #[serde(default)]
    pub tracked_threshold: Option<f64>,
    #[serde(default)]
    pub express: Option<bool>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl DispatchOptions {
    /// Reads options field by field so one bad value does not discard the
    /// rest.
    pub fn from_value(value: &Value) -> (Self, Vec<ConfigError>) {
        let mut fields = match OptionFields::from_value(value) {
            Ok(fields) => fields,
            Err(err) => return (Self::default(), vec![err]),
        };

        let options = Self {
            holidays: fields.get("holidays"),
            courier_min: fields.get("courierMin"),
            courier_max: fields.get("courierMax"),
            cutoff: fields.get("cutoff"),
            tracked_threshold: fields.get("trackedThreshold"),
            express: fields.get("express"),
            time_zone: fields.get("timeZone"),
        };
        (options, fields.into_errors())
    }
}

/// Lenient typed access to a JSON options object.
///
/// Missing and `null` entries read as `None`; entries of the wrong type read
/// as `None` and record a [`ConfigError`].
#[derive(Debug)]
pub struct OptionFields<'a> {
    map: Option<&'a Map<String, Value>>,
    errors: Vec<ConfigError>,
}

impl<'a> OptionFields<'a> {
    pub fn from_value(value: &'a Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(map) => Ok(Self {
                map: Some(map),
                errors: Vec::new(),
            }),
            Value::Null => Ok(Self {
                map: None,
                errors: Vec::new(),
            }),
            other => Err(ConfigError::Malformed(other.to_string())),
        }
    }

    pub fn get<T: DeserializeOwned>(&mut self, field: &'static str) -> Option<T> {
        let raw = self.map?.get(field)?;
        if raw.is_null() {
            return None;
        }
        match serde_json::from_value(raw.clone()) {
            Ok(value) => Some(value),
            Err(err) => {
                self.errors.push(ConfigError::WrongType {
                    field,
                    reason: err.to_string(),
                });
                None
            }
        }
    }

    pub fn into_errors(self) -> Vec<ConfigError> {
        self.errors
    }
}

/// Validated configuration with every default filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchConfig {
    pub holidays: HolidayCalendar,
    pub lead_time: LeadTimeWindow,
    pub cutoff: CutoffPolicy,
    pub tracked_threshold: u32,
    pub express: bool,
    /// `None` means the browser's local time.
    pub time_zone: Option<Tz>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            holidays: HolidayCalendar::uk_default(),
            lead_time: LeadTimeWindow::default(),
            cutoff: CutoffPolicy::default(),
            tracked_threshold: Self::DEFAULT_TRACKED_THRESHOLD,
            express: false,
            time_zone: None,
        }
    }
}

impl DispatchConfig {
    pub const DEFAULT_TRACKED_THRESHOLD: u32 = 2;

    /// Resolves options, replacing each invalid one with its default.
    pub fn resolve(options: &DispatchOptions) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();
        let defaults = Self::default();

        let holidays = match &options.holidays {
            Some(raw) => parse_holidays(raw, &mut errors),
            None => defaults.holidays,
        };

        let min = count_or(
            options.courier_min,
            "courierMin",
            LeadTimeWindow::DEFAULT_MIN,
            &mut errors,
        );
        let max = count_or(
            options.courier_max,
            "courierMax",
            LeadTimeWindow::DEFAULT_MAX,
            &mut errors,
        );
        let lead_time = LeadTimeWindow::new(min, max).unwrap_or_else(|err| {
            errors.push(err);
            defaults.lead_time
        });

        let cutoff = match options.cutoff.as_deref() {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                errors.push(err);
                defaults.cutoff
            }),
            None => defaults.cutoff,
        };

        let tracked_threshold = count_or(
            options.tracked_threshold,
            "trackedThreshold",
            Self::DEFAULT_TRACKED_THRESHOLD,
            &mut errors,
        );

        let time_zone = options.time_zone.as_deref().and_then(|name| {
            name.trim()
                .parse::<Tz>()
                .map_err(|_| errors.push(ConfigError::InvalidTimeZone(name.to_string())))
                .ok()
        });

        let config = Self {
            holidays,
            lead_time,
            cutoff,
            tracked_threshold,
            express: options.express.unwrap_or(defaults.express),
            time_zone,
        };
        (config, errors)
    }
}

/// Logs every option that had to fall back to its default.
pub fn log_fallbacks(errors: &[ConfigError]) {
    for err in errors {
        tracing::warn!(error = %err, "Falling back to default option");
    }
}

fn parse_holidays(raw: &[String], errors: &mut Vec<ConfigError>) -> HolidayCalendar {
    raw.iter()
        .filter_map(|value| {
            NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                .map_err(|_| errors.push(ConfigError::InvalidHoliday(value.clone())))
                .ok()
        })
        .collect()
}

/// Accepts JS numbers that are whole, finite and non-negative.
pub fn parse_count(value: f64, field: &'static str) -> Result<u32, ConfigError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(ConfigError::NotACount {
            field,
            value: value.to_string(),
        })
    }
}

pub fn count_or(
    value: Option<f64>,
    field: &'static str,
    default: u32,
    errors: &mut Vec<ConfigError>,
) -> u32 {
    match value.map(|value| parse_count(value, field)) {
        Some(Ok(count)) => count,
        Some(Err(err)) => {
            errors.push(err);
            default
        }
        None => default,
    }
}
