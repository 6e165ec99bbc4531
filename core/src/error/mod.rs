use thiserror::Error;

/// Problems found while resolving widget options.
///
/// None of these are fatal: every offending option falls back to its
/// default and the error is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("options payload is not a JSON object: {0}")]
    Malformed(String),
    #[error("option `{field}` has the wrong type: {reason}")]
    WrongType { field: &'static str, reason: String },
    #[error("option `{field}` must be a whole number >= 0, got {value}")]
    NotACount { field: &'static str, value: String },
    #[error("courierMin ({min}) must not exceed courierMax ({max})")]
    InvertedLeadTime { min: u32, max: u32 },
    #[error("invalid cutoff time `{0}`, expected HH:MM")]
    InvalidCutoff(String),
    #[error("invalid holiday date `{0}`, expected YYYY-MM-DD")]
    InvalidHoliday(String),
    #[error("invalid time zone `{0}`")]
    InvalidTimeZone(String),
}
