//! Business-day arithmetic behind the storefront dispatch countdown.
//!
//! Everything here is pure: callers hand in "now" and get dates back.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{DispatchConfig, DispatchOptions};
pub use error::ConfigError;
pub use models::{CutoffPolicy, DispatchEstimate, LeadTimeWindow};
pub use services::{BusinessDayWalker, DayStatus, DispatchEstimator, HolidayCalendar};
