pub mod business_day;
pub mod dispatch;
pub mod holiday;

pub use business_day::{BusinessDayWalker, DayStatus};
pub use dispatch::DispatchEstimator;
pub use holiday::HolidayCalendar;
