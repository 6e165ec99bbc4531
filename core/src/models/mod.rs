//! Value types shared by the calendar services and the presenter.

pub mod dispatch;

pub use dispatch::{CutoffPolicy, DispatchEstimate, LeadTimeWindow};
