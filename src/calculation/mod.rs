//! Queries against a [`Schedule`](crate::Schedule).
//!
//! Each query is a short-lived value borrowing the schedule: build it with `new`, ask for its
//! `result`, throw it away. None of them hold state between calls.

pub mod active;
pub mod dates;
pub mod duration_within;
pub mod in_hours;
pub mod on_break;
pub mod on_holiday;
pub mod periods;
pub mod time_shift;

pub use active::Active;
pub use dates::Dates;
pub use duration_within::DurationWithin;
pub use in_hours::InHours;
pub use on_break::OnBreak;
pub use on_holiday::OnHoliday;
pub use periods::{PeriodIter, Periods};
pub use time_shift::TimeShift;
