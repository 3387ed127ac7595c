//! Business-time arithmetic over a weekly schedule of open hours, weekly breaks and dated
//! holidays.
//!
//! Instants are `chrono::NaiveDateTime`s already resolved to the schedule's timezone, and
//! everything is counted in whole minutes.

pub mod calculation;
pub mod config;
pub mod day_of_week;
pub mod day_time;
pub mod day_time_segment;
pub mod duration;
pub mod errors;
pub mod schedule;
pub mod time_segment;
pub mod week_time;
pub mod week_time_segment;

pub use config::ScheduleConfig;
pub use day_of_week::DayOfWeek;
pub use day_time::DayTime;
pub use day_time_segment::DayTimeSegment;
pub use duration::BusinessDuration;
pub use errors::{BizError, BizResult};
pub use schedule::{Holiday, Schedule};
pub use time_segment::{truncate_to_minute, TimeSegment};
pub use week_time::WeekTime;
pub use week_time_segment::WeekTimeSegment;
