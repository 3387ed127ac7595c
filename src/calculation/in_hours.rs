use crate::{truncate_to_minute, DayTime, Schedule};
use chrono::NaiveDateTime;

/// Whether an instant is within the hours that apply on its date. Holiday hours stand in for
/// the weekly ones; breaks aren't considered.
pub struct InHours<'a> {
    schedule: &'a Schedule,
    time: NaiveDateTime,
}

impl<'a> InHours<'a> {
    pub fn new(schedule: &'a Schedule, time: NaiveDateTime) -> Self {
        Self {
            schedule,
            time: truncate_to_minute(time),
        }
    }

    pub fn result(&self) -> bool {
        let day_time = DayTime::from_instant(&self.time);
        self.schedule
            .effective_hours(&self.time.date())
            .iter()
            .any(|hours| hours.contains(day_time))
    }
}
