use crate::{truncate_to_minute, Schedule};
use chrono::NaiveDateTime;

/// Whether an instant falls in one of the schedule's weekly breaks.
pub struct OnBreak<'a> {
    schedule: &'a Schedule,
    time: NaiveDateTime,
}

impl<'a> OnBreak<'a> {
    pub fn new(schedule: &'a Schedule, time: NaiveDateTime) -> Self {
        Self {
            schedule,
            time: truncate_to_minute(time),
        }
    }

    pub fn result(&self) -> bool {
        self.schedule
            .breaks()
            .iter()
            .any(|break_| break_.contains(&self.time))
    }
}
