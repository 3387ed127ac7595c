use crate::calculation::Periods;
use crate::{truncate_to_minute, BizError, BizResult, BusinessDuration, Schedule};
use chrono::{Duration, NaiveDateTime};
use std::convert::TryFrom;

/// The instant reached by moving `duration` of business time away from `time`, skipping over
/// everything the schedule is closed for.
///
/// A start outside business hours first rolls to the nearest period in the direction of travel.
/// Going forwards, a duration that exactly uses up a period lands on the start of the next one;
/// going backwards, it lands on the start of the period it used up. So
/// shifting an open instant forwards and then back by the same amount returns it unchanged.
pub struct TimeShift<'a> {
    schedule: &'a Schedule,
    time: NaiveDateTime,
    duration: BusinessDuration,
}

impl<'a> TimeShift<'a> {
    pub fn new(schedule: &'a Schedule, time: NaiveDateTime, duration: BusinessDuration) -> Self {
        Self {
            schedule,
            time: truncate_to_minute(time),
            duration,
        }
    }

    pub fn result(&self) -> BizResult<NaiveDateTime> {
        if self.duration.is_negative() {
            self.backward()
        } else {
            self.forward()
        }
    }

    fn forward(&self) -> BizResult<NaiveDateTime> {
        let reachable = (NaiveDateTime::MAX - self.time).num_minutes();
        let mut remaining = within_reach(self.duration, reachable)?;

        for period in Periods::new(self.schedule).after(self.time) {
            if remaining < period.minutes() {
                return Ok(period.start() + Duration::minutes(remaining));
            }
            remaining -= period.minutes();
        }

        Err(BizError::NoBusinessTime)
    }

    fn backward(&self) -> BizResult<NaiveDateTime> {
        let reachable = (self.time - NaiveDateTime::MIN).num_minutes();
        let mut remaining = within_reach(self.duration, reachable)?;

        for period in Periods::new(self.schedule).before(self.time) {
            if remaining <= period.minutes() {
                return Ok(period.end() - Duration::minutes(remaining));
            }
            remaining -= period.minutes();
        }

        Err(BizError::NoBusinessTime)
    }
}

/// The size of `duration` in minutes, or `NoBusinessTime` if even a schedule open around the
/// clock couldn't cover it before the calendar runs out.
fn within_reach(duration: BusinessDuration, reachable: i64) -> BizResult<i64> {
    i64::try_from(duration.in_minutes().unsigned_abs())
        .ok()
        .filter(|minutes| *minutes <= reachable)
        .ok_or(BizError::NoBusinessTime)
}
