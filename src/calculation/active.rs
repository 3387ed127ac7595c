use crate::calculation::{InHours, OnBreak, OnHoliday};
use crate::{truncate_to_minute, Schedule};
use chrono::NaiveDateTime;

/// Whether the business is open at an instant: in hours, not on a break, and not kept closed by
/// a holiday.
pub struct Active<'a> {
    schedule: &'a Schedule,
    time: NaiveDateTime,
}

impl<'a> Active<'a> {
    pub fn new(schedule: &'a Schedule, time: NaiveDateTime) -> Self {
        Self {
            schedule,
            time: truncate_to_minute(time),
        }
    }

    pub fn result(&self) -> bool {
        InHours::new(self.schedule, self.time).result()
            && !OnBreak::new(self.schedule, self.time).result()
            && !OnHoliday::new(self.schedule, self.time).result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::fixtures::*;

    #[test]
    fn open_during_hours() {
        assert!(Active::new(&office(), at(2, 9, 0)).result());
        assert!(Active::new(&office(), at(2, 16, 59)).result());
        assert!(Active::new(&office(), at(5, 11, 0)).result());
    }

    #[test]
    fn closed_outside_hours() {
        assert!(!Active::new(&office(), at(2, 17, 0)).result());
        assert!(!Active::new(&office(), at(1, 12, 0)).result());
        assert!(!Active::new(&office(), at(7, 12, 0)).result());
    }

    #[test]
    fn closed_on_breaks() {
        assert!(!Active::new(&office(), at(2, 12, 0)).result());
        assert!(Active::new(&office(), at(2, 13, 0)).result());
    }

    #[test]
    fn closed_holidays_close_the_whole_date() {
        let schedule = office();
        for hour in 0..24 {
            assert!(!Active::new(&schedule, at(6, hour, 0)).result());
            assert!(!Active::new(&schedule, at(6, hour, 59)).result());
        }
    }

    #[test]
    fn holiday_hours_decide_partial_days() {
        assert!(Active::new(&office(), at(4, 10, 0)).result());
        assert!(!Active::new(&office(), at(4, 12, 0)).result());
        assert!(!Active::new(&office(), at(4, 9, 0)).result());
    }
}
