use crate::{truncate_to_minute, DayTime, Holiday, Schedule};
use chrono::NaiveDateTime;

/// Whether a holiday keeps the business closed at an instant: the date is a holiday, and it's
/// either closed all day or the instant is outside that day's holiday hours.
pub struct OnHoliday<'a> {
    schedule: &'a Schedule,
    time: NaiveDateTime,
}

impl<'a> OnHoliday<'a> {
    pub fn new(schedule: &'a Schedule, time: NaiveDateTime) -> Self {
        Self {
            schedule,
            time: truncate_to_minute(time),
        }
    }

    pub fn result(&self) -> bool {
        match self.schedule.holiday(&self.time.date()) {
            None => false,
            Some(Holiday::Closed) => true,
            Some(Holiday::Hours(hours)) => {
                let day_time = DayTime::from_instant(&self.time);
                !hours.iter().any(|h| h.contains(day_time))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::fixtures::*;

    #[test]
    fn closed_all_day() {
        assert!(OnHoliday::new(&office(), at(6, 0, 0)).result());
        assert!(OnHoliday::new(&office(), at(6, 10, 0)).result());
        assert!(OnHoliday::new(&office(), at(6, 23, 59)).result());
    }

    #[test]
    fn inside_holiday_hours() {
        assert!(!OnHoliday::new(&office(), at(4, 10, 0)).result());
        assert!(!OnHoliday::new(&office(), at(4, 11, 59)).result());
    }

    #[test]
    fn outside_holiday_hours() {
        assert!(OnHoliday::new(&office(), at(4, 9, 30)).result());
        assert!(OnHoliday::new(&office(), at(4, 12, 0)).result());
    }

    #[test]
    fn ordinary_days() {
        assert!(!OnHoliday::new(&office(), at(5, 10, 0)).result());
        assert!(!OnHoliday::new(&office(), at(7, 10, 0)).result());
        // same weekday a week later is not a holiday
        assert!(!OnHoliday::new(&office(), at(13, 10, 0)).result());
    }
}
