use bizhours::{Schedule, ScheduleConfig};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Weekdays 09:00-17:00 with lunch breaks on monday and wednesday, a closed monday
/// (2006-01-16) and short hours on 2006-01-20.
pub const OFFICE: &str = r#"
hours:
  mon: { "09:00": "17:00" }
  tue: { "09:00": "17:00" }
  wed: { "09:00": "17:00" }
  thu: { "09:00": "17:00" }
  fri: { "09:00": "17:00" }
breaks:
  - { day: mon, start: "12:00", end: "13:00" }
  - { day: wed, start: "12:00", end: "13:00" }
holidays:
  2006-01-16: closed
  2006-01-20: { "10:00": "12:00" }
"#;

/// Evenings running past midnight into the next day.
pub const NIGHT_SHIFT: &str = r#"
hours:
  mon: { "20:00": "24:00" }
  tue: { "00:00": "04:00", "20:00": "24:00" }
  wed: { "00:00": "04:00" }
  sat: { "22:00": "24:00" }
  sun: { "00:00": "02:00" }
"#;

#[allow(dead_code)]
pub fn office() -> Schedule {
    ScheduleConfig::from_yaml(OFFICE).unwrap().build().unwrap()
}

#[allow(dead_code)]
pub fn night_shift() -> Schedule {
    ScheduleConfig::from_yaml(NIGHT_SHIFT).unwrap().build().unwrap()
}

/// Day `n` of January 2006; the 1st is a sunday.
pub fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2006, 1, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

/// `minutes` after the start of 2006.
#[allow(dead_code)]
pub fn minutes_in(minutes: i64) -> NaiveDateTime {
    at(1, 0, 0) + Duration::minutes(minutes)
}
