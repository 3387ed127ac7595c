mod common;

use bizhours::{BusinessDuration, DayOfWeek, DayTime, Schedule};
use chrono::{Duration, NaiveDateTime};
use common::*;
use proptest::prelude::*;

// eight weeks of 2006, minute by minute
const SPAN: i64 = 8 * 7 * 1440;

/// An open minute somewhere inside the `period`-th period of 2006.
fn open_instant(schedule: &Schedule, period: usize, offset: i64) -> NaiveDateTime {
    let period = schedule.periods().after(minutes_in(0)).nth(period).unwrap();
    let time = period.start() + Duration::minutes(offset % period.minutes());
    assert!(schedule.is_active(time));
    time
}

proptest! {
    #[test]
    fn day_minutes_round_trip(wday in 0i64..7, minute in 0i64..=1440) {
        let day = DayOfWeek::new(wday).unwrap();
        let day_time = DayTime::new(minute).unwrap();
        prop_assert_eq!(day.day_minute(day.week_minute(day_time)), day_time);
    }

    #[test]
    fn active_instants_start_a_period(offset in 0..SPAN) {
        let schedule = office();
        let time = minutes_in(offset);
        let first = schedule.periods().after(time).next().unwrap();
        prop_assert_eq!(schedule.is_active(time), first.start() == time);
        prop_assert!(first.start() >= time);
    }

    #[test]
    fn shifting_round_trips_from_open_instants(
        period in 0usize..60,
        offset in 0i64..1440,
        minutes in -5000i64..5000,
    ) {
        let schedule = office();
        let time = open_instant(&schedule, period, offset);

        let duration = BusinessDuration::minutes(minutes);
        let there = schedule.shift(time, duration).unwrap();
        prop_assert_eq!(schedule.shift(there, -duration).unwrap(), time);
    }

    #[test]
    fn night_shift_round_trips_too(
        period in 0usize..60,
        offset in 0i64..480,
        minutes in -3000i64..3000,
    ) {
        let schedule = night_shift();
        let time = open_instant(&schedule, period, offset);

        let duration = BusinessDuration::minutes(minutes);
        let there = schedule.shift(time, duration).unwrap();
        prop_assert_eq!(schedule.shift(there, -duration).unwrap(), time);
    }

    #[test]
    fn shifting_forward_covers_exactly_the_duration(offset in 0..SPAN, minutes in 0i64..5000) {
        let schedule = office();
        let time = minutes_in(offset);
        let there = schedule.shift(time, BusinessDuration::minutes(minutes)).unwrap();
        prop_assert_eq!(schedule.within(time, there).unwrap().in_minutes(), minutes);
    }

    #[test]
    fn business_time_adds_up(a in 0..SPAN, b in 0..SPAN, c in 0..SPAN) {
        let schedule = office();
        let mut points = [a, b, c];
        points.sort_unstable();
        let [a, b, c] = points;
        let (a, b, c) = (minutes_in(a), minutes_in(b), minutes_in(c));

        let whole = schedule.within(a, c).unwrap();
        let parts = schedule.within(a, b).unwrap() + schedule.within(b, c).unwrap();
        prop_assert_eq!(whole, parts);
    }

    #[test]
    fn business_time_matches_counting_active_minutes(start in 0..SPAN, length in 0i64..3000) {
        let schedule = office();
        let from = minutes_in(start);
        let to = minutes_in(start + length);
        let counted = (0..length)
            .filter(|m| schedule.is_active(minutes_in(start + m)))
            .count() as i64;
        prop_assert_eq!(schedule.within(from, to).unwrap().in_minutes(), counted);
    }
}
