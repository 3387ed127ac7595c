use crate::day_time::{MINUTES_IN_DAY, MINUTES_IN_HOUR};
use std::fmt::{self, Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

/// An amount of business time, counted in whole minutes. Negative amounts point backwards.
///
/// Arithmetic saturates at the ends of the `i64` range.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BusinessDuration {
    minutes: i64,
}

impl BusinessDuration {
    pub const ZERO: Self = Self { minutes: 0 };

    pub fn minutes(minutes: i64) -> Self {
        Self { minutes }
    }

    pub fn hours(hours: i64) -> Self {
        Self {
            minutes: hours.saturating_mul(MINUTES_IN_HOUR),
        }
    }

    pub fn in_minutes(self) -> i64 {
        self.minutes
    }

    /// Whole hours, rounded towards zero.
    pub fn in_hours(self) -> i64 {
        self.minutes / MINUTES_IN_HOUR
    }

    /// Whole 24-hour days, rounded towards zero.
    pub fn in_days(self) -> i64 {
        self.minutes / MINUTES_IN_DAY
    }

    pub fn abs(self) -> Self {
        Self {
            minutes: self.minutes.saturating_abs(),
        }
    }

    pub fn is_negative(self) -> bool {
        self.minutes < 0
    }
}

impl Add for BusinessDuration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::minutes(self.minutes.saturating_add(rhs.minutes))
    }
}

impl Sub for BusinessDuration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::minutes(self.minutes.saturating_sub(rhs.minutes))
    }
}

impl Neg for BusinessDuration {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::minutes(self.minutes.saturating_neg())
    }
}

impl Sum for BusinessDuration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

// chrono durations hold at most `i64::MAX` milliseconds
const CHRONO_MAX_MINUTES: i64 = i64::MAX / 60_000;

/// Clamps to the longest duration chrono can represent.
impl From<BusinessDuration> for chrono::Duration {
    fn from(d: BusinessDuration) -> Self {
        chrono::Duration::minutes(d.minutes.clamp(-CHRONO_MAX_MINUTES, CHRONO_MAX_MINUTES))
    }
}

impl Display for BusinessDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.minutes.unsigned_abs();
        let per_hour = MINUTES_IN_HOUR as u64;
        write!(f, "{}{}h {:02}m", sign, abs / per_hour, abs % per_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_units() {
        let d = BusinessDuration::hours(25) + BusinessDuration::minutes(30);
        assert_eq!(d.in_minutes(), 1530);
        assert_eq!(d.in_hours(), 25);
        assert_eq!(d.in_days(), 1);
        assert_eq!((-d).in_hours(), -25);
    }

    #[test]
    fn sums_and_displays() {
        let total: BusinessDuration = vec![
            BusinessDuration::minutes(45),
            BusinessDuration::minutes(30),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.to_string(), "1h 15m");
        assert_eq!((-total).to_string(), "-1h 15m");
        assert_eq!(chrono::Duration::from(total), chrono::Duration::minutes(75));
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let min = BusinessDuration::minutes(i64::MIN);
        let max = BusinessDuration::minutes(i64::MAX);

        assert_eq!(min.abs(), max);
        assert_eq!(-min, max);
        assert_eq!(max + BusinessDuration::minutes(1), max);
        assert_eq!(min - BusinessDuration::minutes(1), min);
        assert_eq!(BusinessDuration::hours(i64::MAX / 30), max);
        assert_eq!(BusinessDuration::hours(i64::MIN / 30), min);
        assert_eq!(min.to_string(), "-153722867280912930h 08m");
        assert!(chrono::Duration::from(min) < chrono::Duration::zero());
        assert!(chrono::Duration::from(max) > chrono::Duration::zero());
    }
}
