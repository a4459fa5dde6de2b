use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, DAYS_PER_GREGORIAN_CYCLE, EARLIEST_YEAR,
    FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH,
    MAX_YEAR, MIN_DAY,
};
use crate::error::{DateError, Field};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `EARLIEST_YEAR..=MAX_YEAR` (1900..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies between `EARLIEST_YEAR` and `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::Range` if the value is before 1900 or after `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        if !(EARLIEST_YEAR..=MAX_YEAR).contains(&value) {
            return Err(DateError::out_of_range(Field::Year, value.into()));
        }
        NonZeroU16::new(value)
            .map(Self)
            .ok_or_else(|| DateError::out_of_range(Field::Year, value.into()))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Year {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value).map_or_else(
            |_| Err(DateError::out_of_range(Field::Year, value)),
            Self::new,
        )
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.get())
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::Range` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero =
            NonZeroU8::new(value).ok_or(DateError::out_of_range(Field::Month, value.into()))?;
        if value > MAX_MONTH {
            return Err(DateError::out_of_range(Field::Month, value.into()));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Month {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value).map_or_else(
            |_| Err(DateError::out_of_range(Field::Month, value)),
            Self::new,
        )
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// A day-of-month value in the range `1..=MAX_DAY` (1..=31).
///
/// This only bounds the number itself; whether the day exists in a given
/// month is checked when a [`crate::Date`] is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's between `MIN_DAY` and `MAX_DAY`
    ///
    /// # Errors
    /// Returns `DateError::Range` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        if !(MIN_DAY..=MAX_DAY).contains(&value) {
            return Err(DateError::out_of_range(Field::Day, value.into()));
        }
        NonZeroU8::new(value)
            .map(Self)
            .ok_or_else(|| DateError::out_of_range(Field::Day, value.into()))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Day {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value).map_or_else(
            |_| Err(DateError::out_of_range(Field::Day, value)),
            Self::new,
        )
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`. The month must already be in `1..=12`.
pub const fn days_in_month(month: u8, year: u16) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_COMMON_YEAR + 1
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Days from 0000-03-01 to the given proleptic Gregorian date.
///
/// Shifting the year to start in March puts the leap day at the end, so the
/// day of year follows `(153 * m + 2) / 5` without a month table.
const fn civil_days(year: u16, month: u8, day: u8) -> i64 {
    let y = if month <= FEBRUARY {
        year as i64 - 1
    } else {
        year as i64
    };
    let m = month as i64;
    let era = y.div_euclid(GREGORIAN_CYCLE as i64);
    let yoe = y - era * GREGORIAN_CYCLE as i64; // [0, 399]
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1; // [0, 365]
    let doe = yoe * DAYS_IN_COMMON_YEAR as i64 + yoe / LEAP_YEAR_CYCLE as i64
        - yoe / CENTURY_CYCLE as i64
        + doy; // [0, 146096]
    era * DAYS_PER_GREGORIAN_CYCLE + doe
}

const EPOCH_CIVIL_DAYS: i64 = civil_days(EARLIEST_YEAR, JANUARY, MIN_DAY);

/// Closed-form day number relative to 1 January 1900.
///
/// Agrees with [`crate::Date::day_count`] for every valid date; it does not
/// validate its arguments.
pub const fn epoch_days(year: u16, month: u8, day: u8) -> i64 {
    civil_days(year, month, day) - EPOCH_CIVIL_DAYS
}
