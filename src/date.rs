use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    EARLIEST_YEAR, JANUARY,
    error::DateError,
    prelude::*,
    types::{self, Day, Month, Year, days_in_month, days_in_year},
};

/// Number of whitespace-separated tokens in a date (`DD MM YYYY`).
const DATE_TOKENS: usize = 3;

/// A calendar date on or after 1 January 1900.
///
/// Construction validates every field and the day-of-month against the
/// month length, so an existing `Date` always names a real day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{day} {month} {year}")]
pub struct Date {
    day:   Day,
    month: Month,
    year:  Year,
}

impl Date {
    /// Builds a date from plain integers.
    ///
    /// Day, month and year are range-checked in that order before the day
    /// is checked against the length of the month.
    ///
    /// # Errors
    /// Returns `DateError::Range` for the first field outside its bounds, or
    /// `DateError::InvalidDate` if the day does not exist in that month.
    pub fn new(day: i64, month: i64, year: i64) -> Result<Self, DateError> {
        let day = Day::try_from(day)?;
        let month = Month::try_from(month)?;
        let year = Year::try_from(year)?;
        Self::from_parts(day, month, year)
    }

    /// Builds a date from already range-checked fields.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the day does not exist in that month.
    pub fn from_parts(day: Day, month: Month, year: Year) -> Result<Self, DateError> {
        if day.get() > days_in_month(month.get(), year.get()) {
            return Err(DateError::InvalidDate {
                day:   day.get(),
                month: month.get(),
                year:  year.get(),
            });
        }
        Ok(Self { day, month, year })
    }

    /// Returns the day of month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month (1 = January)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the year
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Days elapsed since 1 January 1900, which is day 0.
    ///
    /// Walks every whole year since the epoch and every whole month of the
    /// current year.
    pub fn day_count(&self) -> u32 {
        let year = self.year();
        let whole_years: u32 = (EARLIEST_YEAR..year).map(|y| u32::from(days_in_year(y))).sum();
        let whole_months: u32 = (JANUARY..self.month())
            .map(|m| u32::from(days_in_month(m, year)))
            .sum();
        whole_years + whole_months + u32::from(self.day()) - 1
    }

    /// Closed-form equivalent of [`Date::day_count`].
    pub const fn epoch_days(&self) -> i64 {
        types::epoch_days(self.year(), self.month(), self.day())
    }

    /// Signed number of days from `self` to `other`; negative if `other` is earlier.
    pub fn days_until(&self, other: &Self) -> i64 {
        i64::from(other.day_count()) - i64::from(self.day_count())
    }

    fn parse_token(token: &str) -> Result<i64, DateError> {
        token
            .parse::<i64>()
            .map_err(|_| DateError::Format(format!("{token:?} is not a number")))
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let &[day, month, year] = tokens.as_slice() else {
            return Err(DateError::Format(format!(
                "expected {DATE_TOKENS} fields (DD MM YYYY), found {} in {:?}",
                tokens.len(),
                s.trim()
            )));
        };

        // Every token must be numeric before any range is checked
        let day = Self::parse_token(day)?;
        let month = Self::parse_token(month)?;
        let year = Self::parse_token(year)?;

        Self::new(day, month, year)
    }
}

impl TryFrom<(i64, i64, i64)> for Date {
    type Error = DateError;

    fn try_from((day, month, year): (i64, i64, i64)) -> Result<Self, Self::Error> {
        Self::new(day, month, year)
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    // Lexicographic (year, month, day) orders valid dates exactly as their day counts do.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
