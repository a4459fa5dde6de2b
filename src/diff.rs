use std::str::FromStr;

use serde::Serialize;

use crate::{
    Date, PAIR_SEPARATOR,
    error::{DateError, Segment},
    prelude::*,
};

/// Two dates, earliest first, and the number of days between them.
///
/// Renders as `DD MM YYYY, DD MM YYYY, N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{earlier}, {later}, {days}")]
pub struct DateDiff {
    earlier: Date,
    later:   Date,
    days:    u32,
}

impl DateDiff {
    /// Orders two dates and measures the span between them.
    /// Equal dates keep their given order and yield zero days.
    pub fn between(a: Date, b: Date) -> Self {
        let (a_count, b_count) = (a.day_count(), b.day_count());
        let diff = if b_count < a_count {
            Self {
                earlier: b,
                later:   a,
                days:    a_count - b_count,
            }
        } else {
            Self {
                earlier: a,
                later:   b,
                days:    b_count - a_count,
            }
        };
        tracing::debug!(earlier = %diff.earlier, later = %diff.later, days = diff.days, "computed date difference");
        diff
    }

    /// Returns the earlier of the two dates
    pub const fn earlier(&self) -> Date {
        self.earlier
    }

    /// Returns the later of the two dates
    pub const fn later(&self) -> Date {
        self.later
    }

    /// Returns the absolute number of days between the dates
    pub const fn days(&self) -> u32 {
        self.days
    }
}

impl FromStr for DateDiff {
    type Err = DateError;

    /// Parses `DD MM YYYY, DD MM YYYY`. Only the first comma splits the pair,
    /// so any later comma ends up inside the second date and fails there.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, second) = s.split_once(PAIR_SEPARATOR).ok_or_else(|| {
            DateError::Format(format!(
                "expected two dates separated by '{PAIR_SEPARATOR}': {:?}",
                s.trim()
            ))
        })?;
        let (first, second) = (first.trim(), second.trim());
        tracing::trace!(first, second, "split date pair");

        let a = first
            .parse::<Date>()
            .map_err(|e| e.in_segment(Segment::First))?;
        let b = second
            .parse::<Date>()
            .map_err(|e| e.in_segment(Segment::Second))?;

        Ok(Self::between(a, b))
    }
}

/// Computes the difference between two dates given as `DD MM YYYY, DD MM YYYY`.
///
/// Returns `DD MM YYYY, DD MM YYYY, N` with the earlier date first.
///
/// # Errors
/// Returns a [`DateError`] describing the first segment that could not be
/// read as a valid date.
pub fn datediff(input: &str) -> Result<String, DateError> {
    input.parse::<DateDiff>().map(|diff| diff.to_string())
}
