use serde::Serialize;

use crate::{EARLIEST_YEAR, JANUARY, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, prelude::*};

/// A single component of a `DD MM YYYY` date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl Field {
    /// Smallest accepted value for this field
    pub const fn min_value(self) -> i64 {
        match self {
            Self::Day => MIN_DAY as i64,
            Self::Month => JANUARY as i64,
            Self::Year => EARLIEST_YEAR as i64,
        }
    }

    /// Largest accepted value for this field (inclusive)
    pub const fn max_value(self) -> i64 {
        match self {
            Self::Day => MAX_DAY as i64,
            Self::Month => MAX_MONTH as i64,
            Self::Year => MAX_YEAR as i64,
        }
    }
}

/// Which of the two comma-separated dates an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Segment {
    #[display(fmt = "First")]
    First,
    #[display(fmt = "Second")]
    Second,
}

/// Coarse classification of a [`DateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong number of tokens or segments, or a token that is not an integer.
    Format,
    /// A single field is outside its allowed bounds.
    Range,
    /// Every field is in range but the combination is not a calendar date.
    InvalidDate,
}

/// Error type for parsing dates and computing differences.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input does not decompose into the expected tokens or segments.
    #[error("Invalid date format: {0}")]
    Format(String),

    /// A day, month or year is outside its bounds.
    #[error("Invalid {field}: {value} (must be {}-{})", .field.min_value(), .field.max_value())]
    Range { field: Field, value: i64 },

    /// Fields are individually valid but name a day that does not exist.
    #[error("Invalid date: {day:02} {month:02} {year:04} does not exist")]
    InvalidDate { day: u8, month: u8, year: u16 },

    /// Error raised while reading one of the two dates of a pair.
    #[error("{segment} date: {source}")]
    Segment {
        segment: Segment,
        source:  Box<DateError>,
    },
}

impl DateError {
    pub(crate) const fn out_of_range(field: Field, value: i64) -> Self {
        Self::Range { field, value }
    }

    pub(crate) fn in_segment(self, segment: Segment) -> Self {
        Self::Segment {
            segment,
            source: Box::new(self),
        }
    }

    /// Returns the kind of failure, looking through segment context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Format(_) => ErrorKind::Format,
            Self::Range { .. } => ErrorKind::Range,
            Self::InvalidDate { .. } => ErrorKind::InvalidDate,
            Self::Segment { source, .. } => source.kind(),
        }
    }

    /// Returns the out-of-range field, if this is a range failure.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Range { field, .. } => Some(*field),
            Self::Segment { source, .. } => source.field(),
            Self::Format(_) | Self::InvalidDate { .. } => None,
        }
    }

    /// Returns which date of a pair failed, if known.
    pub const fn segment(&self) -> Option<Segment> {
        match self {
            Self::Segment { segment, .. } => Some(*segment),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_message_includes_bounds() {
        let err = DateError::out_of_range(Field::Month, 15);
        assert_eq!(err.to_string(), "Invalid month: 15 (must be 1-12)");

        let err = DateError::out_of_range(Field::Year, 1899);
        assert_eq!(err.to_string(), "Invalid year: 1899 (must be 1900-9999)");
    }

    #[test]
    fn test_invalid_date_message_is_padded() {
        let err = DateError::InvalidDate {
            day:   29,
            month: 2,
            year:  2009,
        };
        assert_eq!(err.to_string(), "Invalid date: 29 02 2009 does not exist");
    }

    #[test]
    fn test_segment_wrapping_keeps_kind() {
        let err = DateError::out_of_range(Field::Day, 0).in_segment(Segment::Second);
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.field(), Some(Field::Day));
        assert_eq!(err.segment(), Some(Segment::Second));
        assert_eq!(err.to_string(), "Second date: Invalid day: 0 (must be 1-31)");
    }

    #[test]
    fn test_kind_of_unwrapped_errors() {
        assert_eq!(DateError::Format("x".into()).kind(), ErrorKind::Format);
        assert_eq!(DateError::Format("x".into()).segment(), None);
        assert_eq!(DateError::Format("x".into()).field(), None);
    }
}
