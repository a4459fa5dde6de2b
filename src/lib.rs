//! Exact calendar-day difference between two dates written as `DD MM YYYY`.
//!
//! ```
//! let out = datediff::datediff("24 12 2002, 25 12 2002").unwrap();
//! assert_eq!(out, "24 12 2002, 25 12 2002, 1");
//! ```

mod consts;
mod date;
mod diff;
mod error;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use date::Date;
pub use diff::{DateDiff, datediff};
pub use error::{DateError, ErrorKind, Field, Segment};
pub use types::{Day, Month, Year, days_in_month, days_in_year, epoch_days, is_leap_year};
