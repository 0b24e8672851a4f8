//! Nanosecond timestamps with local-time text conversion.
//!
//! A [`Timestamp`] is a `(seconds, nanos)` pair counted from the Unix
//! epoch. It converts to and from the text form
//! `YYYY-MM-DDTHH:MM:SS[.fraction]±HH:MM`, where the date and time are in
//! the local zone and the suffix is that zone's offset at the instant.
//!
//! Parsing never fails loudly. Malformed input yields the null timestamp
//! `(0, 0)`, which formats as an empty string.
//!
//! [`Timer`] measures lap times between timestamps in milliseconds.
//!
//! # Examples
//!
//! ```
//! use xhelpers::timestamp::Timestamp;
//!
//! let start = Timestamp::from_string("2017-12-23T12:40:23.263+03:00");
//! let stop = start + 1.5;
//! let elapsed = Timestamp::diff(&start, &stop);
//! assert_eq!(elapsed.seconds(), 1);
//! assert_eq!(elapsed.nanos(), 500_000_000);
//! ```

mod arith;
mod calendar;
mod format;
mod timer;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use timer::Timer;
pub use types::{Calendar, Timestamp, DEFAULT_PRECISION, MAX_NANO};
