//! The timestamp value, its construction and calendar accessors.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Datelike, Local, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::calendar;

/// Nanoseconds per second.
pub const MAX_NANO: i64 = 1_000_000_000;

/// Default precision (decimal digits of a second) for [`Timestamp::now`].
pub const DEFAULT_PRECISION: i32 = 3;

/// A point in time with nanosecond resolution.
///
/// The value is a pair `(seconds, nanos)` where `seconds` counts from the
/// Unix epoch and `nanos` always lies in `0..1_000_000_000`. The pair
/// `(0, 0)` doubles as the "null" timestamp: it formats as an empty string
/// and is what parsing produces on malformed input.
///
/// Values order by `(seconds, nanos)`.
///
/// # Examples
///
/// ```
/// use xhelpers::timestamp::Timestamp;
///
/// let start = Timestamp::new(100, 250_000_000);
/// let stop = Timestamp::new(101, 0);
/// let elapsed = Timestamp::diff(&start, &stop);
/// assert_eq!(elapsed.seconds(), 0);
/// assert_eq!(elapsed.nanos(), 750_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub(crate) seconds: i64,
    pub(crate) nanos: u32,
}

/// Calendar fields for [`Timestamp::from_calendar`].
///
/// Fields follow the broken-down time convention: years count from 1900
/// and months from zero. Values outside their usual range roll over into
/// the next larger unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Calendar {
    /// Years since 1900.
    pub year: i32,
    /// Month, `0..=11`.
    pub mon: i32,
    /// Day of month, `1..=31`.
    pub day: i32,
    /// Hour, `0..=23`.
    pub hour: i32,
    /// Minute, `0..=59`.
    pub min: i32,
    /// Second, `0..=59`.
    pub sec: i32,
    /// Nanoseconds, normalized into seconds when out of range.
    pub nanos: i64,
}

impl Calendar {
    /// Midnight of the given date.
    #[must_use]
    pub const fn date(year: i32, mon: i32, day: i32) -> Self {
        Self {
            year,
            mon,
            day,
            hour: 0,
            min: 0,
            sec: 0,
            nanos: 0,
        }
    }

    /// Sets the time of day.
    #[must_use]
    pub const fn time(mut self, hour: i32, min: i32, sec: i32) -> Self {
        self.hour = hour;
        self.min = min;
        self.sec = sec;
        self
    }

    /// Sets the sub-second part.
    #[must_use]
    pub const fn nanos(mut self, nanos: i64) -> Self {
        self.nanos = nanos;
        self
    }
}

impl Timestamp {
    /// The null timestamp `(0, 0)`.
    pub const NULL: Self = Self {
        seconds: 0,
        nanos: 0,
    };

    /// Returns [`Timestamp::NULL`].
    #[must_use]
    pub const fn null() -> Self {
        Self::NULL
    }

    /// Builds a timestamp from raw parts, normalizing `nanos` into
    /// `0..1_000_000_000` by carrying whole seconds.
    #[must_use]
    pub fn new(seconds: i64, nanos: i64) -> Self {
        let nanos_in_range = u32::try_from(nanos.rem_euclid(MAX_NANO)).unwrap_or(0);
        Self {
            seconds: seconds + nanos.div_euclid(MAX_NANO),
            nanos: nanos_in_range,
        }
    }

    /// The current time rounded down to millisecond precision.
    #[must_use]
    pub fn now() -> Self {
        Self::now_with_precision(DEFAULT_PRECISION)
    }

    /// The current time rounded down to `precision` decimal digits of a
    /// second.
    ///
    /// A negative precision means the default of three digits; anything
    /// above nine keeps full nanoseconds.
    #[must_use]
    pub fn now_with_precision(precision: i32) -> Self {
        let (seconds, nanos) = calendar::system_time();
        let precision = if precision < 0 {
            DEFAULT_PRECISION
        } else {
            precision
        };
        let nanos = match u32::try_from(9 - precision) {
            Ok(drop) => {
                let step = 10_u32.pow(drop);
                nanos / step * step
            }
            Err(_) => nanos,
        };
        Self { seconds, nanos }
    }

    /// Builds a timestamp from local calendar fields.
    ///
    /// When `bias` is non-empty the fields are taken to be in that zone
    /// (`+HH:MM` / `-HH:MM`) rather than in local time. Fields that fail to
    /// convert, or convert to an instant before the epoch, give
    /// [`Timestamp::NULL`].
    ///
    /// # Examples
    ///
    /// ```
    /// use xhelpers::timestamp::{Calendar, Timestamp};
    ///
    /// let ts = Timestamp::from_calendar(&Calendar::date(117, 11, 23).time(12, 40, 23), "");
    /// assert_eq!(ts.year(), 117);
    /// assert_eq!(ts.mon(), 11);
    /// assert_eq!(ts.hour(), 12);
    /// ```
    #[must_use]
    pub fn from_calendar(fields: &Calendar, bias: &str) -> Self {
        let seconds = calendar::local_to_epoch(
            fields.year,
            fields.mon,
            fields.day,
            fields.hour,
            fields.min,
            fields.sec,
        );
        let mut ts = match seconds {
            Some(seconds) if seconds >= 0 => Self::new(seconds, fields.nanos),
            _ => return Self::NULL,
        };
        if !bias.is_empty() {
            ts.set_bias(bias);
        }
        ts
    }

    /// Converts a system clock reading.
    #[must_use]
    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(since) => Self::new(
                i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
                i64::from(since.subsec_nanos()),
            ),
            Err(before) => {
                let before = before.duration();
                Self::new(
                    -i64::try_from(before.as_secs()).unwrap_or(i64::MAX),
                    -i64::from(before.subsec_nanos()),
                )
            }
        }
    }

    /// Whether this is the null timestamp.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    /// Whether this lies before the epoch.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    /// Whole seconds since the epoch.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Sub-second part in nanoseconds.
    #[must_use]
    pub const fn nanos(&self) -> u32 {
        self.nanos
    }

    /// Local calendar view, `None` when out of chrono's range.
    #[must_use]
    pub fn to_local_datetime(&self) -> Option<DateTime<Local>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.nanos)
            .map(|utc| utc.with_timezone(&Local))
    }

    fn local(&self) -> DateTime<Local> {
        calendar::local_datetime(self.seconds)
    }

    /// Local year since 1900.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.local().year() - 1900
    }

    /// Local month, `0..=11`.
    #[must_use]
    pub fn mon(&self) -> u32 {
        self.local().month0()
    }

    /// Local day of month, `1..=31`.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.local().day()
    }

    /// Local hour.
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.local().hour()
    }

    /// Local minute.
    ///
    /// Named `minute` rather than `min` so it does not collide with
    /// [`Ord::min`].
    #[must_use]
    pub fn minute(&self) -> u32 {
        self.local().minute()
    }

    /// Second of the minute.
    #[must_use]
    pub fn sec(&self) -> u32 {
        self.local().second()
    }

    /// Sub-second part in milliseconds.
    #[must_use]
    pub fn msec(&self) -> f64 {
        f64::from(self.nanos) / 1_000_000.0
    }

    /// Sub-second part in microseconds.
    #[must_use]
    pub fn usec(&self) -> f64 {
        f64::from(self.nanos) / 1_000.0
    }

    /// Sub-second part in nanoseconds.
    #[must_use]
    pub const fn nsec(&self) -> u32 {
        self.nanos
    }

    /// Adds whole seconds from `msec` and replaces the sub-second part with
    /// its remainder, rounded to the nearest nanosecond.
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_msec(&mut self, msec: f64) -> &mut Self {
        self.seconds += (msec / 1_000.0).trunc() as i64;
        self.nanos = wrap_nanos((msec * 1_000_000.0 + 0.5) as i64);
        self
    }

    /// Microsecond counterpart of [`Timestamp::set_msec`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_usec(&mut self, usec: f64) -> &mut Self {
        self.seconds += (usec / 1_000_000.0).trunc() as i64;
        self.nanos = wrap_nanos((usec * 1_000.0 + 0.5) as i64);
        self
    }

    /// Nanosecond counterpart of [`Timestamp::set_msec`].
    ///
    /// Negative input borrows from the seconds so the sub-second part
    /// stays in range.
    pub fn set_nsec(&mut self, nsec: i64) -> &mut Self {
        self.seconds += nsec.div_euclid(MAX_NANO);
        self.nanos = wrap_nanos(nsec);
        self
    }

    /// Writes the textual form.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")
    }

    /// Reads one whitespace-delimited token and parses it with
    /// [`Timestamp::from_string`].
    ///
    /// Leading whitespace is skipped and the delimiter after the token is
    /// left in the reader.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying reader.
    pub fn read_from<R: BufRead>(reader: &mut R) -> io::Result<Self> {
        let mut token = Vec::new();
        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &byte in buf {
                if byte.is_ascii_whitespace() {
                    if token.is_empty() {
                        used += 1;
                        continue;
                    }
                    done = true;
                    break;
                }
                token.push(byte);
                used += 1;
            }
            reader.consume(used);
            if done {
                break;
            }
        }
        Ok(Self::from_string(&String::from_utf8_lossy(&token)))
    }
}

fn wrap_nanos(nanos: i64) -> u32 {
    u32::try_from(nanos.rem_euclid(MAX_NANO)).unwrap_or(0)
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_with_precision(9))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(|text| Self::from_string(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;

    #[test]
    fn test_new_normalizes_nanos() {
        let ts = Timestamp::new(10, 2_500_000_000);
        assert_eq!((ts.seconds(), ts.nanos()), (12, 500_000_000));

        let ts = Timestamp::new(10, -1);
        assert_eq!((ts.seconds(), ts.nanos()), (9, 999_999_999));
    }

    #[test]
    fn test_null() {
        assert!(Timestamp::new(0, 0).is_null());
        assert!(Timestamp::NULL.is_null());
        assert!(!Timestamp::new(0, 1).is_null());
        assert!(Timestamp::new(-5, 0).is_negative());
    }

    #[test]
    fn test_now_default_precision_is_milliseconds() {
        let ts = Timestamp::now();
        assert!(!ts.is_null());
        assert_eq!(ts.nsec() % 1_000_000, 0);
    }

    #[test]
    fn test_now_with_precision() {
        assert_eq!(Timestamp::now_with_precision(0).nanos(), 0);
        assert_eq!(Timestamp::now_with_precision(6).nanos() % 1_000, 0);
        assert_eq!(Timestamp::now_with_precision(-1).nanos() % 1_000_000, 0);
        assert!(Timestamp::now_with_precision(12).nanos() < 1_000_000_000);
    }

    #[test]
    fn test_from_calendar_local() {
        let fields = Calendar::date(117, 11, 23).time(12, 40, 23).nanos(263_000_000);
        let ts = Timestamp::from_calendar(&fields, "");
        assert_eq!(ts.year(), 117);
        assert_eq!(ts.mon(), 11);
        assert_eq!(ts.day(), 23);
        assert_eq!(ts.hour(), 12);
        assert_eq!(ts.minute(), 40);
        assert_eq!(ts.sec(), 23);
        assert_eq!(ts.nanos(), 263_000_000);
    }

    #[test]
    fn test_from_calendar_with_bias() {
        let fields = Calendar::date(117, 11, 23).time(12, 40, 23);
        let utc = Timestamp::from_calendar(&fields, "+00:00");
        let moscow = Timestamp::from_calendar(&fields, "+03:00");
        assert_eq!(utc.seconds() - moscow.seconds(), 3 * 3_600);
    }

    #[test]
    fn test_from_calendar_before_epoch_is_null() {
        let ts = Timestamp::from_calendar(&Calendar::date(10, 0, 1), "");
        assert!(ts.is_null());
    }

    #[test]
    fn test_set_sub_second_parts() {
        let mut ts = Timestamp::new(100, 0);
        ts.set_msec(1_250.0);
        assert_eq!((ts.seconds(), ts.nanos()), (101, 250_000_000));

        let mut ts = Timestamp::new(100, 0);
        ts.set_usec(500.0);
        assert_eq!((ts.seconds(), ts.nanos()), (100, 500_000));

        let mut ts = Timestamp::new(100, 0);
        ts.set_nsec(3_000_000_007);
        assert_eq!((ts.seconds(), ts.nanos()), (103, 7));
    }

    #[test]
    fn test_sub_second_accessors() {
        let ts = Timestamp::new(1, 1_500_000);
        assert!((ts.msec() - 1.5).abs() < f64::EPSILON);
        assert!((ts.usec() - 1_500.0).abs() < f64::EPSILON);
        assert_eq!(ts.nsec(), 1_500_000);
    }

    #[test]
    fn test_from_system_time() {
        let ts = Timestamp::from(UNIX_EPOCH + Duration::new(42, 7));
        assert_eq!((ts.seconds(), ts.nanos()), (42, 7));

        let ts = Timestamp::from(UNIX_EPOCH - Duration::new(1, 500_000_000));
        assert_eq!((ts.seconds(), ts.nanos()), (-2, 500_000_000));
    }

    #[test]
    fn test_ordering() {
        let a = Timestamp::new(5, 10);
        let b = Timestamp::new(5, 20);
        let c = Timestamp::new(6, 0);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a.max(c), c);
    }

    #[test]
    fn test_stream_round_trip() {
        let ts = Timestamp::from_calendar(&Calendar::date(120, 1, 29).time(8, 0, 0), "");
        let mut out = Vec::new();
        ts.write_to(&mut out).unwrap();
        out.extend_from_slice(b" tail");

        let mut reader = Cursor::new(out);
        let back = Timestamp::read_from(&mut reader).unwrap();
        assert_eq!(back, ts);

        let mut rest = String::new();
        std::io::Read::read_to_string(&mut reader, &mut rest).unwrap();
        assert_eq!(rest, " tail");
    }

    #[test]
    fn test_read_from_empty_is_null() {
        let mut reader = Cursor::new("   ");
        assert!(Timestamp::read_from(&mut reader).unwrap().is_null());
    }

    #[test]
    fn test_serde_as_string() {
        let ts = Timestamp::from_calendar(&Calendar::date(121, 5, 1).time(9, 30, 0).nanos(5), "");
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
