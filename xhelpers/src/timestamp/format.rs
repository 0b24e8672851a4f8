//! Textual form `YYYY-MM-DDTHH:MM:SS[.fraction]±HH:MM` and zone biases.
//!
//! A *bias* is the number of minutes to add to local time to get UTC, so
//! zones east of Greenwich have a negative bias (`"+03:00"` is `-180`).

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::calendar;
use super::types::{Timestamp, MAX_NANO};

/// Length of `YYYY-MM-DDTHH:MM:SS`.
const DATE_TIME_LEN: usize = 19;

/// Length of a `±HH:MM` suffix.
const ZONE_LEN: usize = 6;

impl Timestamp {
    /// Bias in minutes of a zone suffix, or of the local zone for an empty
    /// string.
    ///
    /// Only the last six characters of `zone` are examined, so a full
    /// timestamp string may be passed. Returns `None` when they are not of
    /// the form `±HH:MM`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xhelpers::timestamp::Timestamp;
    ///
    /// assert_eq!(Timestamp::bias("+03:00"), Some(-180));
    /// assert_eq!(Timestamp::bias("2017-12-23T12:40:23-05:30"), Some(330));
    /// assert_eq!(Timestamp::bias("03:00"), None);
    /// ```
    #[must_use]
    pub fn bias(zone: &str) -> Option<i64> {
        if zone.is_empty() {
            return Some(-calendar::local_offset_minutes_now());
        }
        let start = zone.len().checked_sub(ZONE_LEN)?;
        let suffix = zone.get(start..)?.as_bytes();
        let sign = match suffix[0] {
            b'+' => -1,
            b'-' => 1,
            _ => return None,
        };
        if suffix[3] != b':' {
            return None;
        }
        let hours = two_digits(&suffix[1..3])?;
        let minutes = two_digits(&suffix[4..6])?;
        Some(sign * (hours * 60 + minutes))
    }

    /// The local zone as `±HH:MM`.
    #[must_use]
    pub fn time_zone() -> String {
        calendar::zone_string(calendar::local_offset_minutes_now())
    }

    /// Bias of the local zone at this instant.
    fn local_bias(&self) -> i64 {
        -calendar::local_offset_minutes_at(self.seconds)
    }

    /// Reinterprets the stored local wall-clock value as being in `zone`.
    ///
    /// The instant moves by the difference between `zone`'s bias and the
    /// local bias at this instant. A malformed zone leaves the value
    /// unchanged.
    pub fn set_bias(&mut self, zone: &str) -> &mut Self {
        match Self::bias(zone) {
            Some(remote) => {
                self.seconds += (remote - self.local_bias()) * 60;
            }
            None => log::warn!("ignoring malformed zone bias {zone:?}"),
        }
        self
    }

    /// Formats with `precision` fractional digits.
    ///
    /// The fraction is omitted when the precision is zero or negative, or
    /// when the sub-second part is zero; digits beyond the precision are
    /// truncated and precisions above nine mean nine. The null timestamp
    /// formats as an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use xhelpers::timestamp::Timestamp;
    ///
    /// assert_eq!(Timestamp::NULL.to_string_with_precision(3), "");
    /// ```
    #[must_use]
    pub fn to_string_with_precision(&self, precision: i32) -> String {
        let fraction = match precision.min(9) {
            digits if digits > 0 && self.nanos > 0 => {
                let width = digits.unsigned_abs() as usize;
                let step = 10_u32.pow(9 - digits.unsigned_abs());
                format!("{:0width$}", self.nanos / step)
            }
            _ => String::new(),
        };
        self.render(&fraction)
    }

    /// Date, time, optional `.fraction` and the local zone suffix.
    fn render(&self, fraction: &str) -> String {
        if self.is_null() {
            return String::new();
        }
        let local = calendar::local_datetime(self.seconds);
        let mut text = local.format("%Y-%m-%dT%H:%M:%S").to_string();
        if !fraction.is_empty() {
            text.push('.');
            text.push_str(fraction);
        }
        text.push_str(&calendar::zone_string(-self.local_bias()));
        text
    }

    /// Parses the textual form.
    ///
    /// Any malformed input (too short, wrong separators, non-numeric
    /// fields, year before 1900) yields [`Timestamp::NULL`]. Fractions
    /// longer than nine digits are truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use xhelpers::timestamp::Timestamp;
    ///
    /// let ts = Timestamp::from_string("2017-12-23T12:40:23.263+03:00");
    /// assert_eq!(ts.nanos(), 263_000_000);
    /// assert!(Timestamp::from_string("yesterday").is_null());
    /// ```
    #[must_use]
    pub fn from_string(text: &str) -> Self {
        parse(text).unwrap_or(Self::NULL)
    }

    /// Parses `text` into `self`, see [`Timestamp::from_string`].
    pub fn parse_into(&mut self, text: &str) -> &mut Self {
        *self = Self::from_string(text);
        self
    }
}

fn two_digits(bytes: &[u8]) -> Option<i64> {
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(i64::from(bytes[0] - b'0') * 10 + i64::from(bytes[1] - b'0'))
}

fn field(text: &str, from: usize, to: usize) -> Option<i32> {
    let part = text.get(from..to)?;
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn parse(text: &str) -> Option<Timestamp> {
    let bytes = text.as_bytes();
    if bytes.len() < DATE_TIME_LEN + ZONE_LEN {
        return None;
    }
    let separators = [(4, b'-'), (7, b'-'), (10, b'T'), (13, b':'), (16, b':')];
    if separators.iter().any(|&(at, sep)| bytes[at] != sep) {
        return None;
    }

    let year = field(text, 0, 4)?;
    if year < 1900 {
        return None;
    }
    let mon = field(text, 5, 7)?;
    let day = field(text, 8, 10)?;
    let hour = field(text, 11, 13)?;
    let min = field(text, 14, 16)?;
    let sec = field(text, 17, 19)?;

    let zone_start = bytes.len() - ZONE_LEN;
    let nanos = match bytes[DATE_TIME_LEN] {
        b'.' => parse_fraction(text.get(DATE_TIME_LEN + 1..zone_start)?)?,
        _ if zone_start == DATE_TIME_LEN => 0,
        _ => return None,
    };

    let remote = Timestamp::bias(text)?;
    let seconds = calendar::local_to_epoch(year - 1900, mon - 1, day, hour, min, sec)?;
    let mut ts = Timestamp::new(seconds, nanos);
    ts.seconds += (remote - ts.local_bias()) * 60;
    Some(ts)
}

fn parse_fraction(digits: &str) -> Option<i64> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let kept = &digits[..digits.len().min(9)];
    let mut padded = kept.to_string();
    while padded.len() < 9 {
        padded.push('0');
    }
    let nanos: i64 = padded.parse().ok()?;
    (nanos < MAX_NANO).then_some(nanos)
}

/// Full nanosecond fraction with trailing zeros stripped, so
/// `263_000_000` nanoseconds print as `.263`.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = format!("{:09}", self.nanos);
        let fraction = if self.nanos > 0 {
            digits.trim_end_matches('0')
        } else {
            ""
        };
        f.write_str(&self.render(fraction))
    }
}

impl FromStr for Timestamp {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_string(s))
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Self::from_string(text)
    }
}
