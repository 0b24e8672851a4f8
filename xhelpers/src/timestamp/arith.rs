//! Arithmetic on timestamps.
//!
//! Fractional seconds are `f64`; whole timestamps add and subtract
//! component-wise with a carry between nanoseconds and seconds.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::types::{Timestamp, MAX_NANO};

impl Timestamp {
    /// Elapsed time from `start` to `stop` as a `(seconds, nanos)` pair.
    ///
    /// When `stop` precedes `start` the result has negative seconds and an
    /// in-range nanosecond part, so it still reads as
    /// `seconds + nanos / 1e9`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xhelpers::timestamp::Timestamp;
    ///
    /// let t = Timestamp::new(10, 5);
    /// assert_eq!(Timestamp::diff(&t, &t), Timestamp::new(0, 0));
    /// ```
    #[must_use]
    pub fn diff(start: &Self, stop: &Self) -> Self {
        Self::new(
            stop.seconds - start.seconds,
            i64::from(stop.nanos) - i64::from(start.nanos),
        )
    }

    /// The elapsed value as fractional seconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + f64::from(self.nanos) / 1e9
    }

    fn carry(&mut self, nanos: i64) {
        let mut nanos = nanos;
        if nanos >= MAX_NANO {
            nanos -= MAX_NANO;
            self.seconds = self.seconds.saturating_add(1);
        } else if nanos < 0 {
            nanos += MAX_NANO;
            self.seconds = self.seconds.saturating_sub(1);
        }
        self.nanos = u32::try_from(nanos).unwrap_or(0);
    }
}

/// Non-finite deltas are ignored; seconds saturate at the `i64` range.
impl AddAssign<f64> for Timestamp {
    #[allow(clippy::cast_possible_truncation)]
    fn add_assign(&mut self, delta: f64) {
        if !delta.is_finite() {
            log::debug!("ignoring non-finite time delta {delta}");
            return;
        }
        let whole = delta.trunc();
        let frac = ((delta - whole) * 1e9) as i64;
        self.seconds = self.seconds.saturating_add(whole as i64);
        self.carry(i64::from(self.nanos) + frac);
    }
}

impl SubAssign<f64> for Timestamp {
    fn sub_assign(&mut self, delta: f64) {
        *self += -delta;
    }
}

impl Add<f64> for Timestamp {
    type Output = Self;

    fn add(mut self, delta: f64) -> Self {
        self += delta;
        self
    }
}

impl Sub<f64> for Timestamp {
    type Output = Self;

    fn sub(mut self, delta: f64) -> Self {
        self -= delta;
        self
    }
}

impl AddAssign for Timestamp {
    fn add_assign(&mut self, other: Self) {
        self.seconds = self.seconds.saturating_add(other.seconds);
        self.carry(i64::from(self.nanos) + i64::from(other.nanos));
    }
}

impl SubAssign for Timestamp {
    fn sub_assign(&mut self, other: Self) {
        self.seconds = self.seconds.saturating_sub(other.seconds);
        self.carry(i64::from(self.nanos) - i64::from(other.nanos));
    }
}
