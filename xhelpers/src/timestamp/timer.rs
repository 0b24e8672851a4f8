//! Labelled stopwatch measuring wall-clock intervals in milliseconds.

use std::fmt;

use super::types::Timestamp;

const DEFAULT_LABEL: &str = "Elapsed time";

/// A stopwatch built on [`Timestamp::diff`].
///
/// Each [`update`](Timer::update) measures the interval since the previous
/// mark and restarts from now, so successive updates report lap times.
/// A timer still running when dropped logs its last lap at debug level.
///
/// # Examples
///
/// ```
/// use xhelpers::timestamp::Timer;
///
/// let mut timer = Timer::new("load");
/// let lap = timer.stop();
/// assert!(lap >= 0.0);
/// assert_eq!(timer.duration(true), lap);
/// assert!(timer.to_string().starts_with("load: "));
/// ```
#[derive(Debug, Clone)]
pub struct Timer {
    label: String,
    mark: Timestamp,
    duration_ms: f64,
    stopped: bool,
}

impl Timer {
    /// Starts a timer named `label`.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self::started_at(label, Timestamp::now_with_precision(9))
    }

    fn started_at(label: &str, mark: Timestamp) -> Self {
        Self {
            label: label.to_string(),
            mark,
            duration_ms: 0.0,
            stopped: false,
        }
    }

    /// Restarts timing. `None` restores the default label.
    pub fn start(&mut self, label: Option<&str>) {
        *self = Self::started_at(
            label.unwrap_or(DEFAULT_LABEL),
            Timestamp::now_with_precision(9),
        );
    }

    /// Stops the timer and returns the last lap in milliseconds. Later
    /// calls return the same value.
    pub fn stop(&mut self) -> f64 {
        if !self.stopped {
            self.update();
        }
        self.stopped = true;
        self.duration_ms
    }

    /// Measures the lap ending now and starts the next one.
    pub fn update(&mut self) -> f64 {
        self.lap_until(Timestamp::now_with_precision(9))
    }

    fn lap_until(&mut self, now: Timestamp) -> f64 {
        self.duration_ms = Timestamp::diff(&self.mark, &now).as_secs_f64() * 1_000.0;
        self.mark = now;
        self.duration_ms
    }

    /// The last lap in milliseconds, measuring a new one first when
    /// `update` is set and the timer is running.
    pub fn duration(&mut self, update: bool) -> f64 {
        if update && !self.stopped {
            self.update();
        }
        self.duration_ms
    }

    /// [`Timer::duration`] as text with two decimals, e.g. `"12.50ms"`.
    pub fn duration_text(&mut self, update: bool) -> String {
        format!("{:.2}ms", self.duration(update))
    }

    /// The label given at start.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether [`Timer::stop`] has been called since the last start.
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL)
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}ms", self.label, self.duration_ms)
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if !self.stopped {
            self.stop();
            log::debug!("{self}");
        }
    }
}
