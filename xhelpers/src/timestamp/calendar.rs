//! Local-time glue between epoch seconds and calendar fields.
//!
//! This is the only place that talks to the system clock and the local
//! time zone database (through `chrono::Local`).

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, Offset, TimeZone, Utc};

/// Current time as `(seconds, nanoseconds)` since the epoch.
pub(crate) fn system_time() -> (i64, u32) {
    let now = Utc::now();
    (now.timestamp(), now.timestamp_subsec_nanos())
}

/// Local calendar view of `seconds`; out-of-range values map to the epoch.
pub(crate) fn local_datetime(seconds: i64) -> DateTime<Local> {
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .unwrap_or_default()
        .with_timezone(&Local)
}

/// Local offset east of UTC, in minutes, in effect at `seconds`.
pub(crate) fn local_offset_minutes_at(seconds: i64) -> i64 {
    i64::from(local_datetime(seconds).offset().fix().local_minus_utc()) / 60
}

/// Local offset east of UTC, in minutes, in effect now.
pub(crate) fn local_offset_minutes_now() -> i64 {
    i64::from(Local::now().offset().fix().local_minus_utc()) / 60
}

/// Formats an offset east of UTC as `+HH:MM` / `-HH:MM`.
pub(crate) fn zone_string(offset_minutes: i64) -> String {
    let sign = if offset_minutes < 0 { '-' } else { '+' };
    let abs = offset_minutes.abs();
    format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
}

/// Converts local calendar fields to epoch seconds.
///
/// Out-of-range fields roll over into the next larger unit, so month 12 is
/// January of the following year and second 75 is one minute and fifteen
/// seconds. Ambiguous local times (clock set back) resolve to the earlier
/// instant; skipped local times (clock set forward) use the offset in
/// effect before the jump.
pub(crate) fn local_to_epoch(
    year_since_1900: i32,
    mon: i32,
    day: i32,
    hour: i32,
    min: i32,
    sec: i32,
) -> Option<i64> {
    let total_months = (i64::from(year_since_1900) + 1900) * 12 + i64::from(mon);
    let year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let month = u32::try_from(total_months.rem_euclid(12) + 1).ok()?;

    let offset_secs = (i64::from(day) - 1) * 86_400
        + i64::from(hour) * 3_600
        + i64::from(min) * 60
        + i64::from(sec);

    let naive = NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::seconds(offset_secs))?;

    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.timestamp()),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.timestamp()),
        LocalResult::None => {
            let offset = Local.offset_from_utc_datetime(&naive).local_minus_utc();
            Some(Utc.from_utc_datetime(&naive).timestamp() - i64::from(offset))
        }
    }
}
