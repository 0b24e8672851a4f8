//! Integration tests for the timestamp model.

use std::io::Cursor;

use xhelpers::timestamp::{Calendar, Timer, Timestamp, MAX_NANO};

#[test]
fn parse_reference_timestamp() {
    let ts = Timestamp::from_string("2017-12-23T12:40:23.263+03:00");
    assert_eq!(ts.year(), 117);
    assert_eq!(ts.mon(), 11);
    assert_eq!(ts.day(), 23);
    assert_eq!(ts.nanos(), 263_000_000);
    assert_eq!(ts.seconds(), 1_514_022_023);
}

#[test]
fn now_is_millisecond_aligned() {
    let ts = Timestamp::default();
    assert!(!ts.is_null());
    assert_eq!(ts.nsec() % 1_000_000, 0);
}

#[test]
fn null_sentinel() {
    let null = Timestamp::new(0, 0);
    assert!(null.is_null());
    assert_eq!(null.to_string(), "");
    assert!(Timestamp::from_string("").is_null());
    assert!(Timestamp::from_string("not a timestamp at all!!").is_null());
}

#[test]
fn diff_of_equal_timestamps_is_zero() {
    let t = Timestamp::now_with_precision(9);
    let d = Timestamp::diff(&t, &t);
    assert_eq!((d.seconds(), d.nanos()), (0, 0));
}

#[test]
fn elapsed_between_parsed_values() {
    let start = Timestamp::from_string("2020-06-01T10:00:00.750+00:00");
    let stop = Timestamp::from_string("2020-06-01T10:00:02.250+00:00");
    let d = Timestamp::diff(&start, &stop);
    assert_eq!((d.seconds(), d.nanos()), (1, 500_000_000));
    assert!(start < stop);
}

#[test]
fn arithmetic_keeps_invariant() {
    let mut t = Timestamp::new(1_000, 100_000_000);
    for _ in 0..10 {
        t -= 0.25;
        assert!(i64::from(t.nanos()) < MAX_NANO);
    }
    assert_eq!((t.seconds(), t.nanos()), (997, 600_000_000));
}

#[test]
fn calendar_construction_matches_parsing() {
    let built = Timestamp::from_calendar(
        &Calendar::date(120, 1, 29).time(23, 59, 59).nanos(1),
        "+05:00",
    );
    let parsed = Timestamp::from_string("2020-02-29T23:59:59.000000001+05:00");
    assert_eq!(built, parsed);
}

#[test]
fn format_round_trip_at_every_precision() {
    let ts = Timestamp::from_string("2019-07-14T08:09:10.123456789+00:00");
    for precision in 0..=9 {
        let text = ts.to_string_with_precision(precision);
        let back = Timestamp::from_string(&text);
        assert_eq!(back.seconds(), ts.seconds(), "{text}");
        let step = 10_u32.pow(9 - precision.unsigned_abs());
        assert_eq!(back.nanos(), ts.nanos() / step * step, "{text}");
    }
}

#[test]
fn stream_reads_consecutive_tokens() {
    let a = Timestamp::from_string("2001-01-01T00:00:00+00:00");
    let b = Timestamp::from_string("2002-02-02T02:02:02.5+00:00");
    let mut buffer = Vec::new();
    a.write_to(&mut buffer).unwrap();
    buffer.push(b'\n');
    b.write_to(&mut buffer).unwrap();

    let mut reader = Cursor::new(buffer);
    assert_eq!(Timestamp::read_from(&mut reader).unwrap(), a);
    assert_eq!(Timestamp::read_from(&mut reader).unwrap(), b);
    assert!(Timestamp::read_from(&mut reader).unwrap().is_null());
}

#[test]
fn time_zone_matches_local_bias() {
    let zone = Timestamp::time_zone();
    assert_eq!(zone.len(), 6);
    assert_eq!(Timestamp::bias(&zone), Timestamp::bias(""));
}

#[test]
fn display_strips_trailing_fraction_zeros() {
    let ts = Timestamp::from_string("2017-12-23T12:40:23.263+03:00");
    let text = ts.to_string();
    assert!(!text.contains(".263000000"), "{text}");
    assert_eq!(Timestamp::from_string(&text), ts);

    let mut buffer = Vec::new();
    ts.write_to(&mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), text);
}

#[test]
fn non_positive_precision_drops_fraction() {
    let ts = Timestamp::from_string("2017-12-23T12:40:23.263+03:00");
    for precision in [-3, -1, 0] {
        assert_eq!(ts.to_string_with_precision(precision).len(), 25);
    }
}

#[test]
fn timer_laps_are_non_negative_under_a_steady_clock() {
    let mut timer = Timer::new("integration");
    std::thread::sleep(std::time::Duration::from_millis(2));
    let lap = timer.update();
    assert!(lap > 0.0);
    assert!(timer.duration_text(false).ends_with("ms"));
}
