//! Property-based tests for timestamp arithmetic and text conversion.

use super::*;
use proptest::prelude::*;

const NANOS: std::ops::Range<i64> = 0..1_000_000_000;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn new_keeps_nanos_in_range(seconds in -1_000_000i64..1_000_000, nanos in -10_000_000_000i64..10_000_000_000) {
        let ts = Timestamp::new(seconds, nanos);
        prop_assert!(i64::from(ts.nanos()) < MAX_NANO);
        prop_assert_eq!(ts.seconds() * MAX_NANO + i64::from(ts.nanos()), seconds * MAX_NANO + nanos);
    }

    #[test]
    fn diff_then_add_restores_stop(
        a_secs in 0i64..4_000_000_000, a_nanos in NANOS,
        b_secs in 0i64..4_000_000_000, b_nanos in NANOS,
    ) {
        let start = Timestamp::new(a_secs, a_nanos);
        let stop = Timestamp::new(b_secs, b_nanos);
        let mut back = start;
        back += Timestamp::diff(&start, &stop);
        prop_assert_eq!(back, stop);
    }

    #[test]
    fn diff_sign_follows_order(
        a_secs in 0i64..4_000_000_000, a_nanos in NANOS,
        b_secs in 0i64..4_000_000_000, b_nanos in NANOS,
    ) {
        let start = Timestamp::new(a_secs, a_nanos);
        let stop = Timestamp::new(b_secs, b_nanos);
        let d = Timestamp::diff(&start, &stop);
        prop_assert_eq!(d.is_negative(), stop < start);
    }

    #[test]
    fn fractional_add_keeps_nanos_in_range(secs in 1i64..4_000_000_000, nanos in NANOS, delta in -1_000.0f64..1_000.0) {
        let ts = Timestamp::new(secs, nanos) + delta;
        prop_assert!(i64::from(ts.nanos()) < MAX_NANO);
    }

    #[test]
    fn text_round_trip_preserves_seconds(secs in 86_400i64..4_000_000_000, nanos in NANOS, precision in 0i32..=9) {
        let ts = Timestamp::new(secs, nanos);
        let text = ts.to_string_with_precision(precision);
        let back = Timestamp::from_string(&text);
        prop_assert_eq!(back.seconds(), ts.seconds(), "{}", text);
    }

    #[test]
    fn full_precision_round_trip_is_exact(secs in 86_400i64..4_000_000_000, nanos in NANOS) {
        let ts = Timestamp::new(secs, nanos);
        prop_assert_eq!(Timestamp::from_string(&ts.to_string()), ts);
    }

    #[test]
    fn parse_never_panics(text in ".{0,40}") {
        let _ = Timestamp::from_string(&text);
    }
}
