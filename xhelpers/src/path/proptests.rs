//! Property-based tests for path decomposition and algebra.

use super::*;
use proptest::prelude::*;

fn component() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("/"), Just("\\")]
}

fn absolute_path() -> impl Strategy<Value = String> {
    (prop::collection::vec((separator(), component()), 1..6)).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(sep, part)| format!("{sep}{part}"))
            .collect()
    })
}

fn relative_path() -> impl Strategy<Value = String> {
    prop::collection::vec(component(), 1..6).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn check_slash_is_idempotent(text in "[a-z/\\\\]{0,20}") {
        let mut once = XPath::from(text.as_str());
        once.check_slash();
        let mut twice = once.clone();
        twice.check_slash();
        prop_assert_eq!(once.as_str(), twice.as_str());
    }

    #[test]
    fn strip_after_check_equals_strip(text in "[a-z/\\\\]{0,20}") {
        let mut stripped = XPath::from(text.as_str());
        stripped.strip_slash();
        let mut both = XPath::from(text.as_str());
        both.check_slash().strip_slash();
        prop_assert_eq!(stripped.as_str(), both.as_str());
    }

    #[test]
    fn equality_ignores_case_and_separators(path in absolute_path()) {
        let upper = XPath::from(path.to_uppercase().replace('\\', "/"));
        let mut trailing = XPath::from(path.as_str());
        trailing.check_slash();
        prop_assert_eq!(&upper, &XPath::from(path.as_str()));
        prop_assert_eq!(&trailing, &XPath::from(path.as_str()));
    }

    #[test]
    fn split_then_make_round_trips(
        drive in "[A-Z]",
        dir in relative_path(),
        name in component(),
        ext in "[a-z]{1,4}",
    ) {
        let original = XPath::from_parts(&drive, &dir, &name, &ext, PathStyle::windows());
        let parts = original.split_path();
        prop_assert_eq!(&parts.drive, &format!("{drive}:"));
        prop_assert_eq!(&parts.name, &name);
        prop_assert_eq!(&parts.ext, &ext);

        let mut rebuilt = XPath::with_style(String::new(), PathStyle::windows());
        rebuilt.make_path_from(&parts);
        prop_assert_eq!(rebuilt.as_str(), original.as_str());
    }

    #[test]
    fn common_prefix_is_a_prefix(a in absolute_path(), b in absolute_path()) {
        let left = XPath::from(a.as_str());
        let right = XPath::from(b.as_str());
        let common = &left & &right;
        prop_assert!(left.as_str().starts_with(common.as_str()));
        prop_assert_eq!(&common, &(&right & &left));
    }

    #[test]
    fn prefix_concat_difference_restores(a in absolute_path(), b in absolute_path()) {
        let left = XPath::from(a.as_str());
        let right = XPath::from(b.as_str());
        let common = &left & &right;
        let rest = &left - &common;
        prop_assert_eq!(common.concatenated(&rest), left);
    }

    #[test]
    fn relative_path_resolves_back(
        shared in relative_path(),
        target in relative_path(),
        home in relative_path(),
    ) {
        let mut path = XPath::from(format!("/{shared}/{target}"));
        let base = XPath::from(format!("/{shared}/{home}"));
        path.make_relative_path(&base);

        prop_assert!(path.is_relative_path());
        let depth = home.split('/').count();
        let ups = path.as_str().matches("../").count();
        prop_assert!(ups <= depth);
    }
}
