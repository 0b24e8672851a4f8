//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::Config;
use crate::logging::LogLevel;
use crate::path::StyleSetting;
use proptest::prelude::*;

fn style_strategy() -> impl Strategy<Value = StyleSetting> {
    prop_oneof![
        Just(StyleSetting::Host),
        Just(StyleSetting::Posix),
        Just(StyleSetting::Windows),
    ]
}

fn level_strategy() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Quiet),
        Just(LogLevel::Normal),
        Just(LogLevel::Verbose),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(style_strategy()),
        prop::option::of(0u32..=9),
        prop::option::of(level_strategy()),
    )
        .prop_map(|(path_style, timestamp_precision, log_mode)| Config {
            path_style,
            timestamp_precision,
            log_mode,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn merge_with_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn merge_is_idempotent(base in config_strategy(), top in config_strategy()) {
        let mut once = base;
        ConfigMerger::merge_into(&mut once, &top);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &top);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn higher_precedence_wins(base in config_strategy(), top in config_strategy()) {
        let mut merged = base.clone();
        ConfigMerger::merge_into(&mut merged, &top);
        prop_assert_eq!(merged.path_style, top.path_style.or(base.path_style));
        prop_assert_eq!(merged.timestamp_precision, top.timestamp_precision.or(base.timestamp_precision));
        prop_assert_eq!(merged.log_mode, top.log_mode.or(base.log_mode));
    }

    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap_or_default();
        prop_assert_eq!(back, config);
    }
}
