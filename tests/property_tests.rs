//! Property-based tests for duolog using proptest

use duolog::{Config, Entry, Level, Logger};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Trace),
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warn),
        Just(Level::Error),
        Just(Level::Fatal),
    ]
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Level string conversions roundtrip correctly
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let as_str = level.as_str();
        let parsed: Level = as_str.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Level ordering is consistent with declaration order
    #[test]
    fn test_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1 >= level2, val1 >= val2);
        prop_assert_eq!(level1 > level2, val1 > val2);
    }

    /// Parsing accepts case-insensitive input
    #[test]
    fn test_level_case_insensitive(level in any_level(), use_upper in any::<bool>()) {
        let input = if use_upper {
            level.as_str().to_uppercase()
        } else {
            level.as_str().to_string()
        };

        prop_assert_eq!(input.parse::<Level>(), Ok(level));
    }
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    /// An entry reaches the file sink iff its level clears the minimum and
    /// the logger is not muted; otherwise it is dropped entirely.
    #[test]
    fn test_level_filtering_monotonicity(
        min_level in any_level(),
        entry_level in any_level(),
        muted in any::<bool>(),
    ) {
        let temp_dir = TempDir::new().expect("temp dir");
        let log_file = temp_dir.path().join("filter.log");

        let mut logger = Logger::new();
        logger
            .init(Config::new(&log_file, min_level))
            .expect("init logger");
        if muted {
            logger.mute();
        }

        let entry = Entry::new(entry_level, "tests/property_tests.rs", "property_tests", 1);
        logger.log(&entry, format_args!("probe"));
        logger.flush().expect("flush");

        let content = fs::read_to_string(&log_file).expect("read log");
        let expected = !muted && entry_level >= min_level;
        prop_assert_eq!(
            content.contains("probe"),
            expected,
            "min={} entry={} muted={} content={:?}",
            min_level,
            entry_level,
            muted,
            content
        );
    }

    /// After unmute, behavior reverts exactly to level-based filtering.
    #[test]
    fn test_unmute_restores_filtering(
        min_level in any_level(),
        entry_level in any_level(),
    ) {
        let temp_dir = TempDir::new().expect("temp dir");
        let log_file = temp_dir.path().join("unmute.log");

        let mut logger = Logger::new();
        logger
            .init(Config::new(&log_file, min_level))
            .expect("init logger");

        let entry = Entry::new(entry_level, "tests/property_tests.rs", "property_tests", 1);
        logger.mute();
        logger.log(&entry, format_args!("muted probe"));
        logger.unmute();
        logger.log(&entry, format_args!("open probe"));
        logger.flush().expect("flush");

        let content = fs::read_to_string(&log_file).expect("read log");
        prop_assert!(!content.contains("muted probe"));
        prop_assert_eq!(content.contains("open probe"), entry_level >= min_level);
    }
}
