/// Property-based tests for the command parser
/// Uses proptest to check argument ranges across many random inputs
use glass_player::{parse_line, ShellCommand};
use proptest::prelude::*;
use std::time::Duration;

proptest! {
    /// Property: volume is accepted exactly for 0-100
    #[test]
    fn volume_accepts_only_percent_range(level in 0u16..=400) {
        let parsed = parse_line(&format!("vol {level}"));

        if level <= 100 {
            prop_assert_eq!(parsed.unwrap(), Some(ShellCommand::Volume(level as u8)));
        } else {
            prop_assert!(parsed.is_err());
        }
    }

    /// Property: any finite percentage reaches the seek command unchanged
    #[test]
    fn seek_keeps_finite_percent(percent in -1.0e6f64..1.0e6) {
        let parsed = parse_line(&format!("seek {percent}")).unwrap();
        prop_assert_eq!(parsed, Some(ShellCommand::Seek { percent }));

        let with_sign = parse_line(&format!("seek {percent}%")).unwrap();
        prop_assert_eq!(with_sign, Some(ShellCommand::Seek { percent }));
    }

    /// Property: song numbers start at 1
    #[test]
    fn select_rejects_zero(position in 0usize..10_000) {
        let parsed = parse_line(&format!("select {position}"));

        if position == 0 {
            prop_assert!(parsed.is_err());
        } else {
            prop_assert_eq!(parsed.unwrap(), Some(ShellCommand::Select(position)));
        }
    }

    /// Property: non-negative waits parse to the same duration
    #[test]
    fn wait_matches_seconds(secs in 0.0f64..100_000.0) {
        let parsed = parse_line(&format!("wait {secs}")).unwrap();
        prop_assert_eq!(
            parsed,
            Some(ShellCommand::Wait(Duration::from_secs_f64(secs)))
        );
    }

    /// Property: arbitrary input never panics
    #[test]
    fn parser_is_total(line in "\\PC{0,40}") {
        let _ = parse_line(&line);
    }
}
