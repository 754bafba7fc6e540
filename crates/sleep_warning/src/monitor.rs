//! The bedtime threshold monitor.
//!
//! Watches the host clock and fires the warning when the current time lands
//! exactly on a configured threshold. Escalation is by repetition: one play
//! at the first threshold, two at the second, three at the third, each
//! repeat half a second after the previous one.
//!
//! Matching is exact. The host advances the clock in coarse steps, so a
//! threshold that falls between two steps never fires that day; that is
//! accepted, not retried.

use bevy::prelude::*;

use crate::config::SleepWarningConfig;
use crate::delayed_sound::DelayedSoundQueue;
use crate::events::TimeChangedEvent;
use crate::time_format::DISABLED;

/// Gap between successive repeats of the warning sound.
pub const REPEAT_DELAY_MS: u64 = 500;

/// How many times to play the warning for the given clock value, or `None`
/// when no threshold matches.
///
/// Thresholds are checked in strict priority order (third, second, first);
/// at most one can match per call. Times below the first threshold bail out
/// early; with the first threshold disabled (-1) that comparison never
/// triggers, so the later thresholds still fire.
pub fn warn_repeats(config: &SleepWarningConfig, time: i32) -> Option<u32> {
    if time < config.first_warn_time {
        return None;
    }
    if config.third_warn_time > DISABLED && time == config.third_warn_time {
        Some(3)
    } else if config.second_warn_time > DISABLED && time == config.second_warn_time {
        Some(2)
    } else if config.first_warn_time > DISABLED && time == config.first_warn_time {
        Some(1)
    } else {
        None
    }
}

/// Schedule `repeats` plays of `cue`, each [`REPEAT_DELAY_MS`] after the
/// previous one, starting with no delay.
pub fn schedule_repeats(queue: &mut DelayedSoundQueue, cue: &str, repeats: u32) {
    for i in 0..u64::from(repeats) {
        queue.schedule(cue, REPEAT_DELAY_MS * i);
    }
}

/// Handles [`TimeChangedEvent`]: on a threshold match, queues the warning
/// cue the matching number of times. Fire-and-forget; playback is the
/// host's problem from here.
pub fn check_bedtime(
    mut times: EventReader<TimeChangedEvent>,
    config: Res<SleepWarningConfig>,
    mut queue: ResMut<DelayedSoundQueue>,
) {
    for event in times.read() {
        if let Some(repeats) = warn_repeats(&config, event.time) {
            schedule_repeats(&mut queue, &config.warning_sound, repeats);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(first: i32, second: i32, third: i32) -> SleepWarningConfig {
        SleepWarningConfig {
            first_warn_time: first,
            second_warn_time: second,
            third_warn_time: third,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_warning_before_first_threshold() {
        let config = config(2300, 2400, 2500);
        for time in [600, 1200, 2250, 2290] {
            assert_eq!(warn_repeats(&config, time), None, "time {time}");
        }
    }

    #[test]
    fn test_each_threshold_escalates() {
        let config = config(2300, 2400, 2500);
        assert_eq!(warn_repeats(&config, 2300), Some(1));
        assert_eq!(warn_repeats(&config, 2400), Some(2));
        assert_eq!(warn_repeats(&config, 2500), Some(3));
    }

    #[test]
    fn test_between_thresholds_is_silent() {
        let config = config(2300, 2400, 2500);
        assert_eq!(warn_repeats(&config, 2350), None);
        assert_eq!(warn_repeats(&config, 2450), None);
        assert_eq!(warn_repeats(&config, 2550), None);
    }

    #[test]
    fn test_exact_match_required() {
        // A coarse clock step that skips over a threshold never fires it.
        let config = config(2305, 2400, 2500);
        assert_eq!(warn_repeats(&config, 2310), None);
    }

    #[test]
    fn test_disabled_thresholds_never_match() {
        let config = config(DISABLED, 2400, DISABLED);
        assert_eq!(warn_repeats(&config, 0), None);
        assert_eq!(warn_repeats(&config, 2350), None);
        assert_eq!(warn_repeats(&config, 2400), Some(2));
        assert_eq!(warn_repeats(&config, 2500), None);
    }

    #[test]
    fn test_all_disabled_is_always_silent() {
        let config = config(DISABLED, DISABLED, DISABLED);
        for time in [0, 600, 2400, 2600] {
            assert_eq!(warn_repeats(&config, time), None, "time {time}");
        }
    }

    #[test]
    fn test_degenerate_equal_thresholds_highest_priority_wins() {
        let all_equal = config(2400, 2400, 2400);
        assert_eq!(warn_repeats(&all_equal, 2400), Some(3));

        let third_off = config(2400, 2400, DISABLED);
        assert_eq!(warn_repeats(&third_off, 2400), Some(2));
    }

    #[test]
    fn test_schedule_repeats_delays() {
        let mut queue = DelayedSoundQueue::default();
        schedule_repeats(&mut queue, "crystal", 3);
        let pending: Vec<(&str, Duration)> = queue.pending().collect();
        assert_eq!(
            pending,
            vec![
                ("crystal", Duration::ZERO),
                ("crystal", Duration::from_millis(500)),
                ("crystal", Duration::from_millis(1000)),
            ]
        );
    }
}
