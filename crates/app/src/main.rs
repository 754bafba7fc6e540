//! Headless demo host for the sleep-warning add-on.
//!
//! Stands in for the game: ticks a packed clock on the host's ten-minute
//! grid, provides the settings-menu service, and "plays" sound requests by
//! logging them. Runs two in-game days and exits.

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use sleep_warning::events::{GameLaunchedEvent, PlaySoundEvent, TimeChangedEvent};
use sleep_warning::settings_menu::{MenuOption, SettingsMenu};
use sleep_warning::SleepWarningPlugin;

/// In-game minutes advanced per frame.
const MINUTES_PER_TICK: i32 = 10;
/// Wall-clock pause between frames.
const TICK_MILLIS: u64 = 50;
/// Start of the in-game day (6:00 AM).
const DAY_START: i32 = 600;
/// End of the in-game day (2:00 AM the following day).
const DAY_END: i32 = 2600;

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins
                .set(ScheduleRunnerPlugin::run_loop(Duration::from_millis(
                    TICK_MILLIS,
                ))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(SleepWarningPlugin::with_config_path("sleep_warning.json"))
        .init_resource::<GameClock>()
        .init_resource::<SettingsMenu>()
        .add_systems(Startup, announce_launch)
        .add_systems(Update, (tick_clock, play_sounds, log_menu_once))
        .run();
}

/// The host's clock: packed `hour * 100 + minute` advancing in ten-minute
/// steps from 6:00 to 26:00, then rolling into the next day.
#[derive(Resource, Debug)]
struct GameClock {
    day: u32,
    time: i32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            day: 1,
            time: DAY_START,
        }
    }
}

impl GameClock {
    fn tick(&mut self) -> i32 {
        self.time += MINUTES_PER_TICK;
        if self.time % 100 >= 60 {
            self.time = self.time - self.time % 100 + 100;
        }
        if self.time > DAY_END {
            self.time = DAY_START;
            self.day += 1;
        }
        self.time
    }
}

/// One-shot "all mods loaded" notification, as the real host would send.
fn announce_launch(mut launched: EventWriter<GameLaunchedEvent>) {
    launched.send(GameLaunchedEvent);
}

/// Advances the clock every frame and forwards the change to the plugin.
/// Exits after two full in-game days.
fn tick_clock(
    mut clock: ResMut<GameClock>,
    mut times: EventWriter<TimeChangedEvent>,
    mut exit: EventWriter<AppExit>,
) {
    let time = clock.tick();
    times.send(TimeChangedEvent { time });
    if clock.day > 2 {
        exit.send(AppExit::Success);
    }
}

/// The demo "audio engine": logs every playback request.
fn play_sounds(mut sounds: EventReader<PlaySoundEvent>, clock: Res<GameClock>) {
    for sound in sounds.read() {
        info!("day {} {:>4}: playing '{}'", clock.day, clock.time, sound.cue);
    }
}

/// Logs what the mod registered with the settings menu, once.
fn log_menu_once(menu: Res<SettingsMenu>, mut done: Local<bool>) {
    if *done || menu.registrations.is_empty() {
        return;
    }
    *done = true;
    for reg in &menu.registrations {
        info!(
            "settings menu: '{}' registered {} options",
            reg.mod_name,
            reg.options.len()
        );
        for option in &reg.options {
            match option {
                MenuOption::Number {
                    label, min, max, ..
                } => info!("  [number] {label} ({min}..={max})"),
                MenuOption::Choice { label, choices, .. } => {
                    info!("  [choice] {label} ({} sounds)", choices.len())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_rolls_minutes_into_hours() {
        let mut clock = GameClock::default();
        assert_eq!(clock.tick(), 610);
        for _ in 0..5 {
            clock.tick();
        }
        assert_eq!(clock.time, 700);
    }

    #[test]
    fn test_clock_wraps_to_next_day() {
        let mut clock = GameClock {
            day: 1,
            time: DAY_END - MINUTES_PER_TICK,
        };
        assert_eq!(clock.tick(), DAY_END);
        assert_eq!(clock.tick(), DAY_START);
        assert_eq!(clock.day, 2);
    }

    #[test]
    fn test_clock_passes_through_every_threshold_default() {
        // The ten-minute grid must land exactly on the default thresholds,
        // otherwise the warnings never fire.
        let mut clock = GameClock::default();
        let mut seen = Vec::new();
        while clock.day == 1 {
            seen.push(clock.tick());
        }
        for threshold in [2300, 2400, 2500] {
            assert!(seen.contains(&threshold), "missing {threshold}");
        }
    }
}
