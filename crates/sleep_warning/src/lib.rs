//! Bedtime warning add-on.
//!
//! Plays an audible warning as the in-game clock approaches a configurable
//! bedtime, repeating the warning with escalating intensity at up to three
//! thresholds, and registers its settings with the host's optional
//! configuration menu.
//!
//! The host wires the plugin in, forwards clock changes as
//! [`events::TimeChangedEvent`]s, emits one [`events::GameLaunchedEvent`]
//! after startup, and plays whatever [`events::PlaySoundEvent`]s the plugin
//! emits. See `crates/app` for a complete (headless) host.

use std::path::PathBuf;

use bevy::prelude::*;

pub mod config;
pub mod delayed_sound;
pub mod events;
pub mod monitor;
pub mod settings_menu;
pub mod sounds;
pub mod time_format;


use config::{ConfigPath, SleepWarningConfig};
use delayed_sound::DelayedSoundQueue;
use events::{GameLaunchedEvent, PlaySoundEvent, TimeChangedEvent};

/// The add-on's bevy plugin.
///
/// `config_path` is where settings are read from at build time and written
/// back by the menu's save handler; `None` keeps the configuration in
/// memory only.
#[derive(Debug, Clone, Default)]
pub struct SleepWarningPlugin {
    pub config_path: Option<PathBuf>,
}

impl SleepWarningPlugin {
    /// Plugin persisting its configuration at `path`.
    pub fn with_config_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }
}

impl Plugin for SleepWarningPlugin {
    fn build(&self, app: &mut App) {
        let config = match &self.config_path {
            Some(path) => SleepWarningConfig::load_or_default(path),
            None => SleepWarningConfig::default(),
        };

        app.insert_resource(config)
            .insert_resource(ConfigPath(self.config_path.clone()))
            .init_resource::<DelayedSoundQueue>()
            .add_event::<TimeChangedEvent>()
            .add_event::<GameLaunchedEvent>()
            .add_event::<PlaySoundEvent>()
            // Chained so a zero-delay repeat scheduled by the monitor is
            // drained on the same frame.
            .add_systems(
                Update,
                (
                    settings_menu::register_on_launch,
                    monitor::check_bedtime,
                    delayed_sound::drain_due_sounds,
                )
                    .chain(),
            );
    }
}
