//! Registration with the host's optional settings-menu service.
//!
//! Some hosts ship a shared configuration-menu mod that other mods register
//! their options with. That service is modeled as an optional
//! [`SettingsMenu`] resource: when the host provides one, the plugin
//! registers its options on [`GameLaunchedEvent`]; when it doesn't, the
//! plugin skips registration silently and the config file stays the only
//! way to change settings.
//!
//! Widget rendering is entirely the host's concern. A registration is just
//! data: labeled options with type-erased accessors the menu invokes
//! against the ECS world, plus reset/save handlers.

use bevy::prelude::*;

use crate::config::{ConfigPath, SleepWarningConfig};
use crate::delayed_sound::DelayedSoundQueue;
use crate::events::GameLaunchedEvent;
use crate::sounds::{allowed_sounds, format_sound};
use crate::time_format::{format_time, slot_to_time, time_to_slot, DISABLED, MAX_SLOT};

/// Delay before the preview playback when a new sound is picked.
pub const PREVIEW_DELAY_MS: u64 = 300;

// =============================================================================
// Menu service types
// =============================================================================

/// Reads a numeric option's current value out of the world.
pub type GetIntFn = Box<dyn Fn(&World) -> i32 + Send + Sync>;
/// Writes a new numeric option value into the world.
pub type SetIntFn = Box<dyn Fn(&mut World, i32) + Send + Sync>;
/// Reads a text option's current value out of the world.
pub type GetTextFn = Box<dyn Fn(&World) -> String + Send + Sync>;
/// Writes a new text option value into the world.
pub type SetTextFn = Box<dyn Fn(&mut World, &str) + Send + Sync>;
/// Handler invoked by the menu's Reset and Save buttons.
pub type MenuHandlerFn = Box<dyn Fn(&mut World) + Send + Sync>;

/// A single option shown by the host's configuration menu.
pub enum MenuOption {
    /// Integer slider.
    Number {
        label: String,
        min: i32,
        max: i32,
        get: GetIntFn,
        set: SetIntFn,
        /// Renders a raw slider value as display text.
        format: fn(i32) -> String,
    },
    /// Choice from a fixed list of values.
    Choice {
        label: String,
        choices: Vec<String>,
        get: GetTextFn,
        set: SetTextFn,
        /// Renders a raw choice value as display text.
        format: fn(&str) -> String,
    },
}

/// Everything one mod registers with the menu service.
pub struct MenuRegistration {
    pub mod_name: String,
    pub options: Vec<MenuOption>,
    /// Restores the defaults in the world. Does not save.
    pub on_reset: MenuHandlerFn,
    /// Persists the current configuration. Errors are logged, never
    /// surfaced to the menu.
    pub on_save: MenuHandlerFn,
}

/// The host-provided settings-menu service.
///
/// Present in the world only when the host ships a configuration menu.
/// Checked once, when the game-launched notification arrives.
#[derive(Resource, Default)]
pub struct SettingsMenu {
    pub registrations: Vec<MenuRegistration>,
}

// =============================================================================
// Registration
// =============================================================================

/// Registers this mod's options when the game launches, if the host
/// provides a settings menu. Without the service this is a silent no-op.
pub fn register_on_launch(
    mut launched: EventReader<GameLaunchedEvent>,
    menu: Option<ResMut<SettingsMenu>>,
) {
    if launched.read().next().is_none() {
        return;
    }
    let Some(mut menu) = menu else {
        debug!("sleep_warning: no settings-menu service found, skipping registration");
        return;
    };
    menu.registrations.push(build_registration());
    info!("sleep_warning: registered settings-menu options");
}

/// Builds the full registration: reset/save handlers, one slider per
/// threshold, and the warning-sound selector.
pub fn build_registration() -> MenuRegistration {
    MenuRegistration {
        mod_name: "Sleep Warning".to_string(),
        options: vec![
            threshold_option(
                "First warn time",
                |config| config.first_warn_time,
                |config, time| config.first_warn_time = time,
            ),
            threshold_option(
                "Second warn time",
                |config| config.second_warn_time,
                |config, time| config.second_warn_time = time,
            ),
            threshold_option(
                "Third warn time",
                |config| config.third_warn_time,
                |config, time| config.third_warn_time = time,
            ),
            sound_option(),
        ],
        on_reset: Box::new(|world: &mut World| {
            world.insert_resource(SleepWarningConfig::default());
        }),
        on_save: Box::new(|world: &mut World| {
            let Some(path) = world.resource::<ConfigPath>().0.clone() else {
                return;
            };
            let config = world.resource::<SleepWarningConfig>();
            if let Err(e) = config.save(&path) {
                warn!("sleep_warning: failed to save {}: {e}", path.display());
            }
        }),
    }
}

/// A threshold slider. The menu works in slot encoding (min -1 for "off",
/// max 40 for 2:00 AM); the config stores the packed clock encoding, so the
/// accessors convert on the way through.
fn threshold_option(
    label: &str,
    get_field: fn(&SleepWarningConfig) -> i32,
    set_field: fn(&mut SleepWarningConfig, i32),
) -> MenuOption {
    MenuOption::Number {
        label: label.to_string(),
        min: DISABLED,
        max: MAX_SLOT,
        get: Box::new(move |world: &World| {
            time_to_slot(get_field(world.resource::<SleepWarningConfig>()))
        }),
        set: Box::new(move |world: &mut World, slot: i32| {
            let time = slot_to_time(slot);
            set_field(&mut world.resource_mut::<SleepWarningConfig>(), time);
        }),
        format: |slot| format_time(slot_to_time(slot)),
    }
}

/// The warning-sound selector. Picking a value schedules a one-shot preview
/// of the new cue before the value would be persisted.
fn sound_option() -> MenuOption {
    MenuOption::Choice {
        label: "Warning sound".to_string(),
        choices: allowed_sounds(),
        get: Box::new(|world: &World| {
            world
                .resource::<SleepWarningConfig>()
                .warning_sound
                .clone()
        }),
        set: Box::new(|world: &mut World, cue: &str| {
            world
                .resource_mut::<DelayedSoundQueue>()
                .schedule(cue, PREVIEW_DELAY_MS);
            world.resource_mut::<SleepWarningConfig>().warning_sound = cue.to_string();
        }),
        format: |cue| format_sound(cue).to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_world() -> World {
        let mut world = World::new();
        world.insert_resource(SleepWarningConfig::default());
        world.insert_resource(DelayedSoundQueue::default());
        world.insert_resource(ConfigPath(None));
        world
    }

    #[test]
    fn test_registration_shape() {
        let reg = build_registration();
        assert_eq!(reg.mod_name, "Sleep Warning");
        assert_eq!(reg.options.len(), 4);
        for option in &reg.options[..3] {
            match option {
                MenuOption::Number { min, max, .. } => {
                    assert_eq!(*min, -1);
                    assert_eq!(*max, 40);
                }
                MenuOption::Choice { .. } => panic!("thresholds should be numeric options"),
            }
        }
        match &reg.options[3] {
            MenuOption::Choice { choices, .. } => {
                assert_eq!(*choices, allowed_sounds());
            }
            MenuOption::Number { .. } => panic!("sound should be a choice option"),
        }
    }

    #[test]
    fn test_threshold_accessors_convert_encodings() {
        let mut world = test_world();
        let reg = build_registration();
        let MenuOption::Number {
            get, set, format, ..
        } = &reg.options[0]
        else {
            panic!("expected a number option");
        };

        // Default first threshold 2300 -> slot 34.
        assert_eq!(get(&world), 34);
        assert_eq!(format(34), "11:00 PM");
        assert_eq!(format(DISABLED), "Off");

        set(&mut world, 20); // slot 20 -> 4:00 PM
        assert_eq!(
            world.resource::<SleepWarningConfig>().first_warn_time,
            1600
        );
        set(&mut world, DISABLED);
        assert_eq!(world.resource::<SleepWarningConfig>().first_warn_time, -1);
        assert_eq!(get(&world), DISABLED);
    }

    #[test]
    fn test_sound_setter_previews_before_storing() {
        let mut world = test_world();
        let reg = build_registration();
        let MenuOption::Choice {
            get, set, format, ..
        } = &reg.options[3]
        else {
            panic!("expected a choice option");
        };

        assert_eq!(get(&world), "crystal");
        assert_eq!(format("crystal"), "Ding (Default)");

        set(&mut world, "owl");
        assert_eq!(world.resource::<SleepWarningConfig>().warning_sound, "owl");
        let queue = world.resource::<DelayedSoundQueue>();
        let pending: Vec<(&str, Duration)> = queue.pending().collect();
        assert_eq!(pending, vec![("owl", Duration::from_millis(PREVIEW_DELAY_MS))]);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut world = test_world();
        world.resource_mut::<SleepWarningConfig>().first_warn_time = 600;
        world.resource_mut::<SleepWarningConfig>().warning_sound = "owl".to_string();

        let reg = build_registration();
        (reg.on_reset)(&mut world);
        assert_eq!(
            *world.resource::<SleepWarningConfig>(),
            SleepWarningConfig::default()
        );
    }

    #[test]
    fn test_save_without_path_is_a_no_op() {
        let mut world = test_world();
        let reg = build_registration();
        (reg.on_save)(&mut world);
    }

    #[test]
    fn test_save_writes_config_file() {
        let path = std::env::temp_dir().join(format!(
            "sleep_warning_{}_menu_save.json",
            std::process::id()
        ));
        let mut world = test_world();
        world.insert_resource(ConfigPath(Some(path.clone())));
        world.resource_mut::<SleepWarningConfig>().third_warn_time = -1;

        let reg = build_registration();
        (reg.on_save)(&mut world);

        let saved = SleepWarningConfig::load(&path).expect("load saved config");
        assert_eq!(saved.third_warn_time, -1);
        let _ = std::fs::remove_file(&path);
    }
}
