//! Events crossing the host/plugin boundary.
//!
//! The host game owns the clock and the audio engine: it feeds clock changes
//! in as [`TimeChangedEvent`]s and plays whatever [`PlaySoundEvent`]s come
//! back out. No audio playback happens in this crate.

use bevy::prelude::*;

/// Sent by the host whenever the in-game clock advances.
///
/// `time` is the host's packed clock encoding: `hour * 100 + minute`, with
/// hours running from 6 (6:00 AM) to 26 (2:00 AM the following day), so
/// `2430` is half past midnight.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeChangedEvent {
    pub time: i32,
}

/// Sent once by the host after all mods are loaded. Integration with
/// optional host services (the settings menu) happens on this event.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct GameLaunchedEvent;

/// Fire-and-forget request for the host audio engine to play a sound cue.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct PlaySoundEvent {
    pub cue: String,
}

impl PlaySoundEvent {
    pub fn new(cue: impl Into<String>) -> Self {
        Self { cue: cue.into() }
    }
}
