//! Delay scheduling for warning playback.
//!
//! The monitor wants "play this cue N times, half a second apart" without
//! blocking anything. Requests land in [`DelayedSoundQueue`];
//! [`drain_due_sounds`] subtracts the frame delta each update and emits a
//! [`PlaySoundEvent`] for every entry whose delay has elapsed. Entries are
//! not cancellable.

use std::time::Duration;

use bevy::prelude::*;

use crate::events::PlaySoundEvent;

/// A single scheduled playback.
#[derive(Debug, Clone)]
struct DelayedSound {
    cue: String,
    remaining: Duration,
}

/// Pending playback requests, in scheduling order.
#[derive(Resource, Debug, Default)]
pub struct DelayedSoundQueue {
    entries: Vec<DelayedSound>,
}

impl DelayedSoundQueue {
    /// Schedule `cue` to play after `delay_ms` milliseconds.
    ///
    /// A zero delay fires on the next queue tick.
    pub fn schedule(&mut self, cue: &str, delay_ms: u64) {
        self.entries.push(DelayedSound {
            cue: cue.to_string(),
            remaining: Duration::from_millis(delay_ms),
        });
    }

    /// Advance all entries by `delta` and return the cues that came due,
    /// preserving scheduling order among entries due on the same tick.
    pub fn tick(&mut self, delta: Duration) -> Vec<String> {
        let mut due = Vec::new();
        self.entries.retain_mut(|entry| {
            entry.remaining = entry.remaining.saturating_sub(delta);
            if entry.remaining.is_zero() {
                due.push(entry.cue.clone());
                false
            } else {
                true
            }
        });
        due
    }

    /// Pending (cue, remaining delay) pairs in scheduling order.
    pub fn pending(&self) -> impl Iterator<Item = (&str, Duration)> {
        self.entries.iter().map(|e| (e.cue.as_str(), e.remaining))
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Emits a [`PlaySoundEvent`] for every queued entry whose delay has elapsed.
pub fn drain_due_sounds(
    time: Res<Time>,
    mut queue: ResMut<DelayedSoundQueue>,
    mut sounds: EventWriter<PlaySoundEvent>,
) {
    if queue.is_empty() {
        return;
    }
    for cue in queue.tick(time.delta()) {
        sounds.send(PlaySoundEvent { cue });
    }
}
