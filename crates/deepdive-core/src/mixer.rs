//! Master volume/mute state, per-cue gain policy and the asset catalog.

use crate::command::{AudioCommand, Command};
use crate::constants::*;
use crate::scene::{SceneMode, SceneRegistry};
use fnv::FnvHashMap;

/// Key → asset URL for every clip the experience can play.
#[derive(Clone, Debug)]
pub struct AudioCatalog {
    entries: FnvHashMap<&'static str, &'static str>,
}

impl AudioCatalog {
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    /// Keys from `keys` that have no asset, in the order given.
    pub fn missing<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        keys.into_iter().filter(|k| self.get(k).is_none()).collect()
    }
}

impl Default for AudioCatalog {
    fn default() -> Self {
        let entries = [
            ("space", "assets/audio/space-narration.mp3"),
            ("ocean-surface", "assets/audio/ocean-narration.mp3"),
            ("coral-reef", "assets/audio/coral-narration.mp3"),
            ("sst-data", "assets/audio/sst-explanation.mp3"),
            ("coral-bleaching", "assets/audio/coral-bleaching.mp3"),
            ("sea-level-rise", "assets/audio/sea-level-rise.mp3"),
            ("ocean-ambient", "assets/audio/ocean-ambient.mp3"),
            ("space-ambient", "assets/audio/space-ambient.mp3"),
        ]
        .into_iter()
        .collect();
        Self { entries }
    }
}

/// Gain applied to a one-shot clip: ambience sits under narration.
#[inline]
pub fn one_shot_gain(key: &str) -> f32 {
    if key.contains("ambient") {
        AMBIENT_ONE_SHOT_GAIN
    } else {
        NARRATION_ONE_SHOT_GAIN
    }
}

/// Linear falloff inside `max_distance`, floored so a clip never plays
/// inaudibly. `None` outside the radius.
#[inline]
pub fn proximity_volume(distance: f32, max_distance: f32) -> Option<f32> {
    if distance > max_distance || max_distance <= 0.0 {
        return None;
    }
    Some((1.0 - distance / max_distance).clamp(PROXIMITY_MIN_GAIN, 1.0))
}

/// Commands for entering a scene's soundscape: silence everything, start the
/// ambient loop, then narrate after a short delay.
pub fn scene_soundscape(registry: &SceneRegistry, scene: SceneMode) -> Vec<AudioCommand> {
    let preset = registry.preset(scene);
    vec![
        AudioCommand::StopAll,
        AudioCommand::PlayLoop(preset.ambient_key.to_string()),
        AudioCommand::PlayOneShot {
            key: preset.narration_key.to_string(),
            delay_ms: preset.narration_delay_ms,
        },
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct AudioMixer {
    volume: f32,
    muted: bool,
}

impl Default for AudioMixer {
    fn default() -> Self {
        Self {
            volume: DEFAULT_MASTER_VOLUME,
            muted: false,
        }
    }
}

impl AudioMixer {
    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    pub fn toggle_mute(&mut self, out: &mut Vec<Command>) {
        self.muted = !self.muted;
        log::info!("[audio] muted={}", self.muted);
        out.push(self.master_command());
    }

    /// Store a new master volume; it is only applied while unmuted.
    pub fn set_volume(&mut self, volume: f32, out: &mut Vec<Command>) {
        self.volume = volume.clamp(0.0, 1.0);
        if !self.muted {
            out.push(self.master_command());
        }
    }

    fn master_command(&self) -> Command {
        Command::Audio(AudioCommand::SetVolume(self.effective_volume()))
    }
}
