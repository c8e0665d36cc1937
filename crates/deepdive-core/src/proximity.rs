//! Rate-limited audio cues fired when the listener walks into a hotspot.

use crate::command::{AudioCommand, Command, EntityHandle, SceneCommand};
use crate::command::{Animation, Easing};
use crate::constants::*;
use glam::Vec3;

/// Placement of a hotspot as authored in the scene setup.
#[derive(Clone, Debug, PartialEq)]
pub struct HotspotConfig {
    pub id: String,
    pub position: Vec3,
    pub audio_key: String,
    pub trigger_distance: f32,
    pub cooldown_ms: u64,
}

impl HotspotConfig {
    pub fn new(id: impl Into<String>, position: Vec3, audio_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position,
            audio_key: audio_key.into(),
            trigger_distance: DEFAULT_TRIGGER_DISTANCE,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
        }
    }

    pub fn with_trigger_distance(mut self, meters: f32) -> Self {
        self.trigger_distance = meters;
        self
    }

    pub fn with_cooldown_ms(mut self, ms: u64) -> Self {
        self.cooldown_ms = ms;
        self
    }
}

/// The two hotspots placed in the reef and sea-surface-temperature exhibits.
pub fn default_hotspots() -> Vec<HotspotConfig> {
    vec![
        HotspotConfig::new("coral-hotspot", Vec3::new(-3.0, 1.0, 0.0), "coral-bleaching")
            .with_trigger_distance(0.3),
        HotspotConfig::new("sst-hotspot", Vec3::new(2.0, 0.0, -9.0), "sst-data")
            .with_trigger_distance(0.4),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct HotspotTrigger {
    pub config: HotspotConfig,
    pub entity: Option<EntityHandle>,
    /// `None` until the first firing, so the first entry is never throttled.
    pub last_fired_at_ms: Option<u64>,
    pub in_range: bool,
}

impl HotspotTrigger {
    pub fn new(config: HotspotConfig, entity: Option<EntityHandle>) -> Self {
        Self {
            config,
            entity,
            last_fired_at_ms: None,
            in_range: false,
        }
    }

    /// Advance the trigger with a distance sample. Returns true when the cue
    /// should play.
    ///
    /// Entering the radius marks the trigger in range even when the cooldown
    /// suppresses the cue, so a listener who arrived during cooldown must
    /// leave and re-enter before it can fire again.
    pub fn update(&mut self, now_ms: u64, distance: f32) -> bool {
        let inside = distance <= self.config.trigger_distance;
        if inside && !self.in_range {
            let cooled = self
                .last_fired_at_ms
                .map_or(true, |t| now_ms.saturating_sub(t) > self.config.cooldown_ms);
            if cooled {
                self.last_fired_at_ms = Some(now_ms);
            }
            self.in_range = true;
            cooled
        } else {
            if !inside {
                self.in_range = false;
            }
            false
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProximityAudioTrigger {
    hotspots: Vec<HotspotTrigger>,
}

impl ProximityAudioTrigger {
    pub fn new(hotspots: Vec<HotspotTrigger>) -> Self {
        Self { hotspots }
    }

    pub fn hotspots(&self) -> &[HotspotTrigger] {
        &self.hotspots
    }

    /// One simulation tick: sample every hotspot against the listener.
    pub fn tick(&mut self, now_ms: u64, listener: Vec3, out: &mut Vec<Command>) {
        for hotspot in &mut self.hotspots {
            let distance = listener.distance(hotspot.config.position);
            if !hotspot.update(now_ms, distance) {
                continue;
            }
            log::info!(
                "[hotspot] {} fired cue {} at d={:.2}",
                hotspot.config.id,
                hotspot.config.audio_key,
                distance
            );
            out.push(Command::Audio(AudioCommand::one_shot(
                hotspot.config.audio_key.clone(),
            )));
            if let Some(entity) = hotspot.entity {
                out.push(Command::Scene(SceneCommand::Animate {
                    entity,
                    animation: Animation::scale(
                        HOTSPOT_PULSE_SCALE,
                        HOTSPOT_PULSE_MS,
                        Easing::EaseOutElastic,
                    )
                    .alternate(),
                }));
            }
        }
    }
}
