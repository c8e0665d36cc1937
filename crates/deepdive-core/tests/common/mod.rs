// Recording fakes for the scene graph and audio collaborators.

#![allow(dead_code)]

use deepdive_core::*;
use std::collections::HashMap;

#[derive(Default)]
pub struct FakeScene {
    names: Vec<String>,
    pub visible: HashMap<EntityHandle, bool>,
    pub opacity: HashMap<EntityHandle, f32>,
    pub applied: Vec<SceneCommand>,
}

impl FakeScene {
    pub fn with_entities(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Every entity the page normally ships with.
    pub fn full() -> Self {
        let mut names = vec![CAMERA_ID, GALLERY_WALL_ID, OVERLAY_ID, PLANET_ID];
        names.extend(PANEL_IDS);
        names.extend(["coral-hotspot", "sst-hotspot"]);
        Self::with_entities(&names)
    }

    pub fn handle_of(&self, name: &str) -> Option<EntityHandle> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| EntityHandle(i as u32))
    }
}

impl SceneGraph for FakeScene {
    fn resolve(&mut self, name: &str) -> Option<EntityHandle> {
        self.handle_of(name)
    }

    fn reserve(&mut self, name: &str) -> EntityHandle {
        self.names.push(name.to_string());
        EntityHandle((self.names.len() - 1) as u32)
    }

    fn is_visible(&self, entity: EntityHandle) -> bool {
        self.visible.get(&entity).copied().unwrap_or(false)
    }

    fn material_opacity(&self, entity: EntityHandle) -> Option<f32> {
        self.opacity.get(&entity).copied()
    }

    fn apply(&mut self, command: &SceneCommand) {
        match command {
            SceneCommand::SetVisible { entity, visible } => {
                self.visible.insert(*entity, *visible);
            }
            SceneCommand::SetMaterialProperty {
                entity,
                property: "opacity",
                value,
            } => {
                self.opacity.insert(*entity, *value);
            }
            SceneCommand::SpawnSphere(spec) => {
                if let Some(o) = spec.material.opacity {
                    self.opacity.insert(spec.handle, o);
                }
            }
            _ => {}
        }
        self.applied.push(command.clone());
    }
}

#[derive(Default)]
pub struct FakeAudio {
    pub loaded: Vec<String>,
    pub played: Vec<String>,
    pub scheduled: Vec<(String, u32)>,
    pub loops: Vec<String>,
    pub stopped_all: usize,
    pub volume: Option<f32>,
}

impl AudioPlayer for FakeAudio {
    fn play_one_shot(&mut self, key: &str) -> Result<(), CoreError> {
        if !self.loaded.iter().any(|k| k == key) {
            return Err(CoreError::MissingAsset(key.to_string()));
        }
        self.played.push(key.to_string());
        Ok(())
    }

    fn schedule_one_shot(&mut self, key: &str, delay_ms: u32) {
        self.scheduled.push((key.to_string(), delay_ms));
    }

    fn play_loop(&mut self, key: &str) -> Result<(), CoreError> {
        self.loops.push(key.to_string());
        Ok(())
    }

    fn stop(&mut self, key: &str) {
        self.loops.retain(|k| k != key);
    }

    fn stop_all(&mut self) {
        self.loops.clear();
        self.stopped_all += 1;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = Some(volume);
    }
}

pub fn audio_keys(commands: &[Command]) -> Vec<String> {
    commands
        .iter()
        .filter_map(|c| match c {
            Command::Audio(AudioCommand::PlayOneShot { key, .. }) => Some(key.clone()),
            _ => None,
        })
        .collect()
}
