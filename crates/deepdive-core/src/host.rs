//! Collaborator interfaces implemented by the frontend, and the dispatcher
//! that feeds them an outbox of commands.

use crate::command::{AudioCommand, Command, EntityHandle, HudMode, SceneCommand};
use crate::error::CoreError;

/// Retained scene graph addressed by handle. All writes are fire-and-forget.
pub trait SceneGraph {
    /// Look up an existing named entity. Called at setup only.
    fn resolve(&mut self, name: &str) -> Option<EntityHandle>;
    /// Allocate a handle for an entity that a later `SpawnSphere` creates.
    fn reserve(&mut self, name: &str) -> EntityHandle;
    fn is_visible(&self, entity: EntityHandle) -> bool;
    fn material_opacity(&self, entity: EntityHandle) -> Option<f32>;
    fn apply(&mut self, command: &SceneCommand);
}

pub trait AudioPlayer {
    fn play_one_shot(&mut self, key: &str) -> Result<(), CoreError>;
    /// Play after `delay_ms`; the buffer is looked up when the delay elapses.
    fn schedule_one_shot(&mut self, key: &str, delay_ms: u32);
    fn play_loop(&mut self, key: &str) -> Result<(), CoreError>;
    fn stop(&mut self, key: &str);
    fn stop_all(&mut self);
    fn set_volume(&mut self, volume: f32);
}

/// Route each command to its collaborator. Failures are logged, never raised.
pub fn dispatch<I>(
    commands: I,
    scene: &mut dyn SceneGraph,
    audio: &mut dyn AudioPlayer,
    mut hud: impl FnMut(HudMode),
) where
    I: IntoIterator<Item = Command>,
{
    for command in commands {
        match command {
            Command::Scene(cmd) => scene.apply(&cmd),
            Command::Audio(cmd) => play(audio, &cmd),
            Command::Hud(mode) => hud(mode),
        }
    }
}

fn play(audio: &mut dyn AudioPlayer, cmd: &AudioCommand) {
    let result = match cmd {
        AudioCommand::PlayOneShot { key, delay_ms: 0 } => audio.play_one_shot(key),
        AudioCommand::PlayOneShot { key, delay_ms } => {
            audio.schedule_one_shot(key, *delay_ms);
            Ok(())
        }
        AudioCommand::PlayLoop(key) => audio.play_loop(key),
        AudioCommand::Stop(key) => {
            audio.stop(key);
            Ok(())
        }
        AudioCommand::StopAll => {
            audio.stop_all();
            Ok(())
        }
        AudioCommand::SetVolume(volume) => {
            audio.set_volume(*volume);
            Ok(())
        }
    };
    if let Err(e) = result {
        e.report();
    }
}
