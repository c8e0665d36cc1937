//! The single long-lived object the frontend talks to.
//!
//! Input events and frame ticks arrive here, are routed to the owning
//! controller, and come back out as one batch of commands.

use crate::command::{AudioCommand, Command, HudMode};
use crate::error::CoreError;
use crate::host::SceneGraph;
use crate::input::InputEvent;
use crate::mixer::{scene_soundscape, AudioCatalog, AudioMixer};
use crate::navigation::{NavigationController, NavigationState, Rig};
use crate::planet::PlanetDecorator;
use crate::proximity::{default_hotspots, HotspotConfig, HotspotTrigger, ProximityAudioTrigger};
use crate::scene::{SceneMode, SceneRegistry};
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub registry: SceneRegistry,
    pub hotspots: Vec<HotspotConfig>,
    pub catalog: AudioCatalog,
    pub decorate_planet: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            registry: SceneRegistry::default(),
            hotspots: default_hotspots(),
            catalog: AudioCatalog::default(),
            decorate_planet: true,
        }
    }
}

pub struct Session {
    pub navigation: NavigationController,
    pub proximity: ProximityAudioTrigger,
    pub planet: PlanetDecorator,
    pub mixer: AudioMixer,
    pub catalog: AudioCatalog,
}

impl Session {
    /// Resolve every entity the controllers need and build the planet
    /// layers. The setup commands are appended to `out`.
    pub fn new(config: SessionConfig, graph: &mut dyn SceneGraph, out: &mut Vec<Command>) -> Self {
        for key in config.catalog.missing(cue_keys(&config)) {
            CoreError::MissingAsset(key.to_string()).report();
        }
        let rig = Rig::resolve(graph);
        let hotspots = config
            .hotspots
            .into_iter()
            .map(|c| {
                let entity = graph.resolve(&c.id);
                HotspotTrigger::new(c, entity)
            })
            .collect();
        let planet = if config.decorate_planet {
            PlanetDecorator::build(graph, out)
        } else {
            PlanetDecorator::default()
        };
        out.push(Command::Hud(HudMode::Roaming));
        Self {
            navigation: NavigationController::new(config.registry, rig),
            proximity: ProximityAudioTrigger::new(hotspots),
            planet,
            mixer: AudioMixer::default(),
            catalog: config.catalog,
        }
    }

    pub fn state(&self) -> &NavigationState {
        self.navigation.state()
    }

    pub fn handle_input(
        &mut self,
        event: InputEvent,
        graph: &dyn SceneGraph,
        out: &mut Vec<Command>,
    ) {
        match event {
            InputEvent::Key('1') => self.planet.toggle_enhancement(out),
            InputEvent::Key('2') => self.planet.toggle_layers(graph, out),
            InputEvent::Key('m' | 'M') => self.mixer.toggle_mute(out),
            InputEvent::Key(c) => {
                if let Some(scene) = scene_for_key(c) {
                    self.travel(scene, out);
                }
            }
            nav => self.navigation.handle(nav, graph, out),
        }
    }

    /// Start the soundscape of the initial scene once audio is unlocked.
    pub fn start_audio(&self, out: &mut Vec<Command>) {
        let scene = self.state().current_scene;
        out.extend(
            scene_soundscape(self.navigation.registry(), scene)
                .into_iter()
                .map(Command::Audio),
        );
    }

    /// Direct scene entry. Suppressed while the gallery owns the arrow keys.
    pub fn travel(&mut self, scene: SceneMode, out: &mut Vec<Command>) {
        if self.state().in_gallery {
            log::debug!("[nav] ignoring travel to {} while in gallery", scene.key());
            return;
        }
        let registry = self.navigation.registry();
        let outgoing = registry.preset(self.state().current_scene).ambient_key;
        let incoming = registry.preset(scene).ambient_key;
        // A bed shared by both scenes keeps playing across the move.
        if outgoing != incoming {
            out.push(Command::Audio(AudioCommand::Stop(outgoing.to_string())));
        }
        out.push(Command::Audio(AudioCommand::PlayLoop(incoming.to_string())));
        self.navigation.transition_to(scene, out);
    }

    pub fn tick(&mut self, now_ms: u64, listener: Vec3, out: &mut Vec<Command>) {
        self.proximity.tick(now_ms, listener, out);
    }
}

/// Every cue the configured scenes and hotspots can ask for.
fn cue_keys(config: &SessionConfig) -> impl Iterator<Item = &str> {
    SceneMode::ALL
        .iter()
        .flat_map(move |&scene| {
            let preset = config.registry.preset(scene);
            [preset.narration_key, preset.ambient_key]
        })
        .chain(config.hotspots.iter().map(|h| h.audio_key.as_str()))
}

/// Scene shortcuts: `s` space, `o` ocean surface, `r` coral reef.
#[inline]
pub fn scene_for_key(c: char) -> Option<SceneMode> {
    match c.to_ascii_lowercase() {
        's' => Some(SceneMode::Space),
        'o' => Some(SceneMode::OceanSurface),
        'r' => Some(SceneMode::CoralReef),
        _ => None,
    }
}
