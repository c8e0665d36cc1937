//! Declarative commands emitted by the controllers.
//!
//! Controllers never touch the host directly: they append `Command`s to an
//! outbox and the frontend dispatches them to its `SceneGraph` and
//! `AudioPlayer` implementations.

use glam::Vec3;

/// Opaque index into the host's entity table, resolved once at setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    /// A-Frame's default when a tween names no easing.
    EaseInQuad,
    EaseInOutQuad,
    EaseOutElastic,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimTarget {
    Vec3(Vec3),
    Scalar(f32),
}

/// A single tween on one property of an entity.
///
/// `slot` distinguishes concurrent animations on the same entity
/// (`animation`, `animation__rotation`, ...); writing a slot replaces the
/// tween previously stored there.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub slot: &'static str,
    pub property: &'static str,
    pub to: AnimTarget,
    pub dur_ms: u32,
    pub easing: Easing,
    pub looped: bool,
    pub alternate: bool,
}

impl Animation {
    pub fn new(property: &'static str, to: AnimTarget, dur_ms: u32, easing: Easing) -> Self {
        Self {
            slot: "animation",
            property,
            to,
            dur_ms,
            easing,
            looped: false,
            alternate: false,
        }
    }

    /// Uniform scale tween, the most common cosmetic feedback.
    pub fn scale(to: f32, dur_ms: u32, easing: Easing) -> Self {
        Self::new("scale", AnimTarget::Vec3(Vec3::splat(to)), dur_ms, easing)
    }

    pub fn in_slot(mut self, slot: &'static str) -> Self {
        self.slot = slot;
        self
    }

    pub fn looped(mut self) -> Self {
        self.looped = true;
        self
    }

    pub fn alternate(mut self) -> Self {
        self.alternate = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shader {
    Standard,
    Flat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
    Double,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Material {
    pub shader: Option<Shader>,
    pub src: Option<&'static str>,
    pub color: Option<&'static str>,
    pub transparent: bool,
    pub opacity: Option<f32>,
    pub side: Option<Side>,
    pub metalness: Option<f32>,
    pub roughness: Option<f32>,
}

/// Description of a child sphere added to an existing entity.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereSpec {
    pub handle: EntityHandle,
    pub id: &'static str,
    pub parent: EntityHandle,
    pub radius: f32,
    pub position: Vec3,
    pub material: Material,
    pub animation: Option<Animation>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneCommand {
    SetPosition {
        entity: EntityHandle,
        position: Vec3,
    },
    SetRotation {
        entity: EntityHandle,
        rotation: Vec3,
    },
    SetVisible {
        entity: EntityHandle,
        visible: bool,
    },
    SetMaterial {
        entity: EntityHandle,
        material: Material,
    },
    SetMaterialProperty {
        entity: EntityHandle,
        property: &'static str,
        value: f32,
    },
    Animate {
        entity: EntityHandle,
        animation: Animation,
    },
    SpawnSphere(Box<SphereSpec>),
    /// Run `command` after `delay_ms` on the host's own timer.
    Scheduled {
        delay_ms: u32,
        command: Box<SceneCommand>,
    },
}

impl SceneCommand {
    pub fn entity(&self) -> EntityHandle {
        match self {
            SceneCommand::SetPosition { entity, .. }
            | SceneCommand::SetRotation { entity, .. }
            | SceneCommand::SetVisible { entity, .. }
            | SceneCommand::SetMaterial { entity, .. }
            | SceneCommand::SetMaterialProperty { entity, .. }
            | SceneCommand::Animate { entity, .. } => *entity,
            SceneCommand::SpawnSphere(spec) => spec.handle,
            SceneCommand::Scheduled { command, .. } => command.entity(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AudioCommand {
    PlayOneShot { key: String, delay_ms: u32 },
    PlayLoop(String),
    Stop(String),
    StopAll,
    /// Master gain, 0..1.
    SetVolume(f32),
}

impl AudioCommand {
    pub fn one_shot(key: impl Into<String>) -> Self {
        AudioCommand::PlayOneShot {
            key: key.into(),
            delay_ms: 0,
        }
    }
}

/// Which navigation help the HUD should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudMode {
    Roaming,
    Gallery,
}

impl HudMode {
    pub fn lines(self) -> [&'static str; 3] {
        match self {
            HudMode::Gallery => [
                "↑ Activate Panel • ↓ Return to Space",
                "← → Navigate Panels",
                "Press 1: Toggle Enhance • Press 2: Toggle Layers",
            ],
            HudMode::Roaming => [
                "↑ Enter Gallery • ↓ Return",
                "Hold ↑+Shift: Data Toggle",
                "Press 1: Toggle Enhance • Press 2: Toggle Layers",
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Scene(SceneCommand),
    Audio(AudioCommand),
    Hud(HudMode),
}

impl Command {
    pub fn is_camera_animation(&self, camera: EntityHandle) -> bool {
        matches!(
            self,
            Command::Scene(SceneCommand::Animate { entity, animation })
                if *entity == camera && animation.property == "position"
        )
    }
}
