//! Scene identities and the immutable registry of per-scene camera poses and
//! audio cues.
//!
//! The registry is built once at startup and handed to the controllers; it is
//! never mutated afterwards.

use crate::constants::*;
use glam::Vec3;

/// One of the three top-level environments the camera can occupy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SceneMode {
    #[default]
    Space,
    OceanSurface,
    CoralReef,
}

impl SceneMode {
    pub const ALL: [SceneMode; 3] = [
        SceneMode::Space,
        SceneMode::OceanSurface,
        SceneMode::CoralReef,
    ];

    /// Stable key used for narration cues and logging.
    pub fn key(self) -> &'static str {
        match self {
            SceneMode::Space => "space",
            SceneMode::OceanSurface => "ocean-surface",
            SceneMode::CoralReef => "coral-reef",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Camera pose and audio identity of a single scene.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenePreset {
    pub camera_position: Vec3,
    pub narration_key: &'static str,
    pub ambient_key: &'static str,
    pub narration_delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneRegistry {
    space: ScenePreset,
    ocean_surface: ScenePreset,
    coral_reef: ScenePreset,
    pub gallery_camera_position: Vec3,
}

impl SceneRegistry {
    pub fn new(
        space: ScenePreset,
        ocean_surface: ScenePreset,
        coral_reef: ScenePreset,
        gallery_camera_position: Vec3,
    ) -> Self {
        Self {
            space,
            ocean_surface,
            coral_reef,
            gallery_camera_position,
        }
    }

    pub fn preset(&self, scene: SceneMode) -> &ScenePreset {
        match scene {
            SceneMode::Space => &self.space,
            SceneMode::OceanSurface => &self.ocean_surface,
            SceneMode::CoralReef => &self.coral_reef,
        }
    }

    #[inline]
    pub fn camera_position(&self, scene: SceneMode) -> Vec3 {
        self.preset(scene).camera_position
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self {
            space: ScenePreset {
                camera_position: vec3_of(SPACE_CAMERA_POS),
                narration_key: SceneMode::Space.key(),
                ambient_key: "space-ambient",
                narration_delay_ms: SPACE_NARRATION_DELAY_MS,
            },
            ocean_surface: ScenePreset {
                camera_position: vec3_of(OCEAN_SURFACE_CAMERA_POS),
                narration_key: SceneMode::OceanSurface.key(),
                ambient_key: "ocean-ambient",
                narration_delay_ms: OCEAN_NARRATION_DELAY_MS,
            },
            coral_reef: ScenePreset {
                camera_position: vec3_of(CORAL_REEF_CAMERA_POS),
                narration_key: SceneMode::CoralReef.key(),
                ambient_key: "ocean-ambient",
                narration_delay_ms: REEF_NARRATION_DELAY_MS,
            },
            gallery_camera_position: vec3_of(GALLERY_WALL_CAMERA_POS),
        }
    }
}

/// Fixed, ordered informational panels on the gallery wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GalleryPanel {
    LunarGravity,
    OceanCurrents,
    Temperature,
}

impl GalleryPanel {
    pub const ORDER: [GalleryPanel; PANEL_COUNT] = [
        GalleryPanel::LunarGravity,
        GalleryPanel::OceanCurrents,
        GalleryPanel::Temperature,
    ];

    pub fn at(index: usize) -> Option<Self> {
        Self::ORDER.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn entity_id(self) -> &'static str {
        PANEL_IDS[self.index()]
    }
}
