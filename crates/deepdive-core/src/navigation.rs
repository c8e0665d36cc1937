//! Scene travel and gallery-wall navigation.
//!
//! The controller owns `NavigationState` outright. Each handler runs to
//! completion, mutates the state, and appends the resulting commands to the
//! caller's outbox. Animation completion belongs to the host; nothing here
//! waits on it.

use crate::command::{
    AnimTarget, Animation, AudioCommand, Command, Easing, EntityHandle, HudMode, SceneCommand,
};
use crate::constants::*;
use crate::error::CoreError;
use crate::host::SceneGraph;
use crate::input::InputEvent;
use crate::scene::{GalleryPanel, SceneMode, SceneRegistry};
use glam::Vec3;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current_scene: SceneMode,
    pub in_gallery: bool,
    pub current_panel_index: usize,
}

/// Entity handles the controller writes to, resolved once at setup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rig {
    pub camera: Option<EntityHandle>,
    pub gallery_wall: Option<EntityHandle>,
    pub overlay: Option<EntityHandle>,
    pub panels: [Option<EntityHandle>; PANEL_COUNT],
}

impl Rig {
    pub fn resolve(graph: &mut dyn SceneGraph) -> Self {
        let mut lookup = |name: &str| {
            let handle = graph.resolve(name);
            if handle.is_none() {
                CoreError::MissingEntity(name.to_string()).report();
            }
            handle
        };
        let camera = lookup(CAMERA_ID);
        let gallery_wall = lookup(GALLERY_WALL_ID);
        let overlay = lookup(OVERLAY_ID);
        let panels = GalleryPanel::ORDER.map(|p| lookup(p.entity_id()));
        Self {
            camera,
            gallery_wall,
            overlay,
            panels,
        }
    }
}

pub struct NavigationController {
    state: NavigationState,
    registry: SceneRegistry,
    rig: Rig,
}

impl NavigationController {
    pub fn new(registry: SceneRegistry, rig: Rig) -> Self {
        Self {
            state: NavigationState::default(),
            registry,
            rig,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    pub fn focused_panel(&self) -> Option<GalleryPanel> {
        GalleryPanel::at(self.state.current_panel_index)
    }

    /// Route a discrete input. `Key` events are not navigation and are ignored.
    pub fn handle(&mut self, event: InputEvent, scene: &dyn SceneGraph, out: &mut Vec<Command>) {
        match event {
            InputEvent::Forward => self.handle_forward(out),
            InputEvent::Backward => self.handle_backward(out),
            InputEvent::Left => self.handle_left(out),
            InputEvent::Right => self.handle_right(out),
            InputEvent::Reset => self.handle_reset(out),
            InputEvent::AuxiliaryToggle => self.handle_auxiliary_toggle(scene, out),
            InputEvent::Key(_) => {}
        }
    }

    pub fn handle_forward(&mut self, out: &mut Vec<Command>) {
        if self.state.in_gallery {
            self.activate_panel(self.state.current_panel_index, out);
        } else {
            self.move_to_gallery_wall(out);
        }
    }

    /// Leave the gallery and fly back to the space view.
    pub fn handle_backward(&mut self, out: &mut Vec<Command>) {
        if !self.state.in_gallery {
            return;
        }
        log::info!("[nav] leaving gallery");
        let home = self.registry.camera_position(SceneMode::Space);
        self.animate_camera(home, true, out);
        self.state.in_gallery = false;
        out.push(Command::Hud(HudMode::Roaming));
    }

    pub fn handle_left(&mut self, out: &mut Vec<Command>) {
        self.step_focus(-1, out);
    }

    pub fn handle_right(&mut self, out: &mut Vec<Command>) {
        self.step_focus(1, out);
    }

    /// Flip the data overlay's visibility. Only meaningful in the space view.
    pub fn handle_auxiliary_toggle(&mut self, scene: &dyn SceneGraph, out: &mut Vec<Command>) {
        if self.state.current_scene != SceneMode::Space {
            return;
        }
        let Some(overlay) = self.rig.overlay else {
            CoreError::MissingEntity(OVERLAY_ID.to_string()).report();
            return;
        };
        let visible = !scene.is_visible(overlay);
        log::debug!("[nav] overlay visible={}", visible);
        out.push(Command::Scene(SceneCommand::SetVisible {
            entity: overlay,
            visible,
        }));
    }

    /// Snap the camera back to the scene's default pose without easing.
    pub fn handle_reset(&mut self, out: &mut Vec<Command>) {
        self.state.in_gallery = false;
        match self.rig.camera {
            Some(camera) => {
                out.push(Command::Scene(SceneCommand::SetPosition {
                    entity: camera,
                    position: self.registry.camera_position(self.state.current_scene),
                }));
                out.push(Command::Scene(SceneCommand::SetRotation {
                    entity: camera,
                    rotation: Vec3::ZERO,
                }));
            }
            None => CoreError::MissingEntity(CAMERA_ID.to_string()).report(),
        }
        out.push(Command::Hud(HudMode::Roaming));
    }

    pub fn transition_to(&mut self, scene: SceneMode, out: &mut Vec<Command>) {
        log::info!("[nav] transitioning to {}", scene.key());
        self.state.current_scene = scene;
        self.state.in_gallery = false;
        let preset = self.registry.preset(scene);
        let (position, cue) = (preset.camera_position, preset.narration_key);
        self.animate_camera(position, false, out);
        out.push(Command::Audio(AudioCommand::one_shot(cue)));
        out.push(Command::Hud(HudMode::Roaming));
    }

    /// Two-phase pulse on a panel: overshoot, then settle once the host's
    /// timer fires. Purely cosmetic.
    pub fn activate_panel(&self, index: usize, out: &mut Vec<Command>) {
        let Some(panel) = GalleryPanel::at(index) else {
            CoreError::InvalidIndex(index).report();
            return;
        };
        log::info!("[nav] activating panel {}", panel.entity_id());
        let Some(entity) = self.rig.panels[index] else {
            CoreError::MissingEntity(panel.entity_id().to_string()).report();
            return;
        };
        let pulse =
            Animation::scale(PANEL_PULSE_SCALE, PANEL_PULSE_MS, Easing::EaseOutElastic).alternate();
        let settle =
            Animation::scale(PANEL_HIGHLIGHT_SCALE, PANEL_PULSE_MS, Easing::EaseOutElastic);
        out.push(Command::Scene(SceneCommand::Animate {
            entity,
            animation: pulse,
        }));
        out.push(Command::Scene(SceneCommand::Scheduled {
            delay_ms: PANEL_SETTLE_DELAY_MS,
            command: Box::new(SceneCommand::Animate {
                entity,
                animation: settle,
            }),
        }));
    }

    /// Pointer selection of a panel. Focus only moves while in the gallery.
    pub fn select_panel(&mut self, index: usize, out: &mut Vec<Command>) {
        if !self.state.in_gallery {
            return;
        }
        self.state.current_panel_index = index.min(PANEL_COUNT - 1);
        self.activate_panel(self.state.current_panel_index, out);
    }

    pub fn hover_panel(&self, index: usize, entered: bool, out: &mut Vec<Command>) {
        let Some(Some(entity)) = self.rig.panels.get(index).copied() else {
            return;
        };
        let scale = if entered {
            PANEL_HOVER_SCALE
        } else {
            PANEL_REST_SCALE
        };
        out.push(Command::Scene(SceneCommand::Animate {
            entity,
            animation: Animation::scale(scale, PANEL_HOVER_MS, Easing::EaseOutElastic),
        }));
    }

    fn move_to_gallery_wall(&mut self, out: &mut Vec<Command>) {
        log::info!("[nav] moving to gallery wall");
        self.animate_camera(self.registry.gallery_camera_position, true, out);
        if let Some(wall) = self.rig.gallery_wall {
            out.push(Command::Scene(SceneCommand::SetVisible {
                entity: wall,
                visible: true,
            }));
        }
        self.state.in_gallery = true;
        self.state.current_panel_index = DEFAULT_FOCUS_PANEL;
        self.highlight_focused(out);
        out.push(Command::Hud(HudMode::Gallery));
    }

    fn step_focus(&mut self, delta: isize, out: &mut Vec<Command>) {
        if !self.state.in_gallery {
            return;
        }
        let last = (PANEL_COUNT - 1) as isize;
        let next = (self.state.current_panel_index as isize + delta).clamp(0, last);
        self.state.current_panel_index = next as usize;
        self.highlight_focused(out);
    }

    fn highlight_focused(&self, out: &mut Vec<Command>) {
        let focused = self.state.current_panel_index;
        debug_assert!(focused < PANEL_COUNT, "panel index escaped clamp");
        for (i, panel) in self.rig.panels.iter().enumerate() {
            let Some(entity) = *panel else { continue };
            let scale = if i == focused {
                PANEL_HIGHLIGHT_SCALE
            } else {
                PANEL_REST_SCALE
            };
            out.push(Command::Scene(SceneCommand::Animate {
                entity,
                animation: Animation::scale(scale, PANEL_HIGHLIGHT_MS, Easing::EaseOutElastic),
            }));
        }
    }

    fn animate_camera(&self, to: Vec3, level_rotation: bool, out: &mut Vec<Command>) {
        let Some(camera) = self.rig.camera else {
            CoreError::MissingEntity(CAMERA_ID.to_string()).report();
            return;
        };
        out.push(Command::Scene(SceneCommand::Animate {
            entity: camera,
            animation: Animation::new(
                "position",
                AnimTarget::Vec3(to),
                CAMERA_TRAVEL_MS,
                Easing::EaseInOutQuad,
            ),
        }));
        if level_rotation {
            out.push(Command::Scene(SceneCommand::Animate {
                entity: camera,
                animation: Animation::new(
                    "rotation",
                    AnimTarget::Vec3(Vec3::ZERO),
                    CAMERA_TRAVEL_MS,
                    Easing::EaseInOutQuad,
                )
                .in_slot("animation__rotation"),
            }));
        }
    }
}
