//! Cosmetic layers on the planet model: clouds, atmosphere glow and night
//! lights, plus the two keyboard toggles that adjust them.

use crate::command::{
    AnimTarget, Animation, Command, Easing, EntityHandle, Material, SceneCommand, Shader, Side,
    SphereSpec,
};
use crate::constants::*;
use crate::error::CoreError;
use crate::host::SceneGraph;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Layer {
    handle: EntityHandle,
    default_opacity: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PlanetDecorator {
    planet: Option<EntityHandle>,
    clouds: Option<Layer>,
    atmosphere: Option<Layer>,
    night: Option<Layer>,
    enhanced: bool,
}

impl PlanetDecorator {
    /// Resolve the planet, reserve handles for its layers and emit the
    /// commands that create them. A missing planet leaves the decorator inert.
    pub fn build(graph: &mut dyn SceneGraph, out: &mut Vec<Command>) -> Self {
        let Some(planet) = graph.resolve(PLANET_ID) else {
            CoreError::MissingEntity(PLANET_ID.to_string()).report();
            return Self::default();
        };
        log::info!("[planet] building layers");

        out.push(Command::Scene(SceneCommand::SetMaterial {
            entity: planet,
            material: Material {
                shader: Some(Shader::Standard),
                metalness: Some(PLANET_METALNESS),
                roughness: Some(PLANET_ROUGHNESS),
                src: Some(PLANET_TEXTURE),
                ..Default::default()
            },
        }));

        let clouds = graph.reserve(CLOUDS_ID);
        out.push(spawn(SphereSpec {
            handle: clouds,
            id: CLOUDS_ID,
            parent: planet,
            radius: CLOUDS_RADIUS,
            position: Vec3::ZERO,
            material: Material {
                shader: Some(Shader::Standard),
                src: Some(CLOUDS_TEXTURE),
                transparent: true,
                opacity: Some(CLOUDS_OPACITY),
                side: Some(Side::Double),
                ..Default::default()
            },
            animation: Some(
                Animation::new(
                    "rotation",
                    AnimTarget::Vec3(Vec3::new(0.0, -360.0, 0.0)),
                    CLOUDS_SPIN_MS,
                    Easing::EaseInQuad,
                )
                .looped(),
            ),
        }));

        let atmosphere = graph.reserve(ATMOSPHERE_ID);
        out.push(spawn(SphereSpec {
            handle: atmosphere,
            id: ATMOSPHERE_ID,
            parent: planet,
            radius: ATMOSPHERE_RADIUS,
            position: Vec3::ZERO,
            material: Material {
                shader: Some(Shader::Flat),
                color: Some(ATMOSPHERE_COLOR),
                transparent: true,
                opacity: Some(ATMOSPHERE_OPACITY),
                side: Some(Side::Back),
                ..Default::default()
            },
            animation: Some(
                Animation::new(
                    "material.opacity",
                    AnimTarget::Scalar(ATMOSPHERE_PULSE_OPACITY),
                    ATMOSPHERE_PULSE_MS,
                    Easing::EaseInQuad,
                )
                .looped()
                .alternate(),
            ),
        }));

        let night = graph.reserve(NIGHT_ID);
        out.push(spawn(SphereSpec {
            handle: night,
            id: NIGHT_ID,
            parent: planet,
            radius: NIGHT_RADIUS,
            position: Vec3::ZERO,
            material: Material {
                shader: Some(Shader::Standard),
                src: Some(NIGHT_TEXTURE),
                transparent: true,
                opacity: Some(NIGHT_OPACITY),
                side: Some(Side::Double),
                ..Default::default()
            },
            animation: None,
        }));

        Self {
            planet: Some(planet),
            clouds: Some(Layer {
                handle: clouds,
                default_opacity: CLOUDS_OPACITY,
            }),
            atmosphere: Some(Layer {
                handle: atmosphere,
                default_opacity: ATMOSPHERE_OPACITY,
            }),
            night: Some(Layer {
                handle: night,
                default_opacity: NIGHT_OPACITY,
            }),
            enhanced: true,
        }
    }

    pub fn is_enhanced(&self) -> bool {
        self.enhanced
    }

    /// Swap between the reduced and the boosted look.
    pub fn toggle_enhancement(&mut self, out: &mut Vec<Command>) {
        let (clouds, atmosphere, metalness) = if self.enhanced {
            REDUCED_LEVELS
        } else {
            ENHANCED_LEVELS
        };
        if let Some(layer) = self.clouds {
            out.push(opacity(layer.handle, clouds));
        }
        if let Some(layer) = self.atmosphere {
            out.push(opacity(layer.handle, atmosphere));
        }
        if let Some(planet) = self.planet {
            out.push(Command::Scene(SceneCommand::SetMaterialProperty {
                entity: planet,
                property: "metalness",
                value: metalness,
            }));
        }
        self.enhanced = !self.enhanced;
        log::info!("[planet] enhanced={}", self.enhanced);
    }

    /// Hide each visible layer, or restore a hidden one to its default.
    pub fn toggle_layers(&self, graph: &dyn SceneGraph, out: &mut Vec<Command>) {
        for layer in [self.clouds, self.night, self.atmosphere].into_iter().flatten() {
            let current = graph
                .material_opacity(layer.handle)
                .unwrap_or(layer.default_opacity);
            let next = if current > 0.0 {
                0.0
            } else {
                layer.default_opacity
            };
            log::debug!("[planet] layer {:?} opacity {} -> {}", layer.handle, current, next);
            out.push(opacity(layer.handle, next));
        }
    }
}

fn spawn(spec: SphereSpec) -> Command {
    Command::Scene(SceneCommand::SpawnSphere(Box::new(spec)))
}

fn opacity(entity: EntityHandle, value: f32) -> Command {
    Command::Scene(SceneCommand::SetMaterialProperty {
        entity,
        property: "opacity",
        value,
    })
}
