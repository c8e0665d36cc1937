use crate::constants::{
    CAMERA_SELECTOR, MARKER_COLOR, MARKER_OPACITY, MARKER_RADIUS_INNER, MARKER_RADIUS_OUTER,
    MARKER_SPIN_MS, SCENE_SELECTOR,
};
use crate::dom;
use deepdive_core::attr::{animation_attr, format_vec3, material_attr};
use deepdive_core::{
    AnimTarget, Animation, CoreError, Easing, EntityHandle, HotspotConfig, SceneCommand,
    SceneGraph, SphereSpec, CAMERA_ID,
};
use glam::Vec3;
use wasm_bindgen::JsValue;
use web_sys as web;

/// `SceneGraph` over the A-Frame DOM. Elements are looked up once and kept
/// in a table indexed by `EntityHandle`.
pub struct DomSceneGraph {
    document: web::Document,
    names: Vec<String>,
    elements: Vec<Option<web::Element>>,
}

impl DomSceneGraph {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            names: Vec::new(),
            elements: Vec::new(),
        }
    }

    fn push(&mut self, name: &str, el: Option<web::Element>) -> EntityHandle {
        self.names.push(name.to_string());
        self.elements.push(el);
        EntityHandle((self.elements.len() - 1) as u32)
    }

    fn element(&self, entity: EntityHandle) -> Option<&web::Element> {
        let el = self.elements.get(entity.0 as usize).and_then(Option::as_ref);
        if el.is_none() {
            let name = self
                .names
                .get(entity.0 as usize)
                .map(String::as_str)
                .unwrap_or("?");
            CoreError::MissingEntity(name.to_string()).report();
        }
        el
    }

    pub fn position_of(&self, entity: EntityHandle) -> Option<Vec3> {
        self.element(entity).and_then(dom::object3d_position)
    }

    fn spawn_sphere(&mut self, spec: &SphereSpec) {
        let Some(parent) = self.element(spec.parent).cloned() else {
            return;
        };
        let el = match self.document.create_element("a-sphere") {
            Ok(el) => el,
            Err(e) => {
                log::error!("create a-sphere {} failed: {:?}", spec.id, e);
                return;
            }
        };
        el.set_id(spec.id);
        _ = el.set_attribute("radius", &spec.radius.to_string());
        _ = el.set_attribute("position", &format_vec3(spec.position));
        _ = el.set_attribute("material", &material_attr(&spec.material));
        if let Some(anim) = &spec.animation {
            _ = el.set_attribute(anim.slot, &animation_attr(anim));
        }
        _ = parent.append_child(&el);
        if let Some(slot) = self.elements.get_mut(spec.handle.0 as usize) {
            *slot = Some(el);
        }
        log::debug!("[scene] spawned {}", spec.id);
    }
}

/// Apply a command that targets an already-existing element.
fn write(el: &web::Element, command: &SceneCommand) {
    match command {
        SceneCommand::SetPosition { position, .. } => {
            dom::aframe_set(el, "position", &JsValue::from_str(&format_vec3(*position)));
        }
        SceneCommand::SetRotation { rotation, .. } => {
            dom::aframe_set(el, "rotation", &JsValue::from_str(&format_vec3(*rotation)));
        }
        SceneCommand::SetVisible { visible, .. } => {
            dom::aframe_set(el, "visible", &JsValue::from_bool(*visible));
        }
        SceneCommand::SetMaterial { material, .. } => {
            dom::aframe_set(el, "material", &JsValue::from_str(&material_attr(material)));
        }
        SceneCommand::SetMaterialProperty {
            property, value, ..
        } => {
            dom::aframe_set_property(el, "material", property, &JsValue::from_f64(*value as f64));
        }
        SceneCommand::Animate { animation, .. } => {
            dom::aframe_set(el, animation.slot, &JsValue::from_str(&animation_attr(animation)));
        }
        SceneCommand::SpawnSphere(_) | SceneCommand::Scheduled { .. } => {
            log::debug!("[scene] nested structural command ignored");
        }
    }
}

impl SceneGraph for DomSceneGraph {
    fn resolve(&mut self, name: &str) -> Option<EntityHandle> {
        let mut el = self.document.get_element_by_id(name);
        if el.is_none() && name == CAMERA_ID {
            el = self.document.query_selector(CAMERA_SELECTOR).ok().flatten();
        }
        let el = el?;
        Some(self.push(name, Some(el)))
    }

    fn reserve(&mut self, name: &str) -> EntityHandle {
        self.push(name, None)
    }

    fn is_visible(&self, entity: EntityHandle) -> bool {
        self.element(entity)
            .and_then(|el| dom::aframe_get(el, "visible"))
            .and_then(|v| v.as_bool())
            .unwrap_or(true)
    }

    fn material_opacity(&self, entity: EntityHandle) -> Option<f32> {
        let material = dom::aframe_get(self.element(entity)?, "material")?;
        js_sys::Reflect::get(&material, &JsValue::from_str("opacity"))
            .ok()?
            .as_f64()
            .map(|v| v as f32)
    }

    fn apply(&mut self, command: &SceneCommand) {
        match command {
            SceneCommand::SpawnSphere(spec) => self.spawn_sphere(spec),
            SceneCommand::Scheduled { delay_ms, command } => {
                if let Some(el) = self.element(command.entity()).cloned() {
                    let inner = (**command).clone();
                    dom::set_timeout(*delay_ms, move || write(&el, &inner));
                }
            }
            other => {
                if let Some(el) = self.element(other.entity()) {
                    write(el, other);
                }
            }
        }
    }
}

/// Create an entity with a spinning ring marker for every hotspot the page
/// does not already declare, so the session can resolve them by id.
pub fn spawn_hotspot_markers(
    document: &web::Document,
    hotspots: &[HotspotConfig],
) -> anyhow::Result<()> {
    let scene = document
        .query_selector(SCENE_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| anyhow::anyhow!("missing <{}>", SCENE_SELECTOR))?;
    let js_err = |e: JsValue| anyhow::anyhow!(format!("{:?}", e));
    for hotspot in hotspots {
        if document.get_element_by_id(&hotspot.id).is_some() {
            continue;
        }
        let entity = document.create_element("a-entity").map_err(js_err)?;
        entity.set_id(&hotspot.id);
        _ = entity.set_attribute("position", &format_vec3(hotspot.position));

        let ring = document.create_element("a-ring").map_err(js_err)?;
        _ = ring.set_attribute("color", MARKER_COLOR);
        _ = ring.set_attribute("radius-inner", &MARKER_RADIUS_INNER.to_string());
        _ = ring.set_attribute("radius-outer", &MARKER_RADIUS_OUTER.to_string());
        _ = ring.set_attribute("opacity", &MARKER_OPACITY.to_string());
        let spin = Animation::new(
            "rotation",
            AnimTarget::Vec3(Vec3::new(0.0, 360.0, 0.0)),
            MARKER_SPIN_MS,
            Easing::EaseInQuad,
        )
        .looped();
        _ = ring.set_attribute(spin.slot, &animation_attr(&spin));

        entity.append_child(&ring).map_err(js_err)?;
        scene.append_child(&entity).map_err(js_err)?;
        log::debug!("[scene] hotspot marker {}", hotspot.id);
    }
    Ok(())
}
