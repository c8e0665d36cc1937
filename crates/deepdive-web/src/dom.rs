use glam::Vec3;
use js_sys::{Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", handler);
    }
}

/// Run `f` once after `delay_ms` on the window timer.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms as i32,
        );
    }
}

// A-Frame replaces getAttribute/setAttribute on its entities to read and
// write component data, so these go through the instance method rather than
// the DOM prototype web-sys binds to.

fn method(el: &web::Element, name: &str) -> Option<Function> {
    Reflect::get(el, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

pub fn aframe_set(el: &web::Element, attr: &str, value: &JsValue) {
    if let Some(f) = method(el, "setAttribute") {
        if let Err(e) = f.call2(el, &JsValue::from_str(attr), value) {
            log::warn!("setAttribute({}) failed: {:?}", attr, e);
        }
    }
}

pub fn aframe_set_property(el: &web::Element, component: &str, property: &str, value: &JsValue) {
    if let Some(f) = method(el, "setAttribute") {
        let args = js_sys::Array::of3(
            &JsValue::from_str(component),
            &JsValue::from_str(property),
            value,
        );
        if let Err(e) = f.apply(el, &args) {
            log::warn!("setAttribute({}.{}) failed: {:?}", component, property, e);
        }
    }
}

pub fn aframe_get(el: &web::Element, attr: &str) -> Option<JsValue> {
    let f = method(el, "getAttribute")?;
    let v = f.call1(el, &JsValue::from_str(attr)).ok()?;
    (!v.is_undefined() && !v.is_null()).then_some(v)
}

/// Local position of an entity's three.js object.
pub fn object3d_position(el: &web::Element) -> Option<Vec3> {
    let obj = Reflect::get(el, &JsValue::from_str("object3D")).ok()?;
    let pos = Reflect::get(&obj, &JsValue::from_str("position")).ok()?;
    let axis = |k: &str| {
        Reflect::get(&pos, &JsValue::from_str(k))
            .ok()
            .and_then(|v| v.as_f64())
    };
    Some(Vec3::new(axis("x")? as f32, axis("y")? as f32, axis("z")? as f32))
}
