use crate::app::App;
use crate::constants::{slider_to_volume, MUTE_BUTTON_ID, PANEL_SELECTOR, VOLUME_SLIDER_ID};
use crate::dom;
use deepdive_core::{consumes_default, event_for_key, GalleryPanel};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &Rc<RefCell<App>>) {
    let Some(event) = event_for_key(&ev.key(), ev.shift_key(), ev.ctrl_key()) else {
        return;
    };
    if consumes_default(event) {
        ev.prevent_default();
    }
    app.borrow_mut().handle(event);
}

pub fn wire_global_keydown(window: &web::Window, app: Rc<RefCell<App>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &app);
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Browsers keep the AudioContext suspended until a user gesture.
pub fn wire_audio_unlock(document: &web::Document, app: Rc<RefCell<App>>) {
    let on_click = app.clone();
    dom::add_listener(document, "click", move || on_click.borrow_mut().unlock_audio());
    dom::add_listener(document, "keydown", move || app.borrow_mut().unlock_audio());
}

/// Panel index for a gallery element: its id when it names a known panel,
/// otherwise its position in document order.
fn panel_index(el: &web::Element, fallback: usize) -> usize {
    let id = el.id();
    GalleryPanel::ORDER
        .iter()
        .find(|p| p.entity_id() == id)
        .map(|p| p.index())
        .unwrap_or(fallback)
}

pub fn wire_gallery_panels(document: &web::Document, app: Rc<RefCell<App>>) {
    let Ok(panels) = document.query_selector_all(PANEL_SELECTOR) else {
        return;
    };
    for i in 0..panels.length() {
        let Some(el) = panels.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let index = panel_index(&el, i as usize);
        let a = app.clone();
        dom::add_listener(&el, "click", move || a.borrow_mut().select_panel(index));
        let a = app.clone();
        dom::add_listener(&el, "mouseenter", move || {
            a.borrow_mut().hover_panel(index, true)
        });
        let a = app.clone();
        dom::add_listener(&el, "mouseleave", move || {
            a.borrow_mut().hover_panel(index, false)
        });
    }
    log::info!("[events] wired {} gallery panels", panels.length());
}

pub fn wire_audio_controls(document: &web::Document, app: Rc<RefCell<App>>) {
    let a = app.clone();
    dom::add_click_listener(document, MUTE_BUTTON_ID, move || a.borrow_mut().toggle_mute());

    let Some(slider) = document
        .get_element_by_id(VOLUME_SLIDER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::warn!("[events] missing #{}", VOLUME_SLIDER_ID);
        return;
    };
    let input = slider.clone();
    dom::add_listener(&slider, "input", move || {
        app.borrow_mut().set_volume(slider_to_volume(&input.value()));
    });
}
