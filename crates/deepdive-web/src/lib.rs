#![cfg(target_arch = "wasm32")]
use deepdive_core::SessionConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod scene_graph;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("deepdive-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = SessionConfig::default();
    scene_graph::spawn_hotspot_markers(&document, &config.hotspots)?;

    let audio = audio::WebAudioPlayer::new()?;

    let scene = scene_graph::DomSceneGraph::new(document.clone());
    let app = app::App::new(document.clone(), scene, audio, config);
    app.preload_audio();
    let volume = app.session.mixer.volume();
    let app = Rc::new(RefCell::new(app));

    if let Err(e) = overlay::build_audio_controls(&document, volume) {
        log::warn!("audio controls unavailable: {:?}", e);
    }
    events::wire_audio_unlock(&document, app.clone());
    events::wire_audio_controls(&document, app.clone());
    events::wire_gallery_panels(&document, app.clone());
    events::wire_global_keydown(&window, app.clone());

    frame::start_loop(app);
    log::info!("[app] ready");
    Ok(())
}
