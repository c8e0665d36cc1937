use crate::constants::{ambient_source, PANNER_MAX_DISTANCE, PANNER_REF_DISTANCE, PANNER_ROLLOFF};
use crate::dom;
use anyhow::anyhow;
use deepdive_core::{one_shot_gain, AudioCatalog, AudioPlayer, CoreError, DEFAULT_MASTER_VOLUME};
use fnv::FnvHashMap;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn create_gain(ctx: &web::AudioContext, value: f32, label: &str) -> Option<web::GainNode> {
    match web::GainNode::new(ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Some(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            None
        }
    }
}

fn create_panner(ctx: &web::AudioContext, pos: Vec3) -> Option<web::PannerNode> {
    let panner = match web::PannerNode::new(ctx) {
        Ok(p) => p,
        Err(e) => {
            log::error!("PannerNode error: {:?}", e);
            return None;
        }
    };
    panner.set_panning_model(web::PanningModelType::Hrtf);
    panner.set_distance_model(web::DistanceModelType::Inverse);
    panner.set_ref_distance(PANNER_REF_DISTANCE);
    panner.set_max_distance(PANNER_MAX_DISTANCE);
    panner.set_rolloff_factor(PANNER_ROLLOFF);
    panner.set_position(pos.x as f64, pos.y as f64, pos.z as f64);
    Some(panner)
}

/// The parts of the graph a delayed one-shot needs. Node handles are cheap
/// JS references, so this is cloned into timer callbacks.
#[derive(Clone)]
struct Bus {
    ctx: web::AudioContext,
    master: web::GainNode,
    buffers: Rc<RefCell<FnvHashMap<String, web::AudioBuffer>>>,
}

impl Bus {
    fn buffer(&self, key: &str) -> Result<web::AudioBuffer, CoreError> {
        self.buffers
            .borrow()
            .get(key)
            .cloned()
            .ok_or_else(|| CoreError::MissingAsset(key.to_string()))
    }

    fn one_shot(&self, key: &str) -> Result<(), CoreError> {
        let buffer = self.buffer(key)?;
        let (Ok(src), Some(gain)) = (
            self.ctx.create_buffer_source(),
            create_gain(&self.ctx, one_shot_gain(key), "one-shot"),
        ) else {
            return Ok(());
        };
        src.set_buffer(Some(&buffer));
        _ = src.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&self.master);
        if let Err(e) = src.start() {
            log::warn!("[audio] start {} failed: {:?}", key, e);
        }
        log::debug!("[audio] one-shot {}", key);
        Ok(())
    }
}

struct LoopVoice {
    src: web::AudioBufferSourceNode,
    gain: web::GainNode,
}

/// WebAudio implementation of `AudioPlayer`: one master gain, decoded
/// buffers keyed by catalog key, and at most one running loop per key.
pub struct WebAudioPlayer {
    bus: Bus,
    loops: FnvHashMap<String, LoopVoice>,
}

impl WebAudioPlayer {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow!("AudioContext: {:?}", e))?;
        let master = create_gain(&ctx, DEFAULT_MASTER_VOLUME, "Master")
            .ok_or_else(|| anyhow!("master gain unavailable"))?;
        master
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow!("connect master: {:?}", e))?;
        Ok(Self {
            bus: Bus {
                ctx,
                master,
                buffers: Rc::new(RefCell::new(FnvHashMap::default())),
            },
            loops: FnvHashMap::default(),
        })
    }

    /// Fetch and decode every catalog entry in the background. Failures are
    /// logged per clip; the clip then reports MissingAsset when played.
    pub fn preload(&self, catalog: &AudioCatalog) {
        for (key, url) in catalog.iter() {
            let ctx = self.bus.ctx.clone();
            let buffers = self.bus.buffers.clone();
            spawn_local(async move {
                match load_buffer(&ctx, url).await {
                    Ok(buffer) => {
                        buffers.borrow_mut().insert(key.to_string(), buffer);
                        log::info!("[audio] loaded {}", key);
                    }
                    Err(e) => log::warn!("[audio] failed to load {}: {:?}", url, e),
                }
            });
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.bus.ctx.state() == web::AudioContextState::Suspended
    }

    pub fn resume(&self) {
        if self.is_suspended() {
            _ = self.bus.ctx.resume();
        }
    }

    pub fn set_listener(&self, pos: Vec3) {
        self.bus
            .ctx
            .listener()
            .set_position(pos.x as f64, pos.y as f64, pos.z as f64);
    }
}

async fn load_buffer(ctx: &web::AudioContext, url: &str) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch: {:?}", e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow!("not a Response: {:?}", e))?;
    if !resp.ok() {
        return Err(anyhow!("HTTP {}", resp.status()));
    }
    let promise = resp.array_buffer().map_err(|e| anyhow!("{:?}", e))?;
    let bytes = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("body: {:?}", e))?;
    let bytes: js_sys::ArrayBuffer = bytes
        .dyn_into()
        .map_err(|e| anyhow!("not an ArrayBuffer: {:?}", e))?;
    let promise = ctx
        .decode_audio_data(&bytes)
        .map_err(|e| anyhow!("{:?}", e))?;
    let decoded = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("decode: {:?}", e))?;
    decoded
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| anyhow!("not an AudioBuffer: {:?}", e))
}

impl AudioPlayer for WebAudioPlayer {
    fn play_one_shot(&mut self, key: &str) -> Result<(), CoreError> {
        self.bus.one_shot(key)
    }

    fn schedule_one_shot(&mut self, key: &str, delay_ms: u32) {
        let bus = self.bus.clone();
        let key = key.to_string();
        dom::set_timeout(delay_ms, move || {
            if let Err(e) = bus.one_shot(&key) {
                e.report();
            }
        });
    }

    fn play_loop(&mut self, key: &str) -> Result<(), CoreError> {
        if self.loops.contains_key(key) {
            return Ok(());
        }
        let buffer = self.bus.buffer(key)?;
        let ctx = &self.bus.ctx;
        let source = ambient_source(key);
        let volume = source.map(|s| s.volume).unwrap_or(1.0);
        let (Ok(src), Some(gain)) = (ctx.create_buffer_source(), create_gain(ctx, volume, key))
        else {
            return Ok(());
        };
        src.set_buffer(Some(&buffer));
        src.set_loop(true);
        _ = src.connect_with_audio_node(&gain);
        match source.and_then(|s| create_panner(ctx, Vec3::from_array(s.position))) {
            Some(panner) => {
                _ = gain.connect_with_audio_node(&panner);
                _ = panner.connect_with_audio_node(&self.bus.master);
            }
            None => {
                _ = gain.connect_with_audio_node(&self.bus.master);
            }
        }
        if let Err(e) = src.start() {
            log::warn!("[audio] loop {} failed: {:?}", key, e);
            return Ok(());
        }
        log::info!("[audio] loop {}", key);
        self.loops.insert(key.to_string(), LoopVoice { src, gain });
        Ok(())
    }

    fn stop(&mut self, key: &str) {
        if let Some(voice) = self.loops.remove(key) {
            _ = voice.src.stop();
            _ = voice.gain.disconnect();
        }
    }

    fn stop_all(&mut self) {
        for (_, voice) in self.loops.drain() {
            _ = voice.src.stop();
            _ = voice.gain.disconnect();
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.bus.master.gain().set_value(volume);
    }
}
