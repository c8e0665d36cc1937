use crate::audio::WebAudioPlayer;
use crate::overlay;
use crate::scene_graph::DomSceneGraph;
use deepdive_core::{dispatch, Command, EntityHandle, InputEvent, Session, SessionConfig, CAMERA_ID};
use glam::Vec3;
use instant::Instant;
use web_sys as web;

/// Everything the page callbacks share: the core session plus the DOM and
/// WebAudio collaborators it drives.
pub struct App {
    pub session: Session,
    scene: DomSceneGraph,
    audio: WebAudioPlayer,
    document: web::Document,
    camera: Option<EntityHandle>,
    audio_started: bool,
    started_at: Instant,
    outbox: Vec<Command>,
}

impl App {
    pub fn new(
        document: web::Document,
        mut scene: DomSceneGraph,
        audio: WebAudioPlayer,
        config: SessionConfig,
    ) -> Self {
        let mut outbox = Vec::new();
        let session = Session::new(config, &mut scene, &mut outbox);
        let camera = session.navigation.rig().camera;
        if camera.is_none() {
            log::warn!("[app] no {} entity; proximity cues disabled", CAMERA_ID);
        }
        let mut app = Self {
            session,
            scene,
            audio,
            document,
            camera,
            audio_started: false,
            started_at: Instant::now(),
            outbox,
        };
        app.flush();
        app
    }

    /// Start fetching every clip the session's catalog names.
    pub fn preload_audio(&self) {
        self.audio.preload(&self.session.catalog);
    }

    pub fn handle(&mut self, event: InputEvent) {
        self.session.handle_input(event, &self.scene, &mut self.outbox);
        if matches!(event, InputEvent::Key('m' | 'M')) {
            overlay::set_mute_label(&self.document, self.session.mixer.is_muted());
        }
        self.flush();
    }

    pub fn select_panel(&mut self, index: usize) {
        self.session.navigation.select_panel(index, &mut self.outbox);
        self.flush();
    }

    pub fn hover_panel(&mut self, index: usize, entered: bool) {
        self.session
            .navigation
            .hover_panel(index, entered, &mut self.outbox);
        self.flush();
    }

    pub fn toggle_mute(&mut self) {
        self.session.mixer.toggle_mute(&mut self.outbox);
        overlay::set_mute_label(&self.document, self.session.mixer.is_muted());
        self.flush();
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.session.mixer.set_volume(volume, &mut self.outbox);
        self.flush();
    }

    /// First user gesture: resume the context and start the soundscape of the
    /// scene we are in. Later gestures only resume a suspended context.
    pub fn unlock_audio(&mut self) {
        self.audio.resume();
        if self.audio_started {
            return;
        }
        self.audio_started = true;
        log::info!("[audio] unlocked");
        self.session.start_audio(&mut self.outbox);
        self.flush();
    }

    pub fn frame(&mut self) {
        let Some(listener) = self.listener_position() else {
            return;
        };
        self.audio.set_listener(listener);
        let now_ms = self.started_at.elapsed().as_millis() as u64;
        self.session.tick(now_ms, listener, &mut self.outbox);
        self.flush();
    }

    fn listener_position(&self) -> Option<Vec3> {
        self.scene.position_of(self.camera?)
    }

    fn flush(&mut self) {
        if self.outbox.is_empty() {
            return;
        }
        let document = &self.document;
        dispatch(
            self.outbox.drain(..),
            &mut self.scene,
            &mut self.audio,
            |mode| overlay::update_help(document, mode),
        );
    }
}
