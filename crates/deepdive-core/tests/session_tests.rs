// Host-side tests for the session: key mapping, planet layers, mixer and
// command dispatch through the collaborator traits.

mod common;

use common::{audio_keys, FakeAudio, FakeScene};
use deepdive_core::*;
use glam::Vec3;

fn make_session() -> (Session, FakeScene, Vec<Command>) {
    let mut scene = FakeScene::full();
    let mut out = Vec::new();
    let session = Session::new(SessionConfig::default(), &mut scene, &mut out);
    (session, scene, out)
}

fn apply_scene(scene: &mut FakeScene, out: &[Command]) {
    for cmd in out {
        if let Command::Scene(c) = cmd {
            scene.apply(c);
        }
    }
}

#[test]
fn keys_map_to_events() {
    assert_eq!(event_for_key("ArrowUp", false, false), Some(InputEvent::Forward));
    assert_eq!(
        event_for_key("ArrowUp", true, false),
        Some(InputEvent::AuxiliaryToggle)
    );
    assert_eq!(
        event_for_key("ArrowUp", false, true),
        Some(InputEvent::AuxiliaryToggle)
    );
    assert_eq!(event_for_key("ArrowDown", true, false), Some(InputEvent::Backward));
    assert_eq!(event_for_key("ArrowLeft", false, false), Some(InputEvent::Left));
    assert_eq!(event_for_key("ArrowRight", false, false), Some(InputEvent::Right));
    assert_eq!(event_for_key(" ", false, false), Some(InputEvent::Reset));
    assert_eq!(event_for_key("1", false, false), Some(InputEvent::Key('1')));
    assert_eq!(event_for_key("é", false, false), Some(InputEvent::Key('é')));
}

#[test]
fn unknown_named_keys_are_ignored() {
    assert_eq!(event_for_key("Enter", false, false), None);
    assert_eq!(event_for_key("Shift", true, false), None);
    assert_eq!(event_for_key("", false, false), None);
}

#[test]
fn only_navigation_consumes_default() {
    assert!(consumes_default(InputEvent::Reset));
    assert!(consumes_default(InputEvent::Forward));
    assert!(!consumes_default(InputEvent::Key('1')));
}

#[test]
fn session_setup_builds_planet_layers() {
    let (session, scene, out) = make_session();
    let spawned = out
        .iter()
        .filter(|c| matches!(c, Command::Scene(SceneCommand::SpawnSphere(_))))
        .count();
    assert_eq!(spawned, 3);
    assert!(session.planet.is_enhanced());
    assert!(scene.handle_of(CLOUDS_ID).is_some());
    assert_eq!(out.last(), Some(&Command::Hud(HudMode::Roaming)));
    assert!(session.proximity.hotspots().iter().all(|h| h.entity.is_some()));
}

#[test]
fn missing_planet_leaves_decorator_inert() {
    let mut scene = FakeScene::with_entities(&[CAMERA_ID]);
    let mut out = Vec::new();
    let mut session = Session::new(SessionConfig::default(), &mut scene, &mut out);
    assert!(!out
        .iter()
        .any(|c| matches!(c, Command::Scene(SceneCommand::SpawnSphere(_)))));
    out.clear();
    session.handle_input(InputEvent::Key('2'), &scene, &mut out);
    assert!(out.is_empty());
}

#[test]
fn enhancement_toggle_alternates_levels() {
    let (mut session, scene, _) = make_session();
    let clouds = scene.handle_of(CLOUDS_ID).unwrap();
    let planet = scene.handle_of(PLANET_ID).unwrap();

    let mut out = Vec::new();
    session.handle_input(InputEvent::Key('1'), &scene, &mut out);
    assert!(!session.planet.is_enhanced());
    assert!(out.contains(&Command::Scene(SceneCommand::SetMaterialProperty {
        entity: clouds,
        property: "opacity",
        value: 0.2,
    })));
    assert!(out.contains(&Command::Scene(SceneCommand::SetMaterialProperty {
        entity: planet,
        property: "metalness",
        value: 0.1,
    })));

    out.clear();
    session.handle_input(InputEvent::Key('1'), &scene, &mut out);
    assert!(session.planet.is_enhanced());
    assert!(out.contains(&Command::Scene(SceneCommand::SetMaterialProperty {
        entity: clouds,
        property: "opacity",
        value: 0.6,
    })));
}

#[test]
fn layer_toggle_hides_then_restores() {
    let (mut session, mut scene, setup) = make_session();
    apply_scene(&mut scene, &setup);
    let night = scene.handle_of(NIGHT_ID).unwrap();

    let mut out = Vec::new();
    session.handle_input(InputEvent::Key('2'), &scene, &mut out);
    apply_scene(&mut scene, &out);
    assert_eq!(scene.material_opacity(night), Some(0.0));

    out.clear();
    session.handle_input(InputEvent::Key('2'), &scene, &mut out);
    apply_scene(&mut scene, &out);
    assert_eq!(scene.material_opacity(night), Some(NIGHT_OPACITY));
}

#[test]
fn scene_keys_travel_outside_gallery_only() {
    let (mut session, scene, _) = make_session();
    let mut out = Vec::new();
    session.handle_input(InputEvent::Key('o'), &scene, &mut out);
    assert_eq!(session.state().current_scene, SceneMode::OceanSurface);
    assert_eq!(
        out[0],
        Command::Audio(AudioCommand::Stop("space-ambient".to_string()))
    );
    assert_eq!(
        out[1],
        Command::Audio(AudioCommand::PlayLoop("ocean-ambient".to_string()))
    );
    assert_eq!(audio_keys(&out), vec!["ocean-surface".to_string()]);

    session.handle_input(InputEvent::Forward, &scene, &mut out);
    out.clear();
    session.handle_input(InputEvent::Key('R'), &scene, &mut out);
    assert!(out.is_empty());
    assert_eq!(session.state().current_scene, SceneMode::OceanSurface);
    assert!(session.state().in_gallery);
}

#[test]
fn travel_between_ocean_scenes_keeps_the_shared_bed() {
    let (mut session, _, _) = make_session();
    let mut out = Vec::new();
    session.travel(SceneMode::OceanSurface, &mut out);
    out.clear();
    session.travel(SceneMode::CoralReef, &mut out);
    assert!(!out
        .iter()
        .any(|c| matches!(c, Command::Audio(AudioCommand::Stop(_) | AudioCommand::StopAll))));
    assert_eq!(
        out[0],
        Command::Audio(AudioCommand::PlayLoop("ocean-ambient".to_string()))
    );

    out.clear();
    session.travel(SceneMode::Space, &mut out);
    assert_eq!(
        out[..2],
        [
            Command::Audio(AudioCommand::Stop("ocean-ambient".to_string())),
            Command::Audio(AudioCommand::PlayLoop("space-ambient".to_string())),
        ]
    );
}

#[test]
fn dispatched_travel_swaps_ambient_loops() {
    let (mut session, mut scene, _) = make_session();
    let mut audio = FakeAudio::default();
    let mut out = Vec::new();
    session.start_audio(&mut out);
    session.travel(SceneMode::OceanSurface, &mut out);
    dispatch(out, &mut scene, &mut audio, |_| {});
    assert_eq!(audio.loops, vec!["ocean-ambient".to_string()]);
    assert_eq!(audio.stopped_all, 1);
}

#[test]
fn unmapped_keys_change_nothing() {
    let (mut session, scene, _) = make_session();
    let before = session.state().clone();
    let mut out = Vec::new();
    session.handle_input(InputEvent::Key('z'), &scene, &mut out);
    assert!(out.is_empty());
    assert_eq!(*session.state(), before);
}

#[test]
fn start_audio_plays_space_soundscape() {
    let (session, _, _) = make_session();
    let mut out = Vec::new();
    session.start_audio(&mut out);
    assert_eq!(
        out,
        vec![
            Command::Audio(AudioCommand::StopAll),
            Command::Audio(AudioCommand::PlayLoop("space-ambient".to_string())),
            Command::Audio(AudioCommand::PlayOneShot {
                key: "space".to_string(),
                delay_ms: 2000,
            }),
        ]
    );
}

#[test]
fn tick_reaches_default_hotspots() {
    let (mut session, _, _) = make_session();
    let mut out = Vec::new();
    session.tick(0, Vec3::new(-3.0, 1.0, 0.1), &mut out);
    assert_eq!(audio_keys(&out), vec!["coral-bleaching".to_string()]);
}

#[test]
fn dispatch_routes_and_tolerates_missing_assets() {
    let mut scene = FakeScene::full();
    let mut audio = FakeAudio {
        loaded: vec!["ocean-surface".to_string()],
        ..Default::default()
    };
    let mut hud = Vec::new();
    let overlay = scene.handle_of(OVERLAY_ID).unwrap();
    let commands = vec![
        Command::Audio(AudioCommand::one_shot("missing-clip")),
        Command::Audio(AudioCommand::one_shot("ocean-surface")),
        Command::Audio(AudioCommand::PlayOneShot {
            key: "space".to_string(),
            delay_ms: 1500,
        }),
        Command::Scene(SceneCommand::SetVisible {
            entity: overlay,
            visible: true,
        }),
        Command::Hud(HudMode::Gallery),
    ];
    dispatch(commands, &mut scene, &mut audio, |mode| hud.push(mode));

    assert_eq!(audio.played, vec!["ocean-surface".to_string()]);
    assert_eq!(audio.scheduled, vec![("space".to_string(), 1500)]);
    assert!(scene.is_visible(overlay));
    assert_eq!(hud, vec![HudMode::Gallery]);
}

#[test]
fn mixer_mute_and_volume() {
    let mut mixer = AudioMixer::default();
    let mut out = Vec::new();
    assert_eq!(mixer.volume(), 0.7);

    mixer.toggle_mute(&mut out);
    assert_eq!(
        out.pop(),
        Some(Command::Audio(AudioCommand::SetVolume(0.0)))
    );

    mixer.set_volume(0.4, &mut out);
    assert!(out.is_empty(), "volume changes while muted are stored only");

    mixer.toggle_mute(&mut out);
    assert_eq!(
        out.pop(),
        Some(Command::Audio(AudioCommand::SetVolume(0.4)))
    );

    mixer.set_volume(3.0, &mut out);
    assert_eq!(mixer.volume(), 1.0);
}

#[test]
fn mute_key_reaches_mixer() {
    let (mut session, scene, _) = make_session();
    let mut out = Vec::new();
    session.handle_input(InputEvent::Key('m'), &scene, &mut out);
    assert!(session.mixer.is_muted());
}

#[test]
fn cue_gain_and_falloff() {
    assert_eq!(one_shot_gain("ocean-ambient"), 0.3);
    assert_eq!(one_shot_gain("coral-reef"), 0.7);
    assert_eq!(proximity_volume(6.0, 5.0), None);
    assert_eq!(proximity_volume(0.0, 5.0), Some(1.0));
    assert_eq!(proximity_volume(5.0, 5.0), Some(0.1));
    let mid = proximity_volume(2.5, 5.0).unwrap();
    assert!((mid - 0.5).abs() < 1e-6);
}

#[test]
fn catalog_covers_every_cue() {
    let catalog = AudioCatalog::default();
    assert_eq!(catalog.iter().count(), 8);
    for scene in SceneMode::ALL {
        assert!(catalog.get(scene.key()).is_some(), "{}", scene.key());
    }
    for hotspot in default_hotspots() {
        assert!(catalog.get(&hotspot.audio_key).is_some());
    }
    let registry = SceneRegistry::default();
    for scene in SceneMode::ALL {
        assert!(catalog.get(registry.preset(scene).ambient_key).is_some());
    }
}

#[test]
fn catalog_reports_missing_keys_in_order() {
    let catalog = AudioCatalog::default();
    assert_eq!(
        catalog.missing(["whale-song", "space", "deep-trench"]),
        vec!["whale-song", "deep-trench"]
    );
    assert!(catalog.missing(["sst-data", "ocean-ambient"]).is_empty());
}

#[test]
fn session_keeps_the_configured_catalog() {
    let (session, _, _) = make_session();
    assert_eq!(
        session.catalog.get("sst-data"),
        Some("assets/audio/sst-explanation.mp3")
    );
}

#[test]
fn planet_layers_use_default_easing() {
    let (_, _, out) = make_session();
    let easings: Vec<_> = out
        .iter()
        .filter_map(|c| match c {
            Command::Scene(SceneCommand::SpawnSphere(spec)) => {
                spec.animation.as_ref().map(|a| a.easing)
            }
            _ => None,
        })
        .collect();
    assert_eq!(easings, vec![Easing::EaseInQuad, Easing::EaseInQuad]);
}

#[test]
fn master_volume_reaches_the_player() {
    let mut scene = FakeScene::full();
    let mut audio = FakeAudio::default();
    let mut mixer = AudioMixer::default();
    let mut out = Vec::new();
    mixer.set_volume(0.25, &mut out);
    dispatch(out, &mut scene, &mut audio, |_| {});
    assert_eq!(audio.volume, Some(0.25));
}
