// Host-side tests for A-Frame attribute formatting and tuning constants.

use deepdive_core::attr::*;
use deepdive_core::*;
use glam::Vec3;

#[test]
fn vec3_formats_like_aframe() {
    assert_eq!(format_vec3(Vec3::new(0.0, 1.5, -8.0)), "0 1.5 -8");
    assert_eq!(format_vec3(Vec3::splat(1.1)), "1.1 1.1 1.1");
}

#[test]
fn vec3_parse_accepts_only_triples() {
    assert_eq!(parse_vec3("0 -5 -5"), Some(Vec3::new(0.0, -5.0, -5.0)));
    assert_eq!(parse_vec3("  1   2 3 "), Some(Vec3::new(1.0, 2.0, 3.0)));
    assert_eq!(parse_vec3("1 2"), None);
    assert_eq!(parse_vec3("1 2 3 4"), None);
    assert_eq!(parse_vec3("a b c"), None);
}

#[test]
fn camera_move_attribute() {
    let anim = Animation::new(
        "position",
        AnimTarget::Vec3(Vec3::new(0.0, 1.5, -8.0)),
        2000,
        Easing::EaseInOutQuad,
    );
    assert_eq!(
        animation_attr(&anim),
        "property: position; to: 0 1.5 -8; dur: 2000; easing: easeInOutQuad"
    );
}

#[test]
fn looped_alternating_attribute() {
    let anim = Animation::new(
        "material.opacity",
        AnimTarget::Scalar(0.25),
        3000,
        Easing::EaseInQuad,
    )
    .looped()
    .alternate();
    assert_eq!(
        animation_attr(&anim),
        "property: material.opacity; to: 0.25; dur: 3000; easing: easeInQuad; \
         loop: true; dir: alternate"
    );
}

#[test]
fn material_attribute_skips_unset_fields() {
    let m = Material {
        shader: Some(Shader::Flat),
        color: Some("#4fa3f7"),
        transparent: true,
        opacity: Some(0.15),
        side: Some(Side::Back),
        ..Default::default()
    };
    assert_eq!(
        material_attr(&m),
        "shader: flat; color: #4fa3f7; transparent: true; opacity: 0.15; side: back"
    );
    assert_eq!(material_attr(&Material::default()), "");
}

#[test]
fn animation_slots_default_to_primary() {
    let anim = Animation::scale(1.1, 500, Easing::EaseOutElastic);
    assert_eq!(anim.slot, "animation");
    assert_eq!(anim.in_slot("animation__rotation").slot, "animation__rotation");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Panel feedback ordering: rest < hover < highlight < pulse
    assert!(PANEL_REST_SCALE < PANEL_HOVER_SCALE);
    assert!(PANEL_HOVER_SCALE < PANEL_HIGHLIGHT_SCALE);
    assert!(PANEL_HIGHLIGHT_SCALE < PANEL_PULSE_SCALE);

    // The settle must land after the pulse has bounced back
    assert!(PANEL_SETTLE_DELAY_MS >= 2 * PANEL_PULSE_MS);

    assert!(DEFAULT_FOCUS_PANEL < PANEL_COUNT);
    assert_eq!(PANEL_IDS.len(), PANEL_COUNT);

    // Layer spheres nest: night < clouds < atmosphere
    assert!(NIGHT_RADIUS < CLOUDS_RADIUS);
    assert!(CLOUDS_RADIUS < ATMOSPHERE_RADIUS);
    assert!(ATMOSPHERE_OPACITY < ATMOSPHERE_PULSE_OPACITY);

    assert!(REDUCED_LEVELS.0 < ENHANCED_LEVELS.0);
    assert!(REDUCED_LEVELS.1 < ENHANCED_LEVELS.1);
    assert!(REDUCED_LEVELS.2 < ENHANCED_LEVELS.2);

    assert!(PROXIMITY_MIN_GAIN > 0.0 && PROXIMITY_MIN_GAIN < 1.0);
    assert!(AMBIENT_ONE_SHOT_GAIN < NARRATION_ONE_SHOT_GAIN);
}

#[test]
fn scene_keys_round_trip() {
    for scene in SceneMode::ALL {
        assert_eq!(SceneMode::from_key(scene.key()), Some(scene));
    }
    assert_eq!(SceneMode::from_key("moon"), None);
    assert_eq!(GalleryPanel::at(3), None);
    assert_eq!(
        GalleryPanel::at(0).map(|p| p.entity_id()),
        Some("lunar-gravity-display")
    );
}
