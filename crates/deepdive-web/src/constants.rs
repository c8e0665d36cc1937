// Page wiring and audio placement constants for the web frontend.

// Host page elements
pub const SCENE_SELECTOR: &str = "a-scene";
pub const CAMERA_SELECTOR: &str = "[camera]";
pub const PANEL_SELECTOR: &str = ".gallery-panel";
pub const HELP_ELEMENT_ID: &str = "navigation-help";
pub const MUTE_BUTTON_ID: &str = "mute-btn";
pub const VOLUME_SLIDER_ID: &str = "volume-slider";

// Volume slider range (percent)
pub const VOLUME_SLIDER_MAX: f64 = 100.0;

// Positional ambience (inverse distance model)
pub const PANNER_REF_DISTANCE: f64 = 5.0;
pub const PANNER_MAX_DISTANCE: f64 = 50.0;
pub const PANNER_ROLLOFF: f64 = 1.0;

/// A looping ambience bed anchored at a world position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientSource {
    pub key: &'static str,
    pub position: [f32; 3],
    pub volume: f32,
}

pub const AMBIENT_SOURCES: [AmbientSource; 2] = [
    AmbientSource {
        key: "space-ambient",
        position: [0.0, 0.0, -10.0],
        volume: 1.0,
    },
    AmbientSource {
        key: "ocean-ambient",
        position: [0.0, -5.0, -15.0],
        volume: 0.8,
    },
];

// Hotspot marker ring
pub const MARKER_COLOR: &str = "#00ff88";
pub const MARKER_RADIUS_INNER: f32 = 0.1;
pub const MARKER_RADIUS_OUTER: f32 = 0.15;
pub const MARKER_OPACITY: f32 = 0.7;
pub const MARKER_SPIN_MS: u32 = 3000;

#[inline]
pub fn ambient_source(key: &str) -> Option<&'static AmbientSource> {
    AMBIENT_SOURCES.iter().find(|s| s.key == key)
}

/// Slider percent to a 0..1 gain; malformed input reads as silence.
#[inline]
pub fn slider_to_volume(raw: &str) -> f32 {
    raw.trim()
        .parse::<f64>()
        .map(|v| (v / VOLUME_SLIDER_MAX).clamp(0.0, 1.0) as f32)
        .unwrap_or(0.0)
}

#[inline]
pub fn mute_label(muted: bool) -> &'static str {
    if muted {
        "🔇"
    } else {
        "🔊"
    }
}
