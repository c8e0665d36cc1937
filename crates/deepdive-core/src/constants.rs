use glam::Vec3;

// Shared tuning constants used by the core controllers and the web frontend.

// Camera poses
pub const SPACE_CAMERA_POS: [f32; 3] = [0.0, 0.0, 0.0];
pub const OCEAN_SURFACE_CAMERA_POS: [f32; 3] = [0.0, -5.0, -5.0];
pub const CORAL_REEF_CAMERA_POS: [f32; 3] = [0.0, -8.0, -3.0];
pub const GALLERY_WALL_CAMERA_POS: [f32; 3] = [0.0, 1.5, -8.0];

// Camera motion
pub const CAMERA_TRAVEL_MS: u32 = 2000;

// Gallery panels
pub const PANEL_COUNT: usize = 3;
pub const DEFAULT_FOCUS_PANEL: usize = 1; // visual center of the wall
pub const PANEL_REST_SCALE: f32 = 1.0;
pub const PANEL_HOVER_SCALE: f32 = 1.05;
pub const PANEL_HIGHLIGHT_SCALE: f32 = 1.1;
pub const PANEL_PULSE_SCALE: f32 = 1.15;
pub const PANEL_HIGHLIGHT_MS: u32 = 500;
pub const PANEL_HOVER_MS: u32 = 300;
pub const PANEL_PULSE_MS: u32 = 300;
pub const PANEL_SETTLE_DELAY_MS: u32 = 600;

// Hotspots
pub const DEFAULT_TRIGGER_DISTANCE: f32 = 2.0;
pub const DEFAULT_COOLDOWN_MS: u64 = 10_000;
pub const HOTSPOT_PULSE_SCALE: f32 = 1.5;
pub const HOTSPOT_PULSE_MS: u32 = 500;

// Narration delays on scene entry (ms)
pub const SPACE_NARRATION_DELAY_MS: u32 = 2000;
pub const OCEAN_NARRATION_DELAY_MS: u32 = 1500;
pub const REEF_NARRATION_DELAY_MS: u32 = 1000;

// Mixer
pub const DEFAULT_MASTER_VOLUME: f32 = 0.7;
pub const AMBIENT_ONE_SHOT_GAIN: f32 = 0.3;
pub const NARRATION_ONE_SHOT_GAIN: f32 = 0.7;
pub const PROXIMITY_MIN_GAIN: f32 = 0.1;

// Planet layers
pub const PLANET_METALNESS: f32 = 0.2;
pub const PLANET_ROUGHNESS: f32 = 0.7;
pub const CLOUDS_RADIUS: f32 = 3.02;
pub const CLOUDS_OPACITY: f32 = 0.4;
pub const CLOUDS_SPIN_MS: u32 = 25_000;
pub const ATMOSPHERE_RADIUS: f32 = 3.3;
pub const ATMOSPHERE_COLOR: &str = "#4fa3f7";
pub const ATMOSPHERE_OPACITY: f32 = 0.15;
pub const ATMOSPHERE_PULSE_OPACITY: f32 = 0.25;
pub const ATMOSPHERE_PULSE_MS: u32 = 3000;
pub const NIGHT_RADIUS: f32 = 3.01;
pub const NIGHT_OPACITY: f32 = 0.9;

// (clouds, atmosphere, planet metalness) for each enhancement level
pub const ENHANCED_LEVELS: (f32, f32, f32) = (0.6, 0.3, 0.3);
pub const REDUCED_LEVELS: (f32, f32, f32) = (0.2, 0.05, 0.1);

// Entity ids in the host page
pub const CAMERA_ID: &str = "camera";
pub const GALLERY_WALL_ID: &str = "gallery-wall";
pub const OVERLAY_ID: &str = "sst-overlay";
pub const PLANET_ID: &str = "earth";
pub const CLOUDS_ID: &str = "earth-clouds";
pub const ATMOSPHERE_ID: &str = "earth-atmosphere";
pub const NIGHT_ID: &str = "earth-night";
pub const PANEL_IDS: [&str; PANEL_COUNT] = [
    "lunar-gravity-display",
    "ocean-currents-display",
    "temperature-display",
];

// Textures
pub const PLANET_TEXTURE: &str = "assets/images/earth-texture.jpg";
pub const CLOUDS_TEXTURE: &str = "assets/images/earth-clouds.jpg";
pub const NIGHT_TEXTURE: &str = "assets/images/earth-night.jpg";

#[inline]
pub fn vec3_of(a: [f32; 3]) -> Vec3 {
    Vec3::new(a[0], a[1], a[2])
}
