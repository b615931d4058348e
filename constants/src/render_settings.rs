/// Canvas the wasm build attaches to.
pub const CANVAS_SELECTOR: &str = "#portfolio";

/// Footer strip height as a percentage of the window height.
pub const FOOTER_HEIGHT_PERCENT: f32 = 40.0;

/// Number of UI nodes reserved for CRT draw operations.
pub const CRT_LAYER_POOL: usize = 96;

/// Converts the scene configs' unitless point light intensity to lumens.
pub const POINT_LIGHT_LUMENS: f32 = 250_000.0;

/// Converts the scene configs' ambient intensity to Bevy ambient brightness.
pub const AMBIENT_BRIGHTNESS: f32 = 800.0;

/// Emissive boost for the About page ribbons.
pub const RIBBON_EMISSIVE_STRENGTH: f32 = 0.6;

/// Rock surface response.
pub const ROCK_ROUGHNESS: f32 = 0.9;
pub const ROCK_METALLIC: f32 = 0.1;

/// Seconds between FPS notifications to the host page.
pub const FPS_NOTIFICATION_INTERVAL: f32 = 0.5;

/// Path of the scene manifest inside the asset directory.
pub const SCENE_MANIFEST_PATH: &str = "scenes/pages.scenes.json";
