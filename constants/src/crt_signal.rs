//! Tuning for the CRT glitch footer. Probabilities are per frame.

pub const BLACKOUT_CHANCE: f64 = 0.015;
pub const BLACKOUT_MIN_FRAMES: u32 = 30;
pub const BLACKOUT_MAX_FRAMES: u32 = 90;

/// Share of frames that draw static noise.
pub const NOISE_FRAME_CHANCE: f64 = 0.5;
/// Noise specks per pixel of surface area.
pub const NOISE_DENSITY: f32 = 0.01;
/// Upper bound on specks per frame; each one costs a UI node.
pub const NOISE_SPECKS_MAX: usize = 48;
pub const NOISE_ALPHA: f32 = 0.3;

pub const SCANLINE_STEP: f32 = 3.0;
pub const SCANLINE_HEIGHT: f32 = 2.0;
pub const SCANLINE_ALPHA: f32 = 0.1;

pub const GLITCH_BAR_CHANCE: f64 = 0.06;
pub const GLITCH_BAR_MIN_HEIGHT: f32 = 3.0;
pub const GLITCH_BAR_MAX_HEIGHT: f32 = 11.0;
pub const GLITCH_BAR_ALPHA: f32 = 0.3;

pub const INTERFERENCE_LINE_CHANCE: f64 = 0.04;
pub const INTERFERENCE_LINE_ALPHA: f32 = 0.12;

pub const VHS_CHANCE: f64 = 0.03;
pub const VHS_MAX_OFFSET: f32 = 5.0;
pub const VHS_DECAY: f32 = 0.95;
/// Distortion below this magnitude draws nothing.
pub const VHS_VISIBLE_THRESHOLD: f32 = 0.5;
pub const VHS_STRIP_MIN_HEIGHT: f32 = 10.0;
pub const VHS_STRIP_MAX_HEIGHT: f32 = 50.0;
pub const VHS_STRIP_ALPHA: f32 = 0.06;

pub const SEPARATION_CHANCE: f64 = 0.04;
pub const SEPARATION_MAX_OFFSET: u32 = 3;
pub const SEPARATION_HEIGHT: f32 = 2.0;
pub const SEPARATION_ALPHA: f32 = 0.15;

pub const DROPOUT_CHANCE: f64 = 0.008;
pub const DROPOUT_MIN_HEIGHT: f32 = 20.0;
pub const DROPOUT_MAX_HEIGHT: f32 = 80.0;
pub const DROPOUT_ALPHA: f32 = 0.7;

pub const VIGNETTE_CHANCE: f64 = 0.15;
pub const VIGNETTE_MAX_ALPHA: f32 = 0.3;
/// Darkening ramps from this radius to the outer one, as fractions of the
/// strip height measured from its centre.
pub const VIGNETTE_INNER_RADIUS: f32 = 0.3;
pub const VIGNETTE_OUTER_RADIUS: f32 = 0.7;
/// Translucent steps approximating the radial ramp.
pub const VIGNETTE_BANDS: usize = 4;

pub const DEAD_PIXEL_CHANCE: f64 = 0.3;
pub const DEAD_PIXEL_COUNT: usize = 5;
pub const DEAD_PIXEL_SIZE: f32 = 2.0;

pub const PIXEL_BLOCK_CHANCE: f64 = 0.08;
pub const PIXEL_BLOCK_MIN_WIDTH: f32 = 10.0;
pub const PIXEL_BLOCK_MAX_WIDTH: f32 = 70.0;
pub const PIXEL_BLOCK_MIN_HEIGHT: f32 = 5.0;
pub const PIXEL_BLOCK_MAX_HEIGHT: f32 = 35.0;
pub const PIXEL_BLOCK_ALPHA: f32 = 0.12;

pub const FOOTER_TITLE: &str = "Hiba Khan";
pub const FOOTER_TAGLINE: &str = "signal lost. connection fading.";
pub const FOOTER_NOTICE: &str = "(c) 2025 • ALL RIGHTS RESERVED • STAND BY";
