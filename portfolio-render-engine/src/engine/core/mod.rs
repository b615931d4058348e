//! Core application setup, routing and scene configuration.
//!
//! Handles plugin initialisation and window configuration for both native
//! and WASM targets, plus the route state that drives page mounts.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the page scene, overlay and RPC plugins.
pub mod app_setup;

/// The site's routes and how they map to location paths.
pub mod route;

/// Per-route scene parameters and their validation.
pub mod scene_configs;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
