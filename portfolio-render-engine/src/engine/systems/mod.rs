//! Runtime systems outside the page scene itself.

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to the host page via RPC and updates the native overlay.
pub mod fps_tracking;

/// Native keyboard shortcuts for switching routes.
pub mod navigation;
