//! Bevy entities for a page scene.
//!
//! Spawning turns a freshly mounted [`crate::engine::lifecycle::page_animation::SceneState`]
//! into a camera, a point mesh, rocks, ribbons and lights. Presentation
//! systems copy the simulated state onto those entities after each update.

/// Hex colour conversion.
pub mod palette;

/// Render-side copies of the simulated scene state.
pub mod present;

/// Entity creation on mount.
pub mod spawn;
