//! Pointer-driven camera easing.
//!
//! The pointer is normalised to [-1, 1] on both axes and scaled into a
//! camera offset target; the camera closes a fixed fraction of the
//! remaining distance each frame and re-aims at its look-at point.

/// Camera position easing towards a pointer-derived target.
pub mod camera_rig;

/// Viewport dimensions and normalised pointer coordinates.
pub mod pointer;
