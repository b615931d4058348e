//! Procedural background fields and their per-frame motion.
//!
//! Generation scatters particles, rocks and ribbons uniformly through the
//! volumes a page configures. Motion mutates the generated state in place
//! once per frame; the scene presenter reads it straight afterwards.

/// Per-frame update rules: depth recycling, whole-field spin.
pub mod motion;

/// Flat xyz particle buffer and uniform volume sampling.
pub mod particles;

/// Ribbons flowing towards the camera on the About page.
pub mod ribbons;

/// Tumbling rocks with constant per-axis spin.
pub mod rocks;
