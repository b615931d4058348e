//! Shared configuration for the portfolio scene engine.
//!
//! Pure data: per-page scene parameters, overlay timing and tuning,
//! and the link tables the host page renders.

pub mod crt_signal;
pub mod cursor;
pub mod headline;
pub mod links;
pub mod page_scene;
pub mod render_settings;
