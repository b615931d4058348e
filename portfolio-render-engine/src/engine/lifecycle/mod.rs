//! Page scene lifecycle: Uninitialized, Active, Disposed.
//!
//! Each route mount creates a fresh [`page_animation::PageAnimation`]; the
//! process-wide [`input_surface::InputSurface`] guarantees that only one
//! page holds pointer and resize listeners at a time. Unmount cancels the
//! pending frame before anything else, so a disposed scene never sees
//! another update or render.

/// Lifecycle and listener registration errors.
pub mod error;

/// Process-wide listener ownership.
pub mod input_surface;

/// One mount's scene state and its transitions.
pub mod page_animation;

/// Resource owning the single live page animation.
pub mod page_lifecycle;

/// Bevy wiring: mount on route enter, unmount on exit, per-frame systems.
pub mod plugin;
