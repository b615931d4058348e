//! Custom pointer drawn in place of the OS cursor.

pub const CURSOR_DOT_SIZE: f32 = 6.0;

pub const CURSOR_RING_SIZE: f32 = 36.0;
/// Ring diameter while an interactive node is hovered.
pub const CURSOR_RING_HOVER_SIZE: f32 = 50.0;
pub const CURSOR_RING_BORDER: f32 = 2.0;
pub const CURSOR_RING_IDLE_ALPHA: f32 = 0.5;
/// 0xRRGGBB
pub const CURSOR_HOVER_COLOR: u32 = 0x00ffff;

/// Seconds to blend between the idle and hover styles.
pub const CURSOR_TRANSITION_SECS: f32 = 0.3;
