//! Screen-space overlays drawn by the UI camera above the page scene.

/// Landing page headline with the typewriter effect.
pub mod headline;

/// Phrase cycling state machine behind the headline.
pub mod typewriter;

/// CRT signal simulation for the footer strip.
pub mod crt_signal;

/// Footer strip UI and its CRT layer pool.
pub mod footer;

/// Dot and ring drawn in place of the OS cursor.
pub mod cursor;
