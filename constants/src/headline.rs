/// Phrases cycled by the landing page headline, in order.
pub const HEADLINE_PHRASES: &[&str] = &[
    "CODE WIZARD",
    "FULL STACK DEV.",
    "PROBLEM SOLVER",
    "CREATIVE",
    "STUDENT",
    "WEB SORCERER",
];

/// Time between typed characters.
pub const TYPEWRITER_CHAR_INTERVAL_MS: u64 = 100;

/// How long a completed phrase stays on screen before the next one starts.
pub const TYPEWRITER_HOLD_MS: u64 = 1500;

/// Hold duration expressed in character ticks.
pub const TYPEWRITER_HOLD_TICKS: u32 = (TYPEWRITER_HOLD_MS / TYPEWRITER_CHAR_INTERVAL_MS) as u32;

pub const HEADLINE_TAGLINE: &str =
    "Using science, code, and creativity to solve problems... sometimes intentionally, sometimes with luck.";

pub const HEADLINE_CARET: &str = "|";
