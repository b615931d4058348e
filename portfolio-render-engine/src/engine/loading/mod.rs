//! Scene manifest loading.
//!
//! The manifest is optional: compiled defaults are in place from startup and
//! each valid manifest entry replaces one route's parameters for all later
//! mounts.

/// Scene manifest asset, loading and validation.
pub mod manifest_loader;
