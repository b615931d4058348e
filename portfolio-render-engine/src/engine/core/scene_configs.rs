use std::collections::HashMap;

use bevy::prelude::*;
use constants::page_scene::{FieldMotion, FieldVolume, PageSceneConfig};
use thiserror::Error;

use super::route::Route;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown route '{0}'")]
    UnknownRoute(String),

    #[error("{field}: minimum {min} exceeds maximum {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("camera damping must lie in (0, 1], got {0}")]
    DampingOutOfRange(f32),

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field}: span from {min} to {max} is not representable")]
    RangeOverflow {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("{field}: {count} exceeds the limit of {limit}")]
    TooMany {
        field: &'static str,
        count: usize,
        limit: usize,
    },
}

/// Upper bound on points in one particle field.
pub const MAX_PARTICLES: usize = 100_000;
/// Upper bound on rocks or ribbons; each one is a separate entity.
pub const MAX_SCENE_OBJECTS: usize = 500;

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn finite_all(field: &'static str, values: &[f32]) -> Result<(), ConfigError> {
    values.iter().try_for_each(|value| finite(field, *value))
}

fn ordered(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    finite(field, min)?;
    finite(field, max)?;
    if min > max {
        return Err(ConfigError::InvertedRange { field, min, max });
    }
    // Uniform sampling needs the width itself to be finite.
    if !(max - min).is_finite() {
        return Err(ConfigError::RangeOverflow { field, min, max });
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn bounded(field: &'static str, count: usize, limit: usize) -> Result<(), ConfigError> {
    if count <= limit {
        Ok(())
    } else {
        Err(ConfigError::TooMany {
            field,
            count,
            limit,
        })
    }
}

/// Reject configurations the generators or the camera cannot honour.
pub fn validate_page_config(config: &PageSceneConfig) -> Result<(), ConfigError> {
    bounded("particles.count", config.particles.count, MAX_PARTICLES)?;
    match config.particles.volume {
        FieldVolume::Box { min, max } => {
            ordered("particles.volume.x", min[0], max[0])?;
            ordered("particles.volume.y", min[1], max[1])?;
            ordered("particles.volume.z", min[2], max[2])?;
        }
        FieldVolume::Ring {
            inner_radius,
            outer_radius,
            min_z,
            max_z,
        } => {
            ordered("particles.volume.inner_radius", 0.0, inner_radius)?;
            ordered("particles.volume.radius", inner_radius, outer_radius)?;
            ordered("particles.volume.z", min_z, max_z)?;
        }
    }

    if let FieldMotion::DepthRecycle {
        step,
        forward_bound,
        far_bound,
    } = config.particles.motion
    {
        positive("particles.motion.step", step)?;
        ordered("particles.motion.bounds", far_bound, forward_bound)?;
    }
    if let FieldMotion::Spin { rate } = config.particles.motion {
        finite_all("particles.motion.rate", &rate)?;
    }
    positive("particles.style.size", config.particles.style.size)?;
    finite("particles.style.opacity", config.particles.style.opacity)?;

    if let Some(rocks) = &config.rocks {
        bounded("rocks.count", rocks.count, MAX_SCENE_OBJECTS)?;
        for axis in 0..3 {
            ordered("rocks.position", rocks.min[axis], rocks.max[axis])?;
        }
        positive("rocks.scale_min", rocks.scale_min)?;
        ordered("rocks.scale", rocks.scale_min, rocks.scale_max)?;
        ordered("rocks.spin", rocks.spin_min, rocks.spin_max)?;
        ordered("rocks.max_initial_rotation", 0.0, rocks.max_initial_rotation)?;
    }

    if let Some(ribbons) = &config.ribbons {
        bounded("ribbons.count", ribbons.count, MAX_SCENE_OBJECTS)?;
        finite_all(
            "ribbons",
            &[
                ribbons.spacing,
                ribbons.yaw,
                ribbons.sway_amplitude,
                ribbons.sway_frequency,
                ribbons.opacity,
            ],
        )?;
        positive("ribbons.step", ribbons.step)?;
        ordered("ribbons.spawn_z", ribbons.spawn_min_z, ribbons.spawn_max_z)?;
        ordered("ribbons.bounds", ribbons.far_bound, ribbons.forward_bound)?;
        positive("ribbons.width", ribbons.width)?;
        positive("ribbons.height", ribbons.height)?;
    }

    let camera = &config.camera;
    finite_all("camera.position", &camera.position)?;
    finite_all("camera.look_at", &camera.look_at)?;
    finite_all("camera.sensitivity", &camera.sensitivity)?;
    if !(camera.damping > 0.0 && camera.damping <= 1.0) {
        return Err(ConfigError::DampingOutOfRange(camera.damping));
    }
    positive("camera.near", camera.near)?;
    ordered("camera.clip", camera.near, camera.far)?;
    positive("camera.fov_degrees", camera.fov_degrees)?;
    ordered("fog", config.fog.start, config.fog.end)?;
    finite("ambient_intensity", config.ambient_intensity)?;
    for light in &config.lights {
        finite_all("lights.position", &light.position)?;
        finite("lights.intensity", light.intensity)?;
        finite("lights.range", light.range)?;
    }

    Ok(())
}

/// Scene parameters per route, compiled defaults overlaid with any valid
/// entries from the scene manifest.
#[derive(Resource, Debug, Clone)]
pub struct PageSceneConfigs {
    configs: HashMap<Route, PageSceneConfig>,
}

impl Default for PageSceneConfigs {
    fn default() -> Self {
        Self {
            configs: Route::ALL
                .iter()
                .map(|route| (*route, route.default_scene()))
                .collect(),
        }
    }
}

impl PageSceneConfigs {
    pub fn get(&self, route: Route) -> PageSceneConfig {
        self.configs
            .get(&route)
            .cloned()
            .unwrap_or_else(|| route.default_scene())
    }

    /// Replace one page's parameters, keyed by its path.
    pub fn apply_override(
        &mut self,
        path: &str,
        config: PageSceneConfig,
    ) -> Result<Route, ConfigError> {
        let route = Route::from_path(path).ok_or_else(|| ConfigError::UnknownRoute(path.into()))?;
        validate_page_config(&config)?;
        self.configs.insert(route, config);
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_defaults_are_valid() {
        for route in Route::ALL {
            assert_eq!(validate_page_config(&route.default_scene()), Ok(()));
        }
    }

    #[test]
    fn rejects_inverted_recycle_bounds() {
        let mut config = Route::About.default_scene();
        config.particles.motion = FieldMotion::DepthRecycle {
            step: 0.8,
            forward_bound: -300.0,
            far_bound: 40.0,
        };
        assert!(matches!(
            validate_page_config(&config),
            Err(ConfigError::InvertedRange {
                field: "particles.motion.bounds",
                ..
            })
        ));
    }

    #[test]
    fn rejects_damping_outside_unit_interval() {
        let mut config = Route::Hero.default_scene();
        config.camera.damping = 1.5;
        assert_eq!(
            validate_page_config(&config),
            Err(ConfigError::DampingOutOfRange(1.5))
        );
        config.camera.damping = 0.0;
        assert!(validate_page_config(&config).is_err());
    }

    #[test]
    fn override_replaces_only_valid_known_routes() {
        let mut configs = PageSceneConfigs::default();

        let mut contact = Route::Contact.default_scene();
        contact.particles.count = 42;
        assert_eq!(configs.apply_override("/contact", contact), Ok(Route::Contact));
        assert_eq!(configs.get(Route::Contact).particles.count, 42);

        assert_eq!(
            configs.apply_override("/blog", Route::Hero.default_scene()),
            Err(ConfigError::UnknownRoute("/blog".into()))
        );

        let mut broken = Route::Hero.default_scene();
        broken.fog.start = 2000.0;
        assert!(configs.apply_override("/", broken).is_err());
        assert_eq!(configs.get(Route::Hero), Route::Hero.default_scene());
    }

    #[test]
    fn rejects_overflowing_manifest_bounds() {
        let mut configs = PageSceneConfigs::default();

        // -1e39 does not fit in an f32 and parses to negative infinity.
        let mut json = serde_json::to_value(Route::Hero.default_scene()).unwrap();
        json["particles"]["volume"]["min"][0] = serde_json::json!(-1e39);
        let infinite: PageSceneConfig = serde_json::from_value(json).unwrap();
        assert!(matches!(
            configs.apply_override("/", infinite),
            Err(ConfigError::NonFinite {
                field: "particles.volume.x",
                ..
            })
        ));

        let mut wide = Route::Hero.default_scene();
        wide.particles.volume = FieldVolume::Box {
            min: [-3e38, 0.0, 0.0],
            max: [3e38, 1.0, 1.0],
        };
        assert!(matches!(
            configs.apply_override("/", wide),
            Err(ConfigError::RangeOverflow { .. })
        ));

        let mut crowded = Route::Hero.default_scene();
        crowded.particles.count = MAX_PARTICLES + 1;
        assert!(matches!(
            configs.apply_override("/", crowded),
            Err(ConfigError::TooMany { .. })
        ));

        assert_eq!(configs.get(Route::Hero), Route::Hero.default_scene());
    }
}
