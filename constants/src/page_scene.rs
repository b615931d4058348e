use serde::{Deserialize, Serialize};

/// Volume a particle field is scattered through at setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldVolume {
    /// Axis-aligned box, uniform per axis.
    Box { min: [f32; 3], max: [f32; 3] },
    /// Annulus around the Z axis extruded along Z.
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        min_z: f32,
        max_z: f32,
    },
}

impl FieldVolume {
    /// Symmetric box centred on the origin.
    pub const fn cube(half_extent: f32) -> Self {
        Self::Box {
            min: [-half_extent, -half_extent, -half_extent],
            max: [half_extent, half_extent, half_extent],
        }
    }

    pub fn contains(&self, point: [f32; 3]) -> bool {
        match *self {
            Self::Box { min, max } => (0..3).all(|i| point[i] >= min[i] && point[i] <= max[i]),
            Self::Ring {
                inner_radius,
                outer_radius,
                min_z,
                max_z,
            } => {
                // Small tolerance for the cos/sin round trip.
                let radius = (point[0] * point[0] + point[1] * point[1]).sqrt();
                radius >= inner_radius - 1e-3
                    && radius <= outer_radius + 1e-3
                    && point[2] >= min_z
                    && point[2] <= max_z
            }
        }
    }
}

/// How a particle field moves each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldMotion {
    /// Every point advances along +Z by `step` per frame and jumps back to
    /// `far_bound` once past `forward_bound`.
    DepthRecycle {
        step: f32,
        forward_bound: f32,
        far_bound: f32,
    },
    /// Whole-field rotation, `elapsed * rate` radians about X and Y.
    Spin { rate: [f32; 2] },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleStyle {
    pub size: f32,
    /// 0xRRGGBB
    pub color: u32,
    pub opacity: f32,
    /// Additive blending instead of regular alpha blending.
    pub additive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleFieldConfig {
    pub count: usize,
    pub volume: FieldVolume,
    pub motion: FieldMotion,
    pub style: ParticleStyle,
}

/// Floating icosahedron "rocks" with a constant per-axis spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RockFieldConfig {
    pub count: usize,
    pub min: [f32; 3],
    pub max: [f32; 3],
    pub scale_min: f32,
    pub scale_max: f32,
    /// Per-axis spin velocity range, radians per frame.
    pub spin_min: f32,
    pub spin_max: f32,
    /// Initial rotation per axis is drawn from `[0, max_initial_rotation]`.
    pub max_initial_rotation: f32,
    pub color: u32,
}

/// Translucent ribbons flowing towards the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RibbonConfig {
    pub count: usize,
    pub spacing: f32,
    pub width: f32,
    pub height: f32,
    /// Rotation about Y, radians.
    pub yaw: f32,
    pub spawn_min_z: f32,
    pub spawn_max_z: f32,
    pub step: f32,
    pub forward_bound: f32,
    pub far_bound: f32,
    pub sway_amplitude: f32,
    pub sway_frequency: f32,
    pub color: u32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub look_at: [f32; 3],
    /// Scales normalised pointer coordinates into a camera offset.
    pub sensitivity: [f32; 2],
    /// Fraction of the remaining distance closed each frame.
    pub damping: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FogConfig {
    pub color: u32,
    pub start: f32,
    pub end: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLightConfig {
    pub color: u32,
    pub intensity: f32,
    pub range: f32,
    pub position: [f32; 3],
}

/// Everything one page's background animation needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSceneConfig {
    pub particles: ParticleFieldConfig,
    #[serde(default)]
    pub rocks: Option<RockFieldConfig>,
    #[serde(default)]
    pub ribbons: Option<RibbonConfig>,
    pub camera: CameraConfig,
    pub fog: FogConfig,
    pub ambient_intensity: f32,
    #[serde(default)]
    pub lights: Vec<PointLightConfig>,
}

pub const CYAN: u32 = 0x00ffff;
pub const MAGENTA: u32 = 0xff00ff;
pub const WHITE: u32 = 0xffffff;
pub const BLACK: u32 = 0x000000;

const ASTEROID_ROCKS: RockFieldConfig = RockFieldConfig {
    count: 30,
    min: [-75.0, -75.0, -100.0],
    max: [75.0, 75.0, -20.0],
    scale_min: 0.5,
    scale_max: 3.5,
    spin_min: 0.0,
    spin_max: 0.05,
    max_initial_rotation: std::f32::consts::PI,
    color: 0x333333,
};

const CYAN_DUST: ParticleStyle = ParticleStyle {
    size: 0.3,
    color: CYAN,
    opacity: 0.8,
    additive: true,
};

fn twin_lights(offset: f32, range: f32, cyan: f32, magenta: f32, back_z: f32) -> Vec<PointLightConfig> {
    vec![
        PointLightConfig {
            color: CYAN,
            intensity: cyan,
            range,
            position: [offset, offset, offset],
        },
        PointLightConfig {
            color: MAGENTA,
            intensity: magenta,
            range,
            position: [-offset, -offset, back_z],
        },
    ]
}

/// Landing page: spinning cyan dust with tumbling asteroids.
pub fn hero_scene() -> PageSceneConfig {
    PageSceneConfig {
        particles: ParticleFieldConfig {
            count: 5000,
            volume: FieldVolume::cube(100.0),
            motion: FieldMotion::Spin { rate: [0.15, 0.3] },
            style: CYAN_DUST,
        },
        rocks: Some(ASTEROID_ROCKS),
        ribbons: None,
        camera: CameraConfig {
            position: [0.0, 0.0, 50.0],
            look_at: [0.0, 0.0, 0.0],
            sensitivity: [10.0, 10.0],
            damping: 0.05,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        },
        fog: FogConfig {
            color: BLACK,
            start: 1.0,
            end: 1000.0,
        },
        ambient_intensity: 0.3,
        lights: twin_lights(10.0, 100.0, 2.0, 1.5, 10.0),
    }
}

/// Star streaks rushing past, with flowing ribbons.
pub fn about_scene() -> PageSceneConfig {
    PageSceneConfig {
        particles: ParticleFieldConfig {
            count: 12000,
            volume: FieldVolume::Box {
                min: [-100.0, -60.0, -200.0],
                max: [100.0, 60.0, 0.0],
            },
            motion: FieldMotion::DepthRecycle {
                step: 0.8,
                forward_bound: 40.0,
                far_bound: -200.0,
            },
            style: ParticleStyle {
                size: 0.6,
                color: WHITE,
                opacity: 0.8,
                additive: false,
            },
        },
        rocks: None,
        ribbons: Some(RibbonConfig {
            count: 14,
            spacing: 8.0,
            width: 6.0,
            height: 80.0,
            yaw: std::f32::consts::FRAC_PI_6,
            spawn_min_z: -160.0,
            spawn_max_z: 0.0,
            step: 0.6,
            forward_bound: 40.0,
            far_bound: -160.0,
            sway_amplitude: 10.0,
            sway_frequency: 0.8,
            color: CYAN,
            opacity: 0.15,
        }),
        // Pointer y is not inverted on this page.
        camera: CameraConfig {
            position: [0.0, 0.0, 60.0],
            look_at: [0.0, 0.0, -40.0],
            sensitivity: [4.0, -3.0],
            damping: 0.05,
            fov_degrees: 70.0,
            near: 0.1,
            far: 300.0,
        },
        fog: FogConfig {
            color: BLACK,
            start: 20.0,
            end: 140.0,
        },
        ambient_intensity: 0.15,
        lights: vec![
            PointLightConfig {
                color: CYAN,
                intensity: 2.0,
                range: 200.0,
                position: [20.0, 10.0, 40.0],
            },
            PointLightConfig {
                color: MAGENTA,
                intensity: 1.4,
                range: 200.0,
                position: [-20.0, -10.0, 20.0],
            },
        ],
    }
}

/// Slow drifting dust and a wider, lazier asteroid belt.
pub fn projects_scene() -> PageSceneConfig {
    PageSceneConfig {
        particles: ParticleFieldConfig {
            count: 6000,
            volume: FieldVolume::cube(110.0),
            motion: FieldMotion::Spin { rate: [0.02, 0.05] },
            style: ParticleStyle {
                size: 0.35,
                color: CYAN,
                opacity: 0.75,
                additive: true,
            },
        },
        rocks: Some(RockFieldConfig {
            count: 40,
            min: [-90.0, -90.0, -90.0],
            max: [90.0, 90.0, 90.0],
            scale_min: 1.0,
            scale_max: 4.0,
            spin_min: -0.005,
            spin_max: 0.005,
            max_initial_rotation: 0.0,
            color: 0x2a2a2a,
        }),
        ribbons: None,
        camera: CameraConfig {
            position: [0.0, 0.0, 60.0],
            look_at: [0.0, 0.0, 0.0],
            sensitivity: [6.0, 6.0],
            damping: 0.04,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        },
        fog: FogConfig {
            color: BLACK,
            start: 1.0,
            end: 900.0,
        },
        ambient_intensity: 0.25,
        lights: twin_lights(15.0, 120.0, 2.0, 1.5, 10.0),
    }
}

/// Warp tunnel: a hollow ring of particles streaming along Z.
pub fn contact_scene() -> PageSceneConfig {
    PageSceneConfig {
        particles: ParticleFieldConfig {
            count: 5000,
            volume: FieldVolume::Ring {
                inner_radius: 5.0,
                outer_radius: 20.0,
                min_z: -400.0,
                max_z: 400.0,
            },
            motion: FieldMotion::DepthRecycle {
                step: 0.8,
                forward_bound: 400.0,
                far_bound: -400.0,
            },
            style: ParticleStyle {
                size: 0.22,
                color: CYAN,
                opacity: 0.55,
                additive: true,
            },
        },
        rocks: None,
        ribbons: None,
        camera: CameraConfig {
            position: [0.0, 0.0, 20.0],
            look_at: [0.0, 0.0, 0.0],
            sensitivity: [10.0, 10.0],
            damping: 0.05,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        },
        fog: FogConfig {
            color: BLACK,
            start: 10.0,
            end: 400.0,
        },
        ambient_intensity: 0.2,
        lights: Vec::new(),
    }
}

/// Same field as the landing page.
pub fn archive_scene() -> PageSceneConfig {
    hero_scene()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_contains_checks_radius_and_depth() {
        let ring = FieldVolume::Ring {
            inner_radius: 5.0,
            outer_radius: 20.0,
            min_z: -10.0,
            max_z: 10.0,
        };
        assert!(ring.contains([10.0, 0.0, 0.0]));
        assert!(!ring.contains([1.0, 1.0, 0.0]));
        assert!(!ring.contains([30.0, 0.0, 0.0]));
        assert!(!ring.contains([10.0, 0.0, 11.0]));
    }

    #[test]
    fn cube_contains_its_corners() {
        let cube = FieldVolume::cube(2.0);
        assert!(cube.contains([2.0, -2.0, 2.0]));
        assert!(!cube.contains([2.1, 0.0, 0.0]));
    }

    #[test]
    fn scene_config_survives_json() {
        let about = about_scene();
        let json = serde_json::to_string(&about).unwrap();
        assert!(json.contains("\"kind\":\"depth_recycle\""));
        let parsed: PageSceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, about);
    }

    #[test]
    fn missing_optional_sections_default_to_none() {
        let json = r#"{
            "particles": {
                "count": 10,
                "volume": { "kind": "box", "min": [0, 0, 0], "max": [1, 1, 1] },
                "motion": { "kind": "spin", "rate": [0.1, 0.2] },
                "style": { "size": 0.3, "color": 65535, "opacity": 0.8, "additive": true }
            },
            "camera": {
                "position": [0, 0, 10], "look_at": [0, 0, 0], "sensitivity": [1, 1],
                "damping": 0.05, "fov_degrees": 75, "near": 0.1, "far": 100
            },
            "fog": { "color": 0, "start": 1, "end": 100 },
            "ambient_intensity": 0.2
        }"#;
        let parsed: PageSceneConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.rocks.is_none());
        assert!(parsed.ribbons.is_none());
        assert!(parsed.lights.is_empty());
    }
}
