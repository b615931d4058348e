use bevy::prelude::*;
use constants::page_scene::RockFieldConfig;
use rand::Rng;

use super::particles::sample_range;

/// One floating rock. Owned by the scene that generated it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RockInstance {
    pub position: Vec3,
    pub scale: f32,
    /// Accumulated Euler XYZ rotation. Never normalised.
    pub rotation: Vec3,
    /// Per-axis rotation added every frame.
    pub spin: Vec3,
}

impl RockInstance {
    pub fn generate_all<R: Rng>(config: &RockFieldConfig, rng: &mut R) -> Vec<Self> {
        (0..config.count)
            .map(|_| Self::generate(config, rng))
            .collect()
    }

    fn generate<R: Rng>(config: &RockFieldConfig, rng: &mut R) -> Self {
        let position = Vec3::new(
            sample_range(rng, config.min[0], config.max[0]),
            sample_range(rng, config.min[1], config.max[1]),
            sample_range(rng, config.min[2], config.max[2]),
        );
        let scale = sample_range(rng, config.scale_min, config.scale_max);
        let rotation = Vec3::new(
            sample_range(rng, 0.0, config.max_initial_rotation),
            sample_range(rng, 0.0, config.max_initial_rotation),
            sample_range(rng, 0.0, config.max_initial_rotation),
        );
        let spin = Vec3::new(
            sample_range(rng, config.spin_min, config.spin_max),
            sample_range(rng, config.spin_min, config.spin_max),
            sample_range(rng, config.spin_min, config.spin_max),
        );

        Self {
            position,
            scale,
            rotation,
            spin,
        }
    }

    pub fn spin(&mut self) {
        self.rotation += self.spin;
    }

    pub fn transform(&self) -> Transform {
        Transform {
            translation: self.position,
            rotation: Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            ),
            scale: Vec3::splat(self.scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::page_scene;

    fn in_range(value: f32, min: f32, max: f32) -> bool {
        value >= min && value <= max
    }

    #[test]
    fn rocks_respect_configured_ranges() {
        for scene in [page_scene::hero_scene(), page_scene::projects_scene()] {
            let config = scene.rocks.expect("page has rocks");
            let rocks = RockInstance::generate_all(&config, &mut rand::thread_rng());
            assert_eq!(rocks.len(), config.count);

            for rock in &rocks {
                for axis in 0..3 {
                    assert!(in_range(rock.position[axis], config.min[axis], config.max[axis]));
                    assert!(in_range(rock.rotation[axis], 0.0, config.max_initial_rotation));
                    assert!(in_range(rock.spin[axis], config.spin_min, config.spin_max));
                }
                assert!(in_range(rock.scale, config.scale_min, config.scale_max));
            }
        }
    }

    #[test]
    fn spin_accumulates_without_wrapping() {
        let mut rock = RockInstance {
            position: Vec3::ZERO,
            scale: 1.0,
            rotation: Vec3::ZERO,
            spin: Vec3::new(0.05, 0.01, 0.0),
        };
        for _ in 0..1000 {
            rock.spin();
        }
        assert!((rock.rotation.x - 50.0).abs() < 1e-2);
        assert!((rock.rotation.y - 10.0).abs() < 1e-2);
        assert_eq!(rock.rotation.z, 0.0);
    }

    #[test]
    fn transform_carries_uniform_scale() {
        let rock = RockInstance {
            position: Vec3::new(1.0, 2.0, 3.0),
            scale: 2.5,
            rotation: Vec3::ZERO,
            spin: Vec3::ZERO,
        };
        let transform = rock.transform();
        assert_eq!(transform.translation, rock.position);
        assert_eq!(transform.scale, Vec3::splat(2.5));
        assert_eq!(transform.rotation, Quat::IDENTITY);
    }
}
