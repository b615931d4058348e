use bevy::prelude::*;
use constants::page_scene::RibbonConfig;
use rand::Rng;

use super::motion::recycle_depth;
use super::particles::sample_range;

/// One flowing ribbon. Lateral slot is fixed; depth recycles, height sways.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonInstance {
    pub index: usize,
    pub position: Vec3,
}

impl RibbonInstance {
    pub fn generate_all<R: Rng>(config: &RibbonConfig, rng: &mut R) -> Vec<Self> {
        let centre = config.count as f32 / 2.0;
        (0..config.count)
            .map(|index| Self {
                index,
                position: Vec3::new(
                    (index as f32 - centre) * config.spacing,
                    0.0,
                    sample_range(rng, config.spawn_min_z, config.spawn_max_z),
                ),
            })
            .collect()
    }

    pub fn advance(&mut self, config: &RibbonConfig, elapsed: f32) {
        self.position.z = recycle_depth(
            self.position.z,
            config.step,
            config.forward_bound,
            config.far_bound,
        );
        self.position.y =
            (elapsed * config.sway_frequency + self.index as f32).sin() * config.sway_amplitude;
    }

    pub fn transform(&self, config: &RibbonConfig) -> Transform {
        Transform::from_translation(self.position).with_rotation(Quat::from_rotation_y(config.yaw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::page_scene;

    fn ribbon_config() -> RibbonConfig {
        page_scene::about_scene().ribbons.expect("about page has ribbons")
    }

    #[test]
    fn ribbons_are_laid_out_in_lateral_slots() {
        let config = ribbon_config();
        let ribbons = RibbonInstance::generate_all(&config, &mut rand::thread_rng());
        assert_eq!(ribbons.len(), 14);
        assert_eq!(ribbons[0].position.x, -56.0);
        assert_eq!(ribbons[13].position.x, 48.0);
        assert!(ribbons.iter().all(|r| {
            r.position.z >= config.spawn_min_z && r.position.z <= config.spawn_max_z
        }));
    }

    #[test]
    fn ribbon_sways_within_amplitude_and_recycles() {
        let config = ribbon_config();
        let mut ribbon = RibbonInstance {
            index: 3,
            position: Vec3::new(0.0, 0.0, 39.9),
        };

        ribbon.advance(&config, 1.25);
        assert_eq!(ribbon.position.z, config.far_bound);
        assert!(ribbon.position.y.abs() <= config.sway_amplitude);

        ribbon.advance(&config, 1.3);
        assert_eq!(ribbon.position.z, config.far_bound + config.step);
    }
}
