use bevy::prelude::*;
use constants::page_scene::{FieldVolume, ParticleFieldConfig};
use rand::Rng;
use std::f32::consts::TAU;

/// Particle positions of one page, three floats per point.
///
/// The buffer is owned by the active scene and rewritten in place every
/// frame; points have no identity beyond their index.
#[derive(Debug, Clone)]
pub struct ParticleField {
    positions: Vec<f32>,
    /// Whole-field rotation (Euler XYZ, radians) for spinning fields.
    pub rotation: Vec3,
}

impl ParticleField {
    /// Scatter `config.count` points uniformly through `config.volume`.
    pub fn generate<R: Rng>(config: &ParticleFieldConfig, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(config.count * 3);
        for _ in 0..config.count {
            positions.extend_from_slice(&sample_point(&config.volume, rng));
        }

        Self {
            positions,
            rotation: Vec3::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<Vec3> {
        self.points().get(index).copied().map(Vec3::from_array)
    }

    /// Zero-copy view of the buffer as xyz triples, ready for a mesh attribute.
    pub fn points(&self) -> &[[f32; 3]] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Mutable z coordinate of every point.
    pub fn depths_mut(&mut self) -> impl Iterator<Item = &mut f32> {
        self.positions.iter_mut().skip(2).step_by(3)
    }
}

/// Uniform point inside a field volume.
///
/// Rings sample angle and radius uniformly, which clusters points towards
/// the inner edge; the warp tunnel look depends on it.
pub fn sample_point<R: Rng>(volume: &FieldVolume, rng: &mut R) -> [f32; 3] {
    match *volume {
        FieldVolume::Box { min, max } => [
            sample_range(rng, min[0], max[0]),
            sample_range(rng, min[1], max[1]),
            sample_range(rng, min[2], max[2]),
        ],
        FieldVolume::Ring {
            inner_radius,
            outer_radius,
            min_z,
            max_z,
        } => {
            let angle = rng.gen_range(0.0..TAU);
            let radius = sample_range(rng, inner_radius, outer_radius);
            [
                angle.cos() * radius,
                angle.sin() * radius,
                sample_range(rng, min_z, max_z),
            ]
        }
    }
}

/// Uniform sample in `[low, high]`; collapses to `low` for empty or
/// unrepresentable ranges.
pub fn sample_range<R: Rng>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low && (high - low).is_finite() {
        rng.gen_range(low..=high)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::page_scene::{self, FieldMotion, ParticleStyle};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field_config(count: usize, volume: FieldVolume) -> ParticleFieldConfig {
        ParticleFieldConfig {
            count,
            volume,
            motion: FieldMotion::Spin { rate: [0.1, 0.2] },
            style: ParticleStyle {
                size: 0.3,
                color: page_scene::CYAN,
                opacity: 0.8,
                additive: true,
            },
        }
    }

    #[test]
    fn generates_exact_count_inside_box() {
        let mut rng = rand::thread_rng();
        for count in [0, 1, 7, 5000] {
            let config = field_config(count, FieldVolume::cube(100.0));
            let field = ParticleField::generate(&config, &mut rng);
            assert_eq!(field.len(), count);
            assert!(
                field
                    .points()
                    .iter()
                    .all(|p| config.volume.contains(*p))
            );
        }
    }

    #[test]
    fn generates_inside_ring() {
        let volume = FieldVolume::Ring {
            inner_radius: 5.0,
            outer_radius: 20.0,
            min_z: -400.0,
            max_z: 400.0,
        };
        let config = field_config(2000, volume);
        let field = ParticleField::generate(&config, &mut rand::thread_rng());
        assert_eq!(field.len(), 2000);
        assert!(field.points().iter().all(|p| volume.contains(*p)));
    }

    #[test]
    fn every_page_default_generates_within_bounds() {
        let mut rng = StdRng::from_entropy();
        for scene in [
            page_scene::hero_scene(),
            page_scene::about_scene(),
            page_scene::projects_scene(),
            page_scene::contact_scene(),
            page_scene::archive_scene(),
        ] {
            let field = ParticleField::generate(&scene.particles, &mut rng);
            assert_eq!(field.len(), scene.particles.count);
            assert!(
                field
                    .points()
                    .iter()
                    .all(|p| scene.particles.volume.contains(*p))
            );
        }
    }

    #[test]
    fn box_samples_spread_across_volume() {
        let config = field_config(4000, FieldVolume::cube(100.0));
        let field = ParticleField::generate(&config, &mut rand::thread_rng());
        let mean_x: f32 = field.points().iter().map(|p| p[0]).sum::<f32>() / field.len() as f32;
        assert!(mean_x.abs() < 10.0, "mean x drifted to {mean_x}");
        assert!(field.points().iter().any(|p| p[0] > 50.0));
        assert!(field.points().iter().any(|p| p[0] < -50.0));
    }

    #[test]
    fn depths_mut_visits_only_z() {
        let config = field_config(3, FieldVolume::Box {
            min: [1.0, 2.0, 3.0],
            max: [1.0, 2.0, 3.0],
        });
        let mut field = ParticleField::generate(&config, &mut rand::thread_rng());
        for z in field.depths_mut() {
            *z = 9.0;
        }
        assert_eq!(field.point(1), Some(Vec3::new(1.0, 2.0, 9.0)));
        assert_eq!(field.point(3), None);
    }

    #[test]
    fn degenerate_range_collapses() {
        let mut rng = rand::thread_rng();
        assert_eq!(sample_range(&mut rng, 4.0, 4.0), 4.0);
        assert_eq!(sample_range(&mut rng, 4.0, 1.0), 4.0);
        assert_eq!(sample_range(&mut rng, -3e38, 3e38), -3e38);
        assert_eq!(sample_range(&mut rng, f32::NEG_INFINITY, 1.0), f32::NEG_INFINITY);
    }
}
