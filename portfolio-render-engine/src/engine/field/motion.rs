use bevy::prelude::*;
use constants::page_scene::FieldMotion;

use super::particles::ParticleField;

/// Advance a depth coordinate by one frame, wrapping to `far_bound` once it
/// passes `forward_bound`.
pub fn recycle_depth(z: f32, step: f32, forward_bound: f32, far_bound: f32) -> f32 {
    let next = z + step;
    if next > forward_bound { far_bound } else { next }
}

/// Apply one frame of field motion.
///
/// Returns true when the position buffer changed and must be re-uploaded;
/// spinning fields only change their rotation.
pub fn advance_field(field: &mut ParticleField, motion: &FieldMotion, elapsed: f32) -> bool {
    match *motion {
        FieldMotion::DepthRecycle {
            step,
            forward_bound,
            far_bound,
        } => {
            for z in field.depths_mut() {
                *z = recycle_depth(*z, step, forward_bound, far_bound);
            }
            true
        }
        FieldMotion::Spin { rate } => {
            field.rotation = Vec3::new(elapsed * rate[0], elapsed * rate[1], 0.0);
            false
        }
    }
}
