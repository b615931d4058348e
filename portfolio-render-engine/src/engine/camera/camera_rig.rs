use bevy::prelude::*;
use constants::page_scene::CameraConfig;

use super::pointer::PointerState;

/// Camera position plus the parameters that couple it to the pointer.
///
/// Orientation is never stored: every frame the camera is re-aimed at
/// `look_at`, so rotation cannot drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub look_at: Vec3,
    pub sensitivity: Vec2,
    pub damping: f32,
}

impl CameraRig {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::from_array(config.position),
            look_at: Vec3::from_array(config.look_at),
            sensitivity: Vec2::from_array(config.sensitivity),
            damping: config.damping,
        }
    }

    /// Where the camera is heading for a given pointer. Depth is unchanged.
    pub fn target(&self, pointer: &PointerState) -> Vec3 {
        let offset = pointer.ndc * self.sensitivity;
        Vec3::new(offset.x, offset.y, self.position.z)
    }

    /// Close `damping` of the remaining distance on each axis.
    pub fn ease(&mut self, pointer: &PointerState) {
        let target = self.target(pointer);
        self.position += (target - self.position) * self.damping;
    }

    pub fn distance_to_target(&self, pointer: &PointerState) -> f32 {
        self.position.distance(self.target(pointer))
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.look_at, Vec3::Y)
    }
}
