use bevy::prelude::*;

use super::spawn::{PageCamera, ParticleFieldMesh, RibbonSlot, RockSlot};
use crate::engine::lifecycle::page_lifecycle::PageLifecycle;

/// Push the field's rotation and, when positions moved, its vertex buffer.
pub fn present_particle_field(
    lifecycle: Res<PageLifecycle>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut fields: Query<(&Mesh3d, &mut Transform), With<ParticleFieldMesh>>,
) {
    let Some(scene) = lifecycle.scene() else {
        return;
    };

    for (mesh3d, mut transform) in &mut fields {
        let rotation = scene.particles.rotation;
        transform.rotation = Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z);

        if scene.particles_dirty {
            if let Some(mesh) = meshes.get_mut(&mesh3d.0) {
                mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, scene.particles.points().to_vec());
            }
        }
    }
}

pub fn present_rocks(lifecycle: Res<PageLifecycle>, mut rocks: Query<(&RockSlot, &mut Transform)>) {
    let Some(scene) = lifecycle.scene() else {
        return;
    };

    for (slot, mut transform) in &mut rocks {
        if let Some(rock) = scene.rocks.get(slot.0) {
            *transform = rock.transform();
        }
    }
}

pub fn present_ribbons(
    lifecycle: Res<PageLifecycle>,
    mut ribbons: Query<(&RibbonSlot, &mut Transform)>,
) {
    let Some(page) = lifecycle.current() else {
        return;
    };
    let (Some(scene), Some(config)) = (page.scene(), page.config().ribbons.as_ref()) else {
        return;
    };

    for (slot, mut transform) in &mut ribbons {
        if let Some(ribbon) = scene.ribbons.get(slot.0) {
            *transform = ribbon.transform(config);
        }
    }
}

pub fn present_camera(
    lifecycle: Res<PageLifecycle>,
    mut cameras: Query<&mut Transform, With<PageCamera>>,
) {
    let Some(scene) = lifecycle.scene() else {
        return;
    };

    for mut transform in &mut cameras {
        *transform = scene.camera.transform();
    }
}
