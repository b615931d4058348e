use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;
use constants::page_scene::{PageSceneConfig, RibbonConfig, RockFieldConfig};
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, POINT_LIGHT_LUMENS, RIBBON_EMISSIVE_STRENGTH, ROCK_METALLIC, ROCK_ROUGHNESS,
};

use super::palette::hex_color;
use crate::engine::camera::pointer::Viewport;
use crate::engine::field::particles::ParticleField;
use crate::engine::lifecycle::page_animation::SceneState;
use crate::engine::shaders::ParticleFieldMaterial;

/// Everything spawned for the current page. Despawned on unmount.
#[derive(Component)]
pub struct PageSceneEntity;

#[derive(Component)]
pub struct PageCamera;

#[derive(Component)]
pub struct ParticleFieldMesh;

/// Index into `SceneState::rocks`.
#[derive(Component)]
pub struct RockSlot(pub usize);

/// Index into `SceneState::ribbons`.
#[derive(Component)]
pub struct RibbonSlot(pub usize);

/// Asset stores the spawn helpers write into.
pub struct SceneAssets<'a> {
    pub meshes: &'a mut Assets<Mesh>,
    pub particle_materials: &'a mut Assets<ParticleFieldMaterial>,
    pub standard_materials: &'a mut Assets<StandardMaterial>,
}

pub fn spawn_page_scene(
    commands: &mut Commands,
    config: &PageSceneConfig,
    scene: &SceneState,
    viewport: Viewport,
    assets: &mut SceneAssets,
    ambient: &mut AmbientLight,
) {
    spawn_camera(commands, config, scene, viewport);
    spawn_particle_field(commands, config, &scene.particles, assets);

    if let Some(rocks) = &config.rocks {
        spawn_rocks(commands, rocks, scene, assets);
    }
    if let Some(ribbons) = &config.ribbons {
        spawn_ribbons(commands, ribbons, scene, assets);
    }

    spawn_lights(commands, config, ambient);
}

fn spawn_camera(
    commands: &mut Commands,
    config: &PageSceneConfig,
    scene: &SceneState,
    viewport: Viewport,
) {
    let camera = &config.camera;
    commands.spawn((
        Camera3d::default(),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            aspect_ratio: viewport.aspect(),
            near: camera.near,
            far: camera.far,
        }),
        scene.camera.transform(),
        DistanceFog {
            color: hex_color(config.fog.color, 1.0),
            falloff: FogFalloff::Linear {
                start: config.fog.start,
                end: config.fog.end,
            },
            ..default()
        },
        PageCamera,
        PageSceneEntity,
    ));
}

/// Point-list mesh over the field's position buffer.
pub fn particle_mesh(field: &ParticleField) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, field.points().to_vec());
    mesh
}

fn spawn_particle_field(
    commands: &mut Commands,
    config: &PageSceneConfig,
    field: &ParticleField,
    assets: &mut SceneAssets,
) {
    let mesh = assets.meshes.add(particle_mesh(field));
    let material = assets
        .particle_materials
        .add(ParticleFieldMaterial::new(&config.particles.style, &config.fog));

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            field.rotation.x,
            field.rotation.y,
            field.rotation.z,
        )),
        NoFrustumCulling,
        ParticleFieldMesh,
        PageSceneEntity,
    ));
}

fn spawn_rocks(
    commands: &mut Commands,
    config: &RockFieldConfig,
    scene: &SceneState,
    assets: &mut SceneAssets,
) {
    let mut rock_mesh = match Sphere::new(1.0).mesh().ico(0) {
        Ok(mesh) => mesh,
        Err(err) => {
            warn!("Could not build rock mesh: {}", err);
            return;
        }
    };
    rock_mesh.duplicate_vertices();
    rock_mesh.compute_flat_normals();

    let mesh = assets.meshes.add(rock_mesh);
    let material = assets.standard_materials.add(StandardMaterial {
        base_color: hex_color(config.color, 1.0),
        perceptual_roughness: ROCK_ROUGHNESS,
        metallic: ROCK_METALLIC,
        ..default()
    });

    for (index, rock) in scene.rocks.iter().enumerate() {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            rock.transform(),
            RockSlot(index),
            PageSceneEntity,
        ));
    }
}

fn spawn_ribbons(
    commands: &mut Commands,
    config: &RibbonConfig,
    scene: &SceneState,
    assets: &mut SceneAssets,
) {
    let mesh = assets.meshes.add(Plane3d::new(
        Vec3::Z,
        Vec2::new(config.width / 2.0, config.height / 2.0),
    ));
    let material = assets.standard_materials.add(StandardMaterial {
        base_color: hex_color(config.color, config.opacity),
        emissive: hex_color(config.color, 1.0).to_linear() * RIBBON_EMISSIVE_STRENGTH,
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        unlit: false,
        ..default()
    });

    for ribbon in &scene.ribbons {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            ribbon.transform(config),
            RibbonSlot(ribbon.index),
            PageSceneEntity,
        ));
    }
}

fn spawn_lights(commands: &mut Commands, config: &PageSceneConfig, ambient: &mut AmbientLight) {
    ambient.color = Color::WHITE;
    ambient.brightness = config.ambient_intensity * AMBIENT_BRIGHTNESS;

    for light in &config.lights {
        commands.spawn((
            PointLight {
                color: hex_color(light.color, 1.0),
                intensity: light.intensity * POINT_LIGHT_LUMENS,
                range: light.range,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(Vec3::from_array(light.position)),
            PageSceneEntity,
        ));
    }
}
