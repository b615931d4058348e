use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use super::input_surface::InputSurface;
use super::page_animation::MountOutcome;
use super::page_lifecycle::PageLifecycle;
use crate::engine::camera::pointer::Viewport;
use crate::engine::core::route::Route;
use crate::engine::core::scene_configs::PageSceneConfigs;
use crate::engine::scene::present::{
    present_camera, present_particle_field, present_ribbons, present_rocks,
};
use crate::engine::scene::spawn::{PageCamera, PageSceneEntity, SceneAssets, spawn_page_scene};
use crate::engine::shaders::ParticleFieldMaterial;
use crate::rpc::web_rpc::WebRpcInterface;

/// Mounts a page scene on every route entry and tears it down on exit.
pub struct PageScenePlugin;

impl Plugin for PageScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<ParticleFieldMaterial>::default())
            .init_resource::<PageLifecycle>()
            .init_resource::<InputSurface>();

        for route in Route::ALL {
            app.add_systems(OnEnter(route), mount_page_scene)
                .add_systems(OnExit(route), unmount_page_scene);
        }

        // Update strictly before present, every frame.
        app.add_systems(
            Update,
            (
                track_pointer,
                handle_viewport_resize,
                advance_page_scene,
                (
                    present_particle_field,
                    present_rocks,
                    present_ribbons,
                    present_camera,
                ),
            )
                .chain()
                .run_if(page_scene_active),
        );
    }
}

pub fn page_scene_active(lifecycle: Res<PageLifecycle>) -> bool {
    lifecycle.is_active()
}

#[allow(clippy::too_many_arguments)]
pub fn mount_page_scene(
    mut commands: Commands,
    route: Res<State<Route>>,
    configs: Res<PageSceneConfigs>,
    mut lifecycle: ResMut<PageLifecycle>,
    mut input: ResMut<InputSurface>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut particle_materials: ResMut<Assets<ParticleFieldMaterial>>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
    mut ambient: ResMut<AmbientLight>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let route = *route.get();
    let config = configs.get(route);
    let viewport = windows
        .single()
        .ok()
        .map(|window| Viewport::new(window.width(), window.height()));

    let outcome = lifecycle.mount(
        route,
        config.clone(),
        viewport,
        &mut input,
        &mut rand::thread_rng(),
    );

    match outcome {
        Ok(MountOutcome::Mounted) => {
            let (Some(page), Some(viewport)) = (lifecycle.current(), viewport) else {
                return;
            };
            let Some(scene) = page.scene() else {
                return;
            };

            let mut assets = SceneAssets {
                meshes: &mut meshes,
                particle_materials: &mut particle_materials,
                standard_materials: &mut standard_materials,
            };
            spawn_page_scene(
                &mut commands,
                &config,
                scene,
                viewport,
                &mut assets,
                &mut ambient,
            );

            info!(
                "Mounted {} scene {}: {} particles, {} rocks, {} ribbons",
                route.path(),
                page.id(),
                scene.particles.len(),
                scene.rocks.len(),
                scene.ribbons.len()
            );
            rpc_interface.send_notification(
                "scene_mounted",
                serde_json::json!({
                    "route": route.path(),
                    "instance": page.id().0,
                    "particles": scene.particles.len(),
                    "rocks": scene.rocks.len(),
                    "ribbons": scene.ribbons.len(),
                }),
            );
        }
        Ok(MountOutcome::Skipped) => {
            warn!("No render surface for {}, scene skipped", route.path());
            rpc_interface.send_notification(
                "scene_skipped",
                serde_json::json!({ "route": route.path() }),
            );
        }
        Err(err) => error!("Failed to mount {} scene: {}", route.path(), err),
    }
}

pub fn unmount_page_scene(
    mut commands: Commands,
    mut lifecycle: ResMut<PageLifecycle>,
    mut input: ResMut<InputSurface>,
    ambient: Option<ResMut<AmbientLight>>,
    entities: Query<Entity, With<PageSceneEntity>>,
) {
    if let Some(id) = lifecycle.unmount(&mut input) {
        info!("Unmounted scene {}", id);
    }

    for entity in &entities {
        commands.entity(entity).despawn();
    }
    // The next page sets its own level on mount; nothing stays lit in between.
    if let Some(mut ambient) = ambient {
        *ambient = AmbientLight::default();
    }
}

fn track_pointer(
    mut cursor_moved: EventReader<CursorMoved>,
    windows: Query<&Window>,
    input: Res<InputSurface>,
    mut lifecycle: ResMut<PageLifecycle>,
) {
    for event in cursor_moved.read() {
        let Ok(window) = windows.get(event.window) else {
            continue;
        };
        let viewport = Viewport::new(window.width(), window.height());
        lifecycle.dispatch_pointer(&input, event.position, viewport);
    }
}

fn handle_viewport_resize(
    mut resized: EventReader<WindowResized>,
    input: Res<InputSurface>,
    mut lifecycle: ResMut<PageLifecycle>,
    mut cameras: Query<&mut Projection, With<PageCamera>>,
) {
    for event in resized.read() {
        let viewport = Viewport::new(event.width, event.height);
        if !lifecycle.dispatch_resize(&input, viewport) {
            continue;
        }

        for mut projection in &mut cameras {
            if let Projection::Perspective(perspective) = projection.as_mut() {
                perspective.aspect_ratio = viewport.aspect();
            }
        }
    }
}

fn advance_page_scene(time: Res<Time>, mut lifecycle: ResMut<PageLifecycle>) {
    lifecycle.advance(time.delta_secs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmount_despawns_scene_entities_restores_ambient_and_releases_input() {
        let mut app = App::new();
        app.init_resource::<PageLifecycle>()
            .init_resource::<InputSurface>()
            .add_systems(Update, unmount_page_scene);

        let route = Route::Hero;
        app.world_mut()
            .resource_scope(|world, mut lifecycle: Mut<PageLifecycle>| {
                let mut input = world.resource_mut::<InputSurface>();
                lifecycle
                    .mount(
                        route,
                        route.default_scene(),
                        Some(Viewport::new(800.0, 600.0)),
                        &mut input,
                        &mut rand::thread_rng(),
                    )
                    .unwrap();
            });
        let scene_entity = app.world_mut().spawn(PageSceneEntity).id();
        let other_entity = app.world_mut().spawn_empty().id();
        app.insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 1234.0,
            ..default()
        });

        app.update();

        assert_eq!(
            app.world().resource::<AmbientLight>().brightness,
            AmbientLight::default().brightness
        );

        assert!(app.world().get_entity(scene_entity).is_err());
        assert!(app.world().get_entity(other_entity).is_ok());
        assert!(app.world().resource::<PageLifecycle>().current().is_none());
        assert_eq!(app.world().resource::<InputSurface>().owner(), None);
    }

    #[test]
    fn advance_runs_only_while_active() {
        let mut app = App::new();
        app.init_resource::<PageLifecycle>()
            .init_resource::<Time>()
            .add_systems(Update, advance_page_scene.run_if(page_scene_active));

        app.update();
        assert!(app.world().resource::<PageLifecycle>().current().is_none());

        let mut input = InputSurface::default();
        app.world_mut()
            .resource_mut::<PageLifecycle>()
            .mount(
                Route::About,
                Route::About.default_scene(),
                Some(Viewport::new(800.0, 600.0)),
                &mut input,
                &mut rand::thread_rng(),
            )
            .unwrap();

        app.update();
        app.update();
        let lifecycle = app.world().resource::<PageLifecycle>();
        assert_eq!(lifecycle.current().map(|page| page.frames_presented()), Some(2));
    }
}
