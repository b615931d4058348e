use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use bevy::ui::IsDefaultUiCamera;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::core::route::initial_route;
use crate::engine::core::scene_configs::PageSceneConfigs;
use crate::engine::core::window_config::create_window_config;
use crate::engine::lifecycle::plugin::PageScenePlugin;
use crate::engine::loading::manifest_loader::{
    ManifestLoader, SceneManifest, apply_scene_manifest, start_loading,
};
use crate::engine::systems::fps_tracking::{FpsReporter, fps_notification_system};
use crate::overlay::cursor::CursorPlugin;
use crate::overlay::footer::FooterPlugin;
use crate::overlay::headline::HeadlinePlugin;
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{FpsText, fps_text_update_system};
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::navigation::keyboard_navigation;

pub fn create_app() -> App {
    let mut app = App::new();

    // Configs must exist before the initial route's OnEnter mounts a scene.
    app.add_plugins(create_default_plugins())
        .init_resource::<PageSceneConfigs>()
        .init_resource::<ManifestLoader>()
        .init_resource::<FpsReporter>()
        .insert_state(initial_route())
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["scenes.json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(PageScenePlugin)
        .add_plugins(HeadlinePlugin)
        .add_plugins(FooterPlugin)
        .add_plugins(CursorPlugin);

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(Update, (apply_scene_manifest, fps_notification_system));

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, (keyboard_navigation, fps_text_update_system));
    }

    app
}

/// Overlay camera. Draws UI above whichever page camera is live.
fn setup(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        IsDefaultUiCamera,
    ));

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands.spawn((
        Text::new("FPS: "),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1., 0., 0.)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        GlobalZIndex(10),
        FpsText,
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
