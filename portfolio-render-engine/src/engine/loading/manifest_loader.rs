use std::collections::BTreeMap;

use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::page_scene::PageSceneConfig;
use constants::render_settings::SCENE_MANIFEST_PATH;
use serde::{Deserialize, Serialize};

use crate::engine::core::scene_configs::{ConfigError, PageSceneConfigs};

/// Per-route scene overrides, keyed by location path.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct SceneManifest {
    pub pages: BTreeMap<String, PageSceneConfig>,
}

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
    applied: bool,
}

pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    manifest_loader.handle = Some(asset_server.load(SCENE_MANIFEST_PATH));
}

/// Merge the manifest once it arrives. A missing or broken file keeps the defaults.
pub fn apply_scene_manifest(
    mut manifest_loader: ResMut<ManifestLoader>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SceneManifest>>,
    mut configs: ResMut<PageSceneConfigs>,
) {
    if manifest_loader.applied {
        return;
    }
    let Some(handle) = manifest_loader.handle.clone() else {
        return;
    };

    if let Some(manifest) = manifests.get(&handle) {
        let rejected = apply_manifest(manifest, &mut configs);
        info!(
            "Scene manifest applied: {} pages, {} rejected",
            manifest.pages.len() - rejected.len(),
            rejected.len()
        );
        manifest_loader.applied = true;
    } else if let Some(LoadState::Failed(err)) = asset_server.get_load_state(&handle) {
        warn!("Scene manifest unavailable, using compiled scenes: {}", err);
        manifest_loader.applied = true;
    }
}

/// Apply every valid entry; return the rejected paths with their reasons.
pub fn apply_manifest(
    manifest: &SceneManifest,
    configs: &mut PageSceneConfigs,
) -> Vec<(String, ConfigError)> {
    let mut rejected = Vec::new();
    for (path, config) in &manifest.pages {
        match configs.apply_override(path, config.clone()) {
            Ok(route) => debug!("Scene override for {}", route.path()),
            Err(err) => {
                warn!("Ignoring scene override for '{}': {}", path, err);
                rejected.push((path.clone(), err));
            }
        }
    }
    rejected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::route::Route;

    #[test]
    fn bundled_manifest_matches_compiled_scenes() {
        let manifest: SceneManifest =
            serde_json::from_str(include_str!("../../../assets/scenes/pages.scenes.json")).unwrap();

        assert_eq!(manifest.pages.len(), Route::ALL.len());
        for route in Route::ALL {
            assert_eq!(manifest.pages.get(route.path()), Some(&route.default_scene()));
        }
    }

    #[test]
    fn invalid_entries_are_skipped_individually() {
        let mut broken = Route::Contact.default_scene();
        broken.camera.near = -1.0;
        let mut tuned = Route::About.default_scene();
        tuned.particles.count = 300;

        let manifest = SceneManifest {
            pages: BTreeMap::from([
                ("/about".to_string(), tuned),
                ("/contact".to_string(), broken),
                ("/blog".to_string(), Route::Hero.default_scene()),
            ]),
        };
        let mut configs = PageSceneConfigs::default();
        let rejected = apply_manifest(&manifest, &mut configs);

        let paths: Vec<&str> = rejected.iter().map(|(path, _)| path.as_str()).collect();
        assert_eq!(paths, vec!["/blog", "/contact"]);
        assert_eq!(configs.get(Route::About).particles.count, 300);
        assert_eq!(configs.get(Route::Contact), Route::Contact.default_scene());
    }
}
