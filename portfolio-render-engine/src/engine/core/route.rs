use bevy::prelude::*;
use constants::page_scene::{self, PageSceneConfig};
use serde::{Deserialize, Serialize};

/// The five pages of the site. Exactly one is active at a time; switching
/// routes unmounts the previous page's scene before the next one mounts.
#[derive(
    States, Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Hero,
    About,
    Projects,
    Contact,
    Archive,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Hero,
        Route::About,
        Route::Projects,
        Route::Contact,
        Route::Archive,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Hero => "/",
            Self::About => "/about",
            Self::Projects => "/projects",
            Self::Contact => "/contact",
            Self::Archive => "/archive",
        }
    }

    /// Resolve a location path. Trailing slashes and case are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/').to_lowercase();
        match trimmed.as_str() {
            "" => Some(Self::Hero),
            "/about" => Some(Self::About),
            "/projects" => Some(Self::Projects),
            "/contact" => Some(Self::Contact),
            "/archive" => Some(Self::Archive),
            _ => None,
        }
    }

    /// Compiled scene parameters, used until the manifest overrides them.
    pub fn default_scene(&self) -> PageSceneConfig {
        match self {
            Self::Hero => page_scene::hero_scene(),
            Self::About => page_scene::about_scene(),
            Self::Projects => page_scene::projects_scene(),
            Self::Contact => page_scene::contact_scene(),
            Self::Archive => page_scene::archive_scene(),
        }
    }
}

/// Route to start on. The wasm build follows the browser location.
pub fn initial_route() -> Route {
    #[cfg(target_arch = "wasm32")]
    {
        let path = web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default();
        match Route::from_path(&path) {
            Some(route) => route,
            None => {
                warn!("Unknown start path '{}', falling back to /", path);
                Route::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Route::default()
    }
}
