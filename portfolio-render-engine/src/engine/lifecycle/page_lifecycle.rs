use bevy::prelude::*;
use constants::page_scene::PageSceneConfig;
use rand::Rng;

use super::error::{InstanceId, LifecycleError};
use super::input_surface::InputSurface;
use super::page_animation::{MountOutcome, PageAnimation, SceneState};
use crate::engine::camera::pointer::Viewport;
use crate::engine::core::route::Route;

/// Owns the one page animation that may be alive at a time.
#[derive(Resource, Debug, Default)]
pub struct PageLifecycle {
    current: Option<PageAnimation>,
    next_id: u64,
}

impl PageLifecycle {
    /// Mount a fresh instance for `route`, disposing any previous one first.
    pub fn mount<R: Rng>(
        &mut self,
        route: Route,
        config: PageSceneConfig,
        viewport: Option<Viewport>,
        input: &mut InputSurface,
        rng: &mut R,
    ) -> Result<MountOutcome, LifecycleError> {
        self.unmount(input);

        let id = InstanceId(self.next_id);
        self.next_id += 1;

        let mut page = PageAnimation::new(id, route, config);
        let outcome = page.mount(viewport, input, rng);
        self.current = Some(page);
        outcome
    }

    /// Dispose the current instance, if any, and return its id.
    pub fn unmount(&mut self, input: &mut InputSurface) -> Option<InstanceId> {
        let mut page = self.current.take()?;
        page.unmount(input);
        Some(page.id())
    }

    pub fn current(&self) -> Option<&PageAnimation> {
        self.current.as_ref()
    }

    pub fn scene(&self) -> Option<&SceneState> {
        self.current.as_ref().and_then(PageAnimation::scene)
    }

    pub fn is_active(&self) -> bool {
        self.scene().is_some()
    }

    pub fn advance(&mut self, delta: f32) -> Option<&SceneState> {
        self.current.as_mut()?.advance(delta)
    }

    /// Forward a pointer move, but only to the instance holding the listeners.
    pub fn dispatch_pointer(&mut self, input: &InputSurface, cursor: Vec2, viewport: Viewport) -> bool {
        match self.current.as_mut() {
            Some(page) if input.is_listening(page.id()) => page.pointer_moved(cursor, viewport),
            _ => false,
        }
    }

    pub fn dispatch_resize(&mut self, input: &InputSurface, viewport: Viewport) -> bool {
        match self.current.as_mut() {
            Some(page) if input.is_listening(page.id()) => page.resize(viewport),
            _ => false,
        }
    }
}
