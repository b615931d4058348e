use bevy::prelude::*;
use constants::page_scene::PageSceneConfig;
use rand::Rng;

use super::error::{InstanceId, LifecycleError, LifecyclePhase};
use super::input_surface::{InputSurface, ListenerRegistration};
use crate::engine::camera::camera_rig::CameraRig;
use crate::engine::camera::pointer::{PointerState, Viewport};
use crate::engine::core::route::Route;
use crate::engine::field::motion::advance_field;
use crate::engine::field::particles::ParticleField;
use crate::engine::field::ribbons::RibbonInstance;
use crate::engine::field::rocks::RockInstance;

/// Everything a page scene simulates. Exists only while the page is active.
#[derive(Debug, Clone)]
pub struct SceneState {
    pub particles: ParticleField,
    pub rocks: Vec<RockInstance>,
    pub ribbons: Vec<RibbonInstance>,
    pub camera: CameraRig,
    pub pointer: PointerState,
    /// Seconds since mount.
    pub elapsed: f32,
    /// Set when the last update rewrote particle positions.
    pub particles_dirty: bool,
}

impl SceneState {
    pub fn generate<R: Rng>(config: &PageSceneConfig, rng: &mut R) -> Self {
        Self {
            particles: ParticleField::generate(&config.particles, rng),
            rocks: config
                .rocks
                .as_ref()
                .map(|rocks| RockInstance::generate_all(rocks, rng))
                .unwrap_or_default(),
            ribbons: config
                .ribbons
                .as_ref()
                .map(|ribbons| RibbonInstance::generate_all(ribbons, rng))
                .unwrap_or_default(),
            camera: CameraRig::from_config(&config.camera),
            pointer: PointerState::default(),
            elapsed: 0.0,
            particles_dirty: false,
        }
    }

    /// One frame of simulation. Rendering reads the result afterwards.
    pub fn update(&mut self, config: &PageSceneConfig, delta: f32) {
        self.elapsed += delta;
        self.particles_dirty =
            advance_field(&mut self.particles, &config.particles.motion, self.elapsed);

        for rock in &mut self.rocks {
            rock.spin();
        }

        if let Some(ribbons) = &config.ribbons {
            for ribbon in &mut self.ribbons {
                ribbon.advance(ribbons, self.elapsed);
            }
        }

        self.camera.ease(&self.pointer);
    }
}

/// Handle for the next scheduled frame. Taking it cancels the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    instance: InstanceId,
    sequence: u64,
}

impl FrameRequest {
    fn first(instance: InstanceId) -> Self {
        Self {
            instance,
            sequence: 0,
        }
    }

    fn next(self) -> Self {
        Self {
            sequence: self.sequence + 1,
            ..self
        }
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted,
    /// No renderable surface; the instance stays uninitialized.
    Skipped,
}

/// One mount of one page's scene.
#[derive(Debug)]
pub struct PageAnimation {
    id: InstanceId,
    route: Route,
    config: PageSceneConfig,
    phase: LifecyclePhase,
    viewport: Option<Viewport>,
    scene: Option<SceneState>,
    listeners: Option<ListenerRegistration>,
    pending_frame: Option<FrameRequest>,
    frames_presented: u64,
}

impl PageAnimation {
    pub fn new(id: InstanceId, route: Route, config: PageSceneConfig) -> Self {
        Self {
            id,
            route,
            config,
            phase: LifecyclePhase::Uninitialized,
            viewport: None,
            scene: None,
            listeners: None,
            pending_frame: None,
            frames_presented: 0,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn config(&self) -> &PageSceneConfig {
        &self.config
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn scene(&self) -> Option<&SceneState> {
        self.scene.as_ref()
    }

    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.pending_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Build the scene, take the input listeners and schedule the first frame.
    ///
    /// Without a renderable surface nothing is built and the instance stays
    /// `Uninitialized`. Listener registration happens before any scene
    /// state is generated, so a refused registration leaves nothing behind.
    pub fn mount<R: Rng>(
        &mut self,
        viewport: Option<Viewport>,
        input: &mut InputSurface,
        rng: &mut R,
    ) -> Result<MountOutcome, LifecycleError> {
        if self.phase != LifecyclePhase::Uninitialized {
            return Err(LifecycleError::InvalidTransition {
                phase: self.phase,
                action: "mount",
            });
        }

        let Some(viewport) = viewport.filter(Viewport::is_renderable) else {
            return Ok(MountOutcome::Skipped);
        };

        let registration = input.register(self.id)?;
        self.scene = Some(SceneState::generate(&self.config, rng));
        self.listeners = Some(registration);
        self.viewport = Some(viewport);
        self.pending_frame = Some(FrameRequest::first(self.id));
        self.phase = LifecyclePhase::Active;

        Ok(MountOutcome::Mounted)
    }

    /// Run one frame: update, then hand the state out for rendering.
    ///
    /// Returns `None` without touching anything unless the instance is
    /// active and still holds a frame request.
    pub fn advance(&mut self, delta: f32) -> Option<&SceneState> {
        if self.phase != LifecyclePhase::Active {
            return None;
        }

        let request = self.pending_frame.take()?;
        let scene = self.scene.as_mut()?;
        scene.update(&self.config, delta);
        self.frames_presented += 1;
        self.pending_frame = Some(request.next());

        self.scene.as_ref()
    }

    /// Record the latest pointer position. Ignored unless active.
    pub fn pointer_moved(&mut self, cursor: Vec2, viewport: Viewport) -> bool {
        if self.phase != LifecyclePhase::Active {
            return false;
        }

        match self.scene.as_mut() {
            Some(scene) => {
                scene.pointer = PointerState::from_cursor(cursor, viewport);
                true
            }
            None => false,
        }
    }

    /// Adopt a new surface size. Particle, rock and ribbon state is untouched.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if self.phase != LifecyclePhase::Active || !viewport.is_renderable() {
            return false;
        }

        self.viewport = Some(viewport);
        true
    }

    /// Cancel the pending frame, release listeners and drop the scene.
    ///
    /// Safe to call in any phase; returns false if already disposed.
    pub fn unmount(&mut self, input: &mut InputSurface) -> bool {
        if self.phase == LifecyclePhase::Disposed {
            return false;
        }

        self.pending_frame = None;
        if let Some(registration) = self.listeners.take() {
            if !input.unregister(registration) {
                warn!("Scene {} no longer owned the input listeners", self.id);
            }
        }
        self.scene = None;
        self.phase = LifecyclePhase::Disposed;

        true
    }
}
