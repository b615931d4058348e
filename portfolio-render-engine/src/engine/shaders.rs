/// Particle field point material
use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};
use constants::page_scene::{FogConfig, ParticleStyle};

use crate::engine::scene::palette::hex_color;

/// Flat-coloured points, faded towards black between the fog distances.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct ParticleFieldMaterial {
    #[uniform(0)]
    pub color: LinearRgba,

    /// [size, opacity, fog start, fog end]
    #[uniform(1)]
    pub params: Vec4,

    pub alpha_mode: AlphaMode,
}

impl ParticleFieldMaterial {
    pub fn new(style: &ParticleStyle, fog: &FogConfig) -> Self {
        Self {
            color: hex_color(style.color, 1.0).to_linear(),
            params: Vec4::new(style.size, style.opacity, fog.start, fog.end),
            alpha_mode: if style.additive {
                AlphaMode::Add
            } else {
                AlphaMode::Blend
            },
        }
    }
}

impl Material for ParticleFieldMaterial {
    fn vertex_shader() -> ShaderRef {
        "./shaders/particle_field.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "./shaders/particle_field.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        self.alpha_mode
    }
}
