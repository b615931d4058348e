pub mod camera;
pub mod core;
pub mod field;
pub mod lifecycle;
pub mod loading;
pub mod scene;
pub mod shaders;
pub mod systems;
