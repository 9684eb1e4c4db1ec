pub mod assets;
pub mod camera;
pub mod core;
pub mod geometry;
pub mod loading;
pub mod scene;
