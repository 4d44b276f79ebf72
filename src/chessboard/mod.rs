//! Decorative 3D chessboard: scene generation, an orbiting camera, a small
//! software projector and the canvas painter that puts it on screen.

pub mod camera;
pub mod geometry;
pub mod paint;
pub mod raster;
pub mod scene;

pub use camera::OrbitCamera;
pub use scene::{BoardScene, Rotation};
