//! WebGPU rendering module
//!
//! Draws every body as a lit box from a fixed perspective camera.

pub mod camera;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
