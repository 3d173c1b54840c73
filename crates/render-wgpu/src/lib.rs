//! wgpu render backend for the voxel field.
//!
//! Draws every voxel as an instance of one unit cube, placed by the model
//! matrix the kernel emits. The fly camera also supplies the matrices picking
//! unprojects through.
//!
//! # Invariants
//! - Renderer never mutates the field.
//! - Camera motion lives outside the kernel.

mod camera;
mod gpu;
mod shaders;

pub use camera::FlyCamera;
pub use gpu::WgpuRenderer;
