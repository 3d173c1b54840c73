//! Voxel field kernel: per-voxel motion, the owning chunk, and ray picking.
//!
//! # Invariants
//! - A voxel at rest has zero velocity, zero gravity and an identity transform.
//! - `moving` only ever goes from false to true.
//! - Voxels are independent: tick and impulse order across a chunk does not matter.
//! - Picking never mutates anything unless the ray hits a voxel.

pub mod chunk;
pub mod component;
pub mod field;
pub mod jitter;
pub mod pick;
pub mod voxel;

pub use chunk::{Chunk, RayHit};
pub use component::{Drawable, Tickable, TransformSink, VoxelInstance};
pub use field::{PickOutcome, VoxelField};
pub use jitter::{JitterSource, NoJitter, SeededJitter};
pub use pick::{CameraState, Viewport};
pub use voxel::Voxel;
