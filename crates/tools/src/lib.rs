//! Developer Tooling: read-only field inspection for the desktop panel and CLI.
//!
//! # Invariants
//! - Tools never mutate the field.

mod inspector;

pub use inspector::{FieldInspector, FieldSummary, VoxelInfo};

pub fn crate_info() -> &'static str {
    "voxelfield-tools v0.1.0"
}
