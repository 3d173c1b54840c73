//! Shared value types for the voxel field workspace.
//!
//! # Invariants
//! - Types here carry no behavior beyond construction and validation.
//! - `Ray::direction` is always unit length.

pub mod config;
pub mod types;

pub use config::{ConfigError, FieldConfig, MotionParams};
pub use types::Ray;
